use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, warn};
use std::io::{self, BufWriter, Write};

use contagrid::config::{DEFAULT_CONTAMINATIONS, DEFAULT_SEED, GeneratorConfig};
use contagrid::grid::Grid;

#[derive(Parser)]
#[command(
    name = "contagrid",
    about = "Generate a seeded input grid for the contamination simulation",
    version,
    allow_negative_numbers = true
)]
struct Cli {
    /// N M [num_contaminados]; arguments after the third are ignored
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    args: Vec<String>,

    /// Seed for the random stream (non-negative; must precede N)
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

fn parse_int(value: &str, name: &str) -> Result<i64> {
    value
        .trim()
        .parse()
        .with_context(|| format!("invalid {name}: {value:?} is not an integer"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.args.len() < 2 {
        let program = std::env::args().next().unwrap_or_else(|| "contagrid".to_string());
        println!("Uso: {program} N M [num_contaminados]");
        std::process::exit(1);
    }

    let rows = parse_int(&cli.args[0], "N")?;
    let cols = parse_int(&cli.args[1], "M")?;
    let contaminations = match cli.args.get(2) {
        None => DEFAULT_CONTAMINATIONS,
        Some(arg) => match parse_int(arg, "num_contaminados")? {
            k if k < 0 => {
                warn!("negative contamination count {k}; applying none");
                0
            }
            k => k as u64,
        },
    };
    if cli.args.len() > 3 {
        debug!("ignoring extra arguments: {:?}", &cli.args[3..]);
    }

    let config = GeneratorConfig {
        rows,
        cols,
        contaminations,
        seed: cli.seed,
    };
    debug!("{config:?}");

    let grid = Grid::generate(&config);

    let stdout = io::stdout().lock();
    let mut out = BufWriter::with_capacity(64 * 1024, stdout);
    contagrid::output::write_grid(&mut out, (config.rows, config.cols), &grid)
        .context("failed to write grid")?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
