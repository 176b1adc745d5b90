pub mod cell;
pub mod config;
pub mod grid;
pub mod output;
pub mod rng;

use config::GeneratorConfig;
use grid::Grid;

/// Generate the grid text for an `n` x `m` grid with `k` contamination
/// events, seeded with `seed`.
///
/// The result is the full file: header line, then `n` rows of `m` cells.
/// For fixed arguments the text is identical on every run and platform.
pub fn generate(n: i64, m: i64, k: u64, seed: u64) -> String {
    let config = GeneratorConfig {
        rows: n,
        cols: m,
        contaminations: k,
        seed,
    };
    let grid = Grid::generate(&config);
    output::render((config.rows, config.cols), &grid)
}
