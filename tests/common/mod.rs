/// Shared test utilities for the integration tests.
///
/// Runs the `contagrid` binary built by cargo and parses its output back
/// into a header and rows of integer tokens.
use std::process::{Command, Output, Stdio};

/// Run contagrid with the given args. Returns the full Output.
pub fn run_contagrid(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_contagrid"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("failed to run contagrid")
}

/// Run contagrid, assert success, and return stdout.
pub fn contagrid_ok(args: &[&str]) -> String {
    let output = run_contagrid(args);
    assert!(
        output.status.success(),
        "contagrid {args:?} exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("contagrid output was not valid UTF-8")
}

/// Parsed grid text.
pub struct Parsed {
    pub header: (i64, i64),
    pub rows: Vec<Vec<i64>>,
}

/// Parse grid text. Panics on malformed input so tests fail loudly.
pub fn parse_grid(text: &str) -> Parsed {
    assert!(text.ends_with('\n'), "output must end with a newline");
    let mut lines = text.lines();
    let header_line = lines.next().expect("missing header line");
    let header: Vec<i64> = header_line
        .split(' ')
        .map(|t| t.parse().expect("header token is not an integer"))
        .collect();
    assert_eq!(header.len(), 2, "header must be `N M`: {header_line:?}");

    let rows = lines
        .map(|line| {
            if line.is_empty() {
                return Vec::new();
            }
            line.split(' ')
                .map(|t| t.parse().expect("cell token is not an integer"))
                .collect()
        })
        .collect();
    Parsed {
        header: (header[0], header[1]),
        rows,
    }
}

pub fn count_contaminated(parsed: &Parsed) -> usize {
    parsed
        .rows
        .iter()
        .flatten()
        .filter(|&&v| v == -1)
        .count()
}
