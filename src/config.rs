//! Generation parameters.

/// Contamination events applied when the caller gives no count.
pub const DEFAULT_CONTAMINATIONS: u64 = 5;

/// Seed used for every run unless overridden.
pub const DEFAULT_SEED: u64 = 42;

/// Probability that a cell starts healthy rather than empty.
pub const HEALTHY_PROBABILITY: f64 = 0.8;

/// Configuration for one generation run.
///
/// `rows` and `cols` are kept exactly as the caller gave them, since the
/// header line echoes them back. Negative values generate no cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub rows: i64,
    pub cols: i64,
    /// Number of contamination events (draws with replacement).
    pub contaminations: u64,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            contaminations: DEFAULT_CONTAMINATIONS,
            seed: DEFAULT_SEED,
        }
    }
}

impl GeneratorConfig {
    pub fn new(rows: i64, cols: i64) -> Self {
        Self {
            rows,
            cols,
            ..Default::default()
        }
    }

    /// Number of rows actually generated.
    pub fn grid_rows(&self) -> usize {
        clamp_dimension(self.rows)
    }

    /// Number of cells per generated row.
    pub fn grid_cols(&self) -> usize {
        clamp_dimension(self.cols)
    }
}

fn clamp_dimension(n: i64) -> usize {
    usize::try_from(n.max(0)).unwrap_or(usize::MAX)
}
