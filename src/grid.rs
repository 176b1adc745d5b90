//! Grid construction.
//!
//! A grid is built in two passes over one random stream: a fill pass that
//! draws one float per cell in row-major order, then a contamination pass
//! that draws a row and a column per event and overwrites that cell. Draw
//! order is fixed; reordering either pass changes the output for a seed.

use log::{debug, warn};
use rand::RngCore;

use crate::cell::Cell;
use crate::config::{GeneratorConfig, HEALTHY_PROBABILITY};
use crate::rng::{Draws, Mt19937};

/// Rectangular grid of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

/// Cell counts by state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Census {
    pub healthy: usize,
    pub empty: usize,
    pub contaminated: usize,
}

impl Grid {
    /// Fill pass: each cell is healthy with probability 0.8, else empty.
    pub fn populate<R: RngCore + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let mut cells = Vec::with_capacity(rows.saturating_mul(cols));
        for _ in 0..rows {
            for _ in 0..cols {
                let cell = if rng.unit_f64() < HEALTHY_PROBABILITY {
                    Cell::Healthy
                } else {
                    Cell::Empty
                };
                cells.push(cell);
            }
        }
        Self { rows, cols, cells }
    }

    /// Contamination pass: `count` events, each drawing a row in
    /// `[0, rows)` then a column in `[0, cols)` and overwriting that cell
    /// unconditionally. Coordinates are drawn with replacement, so events
    /// may land on the same cell.
    pub fn contaminate<R: RngCore + ?Sized>(&mut self, count: u64, rng: &mut R) {
        if count == 0 {
            return;
        }
        if self.cells.is_empty() {
            warn!(
                "grid {}x{} has no cells; skipping {count} contamination event(s)",
                self.rows, self.cols
            );
            return;
        }
        let max_row = (self.rows - 1) as u64;
        let max_col = (self.cols - 1) as u64;
        for _ in 0..count {
            let r = rng.int_in(0, max_row) as usize;
            let c = rng.int_in(0, max_col) as usize;
            self.cells[r * self.cols + c] = Cell::Contaminated;
        }
    }

    /// Build a grid from `config`, seeding a fresh generator with `config.seed`.
    pub fn generate(config: &GeneratorConfig) -> Self {
        let mut rng = Mt19937::from_int(config.seed);
        Self::generate_with(config, &mut rng)
    }

    /// Build a grid from `config` drawing from `rng`. `config.seed` is ignored.
    pub fn generate_with<R: RngCore + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Self {
        let mut grid = Self::populate(config.grid_rows(), config.grid_cols(), rng);
        grid.contaminate(config.contaminations, rng);
        debug!(
            "generated {}x{} grid with {} contamination event(s): {:?}",
            grid.rows,
            grid.cols,
            config.contaminations,
            grid.census()
        );
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Iterate rows as slices. Yields `rows()` slices even when `cols()` is 0.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.rows).map(move |r| &self.cells[r * self.cols..(r + 1) * self.cols])
    }

    pub fn census(&self) -> Census {
        let mut census = Census::default();
        for cell in &self.cells {
            match cell {
                Cell::Healthy => census.healthy += 1,
                Cell::Empty => census.empty += 1,
                Cell::Contaminated => census.contaminated += 1,
            }
        }
        census
    }
}
