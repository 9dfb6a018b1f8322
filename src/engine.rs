//! The generation-stepping engine and its public API.

use log::debug;

use crate::automaton::{self, Grid};
use crate::config::EngineConfig;
use crate::error::EngineError;

/// A fixed-size toroidal Life grid plus its generation counter.
///
/// Cells live in a flat row-major buffer (`y * width + x`). The buffer is
/// replaced wholesale on every step; point writes go to it in place.
#[derive(Debug)]
pub struct GridEngine {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) cells: Vec<bool>,
    pub(crate) generation: u64,
}

impl GridEngine {
    /// Build a `width x height` engine seeded with the starting pattern.
    ///
    /// # Errors
    /// `EngineError::InvalidDimensions` if either dimension is not positive.
    pub fn new(height: i32, width: i32) -> Result<Self, EngineError> {
        let config = EngineConfig::new(height, width)?;
        Ok(Self::from_config(&config))
    }

    /// Build an engine from already validated dimensions.
    pub fn from_config(config: &EngineConfig) -> Self {
        let mut engine = Self::blank(config.rows(), config.columns());
        let placed = automaton::seed_pattern(&mut engine);
        debug!(
            "created {}x{} grid, seeded {} cells",
            engine.width, engine.height, placed
        );
        engine
    }

    /// All-dead grid with no seed. Callers guarantee positive dimensions.
    pub(crate) fn blank(height: i32, width: i32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![false; size],
            generation: 0,
        }
    }

    /// Advance one generation.
    pub fn step(&mut self) {
        automaton::step_automaton(self);
    }

    /// Independent copy of the current cells.
    pub fn current_generation(&self) -> Grid {
        Grid::from_cells(self.width, self.height, self.cells.clone())
    }

    /// Number of completed steps since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of columns, fixed at construction.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows, fixed at construction.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Count of alive cells in the current generation.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Read a cell; out-of-range coordinates read as dead.
    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        automaton::in_bounds(self, x, y) && self.cells[automaton::index_of(self, x, y)]
    }

    /// Alive cells among the 8 wrapped neighbors of `(x, y)`.
    ///
    /// Out-of-range coordinates have no neighbors, matching `is_alive`.
    pub fn count_neighbors(&self, x: i32, y: i32) -> u8 {
        automaton::count_neighbors(self, x, y)
    }

    /// Set a cell alive or dead. Out-of-range coordinates are ignored.
    pub fn set_cell(&mut self, x: i32, y: i32, alive: bool) {
        automaton::write_cell(self, x, y, alive);
    }

    /// Make a cell alive. Out-of-range coordinates are ignored.
    pub fn add_cell(&mut self, x: i32, y: i32) {
        self.set_cell(x, y, true);
    }

    /// Make a cell dead. Out-of-range coordinates are ignored.
    pub fn remove_cell(&mut self, x: i32, y: i32) {
        self.set_cell(x, y, false);
    }
}
