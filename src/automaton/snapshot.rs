//! Owned copies of a generation handed out to callers.

use std::fmt;

/// A detached `width x height` grid of cell states.
///
/// Writes through `set` only touch this copy, never the engine it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<bool>, // row-major, y * width + x
}

impl Grid {
    pub(crate) fn from_cells(width: i32, height: i32, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), width as usize * height as usize);
        Self {
            width,
            height,
            cells,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width && y >= 0 && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Cell state; `false` outside the grid.
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|idx| self.cells[idx])
    }

    /// Overwrite a cell in this copy. Out-of-range coordinates are ignored.
    pub fn set(&mut self, x: i32, y: i32, alive: bool) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = alive;
        }
    }

    /// Count of alive cells in this copy.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of alive cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(idx, _)| ((idx % width) as i32, (idx / width) as i32))
    }

    /// Row-major cell states.
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width as usize) {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
