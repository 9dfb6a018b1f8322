//! Engine sizing and the presentation defaults collaborators use.
//!
//! The engine itself only cares about rows and columns. The pixel constants
//! describe how a renderer maps its surface onto the grid.

use crate::error::EngineError;

/// Pixels per cell side.
pub const CELL_PIXEL_SIZE: u32 = 10;

/// Period of the stepping timer, in milliseconds.
pub const STEP_INTERVAL_MS: u64 = 40;

/// Rows used when there is no viewport to size from.
pub const DEFAULT_ROWS: i32 = 40;

/// Columns used when there is no viewport to size from.
pub const DEFAULT_COLUMNS: i32 = 60;

/// Validated grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    rows: i32,
    columns: i32,
}

impl EngineConfig {
    /// Build a config, rejecting non-positive dimensions.
    pub fn new(rows: i32, columns: i32) -> Result<Self, EngineError> {
        if rows <= 0 || columns <= 0 {
            return Err(EngineError::InvalidDimensions {
                height: rows,
                width: columns,
            });
        }
        Ok(Self { rows, columns })
    }

    /// Size a grid to fill a `pixel_width x pixel_height` surface.
    ///
    /// Partial cells at the right and bottom edges are dropped.
    ///
    /// # Errors
    /// `InvalidCellSize` for a zero cell size, `ViewportTooLarge` if either
    /// dimension exceeds `i32::MAX` cells, `InvalidDimensions` if the
    /// viewport is smaller than one cell.
    pub fn from_viewport(
        pixel_width: u32,
        pixel_height: u32,
        cell_pixel_size: u32,
    ) -> Result<Self, EngineError> {
        if cell_pixel_size == 0 {
            return Err(EngineError::InvalidCellSize(cell_pixel_size));
        }
        let too_large = |_: std::num::TryFromIntError| EngineError::ViewportTooLarge {
            pixel_width,
            pixel_height,
        };
        let rows = i32::try_from(pixel_height / cell_pixel_size).map_err(too_large)?;
        let columns = i32::try_from(pixel_width / cell_pixel_size).map_err(too_large)?;
        Self::new(rows, columns)
    }

    /// Number of grid rows.
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of grid columns.
    pub fn columns(&self) -> i32 {
        self.columns
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
        }
    }
}

/// Map a pointer coordinate to a grid coordinate.
///
/// Truncates toward zero, so the result may lie outside the grid; the
/// engine ignores writes there.
#[inline]
pub fn pixel_to_cell(pixel: i32, cell_pixel_size: u32) -> i32 {
    let size = i32::try_from(cell_pixel_size).unwrap_or(i32::MAX).max(1);
    pixel / size
}
