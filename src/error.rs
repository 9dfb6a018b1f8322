//! Error type for engine construction.

use thiserror::Error;

/// Errors raised while building an engine or its configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Both dimensions must be strictly positive.
    #[error("grid dimensions must be positive, got {height} rows x {width} columns")]
    InvalidDimensions { height: i32, width: i32 },
    /// The viewport holds more rows or columns than an `i32` can index.
    #[error("viewport {pixel_width}x{pixel_height} px yields more than i32::MAX rows or columns")]
    ViewportTooLarge { pixel_width: u32, pixel_height: u32 },
    /// A viewport can't be divided into zero-sized cells.
    #[error("cell pixel size must be non-zero, got {0}")]
    InvalidCellSize(u32),
}
