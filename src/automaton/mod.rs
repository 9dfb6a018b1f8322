//! Core automaton logic and grid operations.
//!
//! This module holds the cell arithmetic, the seed pattern, the stepping
//! rule and the snapshot type. `GridEngine` and the FFI layer in `ffi/`
//! call into these functions.

pub mod grid;
pub mod seed;
pub mod snapshot;
pub mod stepping;

pub use grid::{count_neighbors, in_bounds, wrap};
pub(crate) use grid::{index_of, write_cell};
pub(crate) use seed::seed_pattern;
pub use seed::SEED_OFFSETS;
pub use snapshot::Grid;
pub use stepping::{next_state, step_automaton};
