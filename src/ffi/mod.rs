//! C FFI layer for external renderers.
//!
//! This module exports C ABI functions so a host UI can drive the engine.
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in `engine` and `automaton`. These functions are thin
//! wrappers that handle null checks, pointer safety, and C-to-Rust conversions.

pub mod grid;
pub mod lifecycle;

pub use grid::{lg_get_cell, lg_set_cell, lg_snapshot, lg_step};
pub use lifecycle::{lg_create, lg_destroy, lg_get_generation, lg_height, lg_width};
