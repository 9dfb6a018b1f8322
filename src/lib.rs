//! Toroidal Life - a fixed-size Game of Life engine on a wrapped grid.
//!
//! `GridEngine` owns the cells and the generation counter. The `ffi` module
//! exposes the same operations through a C ABI for host renderers.

pub mod automaton;
pub mod config;
pub mod engine;
pub mod error;
pub mod ffi;

pub use automaton::Grid;
pub use config::EngineConfig;
pub use engine::GridEngine;
pub use error::EngineError;

#[cfg(test)]
mod tests;
