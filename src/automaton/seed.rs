//! The fixed starting pattern placed on every new grid.

use super::grid::write_cell;
use crate::engine::GridEngine;

/// Offsets of the seed cells from the grid center.
pub const SEED_OFFSETS: [(i32, i32); 10] = [
    (0, 0),
    (0, 4),
    (1, 1),
    (1, 2),
    (1, 3),
    (-1, 1),
    (-1, 2),
    (-1, 3),
    (-2, 2),
    (2, 2),
];

/// Place the seed pattern around `(width / 2, height / 2)`.
///
/// Seed positions are not wrapped; any that fall off a small grid are skipped.
///
/// # Returns
/// Number of cells actually placed.
pub(crate) fn seed_pattern(engine: &mut GridEngine) -> usize {
    let cx = engine.width / 2;
    let cy = engine.height / 2;

    let mut placed = 0;
    for &(dx, dy) in &SEED_OFFSETS {
        if write_cell(engine, cx + dx, cy + dy, true) {
            placed += 1;
        }
    }
    placed
}
