//! Cell indexing, bounds checks and toroidal neighbor counting.

use log::trace;

use crate::engine::GridEngine;

/// Calculate the linear index for a 2D coordinate.
///
/// Callers check `in_bounds` first.
#[inline]
pub(crate) fn index_of(engine: &GridEngine, x: i32, y: i32) -> usize {
    y as usize * engine.width as usize + x as usize
}

/// Check if coordinates are within grid bounds.
#[inline]
pub fn in_bounds(engine: &GridEngine, x: i32, y: i32) -> bool {
    x >= 0 && x < engine.width && y >= 0 && y < engine.height
}

/// Wrap `coord + offset` onto `[0, dimension)`.
#[inline]
pub fn wrap(coord: i32, offset: i32, dimension: i32) -> i32 {
    (i64::from(coord) + i64::from(offset)).rem_euclid(i64::from(dimension)) as i32
}

/// Count alive cells among the 8 toroidal neighbors of `(x, y)`.
///
/// Any wrapped position that lands back on `(x, y)` is skipped, so a cell
/// never counts itself on grids one cell wide or tall. Cells outside the
/// grid have no neighbors.
pub fn count_neighbors(engine: &GridEngine, x: i32, y: i32) -> u8 {
    if !in_bounds(engine, x, y) {
        return 0;
    }

    let mut count = 0;

    for dy in -1..=1 {
        for dx in -1..=1 {
            let nx = wrap(x, dx, engine.width);
            let ny = wrap(y, dy, engine.height);

            if nx == x && ny == y {
                continue;
            }

            if engine.cells[index_of(engine, nx, ny)] {
                count += 1;
            }
        }
    }

    count
}

/// Write a cell if it is on the grid.
///
/// # Returns
/// `false` when the coordinates are out of range and nothing changed.
pub(crate) fn write_cell(engine: &mut GridEngine, x: i32, y: i32, alive: bool) -> bool {
    if !in_bounds(engine, x, y) {
        trace!("ignoring write to ({x}, {y}) outside {}x{}", engine.width, engine.height);
        return false;
    }

    let idx = index_of(engine, x, y);
    engine.cells[idx] = alive;
    true
}
