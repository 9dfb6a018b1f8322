//! Generation stepping with the classic B3/S23 rules.

use log::trace;

use super::grid::{count_neighbors, index_of};
use crate::engine::GridEngine;

/// Next state of one cell given its current state and neighbor count.
///
/// - Birth: a dead cell with exactly 3 neighbors becomes alive
/// - Death: an alive cell with fewer than 2 or more than 3 neighbors dies
/// - Otherwise the cell keeps its state
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (false, 3) => true,
        (true, n) if !(2..=3).contains(&n) => false,
        (state, _) => state,
    }
}

/// Step the automaton forward by one generation.
///
/// The next generation is computed into a fresh buffer from the current one
/// and then swapped in, so no partially updated grid is ever visible.
pub fn step_automaton(engine: &mut GridEngine) {
    let mut next_cells = vec![false; engine.cells.len()];

    for y in 0..engine.height {
        for x in 0..engine.width {
            let idx = index_of(engine, x, y);
            let neighbors = count_neighbors(engine, x, y);
            next_cells[idx] = next_state(engine.cells[idx], neighbors);
        }
    }

    engine.cells = next_cells;
    engine.generation += 1;

    trace!(
        "generation {} population {}",
        engine.generation,
        engine.population()
    );
}
