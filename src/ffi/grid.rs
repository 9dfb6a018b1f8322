//! Cell access, stepping, and snapshot export.

use crate::engine::GridEngine;

/// Sets a cell to alive (non-zero) or dead (0).
///
/// # Safety
/// - `ptr` must be a valid pointer to a GridEngine, or null
///
/// Out-of-bounds coordinates are silently ignored.
#[no_mangle]
pub unsafe extern "C" fn lg_set_cell(ptr: *mut GridEngine, x: i32, y: i32, alive: u8) {
    if ptr.is_null() {
        return;
    }

    let engine = &mut *ptr;
    engine.set_cell(x, y, alive != 0);
}

/// Gets the state of a cell (0 = dead, 1 = alive).
///
/// # Safety
/// - `ptr` must be a valid pointer to a GridEngine, or null
///
/// # Returns
/// 0 if out of bounds, null pointer, or dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn lg_get_cell(ptr: *const GridEngine, x: i32, y: i32) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    u8::from((*ptr).is_alive(x, y))
}

/// Advances the automaton by one generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a GridEngine, or null
#[no_mangle]
pub unsafe extern "C" fn lg_step(ptr: *mut GridEngine) {
    if ptr.is_null() {
        return;
    }

    let engine = &mut *ptr;
    engine.step();
}

/// Copies the current generation into a caller-owned buffer.
///
/// # Layout
/// Row-major: y changes slowest, x changes fastest. 1 = alive, 0 = dead.
///
/// # Safety
/// - `ptr` must be a valid pointer to a GridEngine, or null
/// - `out_buf` must point to at least `buf_len` writable bytes, or be null
///
/// # Returns
/// Number of bytes written (`width * height`), or 0 on error or if the
/// buffer is too small.
#[no_mangle]
pub unsafe extern "C" fn lg_snapshot(
    ptr: *const GridEngine,
    out_buf: *mut u8,
    buf_len: usize,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let snapshot = (*ptr).current_generation();
    let cells = snapshot.as_slice();
    if buf_len < cells.len() {
        return 0;
    }

    let buf_slice = std::slice::from_raw_parts_mut(out_buf, cells.len());
    for (dst, &alive) in buf_slice.iter_mut().zip(cells) {
        *dst = u8::from(alive);
    }
    cells.len() as u64
}
