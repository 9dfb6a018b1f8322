//! Engine creation, destruction, and dimension/generation queries.

use log::error;

use crate::engine::GridEngine;

/// Creates a seeded engine with `height` rows and `width` columns.
///
/// # Returns
/// A pointer to a new GridEngine, or null if either dimension is not positive.
///
/// # Safety
/// The returned pointer must eventually be freed with `lg_destroy()`.
#[no_mangle]
pub extern "C" fn lg_create(height: i32, width: i32) -> *mut GridEngine {
    match GridEngine::new(height, width) {
        Ok(engine) => Box::into_raw(Box::new(engine)),
        Err(err) => {
            error!("lg_create rejected: {err}");
            std::ptr::null_mut()
        }
    }
}

/// Destroys an engine and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `lg_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn lg_destroy(ptr: *mut GridEngine) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to a GridEngine, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn lg_get_generation(ptr: *const GridEngine) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}

/// Number of columns, or 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a GridEngine, or null
#[no_mangle]
pub unsafe extern "C" fn lg_width(ptr: *const GridEngine) -> i32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).width()
}

/// Number of rows, or 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a GridEngine, or null
#[no_mangle]
pub unsafe extern "C" fn lg_height(ptr: *const GridEngine) -> i32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).height()
}
