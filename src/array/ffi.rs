// FFI bindings for the array module

use std::ffi::c_int;

use crate::error::or_sentinel;
use crate::ffi_types::{int_slice, int_slice_mut};

/// Sum of `size` ints at `arr`; 0 for null or non-positive `size`
///
/// # Safety
/// A non-null `arr` with positive `size` must point to `size` readable ints.
#[no_mangle]
pub unsafe extern "C" fn sum_array(arr: *const c_int, size: c_int) -> c_int {
    or_sentinel("sum_array", int_slice(arr, size).map(super::sum))
}

/// Double `size` ints at `arr` in place; null or non-positive `size` is a no-op
///
/// # Safety
/// A non-null `arr` with positive `size` must point to `size` writable ints
/// not accessed elsewhere during the call.
#[no_mangle]
pub unsafe extern "C" fn double_array(arr: *mut c_int, size: c_int) {
    or_sentinel(
        "double_array",
        int_slice_mut(arr, size).map(super::double_in_place),
    )
}
