// FFI bindings for the text module

use std::ffi::{c_char, c_int};

use crate::error::or_sentinel;
use crate::ffi_types::{c_str, c_str_bytes_mut};

/// Pointer to the static version string. Callers must not free it.
#[no_mangle]
pub extern "C" fn get_version() -> *const c_char {
    super::VERSION_NUL.as_ptr().cast()
}

/// Length of a C string in bytes, or 0 for null
///
/// Lengths past `INT_MAX` saturate.
///
/// # Safety
/// A non-null `s` must point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn string_length(s: *const c_char) -> c_int {
    or_sentinel(
        "string_length",
        c_str(s).map(|s| c_int::try_from(super::length(s)).unwrap_or(c_int::MAX)),
    )
}

/// Reverse a C string in place; null or empty strings are left alone
///
/// # Safety
/// A non-null `s` must point to a writable NUL-terminated buffer that no
/// one else touches during the call.
#[no_mangle]
pub unsafe extern "C" fn reverse_string(s: *mut c_char) {
    or_sentinel(
        "reverse_string",
        c_str_bytes_mut(s).map(super::reverse_in_place),
    )
}
