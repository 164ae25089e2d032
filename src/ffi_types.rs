// FFI-compatible type definitions and raw pointer conversions
//
// Every exported function funnels its pointer arguments through these
// helpers, so null checks and length validation live in one place.

use std::ffi::{c_char, c_int, CStr};
use std::slice;

use crate::error::MathError;

/// C function pointer type for a binary integer operation.
///
/// ```c
/// typedef int (*math_callback)(int a, int b);
/// ```
pub type MathCallback = unsafe extern "C" fn(c_int, c_int) -> c_int;

/// Borrow the value behind a possibly-null const pointer.
///
/// # Safety
/// A non-null `ptr` must be valid for reads for the lifetime `'a`.
pub unsafe fn deref<'a, T>(ptr: *const T) -> Result<&'a T, MathError> {
    ptr.as_ref().ok_or(MathError::NullPointer)
}

/// Mutably borrow the value behind a possibly-null pointer.
///
/// # Safety
/// A non-null `ptr` must be valid for reads and writes, and not aliased,
/// for the lifetime `'a`.
pub unsafe fn deref_mut<'a, T>(ptr: *mut T) -> Result<&'a mut T, MathError> {
    ptr.as_mut().ok_or(MathError::NullPointer)
}

fn element_count(count: c_int) -> Result<usize, MathError> {
    if count <= 0 {
        return Err(MathError::InvalidLength(count));
    }
    usize::try_from(count).map_err(|_| MathError::InvalidLength(count))
}

/// View `count` C ints starting at `ptr`.
///
/// # Safety
/// A non-null `ptr` with positive `count` must point to `count` readable ints.
pub unsafe fn int_slice<'a>(ptr: *const c_int, count: c_int) -> Result<&'a [c_int], MathError> {
    if ptr.is_null() {
        return Err(MathError::NullPointer);
    }
    let len = element_count(count)?;
    Ok(slice::from_raw_parts(ptr, len))
}

/// Mutably view `count` C ints starting at `ptr`.
///
/// # Safety
/// A non-null `ptr` with positive `count` must point to `count` writable,
/// unaliased ints.
pub unsafe fn int_slice_mut<'a>(
    ptr: *mut c_int,
    count: c_int,
) -> Result<&'a mut [c_int], MathError> {
    if ptr.is_null() {
        return Err(MathError::NullPointer);
    }
    let len = element_count(count)?;
    Ok(slice::from_raw_parts_mut(ptr, len))
}

/// Borrow a NUL-terminated C string.
///
/// # Safety
/// A non-null `ptr` must point to a NUL-terminated string that outlives `'a`.
pub unsafe fn c_str<'a>(ptr: *const c_char) -> Result<&'a CStr, MathError> {
    if ptr.is_null() {
        return Err(MathError::NullPointer);
    }
    Ok(CStr::from_ptr(ptr))
}

/// Mutably borrow the bytes of a NUL-terminated C string, terminator excluded.
///
/// The returned slice covers exactly the existing content; the caller's
/// buffer capacity beyond the terminator is never touched.
///
/// # Safety
/// A non-null `ptr` must point to a writable, NUL-terminated, unaliased buffer.
pub unsafe fn c_str_bytes_mut<'a>(ptr: *mut c_char) -> Result<&'a mut [u8], MathError> {
    if ptr.is_null() {
        return Err(MathError::NullPointer);
    }
    let len = libc::strlen(ptr);
    Ok(slice::from_raw_parts_mut(ptr.cast::<u8>(), len))
}
