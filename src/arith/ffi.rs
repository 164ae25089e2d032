// FFI bindings for the arithmetic module

use std::ffi::c_int;

#[no_mangle]
pub extern "C" fn add(a: c_int, b: c_int) -> c_int {
    super::add(a, b)
}

#[no_mangle]
pub extern "C" fn subtract(a: c_int, b: c_int) -> c_int {
    super::subtract(a, b)
}

#[no_mangle]
pub extern "C" fn multiply_double(a: f64, b: f64) -> f64 {
    super::multiply(a, b)
}

/// Returns 0.0 instead of infinity or NaN when `b` is zero
#[no_mangle]
pub extern "C" fn divide_double(a: f64, b: f64) -> f64 {
    crate::error::or_sentinel("divide_double", super::checked_divide(a, b))
}
