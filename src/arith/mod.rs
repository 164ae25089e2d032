//! Integer and floating point arithmetic.
//!
//! Integer operations wrap on overflow the way two's-complement hardware
//! does. Division masks a zero divisor by returning `0.0`.

pub mod ffi;

use crate::error::MathError;

pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

pub fn subtract(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`, yielding `0.0` for either signed zero divisor.
pub fn divide(a: f64, b: f64) -> f64 {
    checked_divide(a, b).unwrap_or(0.0)
}

/// Divide `a` by `b`, surfacing a zero divisor as an error.
pub fn checked_divide(a: f64, b: f64) -> Result<f64, MathError> {
    // -0.0 == 0.0 holds, so both zeros land here
    if b == 0.0 {
        return Err(MathError::DivisionByZero);
    }
    Ok(a / b)
}
