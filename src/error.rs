//! Error kinds raised inside the library.
//!
//! None of these ever reach a foreign caller. Each exported entry point
//! collapses a failure into the fixed sentinel for its return type via
//! [`or_sentinel`], so C sees `0`, `0.0` or a silent no-op.

use std::ffi::c_int;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    #[error("null pointer")]
    NullPointer,

    #[error("division by zero")]
    DivisionByZero,

    #[error("invalid element count: {0}")]
    InvalidLength(c_int),
}

/// The in-band value an entry point returns in place of an error.
pub trait Sentinel {
    fn sentinel() -> Self;
}

impl Sentinel for c_int {
    fn sentinel() -> Self {
        0
    }
}

impl Sentinel for f64 {
    fn sentinel() -> Self {
        0.0
    }
}

impl Sentinel for () {
    fn sentinel() -> Self {}
}

/// Unwrap `result`, or log the failure against `entry` and hand back the sentinel.
pub fn or_sentinel<T: Sentinel>(entry: &'static str, result: Result<T, MathError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            log::debug!("{}: {}, returning sentinel", entry, err);
            T::sentinel()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels() {
        assert_eq!(<c_int as Sentinel>::sentinel(), 0);
        assert_eq!(<f64 as Sentinel>::sentinel(), 0.0);
    }

    #[test]
    fn test_or_sentinel_passes_values_through() {
        assert_eq!(or_sentinel("test", Ok::<c_int, _>(7)), 7);
        assert_eq!(or_sentinel("test", Ok::<f64, _>(2.5)), 2.5);
    }

    #[test]
    fn test_or_sentinel_on_error() {
        assert_eq!(or_sentinel::<c_int>("test", Err(MathError::NullPointer)), 0);
        assert_eq!(or_sentinel::<f64>("test", Err(MathError::DivisionByZero)), 0.0);
        or_sentinel::<()>("test", Err(MathError::InvalidLength(-1)));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(MathError::NullPointer.to_string(), "null pointer");
        assert_eq!(MathError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            MathError::InvalidLength(-3).to_string(),
            "invalid element count: -3"
        );
    }
}
