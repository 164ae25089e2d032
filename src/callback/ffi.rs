// FFI bindings for the callback module

use std::ffi::c_int;

use super::ForeignOp;
use crate::ffi_types::MathCallback;

/// Invoke `callback(a, b)` once, or return 0 for a null callback
///
/// # Safety
/// A non-null `callback` must be a valid function of the C signature
/// `int (*)(int, int)`.
#[no_mangle]
pub unsafe extern "C" fn apply_operation(
    a: c_int,
    b: c_int,
    callback: Option<MathCallback>,
) -> c_int {
    match callback {
        Some(callback) => {
            let op = ForeignOp::new(callback);
            super::apply_operation(a, b, Some(&op))
        }
        None => {
            log::debug!("apply_operation: null callback, returning sentinel");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    extern "C" fn c_add(a: c_int, b: c_int) -> c_int {
        a.wrapping_add(b)
    }

    extern "C" fn c_max(a: c_int, b: c_int) -> c_int {
        a.max(b)
    }

    unsafe extern "C" fn c_subtract(a: c_int, b: c_int) -> c_int {
        a.wrapping_sub(b)
    }

    #[test]
    fn test_apply_operation_callbacks() {
        unsafe {
            assert_eq!(apply_operation(2, 3, Some(c_add)), 5);
            assert_eq!(apply_operation(-1, -9, Some(c_max)), -1);
            assert_eq!(apply_operation(10, 4, Some(c_subtract)), 6);
        }
    }

    #[test]
    fn test_apply_operation_null() {
        assert_eq!(unsafe { apply_operation(2, 3, None) }, 0);
    }
}
