// FFI bindings for the geometry module

use super::Point;
use crate::error::or_sentinel;
use crate::ffi_types::{deref, deref_mut};

/// Distance between two points, or 0.0 if either is null
///
/// # Safety
/// Non-null pointers must reference valid `Point`s. They may alias.
#[no_mangle]
pub unsafe extern "C" fn distance(p1: *mut Point, p2: *mut Point) -> f64 {
    let result = deref(p1.cast_const())
        .and_then(|a| deref(p2.cast_const()).map(|b| super::distance(a, b)));
    or_sentinel("distance", result)
}

/// Shift `p` in place; a null `p` is ignored
///
/// # Safety
/// A non-null `p` must reference a writable `Point` not accessed elsewhere
/// during the call.
#[no_mangle]
pub unsafe extern "C" fn translate_point(p: *mut Point, dx: f64, dy: f64) {
    or_sentinel(
        "translate_point",
        deref_mut(p).map(|p| super::translate(p, dx, dy)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_distance_ffi() {
        let mut a = Point::new(0.0, 0.0);
        let mut b = Point::new(3.0, 4.0);
        assert_eq!(unsafe { distance(&mut a, &mut b) }, 5.0);
    }

    #[test]
    fn test_distance_same_pointer() {
        let mut a = Point::new(7.0, -2.0);
        let p: *mut Point = &mut a;
        assert_eq!(unsafe { distance(p, p) }, 0.0);
    }

    #[test]
    fn test_distance_null() {
        let mut a = Point::new(1.0, 1.0);
        unsafe {
            assert_eq!(distance(ptr::null_mut(), &mut a), 0.0);
            assert_eq!(distance(&mut a, ptr::null_mut()), 0.0);
            assert_eq!(distance(ptr::null_mut(), ptr::null_mut()), 0.0);
        }
    }

    #[test]
    fn test_translate_point_ffi() {
        let mut p = Point::new(1.0, 1.0);
        unsafe {
            translate_point(&mut p, 2.0, 3.0);
            translate_point(ptr::null_mut(), 2.0, 3.0);
        }
        assert_eq!(p, Point::new(3.0, 4.0));
    }
}
