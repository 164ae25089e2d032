//! Whole-array reductions and in-place transforms over `i32` slices.
//!
//! Both operations wrap on overflow.

pub mod ffi;

pub fn sum(items: &[i32]) -> i32 {
    items.iter().fold(0i32, |acc, &x| acc.wrapping_add(x))
}

/// Multiply every element by two without changing the slice length.
pub fn double_in_place(items: &mut [i32]) {
    for item in items.iter_mut() {
        *item = item.wrapping_mul(2);
    }
}
