//! Caller-supplied binary operations.
//!
//! [`BinaryOp`] is the capability a caller hands in. The library invokes
//! it synchronously, exactly once per call, and never keeps hold of it.

pub mod ffi;

use crate::ffi_types::MathCallback;

/// A two-argument integer operation supplied by the caller.
pub trait BinaryOp {
    fn apply(&self, a: i32, b: i32) -> i32;
}

impl<F> BinaryOp for F
where
    F: Fn(i32, i32) -> i32,
{
    fn apply(&self, a: i32, b: i32) -> i32 {
        self(a, b)
    }
}

/// A C function pointer wrapped as a [`BinaryOp`].
#[derive(Clone, Copy)]
pub struct ForeignOp(MathCallback);

impl ForeignOp {
    /// # Safety
    /// `callback` must be safe to call with any pair of ints.
    pub unsafe fn new(callback: MathCallback) -> Self {
        Self(callback)
    }
}

impl BinaryOp for ForeignOp {
    fn apply(&self, a: i32, b: i32) -> i32 {
        // SAFETY: upheld by the contract of `ForeignOp::new`
        unsafe { (self.0)(a, b) }
    }
}

/// Run `op` on `a` and `b`, or return 0 when no operation is given.
pub fn apply_operation(a: i32, b: i32, op: Option<&dyn BinaryOp>) -> i32 {
    match op {
        Some(op) => op.apply(a, b),
        None => 0,
    }
}
