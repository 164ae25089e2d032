//! Version string and byte-string helpers.
//!
//! Lengths and reversal work on bytes, matching `strlen` semantics. A
//! multi-byte UTF-8 sequence is therefore reversed byte by byte.

pub mod ffi;

use std::ffi::CStr;

macro_rules! version_literal {
    () => {
        "MathLib v1.0.0"
    };
}

/// Library identification string
pub const VERSION: &str = version_literal!();

/// [`VERSION`] with its NUL terminator, handed out to C as static storage
pub(crate) const VERSION_NUL: &[u8] = concat!(version_literal!(), "\0").as_bytes();

pub fn version() -> &'static str {
    VERSION
}

/// Number of bytes before the terminator
pub fn length(s: &CStr) -> usize {
    s.to_bytes().len()
}

/// Reverse `buf` in place. Capacity and length are unchanged.
pub fn reverse_in_place(buf: &mut [u8]) {
    buf.reverse();
}
