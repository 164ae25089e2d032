// MathLib: arithmetic, string, struct, callback and array utilities
// exported over the C ABI for cross-language binding tests.

pub mod array;
pub mod arith;
pub mod bridge_log;
pub mod callback;
pub mod config;
pub mod error;
pub mod ffi_types;
pub mod geometry;
pub mod logging;
pub mod text;

pub use callback::{BinaryOp, ForeignOp};
pub use config::LogOptions;
pub use error::MathError;
pub use geometry::Point;
pub use logging::LogLevel;
pub use text::VERSION;
