//! Log levels shared with the C interface.

use log::LevelFilter;

/// Log levels as passed across the C boundary
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Nothing = 0,
    Error = 1,
    Warning = 2,
    Info = 3,
    Debug = 4,
    All = 5,
}

impl LogLevel {
    /// Create a LogLevel from an integer; unknown values fall back to Info
    pub fn from_i32(level: i32) -> Self {
        match level {
            0 => LogLevel::Nothing,
            1 => LogLevel::Error,
            2 => LogLevel::Warning,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            5 => LogLevel::All,
            _ => LogLevel::Info,
        }
    }

    /// Get the integer representation for the C interface
    pub fn as_i32(&self) -> i32 {
        *self as i32
    }

    /// The `log` crate filter this level enables
    pub fn level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Nothing => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::All => LevelFilter::Trace,
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_i32() {
        assert_eq!(LogLevel::from_i32(0), LogLevel::Nothing);
        assert_eq!(LogLevel::from_i32(1), LogLevel::Error);
        assert_eq!(LogLevel::from_i32(2), LogLevel::Warning);
        assert_eq!(LogLevel::from_i32(3), LogLevel::Info);
        assert_eq!(LogLevel::from_i32(4), LogLevel::Debug);
        assert_eq!(LogLevel::from_i32(5), LogLevel::All);
    }

    #[test]
    fn test_log_level_as_i32() {
        for raw in 0..=5 {
            assert_eq!(LogLevel::from_i32(raw).as_i32(), raw);
        }
    }

    #[test]
    fn test_log_level_invalid() {
        // Invalid values should default to Info
        assert_eq!(LogLevel::from_i32(100), LogLevel::Info);
        assert_eq!(LogLevel::from_i32(-1), LogLevel::Info);
    }

    #[test]
    fn test_level_filter() {
        assert_eq!(LogLevel::Nothing.level_filter(), LevelFilter::Off);
        assert_eq!(LogLevel::Warning.level_filter(), LevelFilter::Warn);
        assert_eq!(LogLevel::All.level_filter(), LevelFilter::Trace);
    }
}
