use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Environment variable naming the log file
pub const LOG_FILE_VAR: &str = "MATHLIB_LOG_FILE";

/// Environment variable holding the log level, by name or number
pub const LOG_LEVEL_VAR: &str = "MATHLIB_LOG_LEVEL";

/// Diagnostics settings for the bridge logger
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogOptions {
    /// Destination file; stderr when unset
    pub file: Option<PathBuf>,
    pub level: LogLevel,
}

impl LogOptions {
    /// Read options from `MATHLIB_LOG_FILE` and `MATHLIB_LOG_LEVEL`
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var(LOG_FILE_VAR).ok(),
            std::env::var(LOG_LEVEL_VAR).ok(),
        )
    }

    /// Build options from raw variable values
    pub fn from_vars(file: Option<String>, level: Option<String>) -> Result<Self> {
        let file = file.filter(|f| !f.trim().is_empty()).map(PathBuf::from);
        let level = match level {
            Some(raw) if !raw.trim().is_empty() => {
                parse_log_level(&raw).with_context(|| format!("Invalid {}", LOG_LEVEL_VAR))?
            }
            _ => LogLevel::default(),
        };
        Ok(Self { file, level })
    }
}

/// Parse a level name (`error`, `warn`, `info`, ...) or its numeric code
pub fn parse_log_level(s: &str) -> Result<LogLevel> {
    let s = s.trim();
    if let Ok(n) = s.parse::<i32>() {
        if !(0..=5).contains(&n) {
            anyhow::bail!("Log level out of range (0 to 5): {}", n);
        }
        return Ok(LogLevel::from_i32(n));
    }

    match s.to_ascii_lowercase().as_str() {
        "off" | "nothing" | "none" => Ok(LogLevel::Nothing),
        "error" => Ok(LogLevel::Error),
        "warn" | "warning" => Ok(LogLevel::Warning),
        "info" => Ok(LogLevel::Info),
        "debug" => Ok(LogLevel::Debug),
        "all" | "trace" => Ok(LogLevel::All),
        other => anyhow::bail!("Unknown log level '{}'", other),
    }
}
