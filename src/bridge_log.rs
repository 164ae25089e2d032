//! Bridge logging channel
//!
//! Backs the `log` facade with a sink that foreign code opens and closes
//! through C-ABI functions. Until a sink is opened every record is dropped,
//! so a caller that never asks for diagnostics pays nothing.

use std::ffi::{c_char, c_int, CStr};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use anyhow::{Context, Result};
use log::{LevelFilter, Log, Metadata, Record};

use crate::config::LogOptions;
use crate::logging::LogLevel;
use crate::text::VERSION;

enum Sink {
    Stderr,
    File(File),
}

impl Sink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        match self {
            Sink::Stderr => writeln!(io::stderr().lock(), "{}", line),
            Sink::File(file) => {
                writeln!(file, "{}", line)?;
                // Flush immediately so a crashing host still leaves the trail
                file.flush()
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Stderr => io::stderr().flush(),
            Sink::File(file) => file.flush(),
        }
    }
}

// Global sink protected by a mutex; the library itself is otherwise stateless
static SINK: Mutex<Option<Sink>> = Mutex::new(None);

static LOGGER: BridgeLogger = BridgeLogger;

// Set once `LOGGER` has been handed to `log::set_logger`
static INSTALLED: AtomicBool = AtomicBool::new(false);

struct BridgeLogger;

impl Log for BridgeLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());
        if let Some(sink) = lock_sink().as_mut() {
            let _ = sink.write_line(&line);
        }
    }

    fn flush(&self) {
        if let Some(sink) = lock_sink().as_mut() {
            let _ = sink.flush();
        }
    }
}

fn lock_sink() -> MutexGuard<'static, Option<Sink>> {
    SINK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Open the sink described by `options` and route `log` records to it.
///
/// Calling this again replaces the sink and level. Fails if some other
/// logger already owns the `log` facade, since records would never reach
/// the sink.
pub fn init(options: &LogOptions) -> Result<()> {
    let mut guard = lock_sink();
    if !INSTALLED.load(Ordering::Acquire) {
        log::set_logger(&LOGGER)
            .map_err(|_| anyhow::anyhow!("Another logger is already installed"))?;
        INSTALLED.store(true, Ordering::Release);
    }

    let sink = match &options.file {
        Some(path) => Sink::File(
            File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?,
        ),
        None => Sink::Stderr,
    };
    *guard = Some(sink);
    drop(guard);

    log::set_max_level(options.level.level_filter());
    log::info!("{} logging initialized at {:?}", VERSION, options.level);
    Ok(())
}

/// Write a raw line to the open sink.
pub fn write_message(message: &str) -> Result<()> {
    let mut guard = lock_sink();
    let sink = guard.as_mut().context("Logging is not initialized")?;
    sink.write_line(message).context("Failed to write log message")
}

/// Whether a sink is currently open
pub fn is_active() -> bool {
    lock_sink().is_some()
}

/// Stop logging and close the sink.
///
/// The global `log` level is only reset when the bridge logger owns it.
pub fn shutdown() {
    if INSTALLED.load(Ordering::Acquire) {
        log::set_max_level(LevelFilter::Off);
    }
    if let Some(mut sink) = lock_sink().take() {
        let _ = sink.flush();
    }
}

/// Initialize bridge logging.
///
/// A null `path` logs to stderr. `level` uses the [`LogLevel`] codes.
/// Returns 0 on success, -1 on failure.
///
/// # Safety
/// A non-null `path` must be a valid NUL-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn mathlib_log_init(path: *const c_char, level: c_int) -> c_int {
    let file = if path.is_null() {
        None
    } else {
        match CStr::from_ptr(path).to_str() {
            Ok(s) => Some(PathBuf::from(s)),
            Err(_) => {
                let _ = writeln!(io::stderr(), "mathlib_log_init: log path is not valid UTF-8");
                return -1;
            }
        }
    };

    let options = LogOptions {
        file,
        level: LogLevel::from_i32(level),
    };
    match init(&options) {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(io::stderr(), "mathlib_log_init: {:#}", e);
            -1
        }
    }
}

/// Initialize bridge logging from `MATHLIB_LOG_FILE` and `MATHLIB_LOG_LEVEL`.
///
/// Returns 0 on success, -1 on failure.
#[no_mangle]
pub extern "C" fn mathlib_log_init_from_env() -> c_int {
    match LogOptions::from_env().and_then(|options| init(&options)) {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(io::stderr(), "mathlib_log_init_from_env: {:#}", e);
            -1
        }
    }
}

/// Log a message to the bridge log.
///
/// # Safety
/// The message pointer must be a valid null-terminated C string.
///
/// Returns 0 on success, -1 on failure.
#[no_mangle]
pub unsafe extern "C" fn mathlib_log_message(message: *const c_char) -> c_int {
    if message.is_null() {
        return -1;
    }

    let message_str = match CStr::from_ptr(message).to_str() {
        Ok(s) => s,
        Err(_) => return -1,
    };

    match write_message(message_str) {
        Ok(()) => 0,
        Err(_) => -1,
    }
}

/// Flush and close the bridge log.
#[no_mangle]
pub extern "C" fn mathlib_log_shutdown() {
    shutdown();
}
