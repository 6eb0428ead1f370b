//! Logging subsystem
//!
//! Kernel-style logging with two thresholds:
//!
//! - the global level decides whether an entry is recorded in the ring
//! - the console level decides whether it is also handed to the console sink
//!
//! The ring keeps the most recent entries; older ones are evicted and
//! counted in [`log_dropped_count`].

mod buffer;
pub mod config;
mod entry;
mod level;
mod log_core;
pub mod macros;

#[cfg(test)]
mod tests;

pub use entry::LogEntry;
pub use level::LogLevel;
pub use log_core::{ConsoleSink, LogCore};

static GLOBAL_LOG: LogCore = LogCore::default();

/// Entry point used by the `pr_*` macros
pub fn log_impl(level: LogLevel, args: core::fmt::Arguments) {
    GLOBAL_LOG._log(level, args);
}

/// Checks the global level; used by the macros before formatting
#[inline(always)]
pub fn is_level_enabled(level: LogLevel) -> bool {
    GLOBAL_LOG.is_level_enabled(level)
}

/// Reads the oldest unread entry from the global ring
pub fn read_log() -> Option<LogEntry> {
    GLOBAL_LOG._read_log()
}

/// Number of unread entries in the global ring
pub fn log_len() -> usize {
    GLOBAL_LOG._log_len()
}

/// Number of entries evicted from the global ring
pub fn log_dropped_count() -> usize {
    GLOBAL_LOG._log_dropped_count()
}

/// Sets the global log level
pub fn set_global_level(level: LogLevel) {
    GLOBAL_LOG._set_global_level(level);
}

/// Gets the global log level
pub fn get_global_level() -> LogLevel {
    GLOBAL_LOG._get_global_level()
}

/// Sets the console level
pub fn set_console_level(level: LogLevel) {
    GLOBAL_LOG._set_console_level(level);
}

/// Gets the console level
pub fn get_console_level() -> LogLevel {
    GLOBAL_LOG._get_console_level()
}

/// Installs the console sink
pub fn set_console_sink(sink: ConsoleSink) {
    GLOBAL_LOG._set_console_sink(Some(sink));
}

/// Removes the console sink; entries are still buffered
pub fn clear_console_sink() {
    GLOBAL_LOG._set_console_sink(None);
}
