//! Log system core implementation
//!
//! All logging state lives in a single `LogCore` so that tests can build a
//! private instance while production code goes through `GLOBAL_LOG`.

use super::buffer::LogBuffer;
use super::config::{DEFAULT_CONSOLE_LEVEL, DEFAULT_LOG_LEVEL, LOG_BUFFER_CAPACITY};
use super::entry::LogEntry;
use super::level::LogLevel;
use crate::time::TimeSpec;
use core::fmt;
use core::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

use spin::RwLock;

/// Console output hook
///
/// The library has no console of its own. The host installs a sink and
/// every entry that passes the console level is handed to it.
pub type ConsoleSink = fn(&LogEntry);

/// Core logging system
///
/// Holds the ring buffer, the filtering state and the optional console sink.
pub struct LogCore {
    buffer: LogBuffer,

    /// Global log level threshold (controls buffering)
    global_level: AtomicU8,

    /// Console output level threshold (controls sink output)
    console_level: AtomicU8,

    next_seq: AtomicUsize,

    console: RwLock<Option<ConsoleSink>>,
}

impl LogCore {
    /// Creates a LogCore with the default levels (Info / Warning)
    ///
    /// ```rust,ignore
    /// static GLOBAL_LOG: LogCore = LogCore::default();
    /// ```
    pub const fn default() -> Self {
        Self::with_capacity(DEFAULT_LOG_LEVEL, DEFAULT_CONSOLE_LEVEL, LOG_BUFFER_CAPACITY)
    }

    /// Creates a LogCore with custom log levels
    pub const fn new(global_level: LogLevel, console_level: LogLevel) -> Self {
        Self::with_capacity(global_level, console_level, LOG_BUFFER_CAPACITY)
    }

    /// Creates a LogCore with custom levels and ring size
    pub const fn with_capacity(
        global_level: LogLevel,
        console_level: LogLevel,
        capacity: usize,
    ) -> Self {
        Self {
            buffer: LogBuffer::new(capacity),
            global_level: AtomicU8::new(global_level as u8),
            console_level: AtomicU8::new(console_level as u8),
            next_seq: AtomicUsize::new(0),
            console: RwLock::new(None),
        }
    }

    /// Core logging implementation
    ///
    /// 1. Early return if filtered by the global level
    /// 2. Create the entry (sequence number, timestamp, formatted message)
    /// 3. Push into the ring
    /// 4. Hand to the console sink if it meets the console level
    pub fn _log(&self, level: LogLevel, args: fmt::Arguments) {
        if !self.is_level_enabled(level) {
            return;
        }

        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let entry = LogEntry::from_args(seq, level, TimeSpec::now(), args);

        if self.is_console_level(level) {
            if let Some(sink) = *self.console.read() {
                sink(&entry);
            }
        }

        self.buffer.write(entry);
    }

    /// Reads the oldest unread entry
    pub fn _read_log(&self) -> Option<LogEntry> {
        self.buffer.read()
    }

    /// Returns the number of unread log entries
    pub fn _log_len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the count of logs dropped due to buffer overflow
    pub fn _log_dropped_count(&self) -> usize {
        self.buffer.dropped_count()
    }

    /// Sets the global log level threshold
    ///
    /// Logs with level > threshold will be discarded.
    pub fn _set_global_level(&self, level: LogLevel) {
        self.global_level.store(level as u8, Ordering::Release);
    }

    /// Gets the current global log level
    pub fn _get_global_level(&self) -> LogLevel {
        LogLevel::from_u8(self.global_level.load(Ordering::Acquire))
    }

    /// Sets the console output level threshold
    pub fn _set_console_level(&self, level: LogLevel) {
        self.console_level.store(level as u8, Ordering::Release);
    }

    /// Gets the current console output level
    pub fn _get_console_level(&self) -> LogLevel {
        LogLevel::from_u8(self.console_level.load(Ordering::Acquire))
    }

    /// Installs (or removes, with `None`) the console sink
    pub fn _set_console_sink(&self, sink: Option<ConsoleSink>) {
        *self.console.write() = sink;
    }

    /// Checks if a log level is enabled (global filter)
    #[inline(always)]
    pub fn is_level_enabled(&self, level: LogLevel) -> bool {
        level as u8 <= self.global_level.load(Ordering::Acquire)
    }

    #[inline(always)]
    fn is_console_level(&self, level: LogLevel) -> bool {
        level as u8 <= self.console_level.load(Ordering::Acquire)
    }
}
