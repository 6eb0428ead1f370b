use super::config::MAX_LOG_MESSAGE_LENGTH;
use super::level::LogLevel;
use crate::time::TimeSpec;
use alloc::string::String;
use core::fmt::{self, Write};

/// A single log record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    seq: usize,
    level: LogLevel,
    timestamp: TimeSpec,
    message: String,
}

impl LogEntry {
    /// Formats `args` into a new entry, truncating the message to
    /// `MAX_LOG_MESSAGE_LENGTH` bytes on a character boundary
    pub fn from_args(
        seq: usize,
        level: LogLevel,
        timestamp: TimeSpec,
        args: fmt::Arguments,
    ) -> Self {
        let mut writer = MessageWriter {
            buffer: String::new(),
        };
        let _ = writer.write_fmt(args);

        Self {
            seq,
            level,
            timestamp,
            message: writer.buffer,
        }
    }

    /// Message text
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Priority of this entry
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Monotonic sequence number assigned by the logger
    pub fn seq(&self) -> usize {
        self.seq
    }

    /// Time the entry was recorded
    pub fn timestamp(&self) -> TimeSpec {
        self.timestamp
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:>6}.{:06}] {} {}",
            self.timestamp.sec,
            self.timestamp.nsec / 1000,
            self.level.as_str(),
            self.message()
        )
    }
}

/// a helper that stops accepting text once MAX_LOG_MESSAGE_LENGTH is reached
struct MessageWriter {
    buffer: String,
}

impl Write for MessageWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let remaining = MAX_LOG_MESSAGE_LENGTH - self.buffer.len();
        if s.len() <= remaining {
            self.buffer.push_str(s);
            return Ok(());
        }
        let mut cut = remaining;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        self.buffer.push_str(&s[..cut]);
        Ok(())
    }
}
