//! Bounded log ring
//!
//! Keeps the newest `capacity` entries. When full, the oldest entry is
//! evicted and counted as dropped.

use alloc::collections::VecDeque;
use core::sync::atomic::{AtomicUsize, Ordering};

use spin::Mutex;

use super::entry::LogEntry;

pub(super) struct LogBuffer {
    entries: Mutex<VecDeque<LogEntry>>,
    capacity: usize,
    dropped: AtomicUsize,
}

impl LogBuffer {
    pub(super) const fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::new()),
            capacity,
            dropped: AtomicUsize::new(0),
        }
    }

    pub(super) fn write(&self, entry: LogEntry) {
        let mut entries = self.entries.lock();
        if self.capacity == 0 {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            return;
        }
        while entries.len() >= self.capacity {
            entries.pop_front();
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
        entries.push_back(entry);
    }

    pub(super) fn read(&self) -> Option<LogEntry> {
        self.entries.lock().pop_front()
    }

    pub(super) fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub(super) fn dropped_count(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }
}
