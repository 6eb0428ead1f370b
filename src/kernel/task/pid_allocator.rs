//! 简单的进程ID分配器实现

use core::sync::atomic::{AtomicU32, Ordering};

/// 简单的进程ID分配器。
/// 每次调用 `allocate` 返回一个新的候选 PID。
/// PID 从 2 开始递增（PID 1 保留给 init 进程）。
#[derive(Debug)]
pub struct PidAllocator {
    next_pid: AtomicU32,
}

impl PidAllocator {
    /// 创建一个新的 PidAllocator 实例。
    pub const fn new() -> Self {
        PidAllocator {
            next_pid: AtomicU32::new(2), // 从2开始，PID 1保留给init进程
        }
    }

    /// 分配一个新的进程ID。
    pub fn allocate(&self) -> u32 {
        self.next_pid.fetch_add(1, Ordering::SeqCst)
    }
}

impl Default for PidAllocator {
    fn default() -> Self {
        Self::new()
    }
}
