//! 同步原语
//!
//! 向其它模块提供基本的锁：
//! - [`SpinLock`]: 基于 [`RawSpinLock`] 的互斥自旋锁（`lock_api::Mutex`）
//! - [`RwLock`]: 读写锁，允许多个读者或单个写者
mod raw_spin_lock;

pub use raw_spin_lock::RawSpinLock;
pub use spin::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// 互斥自旋锁
pub type SpinLock<T> = lock_api::Mutex<RawSpinLock, T>;

/// [`SpinLock`] 的 RAII 保护器
pub type SpinLockGuard<'a, T> = lock_api::MutexGuard<'a, RawSpinLock, T>;
