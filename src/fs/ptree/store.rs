//! 节点存储
//!
//! 同一个 ptreefs 实例的所有 inode 共享一个 `NodeStore`：
//! 分配 inode 编号、统计存活 inode 数量、执行 inode 上限，
//! 并保存挂载者凭证与内容缓冲区策略。

use core::sync::atomic::{AtomicUsize, Ordering};

use alloc::sync::Arc;

use crate::config::{MountOptions, OversizePolicy, ROOT_INODE_NO};
use crate::kernel::task::Credential;
use crate::vfs::FsError;

/// 节点存储
#[derive(Debug)]
pub struct NodeStore {
    /// 下一个 inode 编号
    next_inode_no: AtomicUsize,

    /// 当前存活的 inode 数量
    live_inodes: AtomicUsize,

    /// 最大允许的 inode 数量（0 表示无限制）
    max_inodes: usize,

    /// 每个节点的 uid/gid 来源
    cred: Credential,

    file_capacity: usize,
    oversize: OversizePolicy,
}

impl NodeStore {
    /// 按挂载选项创建存储
    pub fn new(options: &MountOptions, cred: Credential) -> Arc<Self> {
        Arc::new(Self {
            next_inode_no: AtomicUsize::new(ROOT_INODE_NO),
            live_inodes: AtomicUsize::new(0),
            max_inodes: options.max_inodes,
            cred,
            file_capacity: options.file_capacity.max(1),
            oversize: options.oversize,
        })
    }

    /// 预留一个 inode，返回其编号
    ///
    /// 存活数量达到上限时返回 `OutOfMemory`，不消耗编号。
    pub(super) fn reserve(&self) -> Result<usize, FsError> {
        let max = self.max_inodes;
        self.live_inodes
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |live| {
                if max != 0 && live >= max {
                    None
                } else {
                    Some(live + 1)
                }
            })
            .map_err(|_| FsError::OutOfMemory)?;
        Ok(self.next_inode_no.fetch_add(1, Ordering::Relaxed))
    }

    /// 归还一个 inode
    pub(super) fn release(&self) {
        self.live_inodes.fetch_sub(1, Ordering::AcqRel);
    }

    /// 当前存活的 inode 数量
    pub fn live_inodes(&self) -> usize {
        self.live_inodes.load(Ordering::Acquire)
    }

    /// inode 上限，0 表示无限制
    pub fn max_inodes(&self) -> usize {
        self.max_inodes
    }

    /// 挂载者凭证
    pub fn cred(&self) -> Credential {
        self.cred
    }

    /// 每个文件内容缓冲区的容量
    pub fn file_capacity(&self) -> usize {
        self.file_capacity
    }

    /// 初始内容过长时的策略
    pub fn oversize(&self) -> OversizePolicy {
        self.oversize
    }
}
