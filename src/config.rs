//! constants and mount options for ptreefs

use crate::vfs::FileMode;

/// 每个内容缓冲区的默认容量（含结尾的 NUL）
pub const MAX_FILE_SIZE: usize = 4096;

/// statfs 报告的块大小
pub const BLOCK_SIZE: usize = 4096;

/// 文件系统魔数，作为 statfs 的 fsid
pub const PTREEFS_MAGIC: u64 = 0xFEED_BEEF;

/// 目录 inode 报告的大小
pub const DIR_REPORTED_SIZE: usize = 64;

/// 单个目录项名称的最大长度
pub const MAX_NAME_LEN: usize = 255;

/// 每个进程目录下的描述文件名
pub const INFO_FILE_NAME: &str = "proc_info.txt";

/// 进程没有控制终端时写入的占位符
pub const TTY_PLACEHOLDER: &str = "NA";

/// 进程名缓冲区长度（含结尾 NUL），与 Linux 的 TASK_COMM_LEN 一致
pub const TASK_COMM_LEN: usize = 16;

/// 根目录的 inode 编号
pub const ROOT_INODE_NO: usize = 1;

/// 目录默认权限：dr-xr-xr-x
pub const DEFAULT_MODE_DIR: FileMode = FileMode::from_bits_truncate(0o555 | FileMode::S_IFDIR.bits());

/// 文件默认权限：-r--r--r--
pub const DEFAULT_MODE_FILE: FileMode =
    FileMode::from_bits_truncate(0o444 | FileMode::S_IFREG.bits());

/// 初始内容超过缓冲区容量时的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OversizePolicy {
    /// 截断到 `capacity - 1` 字节
    #[default]
    Truncate,
    /// 拒绝创建，返回 `FsError::FileTooLarge`
    Reject,
}

/// 挂载选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountOptions {
    /// 允许同时存在的 inode 上限（含根目录），0 表示无限制
    pub max_inodes: usize,
    /// 每个文件内容缓冲区的容量
    pub file_capacity: usize,
    /// 初始内容过长时的策略
    pub oversize: OversizePolicy,
}

impl MountOptions {
    /// 默认选项：无 inode 上限，4096 字节缓冲区，截断过长内容
    pub const fn new() -> Self {
        Self {
            max_inodes: 0,
            file_capacity: MAX_FILE_SIZE,
            oversize: OversizePolicy::Truncate,
        }
    }

    /// 设置 inode 上限
    pub const fn with_max_inodes(mut self, max_inodes: usize) -> Self {
        self.max_inodes = max_inodes;
        self
    }

    /// 设置内容缓冲区容量，至少为 1（只容纳结尾的 NUL）
    pub const fn with_file_capacity(mut self, capacity: usize) -> Self {
        self.file_capacity = if capacity == 0 { 1 } else { capacity };
        self
    }

    /// 设置过长内容的处理策略
    pub const fn with_oversize(mut self, oversize: OversizePolicy) -> Self {
        self.oversize = oversize;
        self
    }
}

impl Default for MountOptions {
    fn default() -> Self {
        Self::new()
    }
}
