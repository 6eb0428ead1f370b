//! VFS 错误类型
//!
//! 定义了与 POSIX 兼容的文件系统错误码，可通过 [`FsError::to_errno()`] 转换为系统调用错误码。

/// VFS 错误类型
///
/// 各错误码对应标准 POSIX errno 值。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsError {
    // 文件/目录相关
    /// -ENOENT(2): 文件不存在
    NotFound,
    /// -EEXIST(17): 文件已存在
    AlreadyExists,
    /// -ENOTDIR(20): 不是目录
    NotDirectory,
    /// -EISDIR(21): 是目录
    IsDirectory,

    // 权限相关
    /// -EACCES(13): 权限被拒绝
    PermissionDenied,

    // 文件描述符相关
    /// -EBADF(9): 无效的文件描述符
    BadFileDescriptor,

    // 参数相关
    /// -EINVAL(22): 无效参数
    InvalidArgument,
    /// -ENAMETOOLONG(36): 文件名过长
    NameTooLong,
    /// -EFBIG(27): 内容超过文件容量
    FileTooLarge,

    // 资源相关
    /// -ENOMEM(12): 内存或 inode 配额耗尽
    OutOfMemory,
    /// -EBUSY(16): 资源正忙（例如重复填充）
    Busy,
    /// -EIO(5): I/O 错误
    IoError,

    // 其他
    /// -ENOTSUP(95): 操作不支持
    NotSupported,
}

impl FsError {
    /// 转换为系统调用错误码（负数）
    pub fn to_errno(&self) -> isize {
        match self {
            FsError::NotFound => -2,
            FsError::IoError => -5,
            FsError::BadFileDescriptor => -9,
            FsError::OutOfMemory => -12,
            FsError::PermissionDenied => -13,
            FsError::Busy => -16,
            FsError::AlreadyExists => -17,
            FsError::NotDirectory => -20,
            FsError::IsDirectory => -21,
            FsError::InvalidArgument => -22,
            FsError::FileTooLarge => -27,
            FsError::NameTooLong => -36,
            FsError::NotSupported => -95,
        }
    }
}
