//! 普通文件（Regular File）的 File trait 实现

use crate::sync::SpinLock;
use crate::vfs::{File, FsError, Inode, InodeMetadata, OpenFlags, SeekWhence};
use alloc::sync::Arc;

/// 普通文件的 File 实现
///
/// 对底层 Inode 的会话包装，维护：
/// - 当前文件偏移量（offset）
/// - 打开标志位（O_RDONLY/O_WRONLY/O_APPEND 等）
///
/// `offset` 和 `flags` 使用 `SpinLock` 保护，同一会话可能被多个线程共享。
pub struct RegFile {
    inode: Arc<dyn Inode>,
    offset: SpinLock<usize>,
    flags: SpinLock<OpenFlags>,
}

impl RegFile {
    /// 创建新的 RegFile 实例
    pub fn new(inode: Arc<dyn Inode>, flags: OpenFlags) -> Self {
        Self {
            inode,
            offset: SpinLock::new(0),
            flags: SpinLock::new(flags),
        }
    }

    /// 获取底层 inode 引用
    pub fn inode(&self) -> Arc<dyn Inode> {
        self.inode.clone()
    }
}

impl File for RegFile {
    fn readable(&self) -> bool {
        self.flags.lock().readable()
    }

    fn writable(&self) -> bool {
        self.flags.lock().writable()
    }

    fn read(&self, buf: &mut [u8]) -> Result<usize, FsError> {
        if !self.readable() {
            return Err(FsError::PermissionDenied);
        }

        let mut offset_guard = self.offset.lock();
        let current_offset = *offset_guard;

        let nread = self.inode.read_at(current_offset, buf)?;
        *offset_guard = current_offset + nread;

        Ok(nread)
    }

    fn write(&self, buf: &[u8]) -> Result<usize, FsError> {
        if !self.writable() {
            return Err(FsError::PermissionDenied);
        }

        let mut offset_guard = self.offset.lock();
        if self.flags.lock().contains(OpenFlags::O_APPEND) {
            // 末尾位置由 inode 在写锁内确定
            let (nwritten, end) = self.inode.append(buf)?;
            *offset_guard = end;
            return Ok(nwritten);
        }

        let write_offset = *offset_guard;
        let nwritten = self.inode.write_at(write_offset, buf)?;
        *offset_guard = write_offset + nwritten;

        Ok(nwritten)
    }

    fn metadata(&self) -> Result<InodeMetadata, FsError> {
        self.inode.metadata()
    }

    fn lseek(&self, offset: isize, whence: SeekWhence) -> Result<usize, FsError> {
        let mut offset_guard = self.offset.lock();
        let current = *offset_guard as isize;
        let file_size = self.inode.metadata()?.size as isize;

        let new_offset = match whence {
            SeekWhence::Set => Some(offset),
            SeekWhence::Cur => current.checked_add(offset),
            SeekWhence::End => file_size.checked_add(offset),
        }
        .ok_or(FsError::InvalidArgument)?;

        // 偏移量不能为负
        if new_offset < 0 {
            return Err(FsError::InvalidArgument);
        }

        *offset_guard = new_offset as usize;
        Ok(new_offset as usize)
    }

    fn offset(&self) -> usize {
        *self.offset.lock()
    }

    fn flags(&self) -> OpenFlags {
        *self.flags.lock()
    }
}
