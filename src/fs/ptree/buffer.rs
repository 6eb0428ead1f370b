//! 定长内容缓冲区
//!
//! 容量 C 在创建时确定，之后不再扩展。逻辑长度不超过 C - 1，
//! 下标为逻辑长度的字节始终为 0。

use alloc::vec::Vec;

use crate::config::OversizePolicy;
use crate::vfs::FsError;

/// 以 NUL 结尾的定长字节缓冲区
#[derive(Debug)]
pub struct ContentBuffer {
    /// 长度恒为容量
    data: Vec<u8>,
    len: usize,
}

impl ContentBuffer {
    /// 分配容量为 `capacity` 的空缓冲区（至少 1 字节）
    pub fn with_capacity(capacity: usize) -> Result<Self, FsError> {
        let capacity = capacity.max(1);
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| FsError::OutOfMemory)?;
        data.resize(capacity, 0);
        Ok(Self { data, len: 0 })
    }

    /// 分配缓冲区并写入初始内容
    ///
    /// 内容超过 `capacity - 1` 时按 `policy` 截断或返回 `FileTooLarge`。
    pub fn with_content(
        capacity: usize,
        content: &[u8],
        policy: OversizePolicy,
    ) -> Result<Self, FsError> {
        let mut buffer = Self::with_capacity(capacity)?;
        if content.len() > buffer.max_len() && policy == OversizePolicy::Reject {
            return Err(FsError::FileTooLarge);
        }
        buffer.write(0, content);
        Ok(buffer)
    }

    /// 从 `offset` 开始读取，返回读到的字节数
    pub fn read(&self, offset: usize, buf: &mut [u8]) -> usize {
        if offset >= self.len {
            return 0;
        }
        let n = buf.len().min(self.len - offset);
        buf[..n].copy_from_slice(&self.data[offset..offset + n]);
        n
    }

    /// 在 `offset` 处写入，超出 `capacity - 1` 的部分被丢弃
    ///
    /// 写入后逻辑长度为 `offset + n`，旧长度与 `offset` 之间的空洞补 0。
    /// `offset` 超过 `capacity - 1` 时不做任何修改并返回 0。
    pub fn write(&mut self, offset: usize, data: &[u8]) -> usize {
        let max = self.max_len();
        if offset > max {
            return 0;
        }
        let n = data.len().min(max - offset);
        if offset > self.len {
            self.data[self.len..offset].fill(0);
        }
        self.data[offset..offset + n].copy_from_slice(&data[..n]);
        self.len = offset + n;
        self.data[self.len] = 0;
        n
    }

    /// 写到逻辑末尾
    pub fn append(&mut self, data: &[u8]) -> usize {
        self.write(self.len, data)
    }

    /// 把逻辑长度设为 `min(size, capacity - 1)`，新增部分为 0
    pub fn truncate(&mut self, size: usize) {
        let size = size.min(self.max_len());
        if size > self.len {
            self.data[self.len..size].fill(0);
        }
        self.len = size;
        self.data[size] = 0;
    }

    /// 逻辑内容
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// 逻辑长度
    pub fn len(&self) -> usize {
        self.len
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 容量（含结尾的 NUL）
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    fn max_len(&self) -> usize {
        self.data.len() - 1
    }
}
