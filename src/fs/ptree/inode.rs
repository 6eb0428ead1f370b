//! ptreefs Inode 实现
//!
//! 目录节点持有按名称排序的子节点表，文件节点持有一个定长内容缓冲区。
//! 树结构只能通过 [`PtreeInode::create_node`] 在构建阶段改变，
//! VFS 的 create/mkdir/unlink 一律返回 `PermissionDenied`。

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::sync::{Arc, Weak};
use alloc::vec::Vec;
use core::fmt;

use super::buffer::ContentBuffer;
use super::store::NodeStore;
use crate::config::{DEFAULT_MODE_DIR, DEFAULT_MODE_FILE, DIR_REPORTED_SIZE, MAX_NAME_LEN};
use crate::pr_err;
use crate::sync::{RwLock, SpinLock};
use crate::time::TimeSpec;
use crate::vfs::{DirEntry, FileMode, FsError, Inode, InodeMetadata, InodeType};

/// 节点内容
pub enum PtreeInodeContent {
    /// 目录：子节点表
    Directory(SpinLock<BTreeMap<String, Arc<PtreeInode>>>),
    /// 普通文件：内容缓冲区
    File(RwLock<ContentBuffer>),
}

/// 要创建的节点类型
#[derive(Debug, Clone, Copy)]
pub enum NewNode<'a> {
    /// 空目录
    Directory,
    /// 带初始内容的文件
    File {
        /// 初始内容
        content: &'a [u8],
    },
}

/// ptreefs Inode
pub struct PtreeInode {
    metadata: SpinLock<InodeMetadata>,
    content: PtreeInodeContent,

    /// 父目录（弱引用，避免循环引用）
    parent: Weak<PtreeInode>,

    /// 指向自身的弱引用（用于 lookup "." 和作为子节点的父节点）
    self_ref: Weak<PtreeInode>,

    store: Arc<NodeStore>,
}

impl PtreeInode {
    /// 创建根目录
    pub fn new_root(store: Arc<NodeStore>) -> Result<Arc<Self>, FsError> {
        let inode_no = store.reserve()?;
        Ok(Self::assemble(
            inode_no,
            PtreeInodeContent::Directory(SpinLock::new(BTreeMap::new())),
            Weak::new(),
            store,
        ))
    }

    fn assemble(
        inode_no: usize,
        content: PtreeInodeContent,
        parent: Weak<PtreeInode>,
        store: Arc<NodeStore>,
    ) -> Arc<Self> {
        let now = TimeSpec::now();
        let cred = store.cred();
        let (inode_type, mode, size, nlinks) = match &content {
            PtreeInodeContent::Directory(_) => {
                (InodeType::Directory, DEFAULT_MODE_DIR, DIR_REPORTED_SIZE, 2)
            }
            PtreeInodeContent::File(_) => (InodeType::File, DEFAULT_MODE_FILE, 0, 1),
        };

        let metadata = InodeMetadata {
            inode_no,
            inode_type,
            mode,
            uid: cred.fsuid,
            gid: cred.fsgid,
            size,
            atime: now,
            mtime: now,
            ctime: now,
            nlinks,
            blocks: 0,
        };

        Arc::new_cyclic(|self_ref| Self {
            metadata: SpinLock::new(metadata),
            content,
            parent,
            self_ref: self_ref.clone(),
            store,
        })
    }

    /// 在本目录下创建并链接一个新节点
    ///
    /// 检查顺序：本节点必须是目录、名称合法、名称未被占用、
    /// 预留 inode、分配文件缓冲区。任何一步失败都不会留下已链接的节点。
    pub fn create_node(&self, name: &str, kind: NewNode<'_>) -> Result<Arc<PtreeInode>, FsError> {
        let children = match &self.content {
            PtreeInodeContent::Directory(children) => children,
            PtreeInodeContent::File(_) => return Err(FsError::NotDirectory),
        };
        validate_name(name)?;

        let mut children = children.lock();
        if children.contains_key(name) {
            pr_err!("ptreefs: {} already exists", name);
            return Err(FsError::AlreadyExists);
        }

        let inode_no = self.store.reserve().inspect_err(|e| {
            pr_err!("ptreefs: no inode for {}: errno {}", name, e.to_errno());
        })?;

        let content = match kind {
            NewNode::Directory => PtreeInodeContent::Directory(SpinLock::new(BTreeMap::new())),
            NewNode::File { content } => {
                let buffer = ContentBuffer::with_content(
                    self.store.file_capacity(),
                    content,
                    self.store.oversize(),
                );
                match buffer {
                    Ok(buffer) => PtreeInodeContent::File(RwLock::new(buffer)),
                    Err(e) => {
                        self.store.release();
                        pr_err!("ptreefs: no buffer for {}: errno {}", name, e.to_errno());
                        return Err(e);
                    }
                }
            }
        };

        let node = Self::assemble(inode_no, content, self.self_ref.clone(), self.store.clone());
        children.insert(String::from(name), node.clone());
        Ok(node)
    }

    /// 创建子目录
    pub fn create_dir(&self, name: &str) -> Result<Arc<PtreeInode>, FsError> {
        self.create_node(name, NewNode::Directory)
    }

    /// 创建带初始内容的文件
    pub fn create_file(&self, name: &str, content: &[u8]) -> Result<Arc<PtreeInode>, FsError> {
        self.create_node(name, NewNode::File { content })
    }

    /// 查找直接子节点（支持 "." 和 ".."）
    pub fn find_child(&self, name: &str) -> Result<Arc<PtreeInode>, FsError> {
        let children = match &self.content {
            PtreeInodeContent::Directory(children) => children,
            PtreeInodeContent::File(_) => return Err(FsError::NotDirectory),
        };
        match name {
            "." => self.self_ref.upgrade().ok_or(FsError::NotFound),
            // 根目录的 ".." 指向自己
            ".." => self
                .parent
                .upgrade()
                .or_else(|| self.self_ref.upgrade())
                .ok_or(FsError::NotFound),
            _ => children.lock().get(name).cloned().ok_or(FsError::NotFound),
        }
    }

    /// 子节点名称，按名称排序
    pub fn child_names(&self) -> Vec<String> {
        match &self.content {
            PtreeInodeContent::Directory(children) => children.lock().keys().cloned().collect(),
            PtreeInodeContent::File(_) => Vec::new(),
        }
    }

    /// 是否为目录
    pub fn is_dir(&self) -> bool {
        matches!(self.content, PtreeInodeContent::Directory(_))
    }

    /// inode 编号
    pub fn inode_no(&self) -> usize {
        self.metadata.lock().inode_no
    }

    /// 文件的完整逻辑内容
    pub fn read_all(&self) -> Result<Vec<u8>, FsError> {
        match &self.content {
            PtreeInodeContent::File(buffer) => Ok(buffer.read().as_bytes().to_vec()),
            PtreeInodeContent::Directory(_) => Err(FsError::IsDirectory),
        }
    }

    /// 拆除以本节点为根的子树
    ///
    /// 用显式栈逐层摘下子节点表，释放时不会沿树深度递归。
    /// 本节点自身保留。
    pub fn detach_subtree(&self) {
        let mut pending: Vec<Arc<PtreeInode>> = self.take_children();
        while let Some(node) = pending.pop() {
            pending.extend(node.take_children());
        }
    }

    fn take_children(&self) -> Vec<Arc<PtreeInode>> {
        match &self.content {
            PtreeInodeContent::Directory(children) => {
                let taken = core::mem::take(&mut *children.lock());
                taken.into_values().collect()
            }
            PtreeInodeContent::File(_) => Vec::new(),
        }
    }

    fn touch_atime(&self) {
        self.metadata.lock().atime = TimeSpec::now();
    }

    fn touch_mtime(&self) {
        let now = TimeSpec::now();
        let mut meta = self.metadata.lock();
        meta.mtime = now;
        meta.ctime = now;
    }
}

impl fmt::Debug for PtreeInode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meta = self.metadata.lock();
        f.debug_struct("PtreeInode")
            .field("inode_no", &meta.inode_no)
            .field("inode_type", &meta.inode_type)
            .finish()
    }
}

impl Drop for PtreeInode {
    fn drop(&mut self) {
        self.store.release();
    }
}

/// 检查目录项名称
fn validate_name(name: &str) -> Result<(), FsError> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\0']) {
        pr_err!("ptreefs: invalid name {:?}", name);
        return Err(FsError::InvalidArgument);
    }
    if name.len() > MAX_NAME_LEN {
        pr_err!("ptreefs: name too long ({} bytes)", name.len());
        return Err(FsError::NameTooLong);
    }
    Ok(())
}

impl Inode for PtreeInode {
    fn metadata(&self) -> Result<InodeMetadata, FsError> {
        match &self.content {
            PtreeInodeContent::File(buffer) => {
                // 先取缓冲区锁，大小与内容保持一致
                let buffer = buffer.read();
                let mut meta = self.metadata.lock().clone();
                meta.size = buffer.len();
                meta.blocks = buffer.len().div_ceil(512);
                Ok(meta)
            }
            PtreeInodeContent::Directory(_) => Ok(self.metadata.lock().clone()),
        }
    }

    fn read_at(&self, offset: usize, buf: &mut [u8]) -> Result<usize, FsError> {
        match &self.content {
            PtreeInodeContent::File(buffer) => {
                let nread = buffer.read().read(offset, buf);
                self.touch_atime();
                Ok(nread)
            }
            PtreeInodeContent::Directory(_) => Err(FsError::IsDirectory),
        }
    }

    fn write_at(&self, offset: usize, buf: &[u8]) -> Result<usize, FsError> {
        match &self.content {
            PtreeInodeContent::File(buffer) => {
                let nwritten = buffer.write().write(offset, buf);
                self.touch_mtime();
                Ok(nwritten)
            }
            PtreeInodeContent::Directory(_) => Err(FsError::IsDirectory),
        }
    }

    fn append(&self, buf: &[u8]) -> Result<(usize, usize), FsError> {
        match &self.content {
            PtreeInodeContent::File(buffer) => {
                let mut buffer = buffer.write();
                let nwritten = buffer.append(buf);
                let end = buffer.len();
                drop(buffer);
                self.touch_mtime();
                Ok((nwritten, end))
            }
            PtreeInodeContent::Directory(_) => Err(FsError::IsDirectory),
        }
    }

    fn lookup(&self, name: &str) -> Result<Arc<dyn Inode>, FsError> {
        self.find_child(name).map(|child| child as Arc<dyn Inode>)
    }

    fn create(&self, _name: &str, _mode: FileMode) -> Result<Arc<dyn Inode>, FsError> {
        Err(FsError::PermissionDenied)
    }

    fn mkdir(&self, _name: &str, _mode: FileMode) -> Result<Arc<dyn Inode>, FsError> {
        Err(FsError::PermissionDenied)
    }

    fn unlink(&self, _name: &str) -> Result<(), FsError> {
        Err(FsError::PermissionDenied)
    }

    fn readdir(&self) -> Result<Vec<DirEntry>, FsError> {
        let children = match &self.content {
            PtreeInodeContent::Directory(children) => children,
            PtreeInodeContent::File(_) => return Err(FsError::NotDirectory),
        };

        let inode_no = self.inode_no();
        let parent_inode_no = self
            .parent
            .upgrade()
            .map(|parent| parent.inode_no())
            .unwrap_or(inode_no); // 根目录的 ".." 指向自己

        let mut entries = Vec::new();
        entries.push(DirEntry {
            name: String::from("."),
            inode_no,
            inode_type: InodeType::Directory,
        });
        entries.push(DirEntry {
            name: String::from(".."),
            inode_no: parent_inode_no,
            inode_type: InodeType::Directory,
        });

        for (name, child) in children.lock().iter() {
            let child_meta = child.metadata.lock();
            entries.push(DirEntry {
                name: name.clone(),
                inode_no: child_meta.inode_no,
                inode_type: child_meta.inode_type,
            });
        }

        self.touch_atime();
        Ok(entries)
    }

    fn truncate(&self, size: usize) -> Result<(), FsError> {
        match &self.content {
            PtreeInodeContent::File(buffer) => {
                buffer.write().truncate(size);
                self.touch_mtime();
                Ok(())
            }
            PtreeInodeContent::Directory(_) => Err(FsError::IsDirectory),
        }
    }

    fn sync(&self) -> Result<(), FsError> {
        Ok(())
    }
}
