//! ptreefs 文件系统实例
//!
//! 挂载时创建根目录，然后只运行一次构建器。之后树的结构不再变化，
//! 只有 `proc_info.txt` 的内容可以被有写权限的调用者改写。

use core::sync::atomic::{AtomicBool, Ordering};

use alloc::sync::Arc;
use alloc::vec::Vec;

use super::builder::{BuildStats, ProcessView, build};
use super::inode::PtreeInode;
use super::store::NodeStore;
use crate::config::{BLOCK_SIZE, MAX_NAME_LEN, MountOptions, PTREEFS_MAGIC};
use crate::kernel::task::Credential;
use crate::sync::SpinLock;
use crate::vfs::{
    File, FileSystem, FsError, Inode, OpenFlags, PathComponent, RegFile, StatFs, parse_path,
};
use crate::{pr_err, pr_info};

/// 进程树快照文件系统
pub struct PtreeFs {
    root: Arc<PtreeInode>,
    store: Arc<NodeStore>,
    options: MountOptions,

    /// 构建只允许进行一次
    populated: AtomicBool,

    stats: SpinLock<Option<BuildStats>>,
}

impl PtreeFs {
    /// 创建只有根目录的实例
    pub fn new(options: MountOptions, cred: Credential) -> Result<Arc<Self>, FsError> {
        let store = NodeStore::new(&options, cred);
        let root = PtreeInode::new_root(store.clone())?;
        Ok(Arc::new(Self {
            root,
            store,
            options,
            populated: AtomicBool::new(false),
            stats: SpinLock::new(None),
        }))
    }

    /// 用 `root_task` 的进程层次结构填充树
    ///
    /// 第二次调用返回 `Busy`。构建失败时拆除已链接的节点，只保留根目录。
    pub fn fill_tree<P: ProcessView>(&self, root_task: P) -> Result<BuildStats, FsError> {
        self.populated
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| FsError::Busy)?;

        match build(root_task, &self.root) {
            Ok(stats) => {
                *self.stats.lock() = Some(stats);
                Ok(stats)
            }
            Err(e) => {
                self.root.detach_subtree();
                pr_err!("ptreefs: build failed, tree torn down: errno {}", e.to_errno());
                Err(e)
            }
        }
    }

    /// 创建并填充
    pub fn mount<P: ProcessView>(
        root_task: P,
        options: MountOptions,
        cred: Credential,
    ) -> Result<Arc<Self>, FsError> {
        let fs = Self::new(options, cred)?;
        let stats = fs.fill_tree(root_task)?;
        pr_info!(
            "ptreefs: mounted, {} directories, {} files",
            stats.directories,
            stats.files
        );
        Ok(fs)
    }

    /// 根目录
    pub fn root(&self) -> Arc<PtreeInode> {
        self.root.clone()
    }

    /// 节点存储
    pub fn store(&self) -> Arc<NodeStore> {
        self.store.clone()
    }

    /// 挂载选项
    pub fn options(&self) -> MountOptions {
        self.options
    }

    /// 存活的 inode 数量
    pub fn node_count(&self) -> usize {
        self.store.live_inodes()
    }

    /// 构建结果，未构建或构建失败时为 None
    pub fn build_stats(&self) -> Option<BuildStats> {
        *self.stats.lock()
    }

    /// 从根目录解析路径
    ///
    /// 相对路径同样从根目录开始；`.` 和 `..` 按字面处理，`..` 不会越过根目录。
    pub fn lookup(&self, path: &str) -> Result<Arc<PtreeInode>, FsError> {
        let mut stack: Vec<Arc<PtreeInode>> = Vec::new();
        let mut current = self.root.clone();

        for component in parse_path(path) {
            match component {
                PathComponent::Root => {
                    stack.clear();
                    current = self.root.clone();
                }
                PathComponent::Current => {
                    if !current.is_dir() {
                        return Err(FsError::NotDirectory);
                    }
                }
                PathComponent::Parent => {
                    if !current.is_dir() {
                        return Err(FsError::NotDirectory);
                    }
                    if let Some(parent) = stack.pop() {
                        current = parent;
                    }
                }
                PathComponent::Normal(name) => {
                    let child = current.find_child(&name)?;
                    stack.push(core::mem::replace(&mut current, child));
                }
            }
        }

        Ok(current)
    }

    /// 打开一个节点，返回带独立偏移量的会话
    pub fn open(
        &self,
        path: &str,
        flags: OpenFlags,
        cred: &Credential,
    ) -> Result<Arc<dyn File>, FsError> {
        let node = self.lookup(path)?;
        let wants_write = flags.writable() || flags.contains(OpenFlags::O_TRUNC);

        if node.is_dir() {
            if wants_write {
                return Err(FsError::IsDirectory);
            }
        } else if flags.contains(OpenFlags::O_DIRECTORY) {
            return Err(FsError::NotDirectory);
        }

        if wants_write {
            let meta = node.metadata()?;
            if !cred.is_root()
                && !meta
                    .mode
                    .can_write_as(meta.uid, meta.gid, cred.fsuid, cred.fsgid)
            {
                return Err(FsError::PermissionDenied);
            }
        }

        if flags.contains(OpenFlags::O_TRUNC) && flags.writable() {
            node.truncate(0)?;
        }

        Ok(Arc::new(RegFile::new(node, flags)))
    }

    fn teardown(&self) {
        self.root.detach_subtree();
    }
}

impl FileSystem for PtreeFs {
    fn fs_type(&self) -> &'static str {
        "ptreefs"
    }

    fn root_inode(&self) -> Arc<dyn Inode> {
        self.root.clone()
    }

    fn sync(&self) -> Result<(), FsError> {
        Ok(())
    }

    fn statfs(&self) -> Result<StatFs, FsError> {
        let max = self.store.max_inodes();
        let free_inodes = if max == 0 {
            0
        } else {
            max.saturating_sub(self.store.live_inodes())
        };
        let used_blocks = self
            .build_stats()
            .map(|s| s.files * self.store.file_capacity().div_ceil(BLOCK_SIZE))
            .unwrap_or(0);

        Ok(StatFs {
            block_size: BLOCK_SIZE,
            total_blocks: used_blocks,
            free_blocks: 0,
            available_blocks: 0,
            total_inodes: max,
            free_inodes,
            fsid: PTREEFS_MAGIC,
            max_filename_len: MAX_NAME_LEN,
        })
    }

    fn umount(&self) -> Result<(), FsError> {
        self.teardown();
        *self.stats.lock() = None;
        pr_info!("ptreefs: unmounted");
        Ok(())
    }
}

impl Drop for PtreeFs {
    fn drop(&mut self) {
        self.teardown();
    }
}
