//! 文件系统实现

use alloc::sync::Arc;

use crate::config::MountOptions;
use crate::kernel::task::{Credential, TASK_MANAGER};
use crate::pr_err;
use crate::vfs::FsError;

pub mod ptree;

#[cfg(test)]
mod tests;

use ptree::PtreeFs;

/// 以全局任务管理器的 init 进程为根挂载 ptreefs
pub fn mount_task_tree(
    options: MountOptions,
    cred: Credential,
) -> Result<Arc<PtreeFs>, FsError> {
    // 只在取根进程时持有管理器锁，构建过程逐个锁任务
    let root = TASK_MANAGER.lock().root();
    let root = root.ok_or_else(|| {
        pr_err!("ptreefs: no init task to mount");
        FsError::NotFound
    })?;
    PtreeFs::mount(root, options, cred)
}
