//! 进程树构建器
//!
//! 用 FIFO 工作队列广度优先地遍历进程层次结构：
//! 每个出队的进程在自己的目录下写入 `proc_info.txt`，
//! 再为每个子进程创建 `<comm>_<pid>` 子目录并将子进程入队。
//! 栈深度与进程树深度无关。

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use hashbrown::HashSet;

use super::info::{ProcInfo, dir_name};
use super::inode::PtreeInode;
use crate::config::INFO_FILE_NAME;
use crate::vfs::FsError;
use crate::{pr_debug, pr_err, pr_info};

/// 进程层次结构的只读视图
///
/// 构建器只读取字段、枚举子进程，不修改句柄，
/// 也不会在 [`build`] 返回后保留任何句柄。
pub trait ProcessView: Sized {
    /// 进程 id
    fn pid(&self) -> u32;
    /// 进程名（拷贝）
    fn comm(&self) -> String;
    /// 控制终端名（拷贝），没有时为 None
    fn tty_name(&self) -> Option<String>;
    /// 子进程句柄，按层次结构自身的顺序
    fn children(&self) -> Vec<Self>;
}

/// 一次构建的统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// 访问过的进程数
    pub processes: usize,
    /// 目录数（含预先创建的根目录）
    pub directories: usize,
    /// `proc_info.txt` 文件数
    pub files: usize,
    /// 最大深度，根进程为 0
    pub max_depth: usize,
}

struct PendingWork<P> {
    task: P,
    dir: Arc<PtreeInode>,
    depth: usize,
}

/// 以 `root_dir` 为根构建 `root_task` 的进程树
///
/// 同一个 pid 出现两次（环或共享子进程）时以 `AlreadyExists` 中止。
/// 失败时已经链接的节点保留在树中，由调用者拆除。
pub fn build<P: ProcessView>(
    root_task: P,
    root_dir: &Arc<PtreeInode>,
) -> Result<BuildStats, FsError> {
    pr_debug!("ptreefs: building tree from pid {}", root_task.pid());

    let mut stats = BuildStats {
        directories: 1,
        ..BuildStats::default()
    };
    let mut visited: HashSet<u32> = HashSet::new();
    let mut queue: VecDeque<PendingWork<P>> = VecDeque::new();

    visited.insert(root_task.pid());
    queue.push_back(PendingWork {
        task: root_task,
        dir: root_dir.clone(),
        depth: 0,
    });

    while let Some(PendingWork { task, dir, depth }) = queue.pop_front() {
        let info = ProcInfo {
            name: task.comm(),
            pid: task.pid(),
            tty: task.tty_name(),
        };
        dir.create_file(INFO_FILE_NAME, info.render().as_bytes())
            .inspect_err(|e| {
                pr_err!(
                    "ptreefs: {} for pid {} failed: errno {}",
                    INFO_FILE_NAME,
                    info.pid,
                    e.to_errno()
                );
            })?;
        stats.processes += 1;
        stats.files += 1;
        stats.max_depth = stats.max_depth.max(depth);

        for child in task.children() {
            let pid = child.pid();
            if !visited.insert(pid) {
                pr_err!("ptreefs: pid {} reached twice, hierarchy is malformed", pid);
                return Err(FsError::AlreadyExists);
            }

            let name = dir_name(&child.comm(), pid);
            let sub = dir.create_dir(&name).inspect_err(|e| {
                pr_err!("ptreefs: mkdir {} failed: errno {}", name, e.to_errno());
            })?;
            stats.directories += 1;

            queue.push_back(PendingWork {
                task: child,
                dir: sub,
                depth: depth + 1,
            });
        }
    }

    pr_info!(
        "ptreefs: built {} processes, max depth {}",
        stats.processes,
        stats.max_depth
    );
    Ok(stats)
}
