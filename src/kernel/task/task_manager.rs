//! 任务管理器模块
//!
//! 维护 PID 到任务的映射以及父子关系。
//! 该模块的实例应当被包装在适当的同步原语中以确保线程安全。
use alloc::sync::Arc;
use alloc::vec::Vec;

use hashbrown::HashMap;
use lazy_static::lazy_static;

use crate::kernel::task::pid_allocator::PidAllocator;
use crate::kernel::task::{SharedTask, Task, Tty};
use crate::sync::SpinLock;

lazy_static! {
    /// 全局任务管理器
    pub static ref TASK_MANAGER: SpinLock<TaskManager> = SpinLock::new(TaskManager::new());
}

/// init 进程的 PID
pub const INIT_PID: u32 = 1;

/// 任务管理错误
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskError {
    /// 指定 PID 的进程不存在
    NoSuchProcess,
    /// PID 已被占用
    PidInUse,
    /// 还没有 init 进程
    NoInit,
    /// init 进程不能退出
    InitCannotExit,
}

/// 任务管理器
///
/// 负责任务的创建、退出和查找。
/// 父进程退出时，其子进程被过继给 init。
pub struct TaskManager {
    pid_allocator: PidAllocator,
    tasks: HashMap<u32, SharedTask>,
    init: Option<SharedTask>,
}

impl TaskManager {
    /// 创建空的任务管理器
    pub fn new() -> Self {
        TaskManager {
            pid_allocator: PidAllocator::new(),
            tasks: HashMap::new(),
            init: None,
        }
    }

    /// 创建 init 进程（PID 1）
    pub fn create_init(&mut self, comm: &str) -> Result<SharedTask, TaskError> {
        if self.tasks.contains_key(&INIT_PID) {
            return Err(TaskError::PidInUse);
        }
        let init = Task::new(INIT_PID, 0, comm).into_shared();
        self.tasks.insert(INIT_PID, init.clone());
        self.init = Some(init.clone());
        Ok(init)
    }

    /// 在 `parent_pid` 下创建子进程，PID 自动分配
    pub fn spawn(&mut self, parent_pid: u32, comm: &str) -> Result<SharedTask, TaskError> {
        let pid = loop {
            let pid = self.pid_allocator.allocate();
            if !self.tasks.contains_key(&pid) {
                break pid;
            }
        };
        self.spawn_with_pid(parent_pid, pid, comm)
    }

    /// 以指定 PID 创建子进程
    pub fn spawn_with_pid(
        &mut self,
        parent_pid: u32,
        pid: u32,
        comm: &str,
    ) -> Result<SharedTask, TaskError> {
        if self.tasks.contains_key(&pid) {
            return Err(TaskError::PidInUse);
        }
        let parent = self.get_task(parent_pid).ok_or(TaskError::NoSuchProcess)?;

        let mut task = Task::new(pid, parent_pid, comm);
        task.parent = Arc::downgrade(&parent);
        let task = task.into_shared();

        parent.lock().children.push(task.clone());
        self.tasks.insert(pid, task.clone());
        Ok(task)
    }

    /// 设置（或清除）控制终端
    pub fn set_tty(&mut self, pid: u32, tty: Option<Arc<Tty>>) -> Result<(), TaskError> {
        let task = self.get_task(pid).ok_or(TaskError::NoSuchProcess)?;
        task.lock().tty = tty;
        Ok(())
    }

    /// 进程退出
    ///
    /// 从父进程的子进程列表中摘除，并把它的子进程过继给 init。
    pub fn exit(&mut self, pid: u32) -> Result<(), TaskError> {
        if pid == INIT_PID {
            return Err(TaskError::InitCannotExit);
        }
        let init = self.init.clone().ok_or(TaskError::NoInit)?;
        let task = self.tasks.remove(&pid).ok_or(TaskError::NoSuchProcess)?;

        let (parent, orphans) = {
            let mut t = task.lock();
            (t.parent.upgrade(), core::mem::take(&mut t.children))
        };

        if let Some(parent) = parent {
            parent.lock().children.retain(|c| !Arc::ptr_eq(c, &task));
        }

        for orphan in &orphans {
            let mut o = orphan.lock();
            o.ppid = INIT_PID;
            o.parent = Arc::downgrade(&init);
        }
        init.lock().children.extend(orphans);
        Ok(())
    }

    /// 根据 PID 获取任务
    pub fn get_task(&self, pid: u32) -> Option<SharedTask> {
        self.tasks.get(&pid).cloned()
    }

    /// 进程层次结构的根（init）
    pub fn root(&self) -> Option<SharedTask> {
        self.init.clone()
    }

    /// 当前任务数量
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// 当前所有 PID 的快照，升序
    pub fn pids(&self) -> Vec<u32> {
        let mut pids: Vec<u32> = self.tasks.keys().copied().collect();
        pids.sort_unstable();
        pids
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
