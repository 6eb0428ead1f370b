//! 任务模块
//!
//! 进程层次结构：任务、控制终端、凭证以及维护它们的任务管理器。
//! ptreefs 通过 [`ProcessView`] 只读地访问这些任务。

mod cred;
mod pid_allocator;
mod task_manager;
mod task_struct;
mod tty;

pub use cred::{Credential, ROOT_GID, ROOT_UID};
pub use pid_allocator::PidAllocator;
pub use task_manager::{INIT_PID, TASK_MANAGER, TaskError, TaskManager};
pub use task_struct::{SharedTask, Task};
pub use tty::Tty;

use alloc::string::String;
use alloc::vec::Vec;

use crate::fs::ptree::ProcessView;

// 每次只持有一个任务的锁，取出所需字段后立即释放
impl ProcessView for SharedTask {
    fn pid(&self) -> u32 {
        self.lock().pid
    }

    fn comm(&self) -> String {
        self.lock().comm.clone()
    }

    fn tty_name(&self) -> Option<String> {
        self.lock().tty_name()
    }

    fn children(&self) -> Vec<Self> {
        self.lock().children.clone()
    }
}
