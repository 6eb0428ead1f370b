//! 任务结构体定义
//! 只包含进程层次结构需要的信息：PID、名称、控制终端、父子关系

use alloc::string::String;
use alloc::sync::{Arc, Weak};
use alloc::vec::Vec;

use crate::config::TASK_COMM_LEN;
use crate::kernel::task::Tty;
use crate::sync::SpinLock;

/// 共享任务句柄
pub type SharedTask = Arc<SpinLock<Task>>;

/// 任务
#[derive(Debug)]
pub struct Task {
    /// 进程 id
    pub pid: u32,
    /// 父进程 id，init 为 0
    pub ppid: u32,
    /// 进程名，最多 TASK_COMM_LEN - 1 字节
    pub comm: String,
    /// 控制终端
    pub tty: Option<Arc<Tty>>,
    /// 子进程，按创建顺序排列
    pub children: Vec<SharedTask>,
    /// 父进程
    pub parent: Weak<SpinLock<Task>>,
}

impl Task {
    /// 创建一个还没有挂到任何父进程下的任务
    pub fn new(pid: u32, ppid: u32, comm: &str) -> Self {
        Self {
            pid,
            ppid,
            comm: truncate_comm(comm),
            tty: None,
            children: Vec::new(),
            parent: Weak::new(),
        }
    }

    /// 包装为共享句柄
    pub fn into_shared(self) -> SharedTask {
        Arc::new(SpinLock::new(self))
    }

    /// 修改进程名
    pub fn set_comm(&mut self, comm: &str) {
        self.comm = truncate_comm(comm);
    }

    /// 控制终端名称
    pub fn tty_name(&self) -> Option<String> {
        self.tty.as_ref().map(|tty| String::from(tty.name()))
    }
}

fn truncate_comm(comm: &str) -> String {
    let mut end = comm.len().min(TASK_COMM_LEN - 1);
    while !comm.is_char_boundary(end) {
        end -= 1;
    }
    String::from(&comm[..end])
}
