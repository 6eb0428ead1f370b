use crate::config::MountOptions;
use crate::fs::ptree::{ProcessView, PtreeFs, PtreeInode};
use crate::kernel::task::{Credential, INIT_PID, TaskManager, Tty};
use crate::vfs::Inode;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

// 测试辅助函数 (fixtures)

/// 创建只有根目录的 ptreefs（root 凭证，默认选项）
pub fn create_test_fs() -> Arc<PtreeFs> {
    PtreeFs::new(MountOptions::default(), Credential::root()).unwrap()
}

/// 按 (父 pid, pid, 进程名, 终端) 列表建立进程层次结构，init 为 pid 1
pub fn create_task_tree(init_comm: &str, tasks: &[(u32, u32, &str, Option<&str>)]) -> TaskManager {
    let mut tm = TaskManager::new();
    tm.create_init(init_comm).unwrap();
    for &(ppid, pid, comm, tty) in tasks {
        tm.spawn_with_pid(ppid, pid, comm).unwrap();
        if let Some(tty) = tty {
            tm.set_tty(pid, Some(Tty::new(tty))).unwrap();
        }
    }
    tm
}

/// init(1) -> sshd(50, 无终端) -> bash(51, pts0)
pub fn create_sample_hierarchy() -> TaskManager {
    create_task_tree(
        "init",
        &[(INIT_PID, 50, "sshd", None), (50, 51, "bash", Some("pts0"))],
    )
}

/// 用示例层次结构挂载
pub fn mount_sample(options: MountOptions) -> Arc<PtreeFs> {
    let tm = create_sample_hierarchy();
    PtreeFs::mount(tm.root().unwrap(), options, Credential::root()).unwrap()
}

/// 读出文件节点的全部内容
pub fn read_to_string(node: &Arc<PtreeInode>) -> String {
    let size = node.metadata().unwrap().size;
    let mut buf = alloc::vec![0u8; size];
    let n = node.read_at(0, &mut buf).unwrap();
    String::from_utf8(buf[..n].to_vec()).unwrap()
}

/// 不依赖任务管理器的进程视图，可以构造出畸形的层次结构
#[derive(Clone)]
pub struct FakeProc {
    /// 进程 id
    pub pid: u32,
    /// 进程名
    pub comm: String,
    /// 控制终端名
    pub tty: Option<String>,
    /// 子进程，顺序即遍历顺序
    pub children: Vec<FakeProc>,
}

impl FakeProc {
    /// 无终端、无子进程的进程
    pub fn new(pid: u32, comm: &str) -> Self {
        Self {
            pid,
            comm: String::from(comm),
            tty: None,
            children: Vec::new(),
        }
    }

    /// 设置控制终端
    pub fn with_tty(mut self, tty: &str) -> Self {
        self.tty = Some(String::from(tty));
        self
    }

    /// 追加一个子进程
    pub fn with_child(mut self, child: FakeProc) -> Self {
        self.children.push(child);
        self
    }
}

impl ProcessView for FakeProc {
    fn pid(&self) -> u32 {
        self.pid
    }

    fn comm(&self) -> String {
        self.comm.clone()
    }

    fn tty_name(&self) -> Option<String> {
        self.tty.clone()
    }

    fn children(&self) -> Vec<Self> {
        self.children.clone()
    }
}

/// 一条深度为 `depth` 的单链进程
pub fn create_chain(depth: usize) -> FakeProc {
    let mut proc = FakeProc::new(depth as u32 + 1, "leaf");
    for pid in (1..=depth as u32).rev() {
        proc = FakeProc::new(pid, "p").with_child(proc);
    }
    proc
}

pub mod ptree_buffer;
pub mod ptree_concurrency;
pub mod ptree_file;
pub mod ptree_integration;
