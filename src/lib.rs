//! ptreefs - 进程树快照文件系统
//!
//! 在挂载时遍历一次进程层次结构，为每个进程生成一个目录
//! （`<comm>_<pid>`），目录内包含一个 `proc_info.txt` 描述文件，
//! 以及每个子进程对应的子目录。构建完成后树是静态的，不再跟随进程变化。
//!
//! ```text
//! /proc_info.txt                      (init)
//! /sshd_50/proc_info.txt              (tty name: NA)
//! /sshd_50/bash_51/proc_info.txt      (tty name: pts0)
//! ```
//!
//! 目录结构：
//! - [`vfs`]: Inode / File / FileSystem 抽象与错误码
//! - [`fs::ptree`]: 进程树文件系统本体（节点存储、内容缓冲区、树构建器）
//! - [`kernel::task`]: 进程层次结构（任务、任务管理器、终端、凭证）
//! - [`log`]: 内核风格日志（`pr_*!` 宏）
//! - [`sync`] / [`time`] / [`config`]: 锁、时钟与常量
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod config;
pub mod fs;
pub mod kernel;
pub mod log;
pub mod sync;
#[cfg(test)]
mod test;
pub mod time;
pub mod vfs;

pub use config::{MountOptions, OversizePolicy};
pub use fs::ptree::{BuildStats, ProcessView, PtreeFs, PtreeInode};
pub use kernel::task::{Credential, SharedTask, TASK_MANAGER, TaskManager, Tty};
pub use vfs::{File, FileSystem, FsError, Inode, OpenFlags};
