//! 内核侧协作模块
//!
//! ptreefs 只需要进程层次结构，因此这里只保留任务子系统。

pub mod task;
