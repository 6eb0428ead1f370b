//! ptreefs - 进程树快照文件系统
//!
//! - [`store`]: inode 编号与存活数量
//! - [`buffer`]: 定长内容缓冲区
//! - [`inode`]: 目录/文件节点与节点工厂
//! - [`info`]: `proc_info.txt` 格式与目录命名
//! - [`builder`]: 广度优先的树构建器
//! - [`ptreefs`]: 文件系统实例

pub mod buffer;
pub mod builder;
pub mod info;
pub mod inode;
pub mod ptreefs;
pub mod store;

pub use buffer::ContentBuffer;
pub use builder::{BuildStats, ProcessView, build};
pub use info::{ProcInfo, dir_name};
pub use inode::{NewNode, PtreeInode, PtreeInodeContent};
pub use ptreefs::PtreeFs;
pub use store::NodeStore;
