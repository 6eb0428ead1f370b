//! 虚拟文件系统抽象
//!
//! - [`Inode`]: 存储层，无状态随机访问
//! - [`File`]: 会话层，维护 offset 与打开标志
//! - [`FileSystem`]: 文件系统实例（根 inode、statfs、卸载）

pub mod error;
pub mod file;
pub mod file_system;
pub mod impls;
pub mod inode;
pub mod path;

#[cfg(test)]
mod tests;

pub use error::FsError;
pub use file::{File, OpenFlags, SeekWhence};
pub use file_system::{FileSystem, StatFs};
pub use impls::RegFile;
pub use inode::{DirEntry, FileMode, Inode, InodeMetadata, InodeType};
pub use path::{PathComponent, parse_path};
