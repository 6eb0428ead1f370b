//! VFS 会话层实现

pub mod reg_file;

pub use reg_file::RegFile;
