use super::*;
use crate::config::MountOptions;
use crate::fs::ptree::PtreeFs;
use crate::kernel::task::Credential;
use alloc::sync::Arc;

// 测试辅助函数 (fixtures)

/// 在一个新的 ptreefs 根目录下创建带内容的文件
pub fn create_test_file_with_content(content: &[u8]) -> (Arc<PtreeFs>, Arc<dyn Inode>) {
    let fs = PtreeFs::new(MountOptions::default(), Credential::root()).unwrap();
    let inode: Arc<dyn Inode> = fs.root().create_file("test.txt", content).unwrap();
    (fs, inode)
}

/// 创建一个测试用的 File 对象
pub fn create_test_file(inode: Arc<dyn Inode>, flags: OpenFlags) -> Arc<dyn File> {
    Arc::new(RegFile::new(inode, flags))
}
