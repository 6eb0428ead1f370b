use alloc::string::String;
use alloc::sync::Arc;

/// 控制终端
///
/// 只记录名称（如 `pts0`、`ttyS0`），多个进程可以共享同一个终端。
#[derive(Debug, PartialEq, Eq)]
pub struct Tty {
    name: String,
}

impl Tty {
    /// 创建一个终端
    pub fn new(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: String::from(name),
        })
    }

    /// 终端名称
    pub fn name(&self) -> &str {
        &self.name
    }
}
