/// root 用户 ID
pub const ROOT_UID: u32 = 0;
/// root 组 ID
pub const ROOT_GID: u32 = 0;

/// 进程凭证结构
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Credential {
    /// 真实用户 ID
    pub uid: u32,
    /// 真实组 ID
    pub gid: u32,
    /// 文件系统用户 ID（用于文件系统操作）
    pub fsuid: u32,
    /// 文件系统组 ID
    pub fsgid: u32,
}

impl Credential {
    /// 创建 root 用户凭证
    pub const fn root() -> Self {
        Self {
            uid: ROOT_UID,
            gid: ROOT_GID,
            fsuid: ROOT_UID,
            fsgid: ROOT_GID,
        }
    }

    /// 创建普通用户凭证
    pub const fn user(uid: u32, gid: u32) -> Self {
        Self {
            uid,
            gid,
            fsuid: uid,
            fsgid: gid,
        }
    }

    /// 检查是否为 root 用户（按文件系统 UID 判断）
    pub fn is_root(&self) -> bool {
        self.fsuid == ROOT_UID
    }
}
