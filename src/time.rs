//! 时间相关功能
//!
//! 本库不直接访问硬件时钟：宿主通过 [`set_clock`] 安装时钟源，
//! 未安装时使用 [`REALTIME`] 中记录的墙上时间。

use core::ops::Sub;

use spin::RwLock;

/// 时间戳结构
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct TimeSpec {
    /// 秒
    pub sec: i64,
    /// 纳秒
    pub nsec: i64,
}

const NSEC_PER_SEC: i64 = 1_000_000_000;

/// 时钟源函数
pub type ClockFn = fn() -> TimeSpec;

lazy_static::lazy_static! {
    /// 墙上时钟，记录自 1970-01-01 00:00:00 UTC 以来的时间
    pub static ref REALTIME: RwLock<TimeSpec> = RwLock::new(TimeSpec::zero());
}

static CLOCK: RwLock<Option<ClockFn>> = RwLock::new(None);

impl TimeSpec {
    /// 创建时间戳，纳秒部分会被规范化到 [0, 1e9)
    pub fn new(sec: i64, nsec: i64) -> Self {
        Self {
            sec: sec + nsec.div_euclid(NSEC_PER_SEC),
            nsec: nsec.rem_euclid(NSEC_PER_SEC),
        }
    }

    /// 创建零时间戳
    pub const fn zero() -> Self {
        Self { sec: 0, nsec: 0 }
    }

    /// 当前时间戳
    pub fn now() -> Self {
        match *CLOCK.read() {
            Some(clock) => clock(),
            None => *REALTIME.read(),
        }
    }

    /// 转换为纳秒
    pub fn as_nanos(&self) -> i128 {
        self.sec as i128 * NSEC_PER_SEC as i128 + self.nsec as i128
    }
}

impl Sub for TimeSpec {
    type Output = TimeSpec;

    fn sub(self, rhs: Self) -> Self::Output {
        TimeSpec::new(self.sec - rhs.sec, self.nsec - rhs.nsec)
    }
}

/// 安装时钟源，之后 [`TimeSpec::now`] 调用该函数
pub fn set_clock(clock: ClockFn) {
    *CLOCK.write() = Some(clock);
}

/// 移除时钟源，回退到 [`REALTIME`]
pub fn clear_clock() {
    *CLOCK.write() = None;
}

/// 更新墙上时钟
pub fn update_realtime(time: &TimeSpec) {
    let mut realtime = REALTIME.write();
    *realtime = *time;
}
