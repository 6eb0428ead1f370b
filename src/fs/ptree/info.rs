//! `proc_info.txt` 的内容格式与进程目录命名
//!
//! ```text
//! process name: bash
//! pid: 51
//! tty name: pts0
//! ```
//!
//! 名称中的 `\`、换行和回车写作 `\\`、`\n`、`\r`，每个字段保持单行。

use alloc::format;
use alloc::string::String;
use core::fmt::{self, Write};

use crate::config::TTY_PLACEHOLDER;

/// 一个进程的描述记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcInfo {
    /// 进程名
    pub name: String,
    /// 进程 id
    pub pid: u32,
    /// 控制终端名，没有时为 None
    pub tty: Option<String>,
}

impl ProcInfo {
    /// 创建记录
    pub fn new(name: &str, pid: u32, tty: Option<&str>) -> Self {
        Self {
            name: String::from(name),
            pid,
            tty: tty.map(String::from),
        }
    }

    /// 生成文件内容
    pub fn render(&self) -> String {
        format!("{}", self)
    }

    /// 解析文件内容
    ///
    /// `tty name: NA` 解析为 `None`。格式不符时返回 `None`。
    pub fn parse(text: &str) -> Option<Self> {
        let mut lines = text.lines();
        let name = lines.next()?.strip_prefix("process name: ")?;
        let pid = lines.next()?.strip_prefix("pid: ")?.parse().ok()?;
        let tty = lines.next()?.strip_prefix("tty name: ")?;
        if lines.next().is_some() {
            return None;
        }
        let tty = if tty == TTY_PLACEHOLDER {
            None
        } else {
            Some(unescape(tty)?)
        };
        Some(Self {
            name: unescape(name)?,
            pid,
            tty,
        })
    }
}

impl fmt::Display for ProcInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "process name: {}", Escaped(&self.name))?;
        writeln!(f, "pid: {}", self.pid)?;
        match &self.tty {
            Some(tty) => writeln!(f, "tty name: {}", Escaped(tty)),
            None => writeln!(f, "tty name: {}", TTY_PLACEHOLDER),
        }
    }
}

/// 按单行字段输出，转义 `\`、`\n`、`\r`
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                c => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

fn unescape(field: &str) -> Option<String> {
    let mut out = String::with_capacity(field.len());
    let mut chars = field.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            '\\' => out.push('\\'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            _ => return None,
        }
    }
    Some(out)
}

/// 进程目录名：`<comm>_<pid>`
///
/// 进程名中的 `/` 和 NUL 不能出现在路径组件里，替换为 `!`。
pub fn dir_name(comm: &str, pid: u32) -> String {
    let comm: String = comm
        .chars()
        .map(|c| if c == '/' || c == '\0' { '!' } else { c })
        .collect();
    format!("{}_{}", comm, pid)
}
