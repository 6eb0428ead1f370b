//! 主机端测试支持
//!
//! 与内核内的测试框架保持相同的写法（`test_case!` + `kassert!`），
//! 但在主机上直接展开为 `#[test]` 函数，失败即 panic。
