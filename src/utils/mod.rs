//! # 工具函数模块
//!
//! 提供终端输出、进度条等工具。
//!
//! ## 依赖关系
//! - 被 `commands/normalize.rs` 和 `batch/` 使用
//! - 子模块: output, progress

pub mod output;
pub mod progress;
