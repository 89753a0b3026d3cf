//! # 规范化模块
//!
//! 行尾统一为 CRLF，并去除每行末尾空白。
//!
//! ## 依赖关系
//! - 被 `commands/normalize.rs` 调用
//! - 子模块: transform (纯文本变换), file (单文件读写)

pub mod file;
pub mod transform;

pub use file::normalize_file;
