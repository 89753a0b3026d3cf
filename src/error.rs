//! # 统一错误处理模块
//!
//! 定义 linefix 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// linefix 统一错误类型
#[derive(Error, Debug)]
pub enum LinefixError {
    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Usage: {program} <files...>")]
    Usage { program: String },

    #[error("Invalid pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 解码错误
    // ─────────────────────────────────────────────────────────────
    #[error("File is not valid UTF-8: {path}")]
    DecodeError {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to start worker pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, LinefixError>;

/// 将错误及其 source 链拼接为单行消息
pub fn describe(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
