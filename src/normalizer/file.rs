//! # 单文件规范化
//!
//! 读取整个文件 → 变换 → 原样字节写回（不做换行转换）。
//!
//! ## 依赖关系
//! - 被 `commands/normalize.rs` 调用
//! - 使用 `normalizer/transform.rs`

use super::transform::normalize_content;
use crate::error::{LinefixError, Result};

use std::fs;
use std::path::Path;

/// 就地规范化单个文件
pub fn normalize_file(path: &Path) -> Result<()> {
    let bytes = fs::read(path).map_err(|e| LinefixError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let content = String::from_utf8(bytes).map_err(|e| LinefixError::DecodeError {
        path: path.display().to_string(),
        source: e,
    })?;

    let normalized = normalize_content(&content);

    fs::write(path, normalized.as_bytes()).map_err(|e| LinefixError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
