//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 命令结构
//! `linefix [OPTIONS] [PATTERN]...`
//!
//! 未给出任何模式时不由 clap 报错，交给 `commands/` 输出用法并以状态 1 退出。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/normalize.rs`

use clap::Parser;
use std::path::Path;

/// linefix - 行尾规范化工具
#[derive(Parser, Debug)]
#[command(name = "linefix")]
#[command(version)]
#[command(
    about = "Rewrite files with CRLF line endings and no trailing whitespace",
    long_about = None
)]
pub struct Cli {
    /// Files or glob patterns to normalize in place ('**' matches across directories)
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Number of parallel jobs per pattern (0 = auto)
    #[arg(short, long, env = "LINEFIX_JOBS", default_value_t = 1)]
    pub jobs: usize,

    /// Print a processed/failed summary to stderr when done
    #[arg(long, env = "LINEFIX_SUMMARY", default_value_t = false)]
    pub summary: bool,

    /// Disable colored output
    #[arg(long, default_value_t = false)]
    pub no_color: bool,
}

/// 当前可执行文件名，用于用法提示
pub fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(|p| p.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "linefix".to_string())
}
