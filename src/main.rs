//! # linefix - 行尾规范化工具
//!
//! 将给定文件（支持 glob 模式）的每一行去除行尾空白，
//! 并统一以 CRLF 结尾，就地覆盖写回。
//!
//! ## 用法
//! ```text
//! linefix [OPTIONS] <PATTERN>...
//! ```
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/      (模式展开与批量执行)
//!   │     └── normalizer/ (文本变换与文件读写)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod normalizer;
mod utils;

use clap::Parser;
use cli::Cli;
use error::LinefixError;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        match e {
            LinefixError::Usage { .. } => utils::output::print_usage(&e.to_string()),
            _ => utils::output::print_error(&error::describe(&e)),
        }
        std::process::exit(1);
    }
}
