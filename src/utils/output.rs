//! # 终端输出工具
//!
//! 所有控制台输出集中于此。
//!
//! stdout 只输出逐文件的处理报告与用法提示；
//! 警告、汇总和内部错误写到 stderr。
//!
//! ## 依赖关系
//! - 被 `main.rs`, `commands/` 使用
//! - 使用 `colored` crate

use colored::Colorize;
use std::path::Path;

/// 关闭彩色输出
pub fn disable_color() {
    colored::control::set_override(false);
}

/// 打印单个文件处理成功
pub fn print_processed(path: &Path) {
    println!("{} {}", "Processed:".green(), path.display());
}

/// 打印单个文件处理失败
pub fn print_failure(path: &Path, message: &str) {
    println!(
        "{} {}: {}",
        "Error processing".red(),
        path.display(),
        message
    );
}

/// 打印用法提示
pub fn print_usage(msg: &str) {
    println!("{}", msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    eprintln!("{} {}", "[DONE]".green().bold(), msg);
}
