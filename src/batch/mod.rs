//! # 批量处理模块
//!
//! 提供模式展开与批量执行能力。
//!
//! ## 功能
//! - glob 模式展开（含 `**` 递归）
//! - 逐文件执行并收集结果
//! - 可选并行处理
//! - 统计汇总
//!
//! ## 依赖关系
//! - 被 `commands/normalize.rs` 使用
//! - 使用 `glob` 展开模式
//! - 使用 `rayon` 进行并行处理

pub mod collector;
pub mod runner;

pub use collector::PatternCollector;
pub use runner::{BatchResult, BatchRunner, ProcessResult};
