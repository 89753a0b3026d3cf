//! # normalize 命令实现
//!
//! 逐个展开模式，就地规范化匹配到的普通文件。
//!
//! ## 功能
//! - 未给出模式时返回用法错误
//! - 按给定顺序处理模式（重复模式重复处理）
//! - 非普通文件静默跳过
//! - 单个文件失败只报告，不中断批次
//!
//! ## 依赖关系
//! - 使用 `cli/mod.rs` 定义的参数
//! - 使用 `batch/`, `normalizer/`
//! - 使用 `utils/output.rs`

use crate::batch::{BatchResult, BatchRunner, PatternCollector, ProcessResult};
use crate::cli::{self, Cli};
use crate::error::{self, LinefixError, Result};
use crate::normalizer;
use crate::utils::output;

use std::path::Path;

/// 执行 normalize 命令
pub fn execute(args: Cli) -> Result<()> {
    if args.no_color || std::env::var_os("NO_COLOR").is_some() {
        output::disable_color();
    }

    if args.patterns.is_empty() {
        return Err(LinefixError::Usage {
            program: cli::program_name(),
        });
    }

    let collector = PatternCollector::new();
    let runner = BatchRunner::new(args.jobs)?;
    let mut totals = BatchResult::default();

    for pattern in &args.patterns {
        let candidates = match collector.collect(pattern) {
            Ok(paths) => paths,
            Err(e) => {
                output::print_warning(&format!("{}; matching it literally", error::describe(&e)));
                collector.collect_literal(pattern)
            }
        };

        totals.extend(runner.run(candidates, process_candidate, report));
    }

    if args.summary {
        output::print_done(&format!(
            "{} processed, {} failed ({} candidates)",
            totals.success,
            totals.failed,
            totals.total()
        ));
        for (path, message) in &totals.failures {
            output::print_error(&format!("{}: {}", path.display(), message));
        }
    }

    Ok(())
}

/// 处理单个候选路径
///
/// 是否为普通文件在处理前一刻判断。
pub fn process_candidate(path: &Path) -> ProcessResult {
    if !path.is_file() {
        return ProcessResult::Skipped(path.to_path_buf());
    }

    match normalizer::normalize_file(path) {
        Ok(()) => ProcessResult::Success(path.to_path_buf()),
        Err(e) => ProcessResult::Failed(path.to_path_buf(), error::describe(&e)),
    }
}

fn report(result: &ProcessResult) {
    match result {
        ProcessResult::Success(path) => output::print_processed(path),
        ProcessResult::Failed(path, message) => output::print_failure(path, message),
        ProcessResult::Skipped(_) => {}
    }
}
