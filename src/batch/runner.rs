//! # 批量执行器
//!
//! 对一个模式展开出的候选路径逐个执行处理函数。
//!
//! ## 功能
//! - 默认单线程顺序执行，结果即时汇报
//! - `jobs > 1` 时使用 rayon 线程池并行处理，结果按原顺序汇报
//! - 错误收集与汇总统计
//!
//! ## 依赖关系
//! - 被 `commands/normalize.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::Result;
use crate::utils::progress;

use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// 单个文件处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessResult {
    /// 处理成功
    Success(PathBuf),
    /// 跳过（非普通文件）
    Skipped(PathBuf),
    /// 处理失败
    Failed(PathBuf, String), // (文件路径, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情
    pub failures: Vec<(PathBuf, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Success(_) => self.success += 1,
            ProcessResult::Skipped(_) => self.skipped += 1,
            ProcessResult::Failed(path, err) => {
                self.failed += 1;
                self.failures.push((path, err));
            }
        }
    }

    /// 合并另一批次的统计
    pub fn extend(&mut self, other: BatchResult) {
        self.success += other.success;
        self.skipped += other.skipped;
        self.failed += other.failed;
        self.failures.extend(other.failures);
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.skipped + self.failed
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行线程池（单线程时为 None）
    pool: Option<rayon::ThreadPool>,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(jobs: usize) -> Result<Self> {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };

        let pool = if jobs > 1 {
            Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(jobs)
                    .build()?,
            )
        } else {
            None
        };

        Ok(Self { pool })
    }

    /// 处理文件列表，按输入顺序对每个结果调用 `report`
    ///
    /// 列表中的路径不能重复，并行模式下同一文件不会被同时处理。
    pub fn run<F, R>(&self, files: Vec<PathBuf>, processor: F, mut report: R) -> BatchResult
    where
        F: Fn(&Path) -> ProcessResult + Sync + Send,
        R: FnMut(&ProcessResult),
    {
        let mut batch_result = BatchResult::default();

        match &self.pool {
            None => {
                for file in &files {
                    let result = processor(file.as_path());
                    report(&result);
                    batch_result.merge(result);
                }
            }
            Some(pool) => {
                let pb = progress::create_progress_bar(files.len() as u64, "Normalizing");

                let results: Vec<ProcessResult> = pool.install(|| {
                    files
                        .par_iter()
                        .map(|file| {
                            let result = processor(file.as_path());
                            pb.inc(1);
                            result
                        })
                        .collect()
                });

                pb.finish_and_clear();

                for result in results {
                    report(&result);
                    batch_result.merge(result);
                }
            }
        }

        batch_result
    }
}
