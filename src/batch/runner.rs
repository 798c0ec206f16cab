//! # 批量解释执行器
//!
//! 并行读取语句文件并逐句解释。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代（按文件划分任务）
//! - 进度条显示
//! - 错误收集与汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `batch/collector.rs` 读取语句
//! - 使用 `interpreter` 解释每一句
//! - 使用 `utils/progress.rs` 创建进度条

use crate::batch::collector;
use crate::interpreter;
use crate::models::StructureRequest;
use crate::utils::progress;

use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// 一句语句的解释结果
#[derive(Debug, Clone)]
pub struct BatchRecord {
    pub file: String,
    pub line: usize,
    pub text: String,
    pub request: StructureRequest,
}

/// 单个文件处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult {
    /// 处理成功
    Success(Vec<BatchRecord>),
    /// 跳过（文件中没有语句）
    Skipped(String),
    /// 处理失败
    Failed(String, String), // (文件路径, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功处理的文件数
    pub success: usize,
    pub skipped: usize,
    pub failed: usize,
    pub failures: Vec<(String, String)>,
    /// 所有解释结果（按文件、行号排序）
    pub records: Vec<BatchRecord>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Success(records) => {
                self.success += 1;
                self.records.extend(records);
            }
            ProcessResult::Skipped(_) => self.skipped += 1,
            ProcessResult::Failed(path, err) => {
                self.failed += 1;
                self.failures.push((path, err));
            }
        }
    }

    pub fn total(&self) -> usize {
        self.success + self.skipped + self.failed
    }

    /// 指向外部来源的语句数
    pub fn external_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.request.is_external())
            .count()
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    /// 并行处理文件列表
    pub fn run(&self, files: &[PathBuf]) -> BatchResult {
        let pb = progress::create_progress_bar(files.len() as u64, "Interpreting");

        let work = || -> Vec<ProcessResult> {
            files
                .par_iter()
                .map(|file| {
                    let result = process_file(file);
                    pb.inc(1);
                    result
                })
                .collect()
        };

        // 线程池创建失败时退回全局池
        let results = match rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
        {
            Ok(pool) => pool.install(work),
            Err(_) => work(),
        };

        pb.finish_and_clear();

        let mut batch_result = BatchResult::default();
        for result in results {
            batch_result.merge(result);
        }

        batch_result
    }
}

/// 解释单个文件中的所有语句
fn process_file(path: &Path) -> ProcessResult {
    let display = path.display().to_string();

    let utterances = match collector::read_utterances(path) {
        Ok(u) => u,
        Err(e) => return ProcessResult::Failed(display, e.to_string()),
    };

    if utterances.is_empty() {
        return ProcessResult::Skipped(display);
    }

    let records = utterances
        .into_iter()
        .map(|u| BatchRecord {
            file: display.clone(),
            line: u.line,
            request: interpreter::parse(&u.text),
            text: u.text,
        })
        .collect();

    ProcessResult::Success(records)
}
