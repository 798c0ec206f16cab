//! # 批量处理模块
//!
//! 批量解释语句文件中的用户输入。
//!
//! ## 功能
//! - 自动检测输入类型（文件/目录）
//! - 收集匹配文件列表
//! - 并行解释
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::{FileCollector, Utterance};
pub use runner::{BatchRecord, BatchResult, BatchRunner, ProcessResult};
