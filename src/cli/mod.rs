//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `parse`: 解释一句输入并显示结构请求
//! - `request`: 生成发往结构生成后端的请求体
//! - `batch`: 批量解释语句文件并导出
//! - `inspect`: 校验后端返回的计算结果
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: parse, request, batch, inspect

pub mod batch;
pub mod inspect;
pub mod parse;
pub mod request;

use clap::{Parser, Subcommand};

/// ChatMat - 自然语言晶体结构请求解释器
#[derive(Parser)]
#[command(name = "chatmat")]
#[command(version)]
#[command(about = "Turn natural-language crystal structure requests into structured requests", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Interpret one utterance and show the resulting structure request
    Parse(parse::ParseArgs),

    /// Build the JSON payload sent to the structure-generation backend
    Request(request::RequestArgs),

    /// Interpret every utterance in a file or directory and export the results
    Batch(batch::BatchArgs),

    /// Validate a backend response and print the result summary
    Inspect(inspect::InspectArgs),
}
