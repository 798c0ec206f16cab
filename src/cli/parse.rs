//! # parse 子命令 CLI 定义
//!
//! 解释单句输入。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/parse.rs`

use clap::{Args, ValueEnum};

/// 输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ParseFormat {
    /// Human-readable table
    Table,
    /// Pretty-printed JSON
    Json,
}

/// parse 子命令参数
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// The utterance to interpret, e.g. "FCC aluminum 2x2x2 with a=4.05"
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ParseFormat::Table)]
    pub format: ParseFormat,

    /// Show which extraction stage produced each field
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
