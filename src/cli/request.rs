//! # request 子命令 CLI 定义
//!
//! 生成发往结构生成后端的请求体 (JSON)。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/request.rs`

use crate::models::LlmProvider;

use clap::Args;
use std::path::PathBuf;

/// request 子命令参数
#[derive(Args, Debug)]
pub struct RequestArgs {
    /// The utterance to interpret
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// LLM provider used when the request is routed to the LLM path
    #[arg(short, long, value_enum, env = "CHATMAT_AGENT")]
    pub agent: Option<LlmProvider>,

    /// Always route the request to the LLM path
    #[arg(long, default_value_t = false)]
    pub llm: bool,

    /// Write the payload to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
