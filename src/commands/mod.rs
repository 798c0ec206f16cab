//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `interpreter/`, `models/`, `batch/`, `utils/`
//! - 子模块: parse, request, batch, inspect

pub mod batch;
pub mod inspect;
pub mod parse;
pub mod request;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Parse(args) => parse::execute(args),
        Commands::Request(args) => request::execute(args),
        Commands::Batch(args) => batch::execute(args),
        Commands::Inspect(args) => inspect::execute(args),
    }
}
