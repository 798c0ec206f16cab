//! # inspect 子命令 CLI 定义
//!
//! 校验结构生成后端返回的 JSON 响应。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/inspect.rs`

use clap::Args;
use std::path::PathBuf;

/// inspect 子命令参数
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Backend response JSON file
    pub response: PathBuf,

    /// Original utterance, used to label the summary with supercell and structure type
    #[arg(short, long)]
    pub text: Option<String>,

    /// Save the structure block to an .xyz file
    #[arg(long)]
    pub save_xyz: Option<PathBuf>,
}
