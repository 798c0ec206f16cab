//! # ChatMat 命令行入口
//!
//! ## 子命令
//! - `parse`   - 解释一句输入
//! - `request` - 生成后端请求体
//! - `batch`   - 批量解释语句文件
//! - `inspect` - 校验后端响应

use chatmat::cli::Cli;
use chatmat::{commands, utils};
use clap::Parser;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
