//! # inspect 命令实现
//!
//! 读取结构生成后端的 JSON 响应，校验 XYZ 结构块并显示结果摘要。
//!
//! ## 功能
//! - 校验状态字段与原子数
//! - 报告 XYZ 原子数不一致、单原子结构等可疑情况
//! - 可选保存 XYZ 文件
//!
//! ## 依赖关系
//! - 使用 `cli/inspect.rs` 定义的参数
//! - 使用 `models/wire.rs`, `interpreter/`
//! - 使用 `utils/output.rs`

use crate::cli::inspect::InspectArgs;
use crate::error::{ChatmatError, Result};
use crate::interpreter;
use crate::models::wire::format_summary;
use crate::models::CalculationResponse;
use crate::utils::output;

use std::fs;

/// 执行 inspect 命令
pub fn execute(args: InspectArgs) -> Result<()> {
    let content = fs::read_to_string(&args.response).map_err(|e| ChatmatError::FileReadError {
        path: args.response.display().to_string(),
        source: e,
    })?;

    let checked = CalculationResponse::from_json(&content)?.check()?;

    output::print_header(&format!("Backend response: {}", checked.response.material));

    for warning in &checked.warnings {
        output::print_warning(&warning.to_string());
    }

    // 没有原始输入时只显示默认的超胞与结构类型
    let request = args
        .text
        .as_deref()
        .map(interpreter::parse)
        .unwrap_or_default();

    println!("{}", format_summary(&request, &checked.response));
    output::print_separator();
    output::print_info(&format!(
        "Formula {} | species: {} | comment: '{}'",
        checked.structure.formula(),
        checked.structure.species().join(", "),
        checked.structure.comment
    ));

    if let Some(path) = &args.save_xyz {
        fs::write(path, &checked.response.structure_xyz).map_err(|e| {
            ChatmatError::FileWriteError {
                path: path.display().to_string(),
                source: e,
            }
        })?;
        output::print_success(&format!("Structure saved to {}", path.display()));
    }

    Ok(())
}
