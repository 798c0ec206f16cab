//! # request 命令实现
//!
//! 解释输入并生成结构生成后端的请求体。
//!
//! ## 功能
//! - 按规则决定是否改走 LLM 路径（显式要求，或长句且非外部来源）
//! - 输出到终端或写入文件
//!
//! ## 依赖关系
//! - 使用 `cli/request.rs` 定义的参数
//! - 使用 `interpreter/`, `models/`
//! - 使用 `utils/output.rs`

use crate::cli::request::RequestArgs;
use crate::error::{ChatmatError, Result};
use crate::interpreter;
use crate::models::{should_use_llm, CalculationRequest, LlmProvider, StructureRequest};
use crate::utils::output;

use std::fs;

/// 执行 request 命令
pub fn execute(args: RequestArgs) -> Result<()> {
    let text = args.text.join(" ");
    let payload = build_payload(&text, args.llm, args.agent);
    let json = payload.to_json_pretty()?;

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{}\n", json)).map_err(|e| ChatmatError::FileWriteError {
                path: path.display().to_string(),
                source: e,
            })?;
            output::print_success(&format!(
                "Request for '{}' written to {}",
                payload.material_name,
                path.display()
            ));
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// 解释输入并按需补充 LLM 字段
pub fn build_payload(text: &str, force_llm: bool, agent: Option<LlmProvider>) -> CalculationRequest {
    let parsed = interpreter::parse(text);
    let request = augment(text, parsed, force_llm, agent);
    CalculationRequest::from_request(&request, text)
}

fn augment(
    text: &str,
    request: StructureRequest,
    force_llm: bool,
    agent: Option<LlmProvider>,
) -> StructureRequest {
    if !should_use_llm(text, &request, force_llm) {
        return request;
    }

    match agent {
        Some(provider) => request.with_llm(provider),
        None => request.with_llm_unspecified(),
    }
}
