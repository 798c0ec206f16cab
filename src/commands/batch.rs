//! # batch 命令实现
//!
//! 批量解释语句文件并导出结果。
//!
//! ## 功能
//! - 收集单文件或目录中的语句文件
//! - 并行解释（每行一句）
//! - 导出为 CSV 或 JSON Lines
//!
//! ## 依赖关系
//! - 使用 `cli/batch.rs` 定义的参数
//! - 使用 `batch/`, `export.rs`
//! - 使用 `utils/output.rs`

use crate::batch::{BatchRunner, FileCollector};
use crate::cli::batch::{BatchArgs, ExportFormat};
use crate::error::{ChatmatError, Result};
use crate::export;
use crate::utils::output;

/// 执行 batch 命令
pub fn execute(args: BatchArgs) -> Result<()> {
    output::print_header(&format!("Batch interpreting to {}", args.format));

    if args.output.exists() && !args.overwrite {
        return Err(ChatmatError::InvalidArgument(format!(
            "Output file '{}' exists (use --overwrite)",
            args.output.display()
        )));
    }

    let files = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .collect()?;

    if files.is_empty() {
        return Err(ChatmatError::NoFilesFound {
            pattern: args.pattern,
        });
    }

    output::print_info(&format!("Found {} utterance file(s)", files.len()));

    let result = BatchRunner::new(args.jobs).run(&files);

    for (path, err) in &result.failures {
        output::print_warning(&format!("{}: {}", path, err));
    }

    if result.records.is_empty() {
        output::print_warning("No utterances found in the input files.");
        return Ok(());
    }

    match args.format {
        ExportFormat::Csv => export::to_csv(&result.records, &args.output)?,
        ExportFormat::Jsonl => export::to_jsonl(&result.records, &args.output)?,
    }

    output::print_done(&format!(
        "Interpreted {} utterance(s) from {}/{} file(s) into '{}' ({} skipped, {} failed, {} external source)",
        result.records.len(),
        result.success,
        result.total(),
        args.output.display(),
        result.skipped,
        result.failed,
        result.external_count()
    ));

    Ok(())
}
