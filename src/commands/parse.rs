//! # parse 命令实现
//!
//! 解释单句输入并显示结果。
//!
//! ## 功能
//! - 表格或 JSON 输出
//! - `--verbose` 显示各阶段命中情况
//!
//! ## 依赖关系
//! - 使用 `cli/parse.rs` 定义的参数
//! - 使用 `interpreter/`, `models/`
//! - 使用 `utils/output.rs`

use crate::cli::parse::{ParseArgs, ParseFormat};
use crate::error::Result;
use crate::interpreter;
use crate::models::StructureRequest;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 表格中的一行
#[derive(Debug, Clone, Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// 执行 parse 命令
pub fn execute(args: ParseArgs) -> Result<()> {
    let text = args.text.join(" ");
    let interp = interpreter::interpret(&text);

    match args.format {
        ParseFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&interp.request)?);
        }
        ParseFormat::Table => {
            output::print_header(&format!("Interpreting \"{}\"", text));
            println!("{}", Table::new(field_rows(&interp.request)));
        }
    }

    if args.verbose {
        output::print_separator();
        if interp.trace.is_empty() {
            output::print_info("No stage matched; all fields are defaults");
        }
        for hit in &interp.trace {
            output::print_stage(&hit.stage.to_string(), &hit.detail);
        }
    }

    Ok(())
}

/// 将结构请求展开为表格行
fn field_rows(req: &StructureRequest) -> Vec<FieldRow> {
    let or_dash = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());

    vec![
        FieldRow {
            field: "Material",
            value: req.material_name.clone(),
        },
        FieldRow {
            field: "Supercell",
            value: req.supercell_label(),
        },
        FieldRow {
            field: "Structure type",
            value: or_dash(req.structure_type.map(|t| t.to_string())),
        },
        FieldRow {
            field: "Lattice (Å)",
            value: or_dash(req.lattice_parameter.map(|a| format!("{:.4}", a))),
        },
        FieldRow {
            field: "Compound",
            value: or_dash(req.compound.as_ref().map(|els| els.join(", "))),
        },
        FieldRow {
            field: "Source",
            value: or_dash(req.source_type.map(|s| s.to_string())),
        },
    ]
}
