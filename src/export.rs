//! # 批量结果导出
//!
//! 将批量解释结果导出为 CSV 或 JSON Lines。
//!
//! ## 支持格式
//! - CSV: 每句一行，列为来源文件、行号、原文及各解析字段
//! - JSONL: 每句一个 JSON 对象，包含完整的 `StructureRequest`
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `batch/runner.rs` 的 BatchRecord
//! - 使用 `csv` 库写入 CSV 文件，`serde_json` 写入 JSONL

use crate::batch::BatchRecord;
use crate::error::{ChatmatError, Result};

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const CSV_HEADER: [&str; 9] = [
    "file",
    "line",
    "text",
    "material_name",
    "supercell",
    "structure_type",
    "lattice_parameter",
    "compound",
    "source_type",
];

/// 将一条记录转换为 CSV 行
fn csv_row(record: &BatchRecord) -> [String; 9] {
    let req = &record.request;
    let [a, b, c] = req.supercell_dims;
    [
        record.file.clone(),
        record.line.to_string(),
        record.text.clone(),
        req.material_name.clone(),
        format!("{}x{}x{}", a, b, c),
        req.structure_type
            .map(|t| t.to_string())
            .unwrap_or_default(),
        req.lattice_parameter
            .map(|v| v.to_string())
            .unwrap_or_default(),
        req.compound
            .as_ref()
            .map(|els| els.join(" "))
            .unwrap_or_default(),
        req.source_type.map(|s| s.to_string()).unwrap_or_default(),
    ]
}

/// 导出为 CSV 格式
pub fn to_csv(records: &[BatchRecord], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(CSV_HEADER)?;
    for record in records {
        wtr.write_record(csv_row(record))?;
    }

    wtr.flush().map_err(|e| ChatmatError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[derive(Serialize)]
struct JsonLine<'a> {
    file: &'a str,
    line: usize,
    text: &'a str,
    request: &'a crate::models::StructureRequest,
}

/// 导出为 JSON Lines 格式
pub fn to_jsonl(records: &[BatchRecord], output_path: &Path) -> Result<()> {
    let write_err = |e: std::io::Error| ChatmatError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    };

    let file = File::create(output_path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);

    for record in records {
        let line = JsonLine {
            file: &record.file,
            line: record.line,
            text: &record.text,
            request: &record.request,
        };
        serde_json::to_writer(&mut writer, &line)?;
        writer.write_all(b"\n").map_err(write_err)?;
    }

    writer.flush().map_err(write_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter;
    use std::fs;

    fn record(line: usize, text: &str) -> BatchRecord {
        BatchRecord {
            file: "prompts.txt".to_string(),
            line,
            text: text.to_string(),
            request: interpreter::parse(text),
        }
    }

    #[test]
    fn test_csv_export() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.csv");
        let records = vec![record(1, "SiO2 2x2x2"), record(2, "mp-149")];

        to_csv(&records, &out).unwrap();

        let mut rdr = csv::Reader::from_path(&out).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][3], "SiO2");
        assert_eq!(&rows[0][4], "2x2x2");
        assert_eq!(&rows[0][5], "quartz");
        assert_eq!(&rows[0][7], "Si O");
        assert_eq!(&rows[1][8], "mp");
        assert_eq!(&rows[1][6], "");
    }

    #[test]
    fn test_jsonl_export() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.jsonl");
        to_jsonl(&[record(7, "cod-2000001")], &out).unwrap();

        let content = fs::read_to_string(&out).unwrap();
        let value: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
        assert_eq!(value["line"], 7);
        assert_eq!(value["request"]["material_name"], "2000001");
        assert_eq!(value["request"]["source_type"], "cod");
    }
}
