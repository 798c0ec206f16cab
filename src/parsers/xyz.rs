//! # XYZ 格式解析器
//!
//! 解析后端返回的 `structure_xyz` 字段。
//!
//! ## XYZ 格式说明
//! ```text
//! N                      <- 原子数
//! comment                <- 注释行（可为空）
//! Element x y z          <- 每行一个原子，笛卡尔坐标 (Å)
//! ...
//! ```
//!
//! ## 依赖关系
//! - 被 `models/wire.rs` 使用

use crate::error::{ChatmatError, Result};
use std::collections::BTreeMap;

/// XYZ 中的单个原子
#[derive(Debug, Clone, PartialEq)]
pub struct XyzAtom {
    pub element: String,
    /// 笛卡尔坐标 [x, y, z]
    pub position: [f64; 3],
}

/// 解析后的 XYZ 结构块
#[derive(Debug, Clone)]
pub struct XyzBlock {
    /// 首行声明的原子数
    pub declared_count: usize,
    pub comment: String,
    pub atoms: Vec<XyzAtom>,
}

impl XyzBlock {
    /// 化学式（元素按字母序）
    pub fn formula(&self) -> String {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

        for atom in &self.atoms {
            *counts.entry(atom.element.as_str()).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .map(|(el, count)| {
                if count == 1 {
                    el.to_string()
                } else {
                    format!("{}{}", el, count)
                }
            })
            .collect::<Vec<_>>()
            .join("")
    }

    /// 出现过的元素（按首次出现顺序）
    pub fn species(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for atom in &self.atoms {
            if !seen.contains(&atom.element.as_str()) {
                seen.push(atom.element.as_str());
            }
        }
        seen
    }
}

/// 从字符串内容解析 XYZ 格式
pub fn parse_xyz_content(content: &str, source_name: &str) -> Result<XyzBlock> {
    let parse_err = |reason: String| ChatmatError::ParseError {
        format: "xyz".to_string(),
        source_name: source_name.to_string(),
        reason,
    };

    // 跳过开头的空行
    let mut lines = content.lines().skip_while(|l| l.trim().is_empty());

    let count_line = lines
        .next()
        .ok_or_else(|| parse_err("Empty XYZ block".to_string()))?;
    let declared_count: usize = count_line
        .trim()
        .parse()
        .map_err(|_| parse_err(format!("Invalid atom count line: '{}'", count_line.trim())))?;

    // 注释行允许为空
    let comment = lines.next().unwrap_or("").trim().to_string();

    let mut atoms = Vec::with_capacity(declared_count);
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(parse_err(format!("Malformed atom line: '{}'", line)));
        }

        match (
            parts[1].parse::<f64>(),
            parts[2].parse::<f64>(),
            parts[3].parse::<f64>(),
        ) {
            (Ok(x), Ok(y), Ok(z)) => atoms.push(XyzAtom {
                element: parts[0].to_string(),
                position: [x, y, z],
            }),
            _ => return Err(parse_err(format!("Invalid coordinates: '{}'", line))),
        }
    }

    Ok(XyzBlock {
        declared_count,
        comment,
        atoms,
    })
}
