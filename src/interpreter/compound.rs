//! # 化合物识别
//!
//! 两级识别，先命中者生效：
//! 1. 化合物词典：小写子串匹配（`nacl`, `sodium chloride` ...），
//!    可附带强制的结构类型（如 SiO2 → quartz）
//! 2. 化学式启发式：在原始大小写文本中查找类似化学式的记号
//!    - 含数字（`TiO2`）：按大写字母切分元素，至少两种不同元素才接受
//!    - 恰为两个大写字母（`MO`）：视为两元素化合物
//!
//! ## 依赖关系
//! - 被 `interpreter/mod.rs` 使用
//! - 使用 `interpreter/vocabulary.rs` 的停用词表

use super::vocabulary::is_stop_word;
use crate::models::StructureType;

use regex::Regex;
use std::sync::LazyLock;

/// 词典中的化合物条目
#[derive(Debug, Clone, Copy)]
pub struct CompoundEntry {
    /// 规范显示名
    pub name: &'static str,
    /// 元素列表（顺序有意义）
    pub elements: &'static [&'static str],
    /// 强制结构类型
    pub structure_type: Option<StructureType>,
}

const fn entry(name: &'static str, elements: &'static [&'static str]) -> CompoundEntry {
    CompoundEntry {
        name,
        elements,
        structure_type: None,
    }
}

const SIO2: CompoundEntry = CompoundEntry {
    name: "SiO2",
    elements: &["Si", "O"],
    structure_type: Some(StructureType::Quartz),
};

/// 化合物词典（顺序即优先级）
pub const COMPOUND_TABLE: &[(&str, CompoundEntry)] = &[
    ("nacl", entry("NaCl", &["Na", "Cl"])),
    ("sodium chloride", entry("NaCl", &["Na", "Cl"])),
    ("mgo", entry("MgO", &["Mg", "O"])),
    ("magnesium oxide", entry("MgO", &["Mg", "O"])),
    ("gan", entry("GaN", &["Ga", "N"])),
    ("gallium nitride", entry("GaN", &["Ga", "N"])),
    ("gap", entry("GaP", &["Ga", "P"])),
    ("gallium phosphide", entry("GaP", &["Ga", "P"])),
    ("zns", entry("ZnS", &["Zn", "S"])),
    ("zinc sulfide", entry("ZnS", &["Zn", "S"])),
    ("tio2", entry("TiO2", &["Ti", "O"])),
    ("titanium dioxide", entry("TiO2", &["Ti", "O"])),
    ("sio2", SIO2),
    ("silicon dioxide", SIO2),
    ("quartz", SIO2),
    ("catio3", entry("CaTiO3", &["Ca", "Ti", "O"])),
    ("calcium titanate", entry("CaTiO3", &["Ca", "Ti", "O"])),
];

static FORMULA_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z][a-z]?[A-Z]?[a-z]?\d*)\b").unwrap());

static ELEMENT_SYMBOL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z][a-z]?").unwrap());

/// 化合物识别结果
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundMatch {
    pub name: String,
    pub elements: Vec<String>,
    pub structure_type: Option<StructureType>,
}

impl From<&CompoundEntry> for CompoundMatch {
    fn from(entry: &CompoundEntry) -> Self {
        CompoundMatch {
            name: entry.name.to_string(),
            elements: entry.elements.iter().map(|e| e.to_string()).collect(),
            structure_type: entry.structure_type,
        }
    }
}

/// 第一级：词典子串匹配
pub fn from_dictionary(text_lower: &str) -> Option<CompoundMatch> {
    COMPOUND_TABLE
        .iter()
        .find(|(key, _)| text_lower.contains(key))
        .map(|(_, entry)| CompoundMatch::from(entry))
}

/// 第二级：化学式启发式（作用于原始大小写文本）
///
/// 含数字的记号须切分出至少两种不同元素才被接受。不满足的记号
/// （如 `H2`、`OO2`）被跳过，不会写入 `material_name`，
/// 后续的单元素识别照常进行。
pub fn from_formula(text: &str) -> Option<CompoundMatch> {
    FORMULA_TOKEN
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|token| token.len() >= 2 && !is_stop_word(token))
        .find_map(|token| {
            let elements = if token.chars().any(|c| c.is_ascii_digit()) {
                split_formula(token)
            } else if token.len() == 2 && token.chars().all(|c| c.is_ascii_uppercase()) {
                token.chars().map(|c| c.to_string()).collect()
            } else {
                return None;
            };

            (elements.len() >= 2).then(|| CompoundMatch {
                name: token.to_string(),
                elements,
                structure_type: None,
            })
        })
}

/// 按大写字母切分元素符号，去重并保留首次出现顺序
fn split_formula(token: &str) -> Vec<String> {
    let mut elements: Vec<String> = Vec::new();
    for m in ELEMENT_SYMBOL.find_iter(token) {
        if !elements.iter().any(|e| e == m.as_str()) {
            elements.push(m.as_str().to_string());
        }
    }
    elements
}
