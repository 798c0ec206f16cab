//! # 单元素识别
//!
//! 仅在未识别出化合物时使用：
//! 1. 元素词典：小写子串匹配英文名或符号（`silicon`, `si` ...）
//! 2. 兜底：原始文本中第一个 1-2 字母、首字母大写的非停用词记号，
//!    原样作为元素符号（不与周期表核对）。词典未命中、或只得到默认的
//!    `Si` 时启用，命中则取代 `Si`
//!
//! ## 依赖关系
//! - 被 `interpreter/mod.rs` 使用
//! - 使用 `interpreter/vocabulary.rs` 的停用词表

use super::vocabulary::is_stop_word;

use regex::Regex;
use std::sync::LazyLock;

/// 元素名/符号 → 元素符号（顺序即优先级）
pub const ELEMENT_TABLE: &[(&str, &str)] = &[
    ("silicon", "Si"),
    ("si", "Si"),
    ("aluminum", "Al"),
    ("aluminium", "Al"),
    ("al", "Al"),
    ("gold", "Au"),
    ("au", "Au"),
    ("copper", "Cu"),
    ("cu", "Cu"),
    ("iron", "Fe"),
    ("fe", "Fe"),
    ("titanium", "Ti"),
    ("ti", "Ti"),
    ("magnesium", "Mg"),
    ("mg", "Mg"),
    ("nickel", "Ni"),
    ("ni", "Ni"),
    ("zinc", "Zn"),
    ("zn", "Zn"),
    ("carbon", "C"),
    ("c", "C"),
    ("germanium", "Ge"),
    ("ge", "Ge"),
    ("chromium", "Cr"),
    ("cr", "Cr"),
    ("molybdenum", "Mo"),
    ("mo", "Mo"),
    ("tungsten", "W"),
    ("w", "W"),
    ("vanadium", "V"),
    ("v", "V"),
    ("cobalt", "Co"),
    ("co", "Co"),
    ("palladium", "Pd"),
    ("pd", "Pd"),
    ("platinum", "Pt"),
    ("pt", "Pt"),
    ("silver", "Ag"),
    ("ag", "Ag"),
    ("beryllium", "Be"),
    ("be", "Be"),
    ("zirconium", "Zr"),
    ("zr", "Zr"),
];

static SYMBOL_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b([A-Z][a-z]?)\b").unwrap());

/// 第一级：元素词典
pub fn from_dictionary(text_lower: &str) -> Option<&'static str> {
    ELEMENT_TABLE
        .iter()
        .find(|(key, _)| text_lower.contains(key))
        .map(|(_, symbol)| *symbol)
}

/// 第二级：裸元素符号
pub fn from_symbol(text: &str) -> Option<String> {
    SYMBOL_TOKEN
        .find_iter(text)
        .map(|m| m.as_str())
        .find(|token| !is_stop_word(token))
        .map(str::to_string)
}
