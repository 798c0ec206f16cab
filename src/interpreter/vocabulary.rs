//! # 停用词表
//!
//! 句首大写的常见英文单词（`The`, `For`, `In` ...）会被化学式和元素符号
//! 的正则误识别，这里统一过滤（大小写不敏感）。
//!
//! ## 依赖关系
//! - 被 `interpreter/compound.rs`, `interpreter/element.rs` 使用

pub const STOP_WORDS: &[&str] = &[
    "the",
    "for",
    "get",
    "calculate",
    "energy",
    "force",
    "structure",
    "supercell",
    "bulk",
    "of",
    "a",
    "an",
    "in",
    "on",
    "at",
];

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.iter().any(|w| w.eq_ignore_ascii_case(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        assert!(is_stop_word("The"));
        assert!(is_stop_word("ON"));
        assert!(is_stop_word("structure"));
        assert!(!is_stop_word("Fe"));
        assert!(!is_stop_word("Thee"));
    }
}
