//! # 晶体结构类型匹配
//!
//! 按表中声明顺序依次检查每个结构类型的同义词，第一个命中的类型生效。
//! 当文本同时包含两种结构的关键词时，以表顺序而非文本位置决胜。
//!
//! ## 依赖关系
//! - 被 `interpreter/mod.rs` 使用
//! - 使用 `models/request.rs` 的 `StructureType`

use crate::models::StructureType;

/// 结构类型 → 同义词表（顺序即优先级）
pub const STRUCTURE_KEYWORDS: &[(StructureType, &[&str])] = &[
    (
        StructureType::Fcc,
        &["fcc", "face-centered cubic", "face centered cubic"],
    ),
    (
        StructureType::Bcc,
        &["bcc", "body-centered cubic", "body centered cubic"],
    ),
    (
        StructureType::Hcp,
        &["hcp", "hexagonal close-packed", "hexagonal close packed"],
    ),
    (StructureType::Diamond, &["diamond", "diamond cubic"]),
    (StructureType::Sc, &["sc", "simple cubic"]),
    (
        StructureType::Zincblende,
        &["zincblende", "zinc blende", "sphalerite"],
    ),
    (
        StructureType::Rocksalt,
        &["rocksalt", "rock salt", "nacl structure"],
    ),
    (StructureType::Wurtzite, &["wurtzite"]),
    (StructureType::Perovskite, &["perovskite"]),
    (StructureType::Rutile, &["rutile"]),
];

/// 在小写文本中查找结构类型
pub fn match_structure_type(text_lower: &str) -> Option<StructureType> {
    STRUCTURE_KEYWORDS
        .iter()
        .find(|(_, synonyms)| synonyms.iter().any(|kw| text_lower.contains(kw)))
        .map(|(tag, _)| *tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synonyms() {
        assert_eq!(
            match_structure_type("body centered cubic iron"),
            Some(StructureType::Bcc)
        );
        assert_eq!(
            match_structure_type("zinc blende gaas"),
            Some(StructureType::Zincblende)
        );
        assert_eq!(
            match_structure_type("hexagonal close-packed mg"),
            Some(StructureType::Hcp)
        );
    }

    #[test]
    fn test_declaration_order_breaks_ties() {
        // rutile 出现在前，但 bcc 在表中更靠前
        assert_eq!(
            match_structure_type("rutile or bcc?"),
            Some(StructureType::Bcc)
        );
    }

    #[test]
    fn test_sc_substring_matches_inside_words() {
        // "sc" 是子串匹配，"describe" 也会命中
        assert_eq!(match_structure_type("describe gold"), Some(StructureType::Sc));
    }

    #[test]
    fn test_no_structure_type() {
        assert_eq!(match_structure_type("gold 2x2x2"), None);
    }

    #[test]
    fn test_quartz_not_in_keyword_table() {
        assert!(STRUCTURE_KEYWORDS
            .iter()
            .all(|(tag, _)| *tag != StructureType::Quartz));
    }
}
