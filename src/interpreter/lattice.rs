//! # 晶格常数提取
//!
//! 支持 `a=5.43`、`l = 4.08`、`lattice constant 3.61`、`lattice parameter: 4.05` 等写法。
//! 不校验单位，`Angstrom` 之类的后缀直接忽略。只识别 ASCII 数字。
//!
//! ## 依赖关系
//! - 被 `interpreter/mod.rs` 使用

use regex::Regex;
use std::sync::LazyLock;

static LATTICE_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"[al]\s*=\s*([0-9]+(?:\.[0-9]+)?)").unwrap(),
        Regex::new(r"lattice\s*(?:parameter|constant)?\s*[:=]?\s*([0-9]+(?:\.[0-9]+)?)").unwrap(),
        Regex::new(r"a\s*=\s*([0-9]+(?:\.[0-9]+)?)").unwrap(),
    ]
});

/// 从小写文本中提取晶格常数
pub fn extract_lattice_parameter(text_lower: &str) -> Option<f64> {
    LATTICE_PATTERNS.iter().find_map(|re| {
        let caps = re.captures(text_lower)?;
        caps[1].parse().ok()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_forms() {
        assert_eq!(extract_lattice_parameter("fcc aluminum with a=4.05"), Some(4.05));
        assert_eq!(extract_lattice_parameter("silicon a = 5.43 angstroms"), Some(5.43));
        assert_eq!(extract_lattice_parameter("l=3"), Some(3.0));
    }

    #[test]
    fn test_lattice_keyword_forms() {
        assert_eq!(extract_lattice_parameter("copper lattice constant 3.61"), Some(3.61));
        assert_eq!(extract_lattice_parameter("lattice parameter: 4.08"), Some(4.08));
        assert_eq!(extract_lattice_parameter("lattice 2.87 iron"), Some(2.87));
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(
            extract_lattice_parameter("lattice constant 3.9 but a=4.2"),
            Some(4.2)
        );
    }

    #[test]
    fn test_trailing_dot_not_consumed() {
        assert_eq!(extract_lattice_parameter("a=5."), Some(5.0));
    }

    #[test]
    fn test_no_lattice_parameter() {
        assert_eq!(extract_lattice_parameter("gold 2x2x2"), None);
        assert_eq!(extract_lattice_parameter("a = b"), None);
    }

    #[test]
    fn test_fullwidth_digits_ignored() {
        assert_eq!(extract_lattice_parameter("a=４.０５"), None);
    }
}
