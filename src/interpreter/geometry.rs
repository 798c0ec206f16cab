//! # 超胞尺寸提取
//!
//! 按顺序尝试三种写法，第一个命中的模式生效：
//! 1. `2x2x2` / `3×3×3`
//! 2. `supercell: 2,2,2`（允许逗号分隔）
//! 3. `2 2 2`（任意三个连续整数，可能误匹配版本号、日期等）
//!
//! 只识别 ASCII 数字，全角数字（`２x２x２`）不构成超胞写法。
//!
//! ## 依赖关系
//! - 被 `interpreter/mod.rs` 使用

use regex::Regex;
use std::sync::LazyLock;

static SUPERCELL_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"([0-9]+)\s*[x×]\s*([0-9]+)\s*[x×]\s*([0-9]+)").unwrap(),
        Regex::new(r"supercell\s*[:\s]+([0-9]+)\s*[x×,]\s*([0-9]+)\s*[x×,]\s*([0-9]+)").unwrap(),
        Regex::new(r"([0-9]+)\s+([0-9]+)\s+([0-9]+)").unwrap(),
    ]
});

/// 从小写文本中提取超胞尺寸
pub fn extract_supercell(text_lower: &str) -> Option<[u32; 3]> {
    SUPERCELL_PATTERNS.iter().find_map(|re| {
        let caps = re.captures(text_lower)?;
        let a = caps[1].parse().ok()?;
        let b = caps[2].parse().ok()?;
        let c = caps[3].parse().ok()?;
        Some([a, b, c])
    })
}
