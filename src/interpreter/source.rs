//! # 外部结构来源检测
//!
//! 最后执行，命中时覆盖之前识别出的材料。优先级：
//! 1. Materials Project ID `mp-149`（保留完整记号）
//! 2. COD ID `cod-2000001` / `cod2000001`（只保留数字）
//! 3. `http(s)://` URL
//! 4. 文件路径：包含路径分隔符，或以 `.cif/.xyz/.vasp/.poscar` 结尾（取整段输入）
//!
//! ## 依赖关系
//! - 被 `interpreter/mod.rs` 使用
//! - 使用 `models/request.rs` 的 `SourceType`

use crate::models::SourceType;

use regex::Regex;
use std::sync::LazyLock;

/// 可识别的结构文件扩展名
pub const STRUCTURE_FILE_EXTENSIONS: &[&str] = &[".cif", ".xyz", ".vasp", ".poscar"];

static MP_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\b(mp-\d+)\b").unwrap());
static COD_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bcod-?(\d+)\b").unwrap());
static URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(https?://\S+)").unwrap());

/// 检测到的外部来源
#[derive(Debug, Clone, PartialEq)]
pub struct SourceHit {
    pub source_type: SourceType,
    /// 替换 `material_name` 的标识
    pub identifier: String,
}

impl SourceHit {
    fn new(source_type: SourceType, identifier: impl Into<String>) -> Self {
        SourceHit {
            source_type,
            identifier: identifier.into(),
        }
    }
}

/// 检测外部来源（作用于原始文本）
pub fn detect(text: &str) -> Option<SourceHit> {
    capture(&MP_ID, text)
        .map(|id| SourceHit::new(SourceType::Mp, id))
        .or_else(|| capture(&COD_ID, text).map(|id| SourceHit::new(SourceType::Cod, id)))
        .or_else(|| capture(&URL, text).map(|url| SourceHit::new(SourceType::Url, url)))
        .or_else(|| looks_like_file(text).then(|| SourceHit::new(SourceType::File, text.trim())))
}

fn capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn looks_like_file(text: &str) -> bool {
    let trimmed = text.trim_end();
    text.contains(['/', '\\'])
        || STRUCTURE_FILE_EXTENSIONS
            .iter()
            .any(|ext| trimmed.ends_with(ext))
}
