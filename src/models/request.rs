//! # 结构请求数据模型
//!
//! 解释器的唯一输出：`StructureRequest`。每次调用新建一条记录，
//! 一次性填充完毕后交给调用方，解释器之后不会再修改它。
//!
//! ## 依赖关系
//! - 被 `interpreter/`, `models/wire.rs`, `commands/` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 未解析出任何材料时的默认材料名
pub const DEFAULT_MATERIAL: &str = "Si";

/// 晶体结构类型（固定词表）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureType {
    Fcc,
    Bcc,
    Hcp,
    Diamond,
    Sc,
    Zincblende,
    Rocksalt,
    Wurtzite,
    Perovskite,
    Rutile,
    Quartz,
}

impl StructureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StructureType::Fcc => "fcc",
            StructureType::Bcc => "bcc",
            StructureType::Hcp => "hcp",
            StructureType::Diamond => "diamond",
            StructureType::Sc => "sc",
            StructureType::Zincblende => "zincblende",
            StructureType::Rocksalt => "rocksalt",
            StructureType::Wurtzite => "wurtzite",
            StructureType::Perovskite => "perovskite",
            StructureType::Rutile => "rutile",
            StructureType::Quartz => "quartz",
        }
    }
}

impl std::fmt::Display for StructureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 外部结构来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// Materials Project ID (mp-XXXX)
    Mp,
    /// Crystallography Open Database ID
    Cod,
    /// http(s) URL
    Url,
    /// 本地文件路径
    File,
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceType::Mp => write!(f, "mp"),
            SourceType::Cod => write!(f, "cod"),
            SourceType::Url => write!(f, "url"),
            SourceType::File => write!(f, "file"),
        }
    }
}

/// LLM 服务提供方（由 UI 层选择）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    /// OpenAI chat models
    Openai,
    /// Anthropic models
    Anthropic,
    /// Local Ollama server
    Ollama,
}

impl LlmProvider {
    /// 各提供方的默认模型
    pub fn default_model(&self) -> &'static str {
        match self {
            LlmProvider::Openai => "gpt-4o-mini",
            LlmProvider::Anthropic => "claude-3-haiku-20240307",
            LlmProvider::Ollama => "llama3",
        }
    }
}

impl std::fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LlmProvider::Openai => write!(f, "openai"),
            LlmProvider::Anthropic => write!(f, "anthropic"),
            LlmProvider::Ollama => write!(f, "ollama"),
        }
    }
}

/// 规范化后的结构请求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureRequest {
    /// 材料标识：元素符号、化合物名、数据库 ID、URL 或文件路径
    pub material_name: String,

    /// 超胞扩展倍数 (a, b, c)
    pub supercell_dims: [u32; 3],

    pub structure_type: Option<StructureType>,

    /// 晶格常数 (Å)
    pub lattice_parameter: Option<f64>,

    /// 化合物元素列表（按出现顺序）
    pub compound: Option<Vec<String>>,

    pub source_type: Option<SourceType>,

    /// 外部来源附加参数（如凭据），解释器不填充
    pub source_params: Map<String, Value>,

    pub use_llm: bool,
    pub llm_provider: Option<LlmProvider>,
    pub llm_params: Map<String, Value>,
}

impl Default for StructureRequest {
    fn default() -> Self {
        StructureRequest {
            material_name: DEFAULT_MATERIAL.to_string(),
            supercell_dims: [1, 1, 1],
            structure_type: None,
            lattice_parameter: None,
            compound: None,
            source_type: None,
            source_params: Map::new(),
            use_llm: false,
            llm_provider: None,
            llm_params: Map::new(),
        }
    }
}

impl StructureRequest {
    /// 切换到 LLM 路径，并写入该提供方的默认模型
    pub fn with_llm(mut self, provider: LlmProvider) -> Self {
        self.use_llm = true;
        self.llm_provider = Some(provider);
        self.llm_params.insert(
            "model".to_string(),
            Value::String(provider.default_model().to_string()),
        );
        self
    }

    /// 标记使用 LLM，但未指定提供方（后端自行选择）
    pub fn with_llm_unspecified(mut self) -> Self {
        self.use_llm = true;
        self
    }

    /// 超胞字符串，如 `2×2×2`
    pub fn supercell_label(&self) -> String {
        let [a, b, c] = self.supercell_dims;
        format!("{}×{}×{}", a, b, c)
    }

    /// 是否指向外部结构来源
    pub fn is_external(&self) -> bool {
        self.source_type.is_some()
    }
}

/// 判断是否应绕过解释器，改由 LLM 解释
///
/// 显式要求时总是使用；否则长句（超过 10 个词）且未指向外部来源时使用。
pub fn should_use_llm(text: &str, request: &StructureRequest, forced: bool) -> bool {
    forced || (text.split_whitespace().count() > 10 && !request.is_external())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request() {
        let req = StructureRequest::default();
        assert_eq!(req.material_name, "Si");
        assert_eq!(req.supercell_dims, [1, 1, 1]);
        assert!(req.compound.is_none());
        assert!(req.source_params.is_empty());
        assert!(!req.use_llm);
    }

    #[test]
    fn test_with_llm_sets_model() {
        let req = StructureRequest::default().with_llm(LlmProvider::Anthropic);
        assert!(req.use_llm);
        assert_eq!(req.llm_provider, Some(LlmProvider::Anthropic));
        assert_eq!(
            req.llm_params.get("model").and_then(|v| v.as_str()),
            Some("claude-3-haiku-20240307")
        );
    }

    #[test]
    fn test_should_use_llm_long_text() {
        let req = StructureRequest::default();
        let long = "please build me a big slab of silicon with some vacancies near the top";
        assert!(should_use_llm(long, &req, false));
        assert!(!should_use_llm("silicon 2x2x2", &req, false));
        assert!(should_use_llm("silicon", &req, true));
    }

    #[test]
    fn test_should_use_llm_skips_external_sources() {
        let req = StructureRequest {
            source_type: Some(SourceType::Mp),
            ..StructureRequest::default()
        };
        let long = "load mp-149 from the materials project and make it a lot bigger please";
        assert!(!should_use_llm(long, &req, false));
    }

    #[test]
    fn test_serialized_enum_values_are_lowercase() {
        let req = StructureRequest {
            structure_type: Some(StructureType::Zincblende),
            source_type: Some(SourceType::Cod),
            ..StructureRequest::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["structure_type"], "zincblende");
        assert_eq!(json["source_type"], "cod");
        assert_eq!(json["supercell_dims"], serde_json::json!([1, 1, 1]));
    }

    #[test]
    fn test_supercell_label() {
        let req = StructureRequest {
            supercell_dims: [3, 2, 1],
            ..StructureRequest::default()
        };
        assert_eq!(req.supercell_label(), "3×2×1");
    }
}
