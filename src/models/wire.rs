//! # 后端通信协议模型
//!
//! 结构生成后端的请求/响应 JSON 格式。本 crate 不负责网络传输，
//! 只负责把 `StructureRequest` 组装成请求体，以及解析、校验后端返回的响应。
//!
//! ## 请求体
//! ```text
//! { "intent": "CALCULATE", "material_name": "...", "user_input": "...",
//!   "structure_details": { "supercell_dims": [2,2,2], ... } }
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/request.rs`, `commands/inspect.rs` 使用
//! - 使用 `models/request.rs`, `parsers/xyz.rs`

use crate::error::{ChatmatError, Result};
use crate::models::request::{LlmProvider, SourceType, StructureRequest, StructureType};
use crate::parsers::xyz::{self, XyzBlock};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 请求意图（后端目前只识别这一种）
pub const INTENT_CALCULATE: &str = "CALCULATE";

/// 发往后端的请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub intent: String,
    pub material_name: String,
    pub structure_details: StructureDetails,
    /// 原始用户输入，供 LLM 路径使用
    pub user_input: Option<String>,
}

/// 请求中的结构细节
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureDetails {
    pub supercell_dims: [u32; 3],
    pub structure_type: Option<StructureType>,
    pub lattice_parameter: Option<f64>,
    pub compound: Option<Vec<String>>,
    pub source_type: Option<SourceType>,
    #[serde(default)]
    pub source_params: Map<String, Value>,
    #[serde(default)]
    pub use_llm: bool,
    pub llm_provider: Option<LlmProvider>,
    #[serde(default)]
    pub llm_params: Map<String, Value>,
}

impl CalculationRequest {
    /// 从解释结果组装请求体
    pub fn from_request(request: &StructureRequest, user_input: &str) -> Self {
        let user_input = if user_input.is_empty() {
            None
        } else {
            Some(user_input.to_string())
        };

        CalculationRequest {
            intent: INTENT_CALCULATE.to_string(),
            material_name: request.material_name.clone(),
            user_input,
            structure_details: StructureDetails {
                supercell_dims: request.supercell_dims,
                structure_type: request.structure_type,
                lattice_parameter: request.lattice_parameter,
                compound: request.compound.clone(),
                source_type: request.source_type,
                source_params: request.source_params.clone(),
                use_llm: request.use_llm,
                llm_provider: request.llm_provider,
                llm_params: request.llm_params.clone(),
            },
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// 后端返回的计算结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    pub status: String,
    pub material: String,
    pub n_atoms: usize,
    /// 总能量 (eV)
    pub energy: f64,
    /// 最大原子受力 (eV/Å)
    pub max_force: Option<f64>,
    /// XYZ 格式的结构
    pub structure_xyz: String,
}

/// 响应校验中发现的非致命问题
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseWarning {
    /// XYZ 首行原子数与 `n_atoms` 不一致
    AtomCountMismatch { xyz: usize, reported: usize },
    /// 结构只有一个原子，通常说明生成出错
    SingleAtom,
}

impl std::fmt::Display for ResponseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseWarning::AtomCountMismatch { xyz, reported } => write!(
                f,
                "XYZ block lists {} atoms but backend reported {}",
                xyz, reported
            ),
            ResponseWarning::SingleAtom => write!(f, "Structure has only 1 atom"),
        }
    }
}

/// 校验通过的响应
#[derive(Debug, Clone)]
pub struct CheckedResponse {
    pub response: CalculationResponse,
    pub structure: XyzBlock,
    pub warnings: Vec<ResponseWarning>,
}

impl CalculationResponse {
    /// 从 JSON 文本解析
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// 校验状态与 XYZ 结构块
    pub fn check(self) -> Result<CheckedResponse> {
        if self.status != "success" {
            return Err(ChatmatError::BackendFailure {
                status: self.status,
                material: self.material,
            });
        }

        let structure = xyz::parse_xyz_content(&self.structure_xyz, &self.material)?;
        if structure.atoms.is_empty() || self.n_atoms == 0 {
            return Err(ChatmatError::EmptyStructure {
                material: self.material,
            });
        }

        let mut warnings = Vec::new();
        if structure.declared_count != self.n_atoms {
            warnings.push(ResponseWarning::AtomCountMismatch {
                xyz: structure.declared_count,
                reported: self.n_atoms,
            });
        }
        if structure.declared_count == 1 {
            warnings.push(ResponseWarning::SingleAtom);
        }

        Ok(CheckedResponse {
            response: self,
            structure,
            warnings,
        })
    }
}

/// 生成面向用户的结果摘要
pub fn format_summary(request: &StructureRequest, response: &CalculationResponse) -> String {
    let structure_info = request
        .structure_type
        .map(|t| format!(" ({})", t.as_str().to_uppercase()))
        .unwrap_or_default();

    let mut summary = format!(
        "Structure: {}{}\nSupercell: {}\nAtoms: {}\nTotal Energy: {:.4} eV",
        response.material,
        structure_info,
        request.supercell_label(),
        response.n_atoms,
        response.energy
    );
    if let Some(force) = response.max_force {
        summary.push_str(&format!("\nMax Force: {:.4} eV/Å", force));
    }
    summary
}
