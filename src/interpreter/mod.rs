//! # 自然语言请求解释器
//!
//! 将一句用户输入（如 `"FCC aluminum 2x2x2 with a=4.05"`）转换为
//! 规范化的 `StructureRequest`。纯函数、无 I/O、永不失败：
//! 任何输入都得到一条完整记录，解析不到的字段保持默认值。
//!
//! ## 处理流程
//! ```text
//! geometry ─┐
//! taxonomy ─┼─ 始终执行，互不影响
//! lattice  ─┘
//!     │
//! compound 词典 ─▶ 化学式启发式 ─▶ element 词典 ─▶ 裸元素符号   (先命中者生效)
//!                                       (词典仅得到 Si 时仍尝试裸元素符号)
//!     │
//! source（mp / cod / url / file）命中时覆盖材料标识
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/`, `lib.rs` 使用
//! - 使用 `models/request.rs`
//! - 子模块: geometry, taxonomy, lattice, compound, element, source, vocabulary

pub mod compound;
pub mod element;
pub mod geometry;
pub mod lattice;
pub mod source;
pub mod taxonomy;
pub mod vocabulary;

use crate::models::request::DEFAULT_MATERIAL;
use crate::models::StructureRequest;

/// 解释流程中的各阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Geometry,
    Taxonomy,
    Lattice,
    CompoundDictionary,
    CompoundFormula,
    ElementDictionary,
    ElementSymbol,
    ExternalSource,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Geometry => write!(f, "geometry"),
            Stage::Taxonomy => write!(f, "taxonomy"),
            Stage::Lattice => write!(f, "lattice"),
            Stage::CompoundDictionary => write!(f, "compound-dictionary"),
            Stage::CompoundFormula => write!(f, "compound-formula"),
            Stage::ElementDictionary => write!(f, "element-dictionary"),
            Stage::ElementSymbol => write!(f, "element-symbol"),
            Stage::ExternalSource => write!(f, "external-source"),
        }
    }
}

/// 某阶段命中的记录
#[derive(Debug, Clone, PartialEq)]
pub struct StageHit {
    pub stage: Stage,
    pub detail: String,
}

/// 解释结果及命中轨迹
#[derive(Debug, Clone)]
pub struct Interpretation {
    pub request: StructureRequest,
    /// 按执行顺序记录的命中阶段
    pub trace: Vec<StageHit>,
}

/// 材料身份（化合物或单元素）
enum Identity {
    Compound(compound::CompoundMatch),
    Element(String),
}

/// 单元素识别：词典命中非默认元素时直接采用；
/// 否则（未命中，或仅命中默认的 `Si`）尝试裸元素符号，找不到再退回词典结果。
///
/// `si` 会在 "simple"、"basis"、"size" 等普通单词中命中。
fn resolve_element(text: &str, text_lower: &str) -> Option<(Stage, Identity)> {
    let from_dictionary = element::from_dictionary(text_lower);
    if let Some(symbol) = from_dictionary.filter(|s| *s != DEFAULT_MATERIAL) {
        return Some((Stage::ElementDictionary, Identity::Element(symbol.to_string())));
    }

    element::from_symbol(text)
        .map(|s| (Stage::ElementSymbol, Identity::Element(s)))
        .or_else(|| {
            from_dictionary.map(|s| (Stage::ElementDictionary, Identity::Element(s.to_string())))
        })
}

/// 解释一句用户输入
pub fn parse(text: &str) -> StructureRequest {
    interpret(text).request
}

/// 解释一句用户输入，同时返回各阶段的命中轨迹
pub fn interpret(text: &str) -> Interpretation {
    let text_lower = text.to_lowercase();
    let mut request = StructureRequest::default();
    let mut trace = Vec::new();
    let mut hit = |stage: Stage, detail: String| trace.push(StageHit { stage, detail });

    if let Some(dims) = geometry::extract_supercell(&text_lower) {
        request.supercell_dims = dims;
        hit(Stage::Geometry, format!("{:?}", dims));
    }

    if let Some(structure_type) = taxonomy::match_structure_type(&text_lower) {
        request.structure_type = Some(structure_type);
        hit(Stage::Taxonomy, structure_type.to_string());
    }

    if let Some(a) = lattice::extract_lattice_parameter(&text_lower) {
        request.lattice_parameter = Some(a);
        hit(Stage::Lattice, a.to_string());
    }

    let identity = compound::from_dictionary(&text_lower)
        .map(|m| (Stage::CompoundDictionary, Identity::Compound(m)))
        .or_else(|| {
            compound::from_formula(text).map(|m| (Stage::CompoundFormula, Identity::Compound(m)))
        })
        .or_else(|| resolve_element(text, &text_lower));

    match identity {
        Some((stage, Identity::Compound(m))) => {
            hit(stage, format!("{} {:?}", m.name, m.elements));
            request.material_name = m.name;
            request.compound = Some(m.elements);
            if m.structure_type.is_some() {
                request.structure_type = m.structure_type;
            }
        }
        Some((stage, Identity::Element(symbol))) => {
            hit(stage, symbol.clone());
            request.material_name = symbol;
        }
        None => {}
    }

    if let Some(source) = source::detect(text) {
        hit(
            Stage::ExternalSource,
            format!("{} {}", source.source_type, source.identifier),
        );
        request.material_name = source.identifier;
        request.source_type = Some(source.source_type);
        request.compound = None;
    }

    Interpretation { request, trace }
}
