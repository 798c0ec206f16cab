//! # ChatMat - 自然语言晶体结构请求解释器
//!
//! 把一句自由文本（如 `"SiO2 2x2x2"`、`"FCC aluminum with a=4.05"`、`"mp-149"`）
//! 转换为规范化的 [`StructureRequest`]，交给下游的结构生成后端。
//!
//! ```
//! use chatmat::{parse, StructureType};
//!
//! let req = parse("FCC aluminum 2x2x2 with a=4.05");
//! assert_eq!(req.material_name, "Al");
//! assert_eq!(req.supercell_dims, [2, 2, 2]);
//! assert_eq!(req.structure_type, Some(StructureType::Fcc));
//! assert_eq!(req.lattice_parameter, Some(4.05));
//! ```
//!
//! ## 模块
//! ```text
//! lib.rs
//!   ├── interpreter/ (解释器：各提取阶段与编排)
//!   ├── models/      (结构请求、后端协议)
//!   ├── parsers/     (后端返回的 XYZ 解析)
//!   ├── batch/       (批量解释)
//!   ├── export.rs    (批量结果导出)
//!   ├── cli/         (命令行参数定义)
//!   ├── commands/    (命令执行逻辑)
//!   ├── utils/       (终端输出、进度条)
//!   └── error.rs     (错误处理)
//! ```

pub mod batch;
pub mod cli;
pub mod commands;
pub mod error;
pub mod export;
pub mod interpreter;
pub mod models;
pub mod parsers;
pub mod utils;

pub use error::{ChatmatError, Result};
pub use interpreter::{interpret, parse, Interpretation};
pub use models::{LlmProvider, SourceType, StructureRequest, StructureType};
