//! # 数据模型模块
//!
//! 定义解释器输出的结构请求，以及与结构生成后端通信的请求/响应模型。
//!
//! ## 依赖关系
//! - 被 `interpreter/` 和 `commands/` 使用
//! - 子模块: request, wire

pub mod request;
pub mod wire;

pub use request::{should_use_llm, LlmProvider, SourceType, StructureRequest, StructureType};
pub use wire::{CalculationRequest, CalculationResponse, CheckedResponse, ResponseWarning};
