//! # 解析器模块
//!
//! 解析后端返回的结构数据。
//!
//! ## 依赖关系
//! - 被 `models/wire.rs` 使用
//! - 子模块: xyz

pub mod xyz;

pub use xyz::{parse_xyz_content, XyzAtom, XyzBlock};
