//! # 统一错误处理模块
//!
//! 定义 ChatMat 的所有错误类型，使用 `thiserror` 派生。
//!
//! 解释器本身（`interpreter::parse`）永不失败，这里的错误只覆盖
//! 文件读写、后端响应校验、批处理导出等外围操作。
//!
//! ## 依赖关系
//! - 被 `commands/`, `parsers/`, `export.rs` 使用
//! - 无外部模块依赖

use thiserror::Error;

/// ChatMat 统一错误类型
#[derive(Error, Debug)]
pub enum ChatmatError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Path not found: {path}")]
    PathNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} data: {source_name}\nReason: {reason}")]
    ParseError {
        format: String,
        source_name: String,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 后端协议错误
    // ─────────────────────────────────────────────────────────────
    #[error("Backend returned status '{status}' for {material}")]
    BackendFailure { status: String, material: String },

    #[error("Backend structure for {material} contains no atoms")]
    EmptyStructure { material: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No matching files found with pattern: {pattern}")]
    NoFilesFound { pattern: String },

    // ─────────────────────────────────────────────────────────────
    // 序列化错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ChatmatError>;
