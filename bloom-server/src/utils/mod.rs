//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] / [`ApiResponse`] - 统一错误与响应类型 (from shared::error)
//! - 日志、校验等工具

pub mod logger;
pub mod validation;

// Re-export error types from shared; the whole API surface uses the one
// discriminated envelope.
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
