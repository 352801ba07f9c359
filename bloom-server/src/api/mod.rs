//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`inquiries`] - 询价创建 (intake pipeline)
//! - [`events`] - 活动子资源 (arrangements/colors/flowers/design/inspirations)
//! - [`vendors`] - 供应商目录读取
//! - [`images`] - 上传图片访问

pub mod events;
pub mod health;
pub mod images;
pub mod inquiries;
pub mod vendors;

// Re-export common types for handlers
pub use crate::utils::{ApiResponse, AppError, AppResult};
