//! Bloom Vendor Platform - multi-tenant wedding florist backend
//!
//! # 架构概述
//!
//! 本模块是平台后端的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SQLite 存储 (sqlx, WAL 模式)
//! - **HTTP API** (`api`): RESTful API 接口 (询价、活动设计、目录)
//! - **服务** (`services`): 邮件通知、灵感图片存储
//!
//! # 模块结构
//!
//! ```text
//! bloom-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # 邮件、图片存储
//! ├── utils/         # 日志、校验工具
//! └── db/            # 数据库层 (repositories)
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Initialize process environment: dotenv + logging
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), None, log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____  __
   / __ )/ /___  ____  ____ ___
  / __  / / __ \/ __ \/ __ `__ \
 / /_/ / / /_/ / /_/ / / / / / /
/_____/_/\____/\____/_/ /_/ /_/
    "#
    );
}
