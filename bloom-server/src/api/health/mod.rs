//! 健康检查路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 简单健康检查 |
//! | /health/detailed | GET | 详细健康检查 (运行时间、数据库连通性) |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use std::sync::LazyLock;
use std::time::Instant;

use crate::core::ServerState;

static STARTED_AT: LazyLock<Instant> = LazyLock::new(Instant::now);

/// 健康检查路由 - 公共路由
pub fn router() -> Router<ServerState> {
    // Touch the start instant at router construction so uptime is meaningful
    let _ = *STARTED_AT;
    Router::new()
        .route("/health", get(health))
        .route("/health/detailed", get(detailed_health))
}

/// 简单健康检查响应
#[derive(Serialize)]
pub struct HealthResponse {
    /// 状态 (ok | error)
    status: &'static str,
    /// 版本号
    version: &'static str,
}

/// 详细健康检查响应
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedHealthResponse {
    status: &'static str,
    version: &'static str,
    /// 运行时间 (秒)
    uptime_secs: u64,
    /// 数据库连通性
    database: &'static str,
    environment: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn detailed_health(State(state): State<ServerState>) -> Json<DetailedHealthResponse> {
    let database = match sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(&state.pool)
        .await
    {
        Ok(_) => "ok",
        Err(_) => "error",
    };

    Json(DetailedHealthResponse {
        status: if database == "ok" { "ok" } else { "error" },
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: STARTED_AT.elapsed().as_secs(),
        database,
        environment: state.config.environment.clone(),
    })
}
