//! Event API 模块
//!
//! 活动及其子资源：arrangements / colors / flowers / design / inspirations。
//! 所有子资源处理器共享同一契约：路径 id 解析 → 请求体校验 → 活动存在性
//! (404) → 目录引用归属校验 (整批拒绝) → 按自然键 upsert → 返回保存结果
//! 和服务器时间戳。

mod arrangements;
mod colors;
mod design;
mod flowers;
mod handler;
mod inspirations;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::core::ServerState;
use crate::db::repository::event;
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::Event;
use sqlx::SqlitePool;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/events", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/{id}", get(handler::get_by_id))
        .route(
            "/{id}/arrangements",
            get(arrangements::list)
                .post(arrangements::upsert)
                .patch(arrangements::upsert)
                .delete(arrangements::remove),
        )
        .route("/{id}/arrangements/bulk-update", post(arrangements::bulk_update))
        .route("/{id}/colors", get(colors::get_scheme).patch(colors::update))
        .route("/{id}/design", get(design::get_design).post(design::save))
        .route("/{id}/design/auto-save", patch(design::auto_save))
        .route("/{id}/flowers", get(flowers::get_prefs).patch(flowers::update))
        .route(
            "/{id}/inspirations",
            get(inspirations::list).post(inspirations::create),
        )
        .route(
            "/{id}/inspirations/{inspiration_id}",
            delete(inspirations::remove),
        )
}

/// 404 gate shared by every sub-resource handler
pub(crate) async fn require_event(pool: &SqlitePool, id: i64) -> AppResult<Event> {
    event::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EventNotFound))
}
