//! Event Detail Handler

use axum::extract::{Path, State};

use super::require_event;
use crate::core::ServerState;
use crate::db::repository::event;
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::EventDetail;

/// GET /api/events/:id - 活动详情 (向导恢复时使用)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<EventDetail>> {
    require_event(&state.pool, id).await?;

    let detail = event::find_detail_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EventNotFound))?;

    Ok(ApiResponse::success(detail))
}
