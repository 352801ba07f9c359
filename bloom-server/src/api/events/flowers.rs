//! Event Flower Preference Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use super::require_event;
use crate::core::ServerState;
use crate::db::repository::{catalog, event_design};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::EventFlowers;
use shared::request::FlowerPrefsUpdate;

/// Saved preferences plus the server timestamp
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedFlowers {
    #[serde(flatten)]
    pub flowers: EventFlowers,
    pub saved_at: i64,
}

/// GET /api/events/:id/flowers - 当前花材偏好 (无记录时返回 null)
pub async fn get_prefs(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<Option<EventFlowers>>> {
    require_event(&state.pool, id).await?;
    let prefs = event_design::find_flowers(&state.pool, id).await?;
    Ok(ApiResponse::success(prefs))
}

/// PATCH /api/events/:id/flowers - 更新花材偏好 (幂等 upsert)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<FlowerPrefsUpdate>,
) -> AppResult<ApiResponse<SavedFlowers>> {
    payload.validate()?;

    let event = require_event(&state.pool, id).await?;

    // Whole-batch ownership checks, no partial acceptance
    if !catalog::flowers_visible(&state.pool, event.vendor_id, &payload.flower_ids).await? {
        return Err(AppError::new(ErrorCode::InvalidFlowerReference));
    }
    if !catalog::flower_categories_visible(&state.pool, event.vendor_id, &payload.category_ids)
        .await?
    {
        return Err(AppError::new(ErrorCode::InvalidFlowerCategoryReference));
    }

    let flowers = event_design::upsert_flowers(
        &state.pool,
        id,
        &payload.flower_ids,
        &payload.category_ids,
        payload.notes.as_deref(),
    )
    .await?;

    let saved_at = shared::util::now_millis();
    Ok(ApiResponse::success(SavedFlowers { flowers, saved_at }))
}
