//! Event Color Scheme Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use super::require_event;
use crate::core::ServerState;
use crate::db::repository::{catalog, event_design};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::EventDesign;
use shared::request::ColorSchemeUpdate;

/// Saved design plus the server timestamp
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedDesign {
    #[serde(flatten)]
    pub design: EventDesign,
    pub saved_at: i64,
}

/// GET /api/events/:id/colors - 当前配色方案 (无设计时返回 null)
pub async fn get_scheme(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<Option<EventDesign>>> {
    require_event(&state.pool, id).await?;
    let design = event_design::find_by_event(&state.pool, id).await?;
    Ok(ApiResponse::success(design))
}

/// PATCH /api/events/:id/colors - 更新配色方案 (幂等 upsert)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ColorSchemeUpdate>,
) -> AppResult<ApiResponse<SavedDesign>> {
    payload.validate()?;

    let event = require_event(&state.pool, id).await?;

    // Whole-batch ownership check: every referenced catalog color must be
    // vendor-owned or shared
    if !catalog::colors_visible(&state.pool, event.vendor_id, &payload.color_ids).await? {
        return Err(AppError::new(ErrorCode::InvalidColorReference));
    }

    let design = event_design::upsert(
        &state.pool,
        id,
        event_design::DesignUpsert {
            event_type_id: None,
            primary_colors: payload.primary,
            secondary_colors: payload.secondary,
            accent_colors: payload.accent,
            color_ids: payload.color_ids,
            design_cost: payload.design_cost,
        },
    )
    .await?;

    let saved_at = shared::util::now_millis();
    Ok(ApiResponse::success(SavedDesign { design, saved_at }))
}
