//! Event Design Handlers
//!
//! The design row is created lazily on the first save; the wizard's
//! auto-save PATCH carries the combined draft (colors + optional flower
//! preferences) and flushes both in one call.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use super::require_event;
use crate::core::ServerState;
use crate::db::repository::{catalog, event_design};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{Event, EventDesign, EventFlowers};
use shared::request::DesignSave;

/// Saved draft state plus the server timestamp
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedDraft {
    pub design: EventDesign,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flowers: Option<EventFlowers>,
    pub saved_at: i64,
}

/// GET /api/events/:id/design - 当前设计快照 (无设计时返回 null)
pub async fn get_design(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<Option<EventDesign>>> {
    require_event(&state.pool, id).await?;
    let design = event_design::find_by_event(&state.pool, id).await?;
    Ok(ApiResponse::success(design))
}

/// POST /api/events/:id/design - 保存设计快照
pub async fn save(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<DesignSave>,
) -> AppResult<ApiResponse<SavedDraft>> {
    let saved = apply_design_save(&state, id, payload).await?;
    Ok(ApiResponse::success(saved))
}

/// PATCH /api/events/:id/design/auto-save - 向导防抖自动保存
pub async fn auto_save(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<DesignSave>,
) -> AppResult<ApiResponse<SavedDraft>> {
    let saved = apply_design_save(&state, id, payload).await?;
    Ok(ApiResponse::success_with_message("Draft saved", saved))
}

/// Shared save path for POST and auto-save: validate, check references,
/// upsert design and (when present) flower preferences.
async fn apply_design_save(
    state: &ServerState,
    id: i64,
    payload: DesignSave,
) -> AppResult<SavedDraft> {
    payload.validate()?;

    let event = require_event(&state.pool, id).await?;

    check_references(state, &event, &payload).await?;

    let design = event_design::upsert(
        &state.pool,
        id,
        event_design::DesignUpsert {
            event_type_id: payload.event_type_id,
            primary_colors: payload.colors.primary,
            secondary_colors: payload.colors.secondary,
            accent_colors: payload.colors.accent,
            color_ids: payload.colors.color_ids,
            design_cost: payload.design_cost.or(payload.colors.design_cost),
        },
    )
    .await?;

    let flowers = match payload.flowers {
        Some(prefs) => Some(
            event_design::upsert_flowers(
                &state.pool,
                id,
                &prefs.flower_ids,
                &prefs.category_ids,
                prefs.notes.as_deref(),
            )
            .await?,
        ),
        None => None,
    };

    Ok(SavedDraft {
        design,
        flowers,
        saved_at: shared::util::now_millis(),
    })
}

/// Whole-batch catalog reference checks against the event's vendor
async fn check_references(
    state: &ServerState,
    event: &Event,
    payload: &DesignSave,
) -> AppResult<()> {
    if !catalog::colors_visible(&state.pool, event.vendor_id, &payload.colors.color_ids).await? {
        return Err(AppError::new(ErrorCode::InvalidColorReference));
    }
    if let Some(flowers) = &payload.flowers {
        if !catalog::flowers_visible(&state.pool, event.vendor_id, &flowers.flower_ids).await? {
            return Err(AppError::new(ErrorCode::InvalidFlowerReference));
        }
        if !catalog::flower_categories_visible(
            &state.pool,
            event.vendor_id,
            &flowers.category_ids,
        )
        .await?
        {
            return Err(AppError::new(ErrorCode::InvalidFlowerCategoryReference));
        }
    }
    Ok(())
}
