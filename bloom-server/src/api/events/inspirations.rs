//! Event Inspiration Handlers
//!
//! POST accepts a mixed multipart payload: binary image uploads plus a
//! `urls` part holding a JSON array of external URLs. Invalid files are
//! skipped silently; a malformed URL rejects the whole batch. The 20-image
//! cap is enforced before any storage write.

use axum::{
    extract::{Multipart, Path, State},
};
use serde::Serialize;

use super::require_event;
use crate::core::ServerState;
use crate::db::repository::inspiration;
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{Inspiration, InspirationSource, inspiration::MAX_INSPIRATIONS_PER_EVENT};
use shared::request::InspirationUrls;

/// POST outcome: stored inspirations plus the silently-skipped file count
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspirationsCreated {
    pub created: Vec<Inspiration>,
    pub skipped_files: usize,
}

/// GET /api/events/:id/inspirations - 灵感列表 (最新优先)
pub async fn list(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<Vec<Inspiration>>> {
    require_event(&state.pool, id).await?;
    let rows = inspiration::list_by_event(&state.pool, id).await?;
    Ok(ApiResponse::success(rows))
}

/// POST /api/events/:id/inspirations - 上传图片 / 登记外部 URL
pub async fn create(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    mut multipart: Multipart,
) -> AppResult<ApiResponse<InspirationsCreated>> {
    require_event(&state.pool, id).await?;

    // Collect parts first; nothing is written until the cap check passes
    let mut files: Vec<(String, Vec<u8>)> = Vec::new();
    let mut urls = InspirationUrls::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart request: {e}")))?
    {
        let name = field.name().map(|s| s.to_string());
        if name.as_deref() == Some("urls") {
            let text = field
                .text()
                .await
                .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?;
            let parsed: Vec<String> = serde_json::from_str(&text).map_err(|e| {
                AppError::validation(format!("urls must be a JSON array of strings: {e}"))
            })?;
            urls.urls.extend(parsed);
        } else if let Some(filename) = field.file_name().map(|s| s.to_string()) {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
                .to_vec();
            files.push((filename, data));
        }
    }

    // Malformed URLs reject the whole batch
    urls.validate()?;

    // Invalid files are skipped silently, not rejected
    let mut accepted_files: Vec<(String, Vec<u8>)> = Vec::new();
    let mut skipped_files = 0usize;
    for (filename, data) in files {
        match state.images.validate(&data, &filename) {
            Ok(()) => accepted_files.push((filename, data)),
            Err(e) => {
                tracing::debug!(event_id = id, file = %filename, error = %e, "Skipping invalid upload");
                skipped_files += 1;
            }
        }
    }

    if accepted_files.is_empty() && urls.urls.is_empty() {
        return Err(AppError::new(ErrorCode::NoFileProvided));
    }

    // Cap check before any storage write
    let existing = inspiration::count_by_event(&state.pool, id).await?;
    let incoming = (accepted_files.len() + urls.urls.len()) as i64;
    if existing + incoming > MAX_INSPIRATIONS_PER_EVENT {
        return Err(AppError::with_message(
            ErrorCode::InspirationLimitExceeded,
            format!(
                "Event holds {existing} inspirations; adding {incoming} exceeds the cap of {MAX_INSPIRATIONS_PER_EVENT}"
            ),
        ));
    }

    let mut created = Vec::with_capacity(accepted_files.len() + urls.urls.len());
    for (filename, data) in accepted_files {
        let stored = state.images.store(&data, &filename)?;
        let row =
            inspiration::create(&state.pool, id, InspirationSource::Upload, &stored.url).await?;
        created.push(row);
    }
    // External URLs are recorded without fetching
    for url in &urls.urls {
        let row = inspiration::create(&state.pool, id, InspirationSource::Url, url).await?;
        created.push(row);
    }

    Ok(ApiResponse::success(InspirationsCreated {
        created,
        skipped_files,
    }))
}

/// DELETE /api/events/:id/inspirations/:inspiration_id
/// 非幂等删除：第二次删除同一 id 返回 404
pub async fn remove(
    State(state): State<ServerState>,
    Path((id, inspiration_id)): Path<(i64, i64)>,
) -> AppResult<ApiResponse<()>> {
    require_event(&state.pool, id).await?;

    let removed = inspiration::delete(&state.pool, id, inspiration_id).await?;
    if !removed {
        return Err(AppError::new(ErrorCode::InspirationNotFound));
    }

    Ok(ApiResponse::ok())
}
