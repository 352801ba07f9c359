//! Vendor Catalog Handlers
//!
//! Pure reads. Every listing filters `vendor_id = ? OR is_shared = 1` and
//! orders vendor-owned rows before shared rows, then alphabetically.

use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::repository::{catalog, event_type, vendor};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{
    Arrangement, ArrangementTypeWithPreview, Color, Flower, FlowerCategoryWithPreview, Vendor,
    event_type::DEFAULT_EVENT_TYPES,
};
use sqlx::SqlitePool;

async fn require_vendor(pool: &SqlitePool, id: i64) -> AppResult<Vendor> {
    vendor::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::VendorNotFound))
}

#[derive(Debug, Deserialize)]
pub struct SlugQuery {
    pub slug: String,
}

/// GET /api/vendors/by-slug?slug= - 公开落地页的供应商查询
pub async fn by_slug(
    State(state): State<ServerState>,
    Query(query): Query<SlugQuery>,
) -> AppResult<ApiResponse<Vendor>> {
    if query.slug.trim().is_empty() {
        return Err(AppError::validation("slug must not be empty").with_detail("field", "slug"));
    }
    let vendor = vendor::find_by_slug(&state.pool, &query.slug)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::VendorNotFound))?;
    Ok(ApiResponse::success(vendor))
}

/// GET /api/vendors/:id/colors
pub async fn colors(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<Vec<Color>>> {
    require_vendor(&state.pool, id).await?;
    let rows = catalog::colors_for_vendor(&state.pool, id).await?;
    Ok(ApiResponse::success(rows))
}

/// GET /api/vendors/:id/flowers
pub async fn flowers(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<Vec<Flower>>> {
    require_vendor(&state.pool, id).await?;
    let rows = catalog::flowers_for_vendor(&state.pool, id).await?;
    Ok(ApiResponse::success(rows))
}

/// GET /api/vendors/:id/arrangements
pub async fn arrangements(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<Vec<Arrangement>>> {
    require_vendor(&state.pool, id).await?;
    let rows = catalog::arrangements_for_vendor(&state.pool, id).await?;
    Ok(ApiResponse::success(rows))
}

/// GET /api/vendors/:id/arrangement-types - 含预览和计数
pub async fn arrangement_types(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<Vec<ArrangementTypeWithPreview>>> {
    require_vendor(&state.pool, id).await?;
    let rows = catalog::arrangement_types_for_vendor(&state.pool, id).await?;
    Ok(ApiResponse::success(rows))
}

/// GET /api/vendors/:id/flower-categories - 含预览和计数
pub async fn flower_categories(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<Vec<FlowerCategoryWithPreview>>> {
    require_vendor(&state.pool, id).await?;
    let rows = catalog::flower_categories_for_vendor(&state.pool, id).await?;
    Ok(ApiResponse::success(rows))
}

/// Event type entry; catalog rows carry their id, fallback defaults do not
#[derive(Debug, Serialize)]
pub struct EventTypeEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
}

/// GET /api/vendors/:id/event-types - 供应商事件类型
/// 供应商未定义任何类型时回退到固定默认列表
pub async fn event_types(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<Vec<EventTypeEntry>>> {
    require_vendor(&state.pool, id).await?;

    let rows = event_type::find_by_vendor(&state.pool, id).await?;
    let entries: Vec<EventTypeEntry> = if rows.is_empty() {
        DEFAULT_EVENT_TYPES
            .iter()
            .map(|name| EventTypeEntry {
                id: None,
                name: (*name).to_string(),
            })
            .collect()
    } else {
        rows.into_iter()
            .map(|t| EventTypeEntry {
                id: Some(t.id),
                name: t.name,
            })
            .collect()
    };

    Ok(ApiResponse::success(entries))
}
