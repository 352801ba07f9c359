//! Event Arrangement Slot Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use super::require_event;
use crate::core::ServerState;
use crate::db::repository::{catalog, event_arrangement};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{EventArrangement, Section};
use shared::request::{
    ArrangementDelete, ArrangementUpsert, BulkArrangementEntry, BulkArrangementResult,
    MAX_BULK_ENTRIES,
};

/// Slot assignments grouped by section
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedArrangements {
    pub personal: Vec<EventArrangement>,
    pub ceremony: Vec<EventArrangement>,
    pub reception: Vec<EventArrangement>,
    pub suggestion: Vec<EventArrangement>,
}

impl GroupedArrangements {
    fn from_rows(rows: Vec<EventArrangement>) -> Self {
        let mut grouped = Self::default();
        for row in rows {
            match row.section {
                Section::Personal => grouped.personal.push(row),
                Section::Ceremony => grouped.ceremony.push(row),
                Section::Reception => grouped.reception.push(row),
                Section::Suggestion => grouped.suggestion.push(row),
            }
        }
        grouped
    }
}

/// Saved slot plus the server timestamp
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSlot {
    #[serde(flatten)]
    pub arrangement: EventArrangement,
    pub saved_at: i64,
}

/// GET /api/events/:id/arrangements - 按区块分组的槽位列表
pub async fn list(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<GroupedArrangements>> {
    require_event(&state.pool, id).await?;
    let rows = event_arrangement::list_by_event(&state.pool, id).await?;
    Ok(ApiResponse::success(GroupedArrangements::from_rows(rows)))
}

/// POST/PATCH /api/events/:id/arrangements - 槽位 upsert
/// (event_id, section, slot_no) 上 create-or-replace，不会产生重复行
pub async fn upsert(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ArrangementUpsert>,
) -> AppResult<ApiResponse<SavedSlot>> {
    payload.validate()?;

    let event = require_event(&state.pool, id).await?;

    if !catalog::arrangements_visible(&state.pool, event.vendor_id, &[payload.arrangement_id])
        .await?
    {
        return Err(AppError::new(ErrorCode::InvalidArrangementReference));
    }

    let arrangement = event_arrangement::upsert(
        &state.pool,
        id,
        event_arrangement::SlotUpsert {
            arrangement_id: payload.arrangement_id,
            section: payload.section,
            slot_no: payload.slot_no,
            slot_name: payload.slot_name,
            quantity: payload.quantity,
        },
    )
    .await?;

    let saved_at = shared::util::now_millis();
    Ok(ApiResponse::success(SavedSlot {
        arrangement,
        saved_at,
    }))
}

/// Delete outcome; zero rows is a soft no-op, not an error
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedSlots {
    pub deleted: u64,
}

/// DELETE /api/events/:id/arrangements - 删除匹配槽位
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ArrangementDelete>,
) -> AppResult<ApiResponse<DeletedSlots>> {
    require_event(&state.pool, id).await?;

    let deleted = event_arrangement::delete_matching(
        &state.pool,
        id,
        payload.arrangement_id,
        payload.section,
        payload.slot_no,
    )
    .await?;

    Ok(ApiResponse::success(DeletedSlots { deleted }))
}

/// POST /api/events/:id/arrangements/bulk-update - 单事务批量更新
/// 全部成功或全部回滚；响应按提交顺序列出每条的执行动作
pub async fn bulk_update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(entries): Json<Vec<BulkArrangementEntry>>,
) -> AppResult<ApiResponse<Vec<BulkArrangementResult>>> {
    if entries.len() > MAX_BULK_ENTRIES {
        return Err(AppError::validation(format!(
            "bulk update holds {} entries, max {MAX_BULK_ENTRIES}",
            entries.len()
        )));
    }
    for entry in &entries {
        if entry.slot_no < 1 {
            return Err(AppError::validation("slot_no must be at least 1")
                .with_detail("field", "slot_no"));
        }
        if entry.quantity < 1 {
            return Err(AppError::validation("quantity must be at least 1")
                .with_detail("field", "quantity"));
        }
    }

    let event = require_event(&state.pool, id).await?;

    // Ownership check covers every upserted arrangement id; the batch is
    // rejected wholesale on any invalid reference
    let upsert_ids: Vec<i64> = entries
        .iter()
        .filter(|e| e.action == shared::request::BulkAction::Upsert)
        .map(|e| e.arrangement_id)
        .collect();
    if !catalog::arrangements_visible(&state.pool, event.vendor_id, &upsert_ids).await? {
        return Err(AppError::new(ErrorCode::InvalidArrangementReference));
    }

    let results = event_arrangement::bulk_apply(&state.pool, id, &entries).await?;
    Ok(ApiResponse::success(results))
}
