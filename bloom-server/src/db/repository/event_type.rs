//! Event Type Repository

use super::{RepoError, RepoResult};
use shared::models::EventType;
use sqlx::SqlitePool;

const EVENT_TYPE_SELECT: &str =
    "SELECT id, vendor_id, name, is_active, created_at FROM event_type";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<EventType>> {
    let sql = format!("{EVENT_TYPE_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, EventType>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_vendor(pool: &SqlitePool, vendor_id: i64) -> RepoResult<Vec<EventType>> {
    let sql = format!("{EVENT_TYPE_SELECT} WHERE vendor_id = ? AND is_active = 1 ORDER BY name");
    let rows = sqlx::query_as::<_, EventType>(&sql)
        .bind(vendor_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_name(
    pool: &SqlitePool,
    vendor_id: i64,
    name: &str,
) -> RepoResult<Option<EventType>> {
    let sql = format!("{EVENT_TYPE_SELECT} WHERE vendor_id = ? AND name = ? LIMIT 1");
    let row = sqlx::query_as::<_, EventType>(&sql)
        .bind(vendor_id)
        .bind(name)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Find-or-create by (vendor, name). UNIQUE(vendor_id, name) makes the
/// insert race-safe; a concurrent insert surfaces as the existing row.
pub async fn find_or_create(
    pool: &SqlitePool,
    vendor_id: i64,
    name: &str,
) -> RepoResult<EventType> {
    if let Some(existing) = find_by_name(pool, vendor_id, name).await? {
        return Ok(existing);
    }

    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    let inserted = sqlx::query(
        "INSERT OR IGNORE INTO event_type (id, vendor_id, name, is_active, created_at) VALUES (?, ?, ?, 1, ?)",
    )
    .bind(id)
    .bind(vendor_id)
    .bind(name)
    .bind(now)
    .execute(pool)
    .await?;

    if inserted.rows_affected() == 0 {
        // Lost the race; the row exists now
        return find_by_name(pool, vendor_id, name)
            .await?
            .ok_or_else(|| RepoError::Database("Failed to create event type".into()));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create event type".into()))
}
