//! Event Arrangement Repository
//!
//! The uniqueness key is (event_id, section, slot_no); upsert on that key is
//! the sole mutation primitive. Bulk updates run in one transaction.

use super::{RepoError, RepoResult};
use shared::models::{EventArrangement, Section};
use shared::request::{BulkAction, BulkArrangementEntry, BulkArrangementResult};
use sqlx::SqlitePool;

const ARRANGEMENT_SELECT: &str = "SELECT id, event_id, arrangement_id, section, slot_no, slot_name, quantity, created_at, updated_at FROM event_arrangement";

const UPSERT_SQL: &str = "INSERT INTO event_arrangement (id, event_id, arrangement_id, section, slot_no, slot_name, quantity, created_at, updated_at) \
     VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) \
     ON CONFLICT(event_id, section, slot_no) DO UPDATE SET \
       arrangement_id = excluded.arrangement_id, \
       slot_name = COALESCE(excluded.slot_name, event_arrangement.slot_name), \
       quantity = excluded.quantity, \
       updated_at = excluded.updated_at";

pub struct SlotUpsert {
    pub arrangement_id: i64,
    pub section: Section,
    pub slot_no: i64,
    pub slot_name: Option<String>,
    pub quantity: i64,
}

pub async fn list_by_event(pool: &SqlitePool, event_id: i64) -> RepoResult<Vec<EventArrangement>> {
    let sql = format!("{ARRANGEMENT_SELECT} WHERE event_id = ? ORDER BY section, slot_no");
    let rows = sqlx::query_as::<_, EventArrangement>(&sql)
        .bind(event_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_slot(
    pool: &SqlitePool,
    event_id: i64,
    section: Section,
    slot_no: i64,
) -> RepoResult<Option<EventArrangement>> {
    let sql = format!("{ARRANGEMENT_SELECT} WHERE event_id = ? AND section = ? AND slot_no = ?");
    let row = sqlx::query_as::<_, EventArrangement>(&sql)
        .bind(event_id)
        .bind(section)
        .bind(slot_no)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Create-or-replace the slot assignment, never duplicate
pub async fn upsert(
    pool: &SqlitePool,
    event_id: i64,
    data: SlotUpsert,
) -> RepoResult<EventArrangement> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(UPSERT_SQL)
        .bind(id)
        .bind(event_id)
        .bind(data.arrangement_id)
        .bind(data.section)
        .bind(data.slot_no)
        .bind(&data.slot_name)
        .bind(data.quantity)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;

    find_slot(pool, event_id, data.section, data.slot_no)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to upsert arrangement slot".into()))
}

/// Delete matching rows by (event_id, arrangement_id, section[, slot_no]).
/// Returns the number of rows removed; zero is a soft no-op, not an error.
pub async fn delete_matching(
    pool: &SqlitePool,
    event_id: i64,
    arrangement_id: i64,
    section: Section,
    slot_no: Option<i64>,
) -> RepoResult<u64> {
    let result = match slot_no {
        Some(slot) => {
            sqlx::query(
                "DELETE FROM event_arrangement WHERE event_id = ? AND arrangement_id = ? AND section = ? AND slot_no = ?",
            )
            .bind(event_id)
            .bind(arrangement_id)
            .bind(section)
            .bind(slot)
            .execute(pool)
            .await?
        }
        None => {
            sqlx::query(
                "DELETE FROM event_arrangement WHERE event_id = ? AND arrangement_id = ? AND section = ?",
            )
            .bind(event_id)
            .bind(arrangement_id)
            .bind(section)
            .execute(pool)
            .await?
        }
    };
    Ok(result.rows_affected())
}

/// Apply an ordered batch of upserts/deletes inside one transaction.
/// Failure mid-batch rolls back every entry.
pub async fn bulk_apply(
    pool: &SqlitePool,
    event_id: i64,
    entries: &[BulkArrangementEntry],
) -> RepoResult<Vec<BulkArrangementResult>> {
    let mut tx = pool.begin().await?;
    let mut results = Vec::with_capacity(entries.len());
    let now = shared::util::now_millis();

    for entry in entries {
        let applied = match entry.action {
            BulkAction::Delete => {
                sqlx::query(
                    "DELETE FROM event_arrangement WHERE event_id = ? AND arrangement_id = ? AND section = ? AND slot_no = ?",
                )
                .bind(event_id)
                .bind(entry.arrangement_id)
                .bind(entry.section)
                .bind(entry.slot_no)
                .execute(&mut *tx)
                .await?;
                "deleted"
            }
            BulkAction::Upsert => {
                sqlx::query(UPSERT_SQL)
                    .bind(shared::util::snowflake_id())
                    .bind(event_id)
                    .bind(entry.arrangement_id)
                    .bind(entry.section)
                    .bind(entry.slot_no)
                    .bind(&entry.slot_name)
                    .bind(entry.quantity)
                    .bind(now)
                    .bind(now)
                    .execute(&mut *tx)
                    .await?;
                "upserted"
            }
        };
        results.push(BulkArrangementResult {
            arrangement_id: entry.arrangement_id,
            section: entry.section,
            slot_no: entry.slot_no,
            applied: applied.to_string(),
        });
    }

    tx.commit().await?;
    Ok(results)
}
