//! Event Repository

use super::{RepoError, RepoResult};
use shared::models::{Event, EventDetail};
use sqlx::SqlitePool;

const EVENT_SELECT: &str = "SELECT id, client_id, vendor_id, event_type_id, wedding_date, status, inquiry_no, notes, created_at, updated_at FROM event";

pub struct EventCreate {
    pub client_id: i64,
    pub vendor_id: i64,
    pub event_type_id: Option<i64>,
    pub wedding_date: Option<String>,
    pub notes: Option<String>,
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Event>> {
    let sql = format!("{EVENT_SELECT} WHERE id = ?");
    let event = sqlx::query_as::<_, Event>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(event)
}

pub async fn find_detail_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<EventDetail>> {
    let detail = sqlx::query_as::<_, EventDetail>(
        "SELECT e.id, e.client_id, e.vendor_id, e.event_type_id, e.wedding_date, e.status, \
         e.inquiry_no, e.notes, c.name AS client_name, v.name AS vendor_name, \
         t.name AS event_type_name, e.created_at, e.updated_at \
         FROM event e \
         JOIN client c ON e.client_id = c.id \
         JOIN vendor v ON e.vendor_id = v.id \
         LEFT JOIN event_type t ON e.event_type_id = t.id \
         WHERE e.id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(detail)
}

/// Insert a new inquiry event. The per-vendor inquiry sequence is assigned
/// inline from the vendor's current event count.
pub async fn create(pool: &SqlitePool, data: EventCreate) -> RepoResult<Event> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO event (id, client_id, vendor_id, event_type_id, wedding_date, status, inquiry_no, notes, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, 'Inquiry', \
                 (SELECT COUNT(*) + 1 FROM event WHERE vendor_id = ?3), ?6, ?7, ?7)",
    )
    .bind(id)
    .bind(data.client_id)
    .bind(data.vendor_id)
    .bind(data.event_type_id)
    .bind(&data.wedding_date)
    .bind(&data.notes)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create event".into()))
}
