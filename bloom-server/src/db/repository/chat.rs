//! Chat Repository

use super::{RepoError, RepoResult};
use shared::models::Chat;
use sqlx::SqlitePool;

pub async fn create(
    pool: &SqlitePool,
    event_id: i64,
    vendor_id: i64,
    client_id: i64,
) -> RepoResult<Chat> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO chat (id, event_id, vendor_id, client_id, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(event_id)
    .bind(vendor_id)
    .bind(client_id)
    .bind(now)
    .execute(pool)
    .await?;

    let chat = sqlx::query_as::<_, Chat>(
        "SELECT id, event_id, vendor_id, client_id, created_at FROM chat WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    chat.ok_or_else(|| RepoError::Database("Failed to create chat".into()))
}
