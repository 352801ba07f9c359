//! Inspiration Repository

use super::{RepoError, RepoResult};
use shared::models::{Inspiration, InspirationSource};
use sqlx::SqlitePool;

const INSPIRATION_SELECT: &str =
    "SELECT id, event_id, source, url, created_at FROM inspiration";

pub async fn count_by_event(pool: &SqlitePool, event_id: i64) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inspiration WHERE event_id = ?")
        .bind(event_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Newest-first listing
pub async fn list_by_event(pool: &SqlitePool, event_id: i64) -> RepoResult<Vec<Inspiration>> {
    let sql = format!("{INSPIRATION_SELECT} WHERE event_id = ? ORDER BY created_at DESC, id DESC");
    let rows = sqlx::query_as::<_, Inspiration>(&sql)
        .bind(event_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn create(
    pool: &SqlitePool,
    event_id: i64,
    source: InspirationSource,
    url: &str,
) -> RepoResult<Inspiration> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query("INSERT INTO inspiration (id, event_id, source, url, created_at) VALUES (?, ?, ?, ?, ?)")
        .bind(id)
        .bind(event_id)
        .bind(source)
        .bind(url)
        .bind(now)
        .execute(pool)
        .await?;

    let sql = format!("{INSPIRATION_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Inspiration>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.ok_or_else(|| RepoError::Database("Failed to create inspiration".into()))
}

/// Delete by (event_id, inspiration_id). Returns false when nothing matched;
/// the handler reports that as 404 (deletion is not idempotent).
pub async fn delete(pool: &SqlitePool, event_id: i64, inspiration_id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM inspiration WHERE event_id = ? AND id = ?")
        .bind(event_id)
        .bind(inspiration_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
