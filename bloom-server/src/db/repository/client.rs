//! Client Repository

use super::{RepoError, RepoResult};
use shared::models::{Client, ClientCreate};
use sqlx::SqlitePool;

const CLIENT_SELECT: &str =
    "SELECT id, name, email, phone, is_active, created_at, updated_at FROM client";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Client>> {
    let sql = format!("{CLIENT_SELECT} WHERE id = ?");
    let client = sqlx::query_as::<_, Client>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(client)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<Client>> {
    let sql = format!("{CLIENT_SELECT} WHERE email = ? LIMIT 1");
    let client = sqlx::query_as::<_, Client>(&sql)
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(client)
}

pub async fn create(pool: &SqlitePool, data: ClientCreate) -> RepoResult<Client> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO client (id, name, email, phone, is_active, created_at, updated_at) VALUES (?, ?, ?, ?, 1, ?, ?)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create client".into()))
}

/// Find-or-create by email. No duplicate client rows for one email; a new
/// inquiry from a known address reuses the existing row.
pub async fn find_or_create_by_email(
    pool: &SqlitePool,
    data: ClientCreate,
) -> RepoResult<Client> {
    if let Some(existing) = find_by_email(pool, &data.email).await? {
        return Ok(existing);
    }
    create(pool, data).await
}
