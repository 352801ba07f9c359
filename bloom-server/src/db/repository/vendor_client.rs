//! Vendor-Client Link Repository

use super::RepoResult;
use sqlx::SqlitePool;

/// Idempotent upsert of the vendor↔client link
pub async fn link(pool: &SqlitePool, vendor_id: i64, client_id: i64) -> RepoResult<()> {
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT OR IGNORE INTO vendor_client (vendor_id, client_id, created_at) VALUES (?, ?, ?)",
    )
    .bind(vendor_id)
    .bind(client_id)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(())
}
