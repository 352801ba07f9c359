//! Vendor Repository

use super::RepoResult;
use shared::models::Vendor;
use sqlx::SqlitePool;

const VENDOR_SELECT: &str =
    "SELECT id, name, slug, email, phone, is_active, created_at, updated_at FROM vendor";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Vendor>> {
    let sql = format!("{VENDOR_SELECT} WHERE id = ? AND is_active = 1");
    let vendor = sqlx::query_as::<_, Vendor>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(vendor)
}

pub async fn find_by_slug(pool: &SqlitePool, slug: &str) -> RepoResult<Option<Vendor>> {
    let sql = format!("{VENDOR_SELECT} WHERE slug = ? AND is_active = 1");
    let vendor = sqlx::query_as::<_, Vendor>(&sql)
        .bind(slug)
        .fetch_optional(pool)
        .await?;
    Ok(vendor)
}
