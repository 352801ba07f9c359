//! Catalog Repository
//!
//! Vendor catalog reads. Every query filters `vendor_id = ? OR is_shared = 1`
//! and orders vendor-owned rows before shared rows, then alphabetically.
//! Ownership checks for event payload references live here too: a batch is
//! valid only when every referenced id is visible to the event's vendor.

use super::RepoResult;
use shared::models::{
    Arrangement, ArrangementType, ArrangementTypeWithPreview, Color, Flower, FlowerCategory,
    FlowerCategoryWithPreview,
};
use sqlx::SqlitePool;
use std::collections::BTreeSet;

/// Bounded preview size for child rows in catalog listings
const PREVIEW_LIMIT: i64 = 5;

pub async fn colors_for_vendor(pool: &SqlitePool, vendor_id: i64) -> RepoResult<Vec<Color>> {
    let rows = sqlx::query_as::<_, Color>(
        "SELECT id, vendor_id, name, hex, is_shared, is_active, created_at FROM color \
         WHERE (vendor_id = ?1 OR is_shared = 1) AND is_active = 1 \
         ORDER BY (vendor_id = ?1) DESC, name",
    )
    .bind(vendor_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn flowers_for_vendor(pool: &SqlitePool, vendor_id: i64) -> RepoResult<Vec<Flower>> {
    let rows = sqlx::query_as::<_, Flower>(
        "SELECT id, vendor_id, category_id, name, image_url, is_shared, is_active, created_at FROM flower \
         WHERE (vendor_id = ?1 OR is_shared = 1) AND is_active = 1 \
         ORDER BY (vendor_id = ?1) DESC, name",
    )
    .bind(vendor_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn arrangements_for_vendor(
    pool: &SqlitePool,
    vendor_id: i64,
) -> RepoResult<Vec<Arrangement>> {
    let rows = sqlx::query_as::<_, Arrangement>(
        "SELECT id, vendor_id, arrangement_type_id, name, description, price, image_url, is_shared, is_active, created_at FROM arrangement \
         WHERE (vendor_id = ?1 OR is_shared = 1) AND is_active = 1 \
         ORDER BY (vendor_id = ?1) DESC, name",
    )
    .bind(vendor_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Arrangement types with a bounded arrangement preview plus a count
pub async fn arrangement_types_for_vendor(
    pool: &SqlitePool,
    vendor_id: i64,
) -> RepoResult<Vec<ArrangementTypeWithPreview>> {
    let types = sqlx::query_as::<_, ArrangementType>(
        "SELECT id, vendor_id, name, is_shared, is_active, created_at FROM arrangement_type \
         WHERE (vendor_id = ?1 OR is_shared = 1) AND is_active = 1 \
         ORDER BY (vendor_id = ?1) DESC, name",
    )
    .bind(vendor_id)
    .fetch_all(pool)
    .await?;

    let mut result = Vec::with_capacity(types.len());
    for arrangement_type in types {
        let arrangements = sqlx::query_as::<_, Arrangement>(
            "SELECT id, vendor_id, arrangement_type_id, name, description, price, image_url, is_shared, is_active, created_at FROM arrangement \
             WHERE arrangement_type_id = ?1 AND (vendor_id = ?2 OR is_shared = 1) AND is_active = 1 \
             ORDER BY (vendor_id = ?2) DESC, name LIMIT ?3",
        )
        .bind(arrangement_type.id)
        .bind(vendor_id)
        .bind(PREVIEW_LIMIT)
        .fetch_all(pool)
        .await?;

        let arrangement_count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM arrangement \
             WHERE arrangement_type_id = ?1 AND (vendor_id = ?2 OR is_shared = 1) AND is_active = 1",
        )
        .bind(arrangement_type.id)
        .bind(vendor_id)
        .fetch_one(pool)
        .await?;

        result.push(ArrangementTypeWithPreview {
            arrangement_type,
            arrangements,
            arrangement_count,
        });
    }
    Ok(result)
}

/// Flower categories with a bounded flower preview plus a count
pub async fn flower_categories_for_vendor(
    pool: &SqlitePool,
    vendor_id: i64,
) -> RepoResult<Vec<FlowerCategoryWithPreview>> {
    let categories = sqlx::query_as::<_, FlowerCategory>(
        "SELECT id, vendor_id, name, is_shared, is_active, created_at FROM flower_category \
         WHERE (vendor_id = ?1 OR is_shared = 1) AND is_active = 1 \
         ORDER BY (vendor_id = ?1) DESC, name",
    )
    .bind(vendor_id)
    .fetch_all(pool)
    .await?;

    let mut result = Vec::with_capacity(categories.len());
    for category in categories {
        let flowers = sqlx::query_as::<_, Flower>(
            "SELECT id, vendor_id, category_id, name, image_url, is_shared, is_active, created_at FROM flower \
             WHERE category_id = ?1 AND (vendor_id = ?2 OR is_shared = 1) AND is_active = 1 \
             ORDER BY (vendor_id = ?2) DESC, name LIMIT ?3",
        )
        .bind(category.id)
        .bind(vendor_id)
        .bind(PREVIEW_LIMIT)
        .fetch_all(pool)
        .await?;

        let flower_count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM flower \
             WHERE category_id = ?1 AND (vendor_id = ?2 OR is_shared = 1) AND is_active = 1",
        )
        .bind(category.id)
        .bind(vendor_id)
        .fetch_one(pool)
        .await?;

        result.push(FlowerCategoryWithPreview {
            category,
            flowers,
            flower_count,
        });
    }
    Ok(result)
}

// ── Reference ownership checks ──────────────────────────────────────

/// True when every referenced id exists in `table` and is visible to the
/// vendor (owned or shared). Empty batches are trivially valid.
async fn all_ids_visible(
    pool: &SqlitePool,
    table: &str,
    vendor_id: i64,
    ids: &[i64],
) -> RepoResult<bool> {
    if ids.is_empty() {
        return Ok(true);
    }
    let unique: BTreeSet<i64> = ids.iter().copied().collect();
    let placeholders = vec!["?"; unique.len()].join(",");
    let sql = format!(
        "SELECT COUNT(*) FROM {table} WHERE id IN ({placeholders}) AND (vendor_id = ? OR is_shared = 1) AND is_active = 1"
    );
    let mut query = sqlx::query_scalar::<_, i64>(&sql);
    for id in &unique {
        query = query.bind(id);
    }
    let count = query.bind(vendor_id).fetch_one(pool).await?;
    Ok(count == unique.len() as i64)
}

pub async fn colors_visible(pool: &SqlitePool, vendor_id: i64, ids: &[i64]) -> RepoResult<bool> {
    all_ids_visible(pool, "color", vendor_id, ids).await
}

pub async fn flowers_visible(pool: &SqlitePool, vendor_id: i64, ids: &[i64]) -> RepoResult<bool> {
    all_ids_visible(pool, "flower", vendor_id, ids).await
}

pub async fn flower_categories_visible(
    pool: &SqlitePool,
    vendor_id: i64,
    ids: &[i64],
) -> RepoResult<bool> {
    all_ids_visible(pool, "flower_category", vendor_id, ids).await
}

pub async fn arrangements_visible(
    pool: &SqlitePool,
    vendor_id: i64,
    ids: &[i64],
) -> RepoResult<bool> {
    all_ids_visible(pool, "arrangement", vendor_id, ids).await
}
