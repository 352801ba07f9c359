//! Design Template Repository
//!
//! Templates provide the default slot layout copied into a fresh inquiry's
//! event. The vendor's own default is preferred over a shared default.

use super::RepoResult;
use shared::models::{DesignTemplate, DesignTemplateSlot};
use sqlx::SqlitePool;

const TEMPLATE_SELECT: &str =
    "SELECT id, vendor_id, name, is_shared, is_default, created_at FROM design_template";

/// The default template for a vendor: vendor-owned default first, shared
/// default as fallback.
pub async fn find_default_for_vendor(
    pool: &SqlitePool,
    vendor_id: i64,
) -> RepoResult<Option<DesignTemplate>> {
    let sql = format!(
        "{TEMPLATE_SELECT} WHERE is_default = 1 AND (vendor_id = ? OR is_shared = 1) \
         ORDER BY (vendor_id = ?) DESC, id LIMIT 1"
    );
    let template = sqlx::query_as::<_, DesignTemplate>(&sql)
        .bind(vendor_id)
        .bind(vendor_id)
        .fetch_optional(pool)
        .await?;
    Ok(template)
}

pub async fn slots_for_template(
    pool: &SqlitePool,
    template_id: i64,
) -> RepoResult<Vec<DesignTemplateSlot>> {
    let slots = sqlx::query_as::<_, DesignTemplateSlot>(
        "SELECT id, template_id, section, slot_no, slot_name, arrangement_id, quantity \
         FROM design_template_slot WHERE template_id = ? ORDER BY section, slot_no",
    )
    .bind(template_id)
    .fetch_all(pool)
    .await?;
    Ok(slots)
}

/// Copy the template's slots into the event's arrangement rows.
/// Returns the number of slots created.
pub async fn copy_into_event(
    pool: &SqlitePool,
    template_id: i64,
    event_id: i64,
) -> RepoResult<usize> {
    let slots = slots_for_template(pool, template_id).await?;
    let now = shared::util::now_millis();

    for slot in &slots {
        sqlx::query(
            "INSERT INTO event_arrangement (id, event_id, arrangement_id, section, slot_no, slot_name, quantity, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) \
             ON CONFLICT(event_id, section, slot_no) DO NOTHING",
        )
        .bind(shared::util::snowflake_id())
        .bind(event_id)
        .bind(slot.arrangement_id)
        .bind(slot.section)
        .bind(slot.slot_no)
        .bind(&slot.slot_name)
        .bind(slot.quantity)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
    }

    Ok(slots.len())
}
