//! Event Design Repository
//!
//! One design row per event (UNIQUE on event_id). The write path is a single
//! `INSERT .. ON CONFLICT(event_id) DO UPDATE` so two near-simultaneous
//! saves can never observe "no row yet" and both create one.

use super::{RepoError, RepoResult, parse_id_array, parse_string_array, to_json_column};
use shared::models::{EventDesign, EventFlowers};
use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
struct EventDesignRow {
    id: i64,
    event_id: i64,
    event_type_id: Option<i64>,
    primary_colors: String,
    secondary_colors: String,
    accent_colors: String,
    color_ids: String,
    design_cost: Option<f64>,
    revision: i64,
    created_at: i64,
    updated_at: i64,
}

impl EventDesignRow {
    fn into_model(self) -> RepoResult<EventDesign> {
        Ok(EventDesign {
            id: self.id,
            event_id: self.event_id,
            event_type_id: self.event_type_id,
            primary_colors: parse_string_array(&self.primary_colors)?,
            secondary_colors: parse_string_array(&self.secondary_colors)?,
            accent_colors: parse_string_array(&self.accent_colors)?,
            color_ids: parse_id_array(&self.color_ids)?,
            design_cost: self.design_cost,
            revision: self.revision,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

const DESIGN_SELECT: &str = "SELECT id, event_id, event_type_id, primary_colors, secondary_colors, accent_colors, color_ids, design_cost, revision, created_at, updated_at FROM event_design";

pub struct DesignUpsert {
    pub event_type_id: Option<i64>,
    pub primary_colors: Vec<String>,
    pub secondary_colors: Vec<String>,
    pub accent_colors: Vec<String>,
    pub color_ids: Vec<i64>,
    pub design_cost: Option<f64>,
}

pub async fn find_by_event(pool: &SqlitePool, event_id: i64) -> RepoResult<Option<EventDesign>> {
    let sql = format!("{DESIGN_SELECT} WHERE event_id = ?");
    let row = sqlx::query_as::<_, EventDesignRow>(&sql)
        .bind(event_id)
        .fetch_optional(pool)
        .await?;
    row.map(EventDesignRow::into_model).transpose()
}

/// Atomic create-or-update of the event's design row. Repeating the same
/// payload leaves the same stored scheme; `revision` tracks write lineage.
pub async fn upsert(
    pool: &SqlitePool,
    event_id: i64,
    data: DesignUpsert,
) -> RepoResult<EventDesign> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO event_design (id, event_id, event_type_id, primary_colors, secondary_colors, accent_colors, color_ids, design_cost, revision, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, 1, ?, ?) \
         ON CONFLICT(event_id) DO UPDATE SET \
           event_type_id = COALESCE(excluded.event_type_id, event_design.event_type_id), \
           primary_colors = excluded.primary_colors, \
           secondary_colors = excluded.secondary_colors, \
           accent_colors = excluded.accent_colors, \
           color_ids = excluded.color_ids, \
           design_cost = COALESCE(excluded.design_cost, event_design.design_cost), \
           revision = event_design.revision + 1, \
           updated_at = excluded.updated_at",
    )
    .bind(id)
    .bind(event_id)
    .bind(data.event_type_id)
    .bind(to_json_column(&data.primary_colors)?)
    .bind(to_json_column(&data.secondary_colors)?)
    .bind(to_json_column(&data.accent_colors)?)
    .bind(to_json_column(&data.color_ids)?)
    .bind(data.design_cost)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_event(pool, event_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to upsert event design".into()))
}

// ── Flower preferences (one blob row per event) ─────────────────────

#[derive(sqlx::FromRow)]
struct EventFlowersRow {
    event_id: i64,
    flower_ids: String,
    category_ids: String,
    notes: Option<String>,
    updated_at: i64,
}

impl EventFlowersRow {
    fn into_model(self) -> RepoResult<EventFlowers> {
        Ok(EventFlowers {
            event_id: self.event_id,
            flower_ids: parse_id_array(&self.flower_ids)?,
            category_ids: parse_id_array(&self.category_ids)?,
            notes: self.notes,
            updated_at: self.updated_at,
        })
    }
}

pub async fn find_flowers(pool: &SqlitePool, event_id: i64) -> RepoResult<Option<EventFlowers>> {
    let row = sqlx::query_as::<_, EventFlowersRow>(
        "SELECT event_id, flower_ids, category_ids, notes, updated_at FROM event_flowers WHERE event_id = ?",
    )
    .bind(event_id)
    .fetch_optional(pool)
    .await?;
    row.map(EventFlowersRow::into_model).transpose()
}

pub async fn upsert_flowers(
    pool: &SqlitePool,
    event_id: i64,
    flower_ids: &[i64],
    category_ids: &[i64],
    notes: Option<&str>,
) -> RepoResult<EventFlowers> {
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO event_flowers (event_id, flower_ids, category_ids, notes, updated_at) \
         VALUES (?, ?, ?, ?, ?) \
         ON CONFLICT(event_id) DO UPDATE SET \
           flower_ids = excluded.flower_ids, \
           category_ids = excluded.category_ids, \
           notes = COALESCE(excluded.notes, event_flowers.notes), \
           updated_at = excluded.updated_at",
    )
    .bind(event_id)
    .bind(to_json_column(&flower_ids)?)
    .bind(to_json_column(&category_ids)?)
    .bind(notes)
    .bind(now)
    .execute(pool)
    .await?;

    find_flowers(pool, event_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to upsert flower preferences".into()))
}
