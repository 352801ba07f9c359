//! Event Design Model

use serde::{Deserialize, Serialize};

/// Event design entity (the color/cost snapshot for an event's floral design)
///
/// One row per event (UNIQUE on event_id). `revision` increments on every
/// write, so readers can tell stale drafts from the current state. The color
/// scheme is stored canonically as three per-role hex arrays plus the list
/// of selected catalog color ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDesign {
    pub id: i64,
    pub event_id: i64,
    pub event_type_id: Option<i64>,
    /// `#RRGGBB` values
    pub primary_colors: Vec<String>,
    pub secondary_colors: Vec<String>,
    pub accent_colors: Vec<String>,
    /// Selected catalog color ids (vendor-owned or shared)
    pub color_ids: Vec<i64>,
    pub design_cost: Option<f64>,
    pub revision: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Flower preferences blob, keyed by event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFlowers {
    pub event_id: i64,
    pub flower_ids: Vec<i64>,
    pub category_ids: Vec<i64>,
    pub notes: Option<String>,
    pub updated_at: i64,
}
