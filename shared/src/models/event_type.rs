//! Event Type Model

use serde::{Deserialize, Serialize};

/// Default event types offered when a vendor has defined none
pub const DEFAULT_EVENT_TYPES: &[&str] = &[
    "General Inquiry",
    "Wedding",
    "Elopement",
    "Engagement Party",
    "Bridal Shower",
];

/// Event type entity (vendor catalog, UNIQUE per vendor+name)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct EventType {
    pub id: i64,
    pub vendor_id: i64,
    pub name: String,
    pub is_active: bool,
    pub created_at: i64,
}
