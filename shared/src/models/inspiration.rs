//! Inspiration Model

use serde::{Deserialize, Serialize};

/// Hard cap on stored inspirations per event
pub const MAX_INSPIRATIONS_PER_EVENT: i64 = 20;

/// Where an inspiration image came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum InspirationSource {
    Upload,
    Url,
}

/// Inspiration entity (one uploaded or URL-referenced image tied to an event)
///
/// Immutable once created except for deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Inspiration {
    pub id: i64,
    pub event_id: i64,
    pub source: InspirationSource,
    pub url: String,
    pub created_at: i64,
}
