//! Arrangement Type Model

use super::arrangement::Arrangement;
use serde::{Deserialize, Serialize};

/// Arrangement type entity (vendor catalog, optionally shared)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct ArrangementType {
    pub id: i64,
    pub vendor_id: i64,
    pub name: String,
    pub is_shared: bool,
    pub is_active: bool,
    pub created_at: i64,
}

/// Arrangement type with a bounded arrangement preview for catalog listings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrangementTypeWithPreview {
    #[serde(flatten)]
    pub arrangement_type: ArrangementType,
    /// Up to 5 arrangements, vendor-owned first
    pub arrangements: Vec<Arrangement>,
    pub arrangement_count: i64,
}
