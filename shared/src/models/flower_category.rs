//! Flower Category Model

use super::flower::Flower;
use serde::{Deserialize, Serialize};

/// Flower category entity (vendor catalog, optionally shared)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct FlowerCategory {
    pub id: i64,
    pub vendor_id: i64,
    pub name: String,
    pub is_shared: bool,
    pub is_active: bool,
    pub created_at: i64,
}

/// Category with a bounded flower preview for catalog listings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowerCategoryWithPreview {
    #[serde(flatten)]
    pub category: FlowerCategory,
    /// Up to 5 flowers, vendor-owned first
    pub flowers: Vec<Flower>,
    pub flower_count: i64,
}
