//! Flower Model

use serde::{Deserialize, Serialize};

/// Flower entity (vendor catalog, optionally shared across vendors)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Flower {
    pub id: i64,
    pub vendor_id: i64,
    pub category_id: Option<i64>,
    pub name: String,
    pub image_url: Option<String>,
    pub is_shared: bool,
    pub is_active: bool,
    pub created_at: i64,
}

/// Create flower payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowerCreate {
    pub name: String,
    pub category_id: Option<i64>,
    pub image_url: Option<String>,
    pub is_shared: Option<bool>,
}
