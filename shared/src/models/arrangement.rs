//! Arrangement Model

use serde::{Deserialize, Serialize};

/// Arrangement entity (vendor catalog, optionally shared)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Arrangement {
    pub id: i64,
    pub vendor_id: i64,
    pub arrangement_type_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    pub is_shared: bool,
    pub is_active: bool,
    pub created_at: i64,
}

/// Create arrangement payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrangementCreate {
    pub name: String,
    pub arrangement_type_id: Option<i64>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub is_shared: Option<bool>,
}
