//! Color Model

use serde::{Deserialize, Serialize};

/// Color entity (vendor catalog, optionally shared across vendors)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub id: i64,
    pub vendor_id: i64,
    pub name: String,
    /// `#RRGGBB`
    pub hex: String,
    pub is_shared: bool,
    pub is_active: bool,
    pub created_at: i64,
}

/// Create color payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorCreate {
    pub name: String,
    pub hex: String,
    pub is_shared: Option<bool>,
}
