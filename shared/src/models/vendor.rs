//! Vendor Model

use serde::{Deserialize, Serialize};

/// Vendor entity (a florist business, root of all data ownership)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: i64,
    pub name: String,
    /// URL slug for the public landing page (unique)
    pub slug: String,
    pub email: String,
    pub phone: Option<String>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create vendor payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorCreate {
    pub name: String,
    pub slug: String,
    pub email: String,
    pub phone: Option<String>,
}
