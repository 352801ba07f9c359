//! Chat Model

use serde::{Deserialize, Serialize};

/// Chat entity (one conversation record per inquiry)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: i64,
    pub event_id: i64,
    pub vendor_id: i64,
    pub client_id: i64,
    pub created_at: i64,
}
