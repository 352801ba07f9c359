//! Event Arrangement Model

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Arrangement slot grouping within an event design
///
/// The uniqueness key for a slot assignment is (event_id, section, slot_no).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum Section {
    Personal,
    Ceremony,
    Reception,
    Suggestion,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Personal,
        Section::Ceremony,
        Section::Reception,
        Section::Suggestion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Ceremony => "Ceremony",
            Self::Reception => "Reception",
            Self::Suggestion => "Suggestion",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Personal" => Ok(Self::Personal),
            "Ceremony" => Ok(Self::Ceremony),
            "Reception" => Ok(Self::Reception),
            "Suggestion" => Ok(Self::Suggestion),
            other => Err(format!("invalid section: {other}")),
        }
    }
}

/// Event arrangement entity (one slot assignment)
///
/// At most one arrangement per (event_id, section, slot_no); upsert on that
/// composite key is the sole mutation primitive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct EventArrangement {
    pub id: i64,
    pub event_id: i64,
    pub arrangement_id: i64,
    pub section: Section,
    pub slot_no: i64,
    pub slot_name: Option<String>,
    pub quantity: i64,
    pub created_at: i64,
    pub updated_at: i64,
}
