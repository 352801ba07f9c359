//! Event Model

use serde::{Deserialize, Serialize};

/// Event status
///
/// Only `Inquiry` is assigned by this service; later stages are set by the
/// studio back office. Transitions are not validated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum EventStatus {
    Inquiry,
    Proposal,
    Booked,
    Completed,
    Archived,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inquiry => "Inquiry",
            Self::Proposal => "Proposal",
            Self::Booked => "Booked",
            Self::Completed => "Completed",
            Self::Archived => "Archived",
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event entity (one client's wedding engagement with a vendor)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub client_id: i64,
    pub vendor_id: i64,
    pub event_type_id: Option<i64>,
    /// ISO date string, e.g. "2026-06-01"
    pub wedding_date: Option<String>,
    pub status: EventStatus,
    /// Per-vendor inquiry sequence, formatted for display with
    /// [`crate::util::format_inquiry_no`]
    pub inquiry_no: i64,
    pub notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Event with joined display names (wizard resume / detail views)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    pub id: i64,
    pub client_id: i64,
    pub vendor_id: i64,
    pub event_type_id: Option<i64>,
    pub wedding_date: Option<String>,
    pub status: EventStatus,
    pub inquiry_no: i64,
    pub notes: Option<String>,
    pub client_name: String,
    pub vendor_name: String,
    pub event_type_name: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(EventStatus::Inquiry.to_string(), "Inquiry");
        assert_eq!(EventStatus::Booked.to_string(), "Booked");
    }

    #[test]
    fn test_status_serde_roundtrip() {
        let json = serde_json::to_string(&EventStatus::Inquiry).unwrap();
        assert_eq!(json, "\"Inquiry\"");
        let parsed: EventStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, EventStatus::Inquiry);
    }
}
