//! Design Template Model

use super::event_arrangement::Section;
use serde::{Deserialize, Serialize};

/// Design template entity (a reusable default slot layout)
///
/// The vendor-specific default is preferred over a shared default when
/// copying slots into a new inquiry's event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct DesignTemplate {
    pub id: i64,
    pub vendor_id: i64,
    pub name: String,
    pub is_shared: bool,
    pub is_default: bool,
    pub created_at: i64,
}

/// One slot of a design template (ordered section/slot_no/arrangement triple)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct DesignTemplateSlot {
    pub id: i64,
    pub template_id: i64,
    pub section: Section,
    pub slot_no: i64,
    pub slot_name: Option<String>,
    pub arrangement_id: i64,
    pub quantity: i64,
}
