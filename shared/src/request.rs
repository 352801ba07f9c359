//! Request payloads for the HTTP surface
//!
//! Structural validation lives here: the inquiry payload uses the
//! `validator` derive (field-level error reporting), the sub-resource
//! payloads expose explicit `validate()` methods returning [`AppError`]
//! with the offending field in `details`.

use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::Section;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

// ── Array caps ──────────────────────────────────────────────────────

pub const MAX_COLORS_PER_ROLE: usize = 10;
pub const MAX_COLOR_REFS: usize = 30;
pub const MAX_FLOWER_REFS: usize = 50;
pub const MAX_FLOWER_CATEGORY_REFS: usize = 20;
pub const MAX_BULK_ENTRIES: usize = 100;
pub const MAX_INSPIRATION_URLS: usize = 20;

static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex color regex"));

/// Check a `#RRGGBB` hex color string (case-insensitive)
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR_RE.is_match(value)
}

/// Convert `validator` errors into a single 400 with per-field messages
pub fn validation_error(errors: &validator::ValidationErrors) -> AppError {
    let mut err = AppError::new(ErrorCode::ValidationFailed);
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        err = err.with_detail(field.to_string(), messages.join(", "));
    }
    err
}

// ── Inquiry creation ────────────────────────────────────────────────

/// POST /api/inquiries/create payload
#[derive(Debug, Clone, Validate, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryCreate {
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub bride_name: String,
    #[validate(length(max = 200, message = "must be at most 200 characters"))]
    pub partner_name: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 5, max = 30, message = "must be 5-30 characters"))]
    pub phone: String,
    /// ISO date string, e.g. "2026-06-01"
    #[validate(length(min = 8, max = 10, message = "must be an ISO date"))]
    pub event_date: Option<String>,
    pub vendor_id: i64,
    /// Event type name; defaults to "General Inquiry"
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub event_type: Option<String>,
    #[validate(range(min = 1, max = 5000, message = "must be 1-5000"))]
    pub guest_count: Option<i64>,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub budget: Option<f64>,
    #[validate(length(max = 2000, message = "must be at most 2000 characters"))]
    pub message: Option<String>,
}

/// POST /api/inquiries/create response data
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryCreated {
    pub inquiry_id: i64,
    /// Zero-padded display number, e.g. "INQ-00007"
    pub inquiry_no: String,
    /// Client login URL for the onboarding wizard
    pub login_url: String,
    pub design_slots_created: usize,
    pub client_email_sent: bool,
    pub vendor_email_sent: bool,
}

// ── Color scheme ────────────────────────────────────────────────────

/// PATCH /api/events/{id}/colors payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSchemeUpdate {
    #[serde(default)]
    pub primary: Vec<String>,
    #[serde(default)]
    pub secondary: Vec<String>,
    #[serde(default)]
    pub accent: Vec<String>,
    /// Selected catalog color ids (checked against the event's vendor)
    #[serde(default)]
    pub color_ids: Vec<i64>,
    pub design_cost: Option<f64>,
}

impl ColorSchemeUpdate {
    /// Structural validation: array caps and hex format.
    /// Catalog-id ownership is checked separately against the vendor.
    pub fn validate(&self) -> AppResult<()> {
        for (field, values) in [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
        ] {
            if values.len() > MAX_COLORS_PER_ROLE {
                return Err(AppError::validation(format!(
                    "{field} holds {} colors, max {MAX_COLORS_PER_ROLE}",
                    values.len()
                ))
                .with_detail("field", field));
            }
            for value in values {
                if !is_hex_color(value) {
                    return Err(AppError::with_message(
                        ErrorCode::InvalidColorFormat,
                        format!("{value:?} is not a #RRGGBB hex color"),
                    )
                    .with_detail("field", field)
                    .with_detail("value", value.clone()));
                }
            }
        }
        if self.color_ids.len() > MAX_COLOR_REFS {
            return Err(AppError::validation(format!(
                "color_ids holds {} entries, max {MAX_COLOR_REFS}",
                self.color_ids.len()
            ))
            .with_detail("field", "color_ids"));
        }
        if let Some(cost) = self.design_cost
            && !(cost.is_finite() && cost >= 0.0)
        {
            return Err(AppError::validation("design_cost must be a non-negative number")
                .with_detail("field", "design_cost"));
        }
        Ok(())
    }
}

// ── Flower preferences ──────────────────────────────────────────────

/// PATCH /api/events/{id}/flowers payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowerPrefsUpdate {
    #[serde(default)]
    pub flower_ids: Vec<i64>,
    #[serde(default)]
    pub category_ids: Vec<i64>,
    pub notes: Option<String>,
}

impl FlowerPrefsUpdate {
    pub fn validate(&self) -> AppResult<()> {
        if self.flower_ids.len() > MAX_FLOWER_REFS {
            return Err(AppError::validation(format!(
                "flower_ids holds {} entries, max {MAX_FLOWER_REFS}",
                self.flower_ids.len()
            ))
            .with_detail("field", "flower_ids"));
        }
        if self.category_ids.len() > MAX_FLOWER_CATEGORY_REFS {
            return Err(AppError::validation(format!(
                "category_ids holds {} entries, max {MAX_FLOWER_CATEGORY_REFS}",
                self.category_ids.len()
            ))
            .with_detail("field", "category_ids"));
        }
        if let Some(notes) = &self.notes
            && notes.len() > 2000
        {
            return Err(
                AppError::validation("notes must be at most 2000 characters")
                    .with_detail("field", "notes"),
            );
        }
        Ok(())
    }
}

// ── Arrangements ────────────────────────────────────────────────────

fn default_slot_no() -> i64 {
    1
}

fn default_quantity() -> i64 {
    1
}

/// PATCH/POST /api/events/{id}/arrangements payload: create-or-replace on
/// (event_id, section, slot_no)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrangementUpsert {
    pub arrangement_id: i64,
    pub section: Section,
    #[serde(default = "default_slot_no")]
    pub slot_no: i64,
    pub slot_name: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

impl ArrangementUpsert {
    pub fn validate(&self) -> AppResult<()> {
        if self.slot_no < 1 {
            return Err(AppError::validation("slot_no must be at least 1")
                .with_detail("field", "slot_no"));
        }
        if self.quantity < 1 {
            return Err(AppError::validation("quantity must be at least 1")
                .with_detail("field", "quantity"));
        }
        if let Some(name) = &self.slot_name
            && name.len() > 200
        {
            return Err(
                AppError::validation("slot_name must be at most 200 characters")
                    .with_detail("field", "slot_name"),
            );
        }
        Ok(())
    }
}

/// DELETE /api/events/{id}/arrangements payload: removes matching rows,
/// succeeds with zero affected rows when nothing matches
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrangementDelete {
    pub arrangement_id: i64,
    pub section: Section,
    pub slot_no: Option<i64>,
}

/// Action discriminator for bulk arrangement entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkAction {
    #[default]
    Upsert,
    Delete,
}

/// One entry of POST /api/events/{id}/arrangements/bulk-update
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkArrangementEntry {
    pub arrangement_id: i64,
    pub section: Section,
    #[serde(default = "default_slot_no")]
    pub slot_no: i64,
    pub slot_name: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default)]
    pub action: BulkAction,
}

/// Per-entry outcome of a bulk update, in submission order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkArrangementResult {
    pub arrangement_id: i64,
    pub section: Section,
    pub slot_no: i64,
    /// "upserted" | "deleted"
    pub applied: String,
}

// ── Inspirations ────────────────────────────────────────────────────

/// URL part of POST /api/events/{id}/inspirations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspirationUrls {
    #[serde(default)]
    pub urls: Vec<String>,
}

impl InspirationUrls {
    /// Whole-batch validation: every URL must be well-formed http(s).
    pub fn validate(&self) -> AppResult<()> {
        if self.urls.len() > MAX_INSPIRATION_URLS {
            return Err(AppError::validation(format!(
                "urls holds {} entries, max {MAX_INSPIRATION_URLS}",
                self.urls.len()
            ))
            .with_detail("field", "urls"));
        }
        for url in &self.urls {
            if !is_well_formed_url(url) {
                return Err(AppError::with_message(
                    ErrorCode::InvalidInspirationUrl,
                    format!("{url:?} is not a valid http(s) URL"),
                )
                .with_detail("field", "urls")
                .with_detail("value", url.clone()));
            }
        }
        Ok(())
    }
}

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("url regex"));

/// Shallow well-formedness check for external image URLs
pub fn is_well_formed_url(value: &str) -> bool {
    value.len() <= 2048 && URL_RE.is_match(value)
}

// ── Design save / auto-save ─────────────────────────────────────────

/// POST /api/events/{id}/design and PATCH /api/events/{id}/design/auto-save
/// payload: the combined wizard draft snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSave {
    pub event_type_id: Option<i64>,
    #[serde(default)]
    pub colors: ColorSchemeUpdate,
    /// Present when the draft also carries flower preferences (auto-save)
    pub flowers: Option<FlowerPrefsUpdate>,
    pub design_cost: Option<f64>,
}

impl DesignSave {
    pub fn validate(&self) -> AppResult<()> {
        self.colors.validate()?;
        if let Some(flowers) = &self.flowers {
            flowers.validate()?;
        }
        if let Some(cost) = self.design_cost
            && !(cost.is_finite() && cost >= 0.0)
        {
            return Err(AppError::validation("design_cost must be a non-negative number")
                .with_detail("field", "design_cost"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert!(is_hex_color("#A1B2C3"));
        assert!(is_hex_color("#a1b2c3"));
        assert!(!is_hex_color("A1B2C3"));
        assert!(!is_hex_color("#A1B2C"));
        assert!(!is_hex_color("#A1B2C3D"));
        assert!(!is_hex_color("#GGHHII"));
    }

    #[test]
    fn test_inquiry_create_valid() {
        let payload = InquiryCreate {
            bride_name: "Jane".into(),
            partner_name: None,
            email: "jane@x.com".into(),
            phone: "5551234567".into(),
            event_date: Some("2026-06-01".into()),
            vendor_id: 1,
            event_type: None,
            guest_count: Some(120),
            budget: Some(4500.0),
            message: None,
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_inquiry_create_bad_email() {
        let payload = InquiryCreate {
            bride_name: "Jane".into(),
            partner_name: None,
            email: "not-an-email".into(),
            phone: "5551234567".into(),
            event_date: None,
            vendor_id: 1,
            event_type: None,
            guest_count: None,
            budget: None,
            message: None,
        };
        let errors = payload.validate().unwrap_err();
        let app_err = validation_error(&errors);
        assert_eq!(app_err.code, ErrorCode::ValidationFailed);
        assert!(app_err.details.unwrap().contains_key("email"));
    }

    #[test]
    fn test_color_scheme_rejects_bad_hex() {
        let payload = ColorSchemeUpdate {
            primary: vec!["#FFAA00".into(), "blush".into()],
            ..Default::default()
        };
        let err = payload.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidColorFormat);
    }

    #[test]
    fn test_color_scheme_cap() {
        let payload = ColorSchemeUpdate {
            accent: (0..11).map(|i| format!("#0000{i:02}")).collect(),
            ..Default::default()
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_arrangement_upsert_defaults() {
        let payload: ArrangementUpsert =
            serde_json::from_str(r#"{"arrangement_id":5,"section":"Ceremony"}"#).unwrap();
        assert_eq!(payload.slot_no, 1);
        assert_eq!(payload.quantity, 1);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_bulk_action_default_is_upsert() {
        let entry: BulkArrangementEntry =
            serde_json::from_str(r#"{"arrangement_id":5,"section":"Personal"}"#).unwrap();
        assert_eq!(entry.action, BulkAction::Upsert);

        let entry: BulkArrangementEntry = serde_json::from_str(
            r#"{"arrangement_id":5,"section":"Personal","action":"delete"}"#,
        )
        .unwrap();
        assert_eq!(entry.action, BulkAction::Delete);
    }

    #[test]
    fn test_inspiration_urls() {
        let ok = InspirationUrls {
            urls: vec!["https://example.com/a.jpg".into()],
        };
        assert!(ok.validate().is_ok());

        let bad = InspirationUrls {
            urls: vec!["ftp://example.com/a.jpg".into()],
        };
        let err = bad.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInspirationUrl);
    }
}
