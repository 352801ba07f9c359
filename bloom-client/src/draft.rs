//! Onboarding draft state
//!
//! A plain serializable struct of the couple's wizard answers. No global
//! store: the draft is threaded explicitly through the wizard reducer and
//! handed to the auto-saver as a snapshot per save.

use serde::{Deserialize, Serialize};
use shared::request::{ColorSchemeUpdate, DesignSave, FlowerPrefsUpdate};

/// The wizard's draft of onboarding answers for one event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnboardingDraft {
    pub event_id: i64,
    pub event_type_id: Option<i64>,
    pub wedding_date: Option<String>,

    // Color scheme (hex values per role + selected catalog ids)
    pub primary_colors: Vec<String>,
    pub secondary_colors: Vec<String>,
    pub accent_colors: Vec<String>,
    pub color_ids: Vec<i64>,

    // Flower preferences
    pub flower_ids: Vec<i64>,
    pub flower_category_ids: Vec<i64>,

    pub notes: Option<String>,
    pub design_cost: Option<f64>,

    /// External inspiration URLs queued in the wizard (uploaded separately)
    pub inspiration_urls: Vec<String>,

    /// Stamped on every mutation, before any network confirmation
    pub last_saved_at: Option<i64>,
}

impl OnboardingDraft {
    pub fn new(event_id: i64) -> Self {
        Self {
            event_id,
            ..Default::default()
        }
    }

    /// Whether the draft carries flower preferences worth sending
    fn has_flower_prefs(&self) -> bool {
        !self.flower_ids.is_empty() || !self.flower_category_ids.is_empty() || self.notes.is_some()
    }

    /// Map the draft onto the auto-save endpoint's payload
    pub fn to_design_save(&self) -> DesignSave {
        DesignSave {
            event_type_id: self.event_type_id,
            colors: ColorSchemeUpdate {
                primary: self.primary_colors.clone(),
                secondary: self.secondary_colors.clone(),
                accent: self.accent_colors.clone(),
                color_ids: self.color_ids.clone(),
                design_cost: self.design_cost,
            },
            flowers: self.has_flower_prefs().then(|| FlowerPrefsUpdate {
                flower_ids: self.flower_ids.clone(),
                category_ids: self.flower_category_ids.clone(),
                notes: self.notes.clone(),
            }),
            design_cost: self.design_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_roundtrips_through_serde() {
        let mut draft = OnboardingDraft::new(7);
        draft.primary_colors = vec!["#AABBCC".into()];
        draft.flower_ids = vec![1, 2];
        draft.last_saved_at = Some(123);

        let json = serde_json::to_string(&draft).unwrap();
        let parsed: OnboardingDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, draft);
    }

    #[test]
    fn test_to_design_save_omits_empty_flowers() {
        let draft = OnboardingDraft::new(7);
        assert!(draft.to_design_save().flowers.is_none());

        let mut draft = OnboardingDraft::new(7);
        draft.flower_ids = vec![9];
        let save = draft.to_design_save();
        assert_eq!(save.flowers.unwrap().flower_ids, vec![9]);
    }
}
