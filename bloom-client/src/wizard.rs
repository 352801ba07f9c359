//! Wizard step state machine
//!
//! A fixed linear sequence of steps (1..=STEP_COUNT) plus a terminal
//! preview position, driven by an explicit action reducer. Field mutations
//! merge into the draft and stamp `last_saved_at` optimistically; step
//! navigation is where the auto-saver's immediate-flush path fires.

use crate::autosave::AutoSaver;
use crate::draft::OnboardingDraft;
use crate::transport::SaveTransport;
use std::sync::Arc;
use std::time::Duration;

/// Number of linear wizard steps in the full flow (colors, flowers,
/// arrangements, inspirations, details)
pub const STEP_COUNT: u8 = 5;

/// Onboarding flow variant
///
/// The quick variant collapses the flow to colors, flowers and details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardMode {
    #[default]
    Full,
    Quick,
}

impl WizardMode {
    pub const fn step_count(&self) -> u8 {
        match self {
            Self::Full => STEP_COUNT,
            Self::Quick => 3,
        }
    }
}

/// Where the wizard currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPosition {
    /// Linear step, 1-based, clamped to [1, STEP_COUNT]
    Step(u8),
    /// Terminal preview
    Preview,
}

/// Reducer actions
#[derive(Debug, Clone)]
pub enum WizardAction {
    // Navigation
    Next,
    Prev,
    GoToStep(u8),
    GoToPreview,
    GoBackFromPreview,

    // Field mutations (merge into the draft)
    SetEventType(Option<i64>),
    SetWeddingDate(Option<String>),
    SetColors {
        primary: Vec<String>,
        secondary: Vec<String>,
        accent: Vec<String>,
        color_ids: Vec<i64>,
    },
    SetFlowers {
        flower_ids: Vec<i64>,
        category_ids: Vec<i64>,
    },
    SetNotes(Option<String>),
    SetDesignCost(Option<f64>),
    AddInspirationUrl(String),
    RemoveInspirationUrl(usize),
}

/// Outcome of applying one action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    /// The draft changed; the debounced save should be (re)scheduled
    pub draft_changed: bool,
    /// The position changed; the immediate-flush path should fire
    pub navigated: bool,
}

/// Wizard state: position + draft, no global singleton
#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    pub mode: WizardMode,
    pub position: WizardPosition,
    pub draft: OnboardingDraft,
    /// Step to return to from preview
    return_step: u8,
}

impl WizardState {
    pub fn new(event_id: i64) -> Self {
        Self::with_mode(event_id, WizardMode::Full)
    }

    pub fn with_mode(event_id: i64, mode: WizardMode) -> Self {
        Self {
            mode,
            position: WizardPosition::Step(1),
            draft: OnboardingDraft::new(event_id),
            return_step: 1,
        }
    }

    pub fn resume(draft: OnboardingDraft) -> Self {
        Self {
            mode: WizardMode::Full,
            position: WizardPosition::Step(1),
            draft,
            return_step: 1,
        }
    }

    fn current_step(&self) -> u8 {
        match self.position {
            WizardPosition::Step(n) => n,
            WizardPosition::Preview => self.return_step,
        }
    }

    /// Pure reducer: apply one action, report what changed
    pub fn apply(&mut self, action: WizardAction) -> Applied {
        match action {
            WizardAction::Next => self.navigate(self.current_step().saturating_add(1)),
            WizardAction::Prev => self.navigate(self.current_step().saturating_sub(1).max(1)),
            WizardAction::GoToStep(n) => self.navigate(n),
            WizardAction::GoToPreview => {
                self.return_step = self.current_step();
                let navigated = self.position != WizardPosition::Preview;
                self.position = WizardPosition::Preview;
                Applied {
                    draft_changed: false,
                    navigated,
                }
            }
            WizardAction::GoBackFromPreview => {
                let navigated = self.position == WizardPosition::Preview;
                self.position = WizardPosition::Step(self.return_step);
                Applied {
                    draft_changed: false,
                    navigated,
                }
            }

            WizardAction::SetEventType(value) => {
                self.draft.event_type_id = value;
                self.mutated()
            }
            WizardAction::SetWeddingDate(value) => {
                self.draft.wedding_date = value;
                self.mutated()
            }
            WizardAction::SetColors {
                primary,
                secondary,
                accent,
                color_ids,
            } => {
                self.draft.primary_colors = primary;
                self.draft.secondary_colors = secondary;
                self.draft.accent_colors = accent;
                self.draft.color_ids = color_ids;
                self.mutated()
            }
            WizardAction::SetFlowers {
                flower_ids,
                category_ids,
            } => {
                self.draft.flower_ids = flower_ids;
                self.draft.flower_category_ids = category_ids;
                self.mutated()
            }
            WizardAction::SetNotes(value) => {
                self.draft.notes = value;
                self.mutated()
            }
            WizardAction::SetDesignCost(value) => {
                self.draft.design_cost = value;
                self.mutated()
            }
            WizardAction::AddInspirationUrl(url) => {
                self.draft.inspiration_urls.push(url);
                self.mutated()
            }
            WizardAction::RemoveInspirationUrl(index) => {
                if index < self.draft.inspiration_urls.len() {
                    self.draft.inspiration_urls.remove(index);
                    self.mutated()
                } else {
                    Applied {
                        draft_changed: false,
                        navigated: false,
                    }
                }
            }
        }
    }

    fn navigate(&mut self, target: u8) -> Applied {
        let clamped = target.clamp(1, self.mode.step_count());
        let next = WizardPosition::Step(clamped);
        let navigated = self.position != next;
        self.position = next;
        Applied {
            draft_changed: false,
            navigated,
        }
    }

    fn mutated(&mut self) -> Applied {
        // Optimistic stamp, before any network confirmation
        self.draft.last_saved_at = Some(shared::util::now_millis());
        Applied {
            draft_changed: true,
            navigated: false,
        }
    }
}

/// Wizard controller: reducer wired to the auto-saver
///
/// Field mutations reschedule the debounced save; navigation boundaries
/// flush immediately. Save failures degrade to "draft not yet saved":
/// they are logged, never propagated, and retried on the next debounce tick.
pub struct Wizard {
    pub state: WizardState,
    saver: AutoSaver,
}

impl Wizard {
    pub fn new(event_id: i64, transport: Arc<dyn SaveTransport>) -> Self {
        Self {
            state: WizardState::new(event_id),
            saver: AutoSaver::new(transport),
        }
    }

    pub fn with_debounce(
        event_id: i64,
        transport: Arc<dyn SaveTransport>,
        debounce: Duration,
    ) -> Self {
        Self {
            state: WizardState::new(event_id),
            saver: AutoSaver::with_debounce(transport, debounce),
        }
    }

    pub fn saver(&self) -> &AutoSaver {
        &self.saver
    }

    /// Apply an action and drive persistence accordingly
    pub async fn dispatch(&mut self, action: WizardAction) {
        let applied = self.state.apply(action);

        if applied.draft_changed {
            self.saver.schedule(self.state.draft.clone());
        }
        if applied.navigated
            && let Err(e) = self.saver.flush_now(&self.state.draft).await
        {
            tracing::warn!(
                event_id = self.state.draft.event_id,
                error = %e,
                "Draft flush failed at step boundary; will retry on next debounce tick"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_prev_clamped() {
        let mut state = WizardState::new(1);
        assert_eq!(state.position, WizardPosition::Step(1));

        // Prev on the first step stays put
        let applied = state.apply(WizardAction::Prev);
        assert_eq!(state.position, WizardPosition::Step(1));
        assert!(!applied.navigated);

        for expected in 2..=STEP_COUNT {
            state.apply(WizardAction::Next);
            assert_eq!(state.position, WizardPosition::Step(expected));
        }

        // Next on the last step stays put
        let applied = state.apply(WizardAction::Next);
        assert_eq!(state.position, WizardPosition::Step(STEP_COUNT));
        assert!(!applied.navigated);
    }

    #[test]
    fn test_go_to_step_clamped() {
        let mut state = WizardState::new(1);
        state.apply(WizardAction::GoToStep(0));
        assert_eq!(state.position, WizardPosition::Step(1));
        state.apply(WizardAction::GoToStep(99));
        assert_eq!(state.position, WizardPosition::Step(STEP_COUNT));
        state.apply(WizardAction::GoToStep(3));
        assert_eq!(state.position, WizardPosition::Step(3));
    }

    #[test]
    fn test_quick_mode_has_fewer_steps() {
        let mut state = WizardState::with_mode(1, WizardMode::Quick);
        state.apply(WizardAction::GoToStep(99));
        assert_eq!(state.position, WizardPosition::Step(3));
    }

    #[test]
    fn test_preview_roundtrip_restores_step() {
        let mut state = WizardState::new(1);
        state.apply(WizardAction::GoToStep(4));
        state.apply(WizardAction::GoToPreview);
        assert_eq!(state.position, WizardPosition::Preview);
        state.apply(WizardAction::GoBackFromPreview);
        assert_eq!(state.position, WizardPosition::Step(4));
    }

    #[test]
    fn test_mutation_stamps_last_saved_at() {
        let mut state = WizardState::new(1);
        assert!(state.draft.last_saved_at.is_none());
        let applied = state.apply(WizardAction::SetNotes(Some("peonies please".into())));
        assert!(applied.draft_changed);
        assert!(state.draft.last_saved_at.is_some());
    }

    #[test]
    fn test_remove_inspiration_out_of_range_is_noop() {
        let mut state = WizardState::new(1);
        let applied = state.apply(WizardAction::RemoveInspirationUrl(3));
        assert!(!applied.draft_changed);
    }
}
