// bloom-client/tests/wizard_autosave.rs
// 向导自动保存集成测试

use bloom_client::{
    ClientError, OnboardingDraft, SaveReceipt, SaveState, SaveTransport, Wizard, WizardAction,
    WizardPosition,
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// In-memory transport recording every save it receives
#[derive(Default)]
struct MemoryTransport {
    saves: Mutex<Vec<OnboardingDraft>>,
    fail_next: AtomicBool,
}

impl MemoryTransport {
    fn saved(&self) -> Vec<OnboardingDraft> {
        self.saves.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SaveTransport for MemoryTransport {
    async fn save(&self, draft: &OnboardingDraft) -> Result<SaveReceipt, ClientError> {
        if self.fail_next.load(Ordering::SeqCst) {
            return Err(ClientError::Network("connection refused".into()));
        }
        let mut saves = self.saves.lock().unwrap();
        saves.push(draft.clone());
        Ok(SaveReceipt {
            saved_at: 1_000 + saves.len() as i64,
            revision: Some(saves.len() as i64),
        })
    }
}

const DEBOUNCE: Duration = Duration::from_millis(2500);

#[tokio::test(start_paused = true)]
async fn rapid_mutations_coalesce_into_one_save() {
    let transport = Arc::new(MemoryTransport::default());
    let mut wizard = Wizard::with_debounce(42, transport.clone(), DEBOUNCE);

    wizard
        .dispatch(WizardAction::SetNotes(Some("roses".into())))
        .await;
    wizard
        .dispatch(WizardAction::SetNotes(Some("roses and ivy".into())))
        .await;
    wizard
        .dispatch(WizardAction::SetNotes(Some("peonies".into())))
        .await;

    assert_eq!(wizard.saver().state(), SaveState::Pending);

    // Let the debounce window elapse
    tokio::time::sleep(DEBOUNCE * 2).await;

    let saves = transport.saved();
    assert_eq!(saves.len(), 1, "rapid mutations must coalesce");
    assert_eq!(saves[0].notes.as_deref(), Some("peonies"));
    assert_eq!(wizard.saver().state(), SaveState::Idle);
    assert!(wizard.saver().last_confirmed_at().is_some());
}

#[tokio::test(start_paused = true)]
async fn navigation_flushes_immediately_and_cancels_pending_timer() {
    let transport = Arc::new(MemoryTransport::default());
    let mut wizard = Wizard::with_debounce(42, transport.clone(), DEBOUNCE);

    wizard
        .dispatch(WizardAction::SetWeddingDate(Some("2026-06-01".into())))
        .await;
    // Step boundary: forced save, pending timer cancelled
    wizard.dispatch(WizardAction::Next).await;

    assert_eq!(wizard.state.position, WizardPosition::Step(2));
    assert_eq!(transport.saved().len(), 1);

    // The cancelled debounce tick must not produce a second save
    tokio::time::sleep(DEBOUNCE * 2).await;
    assert_eq!(transport.saved().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn failed_save_is_retried_on_next_debounce_tick_only() {
    let transport = Arc::new(MemoryTransport::default());
    let mut wizard = Wizard::with_debounce(42, transport.clone(), DEBOUNCE);

    transport.fail_next.store(true, Ordering::SeqCst);
    wizard
        .dispatch(WizardAction::SetNotes(Some("ranunculus".into())))
        .await;
    tokio::time::sleep(DEBOUNCE * 2).await;

    // No backoff retry loop: exactly one failed attempt, error recorded
    assert_eq!(transport.saved().len(), 0);
    assert!(wizard.saver().last_error().is_some());
    assert!(wizard.saver().last_confirmed_at().is_none());
    assert_eq!(wizard.saver().state(), SaveState::Idle);

    // The next natural mutation tick retries and succeeds
    transport.fail_next.store(false, Ordering::SeqCst);
    wizard
        .dispatch(WizardAction::SetNotes(Some("ranunculus, white".into())))
        .await;
    tokio::time::sleep(DEBOUNCE * 2).await;

    assert_eq!(transport.saved().len(), 1);
    assert!(wizard.saver().last_confirmed_at().is_some());
    assert!(wizard.saver().last_error().is_none());
}

#[tokio::test(start_paused = true)]
async fn navigation_flush_failure_does_not_block_the_wizard() {
    let transport = Arc::new(MemoryTransport::default());
    let mut wizard = Wizard::with_debounce(42, transport.clone(), DEBOUNCE);

    transport.fail_next.store(true, Ordering::SeqCst);
    wizard
        .dispatch(WizardAction::SetDesignCost(Some(1200.0)))
        .await;
    wizard.dispatch(WizardAction::Next).await;

    // The user keeps moving even though the flush failed
    assert_eq!(wizard.state.position, WizardPosition::Step(2));
    assert!(wizard.saver().last_error().is_some());
}

#[tokio::test(start_paused = true)]
async fn preview_jump_and_back_flush_like_any_navigation() {
    let transport = Arc::new(MemoryTransport::default());
    let mut wizard = Wizard::with_debounce(42, transport.clone(), DEBOUNCE);

    wizard.dispatch(WizardAction::GoToStep(3)).await;
    wizard.dispatch(WizardAction::GoToPreview).await;
    assert_eq!(wizard.state.position, WizardPosition::Preview);
    wizard.dispatch(WizardAction::GoBackFromPreview).await;
    assert_eq!(wizard.state.position, WizardPosition::Step(3));

    // Three navigations, three flushes
    assert_eq!(transport.saved().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn draft_snapshot_carries_the_full_scheme() {
    let transport = Arc::new(MemoryTransport::default());
    let mut wizard = Wizard::with_debounce(42, transport.clone(), DEBOUNCE);

    wizard
        .dispatch(WizardAction::SetColors {
            primary: vec!["#AA3355".into()],
            secondary: vec!["#FFFFFF".into()],
            accent: vec![],
            color_ids: vec![7, 9],
        })
        .await;
    wizard
        .dispatch(WizardAction::SetFlowers {
            flower_ids: vec![11],
            category_ids: vec![2],
        })
        .await;
    tokio::time::sleep(DEBOUNCE * 2).await;

    let saves = transport.saved();
    assert_eq!(saves.len(), 1);
    let save = saves[0].to_design_save();
    assert_eq!(save.colors.primary, vec!["#AA3355".to_string()]);
    assert_eq!(save.colors.color_ids, vec![7, 9]);
    assert_eq!(save.flowers.unwrap().flower_ids, vec![11]);
}
