//! Debounced auto-save engine
//!
//! An explicit state machine {Idle, Pending, InFlight} with one pending
//! timer handle per draft. Each mutation cancels and reschedules the timer;
//! the immediate-flush path bypasses the debounce at step boundaries and
//! cancels any pending timer, so one client never has duplicate in-flight
//! writes. Failed saves are logged and retried only on the next natural
//! debounce tick. No backoff, no offline queue.

use crate::draft::OnboardingDraft;
use crate::error::ClientError;
use crate::transport::SaveTransport;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Default debounce window between a mutation and its flush
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(2500);

/// Auto-saver state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveState {
    Idle,
    /// A debounce timer is armed
    Pending,
    /// A save request is on the wire
    InFlight,
}

struct Inner {
    state: SaveState,
    pending: Option<JoinHandle<()>>,
    last_confirmed_at: Option<i64>,
    last_revision: Option<i64>,
    last_error: Option<String>,
}

/// Debounced draft persistence over a [`SaveTransport`]
#[derive(Clone)]
pub struct AutoSaver {
    transport: Arc<dyn SaveTransport>,
    debounce: Duration,
    inner: Arc<Mutex<Inner>>,
}

impl AutoSaver {
    pub fn new(transport: Arc<dyn SaveTransport>) -> Self {
        Self::with_debounce(transport, DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(transport: Arc<dyn SaveTransport>, debounce: Duration) -> Self {
        Self {
            transport,
            debounce,
            inner: Arc::new(Mutex::new(Inner {
                state: SaveState::Idle,
                pending: None,
                last_confirmed_at: None,
                last_revision: None,
                last_error: None,
            })),
        }
    }

    pub fn state(&self) -> SaveState {
        self.inner.lock().expect("autosave lock").state
    }

    /// Server-confirmed save timestamp, if any save has succeeded
    pub fn last_confirmed_at(&self) -> Option<i64> {
        self.inner.lock().expect("autosave lock").last_confirmed_at
    }

    pub fn last_revision(&self) -> Option<i64> {
        self.inner.lock().expect("autosave lock").last_revision
    }

    pub fn last_error(&self) -> Option<String> {
        self.inner.lock().expect("autosave lock").last_error.clone()
    }

    /// Cancel-and-reschedule: arm the single debounce timer with a fresh
    /// snapshot of the draft. Rapid mutations coalesce into one save.
    pub fn schedule(&self, draft: OnboardingDraft) {
        let mut inner = self.inner.lock().expect("autosave lock");
        if let Some(handle) = inner.pending.take() {
            handle.abort();
        }
        // An in-flight request keeps running; the new timer simply queues
        // the next write behind it.
        if inner.state != SaveState::InFlight {
            inner.state = SaveState::Pending;
        }

        let saver = self.clone();
        let debounce = self.debounce;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            saver.run_save(&draft).await;
        });
        inner.pending = Some(handle);
    }

    /// Immediate flush for step-navigation boundaries. Cancels any pending
    /// timer so the debounced write does not duplicate this one.
    pub async fn flush_now(&self, draft: &OnboardingDraft) -> Result<i64, ClientError> {
        {
            let mut inner = self.inner.lock().expect("autosave lock");
            if let Some(handle) = inner.pending.take() {
                handle.abort();
            }
            inner.state = SaveState::InFlight;
        }

        match self.transport.save(draft).await {
            Ok(receipt) => {
                let mut inner = self.inner.lock().expect("autosave lock");
                inner.state = SaveState::Idle;
                inner.last_confirmed_at = Some(receipt.saved_at);
                inner.last_revision = receipt.revision;
                inner.last_error = None;
                Ok(receipt.saved_at)
            }
            Err(e) => {
                let mut inner = self.inner.lock().expect("autosave lock");
                inner.state = SaveState::Idle;
                inner.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Debounce-tick save path
    async fn run_save(&self, draft: &OnboardingDraft) {
        {
            let mut inner = self.inner.lock().expect("autosave lock");
            inner.state = SaveState::InFlight;
            inner.pending = None;
        }

        match self.transport.save(draft).await {
            Ok(receipt) => {
                let mut inner = self.inner.lock().expect("autosave lock");
                inner.last_confirmed_at = Some(receipt.saved_at);
                inner.last_revision = receipt.revision;
                inner.last_error = None;
                // A mutation may have re-armed the timer while this save
                // was on the wire
                if inner.pending.is_none() {
                    inner.state = SaveState::Idle;
                } else {
                    inner.state = SaveState::Pending;
                }
            }
            Err(e) => {
                tracing::warn!(
                    event_id = draft.event_id,
                    error = %e,
                    "Auto-save failed; draft not yet saved"
                );
                let mut inner = self.inner.lock().expect("autosave lock");
                inner.last_error = Some(e.to_string());
                if inner.pending.is_none() {
                    inner.state = SaveState::Idle;
                } else {
                    inner.state = SaveState::Pending;
                }
            }
        }
    }
}
