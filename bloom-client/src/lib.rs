//! Bloom onboarding wizard client
//!
//! Client-side state for the themeable onboarding wizard: a serializable
//! draft of the couple's answers, a reducer-driven step state machine, and
//! a debounced auto-save engine that flushes the draft to the platform's
//! auto-save endpoint.
//!
//! # Example
//!
//! ```no_run
//! use bloom_client::{HttpSaveTransport, Wizard, WizardAction};
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), bloom_client::ClientError> {
//! let transport = HttpSaveTransport::new("http://localhost:3000", 42)?;
//! let mut wizard = Wizard::new(42, Arc::new(transport));
//!
//! wizard
//!     .dispatch(WizardAction::SetColors {
//!         primary: vec!["#AA3355".into()],
//!         secondary: vec![],
//!         accent: vec![],
//!         color_ids: vec![],
//!     })
//!     .await;
//! wizard.dispatch(WizardAction::Next).await; // step boundary forces a flush
//! # Ok(())
//! # }
//! ```

mod autosave;
mod draft;
mod error;
mod transport;
mod wizard;

pub use autosave::{AutoSaver, SaveState};
pub use draft::OnboardingDraft;
pub use error::ClientError;
pub use transport::{HttpSaveTransport, SaveReceipt, SaveTransport};
pub use wizard::{STEP_COUNT, Wizard, WizardAction, WizardMode, WizardPosition, WizardState};
