//! Shared types for the Bloom vendor platform
//!
//! Common types used across the server and the onboarding wizard client:
//! domain models, request payloads, the unified error system and id/time
//! utilities.

pub mod error;
pub mod models;
pub mod request;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
