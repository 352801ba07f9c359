//! Repository Module
//!
//! CRUD operations over the SQLite pool. Repositories are modules of async
//! functions taking `&SqlitePool`; handlers convert [`RepoError`] into the
//! shared [`AppError`](crate::utils::AppError) via `?`.

// Tenancy
pub mod client;
pub mod vendor;
pub mod vendor_client;

// Intake
pub mod chat;
pub mod event;
pub mod event_type;

// Event design
pub mod design_template;
pub mod event_arrangement;
pub mod event_design;
pub mod inspiration;

// Catalog
pub mod catalog;

use crate::utils::AppError;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => {
                AppError::with_message(shared::error::ErrorCode::NotFound, msg)
            }
            RepoError::Duplicate(msg) => AppError::conflict(msg),
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Parse a JSON id-array column (`'[1,2,3]'`)
pub(crate) fn parse_id_array(raw: &str) -> RepoResult<Vec<i64>> {
    serde_json::from_str(raw)
        .map_err(|e| RepoError::Database(format!("Corrupt id array column: {e}")))
}

/// Parse a JSON string-array column (`'["#AABBCC"]'`)
pub(crate) fn parse_string_array(raw: &str) -> RepoResult<Vec<String>> {
    serde_json::from_str(raw)
        .map_err(|e| RepoError::Database(format!("Corrupt string array column: {e}")))
}

/// Serialize an array into its JSON column representation
pub(crate) fn to_json_column<T: serde::Serialize>(values: &T) -> RepoResult<String> {
    serde_json::to_string(values)
        .map_err(|e| RepoError::Database(format!("Failed to encode array column: {e}")))
}
