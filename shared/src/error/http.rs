//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::VendorNotFound
            | Self::ClientNotFound
            | Self::EventNotFound
            | Self::EventTypeNotFound
            | Self::ChatNotFound
            | Self::DesignNotFound
            | Self::ArrangementNotFound
            | Self::ArrangementTypeNotFound
            | Self::InspirationNotFound
            | Self::TemplateNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists | Self::VendorSlugExists | Self::ClientEmailExists => {
                StatusCode::CONFLICT
            }

            // 503 Service Unavailable (transient errors, client can retry)
            Self::NetworkError | Self::TimeoutError => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            Self::InternalError
            | Self::DatabaseError
            | Self::ConfigError
            | Self::FileStorageFailed
            | Self::MailSendFailed => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
