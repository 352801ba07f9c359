//! Unified error codes for the Bloom platform
//!
//! This module defines all error codes used across the server and the
//! wizard client. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Vendor errors
//! - 2xxx: Client errors
//! - 3xxx: Event errors
//! - 4xxx: Design errors
//! - 5xxx: Arrangement errors
//! - 6xxx: Inspiration / file errors
//! - 7xxx: Template errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Vendor ====================
    /// Vendor not found
    VendorNotFound = 1001,
    /// Vendor slug already exists
    VendorSlugExists = 1002,
    /// Vendor is inactive
    VendorInactive = 1003,

    // ==================== 2xxx: Client ====================
    /// Client not found
    ClientNotFound = 2001,
    /// Client email already exists
    ClientEmailExists = 2002,

    // ==================== 3xxx: Event ====================
    /// Event not found
    EventNotFound = 3001,
    /// Event type not found
    EventTypeNotFound = 3002,
    /// Chat not found
    ChatNotFound = 3003,

    // ==================== 4xxx: Design ====================
    /// Design not found for event
    DesignNotFound = 4001,
    /// Referenced color does not belong to the event's vendor
    InvalidColorReference = 4002,
    /// Referenced flower does not belong to the event's vendor
    InvalidFlowerReference = 4003,
    /// Referenced flower category does not belong to the event's vendor
    InvalidFlowerCategoryReference = 4004,
    /// Color value is not a #RRGGBB hex string
    InvalidColorFormat = 4005,

    // ==================== 5xxx: Arrangement ====================
    /// Arrangement not found
    ArrangementNotFound = 5001,
    /// Arrangement type not found
    ArrangementTypeNotFound = 5002,
    /// Referenced arrangement does not belong to the event's vendor
    InvalidArrangementReference = 5003,
    /// Section is not one of Personal/Ceremony/Reception/Suggestion
    InvalidSection = 5004,

    // ==================== 6xxx: Inspiration ====================
    /// Inspiration not found
    InspirationNotFound = 6001,
    /// Inspiration cap (20 per event) would be exceeded
    InspirationLimitExceeded = 6002,
    /// Inspiration URL is malformed
    InvalidInspirationUrl = 6003,

    // ==================== 65xx: File Upload ====================
    /// File too large
    FileTooLarge = 6501,
    /// Unsupported file format
    UnsupportedFileFormat = 6502,
    /// Invalid/corrupted image file
    InvalidImageFile = 6503,
    /// No file provided in request
    NoFileProvided = 6504,
    /// Empty file provided
    EmptyFile = 6505,
    /// No filename provided
    NoFilename = 6506,
    /// Invalid file extension
    InvalidFileExtension = 6507,
    /// Image processing failed
    ImageProcessingFailed = 6508,
    /// File storage failed
    FileStorageFailed = 6509,

    // ==================== 7xxx: Template ====================
    /// Design template not found
    TemplateNotFound = 7001,
    /// Template slot references an invalid arrangement
    TemplateSlotInvalid = 7002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Network error
    NetworkError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
    /// Email delivery failed
    MailSendFailed = 9101,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Vendor
            ErrorCode::VendorNotFound => "Vendor not found",
            ErrorCode::VendorSlugExists => "Vendor slug already exists",
            ErrorCode::VendorInactive => "Vendor is inactive",

            // Client
            ErrorCode::ClientNotFound => "Client not found",
            ErrorCode::ClientEmailExists => "Client email already exists",

            // Event
            ErrorCode::EventNotFound => "Event not found",
            ErrorCode::EventTypeNotFound => "Event type not found",
            ErrorCode::ChatNotFound => "Chat not found",

            // Design
            ErrorCode::DesignNotFound => "Design not found",
            ErrorCode::InvalidColorReference => "Invalid colors",
            ErrorCode::InvalidFlowerReference => "Invalid flowers",
            ErrorCode::InvalidFlowerCategoryReference => "Invalid flower categories",
            ErrorCode::InvalidColorFormat => "Color must be a #RRGGBB hex value",

            // Arrangement
            ErrorCode::ArrangementNotFound => "Arrangement not found",
            ErrorCode::ArrangementTypeNotFound => "Arrangement type not found",
            ErrorCode::InvalidArrangementReference => "Invalid arrangements",
            ErrorCode::InvalidSection => "Invalid section",

            // Inspiration
            ErrorCode::InspirationNotFound => "Inspiration not found",
            ErrorCode::InspirationLimitExceeded => "Inspiration limit exceeded",
            ErrorCode::InvalidInspirationUrl => "Invalid inspiration URL",

            // File Upload
            ErrorCode::FileTooLarge => "File too large",
            ErrorCode::UnsupportedFileFormat => "Unsupported file format",
            ErrorCode::InvalidImageFile => "Invalid image file",
            ErrorCode::NoFileProvided => "No file provided",
            ErrorCode::EmptyFile => "Empty file provided",
            ErrorCode::NoFilename => "No filename provided",
            ErrorCode::InvalidFileExtension => "Invalid file extension",
            ErrorCode::ImageProcessingFailed => "Image processing failed",
            ErrorCode::FileStorageFailed => "File storage failed",

            // Template
            ErrorCode::TemplateNotFound => "Design template not found",
            ErrorCode::TemplateSlotInvalid => "Template slot references an invalid arrangement",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::MailSendFailed => "Email delivery failed",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Vendor
            1001 => Ok(ErrorCode::VendorNotFound),
            1002 => Ok(ErrorCode::VendorSlugExists),
            1003 => Ok(ErrorCode::VendorInactive),

            // Client
            2001 => Ok(ErrorCode::ClientNotFound),
            2002 => Ok(ErrorCode::ClientEmailExists),

            // Event
            3001 => Ok(ErrorCode::EventNotFound),
            3002 => Ok(ErrorCode::EventTypeNotFound),
            3003 => Ok(ErrorCode::ChatNotFound),

            // Design
            4001 => Ok(ErrorCode::DesignNotFound),
            4002 => Ok(ErrorCode::InvalidColorReference),
            4003 => Ok(ErrorCode::InvalidFlowerReference),
            4004 => Ok(ErrorCode::InvalidFlowerCategoryReference),
            4005 => Ok(ErrorCode::InvalidColorFormat),

            // Arrangement
            5001 => Ok(ErrorCode::ArrangementNotFound),
            5002 => Ok(ErrorCode::ArrangementTypeNotFound),
            5003 => Ok(ErrorCode::InvalidArrangementReference),
            5004 => Ok(ErrorCode::InvalidSection),

            // Inspiration
            6001 => Ok(ErrorCode::InspirationNotFound),
            6002 => Ok(ErrorCode::InspirationLimitExceeded),
            6003 => Ok(ErrorCode::InvalidInspirationUrl),

            // File Upload
            6501 => Ok(ErrorCode::FileTooLarge),
            6502 => Ok(ErrorCode::UnsupportedFileFormat),
            6503 => Ok(ErrorCode::InvalidImageFile),
            6504 => Ok(ErrorCode::NoFileProvided),
            6505 => Ok(ErrorCode::EmptyFile),
            6506 => Ok(ErrorCode::NoFilename),
            6507 => Ok(ErrorCode::InvalidFileExtension),
            6508 => Ok(ErrorCode::ImageProcessingFailed),
            6509 => Ok(ErrorCode::FileStorageFailed),

            // Template
            7001 => Ok(ErrorCode::TemplateNotFound),
            7002 => Ok(ErrorCode::TemplateSlotInvalid),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),
            9101 => Ok(ErrorCode::MailSendFailed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        // General
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);

        // Domain
        assert_eq!(ErrorCode::VendorNotFound.code(), 1001);
        assert_eq!(ErrorCode::ClientNotFound.code(), 2001);
        assert_eq!(ErrorCode::EventNotFound.code(), 3001);
        assert_eq!(ErrorCode::DesignNotFound.code(), 4001);
        assert_eq!(ErrorCode::InvalidColorReference.code(), 4002);
        assert_eq!(ErrorCode::ArrangementNotFound.code(), 5001);
        assert_eq!(ErrorCode::InspirationLimitExceeded.code(), 6002);
        assert_eq!(ErrorCode::FileTooLarge.code(), 6501);
        assert_eq!(ErrorCode::TemplateNotFound.code(), 7001);

        // System
        assert_eq!(ErrorCode::InternalError.code(), 9001);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
        assert_eq!(ErrorCode::MailSendFailed.code(), 9101);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::Unknown.is_success());
        assert!(!ErrorCode::EventNotFound.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(1001), Ok(ErrorCode::VendorNotFound));
        assert_eq!(ErrorCode::try_from(3001), Ok(ErrorCode::EventNotFound));
        assert_eq!(
            ErrorCode::try_from(6002),
            Ok(ErrorCode::InspirationLimitExceeded)
        );
        assert_eq!(ErrorCode::try_from(9001), Ok(ErrorCode::InternalError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
        assert_eq!(ErrorCode::try_from(4321), Err(InvalidErrorCode(4321)));
    }

    #[test]
    fn test_serialize() {
        let code = ErrorCode::NotFound;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "3");

        let code = ErrorCode::EventNotFound;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "3001");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("0").unwrap();
        assert_eq!(code, ErrorCode::Success);

        let code: ErrorCode = serde_json::from_str("6002").unwrap();
        assert_eq!(code, ErrorCode::InspirationLimitExceeded);

        let result: Result<ErrorCode, _> = serde_json::from_str("999");
        assert!(result.is_err());
    }

    #[test]
    fn test_roundtrip() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::VendorNotFound,
            ErrorCode::EventNotFound,
            ErrorCode::InvalidColorReference,
            ErrorCode::InternalError,
        ];

        for code in codes {
            let json = serde_json::to_string(&code).unwrap();
            let parsed: ErrorCode = serde_json::from_str(&json).unwrap();
            assert_eq!(code, parsed);
        }
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::EventNotFound.message(), "Event not found");
        assert_eq!(ErrorCode::InvalidColorReference.message(), "Invalid colors");
        assert_eq!(ErrorCode::InternalError.message(), "Internal server error");
    }
}
