//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Vendor errors
/// - 2xxx: Client errors
/// - 3xxx: Event errors
/// - 4xxx: Design errors
/// - 5xxx: Arrangement errors
/// - 6xxx: Inspiration / file errors
/// - 7xxx: Template errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Vendor errors (1xxx)
    Vendor,
    /// Client errors (2xxx)
    Client,
    /// Event errors (3xxx)
    Event,
    /// Design errors (4xxx)
    Design,
    /// Arrangement errors (5xxx)
    Arrangement,
    /// Inspiration / file errors (6xxx)
    Inspiration,
    /// Template errors (7xxx)
    Template,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Vendor,
            2000..3000 => Self::Client,
            3000..4000 => Self::Event,
            4000..5000 => Self::Design,
            5000..6000 => Self::Arrangement,
            6000..7000 => Self::Inspiration,
            7000..8000 => Self::Template,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Vendor => "vendor",
            Self::Client => "client",
            Self::Event => "event",
            Self::Design => "design",
            Self::Arrangement => "arrangement",
            Self::Inspiration => "inspiration",
            Self::Template => "template",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Vendor);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Client);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Event);
        assert_eq!(ErrorCategory::from_code(4002), ErrorCategory::Design);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Arrangement);
        assert_eq!(ErrorCategory::from_code(6501), ErrorCategory::Inspiration);
        assert_eq!(ErrorCategory::from_code(7001), ErrorCategory::Template);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::VendorNotFound.category(), ErrorCategory::Vendor);
        assert_eq!(ErrorCode::EventNotFound.category(), ErrorCategory::Event);
        assert_eq!(
            ErrorCode::InspirationLimitExceeded.category(),
            ErrorCategory::Inspiration
        );
        assert_eq!(ErrorCode::DatabaseError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_name() {
        assert_eq!(ErrorCategory::General.name(), "general");
        assert_eq!(ErrorCategory::Vendor.name(), "vendor");
        assert_eq!(ErrorCategory::System.name(), "system");
    }
}
