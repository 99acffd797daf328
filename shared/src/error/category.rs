//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 2xxx: Permission errors
/// - 3xxx: Site errors
/// - 4xxx: Stock errors
/// - 5xxx: Lodging errors
/// - 6xxx: Catering errors
/// - 7xxx: Staff errors
/// - 8xxx: Cash errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Site errors (3xxx)
    Site,
    /// Stock errors (4xxx)
    Stock,
    /// Lodging errors (5xxx)
    Lodging,
    /// Catering errors (6xxx)
    Catering,
    /// Staff errors (7xxx)
    Staff,
    /// Cash and messaging errors (8xxx)
    Cash,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            3000..4000 => Self::Site,
            4000..5000 => Self::Stock,
            5000..6000 => Self::Lodging,
            6000..7000 => Self::Catering,
            7000..8000 => Self::Staff,
            8000..9000 => Self::Cash,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Site => "site",
            Self::Stock => "stock",
            Self::Lodging => "lodging",
            Self::Catering => "catering",
            Self::Staff => "staff",
            Self::Cash => "cash",
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
