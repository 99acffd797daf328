//! Unified error codes for the back-office
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Site errors
//! - 4xxx: Stock errors
//! - 5xxx: Lodging errors
//! - 6xxx: Catering errors
//! - 7xxx: Staff errors
//! - 8xxx: Cash and messaging errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility with the dashboard.
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

    // ==================== 1xxx: Auth ====================
    /// No operator session
    NotAuthenticated = 1001,
    /// Unknown identifier or wrong password
    InvalidCredentials = 1002,
    /// Selected role does not match the stored profile
    RoleMismatch = 1003,
    /// Stored session could not be read
    SessionExpired = 1004,
    /// Directory entry not found
    UserNotFound = 1101,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Specific role required
    RoleRequired = 2002,
    /// Operator cannot act on this site
    SiteAccessDenied = 2003,
    /// The Boss account cannot be removed
    CannotDeleteAdmin = 2004,

    // ==================== 3xxx: Site ====================
    /// Unknown site
    SiteNotFound = 3001,
    /// Site holds no operational records (head office)
    SiteNotOperational = 3002,

    // ==================== 4xxx: Stock ====================
    /// Stock item not found
    StockItemNotFound = 4001,
    /// Chef command not found
    StockCommandNotFound = 4002,
    /// Chef command already delivered
    StockCommandAlreadyDelivered = 4003,
    /// Unit price must be positive
    StockInvalidPrice = 4004,
    /// Quantity must be positive
    StockInvalidQuantity = 4005,

    // ==================== 5xxx: Lodging ====================
    /// Apartment not found
    ApartmentNotFound = 5001,
    /// Apartment is not free
    ApartmentNotAvailable = 5002,
    /// Apartment has no current client
    ApartmentNotOccupied = 5003,
    /// Accommodation exceeds apartment capacity
    ApartmentCapacityExceeded = 5004,
    /// Apartment is not waiting for cleaning
    ApartmentNotInCleaning = 5005,
    /// Residence does not belong to the site
    ResidenceNotFound = 5006,
    /// Laundry request not found
    LaundryRequestNotFound = 5101,
    /// Laundry request already delivered
    LaundryAlreadyDelivered = 5102,

    // ==================== 6xxx: Catering ====================
    /// Dish not found
    DishNotFound = 6001,
    /// Dish category does not match the planned meal
    DishCategoryMismatch = 6002,
    /// Voucher not found
    VoucherNotFound = 6101,
    /// Voucher is no longer valid
    VoucherNotValid = 6102,
    /// Meal voucher without meal type
    MealTypeRequired = 6103,
    /// Beverage is not on the list
    UnknownBeverage = 6104,

    // ==================== 7xxx: Staff ====================
    /// Staff member not found
    StaffMemberNotFound = 7001,
    /// No attendance record for that date
    AttendanceNotFound = 7002,
    /// Only an absence can be justified
    AttendanceNotAbsent = 7003,

    // ==================== 8xxx: Cash / Messaging ====================
    /// Amount must be positive
    CashInvalidAmount = 8001,
    /// Empty internal message
    MessageEmpty = 8101,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Storage error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9005,
    /// Stored data could not be decoded
    StorageCorrupted = 9403,
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

            // Auth
            ErrorCode::NotAuthenticated => "No operator is logged in",
            ErrorCode::InvalidCredentials => "Invalid identifier or password",
            ErrorCode::RoleMismatch => "Selected role does not match this profile",
            ErrorCode::SessionExpired => "Session is no longer readable",
            ErrorCode::UserNotFound => "User not found",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::RoleRequired => "Specific role is required",
            ErrorCode::SiteAccessDenied => "Operator cannot act on this site",
            ErrorCode::CannotDeleteAdmin => "The Boss account cannot be deleted",

            // Site
            ErrorCode::SiteNotFound => "Site not found",
            ErrorCode::SiteNotOperational => "Site holds no operational records",

            // Stock
            ErrorCode::StockItemNotFound => "Stock item not found",
            ErrorCode::StockCommandNotFound => "Stock command not found",
            ErrorCode::StockCommandAlreadyDelivered => "Stock command already delivered",
            ErrorCode::StockInvalidPrice => "Unit price must be positive",
            ErrorCode::StockInvalidQuantity => "Quantity must be positive",

            // Lodging
            ErrorCode::ApartmentNotFound => "Apartment not found",
            ErrorCode::ApartmentNotAvailable => "Apartment is not available",
            ErrorCode::ApartmentNotOccupied => "Apartment is not occupied",
            ErrorCode::ApartmentCapacityExceeded => "Accommodation exceeds apartment capacity",
            ErrorCode::ApartmentNotInCleaning => "Apartment is not waiting for cleaning",
            ErrorCode::ResidenceNotFound => "Residence not found for this site",
            ErrorCode::LaundryRequestNotFound => "Laundry request not found",
            ErrorCode::LaundryAlreadyDelivered => "Laundry request already delivered",

            // Catering
            ErrorCode::DishNotFound => "Dish not found",
            ErrorCode::DishCategoryMismatch => "Dish does not belong to this meal",
            ErrorCode::VoucherNotFound => "Voucher not found",
            ErrorCode::VoucherNotValid => "Voucher is no longer valid",
            ErrorCode::MealTypeRequired => "Meal voucher requires a meal type",
            ErrorCode::UnknownBeverage => "Unknown beverage",

            // Staff
            ErrorCode::StaffMemberNotFound => "Staff member not found",
            ErrorCode::AttendanceNotFound => "No attendance record for this date",
            ErrorCode::AttendanceNotAbsent => "Only an absence can be justified",

            // Cash / Messaging
            ErrorCode::CashInvalidAmount => "Amount must be positive",
            ErrorCode::MessageEmpty => "Message content is empty",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Storage error",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::StorageCorrupted => "Stored data is corrupted",
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

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::RoleMismatch),
            1004 => Ok(ErrorCode::SessionExpired),
            1101 => Ok(ErrorCode::UserNotFound),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::RoleRequired),
            2003 => Ok(ErrorCode::SiteAccessDenied),
            2004 => Ok(ErrorCode::CannotDeleteAdmin),

            // Site
            3001 => Ok(ErrorCode::SiteNotFound),
            3002 => Ok(ErrorCode::SiteNotOperational),

            // Stock
            4001 => Ok(ErrorCode::StockItemNotFound),
            4002 => Ok(ErrorCode::StockCommandNotFound),
            4003 => Ok(ErrorCode::StockCommandAlreadyDelivered),
            4004 => Ok(ErrorCode::StockInvalidPrice),
            4005 => Ok(ErrorCode::StockInvalidQuantity),

            // Lodging
            5001 => Ok(ErrorCode::ApartmentNotFound),
            5002 => Ok(ErrorCode::ApartmentNotAvailable),
            5003 => Ok(ErrorCode::ApartmentNotOccupied),
            5004 => Ok(ErrorCode::ApartmentCapacityExceeded),
            5005 => Ok(ErrorCode::ApartmentNotInCleaning),
            5006 => Ok(ErrorCode::ResidenceNotFound),
            5101 => Ok(ErrorCode::LaundryRequestNotFound),
            5102 => Ok(ErrorCode::LaundryAlreadyDelivered),

            // Catering
            6001 => Ok(ErrorCode::DishNotFound),
            6002 => Ok(ErrorCode::DishCategoryMismatch),
            6101 => Ok(ErrorCode::VoucherNotFound),
            6102 => Ok(ErrorCode::VoucherNotValid),
            6103 => Ok(ErrorCode::MealTypeRequired),
            6104 => Ok(ErrorCode::UnknownBeverage),

            // Staff
            7001 => Ok(ErrorCode::StaffMemberNotFound),
            7002 => Ok(ErrorCode::AttendanceNotFound),
            7003 => Ok(ErrorCode::AttendanceNotAbsent),

            // Cash / Messaging
            8001 => Ok(ErrorCode::CashInvalidAmount),
            8101 => Ok(ErrorCode::MessageEmpty),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9005 => Ok(ErrorCode::ConfigError),
            9403 => Ok(ErrorCode::StorageCorrupted),

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
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::InvalidCredentials.code(), 1002);
        assert_eq!(ErrorCode::RoleMismatch.code(), 1003);
        assert_eq!(ErrorCode::SiteAccessDenied.code(), 2003);
        assert_eq!(ErrorCode::StockItemNotFound.code(), 4001);
        assert_eq!(ErrorCode::ApartmentNotAvailable.code(), 5002);
        assert_eq!(ErrorCode::VoucherNotValid.code(), 6102);
        assert_eq!(ErrorCode::StaffMemberNotFound.code(), 7001);
        assert_eq!(ErrorCode::CashInvalidAmount.code(), 8001);
        assert_eq!(ErrorCode::StorageCorrupted.code(), 9403);
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(9999), Err(InvalidErrorCode(9999)));
        assert_eq!(ErrorCode::try_from(4999), Err(InvalidErrorCode(4999)));
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::RoleMismatch).unwrap();
        assert_eq!(json, "1003");
        let code: ErrorCode = serde_json::from_str("5003").unwrap();
        assert_eq!(code, ErrorCode::ApartmentNotOccupied);
        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }

    #[test]
    fn test_roundtrip_every_code() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::RequiredField,
            ErrorCode::SessionExpired,
            ErrorCode::UserNotFound,
            ErrorCode::CannotDeleteAdmin,
            ErrorCode::SiteNotOperational,
            ErrorCode::StockCommandAlreadyDelivered,
            ErrorCode::LaundryAlreadyDelivered,
            ErrorCode::UnknownBeverage,
            ErrorCode::AttendanceNotAbsent,
            ErrorCode::MessageEmpty,
            ErrorCode::ConfigError,
        ];
        for code in codes {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::DishNotFound.to_string(), "6001");
        assert_eq!(InvalidErrorCode(42).to_string(), "invalid error code: 42");
    }
}
