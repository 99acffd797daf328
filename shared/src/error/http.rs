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
            | Self::UserNotFound
            | Self::SiteNotFound
            | Self::StockItemNotFound
            | Self::StockCommandNotFound
            | Self::ApartmentNotFound
            | Self::ResidenceNotFound
            | Self::LaundryRequestNotFound
            | Self::DishNotFound
            | Self::VoucherNotFound
            | Self::StaffMemberNotFound
            | Self::AttendanceNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists
            | Self::StockCommandAlreadyDelivered
            | Self::ApartmentNotAvailable
            | Self::ApartmentNotOccupied
            | Self::ApartmentNotInCleaning
            | Self::LaundryAlreadyDelivered
            | Self::VoucherNotValid
            | Self::AttendanceNotAbsent => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::RoleMismatch
            | Self::SessionExpired => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            Self::PermissionDenied
            | Self::RoleRequired
            | Self::SiteAccessDenied
            | Self::CannotDeleteAdmin => StatusCode::FORBIDDEN,

            // 500 Internal Server Error
            Self::InternalError
            | Self::DatabaseError
            | Self::ConfigError
            | Self::StorageCorrupted => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_status() {
        assert_eq!(ErrorCode::Success.http_status(), StatusCode::OK);
    }

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::ApartmentNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ErrorCode::VoucherNotFound.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_auth_status() {
        assert_eq!(
            ErrorCode::InvalidCredentials.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ErrorCode::RoleMismatch.http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ErrorCode::SiteAccessDenied.http_status(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_state_conflicts() {
        assert_eq!(
            ErrorCode::ApartmentNotAvailable.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(ErrorCode::VoucherNotValid.http_status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_bad_request_default() {
        assert_eq!(
            ErrorCode::ValidationFailed.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::StockInvalidPrice.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::UnknownBeverage.http_status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_system_errors() {
        assert_eq!(
            ErrorCode::DatabaseError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::StorageCorrupted.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
