//! Shared types for the Samia Suite back-office
//!
//! Domain models persisted per site, the unified error system and the
//! small id/time helpers used by the server and its clients.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{HotelSite, User, UserRole};
