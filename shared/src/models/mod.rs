//! Data models
//!
//! Shared between suite-server and the dashboard (via API). Every record is
//! persisted as JSON; field names are snake_case, enum values keep the
//! French labels the operators see.

pub mod activity;
pub mod apartment;
pub mod cash;
pub mod laundry;
pub mod meal;
pub mod message;
pub mod notification;
pub mod report;
pub mod staff;
pub mod stock;
pub mod user;
pub mod voucher;

// Re-exports
pub use activity::*;
pub use apartment::*;
pub use cash::*;
pub use laundry::*;
pub use meal::*;
pub use message::*;
pub use notification::*;
pub use report::*;
pub use staff::*;
pub use stock::*;
pub use user::*;
pub use voucher::*;
