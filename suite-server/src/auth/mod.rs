//! Authentication and authorization
//!
//! - [`UserDirectory`] - seeded operator directory
//! - [`SessionManager`] - login, logout, current operator
//! - [`ActivityLog`] - connection journal
//! - [`permissions`] - role permission table
//! - [`require_auth`] / [`require_permission`] - middleware
//! - [`CurrentUser`] / [`SiteScope`] - extractors

pub mod activity;
pub mod directory;
pub mod extractor;
pub mod middleware;
pub mod permissions;
pub mod session;
pub mod site;

pub use activity::ActivityLog;
pub use directory::UserDirectory;
pub use extractor::{CurrentUser, SiteScope};
pub use middleware::{require_auth, require_permission};
pub use session::SessionManager;
pub use site::{can_access, ensure_site_access};
