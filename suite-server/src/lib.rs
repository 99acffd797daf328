//! Samia Suite server - hotel group back-office node
//!
//! # Overview
//!
//! One node serves the back-office of the group's three operating sites
//! (Fnideq, M'diq, Al Hoceima) and its head office:
//!
//! - **Storage** (`storage`): durable redb store plus an in-process tab store
//! - **Auth** (`auth`): operator directory, single local session, permissions
//! - **Services** (`services`): stock, meals, vouchers, apartments, laundry,
//!   staff, cash and internal messages
//! - **Reports** (`reports`): dashboard, notifications, management report
//! - **HTTP API** (`api`): JSON routes and the storage change feed
//!
//! # Layout
//!
//! ```text
//! suite-server/src/
//! ├── core/          # config, state, server
//! ├── auth/          # directory, session, permissions, extractors
//! ├── storage/       # redb + memory key-value stores
//! ├── services/      # per-site operations
//! ├── reports/       # derived views
//! ├── api/           # routes and handlers
//! └── utils/         # logger, business dates
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod reports;
pub mod services;
pub mod storage;
pub mod utils;

pub use api::build_app;
pub use auth::CurrentUser;
pub use core::{Config, Server, ServerState};

// Re-export unified error types from shared
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

// Security logging macro, written to the `security` target
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
   _____                 _
  / ___/____ _____ ___  (_)___ _
  \__ \/ __ `/ __ `__ \/ / __ `/
 ___/ / /_/ / / / / / / / /_/ /
/____/\__,_/_/ /_/ /_/_/\__,_/
   _____       _ __
  / ___/__  __(_) /____
  \__ \/ / / / / __/ _ \
 ___/ / /_/ / / /_/  __/
/____/\__,_/_/\__/\___/
    "#
    );
}
