//! Vouchers API
//!
//! | Path | Method | Permission |
//! |------|--------|------------|
//! | / | GET | site access |
//! | /daily?date= | GET | site access |
//! | /summary?date= | GET | site access |
//! | / | POST | vouchers:issue |
//! | /{id}/consume | POST | vouchers:consume |
//! | /{id}/cancel | POST | vouchers:cancel |
//!
//! `date` is `YYYY-MM-DD` and defaults to the current business day.

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::{permissions, require_permission};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/", get(handler::list))
        .route("/daily", get(handler::daily))
        .route("/summary", get(handler::daily_summary));

    let issue_routes = Router::new()
        .route("/", post(handler::issue))
        .layer(middleware::from_fn(require_permission(permissions::VOUCHERS_ISSUE)));

    let consume_routes = Router::new()
        .route("/{id}/consume", post(handler::consume))
        .layer(middleware::from_fn(require_permission(permissions::VOUCHERS_CONSUME)));

    let cancel_routes = Router::new()
        .route("/{id}/cancel", post(handler::cancel))
        .layer(middleware::from_fn(require_permission(permissions::VOUCHERS_CANCEL)));

    read_routes
        .merge(issue_routes)
        .merge(consume_routes)
        .merge(cancel_routes)
}
