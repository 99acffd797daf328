//! Apartments API
//!
//! | Path | Method | Permission |
//! |------|--------|------------|
//! | / | GET | site access |
//! | /residences | GET | site access |
//! | / | POST | apartments:manage |
//! | /{id}/maintenance | PUT | apartments:manage |
//! | /{id}/check-in | POST | apartments:reception |
//! | /{id}/check-out | POST | apartments:reception |
//! | /{id}/ready | POST | apartments:reception |

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::auth::{permissions, require_permission};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/", get(handler::list))
        .route("/residences", get(handler::residences));

    let manage_routes = Router::new()
        .route("/", post(handler::add))
        .route("/{id}/maintenance", put(handler::set_maintenance))
        .layer(middleware::from_fn(require_permission(permissions::APARTMENTS_MANAGE)));

    let reception_routes = Router::new()
        .route("/{id}/check-in", post(handler::check_in))
        .route("/{id}/check-out", post(handler::check_out))
        .route("/{id}/ready", post(handler::mark_ready))
        .layer(middleware::from_fn(require_permission(
            permissions::APARTMENTS_RECEPTION,
        )));

    read_routes.merge(manage_routes).merge(reception_routes)
}
