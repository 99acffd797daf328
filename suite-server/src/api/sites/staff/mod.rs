//! Staff API
//!
//! | Path | Method | Permission |
//! |------|--------|------------|
//! | / | GET | site access |
//! | /{id}/attendance | POST | staff:attendance |
//! | / | POST | staff:manage |
//! | /{id} | PUT | staff:manage |
//! | /{id} | DELETE | staff:manage |
//! | /{id}/justify | POST | staff:manage |
//! | /payroll | GET | staff:manage |

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::auth::{permissions, require_permission};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    let read_routes = Router::new().route("/", get(handler::list));

    let attendance_routes = Router::new()
        .route("/{id}/attendance", post(handler::mark_attendance))
        .layer(middleware::from_fn(require_permission(permissions::STAFF_ATTENDANCE)));

    let manage_routes = Router::new()
        .route("/", post(handler::add))
        .route("/payroll", get(handler::payroll))
        .route("/{id}", put(handler::update).delete(handler::delete))
        .route("/{id}/justify", post(handler::justify))
        .layer(middleware::from_fn(require_permission(permissions::STAFF_MANAGE)));

    read_routes.merge(attendance_routes).merge(manage_routes)
}
