//! Meals API
//!
//! | Path | Method | Permission |
//! |------|--------|------------|
//! | /dishes | GET | site access |
//! | /dishes | POST | meals:manage |
//! | /planning | GET | site access |
//! | /planning | PUT | meals:manage |
//! | /menu?day=Lundi | GET | site access (defaults to today) |

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::auth::{permissions, require_permission};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/dishes", get(handler::list_dishes))
        .route("/planning", get(handler::planning))
        .route("/menu", get(handler::menu));

    let manage_routes = Router::new()
        .route("/dishes", post(handler::add_dish))
        .route("/planning", put(handler::set_plan))
        .layer(middleware::from_fn(require_permission(permissions::MEALS_MANAGE)));

    read_routes.merge(manage_routes)
}
