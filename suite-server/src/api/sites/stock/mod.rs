//! Stock API
//!
//! | Path | Method | Permission |
//! |------|--------|------------|
//! | /items | GET | site access |
//! | /items | POST | stock:catalog |
//! | /items/critical | GET | site access |
//! | /items/{id}/adjust | POST | stock:adjust |
//! | /commands | GET | site access |
//! | /commands | POST | stock:order |
//! | /commands/{id}/deliver | POST | stock:deliver |

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::{permissions, require_permission};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/items", get(handler::list_items))
        .route("/items/critical", get(handler::critical_items))
        .route("/commands", get(handler::list_commands));

    let catalog_routes = Router::new()
        .route("/items", post(handler::add_item))
        .layer(middleware::from_fn(require_permission(permissions::STOCK_CATALOG)));

    let adjust_routes = Router::new()
        .route("/items/{id}/adjust", post(handler::adjust))
        .layer(middleware::from_fn(require_permission(permissions::STOCK_ADJUST)));

    let order_routes = Router::new()
        .route("/commands", post(handler::create_command))
        .layer(middleware::from_fn(require_permission(permissions::STOCK_ORDER)));

    let deliver_routes = Router::new()
        .route("/commands/{id}/deliver", post(handler::mark_delivered))
        .layer(middleware::from_fn(require_permission(permissions::STOCK_DELIVER)));

    read_routes
        .merge(catalog_routes)
        .merge(adjust_routes)
        .merge(order_routes)
        .merge(deliver_routes)
}
