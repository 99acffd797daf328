//! Operator directory API (Boss only)

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get, put},
};

use crate::auth::{permissions, require_permission};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/users", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{identifier}", delete(handler::delete))
        .route("/{identifier}/password", put(handler::update_password))
        .layer(middleware::from_fn(require_permission(permissions::USERS_MANAGE)))
}
