//! Internal messaging API
//!
//! Every operator may message any role on any site.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/messages", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::send))
        .route("/unread", get(handler::unread))
        .route("/read", post(handler::mark_read))
}
