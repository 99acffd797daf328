//! HTTP API
//!
//! # Structure
//!
//! - [`health`] - liveness probe
//! - [`auth`] - login, logout, current session
//! - [`users`] - operator directory
//! - [`activity`] - connection journal
//! - [`messages`] - internal messaging
//! - [`events`] - storage change feed over WebSocket
//! - [`sites`] - per-site operations under `/api/sites/{site}`

pub mod activity;
pub mod auth;
pub mod events;
pub mod health;
pub mod messages;
pub mod sites;
pub mod users;

use std::time::Duration;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue, StatusCode};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        Some(RequestId::new(HeaderValue::from(shared::util::snowflake_id())))
    }
}

/// All routes, no middleware, no state
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Public
        .merge(health::router())
        .merge(auth::router())
        // Session required
        .merge(messages::router())
        .merge(events::router())
        .merge(sites::router())
        // Directory administration
        .merge(users::router())
        .merge(activity::router())
}

/// Fully configured application, used by the server and by tests
pub fn build_app(state: ServerState) -> Router {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);

    // Last layer added runs first: CORS and request ids also cover
    // session rejections
    build_router()
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            crate::auth::require_auth,
        ))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(TraceLayer::new_for_http())
        // Set wraps Propagate so the id exists before it is copied back
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
