//! Connection journal API

use axum::{
    Json, Router,
    extract::{Query, State},
    middleware,
    routing::get,
};
use serde::Deserialize;
use shared::models::ActivityLog;

use crate::auth::activity::MAX_ACTIVITY_ENTRIES;
use crate::auth::{permissions, require_permission};
use crate::core::ServerState;

const DEFAULT_LIMIT: usize = 50;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/activity",
        get(list).layer(middleware::from_fn(require_permission(permissions::USERS_MANAGE))),
    )
}

#[derive(Debug, Deserialize)]
pub struct ActivityQuery {
    pub limit: Option<usize>,
}

/// GET /api/activity?limit=N - newest first
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ActivityQuery>,
) -> Json<Vec<ActivityLog>> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_LIMIT)
        .min(MAX_ACTIVITY_ENTRIES);
    Json(state.activity.recent(limit))
}
