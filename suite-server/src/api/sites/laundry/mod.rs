//! Laundry API
//!
//! | Path | Method | Permission |
//! |------|--------|------------|
//! | / | GET | site access |
//! | / | POST | laundry:manage |
//! | /{id}/advance | POST | laundry:manage |

use axum::{
    Json, Router,
    extract::{Path, State},
    middleware,
    routing::{get, post},
};
use shared::error::AppResult;
use shared::models::{LaundryCreate, LaundryRequest};

use crate::auth::{SiteScope, permissions, require_permission};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    let read_routes = Router::new().route("/", get(list));

    let manage_routes = Router::new()
        .route("/", post(create))
        .route("/{id}/advance", post(advance))
        .layer(middleware::from_fn(require_permission(permissions::LAUNDRY_MANAGE)));

    read_routes.merge(manage_routes)
}

/// GET /api/sites/{site}/laundry - newest first
pub async fn list(
    State(state): State<ServerState>,
    scope: SiteScope,
) -> AppResult<Json<Vec<LaundryRequest>>> {
    Ok(Json(state.laundry.list(scope.site)?))
}

/// POST /api/sites/{site}/laundry
pub async fn create(
    State(state): State<ServerState>,
    scope: SiteScope,
    Json(payload): Json<LaundryCreate>,
) -> AppResult<Json<LaundryRequest>> {
    Ok(Json(state.laundry.create(scope.site, payload)?))
}

/// POST /api/sites/{site}/laundry/{id}/advance
pub async fn advance(
    State(state): State<ServerState>,
    scope: SiteScope,
    Path((_, id)): Path<(String, String)>,
) -> AppResult<Json<LaundryRequest>> {
    Ok(Json(state.laundry.advance(scope.site, &id)?))
}
