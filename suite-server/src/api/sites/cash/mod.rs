//! Cash register API
//!
//! | Path | Method | Permission |
//! |------|--------|------------|
//! | / | GET | cash:view |
//! | /summary | GET | cash:view |
//! | / | POST | cash:deposit (entries) / cash:expense (exits) |

use axum::{
    Json, Router,
    extract::State,
    middleware,
    routing::{get, post},
};
use shared::error::{AppError, AppResult};
use shared::models::{CashKind, CashRecord, CashSummary, CashTransaction};

use crate::auth::{SiteScope, permissions, require_permission};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    let view_routes = Router::new()
        .route("/", get(list))
        .route("/summary", get(summary))
        .layer(middleware::from_fn(require_permission(permissions::CASH_VIEW)));

    // Permission depends on the movement kind, checked in the handler
    let record_routes = Router::new().route("/", post(record));

    view_routes.merge(record_routes)
}

/// GET /api/sites/{site}/cash - newest first
pub async fn list(
    State(state): State<ServerState>,
    scope: SiteScope,
) -> AppResult<Json<Vec<CashTransaction>>> {
    Ok(Json(state.cash.list(scope.site)?))
}

/// GET /api/sites/{site}/cash/summary
pub async fn summary(
    State(state): State<ServerState>,
    scope: SiteScope,
) -> AppResult<Json<CashSummary>> {
    Ok(Json(state.cash.summary(scope.site)?))
}

/// POST /api/sites/{site}/cash
pub async fn record(
    State(state): State<ServerState>,
    scope: SiteScope,
    Json(payload): Json<CashRecord>,
) -> AppResult<Json<CashTransaction>> {
    let required = match payload.kind {
        CashKind::Entry => permissions::CASH_DEPOSIT,
        CashKind::Exit => permissions::CASH_EXPENSE,
    };
    if !permissions::has_permission(scope.user.role, required) {
        return Err(AppError::forbidden(format!("Permission denied: {}", required))
            .with_detail("required_permission", required));
    }
    Ok(Json(state.cash.record(scope.site, payload)?))
}
