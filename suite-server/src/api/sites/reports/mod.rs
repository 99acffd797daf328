//! Dashboard, notifications and management report
//!
//! | Path | Method | Permission |
//! |------|--------|------------|
//! | /dashboard | GET | site access |
//! | /notifications | GET | site access |
//! | /report | GET | reports:view |

use axum::{Json, Router, extract::State, middleware, routing::get};
use shared::error::AppResult;
use shared::models::{AppNotification, DashboardSnapshot, SiteReport};

use crate::auth::{SiteScope, permissions, require_permission};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/dashboard", get(dashboard))
        .route("/notifications", get(notifications));

    let report_routes = Router::new()
        .route("/report", get(report))
        .layer(middleware::from_fn(require_permission(permissions::REPORTS_VIEW)));

    read_routes.merge(report_routes)
}

async fn dashboard(
    State(state): State<ServerState>,
    scope: SiteScope,
) -> AppResult<Json<DashboardSnapshot>> {
    Ok(Json(state.reports.dashboard(scope.site)?))
}

async fn notifications(
    State(state): State<ServerState>,
    scope: SiteScope,
) -> AppResult<Json<Vec<AppNotification>>> {
    Ok(Json(state.reports.notifications(scope.site)?))
}

async fn report(
    State(state): State<ServerState>,
    scope: SiteScope,
) -> AppResult<Json<SiteReport>> {
    Ok(Json(state.reports.site_report(scope.site)?))
}
