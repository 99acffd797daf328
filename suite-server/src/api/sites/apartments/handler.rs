//! Apartments handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::AppResult;
use shared::models::{Apartment, ApartmentCreate, CheckIn, MaintenanceToggle};

use crate::auth::SiteScope;
use crate::core::ServerState;
use crate::services::apartments::residences as site_residences;

/// GET /api/sites/{site}/apartments
pub async fn list(
    State(state): State<ServerState>,
    scope: SiteScope,
) -> AppResult<Json<Vec<Apartment>>> {
    Ok(Json(state.apartments.list(scope.site)?))
}

/// GET /api/sites/{site}/apartments/residences
pub async fn residences(scope: SiteScope) -> Json<&'static [&'static str]> {
    Json(site_residences(scope.site))
}

/// POST /api/sites/{site}/apartments
pub async fn add(
    State(state): State<ServerState>,
    scope: SiteScope,
    Json(payload): Json<ApartmentCreate>,
) -> AppResult<Json<Apartment>> {
    Ok(Json(state.apartments.add(scope.site, payload)?))
}

/// POST /api/sites/{site}/apartments/{id}/check-in
pub async fn check_in(
    State(state): State<ServerState>,
    scope: SiteScope,
    Path((_, id)): Path<(String, String)>,
    Json(payload): Json<CheckIn>,
) -> AppResult<Json<Apartment>> {
    let apartment = state.apartments.check_in(scope.site, &id, payload)?;
    tracing::info!(
        site = %scope.site,
        apartment = %apartment.display_number(),
        occupants = apartment.current_occupants_count,
        "Check-in"
    );
    Ok(Json(apartment))
}

/// POST /api/sites/{site}/apartments/{id}/check-out
pub async fn check_out(
    State(state): State<ServerState>,
    scope: SiteScope,
    Path((_, id)): Path<(String, String)>,
) -> AppResult<Json<Apartment>> {
    let apartment = state.apartments.check_out(scope.site, &id)?;
    tracing::info!(site = %scope.site, apartment = %apartment.display_number(), "Check-out");
    Ok(Json(apartment))
}

/// POST /api/sites/{site}/apartments/{id}/ready
pub async fn mark_ready(
    State(state): State<ServerState>,
    scope: SiteScope,
    Path((_, id)): Path<(String, String)>,
) -> AppResult<Json<Apartment>> {
    Ok(Json(state.apartments.mark_ready(scope.site, &id)?))
}

/// PUT /api/sites/{site}/apartments/{id}/maintenance
pub async fn set_maintenance(
    State(state): State<ServerState>,
    scope: SiteScope,
    Path((_, id)): Path<(String, String)>,
    Json(payload): Json<MaintenanceToggle>,
) -> AppResult<Json<Apartment>> {
    Ok(Json(state.apartments.set_maintenance(scope.site, &id, payload.on)?))
}
