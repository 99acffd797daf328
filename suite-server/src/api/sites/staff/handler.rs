//! Staff handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::{ApiResponse, AppResult};
use shared::models::{
    AttendanceJustify, AttendanceMark, PayrollLine, StaffCreate, StaffMember, StaffUpdate,
};

use crate::auth::SiteScope;
use crate::core::ServerState;

/// GET /api/sites/{site}/staff
pub async fn list(
    State(state): State<ServerState>,
    scope: SiteScope,
) -> AppResult<Json<Vec<StaffMember>>> {
    Ok(Json(state.staff.list(scope.site)?))
}

/// POST /api/sites/{site}/staff
pub async fn add(
    State(state): State<ServerState>,
    scope: SiteScope,
    Json(payload): Json<StaffCreate>,
) -> AppResult<Json<StaffMember>> {
    let member = state.staff.add(scope.site, payload)?;
    tracing::info!(site = %scope.site, staff = %member.id, name = %member.name, "Staff member added");
    Ok(Json(member))
}

/// PUT /api/sites/{site}/staff/{id}
pub async fn update(
    State(state): State<ServerState>,
    scope: SiteScope,
    Path((_, id)): Path<(String, String)>,
    Json(payload): Json<StaffUpdate>,
) -> AppResult<Json<StaffMember>> {
    Ok(Json(state.staff.update(scope.site, &id, payload)?))
}

/// DELETE /api/sites/{site}/staff/{id}
pub async fn delete(
    State(state): State<ServerState>,
    scope: SiteScope,
    Path((_, id)): Path<(String, String)>,
) -> AppResult<ApiResponse<()>> {
    state.staff.delete(scope.site, &id)?;
    tracing::info!(site = %scope.site, staff = %id, by = %scope.user.email, "Staff member removed");
    Ok(ApiResponse::ok())
}

/// POST /api/sites/{site}/staff/{id}/attendance
pub async fn mark_attendance(
    State(state): State<ServerState>,
    scope: SiteScope,
    Path((_, id)): Path<(String, String)>,
    Json(payload): Json<AttendanceMark>,
) -> AppResult<Json<StaffMember>> {
    Ok(Json(state.staff.mark_attendance(
        scope.site,
        &id,
        payload.status,
        payload.date,
    )?))
}

/// POST /api/sites/{site}/staff/{id}/justify
pub async fn justify(
    State(state): State<ServerState>,
    scope: SiteScope,
    Path((_, id)): Path<(String, String)>,
    Json(payload): Json<AttendanceJustify>,
) -> AppResult<Json<StaffMember>> {
    Ok(Json(state.staff.justify(scope.site, &id, payload.date)?))
}

/// GET /api/sites/{site}/staff/payroll
pub async fn payroll(
    State(state): State<ServerState>,
    scope: SiteScope,
) -> AppResult<Json<Vec<PayrollLine>>> {
    Ok(Json(state.staff.payroll(scope.site)?))
}
