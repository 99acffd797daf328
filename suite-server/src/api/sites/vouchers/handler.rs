//! Vouchers handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::NaiveDate;
use serde::Deserialize;
use shared::error::AppResult;
use shared::models::{MealVoucher, VoucherDailySummary, VoucherIssue};

use crate::auth::SiteScope;
use crate::core::ServerState;

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Option<NaiveDate>,
}

/// GET /api/sites/{site}/vouchers - newest first
pub async fn list(
    State(state): State<ServerState>,
    scope: SiteScope,
) -> AppResult<Json<Vec<MealVoucher>>> {
    Ok(Json(state.vouchers.list(scope.site)?))
}

/// GET /api/sites/{site}/vouchers/daily
pub async fn daily(
    State(state): State<ServerState>,
    scope: SiteScope,
    Query(query): Query<DateQuery>,
) -> AppResult<Json<Vec<MealVoucher>>> {
    let date = query.date.unwrap_or_else(|| state.vouchers.today());
    Ok(Json(state.vouchers.daily(scope.site, date)?))
}

/// GET /api/sites/{site}/vouchers/summary
pub async fn daily_summary(
    State(state): State<ServerState>,
    scope: SiteScope,
    Query(query): Query<DateQuery>,
) -> AppResult<Json<VoucherDailySummary>> {
    let date = query.date.unwrap_or_else(|| state.vouchers.today());
    Ok(Json(state.vouchers.daily_summary(scope.site, date)?))
}

/// POST /api/sites/{site}/vouchers
pub async fn issue(
    State(state): State<ServerState>,
    scope: SiteScope,
    Json(payload): Json<VoucherIssue>,
) -> AppResult<Json<MealVoucher>> {
    Ok(Json(state.vouchers.issue(scope.site, payload)?))
}

/// POST /api/sites/{site}/vouchers/{id}/consume
pub async fn consume(
    State(state): State<ServerState>,
    scope: SiteScope,
    Path((_, id)): Path<(String, String)>,
) -> AppResult<Json<MealVoucher>> {
    let voucher = state.vouchers.consume(scope.site, &id)?;
    tracing::info!(site = %scope.site, voucher = %voucher.id, by = %scope.user.email, "Voucher consumed");
    Ok(Json(voucher))
}

/// POST /api/sites/{site}/vouchers/{id}/cancel
pub async fn cancel(
    State(state): State<ServerState>,
    scope: SiteScope,
    Path((_, id)): Path<(String, String)>,
) -> AppResult<Json<MealVoucher>> {
    let voucher = state.vouchers.cancel(scope.site, &id)?;
    tracing::info!(site = %scope.site, voucher = %voucher.id, by = %scope.user.email, "Voucher cancelled");
    Ok(Json(voucher))
}
