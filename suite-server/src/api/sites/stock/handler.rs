//! Stock handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::AppResult;
use shared::models::{ChefCommand, ChefCommandCreate, StockAdjust, StockItem, StockItemCreate};

use crate::auth::SiteScope;
use crate::core::ServerState;

/// GET /api/sites/{site}/stock/items
pub async fn list_items(
    State(state): State<ServerState>,
    scope: SiteScope,
) -> AppResult<Json<Vec<StockItem>>> {
    Ok(Json(state.stock.list_items(scope.site)?))
}

/// POST /api/sites/{site}/stock/items
pub async fn add_item(
    State(state): State<ServerState>,
    scope: SiteScope,
    Json(payload): Json<StockItemCreate>,
) -> AppResult<Json<StockItem>> {
    Ok(Json(state.stock.add_item(scope.site, payload)?))
}

/// GET /api/sites/{site}/stock/items/critical
pub async fn critical_items(
    State(state): State<ServerState>,
    scope: SiteScope,
) -> AppResult<Json<Vec<StockItem>>> {
    Ok(Json(state.stock.critical_items(scope.site)?))
}

/// POST /api/sites/{site}/stock/items/{id}/adjust
pub async fn adjust(
    State(state): State<ServerState>,
    scope: SiteScope,
    Path((_, id)): Path<(String, String)>,
    Json(payload): Json<StockAdjust>,
) -> AppResult<Json<StockItem>> {
    let item = state.stock.adjust(scope.site, &id, payload.delta)?;
    tracing::info!(
        site = %scope.site,
        item = %item.name,
        delta = %payload.delta,
        by = %scope.user.email,
        "Stock adjusted"
    );
    Ok(Json(item))
}

/// GET /api/sites/{site}/stock/commands
pub async fn list_commands(
    State(state): State<ServerState>,
    scope: SiteScope,
) -> AppResult<Json<Vec<ChefCommand>>> {
    Ok(Json(state.stock.list_commands(scope.site)?))
}

/// POST /api/sites/{site}/stock/commands
pub async fn create_command(
    State(state): State<ServerState>,
    scope: SiteScope,
    Json(payload): Json<ChefCommandCreate>,
) -> AppResult<Json<ChefCommand>> {
    Ok(Json(state.stock.create_command(scope.site, payload)?))
}

/// POST /api/sites/{site}/stock/commands/{id}/deliver
pub async fn mark_delivered(
    State(state): State<ServerState>,
    scope: SiteScope,
    Path((_, id)): Path<(String, String)>,
) -> AppResult<Json<ChefCommand>> {
    Ok(Json(state.stock.mark_delivered(scope.site, &id)?))
}
