//! Meals handlers

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::Datelike;
use serde::Deserialize;
use shared::error::AppResult;
use shared::models::{DailyPlan, Dish, DishCreate, MenuEntry, PlanDay, PlanUpdate};

use crate::auth::SiteScope;
use crate::core::ServerState;

#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    pub day: Option<PlanDay>,
}

/// GET /api/sites/{site}/meals/dishes
pub async fn list_dishes(
    State(state): State<ServerState>,
    scope: SiteScope,
) -> AppResult<Json<Vec<Dish>>> {
    Ok(Json(state.meals.list_dishes(scope.site)?))
}

/// POST /api/sites/{site}/meals/dishes
pub async fn add_dish(
    State(state): State<ServerState>,
    scope: SiteScope,
    Json(payload): Json<DishCreate>,
) -> AppResult<Json<Dish>> {
    Ok(Json(state.meals.add_dish(scope.site, payload)?))
}

/// GET /api/sites/{site}/meals/planning
pub async fn planning(
    State(state): State<ServerState>,
    scope: SiteScope,
) -> AppResult<Json<Vec<DailyPlan>>> {
    Ok(Json(state.meals.planning(scope.site)?))
}

/// PUT /api/sites/{site}/meals/planning
pub async fn set_plan(
    State(state): State<ServerState>,
    scope: SiteScope,
    Json(payload): Json<PlanUpdate>,
) -> AppResult<Json<DailyPlan>> {
    Ok(Json(state.meals.set_plan(scope.site, payload)?))
}

/// GET /api/sites/{site}/meals/menu
pub async fn menu(
    State(state): State<ServerState>,
    scope: SiteScope,
    Query(query): Query<MenuQuery>,
) -> AppResult<Json<Vec<MenuEntry>>> {
    let day = query
        .day
        .unwrap_or_else(|| PlanDay::from(state.reports.today().weekday()));
    Ok(Json(state.meals.menu_for(scope.site, day)?))
}
