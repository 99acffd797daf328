//! Operator directory handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::{AppResult, ApiResponse};
use shared::models::{PasswordUpdate, User, UserCreate};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::security_log;

/// GET /api/users
pub async fn list(State(state): State<ServerState>) -> Json<Vec<User>> {
    Json(state.directory.users())
}

/// POST /api/users - create or replace an account
pub async fn create(
    State(state): State<ServerState>,
    CurrentUser(actor): CurrentUser,
    Json(payload): Json<UserCreate>,
) -> AppResult<Json<User>> {
    let user = state.directory.add_user(payload)?;
    security_log!(
        "INFO",
        "user_saved",
        actor = actor.email.clone(),
        identifier = user.email.clone(),
        role = user.role.label()
    );
    Ok(Json(user))
}

/// DELETE /api/users/{identifier}
pub async fn delete(
    State(state): State<ServerState>,
    CurrentUser(actor): CurrentUser,
    Path(identifier): Path<String>,
) -> AppResult<ApiResponse<()>> {
    state.directory.delete_user(&identifier)?;
    security_log!(
        "INFO",
        "user_deleted",
        actor = actor.email.clone(),
        identifier = identifier.clone()
    );
    Ok(ApiResponse::ok())
}

/// PUT /api/users/{identifier}/password
pub async fn update_password(
    State(state): State<ServerState>,
    CurrentUser(actor): CurrentUser,
    Path(identifier): Path<String>,
    Json(payload): Json<PasswordUpdate>,
) -> AppResult<ApiResponse<()>> {
    state
        .directory
        .update_password(&identifier, &payload.password)?;
    security_log!(
        "INFO",
        "password_changed",
        actor = actor.email.clone(),
        identifier = identifier.clone()
    );
    Ok(ApiResponse::ok())
}
