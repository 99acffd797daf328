//! Authentication Handlers
//!
//! Handles login, logout and the current session

use std::time::Duration;

use axum::{Extension, Json, extract::State};
use serde::Serialize;
use shared::error::AppError;
use shared::models::{HotelSite, LoginRequest, User};

use crate::auth::permissions::role_permissions;
use crate::auth::site::default_site;
use crate::auth::CurrentUser;
use crate::core::ServerState;

/// Fixed delay before answering a login, successful or not
const AUTH_FIXED_DELAY_MS: u64 = 200;

/// Session view returned by login and `me`
#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub user: User,
    pub permissions: &'static [&'static str],
    /// Site the dashboard opens on
    pub default_site: HotelSite,
    pub unread_messages: usize,
}

impl SessionInfo {
    fn build(state: &ServerState, user: User) -> Self {
        Self {
            permissions: role_permissions(user.role),
            default_site: default_site(&user),
            unread_messages: state.messages.unread_count(&user),
            user,
        }
    }
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<SessionInfo>, AppError> {
    let result = state.sessions.login(&req);
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let user = result?;
    tracing::info!(identifier = %user.email, role = %user.role, "User logged in");
    Ok(Json(SessionInfo::build(&state, user)))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<ServerState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Json<SessionInfo> {
    Json(SessionInfo::build(&state, user))
}

/// POST /api/auth/logout
pub async fn logout(State(state): State<ServerState>) -> Json<Option<User>> {
    let user = state.sessions.logout();
    if let Some(user) = &user {
        tracing::info!(identifier = %user.email, "User logged out");
    }
    Json(user)
}
