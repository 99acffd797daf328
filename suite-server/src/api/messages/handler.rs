//! Internal messaging handlers

use axum::{Json, extract::State};
use serde::Serialize;
use shared::error::AppResult;
use shared::models::{InternalMessage, MessageSend};

use crate::auth::CurrentUser;
use crate::core::ServerState;

#[derive(Debug, Serialize)]
pub struct UnreadCount {
    pub unread: usize,
}

/// GET /api/messages - messages visible to the operator, newest first
pub async fn list(
    State(state): State<ServerState>,
    CurrentUser(user): CurrentUser,
) -> Json<Vec<InternalMessage>> {
    Json(state.messages.visible_for(&user))
}

/// POST /api/messages
pub async fn send(
    State(state): State<ServerState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<MessageSend>,
) -> AppResult<Json<InternalMessage>> {
    Ok(Json(state.messages.send(&user, payload)?))
}

/// GET /api/messages/unread
pub async fn unread(
    State(state): State<ServerState>,
    CurrentUser(user): CurrentUser,
) -> Json<UnreadCount> {
    Json(UnreadCount {
        unread: state.messages.unread_count(&user),
    })
}

/// POST /api/messages/read - mark everything addressed to the operator as read
pub async fn mark_read(
    State(state): State<ServerState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<UnreadCount>> {
    let changed = state.messages.mark_read(&user)?;
    tracing::debug!(identifier = %user.email, changed, "Messages marked read");
    Ok(Json(UnreadCount {
        unread: state.messages.unread_count(&user),
    }))
}
