//! Request extractors
//!
//! [`CurrentUser`] resolves the session operator; [`SiteScope`] additionally
//! resolves the `{site}` path segment and enforces site access.

use std::collections::HashMap;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use shared::error::{AppError, ErrorCode};
use shared::models::{HotelSite, User, UserRole};

use super::permissions;
use super::site::ensure_site_access;
use crate::core::ServerState;
use crate::security_log;

/// Authenticated operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser(pub User);

impl CurrentUser {
    pub fn user(&self) -> &User {
        &self.0
    }

    pub fn is_boss(&self) -> bool {
        self.0.role == UserRole::Boss
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        permissions::has_permission(self.0.role, permission)
    }
}

impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        // Already resolved by require_auth
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        match state.sessions.current_user() {
            Some(user) => {
                let user = CurrentUser(user);
                parts.extensions.insert(user.clone());
                Ok(user)
            }
            None => {
                security_log!("WARN", "auth_missing", uri = format!("{:?}", parts.uri));
                Err(AppError::not_authenticated())
            }
        }
    }
}

/// Operator acting on one operating site
#[derive(Debug, Clone)]
pub struct SiteScope {
    pub user: User,
    pub site: HotelSite,
}

impl FromRequestParts<ServerState> for SiteScope {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;

        let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::invalid_request(e.body_text()))?;
        let raw = params
            .get("site")
            .ok_or_else(|| AppError::new(ErrorCode::SiteNotFound))?;
        let site: HotelSite = raw
            .parse()
            .map_err(|_| AppError::new(ErrorCode::SiteNotFound).with_detail("site", raw.as_str()))?;

        if let Err(e) = ensure_site_access(&user, site) {
            security_log!(
                "WARN",
                "site_denied",
                identifier = user.email.clone(),
                site = site.label()
            );
            return Err(e);
        }
        Ok(Self { user, site })
    }
}
