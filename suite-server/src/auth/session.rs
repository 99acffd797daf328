//! Operator session
//!
//! The node serves a single dashboard terminal, so there is one current
//! session stored under [`StorageKey::Session`]. "Stay connected" selects the
//! durable store, otherwise the tab store is used and the session ends with
//! the process.

use shared::error::{AppError, AppResult};
use shared::models::{ActivityAction, LoginRequest, User};

use super::{ActivityLog, UserDirectory};
use crate::security_log;
use crate::storage::{LocalStore, StorageKey};

#[derive(Clone)]
pub struct SessionManager {
    durable: LocalStore,
    tab: LocalStore,
    directory: UserDirectory,
    activity: ActivityLog,
}

impl SessionManager {
    pub fn new(
        durable: LocalStore,
        tab: LocalStore,
        directory: UserDirectory,
        activity: ActivityLog,
    ) -> Self {
        Self {
            durable,
            tab,
            directory,
            activity,
        }
    }

    /// Check credentials and role, then open the session
    pub fn login(&self, request: &LoginRequest) -> AppResult<User> {
        let identifier = request.identifier.trim();
        let entry = self
            .directory
            .get(identifier)
            .filter(|entry| entry.password == request.password);

        let Some(entry) = entry else {
            security_log!("WARN", "login_failed", identifier = identifier.to_string());
            return Err(AppError::invalid_credentials());
        };

        if entry.user.role != request.role {
            security_log!(
                "WARN",
                "login_role_mismatch",
                identifier = identifier.to_string(),
                claimed_role = request.role.label()
            );
            return Err(AppError::role_mismatch());
        }

        let user = entry.user;
        let (target, other) = if request.stay_connected {
            (&self.durable, &self.tab)
        } else {
            (&self.tab, &self.durable)
        };
        if let Err(e) = target.write(&StorageKey::Session, &user) {
            tracing::warn!(error = %e, "Failed to persist session");
        }
        if let Err(e) = other.remove(&StorageKey::Session) {
            tracing::warn!(error = %e, "Failed to clear previous session");
        }

        self.activity.record(&user, ActivityAction::Login);
        security_log!(
            "INFO",
            "login_success",
            identifier = user.email.clone(),
            role = user.role.label(),
            site = user.site.label(),
            stay_connected = request.stay_connected
        );
        Ok(user)
    }

    /// Durable session first, then the tab session
    ///
    /// An unreadable session in either store means no session at all; both
    /// stores are cleared.
    pub fn current_user(&self) -> Option<User> {
        let session = match self.durable.try_read::<User>(&StorageKey::Session) {
            Ok(None) => self.tab.try_read::<User>(&StorageKey::Session),
            found => found,
        };
        match session {
            Ok(user) => user,
            Err(e) => {
                security_log!("WARN", "session_unreadable", error = e.to_string());
                self.clear();
                None
            }
        }
    }

    /// Close the session in both stores
    pub fn logout(&self) -> Option<User> {
        let user = self.current_user();
        if let Some(user) = &user {
            self.activity.record(user, ActivityAction::Logout);
            security_log!("INFO", "logout", identifier = user.email.clone());
        }
        self.clear();
        user
    }

    fn clear(&self) {
        for store in [&self.durable, &self.tab] {
            if let Err(e) = store.remove(&StorageKey::Session) {
                tracing::warn!(area = ?store.area(), error = %e, "Failed to clear session");
            }
        }
    }
}
