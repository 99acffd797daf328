//! Connection journal

use chrono::Utc;
use shared::models::{ActivityAction, ActivityLog as ActivityEntry, User};
use shared::util::new_id;

use crate::storage::{LocalStore, StorageKey};

/// Entries kept, newest first
pub const MAX_ACTIVITY_ENTRIES: usize = 500;

#[derive(Clone)]
pub struct ActivityLog {
    store: LocalStore,
}

impl ActivityLog {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// Prepend an entry; failures are logged and swallowed
    pub fn record(&self, user: &User, action: ActivityAction) {
        let entry = ActivityEntry {
            id: new_id(),
            user_name: user.name.clone(),
            user_role: user.role,
            action,
            timestamp: Utc::now(),
            site: user.site,
        };
        let result = self
            .store
            .update(&StorageKey::ActivityLogs, |logs: &mut Vec<ActivityEntry>| {
                logs.insert(0, entry);
                logs.truncate(MAX_ACTIVITY_ENTRIES);
                Ok(())
            });
        if let Err(e) = result {
            tracing::warn!(user = %user.email, error = %e, "Failed to record activity");
        }
    }

    pub fn recent(&self, limit: usize) -> Vec<ActivityEntry> {
        let mut logs: Vec<ActivityEntry> = self.store.read_or_default(&StorageKey::ActivityLogs);
        logs.truncate(limit);
        logs
    }
}
