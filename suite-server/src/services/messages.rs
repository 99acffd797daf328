//! Internal messaging between roles and sites

use chrono::Utc;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{InternalMessage, MessageSend, User, UserRole};
use shared::util::new_id;

use crate::storage::{LocalStore, StorageKey};
use crate::utils::validation;

#[derive(Clone)]
pub struct MessageService {
    store: LocalStore,
}

/// Whether `user` may read `message`
pub fn is_visible(message: &InternalMessage, user: &User) -> bool {
    user.role == UserRole::Boss || is_sender(message, user) || is_recipient(message, user)
}

fn is_sender(message: &InternalMessage, user: &User) -> bool {
    message.sender_name == user.name && message.sender_role == user.role
}

fn is_recipient(message: &InternalMessage, user: &User) -> bool {
    message.recipient_role == user.role && message.recipient_site == user.site
}

impl MessageService {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    pub fn send(&self, sender: &User, payload: MessageSend) -> AppResult<InternalMessage> {
        let content = payload.content.trim();
        if content.is_empty() {
            return Err(AppError::new(ErrorCode::MessageEmpty));
        }
        validation::check_length(content, "content", validation::MAX_MESSAGE_LEN)?;
        let message = InternalMessage {
            id: new_id(),
            sender_name: sender.name.clone(),
            sender_role: sender.role,
            sender_site: sender.site,
            recipient_role: payload.recipient_role,
            recipient_site: payload.recipient_site,
            content: content.to_string(),
            timestamp: Utc::now(),
            is_read: false,
        };
        self.store
            .update(&StorageKey::InternalMessages, |list: &mut Vec<InternalMessage>| {
                list.insert(0, message.clone());
                Ok(())
            })?;
        tracing::debug!(
            from = %sender.name,
            to_role = %message.recipient_role,
            to_site = %message.recipient_site,
            "Message sent"
        );
        Ok(message)
    }

    /// Newest first
    pub fn visible_for(&self, user: &User) -> Vec<InternalMessage> {
        self.store
            .read_or_default::<Vec<InternalMessage>>(&StorageKey::InternalMessages)
            .into_iter()
            .filter(|m| is_visible(m, user))
            .collect()
    }

    /// Unread messages addressed to the user
    pub fn unread_count(&self, user: &User) -> usize {
        self.store
            .read_or_default::<Vec<InternalMessage>>(&StorageKey::InternalMessages)
            .iter()
            .filter(|m| !m.is_read && is_recipient(m, user))
            .count()
    }

    /// Mark every message addressed to the user as read; returns how many changed
    pub fn mark_read(&self, user: &User) -> AppResult<usize> {
        self.store
            .update(&StorageKey::InternalMessages, |list: &mut Vec<InternalMessage>| {
                let mut changed = 0;
                for message in list.iter_mut().filter(|m| !m.is_read && is_recipient(m, user)) {
                    message.is_read = true;
                    changed += 1;
                }
                Ok(changed)
            })
    }
}
