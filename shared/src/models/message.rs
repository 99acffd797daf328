//! Internal messaging between roles and sites

use super::{HotelSite, UserRole};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalMessage {
    pub id: String,
    pub sender_name: String,
    pub sender_role: UserRole,
    pub sender_site: HotelSite,
    pub recipient_role: UserRole,
    pub recipient_site: HotelSite,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_read: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageSend {
    pub recipient_role: UserRole,
    pub recipient_site: HotelSite,
    pub content: String,
}
