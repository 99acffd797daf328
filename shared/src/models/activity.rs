//! Login / logout journal

use super::{HotelSite, UserRole};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityAction {
    #[serde(rename = "Connexion")]
    Login,
    #[serde(rename = "Déconnexion")]
    Logout,
}

/// Activity log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: String,
    pub user_name: String,
    pub user_role: UserRole,
    pub action: ActivityAction,
    pub timestamp: DateTime<Utc>,
    pub site: HotelSite,
}
