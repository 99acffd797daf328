//! Laundry requests

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Laundry workflow, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaundryStatus {
    #[serde(rename = "En attente")]
    Pending,
    #[serde(rename = "En blanchisserie")]
    InWash,
    #[serde(rename = "En réception")]
    AtReception,
    #[serde(rename = "Livré")]
    Delivered,
}

impl LaundryStatus {
    /// Next step; `None` once delivered
    pub fn next(&self) -> Option<LaundryStatus> {
        match self {
            Self::Pending => Some(Self::InWash),
            Self::InWash => Some(Self::AtReception),
            Self::AtReception => Some(Self::Delivered),
            Self::Delivered => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaundryRequest {
    pub id: String,
    pub client_name: String,
    pub apartment_id: String,
    pub apartment_number: String,
    pub items: String,
    pub status: LaundryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaundryCreate {
    pub apartment_id: String,
    pub items: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workflow_ends_at_delivered() {
        let mut status = LaundryStatus::Pending;
        let mut steps = 0;
        while let Some(next) = status.next() {
            status = next;
            steps += 1;
        }
        assert_eq!(status, LaundryStatus::Delivered);
        assert_eq!(steps, 3);
    }
}
