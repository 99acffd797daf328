//! Meal and beverage vouchers

use super::MealCategory;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Beverages a voucher may carry
pub const BEVERAGES: [&str; 6] = ["Café noir", "Café", "Thé", "Jus", "Eau", "Soda"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoucherKind {
    #[serde(rename = "Repas")]
    Meal,
    #[serde(rename = "Boisson")]
    Beverage,
}

impl VoucherKind {
    /// Voucher number prefix
    pub fn prefix(&self) -> char {
        match self {
            Self::Meal => 'R',
            Self::Beverage => 'B',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoucherStatus {
    #[serde(rename = "Valide")]
    Valid,
    #[serde(rename = "Consommé")]
    Consumed,
    #[serde(rename = "Annulé")]
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealVoucher {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: VoucherKind,
    pub client_name: String,
    /// Block + number of the issuing apartment, free text
    pub apartment_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealCategory>,
    #[serde(default)]
    pub beverages: Vec<String>,
    pub status: VoucherStatus,
    pub date: NaiveDate,
    pub timestamp: DateTime<Utc>,
}

/// Issue voucher payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoucherIssue {
    #[serde(rename = "type")]
    pub kind: VoucherKind,
    pub apartment_id: String,
    #[serde(default)]
    pub meal_type: Option<MealCategory>,
    #[serde(default)]
    pub beverages: Vec<String>,
}

/// Per-day voucher counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoucherDailySummary {
    pub valid: usize,
    pub consumed: usize,
}
