//! Cash register movements

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CashKind {
    #[serde(rename = "Entrée")]
    Entry,
    #[serde(rename = "Sortie")]
    Exit,
}

impl CashKind {
    /// Category used when none is given
    pub fn default_category(&self) -> &'static str {
        match self {
            Self::Entry => "Fond",
            Self::Exit => "Autre",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashTransaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: CashKind,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashRecord {
    #[serde(rename = "type")]
    pub kind: CashKind,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashSummary {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_entries: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_expenses: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}
