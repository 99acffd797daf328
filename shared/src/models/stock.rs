//! Stock catalog and chef commands

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default alert threshold for new catalog items
pub const DEFAULT_MIN_THRESHOLD: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockCategory {
    #[serde(rename = "Produits Laitiers")]
    Dairy,
    #[serde(rename = "Boucherie")]
    Butchery,
    #[serde(rename = "Épicerie")]
    Grocery,
    #[serde(rename = "Boulangerie")]
    Bakery,
    #[serde(rename = "Fruits & Légumes")]
    Produce,
    #[serde(rename = "Entretien")]
    Cleaning,
    #[serde(rename = "Autre")]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockUnit {
    Kg,
    L,
    #[serde(rename = "Unité")]
    Unit,
    Pack,
}

/// Catalog entry with its on-hand quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    pub id: String,
    pub name: String,
    pub category: StockCategory,
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
    pub unit: StockUnit,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub min_threshold: Decimal,
}

impl StockItem {
    /// At or below the alert threshold
    pub fn is_critical(&self) -> bool {
        self.quantity <= self.min_threshold
    }

    /// On-hand value (quantity × unit price)
    pub fn value(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}

/// Create catalog item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockItemCreate {
    pub name: String,
    pub category: StockCategory,
    pub unit: StockUnit,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub min_threshold: Option<Decimal>,
}

/// Manual quantity adjustment (positive or negative)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockAdjust {
    #[serde(with = "rust_decimal::serde::float")]
    pub delta: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandStatus {
    #[serde(rename = "En attente")]
    Pending,
    #[serde(rename = "Livré")]
    Delivered,
}

/// Kitchen request for a catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChefCommand {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
    pub unit: StockUnit,
    pub status: CommandStatus,
    pub timestamp: DateTime<Utc>,
}

/// Create chef command payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChefCommandCreate {
    pub product_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i64, threshold: i64) -> StockItem {
        StockItem {
            id: "1".into(),
            name: "Lait".into(),
            category: StockCategory::Dairy,
            quantity: Decimal::from(quantity),
            unit: StockUnit::L,
            unit_price: Decimal::new(850, 2),
            min_threshold: Decimal::from(threshold),
        }
    }

    #[test]
    fn critical_includes_threshold() {
        assert!(item(5, 5).is_critical());
        assert!(item(0, 5).is_critical());
        assert!(!item(6, 5).is_critical());
    }

    #[test]
    fn value_is_quantity_times_price() {
        assert_eq!(item(4, 5).value(), Decimal::from(34));
    }

    #[test]
    fn money_serializes_as_number() {
        let json = serde_json::to_value(item(2, 5)).unwrap();
        assert_eq!(json["unit_price"], serde_json::json!(8.5));
        assert_eq!(json["category"], "Produits Laitiers");
        assert_eq!(json["unit"], "L");
    }

    #[test]
    fn create_payload_threshold_is_optional() {
        let payload: StockItemCreate = serde_json::from_str(
            r#"{"name":"Savon","category":"Entretien","unit":"Unité","unit_price":12}"#,
        )
        .unwrap();
        assert!(payload.min_threshold.is_none());
        assert_eq!(payload.unit, StockUnit::Unit);
    }
}
