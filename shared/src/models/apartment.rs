//! Apartments, stays and accommodation types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApartmentType {
    Suite,
    #[serde(rename = "Appartement")]
    Apartment,
    Studio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApartmentStatus {
    #[serde(rename = "Libre")]
    Free,
    #[serde(rename = "Occupé")]
    Occupied,
    #[serde(rename = "Ménage")]
    Cleaning,
    Maintenance,
}

/// Accommodation formula chosen at check-in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccommodationType {
    #[serde(rename = "1/1 Single")]
    Single,
    #[serde(rename = "1/2 Double")]
    Double,
    #[serde(rename = "1/3 Triple")]
    Triple,
    #[serde(rename = "1/4 Quadruple")]
    Quadruple,
}

impl AccommodationType {
    pub fn occupant_count(&self) -> u8 {
        match self {
            Self::Single => 1,
            Self::Double => 2,
            Self::Triple => 3,
            Self::Quadruple => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Single => "1/1 Single",
            Self::Double => "1/2 Double",
            Self::Triple => "1/3 Triple",
            Self::Quadruple => "1/4 Quadruple",
        }
    }

    /// Formulas that fit an apartment of the given capacity
    pub fn fitting(capacity: u8) -> Vec<AccommodationType> {
        [Self::Single, Self::Double, Self::Triple, Self::Quadruple]
            .into_iter()
            .filter(|t| t.occupant_count() <= capacity)
            .collect()
    }
}

/// Closed stay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApartmentHistory {
    pub id: String,
    pub client_name: String,
    pub check_in_date: DateTime<Utc>,
    pub check_out_date: DateTime<Utc>,
    pub occupant_count: u8,
    pub accommodation_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Apartment {
    pub id: String,
    pub residence_name: String,
    pub block: String,
    pub number: String,
    #[serde(rename = "type")]
    pub kind: ApartmentType,
    /// 2 or 4
    pub capacity: u8,
    pub status: ApartmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_client: Option<String>,
    #[serde(default)]
    pub current_occupants_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accommodation_type: Option<AccommodationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub history: Vec<ApartmentHistory>,
}

impl Apartment {
    /// Label printed on vouchers and laundry tickets (`A12`)
    pub fn display_number(&self) -> String {
        format!("{}{}", self.block, self.number)
    }
}

/// Add apartment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApartmentCreate {
    pub residence_name: String,
    #[serde(default)]
    pub block: Option<String>,
    pub number: String,
    #[serde(rename = "type", default)]
    pub kind: Option<ApartmentType>,
    pub capacity: u8,
}

/// Check-in payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckIn {
    pub client_name: String,
    pub accommodation_type: AccommodationType,
}

/// Maintenance toggle payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceToggle {
    pub on: bool,
}
