//! Dishes and the weekly meal plan

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MealCategory {
    #[serde(rename = "Petit-Déjeuner")]
    Breakfast,
    #[serde(rename = "Déjeuner")]
    Lunch,
    #[serde(rename = "Goûter")]
    Snack,
    #[serde(rename = "Dîner")]
    Dinner,
}

impl MealCategory {
    pub const ALL: [MealCategory; 4] = [
        MealCategory::Breakfast,
        MealCategory::Lunch,
        MealCategory::Snack,
        MealCategory::Dinner,
    ];
}

/// Day of the weekly plan, Sunday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanDay {
    Dimanche,
    Lundi,
    Mardi,
    Mercredi,
    Jeudi,
    Vendredi,
    Samedi,
}

impl PlanDay {
    pub const ALL: [PlanDay; 7] = [
        PlanDay::Dimanche,
        PlanDay::Lundi,
        PlanDay::Mardi,
        PlanDay::Mercredi,
        PlanDay::Jeudi,
        PlanDay::Vendredi,
        PlanDay::Samedi,
    ];
}

impl From<Weekday> for PlanDay {
    fn from(day: Weekday) -> Self {
        Self::ALL[day.num_days_from_sunday() as usize]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: MealCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: MealCategory,
}

/// Planned dish for one day and meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    pub id: String,
    pub day: PlanDay,
    pub category: MealCategory,
    pub main_dish_id: String,
    #[serde(default)]
    pub alternatives: Vec<String>,
}

/// Upsert plan payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanUpdate {
    pub day: PlanDay,
    pub category: MealCategory,
    pub dish_id: String,
    #[serde(default)]
    pub alternatives: Vec<String>,
}

/// Resolved menu line; `dish_name` is `?` when the dish no longer exists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub category: MealCategory,
    pub dish_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_maps_sunday_first() {
        assert_eq!(PlanDay::from(Weekday::Sun), PlanDay::Dimanche);
        assert_eq!(PlanDay::from(Weekday::Mon), PlanDay::Lundi);
        assert_eq!(PlanDay::from(Weekday::Sat), PlanDay::Samedi);
    }

    #[test]
    fn category_wire_names() {
        assert_eq!(
            serde_json::to_string(&MealCategory::Breakfast).unwrap(),
            "\"Petit-Déjeuner\""
        );
        assert_eq!(serde_json::to_string(&MealCategory::Snack).unwrap(), "\"Goûter\"");
    }
}
