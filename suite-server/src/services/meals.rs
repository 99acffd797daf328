//! Dishes and weekly planning

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    DailyPlan, Dish, DishCreate, HotelSite, MealCategory, MenuEntry, PlanDay, PlanUpdate,
};
use shared::util::new_id;

use super::{ensure_operating, require_text};
use crate::storage::{LocalStore, StorageKey};

/// Shown when a plan points at a dish that no longer exists
pub const MISSING_DISH: &str = "?";

#[derive(Clone)]
pub struct MealService {
    store: LocalStore,
}

impl MealService {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    pub fn list_dishes(&self, site: HotelSite) -> AppResult<Vec<Dish>> {
        ensure_operating(site)?;
        Ok(self.store.read_or_default(&StorageKey::Dishes(site)))
    }

    pub fn add_dish(&self, site: HotelSite, payload: DishCreate) -> AppResult<Dish> {
        ensure_operating(site)?;
        let dish = Dish {
            id: new_id(),
            name: require_text("name", &payload.name)?,
            description: payload.description.trim().to_string(),
            price: payload.price,
            category: payload.category,
        };
        self.store
            .update(&StorageKey::Dishes(site), |dishes: &mut Vec<Dish>| {
                dishes.push(dish.clone());
                Ok(())
            })?;
        Ok(dish)
    }

    pub fn planning(&self, site: HotelSite) -> AppResult<Vec<DailyPlan>> {
        ensure_operating(site)?;
        Ok(self.store.read_or_default(&StorageKey::Planning(site)))
    }

    /// Upsert the plan for one day and meal
    pub fn set_plan(&self, site: HotelSite, payload: PlanUpdate) -> AppResult<DailyPlan> {
        let dishes = self.list_dishes(site)?;
        let dish = dishes
            .iter()
            .find(|d| d.id == payload.dish_id)
            .ok_or_else(|| AppError::new(ErrorCode::DishNotFound).with_detail("id", payload.dish_id.as_str()))?;
        if dish.category != payload.category {
            return Err(AppError::new(ErrorCode::DishCategoryMismatch)
                .with_detail("dish", dish.name.as_str()));
        }

        self.store
            .update(&StorageKey::Planning(site), |plans: &mut Vec<DailyPlan>| {
                let existing = plans
                    .iter_mut()
                    .find(|p| p.day == payload.day && p.category == payload.category);
                let plan = match existing {
                    Some(plan) => {
                        plan.main_dish_id = payload.dish_id.clone();
                        plan.alternatives = payload.alternatives.clone();
                        plan.clone()
                    }
                    None => {
                        let plan = DailyPlan {
                            id: new_id(),
                            day: payload.day,
                            category: payload.category,
                            main_dish_id: payload.dish_id.clone(),
                            alternatives: payload.alternatives.clone(),
                        };
                        plans.push(plan.clone());
                        plan
                    }
                };
                Ok(plan)
            })
    }

    /// Planned dishes for a day, in meal order
    pub fn menu_for(&self, site: HotelSite, day: PlanDay) -> AppResult<Vec<MenuEntry>> {
        let dishes = self.list_dishes(site)?;
        let mut plans: Vec<DailyPlan> = self
            .planning(site)?
            .into_iter()
            .filter(|p| p.day == day)
            .collect();
        plans.sort_by_key(|p| p.category);

        Ok(plans
            .into_iter()
            .map(|plan| MenuEntry {
                category: plan.category,
                dish_name: dishes
                    .iter()
                    .find(|d| d.id == plan.main_dish_id)
                    .map(|d| d.name.clone())
                    .unwrap_or_else(|| MISSING_DISH.to_string()),
            })
            .collect())
    }

    pub fn dishes_in(&self, site: HotelSite, category: MealCategory) -> AppResult<Vec<Dish>> {
        Ok(self
            .list_dishes(site)?
            .into_iter()
            .filter(|d| d.category == category)
            .collect())
    }
}
