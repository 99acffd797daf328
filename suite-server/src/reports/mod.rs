//! Read-only aggregates over the per-site records
//!
//! Nothing here writes; every figure is recomputed from the stored arrays on
//! each call.

mod dashboard;
mod notifications;
mod report;

use chrono::NaiveDate;
use chrono_tz::Tz;
use shared::models::{MealCategory, MealVoucher, VoucherKind, VoucherStats};

use crate::services::{
    ApartmentService, CashService, LaundryService, MealService, StaffService, StockService,
    VoucherService,
};
use crate::utils::time::today;

#[derive(Clone)]
pub struct ReportService {
    stock: StockService,
    meals: MealService,
    vouchers: VoucherService,
    apartments: ApartmentService,
    laundry: LaundryService,
    staff: StaffService,
    cash: CashService,
    tz: Tz,
}

impl ReportService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        stock: StockService,
        meals: MealService,
        vouchers: VoucherService,
        apartments: ApartmentService,
        laundry: LaundryService,
        staff: StaffService,
        cash: CashService,
        tz: Tz,
    ) -> Self {
        Self {
            stock,
            meals,
            vouchers,
            apartments,
            laundry,
            staff,
            cash,
            tz,
        }
    }

    /// Current business date
    pub fn today(&self) -> NaiveDate {
        today(self.tz)
    }
}

/// Count vouchers per meal type; beverage vouchers are counted apart
pub(crate) fn voucher_stats<'a>(vouchers: impl IntoIterator<Item = &'a MealVoucher>) -> VoucherStats {
    let mut stats = VoucherStats::default();
    for voucher in vouchers {
        if voucher.kind == VoucherKind::Beverage {
            stats.beverages += 1;
            continue;
        }
        match voucher.meal_type {
            Some(MealCategory::Breakfast) => stats.breakfast += 1,
            Some(MealCategory::Lunch) => stats.lunch += 1,
            Some(MealCategory::Snack) => stats.snack += 1,
            Some(MealCategory::Dinner) => stats.dinner += 1,
            None => {}
        }
    }
    stats
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::core::config::DEFAULT_TIMEZONE;
    use crate::services::testing::store;

    pub fn reports() -> ReportService {
        let store = store();
        let tz = DEFAULT_TIMEZONE;
        let apartments = ApartmentService::new(store.clone());
        ReportService::new(
            StockService::new(store.clone()),
            MealService::new(store.clone()),
            VoucherService::new(store.clone(), apartments.clone(), tz),
            apartments.clone(),
            LaundryService::new(store.clone(), apartments),
            StaffService::new(store.clone(), tz),
            CashService::new(store, tz),
            tz,
        )
    }
}
