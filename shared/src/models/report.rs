//! Dashboard and report aggregates

use super::{HotelSite, MenuEntry, PayrollLine, StockItem};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Business-day price per client used by the performance index
pub const DAILY_BUDGET_PER_CLIENT: i64 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceStatus {
    Good,
    Neutral,
    Bad,
}

impl PerformanceStatus {
    pub fn from_score(score: Decimal) -> Self {
        if score > Decimal::ZERO {
            Self::Good
        } else if score.is_zero() {
            Self::Neutral
        } else {
            Self::Bad
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceIndex {
    #[serde(with = "rust_decimal::serde::float")]
    pub budget: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub expenses: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub score: Decimal,
    pub status: PerformanceStatus,
}

/// Voucher counts per meal plus beverage vouchers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoucherStats {
    pub breakfast: usize,
    pub lunch: usize,
    pub snack: usize,
    pub dinner: usize,
    pub beverages: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffPresence {
    pub present: usize,
    pub absent: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaundryPulse {
    pub pending: usize,
    pub in_wash: usize,
    pub ready: usize,
}

/// Live snapshot shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub site: HotelSite,
    pub date: NaiveDate,
    pub total_clients: u32,
    pub performance: PerformanceIndex,
    pub vouchers: VoucherStats,
    pub staff: StaffPresence,
    pub laundry: LaundryPulse,
    pub critical_stock: Vec<StockItem>,
    pub pending_commands: usize,
    pub menu: Vec<MenuEntry>,
}

/// Management report for one site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteReport {
    pub site: HotelSite,
    #[serde(with = "rust_decimal::serde::float")]
    pub staff_cost: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub cash_balance: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub stock_value: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub occupancy_rate: Decimal,
    pub vouchers: VoucherStats,
    pub payroll: Vec<PayrollLine>,
}
