use rust_decimal::Decimal;
use shared::error::AppResult;
use shared::models::{ApartmentStatus, HotelSite, SiteReport};

use super::{ReportService, voucher_stats};

impl ReportService {
    /// Management report for one site
    pub fn site_report(&self, site: HotelSite) -> AppResult<SiteReport> {
        let payroll = self.staff.payroll(site)?;
        let staff_cost: Decimal = payroll.iter().map(|l| l.net_salary).sum();

        let stock_value: Decimal = self
            .stock
            .list_items(site)?
            .iter()
            .map(|i| i.value())
            .sum();

        let apartments = self.apartments.list(site)?;
        let occupied = apartments
            .iter()
            .filter(|a| a.status == ApartmentStatus::Occupied)
            .count();
        let occupancy_rate = if apartments.is_empty() {
            Decimal::ZERO
        } else {
            (Decimal::from(occupied) * Decimal::ONE_HUNDRED / Decimal::from(apartments.len()))
                .round_dp(1)
        };

        Ok(SiteReport {
            site,
            staff_cost,
            cash_balance: self.cash.summary(site)?.balance,
            stock_value,
            occupancy_rate,
            vouchers: voucher_stats(&self.vouchers.list(site)?),
            payroll,
        })
    }
}
