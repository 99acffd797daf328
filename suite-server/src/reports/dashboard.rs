use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use shared::error::AppResult;
use shared::models::{
    DAILY_BUDGET_PER_CLIENT, DashboardSnapshot, HotelSite, LaundryPulse, LaundryStatus,
    PerformanceIndex, PerformanceStatus, PlanDay, StaffPresence, VoucherStatus,
};

use super::{ReportService, voucher_stats};

impl ReportService {
    pub fn dashboard(&self, site: HotelSite) -> AppResult<DashboardSnapshot> {
        self.dashboard_on(site, self.today())
    }

    /// Snapshot for a given business day
    pub fn dashboard_on(&self, site: HotelSite, date: NaiveDate) -> AppResult<DashboardSnapshot> {
        let total_clients: u32 = self
            .apartments
            .list(site)?
            .iter()
            .map(|a| a.current_occupants_count)
            .sum();

        let consumed: Vec<_> = self
            .vouchers
            .daily(site, date)?
            .into_iter()
            .filter(|v| v.status == VoucherStatus::Consumed)
            .collect();

        let (present, absent) = self.staff.presence_on(site, date)?;

        Ok(DashboardSnapshot {
            site,
            date,
            total_clients,
            performance: self.performance(site, date, total_clients)?,
            vouchers: voucher_stats(&consumed),
            staff: StaffPresence { present, absent },
            laundry: LaundryPulse {
                pending: self.laundry.count_by_status(site, LaundryStatus::Pending)?,
                in_wash: self.laundry.count_by_status(site, LaundryStatus::InWash)?,
                ready: self.laundry.count_by_status(site, LaundryStatus::AtReception)?,
            },
            critical_stock: self.stock.critical_items(site)?,
            pending_commands: self.stock.pending_commands(site)?,
            menu: self.meals.menu_for(site, PlanDay::from(date.weekday()))?,
        })
    }

    /// Budget is 150 per hosted client; expenses are the day's exits
    pub fn performance(
        &self,
        site: HotelSite,
        date: NaiveDate,
        total_clients: u32,
    ) -> AppResult<PerformanceIndex> {
        let budget = Decimal::from(total_clients) * Decimal::from(DAILY_BUDGET_PER_CLIENT);
        let expenses = self.cash.expenses_on(site, date)?;
        let score = budget - expenses;
        Ok(PerformanceIndex {
            budget,
            expenses,
            score,
            status: PerformanceStatus::from_score(score),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::reports::testing::reports;
    use rust_decimal::Decimal;
    use shared::models::*;

    #[test]
    fn empty_site_is_neutral() {
        let reports = reports();
        let snap = reports.dashboard(HotelSite::Mdiq).unwrap();
        assert_eq!(snap.total_clients, 0);
        assert_eq!(snap.performance.status, PerformanceStatus::Neutral);
        assert_eq!(snap.vouchers, VoucherStats::default());
        assert!(snap.menu.is_empty());
    }

    #[test]
    fn snapshot_aggregates_the_day() {
        let reports = reports();
        let site = HotelSite::Fnideq;

        let apt = reports
            .apartments
            .add(
                site,
                ApartmentCreate {
                    residence_name: "Résidence Fnideq".into(),
                    block: None,
                    number: "3".into(),
                    kind: None,
                    capacity: 4,
                },
            )
            .unwrap();
        reports
            .apartments
            .check_in(
                site,
                &apt.id,
                CheckIn {
                    client_name: "Famille Idrissi".into(),
                    accommodation_type: AccommodationType::Triple,
                },
            )
            .unwrap();

        let lunch = reports
            .vouchers
            .issue(
                site,
                VoucherIssue {
                    kind: VoucherKind::Meal,
                    apartment_id: apt.id.clone(),
                    meal_type: Some(MealCategory::Lunch),
                    beverages: vec![],
                },
            )
            .unwrap();
        reports.vouchers.consume(site, &lunch.id).unwrap();

        reports
            .cash
            .record(
                site,
                CashRecord {
                    kind: CashKind::Exit,
                    amount: Decimal::from(600),
                    description: "Marché".into(),
                    category: None,
                },
            )
            .unwrap();

        reports
            .laundry
            .create(
                site,
                LaundryCreate {
                    apartment_id: apt.id.clone(),
                    items: "Draps".into(),
                },
            )
            .unwrap();

        reports
            .stock
            .add_item(
                site,
                StockItemCreate {
                    name: "Riz".into(),
                    category: StockCategory::Grocery,
                    unit: StockUnit::Kg,
                    unit_price: Decimal::from(12),
                    min_threshold: None,
                },
            )
            .unwrap();

        let snap = reports.dashboard(site).unwrap();
        assert_eq!(snap.total_clients, 3);
        assert_eq!(snap.performance.budget, Decimal::from(450));
        assert_eq!(snap.performance.expenses, Decimal::from(600));
        assert_eq!(snap.performance.score, Decimal::from(-150));
        assert_eq!(snap.performance.status, PerformanceStatus::Bad);
        assert_eq!(snap.vouchers.lunch, 1);
        assert_eq!(snap.laundry.pending, 1);
        assert_eq!(snap.critical_stock.len(), 1);
        assert_eq!(snap.pending_commands, 0);
    }
}
