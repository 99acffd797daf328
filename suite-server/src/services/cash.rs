//! Cash register

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{CashKind, CashRecord, CashSummary, CashTransaction, HotelSite};
use shared::util::new_id;

use super::ensure_operating;
use crate::storage::{LocalStore, StorageKey};
use crate::utils::time::business_date;
use crate::utils::validation;

#[derive(Clone)]
pub struct CashService {
    store: LocalStore,
    tz: Tz,
}

impl CashService {
    pub fn new(store: LocalStore, tz: Tz) -> Self {
        Self { store, tz }
    }

    pub fn list(&self, site: HotelSite) -> AppResult<Vec<CashTransaction>> {
        ensure_operating(site)?;
        Ok(self.store.read_or_default(&StorageKey::Cash(site)))
    }

    pub fn record(&self, site: HotelSite, payload: CashRecord) -> AppResult<CashTransaction> {
        ensure_operating(site)?;
        if payload.amount <= Decimal::ZERO {
            return Err(AppError::new(ErrorCode::CashInvalidAmount)
                .with_detail("amount", payload.amount.to_string()));
        }
        let description =
            validation::required_text(&payload.description, "description", validation::MAX_NOTE_LEN)?;
        let category = payload
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(payload.kind.default_category())
            .to_string();

        let transaction = CashTransaction {
            id: new_id(),
            kind: payload.kind,
            amount: payload.amount,
            description,
            timestamp: Utc::now(),
            category,
        };
        self.store
            .update(&StorageKey::Cash(site), |list: &mut Vec<CashTransaction>| {
                list.insert(0, transaction.clone());
                Ok(())
            })?;
        tracing::info!(
            site = %site,
            kind = ?transaction.kind,
            amount = %transaction.amount,
            "Cash movement recorded"
        );
        Ok(transaction)
    }

    pub fn summary(&self, site: HotelSite) -> AppResult<CashSummary> {
        let list = self.list(site)?;
        let total = |kind: CashKind| -> Decimal {
            list.iter()
                .filter(|t| t.kind == kind)
                .map(|t| t.amount)
                .sum()
        };
        let total_entries = total(CashKind::Entry);
        let total_expenses = total(CashKind::Exit);
        Ok(CashSummary {
            total_entries,
            total_expenses,
            balance: total_entries - total_expenses,
        })
    }

    /// Sum of exits on a business day
    pub fn expenses_on(&self, site: HotelSite, date: NaiveDate) -> AppResult<Decimal> {
        Ok(self
            .list(site)?
            .iter()
            .filter(|t| t.kind == CashKind::Exit && business_date(t.timestamp, self.tz) == date)
            .map(|t| t.amount)
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DEFAULT_TIMEZONE;
    use crate::services::testing;
    use crate::utils::time::today;

    fn movement(kind: CashKind, amount: i64, category: Option<&str>) -> CashRecord {
        CashRecord {
            kind,
            amount: Decimal::from(amount),
            description: "test".into(),
            category: category.map(String::from),
        }
    }

    #[test]
    fn record_defaults_category_and_prepends() {
        let svc = CashService::new(testing::store(), DEFAULT_TIMEZONE);
        let entry = svc
            .record(HotelSite::Mdiq, movement(CashKind::Entry, 1000, None))
            .unwrap();
        assert_eq!(entry.category, "Fond");
        let exit = svc
            .record(HotelSite::Mdiq, movement(CashKind::Exit, 250, Some("Courses")))
            .unwrap();
        assert_eq!(exit.category, "Courses");

        let list = svc.list(HotelSite::Mdiq).unwrap();
        assert_eq!(list[0].id, exit.id);
        assert_eq!(list[1].id, entry.id);
    }

    #[test]
    fn amount_must_be_positive() {
        let svc = CashService::new(testing::store(), DEFAULT_TIMEZONE);
        for amount in [0, -10] {
            let err = svc
                .record(HotelSite::Mdiq, movement(CashKind::Exit, amount, None))
                .unwrap_err();
            assert_eq!(err.code, ErrorCode::CashInvalidAmount);
        }
        assert!(svc.list(HotelSite::Mdiq).unwrap().is_empty());
    }

    #[test]
    fn description_is_required() {
        let svc = CashService::new(testing::store(), DEFAULT_TIMEZONE);
        let mut blank = movement(CashKind::Exit, 100, None);
        blank.description = "   ".into();
        let err = svc.record(HotelSite::Fnideq, blank).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert!(svc.list(HotelSite::Fnideq).unwrap().is_empty());

        let mut padded = movement(CashKind::Exit, 100, None);
        padded.description = "  Gaz  ".into();
        assert_eq!(svc.record(HotelSite::Fnideq, padded).unwrap().description, "Gaz");
    }

    #[test]
    fn summary_and_daily_expenses() {
        let svc = CashService::new(testing::store(), DEFAULT_TIMEZONE);
        svc.record(HotelSite::Fnideq, movement(CashKind::Entry, 5000, None)).unwrap();
        svc.record(HotelSite::Fnideq, movement(CashKind::Exit, 1200, None)).unwrap();
        svc.record(HotelSite::Fnideq, movement(CashKind::Exit, 300, None)).unwrap();

        let summary = svc.summary(HotelSite::Fnideq).unwrap();
        assert_eq!(summary.total_entries, Decimal::from(5000));
        assert_eq!(summary.total_expenses, Decimal::from(1500));
        assert_eq!(summary.balance, Decimal::from(3500));

        let today = today(DEFAULT_TIMEZONE);
        assert_eq!(svc.expenses_on(HotelSite::Fnideq, today).unwrap(), Decimal::from(1500));
        assert_eq!(
            svc.expenses_on(HotelSite::Fnideq, today.pred_opt().unwrap()).unwrap(),
            Decimal::ZERO
        );
        // Other sites are untouched
        assert_eq!(svc.summary(HotelSite::Mdiq).unwrap(), CashSummary::default());
    }
}
