//! Meal and beverage vouchers

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    BEVERAGES, HotelSite, MealVoucher, VoucherDailySummary, VoucherIssue, VoucherKind,
    VoucherStatus,
};
use shared::util::{clock_suffix, now_millis};

use super::{ApartmentService, ensure_operating};
use crate::storage::{LocalStore, StorageKey};
use crate::utils::time::{business_date, today};

#[derive(Clone)]
pub struct VoucherService {
    store: LocalStore,
    apartments: ApartmentService,
    tz: Tz,
}

impl VoucherService {
    pub fn new(store: LocalStore, apartments: ApartmentService, tz: Tz) -> Self {
        Self {
            store,
            apartments,
            tz,
        }
    }

    pub fn list(&self, site: HotelSite) -> AppResult<Vec<MealVoucher>> {
        ensure_operating(site)?;
        Ok(self.store.read_or_default(&StorageKey::Vouchers(site)))
    }

    /// Issue a voucher to the client of an occupied apartment
    pub fn issue(&self, site: HotelSite, payload: VoucherIssue) -> AppResult<MealVoucher> {
        let apartment = self.apartments.occupied(site, &payload.apartment_id)?;

        let meal_type = match payload.kind {
            VoucherKind::Meal => Some(
                payload
                    .meal_type
                    .ok_or_else(|| AppError::new(ErrorCode::MealTypeRequired))?,
            ),
            VoucherKind::Beverage => None,
        };
        let beverages = match payload.kind {
            VoucherKind::Meal => Vec::new(),
            VoucherKind::Beverage => {
                if payload.beverages.is_empty() {
                    return Err(AppError::required("beverages"));
                }
                if let Some(unknown) = payload
                    .beverages
                    .iter()
                    .find(|b| !BEVERAGES.contains(&b.as_str()))
                {
                    return Err(AppError::new(ErrorCode::UnknownBeverage)
                        .with_detail("beverage", unknown.as_str()));
                }
                payload.beverages
            }
        };

        let now = Utc::now();
        let voucher = MealVoucher {
            id: format!("{}{}", payload.kind.prefix(), clock_suffix(now_millis())),
            kind: payload.kind,
            client_name: apartment.current_client.clone().unwrap_or_default(),
            apartment_number: apartment.display_number(),
            meal_type,
            beverages,
            status: VoucherStatus::Valid,
            date: business_date(now, self.tz),
            timestamp: now,
        };
        self.store
            .update(&StorageKey::Vouchers(site), |list: &mut Vec<MealVoucher>| {
                list.insert(0, voucher.clone());
                Ok(())
            })?;
        tracing::info!(site = %site, voucher = %voucher.id, apartment = %voucher.apartment_number, "Voucher issued");
        Ok(voucher)
    }

    pub fn consume(&self, site: HotelSite, id: &str) -> AppResult<MealVoucher> {
        self.transition(site, id, VoucherStatus::Consumed)
    }

    pub fn cancel(&self, site: HotelSite, id: &str) -> AppResult<MealVoucher> {
        self.transition(site, id, VoucherStatus::Cancelled)
    }

    /// Vouchers issued on a business day
    pub fn daily(&self, site: HotelSite, date: NaiveDate) -> AppResult<Vec<MealVoucher>> {
        Ok(self
            .list(site)?
            .into_iter()
            .filter(|v| v.date == date)
            .collect())
    }

    pub fn daily_summary(&self, site: HotelSite, date: NaiveDate) -> AppResult<VoucherDailySummary> {
        let vouchers = self.daily(site, date)?;
        let count = |status: VoucherStatus| vouchers.iter().filter(|v| v.status == status).count();
        Ok(VoucherDailySummary {
            valid: count(VoucherStatus::Valid),
            consumed: count(VoucherStatus::Consumed),
        })
    }

    pub fn today(&self) -> NaiveDate {
        today(self.tz)
    }

    // Only a valid voucher moves
    fn transition(&self, site: HotelSite, id: &str, to: VoucherStatus) -> AppResult<MealVoucher> {
        ensure_operating(site)?;
        self.store
            .update(&StorageKey::Vouchers(site), |list: &mut Vec<MealVoucher>| {
                let voucher = list.iter_mut().find(|v| v.id == id).ok_or_else(|| {
                    AppError::new(ErrorCode::VoucherNotFound).with_detail("id", id)
                })?;
                if voucher.status != VoucherStatus::Valid {
                    return Err(AppError::new(ErrorCode::VoucherNotValid)
                        .with_detail("id", id)
                        .with_detail("status", format!("{:?}", voucher.status)));
                }
                voucher.status = to;
                Ok(voucher.clone())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DEFAULT_TIMEZONE;
    use crate::services::testing;
    use shared::models::{AccommodationType, ApartmentCreate, CheckIn, MealCategory};

    struct Fixture {
        vouchers: VoucherService,
        occupied: String,
        free: String,
    }

    fn fixture() -> Fixture {
        let store = testing::store();
        let apartments = ApartmentService::new(store.clone());
        let mut ids = Vec::new();
        for number in ["1", "2"] {
            let apt = apartments
                .add(
                    HotelSite::Fnideq,
                    ApartmentCreate {
                        residence_name: "Résidence Fnideq".into(),
                        block: Some("B".into()),
                        number: number.into(),
                        kind: None,
                        capacity: 2,
                    },
                )
                .unwrap();
            ids.push(apt.id);
        }
        apartments
            .check_in(
                HotelSite::Fnideq,
                &ids[0],
                CheckIn {
                    client_name: "Karim".into(),
                    accommodation_type: AccommodationType::Double,
                },
            )
            .unwrap();
        Fixture {
            vouchers: VoucherService::new(store, apartments, DEFAULT_TIMEZONE),
            occupied: ids[0].clone(),
            free: ids[1].clone(),
        }
    }

    fn meal(apartment_id: &str, meal_type: Option<MealCategory>) -> VoucherIssue {
        VoucherIssue {
            kind: VoucherKind::Meal,
            apartment_id: apartment_id.into(),
            meal_type,
            beverages: vec![],
        }
    }

    fn drinks(apartment_id: &str, beverages: &[&str]) -> VoucherIssue {
        VoucherIssue {
            kind: VoucherKind::Beverage,
            apartment_id: apartment_id.into(),
            meal_type: None,
            beverages: beverages.iter().map(|b| b.to_string()).collect(),
        }
    }

    #[test]
    fn meal_voucher_copies_stay_details() {
        let f = fixture();
        let v = f
            .vouchers
            .issue(HotelSite::Fnideq, meal(&f.occupied, Some(MealCategory::Lunch)))
            .unwrap();
        assert!(v.id.starts_with('R'));
        assert_eq!(v.id.len(), 7);
        assert_eq!(v.client_name, "Karim");
        assert_eq!(v.apartment_number, "B1");
        assert_eq!(v.status, VoucherStatus::Valid);
        assert_eq!(v.date, f.vouchers.today());
    }

    #[test]
    fn issue_rules() {
        let f = fixture();
        let err = f
            .vouchers
            .issue(HotelSite::Fnideq, meal(&f.free, Some(MealCategory::Dinner)))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ApartmentNotOccupied);

        let err = f.vouchers.issue(HotelSite::Fnideq, meal(&f.occupied, None)).unwrap_err();
        assert_eq!(err.code, ErrorCode::MealTypeRequired);

        let err = f
            .vouchers
            .issue(HotelSite::Fnideq, drinks(&f.occupied, &["Thé", "Champagne"]))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownBeverage);

        let v = f
            .vouchers
            .issue(HotelSite::Fnideq, drinks(&f.occupied, &["Thé", "Jus"]))
            .unwrap();
        assert!(v.id.starts_with('B'));
        assert_eq!(v.meal_type, None);
        assert_eq!(v.beverages, vec!["Thé", "Jus"]);
    }

    #[test]
    fn consume_and_cancel_only_from_valid() {
        let f = fixture();
        let a = f
            .vouchers
            .issue(HotelSite::Fnideq, meal(&f.occupied, Some(MealCategory::Breakfast)))
            .unwrap();
        let consumed = f.vouchers.consume(HotelSite::Fnideq, &a.id).unwrap();
        assert_eq!(consumed.status, VoucherStatus::Consumed);
        assert_eq!(
            f.vouchers.consume(HotelSite::Fnideq, &a.id).unwrap_err().code,
            ErrorCode::VoucherNotValid
        );
        assert_eq!(
            f.vouchers.cancel(HotelSite::Fnideq, &a.id).unwrap_err().code,
            ErrorCode::VoucherNotValid
        );
        assert_eq!(
            f.vouchers.consume(HotelSite::Fnideq, "R000000").unwrap_err().code,
            ErrorCode::VoucherNotFound
        );
    }

    #[test]
    fn daily_summary_counts_today() {
        let f = fixture();
        let first = f
            .vouchers
            .issue(HotelSite::Fnideq, meal(&f.occupied, Some(MealCategory::Lunch)))
            .unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));
        f.vouchers
            .issue(HotelSite::Fnideq, drinks(&f.occupied, &["Eau"]))
            .unwrap();
        f.vouchers.consume(HotelSite::Fnideq, &first.id).unwrap();

        let today = f.vouchers.today();
        let summary = f.vouchers.daily_summary(HotelSite::Fnideq, today).unwrap();
        assert_eq!(summary, VoucherDailySummary { valid: 1, consumed: 1 });

        let yesterday = today.pred_opt().unwrap();
        assert!(f.vouchers.daily(HotelSite::Fnideq, yesterday).unwrap().is_empty());
    }
}
