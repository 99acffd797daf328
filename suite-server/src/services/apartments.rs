//! Apartments: inventory, stays and housekeeping states

use chrono::Utc;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    Apartment, ApartmentCreate, ApartmentHistory, ApartmentStatus, ApartmentType, CheckIn,
    HotelSite,
};
use shared::util::new_id;

use super::{ensure_operating, require_text};
use crate::storage::{LocalStore, StorageKey};
use crate::utils::validation;

const DEFAULT_BLOCK: &str = "A";
const CAPACITIES: [u8; 2] = [2, 4];

/// Residences run by each site
pub fn residences(site: HotelSite) -> &'static [&'static str] {
    match site {
        HotelSite::Fnideq => &["Résidence Fnideq", "Bouzaghlal"],
        HotelSite::Mdiq => &["Résidence M'diq"],
        HotelSite::AlHoceima => &["Résidence Al Hoceima"],
        HotelSite::HeadOffice => &[],
    }
}

#[derive(Clone)]
pub struct ApartmentService {
    store: LocalStore,
}

impl ApartmentService {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    pub fn list(&self, site: HotelSite) -> AppResult<Vec<Apartment>> {
        ensure_operating(site)?;
        Ok(self.store.read_or_default(&StorageKey::Apartments(site)))
    }

    pub fn get(&self, site: HotelSite, id: &str) -> AppResult<Apartment> {
        self.list(site)?
            .into_iter()
            .find(|a| a.id == id)
            .ok_or_else(|| apartment_not_found(id))
    }

    /// Apartment currently hosting a client
    pub fn occupied(&self, site: HotelSite, id: &str) -> AppResult<Apartment> {
        let apartment = self.get(site, id)?;
        if apartment.status != ApartmentStatus::Occupied || apartment.current_client.is_none() {
            return Err(AppError::new(ErrorCode::ApartmentNotOccupied)
                .with_detail("apartment", apartment.display_number()));
        }
        Ok(apartment)
    }

    pub fn add(&self, site: HotelSite, payload: ApartmentCreate) -> AppResult<Apartment> {
        ensure_operating(site)?;
        let number = validation::required_text(&payload.number, "number", validation::MAX_SHORT_TEXT_LEN)?;
        let residence_name = payload.residence_name.trim();
        if !residences(site).contains(&residence_name) {
            return Err(AppError::new(ErrorCode::ResidenceNotFound)
                .with_detail("residence", residence_name)
                .with_detail("site", site.label()));
        }
        if !CAPACITIES.contains(&payload.capacity) {
            return Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                "Capacity must be 2 or 4",
            )
            .with_detail("capacity", payload.capacity));
        }
        let block = payload
            .block
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .unwrap_or(DEFAULT_BLOCK)
            .to_string();

        let apartment = Apartment {
            id: new_id(),
            residence_name: residence_name.to_string(),
            block,
            number,
            kind: payload.kind.unwrap_or(ApartmentType::Suite),
            capacity: payload.capacity,
            status: ApartmentStatus::Free,
            current_client: None,
            current_occupants_count: 0,
            accommodation_type: None,
            check_in_date: None,
            history: Vec::new(),
        };
        self.store
            .update(&StorageKey::Apartments(site), |list: &mut Vec<Apartment>| {
                list.push(apartment.clone());
                Ok(())
            })?;
        tracing::info!(site = %site, apartment = %apartment.display_number(), "Apartment added");
        Ok(apartment)
    }

    pub fn check_in(&self, site: HotelSite, id: &str, payload: CheckIn) -> AppResult<Apartment> {
        ensure_operating(site)?;
        let client = require_text("client_name", &payload.client_name)?;
        let occupants = payload.accommodation_type.occupant_count();

        self.modify(site, id, |apartment| {
            if apartment.status != ApartmentStatus::Free {
                return Err(AppError::new(ErrorCode::ApartmentNotAvailable)
                    .with_detail("apartment", apartment.display_number()));
            }
            if occupants > apartment.capacity {
                return Err(AppError::new(ErrorCode::ApartmentCapacityExceeded)
                    .with_detail("capacity", apartment.capacity)
                    .with_detail("occupants", occupants));
            }
            apartment.status = ApartmentStatus::Occupied;
            apartment.current_client = Some(client);
            apartment.current_occupants_count = u32::from(occupants);
            apartment.accommodation_type = Some(payload.accommodation_type);
            apartment.check_in_date = Some(Utc::now());
            Ok(())
        })
    }

    /// Close the stay and send the apartment to housekeeping
    pub fn check_out(&self, site: HotelSite, id: &str) -> AppResult<Apartment> {
        ensure_operating(site)?;
        self.modify(site, id, |apartment| {
            let client = match (apartment.status, apartment.current_client.take()) {
                (ApartmentStatus::Occupied, Some(client)) => client,
                _ => {
                    return Err(AppError::new(ErrorCode::ApartmentNotOccupied)
                        .with_detail("apartment", apartment.display_number()));
                }
            };
            let now = Utc::now();
            let stay = ApartmentHistory {
                id: new_id(),
                client_name: client,
                check_in_date: apartment.check_in_date.take().unwrap_or(now),
                check_out_date: now,
                occupant_count: u8::try_from(apartment.current_occupants_count).unwrap_or(u8::MAX),
                accommodation_type: apartment
                    .accommodation_type
                    .take()
                    .map(|t| t.label().to_string())
                    .unwrap_or_default(),
            };
            apartment.history.insert(0, stay);
            apartment.current_occupants_count = 0;
            apartment.status = ApartmentStatus::Cleaning;
            Ok(())
        })
    }

    pub fn mark_ready(&self, site: HotelSite, id: &str) -> AppResult<Apartment> {
        ensure_operating(site)?;
        self.modify(site, id, |apartment| {
            if apartment.status != ApartmentStatus::Cleaning {
                return Err(AppError::new(ErrorCode::ApartmentNotInCleaning)
                    .with_detail("apartment", apartment.display_number()));
            }
            apartment.status = ApartmentStatus::Free;
            Ok(())
        })
    }

    /// Take a free apartment out of service, or put it back
    pub fn set_maintenance(&self, site: HotelSite, id: &str, on: bool) -> AppResult<Apartment> {
        ensure_operating(site)?;
        self.modify(site, id, |apartment| {
            match (on, apartment.status) {
                (true, ApartmentStatus::Free | ApartmentStatus::Cleaning) => {
                    apartment.status = ApartmentStatus::Maintenance;
                }
                (true, ApartmentStatus::Maintenance) => {}
                (true, ApartmentStatus::Occupied) => {
                    return Err(AppError::new(ErrorCode::ApartmentNotAvailable)
                        .with_detail("apartment", apartment.display_number()));
                }
                (false, ApartmentStatus::Maintenance) => apartment.status = ApartmentStatus::Free,
                (false, _) => {}
            }
            Ok(())
        })
    }

    fn modify<F>(&self, site: HotelSite, id: &str, f: F) -> AppResult<Apartment>
    where
        F: FnOnce(&mut Apartment) -> AppResult<()>,
    {
        self.store
            .update(&StorageKey::Apartments(site), |list: &mut Vec<Apartment>| {
                let apartment = list
                    .iter_mut()
                    .find(|a| a.id == id)
                    .ok_or_else(|| apartment_not_found(id))?;
                f(apartment)?;
                Ok(apartment.clone())
            })
    }
}

fn apartment_not_found(id: &str) -> AppError {
    AppError::new(ErrorCode::ApartmentNotFound).with_detail("id", id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing;
    use shared::models::AccommodationType;

    fn create(residence: &str, capacity: u8) -> ApartmentCreate {
        ApartmentCreate {
            residence_name: residence.into(),
            block: None,
            number: "12".into(),
            kind: None,
            capacity,
        }
    }

    fn check_in(client: &str, accommodation_type: AccommodationType) -> CheckIn {
        CheckIn {
            client_name: client.into(),
            accommodation_type,
        }
    }

    #[test]
    fn add_applies_defaults_and_checks_residence() {
        let svc = ApartmentService::new(testing::store());
        let apt = svc.add(HotelSite::Fnideq, create("Bouzaghlal", 4)).unwrap();
        assert_eq!(apt.block, "A");
        assert_eq!(apt.display_number(), "A12");
        assert_eq!(apt.kind, ApartmentType::Suite);
        assert_eq!(apt.status, ApartmentStatus::Free);

        let err = svc.add(HotelSite::Mdiq, create("Bouzaghlal", 4)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ResidenceNotFound);

        let err = svc.add(HotelSite::Fnideq, create("Bouzaghlal", 3)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);

        let mut blank = create("Bouzaghlal", 2);
        blank.number = "  ".into();
        assert_eq!(
            svc.add(HotelSite::Fnideq, blank).unwrap_err().code,
            ErrorCode::RequiredField
        );
    }

    #[test]
    fn stay_lifecycle() {
        let svc = ApartmentService::new(testing::store());
        let apt = svc.add(HotelSite::Mdiq, create("Résidence M'diq", 2)).unwrap();

        let err = svc
            .check_in(HotelSite::Mdiq, &apt.id, check_in("Alami", AccommodationType::Triple))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ApartmentCapacityExceeded);

        let occupied = svc
            .check_in(HotelSite::Mdiq, &apt.id, check_in("Alami", AccommodationType::Double))
            .unwrap();
        assert_eq!(occupied.status, ApartmentStatus::Occupied);
        assert_eq!(occupied.current_occupants_count, 2);

        let err = svc
            .check_in(HotelSite::Mdiq, &apt.id, check_in("Bennani", AccommodationType::Single))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ApartmentNotAvailable);

        let cleaning = svc.check_out(HotelSite::Mdiq, &apt.id).unwrap();
        assert_eq!(cleaning.status, ApartmentStatus::Cleaning);
        assert_eq!(cleaning.current_client, None);
        assert_eq!(cleaning.current_occupants_count, 0);
        assert_eq!(cleaning.history.len(), 1);
        assert_eq!(cleaning.history[0].client_name, "Alami");
        assert_eq!(cleaning.history[0].accommodation_type, "1/2 Double");

        let free = svc.mark_ready(HotelSite::Mdiq, &apt.id).unwrap();
        assert_eq!(free.status, ApartmentStatus::Free);
        assert_eq!(
            svc.mark_ready(HotelSite::Mdiq, &apt.id).unwrap_err().code,
            ErrorCode::ApartmentNotInCleaning
        );
    }

    #[test]
    fn history_is_newest_first() {
        let svc = ApartmentService::new(testing::store());
        let apt = svc.add(HotelSite::AlHoceima, create("Résidence Al Hoceima", 4)).unwrap();
        for client in ["First", "Second"] {
            svc.check_in(HotelSite::AlHoceima, &apt.id, check_in(client, AccommodationType::Single))
                .unwrap();
            svc.check_out(HotelSite::AlHoceima, &apt.id).unwrap();
            svc.mark_ready(HotelSite::AlHoceima, &apt.id).unwrap();
        }
        let apt = svc.get(HotelSite::AlHoceima, &apt.id).unwrap();
        assert_eq!(apt.history[0].client_name, "Second");
        assert_eq!(apt.history[1].client_name, "First");
    }

    #[test]
    fn check_out_requires_a_stay() {
        let svc = ApartmentService::new(testing::store());
        let apt = svc.add(HotelSite::Mdiq, create("Résidence M'diq", 2)).unwrap();
        assert_eq!(
            svc.check_out(HotelSite::Mdiq, &apt.id).unwrap_err().code,
            ErrorCode::ApartmentNotOccupied
        );
        assert_eq!(
            svc.check_out(HotelSite::Mdiq, "missing").unwrap_err().code,
            ErrorCode::ApartmentNotFound
        );
    }

    #[test]
    fn maintenance_toggle() {
        let svc = ApartmentService::new(testing::store());
        let apt = svc.add(HotelSite::Mdiq, create("Résidence M'diq", 2)).unwrap();
        let apt = svc.set_maintenance(HotelSite::Mdiq, &apt.id, true).unwrap();
        assert_eq!(apt.status, ApartmentStatus::Maintenance);
        assert_eq!(
            svc.check_in(HotelSite::Mdiq, &apt.id, check_in("X", AccommodationType::Single))
                .unwrap_err()
                .code,
            ErrorCode::ApartmentNotAvailable
        );
        let apt = svc.set_maintenance(HotelSite::Mdiq, &apt.id, false).unwrap();
        assert_eq!(apt.status, ApartmentStatus::Free);
    }

    #[test]
    fn head_office_has_no_apartments() {
        let svc = ApartmentService::new(testing::store());
        assert!(residences(HotelSite::HeadOffice).is_empty());
        assert_eq!(
            svc.list(HotelSite::HeadOffice).unwrap_err().code,
            ErrorCode::SiteNotOperational
        );
    }
}
