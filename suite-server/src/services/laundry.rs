//! Laundry requests

use chrono::Utc;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{HotelSite, LaundryCreate, LaundryRequest, LaundryStatus};
use shared::util::new_id;

use super::{ApartmentService, ensure_operating};
use crate::storage::{LocalStore, StorageKey};
use crate::utils::validation;

#[derive(Clone)]
pub struct LaundryService {
    store: LocalStore,
    apartments: ApartmentService,
}

impl LaundryService {
    pub fn new(store: LocalStore, apartments: ApartmentService) -> Self {
        Self { store, apartments }
    }

    pub fn list(&self, site: HotelSite) -> AppResult<Vec<LaundryRequest>> {
        ensure_operating(site)?;
        Ok(self.store.read_or_default(&StorageKey::Laundry(site)))
    }

    pub fn create(&self, site: HotelSite, payload: LaundryCreate) -> AppResult<LaundryRequest> {
        let items = validation::required_text(&payload.items, "items", validation::MAX_NOTE_LEN)?;
        let apartment = self.apartments.occupied(site, &payload.apartment_id)?;
        let now = Utc::now();
        let request = LaundryRequest {
            id: new_id(),
            client_name: apartment.current_client.clone().unwrap_or_default(),
            apartment_id: apartment.id.clone(),
            apartment_number: apartment.display_number(),
            items,
            status: LaundryStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        self.store
            .update(&StorageKey::Laundry(site), |list: &mut Vec<LaundryRequest>| {
                list.insert(0, request.clone());
                Ok(())
            })?;
        Ok(request)
    }

    /// Move a request one step along the workflow
    pub fn advance(&self, site: HotelSite, id: &str) -> AppResult<LaundryRequest> {
        ensure_operating(site)?;
        self.store
            .update(&StorageKey::Laundry(site), |list: &mut Vec<LaundryRequest>| {
                let request = list.iter_mut().find(|r| r.id == id).ok_or_else(|| {
                    AppError::new(ErrorCode::LaundryRequestNotFound).with_detail("id", id)
                })?;
                request.status = request.status.next().ok_or_else(|| {
                    AppError::new(ErrorCode::LaundryAlreadyDelivered).with_detail("id", id)
                })?;
                request.updated_at = Utc::now();
                Ok(request.clone())
            })
    }

    pub fn count_by_status(&self, site: HotelSite, status: LaundryStatus) -> AppResult<usize> {
        Ok(self
            .list(site)?
            .iter()
            .filter(|r| r.status == status)
            .count())
    }
}
