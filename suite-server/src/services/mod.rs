//! Per-site operations
//!
//! Every service reads and rewrites whole per-site arrays through a
//! [`LocalStore`](crate::storage::LocalStore). Site access is checked by the
//! caller (see [`SiteScope`](crate::auth::SiteScope)); services only refuse
//! the head office, which holds no records.

pub mod apartments;
pub mod cash;
pub mod laundry;
pub mod meals;
pub mod messages;
pub mod staff;
pub mod stock;
pub mod vouchers;

pub use apartments::ApartmentService;
pub use cash::CashService;
pub use laundry::LaundryService;
pub use meals::MealService;
pub use messages::MessageService;
pub use staff::StaffService;
pub use stock::StockService;
pub use vouchers::VoucherService;

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::HotelSite;

use crate::utils::validation;

pub(crate) fn ensure_operating(site: HotelSite) -> AppResult<()> {
    if site.is_operating() {
        Ok(())
    } else {
        Err(AppError::new(ErrorCode::SiteNotOperational).with_detail("site", site.label()))
    }
}

/// Required name-like field, trimmed
pub(crate) fn require_text(field: &str, value: &str) -> AppResult<String> {
    validation::required_text(value, field, validation::MAX_NAME_LEN)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use tokio::sync::broadcast;

    use crate::storage::{DurableStore, LocalStore, StorageArea};

    /// Durable store on an in-memory redb
    pub fn store() -> LocalStore {
        let (tx, _) = broadcast::channel(64);
        let backend = DurableStore::open_in_memory().expect("in-memory redb");
        LocalStore::new(StorageArea::Durable, Arc::new(backend), tx)
    }
}
