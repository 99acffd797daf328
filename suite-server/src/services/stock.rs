//! Stock catalog and chef commands

use chrono::Utc;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    ChefCommand, ChefCommandCreate, CommandStatus, DEFAULT_MIN_THRESHOLD, HotelSite, StockItem,
    StockItemCreate,
};
use shared::util::new_id;

use super::{ensure_operating, require_text};
use crate::storage::{LocalStore, StorageKey};

#[derive(Clone)]
pub struct StockService {
    store: LocalStore,
}

impl StockService {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    pub fn list_items(&self, site: HotelSite) -> AppResult<Vec<StockItem>> {
        ensure_operating(site)?;
        Ok(self.store.read_or_default(&StorageKey::StockItems(site)))
    }

    /// Add a catalog item; quantity starts at zero
    pub fn add_item(&self, site: HotelSite, payload: StockItemCreate) -> AppResult<StockItem> {
        ensure_operating(site)?;
        let name = require_text("name", &payload.name)?;
        if payload.unit_price <= Decimal::ZERO {
            return Err(AppError::new(ErrorCode::StockInvalidPrice));
        }
        let min_threshold = payload
            .min_threshold
            .unwrap_or_else(|| Decimal::from(DEFAULT_MIN_THRESHOLD));
        if min_threshold < Decimal::ZERO {
            return Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                "Threshold cannot be negative",
            ));
        }

        let item = StockItem {
            id: new_id(),
            name,
            category: payload.category,
            quantity: Decimal::ZERO,
            unit: payload.unit,
            unit_price: payload.unit_price,
            min_threshold,
        };
        self.store
            .update(&StorageKey::StockItems(site), |items: &mut Vec<StockItem>| {
                items.push(item.clone());
                Ok(())
            })?;
        tracing::info!(site = %site, item = %item.name, "Stock item added");
        Ok(item)
    }

    /// Apply a signed delta; the result never drops below zero
    pub fn adjust(&self, site: HotelSite, item_id: &str, delta: Decimal) -> AppResult<StockItem> {
        ensure_operating(site)?;
        self.store
            .update(&StorageKey::StockItems(site), |items: &mut Vec<StockItem>| {
                let item = items
                    .iter_mut()
                    .find(|i| i.id == item_id)
                    .ok_or_else(|| item_not_found(item_id))?;
                item.quantity = (item.quantity + delta).max(Decimal::ZERO);
                Ok(item.clone())
            })
    }

    /// Items at or below their threshold
    pub fn critical_items(&self, site: HotelSite) -> AppResult<Vec<StockItem>> {
        Ok(self
            .list_items(site)?
            .into_iter()
            .filter(StockItem::is_critical)
            .collect())
    }

    pub fn list_commands(&self, site: HotelSite) -> AppResult<Vec<ChefCommand>> {
        ensure_operating(site)?;
        Ok(self.store.read_or_default(&StorageKey::StockCommands(site)))
    }

    /// Kitchen request, newest first
    pub fn create_command(
        &self,
        site: HotelSite,
        payload: ChefCommandCreate,
    ) -> AppResult<ChefCommand> {
        ensure_operating(site)?;
        if payload.quantity <= Decimal::ZERO {
            return Err(AppError::new(ErrorCode::StockInvalidQuantity));
        }
        let item = self
            .list_items(site)?
            .into_iter()
            .find(|i| i.id == payload.product_id)
            .ok_or_else(|| item_not_found(&payload.product_id))?;

        let command = ChefCommand {
            id: new_id(),
            product_id: item.id,
            product_name: item.name,
            quantity: payload.quantity,
            unit: item.unit,
            status: CommandStatus::Pending,
            timestamp: Utc::now(),
        };
        self.store
            .update(&StorageKey::StockCommands(site), |commands: &mut Vec<ChefCommand>| {
                commands.insert(0, command.clone());
                Ok(())
            })?;
        tracing::info!(site = %site, product = %command.product_name, "Chef command created");
        Ok(command)
    }

    pub fn mark_delivered(&self, site: HotelSite, command_id: &str) -> AppResult<ChefCommand> {
        ensure_operating(site)?;
        self.store
            .update(&StorageKey::StockCommands(site), |commands: &mut Vec<ChefCommand>| {
                let command = commands
                    .iter_mut()
                    .find(|c| c.id == command_id)
                    .ok_or_else(|| {
                        AppError::new(ErrorCode::StockCommandNotFound).with_detail("id", command_id)
                    })?;
                if command.status == CommandStatus::Delivered {
                    return Err(AppError::new(ErrorCode::StockCommandAlreadyDelivered));
                }
                command.status = CommandStatus::Delivered;
                Ok(command.clone())
            })
    }

    pub fn pending_commands(&self, site: HotelSite) -> AppResult<usize> {
        Ok(self
            .list_commands(site)?
            .iter()
            .filter(|c| c.status == CommandStatus::Pending)
            .count())
    }
}

fn item_not_found(id: &str) -> AppError {
    AppError::new(ErrorCode::StockItemNotFound).with_detail("id", id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing;
    use shared::models::{StockCategory, StockUnit};

    fn service() -> StockService {
        StockService::new(testing::store())
    }

    fn create(name: &str, price: i64) -> StockItemCreate {
        StockItemCreate {
            name: name.into(),
            category: StockCategory::Grocery,
            unit: StockUnit::Kg,
            unit_price: Decimal::from(price),
            min_threshold: None,
        }
    }

    #[test]
    fn add_item_defaults() {
        let svc = service();
        let item = svc.add_item(HotelSite::Fnideq, create("Riz", 12)).unwrap();
        assert_eq!(item.quantity, Decimal::ZERO);
        assert_eq!(item.min_threshold, Decimal::from(5));
        assert_eq!(svc.list_items(HotelSite::Fnideq).unwrap().len(), 1);
        assert!(svc.list_items(HotelSite::Mdiq).unwrap().is_empty());
    }

    #[test]
    fn add_item_validation() {
        let svc = service();
        assert_eq!(
            svc.add_item(HotelSite::Fnideq, create("  ", 12)).unwrap_err().code,
            ErrorCode::RequiredField
        );
        assert_eq!(
            svc.add_item(HotelSite::Fnideq, create("Riz", 0)).unwrap_err().code,
            ErrorCode::StockInvalidPrice
        );
        assert_eq!(
            svc.add_item(HotelSite::HeadOffice, create("Riz", 3)).unwrap_err().code,
            ErrorCode::SiteNotOperational
        );
    }

    #[test]
    fn adjust_clamps_at_zero() {
        let svc = service();
        let item = svc.add_item(HotelSite::Fnideq, create("Huile", 20)).unwrap();
        let up = svc.adjust(HotelSite::Fnideq, &item.id, Decimal::from(10)).unwrap();
        assert_eq!(up.quantity, Decimal::from(10));
        let down = svc.adjust(HotelSite::Fnideq, &item.id, Decimal::from(-25)).unwrap();
        assert_eq!(down.quantity, Decimal::ZERO);
        assert_eq!(
            svc.adjust(HotelSite::Fnideq, "missing", Decimal::ONE).unwrap_err().code,
            ErrorCode::StockItemNotFound
        );
    }

    #[test]
    fn critical_items_include_threshold() {
        let svc = service();
        let a = svc.add_item(HotelSite::Mdiq, create("Sucre", 8)).unwrap();
        let b = svc.add_item(HotelSite::Mdiq, create("Farine", 6)).unwrap();
        svc.adjust(HotelSite::Mdiq, &a.id, Decimal::from(5)).unwrap();
        svc.adjust(HotelSite::Mdiq, &b.id, Decimal::from(6)).unwrap();

        let critical = svc.critical_items(HotelSite::Mdiq).unwrap();
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].name, "Sucre");
    }

    #[test]
    fn commands_newest_first_and_delivery() {
        let svc = service();
        let item = svc.add_item(HotelSite::Fnideq, create("Tomates", 4)).unwrap();
        let first = svc
            .create_command(
                HotelSite::Fnideq,
                ChefCommandCreate {
                    product_id: item.id.clone(),
                    quantity: Decimal::from(3),
                },
            )
            .unwrap();
        let second = svc
            .create_command(
                HotelSite::Fnideq,
                ChefCommandCreate {
                    product_id: item.id.clone(),
                    quantity: Decimal::ONE,
                },
            )
            .unwrap();
        assert_eq!(first.product_name, "Tomates");
        assert_eq!(first.status, CommandStatus::Pending);

        let commands = svc.list_commands(HotelSite::Fnideq).unwrap();
        assert_eq!(commands[0].id, second.id);
        assert_eq!(svc.pending_commands(HotelSite::Fnideq).unwrap(), 2);

        let delivered = svc.mark_delivered(HotelSite::Fnideq, &first.id).unwrap();
        assert_eq!(delivered.status, CommandStatus::Delivered);
        assert_eq!(svc.pending_commands(HotelSite::Fnideq).unwrap(), 1);
        assert_eq!(
            svc.mark_delivered(HotelSite::Fnideq, &first.id).unwrap_err().code,
            ErrorCode::StockCommandAlreadyDelivered
        );
    }

    #[test]
    fn command_validation() {
        let svc = service();
        let item = svc.add_item(HotelSite::Fnideq, create("Lait", 7)).unwrap();
        let zero = ChefCommandCreate {
            product_id: item.id,
            quantity: Decimal::ZERO,
        };
        assert_eq!(
            svc.create_command(HotelSite::Fnideq, zero).unwrap_err().code,
            ErrorCode::StockInvalidQuantity
        );
        let unknown = ChefCommandCreate {
            product_id: "nope".into(),
            quantity: Decimal::ONE,
        };
        assert_eq!(
            svc.create_command(HotelSite::Fnideq, unknown).unwrap_err().code,
            ErrorCode::StockItemNotFound
        );
    }
}
