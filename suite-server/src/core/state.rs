use std::sync::Arc;

use tokio::sync::broadcast;

use crate::auth::{ActivityLog, SessionManager, UserDirectory};
use crate::core::{Config, Result};
use crate::reports::ReportService;
use crate::services::{
    ApartmentService, CashService, LaundryService, MealService, MessageService, StaffService,
    StockService, VoucherService,
};
use crate::storage::{
    DurableStore, KeyValueStore, LocalStore, MemoryStore, StorageArea, StorageEvent,
};

/// Capacity of the storage event channel; slow listeners skip ahead
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Shared services
///
/// Every field is a cheap handle; cloning the state shares the underlying
/// stores.
///
/// | Field | Backing |
/// |-------|---------|
/// | durable | redb file under `work_dir/database` |
/// | tab | in-process map, cleared on restart |
/// | directory, activity, messages | durable, global keys |
/// | per-site services | durable, site-namespaced keys |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub durable: LocalStore,
    pub tab: LocalStore,
    pub events: broadcast::Sender<StorageEvent>,
    pub directory: UserDirectory,
    pub activity: ActivityLog,
    pub sessions: SessionManager,
    pub messages: MessageService,
    pub stock: StockService,
    pub meals: MealService,
    pub vouchers: VoucherService,
    pub apartments: ApartmentService,
    pub laundry: LaundryService,
    pub staff: StaffService,
    pub cash: CashService,
    pub reports: ReportService,
}

impl ServerState {
    /// Wire every service over the given durable backend
    pub fn new(config: Config, durable_backend: Arc<dyn KeyValueStore>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let durable = LocalStore::new(StorageArea::Durable, durable_backend, events.clone());
        let tab = LocalStore::new(StorageArea::Tab, Arc::new(MemoryStore::new()), events.clone());

        let tz = config.timezone;
        let directory = UserDirectory::new(durable.clone());
        let activity = ActivityLog::new(durable.clone());
        let sessions = SessionManager::new(
            durable.clone(),
            tab.clone(),
            directory.clone(),
            activity.clone(),
        );

        let apartments = ApartmentService::new(durable.clone());
        let stock = StockService::new(durable.clone());
        let meals = MealService::new(durable.clone());
        let vouchers = VoucherService::new(durable.clone(), apartments.clone(), tz);
        let laundry = LaundryService::new(durable.clone(), apartments.clone());
        let staff = StaffService::new(durable.clone(), tz);
        let cash = CashService::new(durable.clone(), tz);
        let reports = ReportService::new(
            stock.clone(),
            meals.clone(),
            vouchers.clone(),
            apartments.clone(),
            laundry.clone(),
            staff.clone(),
            cash.clone(),
            tz,
        );

        Self {
            config,
            messages: MessageService::new(durable.clone()),
            durable,
            tab,
            events,
            directory,
            activity,
            sessions,
            stock,
            meals,
            vouchers,
            apartments,
            laundry,
            staff,
            cash,
            reports,
        }
    }

    /// Open the redb file and build the state
    ///
    /// Order:
    /// 1. work directory structure
    /// 2. database (`work_dir/database/suite.redb`)
    /// 3. services
    pub fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir_structure()?;

        let db_path = config.database_path();
        let backend = DurableStore::open(&db_path)?;
        tracing::info!(path = %db_path.display(), "Database opened");

        let state = Self::new(config.clone(), Arc::new(backend));
        // Seed the directory on first start
        let accounts = state.directory.entries().len();
        tracing::debug!(accounts, "Operator directory ready");
        Ok(state)
    }

    /// State over an in-memory redb, for tests and demos
    pub fn in_memory(config: Config) -> Result<Self> {
        let backend = DurableStore::open_in_memory()?;
        Ok(Self::new(config, Arc::new(backend)))
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StorageEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{StorageEventKind, StorageKey};
    use shared::models::HotelSite;

    #[test]
    fn stores_share_one_event_channel() {
        let state = ServerState::in_memory(Config::default()).unwrap();
        let mut rx = state.subscribe();

        state.tab.write(&StorageKey::Session, &"x").unwrap();
        state
            .durable
            .write(&StorageKey::Cash(HotelSite::Mdiq), &Vec::<u8>::new())
            .unwrap();

        let first = rx.try_recv().unwrap();
        assert_eq!(first.area, StorageArea::Tab);
        assert_eq!(first.kind, StorageEventKind::Set);
        assert_eq!(rx.try_recv().unwrap().area, StorageArea::Durable);
    }

    #[test]
    fn initialize_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_overrides(dir.path().to_string_lossy(), 0);
        let state = ServerState::initialize(&config).unwrap();
        assert!(config.database_path().exists());
        assert_eq!(state.directory.users().len(), 16);
    }
}
