//! Storage key namespace

use shared::models::HotelSite;
use std::fmt;

/// Every key the node reads or writes
///
/// Per-site keys embed the site slug so sites never share records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Session,
    Users,
    ActivityLogs,
    InternalMessages,
    StockItems(HotelSite),
    StockCommands(HotelSite),
    Dishes(HotelSite),
    Planning(HotelSite),
    Vouchers(HotelSite),
    Apartments(HotelSite),
    Laundry(HotelSite),
    Staff(HotelSite),
    Cash(HotelSite),
}

impl StorageKey {
    /// All per-site keys for one site
    pub fn for_site(site: HotelSite) -> [StorageKey; 9] {
        [
            Self::StockItems(site),
            Self::StockCommands(site),
            Self::Dishes(site),
            Self::Planning(site),
            Self::Vouchers(site),
            Self::Apartments(site),
            Self::Laundry(site),
            Self::Staff(site),
            Self::Cash(site),
        ]
    }

    pub fn site(&self) -> Option<HotelSite> {
        match self {
            Self::Session | Self::Users | Self::ActivityLogs | Self::InternalMessages => None,
            Self::StockItems(s)
            | Self::StockCommands(s)
            | Self::Dishes(s)
            | Self::Planning(s)
            | Self::Vouchers(s)
            | Self::Apartments(s)
            | Self::Laundry(s)
            | Self::Staff(s)
            | Self::Cash(s) => Some(*s),
        }
    }

    fn prefix(&self) -> &'static str {
        match self {
            Self::Session => "samia_suite_session",
            Self::Users => "samia_users_db",
            Self::ActivityLogs => "samia_activity_logs",
            Self::InternalMessages => "samia_internal_messages",
            Self::StockItems(_) => "samia_stock_items",
            Self::StockCommands(_) => "samia_stock_commands",
            Self::Dishes(_) => "samia_dishes",
            Self::Planning(_) => "samia_planning",
            Self::Vouchers(_) => "samia_vouchers",
            Self::Apartments(_) => "samia_apartments",
            Self::Laundry(_) => "samia_blanchisserie",
            Self::Staff(_) => "samia_staff",
            Self::Cash(_) => "samia_cash",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.site() {
            Some(site) => write!(f, "{}_{}", self.prefix(), site.slug()),
            None => f.write_str(self.prefix()),
        }
    }
}
