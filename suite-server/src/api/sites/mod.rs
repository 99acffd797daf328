//! Per-site routes
//!
//! Everything under `/api/sites/{site}` acts on one operating site. `{site}`
//! is a slug (`fnideq`, `mdiq`, `al-hoceima`) or a label; handlers resolve it
//! through [`SiteScope`](crate::auth::SiteScope), which also enforces site
//! access.
//!
//! | Prefix | Module |
//! |--------|--------|
//! | /stock | [`stock`] |
//! | /meals | [`meals`] |
//! | /vouchers | [`vouchers`] |
//! | /apartments | [`apartments`] |
//! | /laundry | [`laundry`] |
//! | /staff | [`staff`] |
//! | /cash | [`cash`] |
//! | /dashboard, /report, /notifications | [`reports`] |

pub mod apartments;
pub mod cash;
pub mod laundry;
pub mod meals;
pub mod reports;
pub mod staff;
pub mod stock;
pub mod vouchers;

use axum::Router;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/sites/{site}", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .nest("/stock", stock::router())
        .nest("/meals", meals::router())
        .nest("/vouchers", vouchers::router())
        .nest("/apartments", apartments::router())
        .nest("/laundry", laundry::router())
        .nest("/staff", staff::router())
        .nest("/cash", cash::router())
        .merge(reports::router())
}
