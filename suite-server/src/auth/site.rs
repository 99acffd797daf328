//! Site access rules

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{HotelSite, User, UserRole};

/// Whether `user` may act on `site`
///
/// The Boss works on every operating site; everyone else only on their own.
pub fn can_access(user: &User, site: HotelSite) -> bool {
    site.is_operating() && (user.role == UserRole::Boss || user.site == site)
}

pub fn ensure_site_access(user: &User, site: HotelSite) -> AppResult<()> {
    if !site.is_operating() {
        return Err(AppError::new(ErrorCode::SiteNotOperational).with_detail("site", site.label()));
    }
    if !can_access(user, site) {
        return Err(AppError::site_denied(site.label()));
    }
    Ok(())
}

/// Site a freshly logged-in operator lands on
pub fn default_site(user: &User) -> HotelSite {
    if user.site.is_operating() {
        user.site
    } else {
        HotelSite::OPERATING[0]
    }
}
