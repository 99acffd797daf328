//! Sites, roles and operator accounts

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hotel site (établissement)
///
/// The three operating sites each own their own records. The head office is
/// the Boss's home site and holds none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HotelSite {
    Fnideq,
    #[serde(rename = "M'diq")]
    Mdiq,
    #[serde(rename = "Al Hoceima")]
    AlHoceima,
    #[serde(rename = "Siège Social")]
    HeadOffice,
}

impl HotelSite {
    /// Sites that hold operational records
    pub const OPERATING: [HotelSite; 3] = [HotelSite::Fnideq, HotelSite::Mdiq, HotelSite::AlHoceima];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Fnideq => "Fnideq",
            Self::Mdiq => "M'diq",
            Self::AlHoceima => "Al Hoceima",
            Self::HeadOffice => "Siège Social",
        }
    }

    /// URL and storage key segment
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Fnideq => "fnideq",
            Self::Mdiq => "mdiq",
            Self::AlHoceima => "al-hoceima",
            Self::HeadOffice => "siege-social",
        }
    }

    /// Number used in seeded identifiers (`G1`, `Ch2`, ...)
    pub fn number(&self) -> Option<u8> {
        match self {
            Self::Fnideq => Some(1),
            Self::Mdiq => Some(2),
            Self::AlHoceima => Some(3),
            Self::HeadOffice => None,
        }
    }

    pub fn is_operating(&self) -> bool {
        !matches!(self, Self::HeadOffice)
    }
}

impl fmt::Display for HotelSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unknown site name or slug
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSite(pub String);

impl fmt::Display for UnknownSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown site: {}", self.0)
    }
}

impl std::error::Error for UnknownSite {}

impl FromStr for HotelSite {
    type Err = UnknownSite;

    /// Accepts either the slug or the display label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Fnideq, Self::Mdiq, Self::AlHoceima, Self::HeadOffice]
            .into_iter()
            .find(|site| site.slug().eq_ignore_ascii_case(s) || site.label() == s)
            .ok_or_else(|| UnknownSite(s.to_string()))
    }
}

/// Operator role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    Boss,
    #[serde(rename = "Gérant")]
    Manager,
    #[serde(rename = "Chef de Cuisine")]
    HeadChef,
    #[serde(rename = "Magasinier")]
    Storekeeper,
    #[serde(rename = "Caissier")]
    Cashier,
    #[serde(rename = "Réceptionniste")]
    Receptionist,
}

impl UserRole {
    pub const ALL: [UserRole; 6] = [
        UserRole::Boss,
        UserRole::Manager,
        UserRole::HeadChef,
        UserRole::Storekeeper,
        UserRole::Cashier,
        UserRole::Receptionist,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Boss => "Boss",
            Self::Manager => "Gérant",
            Self::HeadChef => "Chef de Cuisine",
            Self::Storekeeper => "Magasinier",
            Self::Cashier => "Caissier",
            Self::Receptionist => "Réceptionniste",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Operator identity, as carried by a session
///
/// `email` is the login identifier (`1`, `G1`, `Ch2`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub site: HotelSite,
}

/// Directory entry: identity plus password
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(flatten)]
    pub user: User,
    pub password: String,
}

/// Create (or replace) a directory entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub site: HotelSite,
    pub password: String,
}

/// Password change payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordUpdate {
    pub password: String,
}

/// Login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
    pub role: UserRole,
    #[serde(default)]
    pub stay_connected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_wire_names() {
        assert_eq!(serde_json::to_string(&HotelSite::Mdiq).unwrap(), "\"M'diq\"");
        assert_eq!(
            serde_json::to_string(&HotelSite::HeadOffice).unwrap(),
            "\"Siège Social\""
        );
        let site: HotelSite = serde_json::from_str("\"Al Hoceima\"").unwrap();
        assert_eq!(site, HotelSite::AlHoceima);
    }

    #[test]
    fn site_from_slug_or_label() {
        assert_eq!("fnideq".parse::<HotelSite>().unwrap(), HotelSite::Fnideq);
        assert_eq!("M'diq".parse::<HotelSite>().unwrap(), HotelSite::Mdiq);
        assert_eq!("al-hoceima".parse::<HotelSite>().unwrap(), HotelSite::AlHoceima);
        assert!("tanger".parse::<HotelSite>().is_err());
    }

    #[test]
    fn role_wire_names() {
        assert_eq!(
            serde_json::to_string(&UserRole::HeadChef).unwrap(),
            "\"Chef de Cuisine\""
        );
        let role: UserRole = serde_json::from_str("\"Réceptionniste\"").unwrap();
        assert_eq!(role, UserRole::Receptionist);
    }

    #[test]
    fn user_record_flattens_identity() {
        let record = UserRecord {
            user: User {
                email: "G1".into(),
                name: "Gérant Fnideq".into(),
                role: UserRole::Manager,
                site: HotelSite::Fnideq,
            },
            password: "1".into(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["email"], "G1");
        assert_eq!(json["role"], "Gérant");
        assert_eq!(json["password"], "1");
    }
}
