//! Operator directory
//!
//! One JSON object under [`StorageKey::Users`], keyed by login identifier.
//! Every mutation rewrites the whole object.

use std::collections::BTreeMap;

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{HotelSite, User, UserCreate, UserRecord, UserRole};

use crate::storage::{LocalStore, StorageKey};

/// Identifier of the protected Boss account
pub const BOSS_IDENTIFIER: &str = "1";

pub type Directory = BTreeMap<String, UserRecord>;

#[derive(Clone)]
pub struct UserDirectory {
    store: LocalStore,
}

impl UserDirectory {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// Current directory, re-seeded when empty or unreadable
    pub fn entries(&self) -> Directory {
        match self.store.read::<Directory>(&StorageKey::Users) {
            Some(users) if !users.is_empty() => users,
            _ => {
                let seed = seed_directory();
                if let Err(e) = self.store.write(&StorageKey::Users, &seed) {
                    tracing::warn!(error = %e, "Failed to persist seeded directory");
                }
                seed
            }
        }
    }

    pub fn get(&self, identifier: &str) -> Option<UserRecord> {
        self.entries().remove(identifier)
    }

    /// Operators without their passwords
    pub fn users(&self) -> Vec<User> {
        self.entries().into_values().map(|r| r.user).collect()
    }

    /// Insert or replace an entry
    pub fn add_user(&self, payload: UserCreate) -> AppResult<User> {
        let email = payload.email.trim().to_string();
        let name = payload.name.trim().to_string();
        if email.is_empty() {
            return Err(AppError::required("email"));
        }
        if name.is_empty() {
            return Err(AppError::required("name"));
        }
        if payload.password.is_empty() {
            return Err(AppError::required("password"));
        }

        let user = User {
            email: email.clone(),
            name,
            role: payload.role,
            site: payload.site,
        };
        let record = UserRecord {
            user: user.clone(),
            password: payload.password,
        };

        self.mutate(|users| {
            users.insert(email, record);
            Ok(())
        })?;
        Ok(user)
    }

    pub fn delete_user(&self, identifier: &str) -> AppResult<()> {
        if identifier == BOSS_IDENTIFIER {
            return Err(AppError::new(ErrorCode::CannotDeleteAdmin));
        }
        self.mutate(|users| match users.remove(identifier) {
            Some(_) => Ok(()),
            None => Err(AppError::new(ErrorCode::UserNotFound).with_detail("email", identifier)),
        })
    }

    pub fn update_password(&self, identifier: &str, password: &str) -> AppResult<()> {
        if password.is_empty() {
            return Err(AppError::required("password"));
        }
        self.mutate(|users| {
            let record = users.get_mut(identifier).ok_or_else(|| {
                AppError::new(ErrorCode::UserNotFound).with_detail("email", identifier)
            })?;
            record.password = password.to_string();
            Ok(())
        })
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut Directory) -> AppResult<R>) -> AppResult<R> {
        self.store.update(&StorageKey::Users, |users: &mut Directory| {
            if users.is_empty() {
                *users = seed_directory();
            }
            f(users)
        })
    }
}

fn record(email: &str, name: &str, role: UserRole, site: HotelSite, password: &str) -> UserRecord {
    UserRecord {
        user: User {
            email: email.to_string(),
            name: name.to_string(),
            role,
            site,
        },
        password: password.to_string(),
    }
}

/// Initial operators: the Boss plus one account per role on every site
pub fn seed_directory() -> Directory {
    let mut users = Directory::new();
    users.insert(
        BOSS_IDENTIFIER.to_string(),
        record(BOSS_IDENTIFIER, "Le Boss", UserRole::Boss, HotelSite::HeadOffice, "1"),
    );

    for site in HotelSite::OPERATING {
        let Some(n) = site.number() else { continue };
        let short = match site {
            HotelSite::AlHoceima => "Hoceima",
            other => other.label(),
        };
        let accounts = [
            ("G", format!("Gérant {short}"), UserRole::Manager),
            ("Ch", format!("Chef {short}"), UserRole::HeadChef),
            ("M", format!("Magasinier {short}"), UserRole::Storekeeper),
            ("C", format!("Caissier {short}"), UserRole::Cashier),
            ("R", format!("Réception {short}"), UserRole::Receptionist),
        ];
        for (prefix, name, role) in accounts {
            let email = format!("{prefix}{n}");
            // Chef Hoceima historically uses "3"
            let password = if email == "Ch3" { "3" } else { "1" };
            users.insert(email.clone(), record(&email, &name, role, site, password));
        }
    }
    users
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, StorageArea};
    use std::sync::Arc;
    use tokio::sync::broadcast;

    fn directory() -> (UserDirectory, LocalStore) {
        let (tx, _) = broadcast::channel(16);
        let store = LocalStore::new(StorageArea::Durable, Arc::new(MemoryStore::new()), tx);
        (UserDirectory::new(store.clone()), store)
    }

    #[test]
    fn seed_has_sixteen_accounts() {
        let seed = seed_directory();
        assert_eq!(seed.len(), 16);
        assert_eq!(seed["1"].user.role, UserRole::Boss);
        assert_eq!(seed["1"].user.site, HotelSite::HeadOffice);
        assert_eq!(seed["G2"].user.name, "Gérant M'diq");
        assert_eq!(seed["R3"].user.name, "Réception Hoceima");
        assert_eq!(seed["R3"].user.site, HotelSite::AlHoceima);
        assert_eq!(seed["Ch3"].password, "3");
        assert_eq!(seed["Ch1"].password, "1");
    }

    #[test]
    fn empty_directory_is_reseeded_and_persisted() {
        let (dir, store) = directory();
        store.write(&StorageKey::Users, &Directory::new()).unwrap();

        assert_eq!(dir.entries().len(), 16);
        let persisted: Directory = store.read(&StorageKey::Users).unwrap();
        assert_eq!(persisted.len(), 16);
    }

    #[test]
    fn add_user_upserts() {
        let (dir, _) = directory();
        let payload = UserCreate {
            email: "C4".into(),
            name: "Caissier Bis".into(),
            role: UserRole::Cashier,
            site: HotelSite::Fnideq,
            password: "secret".into(),
        };
        dir.add_user(payload.clone()).unwrap();
        assert_eq!(dir.entries().len(), 17);

        dir.add_user(UserCreate {
            name: "Caissier Ter".into(),
            ..payload
        })
        .unwrap();
        assert_eq!(dir.entries().len(), 17);
        assert_eq!(dir.get("C4").unwrap().user.name, "Caissier Ter");
    }

    #[test]
    fn add_user_requires_fields() {
        let (dir, _) = directory();
        let err = dir
            .add_user(UserCreate {
                email: " ".into(),
                name: "X".into(),
                role: UserRole::Cashier,
                site: HotelSite::Fnideq,
                password: "1".into(),
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
    }

    #[test]
    fn boss_cannot_be_deleted() {
        let (dir, _) = directory();
        let err = dir.delete_user(BOSS_IDENTIFIER).unwrap_err();
        assert_eq!(err.code, ErrorCode::CannotDeleteAdmin);
        assert!(dir.get(BOSS_IDENTIFIER).is_some());
    }

    #[test]
    fn delete_and_update_password() {
        let (dir, _) = directory();
        dir.delete_user("M2").unwrap();
        assert!(dir.get("M2").is_none());
        assert_eq!(
            dir.delete_user("M2").unwrap_err().code,
            ErrorCode::UserNotFound
        );

        dir.update_password("G1", "nouveau").unwrap();
        assert_eq!(dir.get("G1").unwrap().password, "nouveau");
        assert_eq!(
            dir.update_password("nobody", "x").unwrap_err().code,
            ErrorCode::UserNotFound
        );
    }
}
