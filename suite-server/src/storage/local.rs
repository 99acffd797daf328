//! JSON facade over a [`KeyValueStore`]

use super::{KeyValueStore, StorageKey, StorageResult};
use serde::{Serialize, de::DeserializeOwned};
use shared::error::{AppError, AppResult};
use std::sync::Arc;
use tokio::sync::broadcast;

/// Which store produced an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageArea {
    Durable,
    Tab,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageEventKind {
    Set,
    Removed,
}

/// Change notification for dashboards that cache records
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageEvent {
    pub area: StorageArea,
    pub key: String,
    pub kind: StorageEventKind,
}

/// Typed record store
///
/// Cheap to clone; clones share the backend and the event channel.
#[derive(Clone)]
pub struct LocalStore {
    area: StorageArea,
    backend: Arc<dyn KeyValueStore>,
    events: broadcast::Sender<StorageEvent>,
}

impl LocalStore {
    pub fn new(
        area: StorageArea,
        backend: Arc<dyn KeyValueStore>,
        events: broadcast::Sender<StorageEvent>,
    ) -> Self {
        Self {
            area,
            backend,
            events,
        }
    }

    pub fn area(&self) -> StorageArea {
        self.area
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StorageEvent> {
        self.events.subscribe()
    }

    /// Best-effort read
    ///
    /// Missing, empty, `undefined` and `null` values read as `None`. A value
    /// that fails to decode is removed.
    pub fn read<T: DeserializeOwned>(&self, key: &StorageKey) -> Option<T> {
        match self.try_read(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Storage read failed");
                None
            }
        }
    }

    /// Read that tells an unreadable record apart from a missing one
    ///
    /// A value that fails to decode is removed and reported as
    /// [`ErrorCode::StorageCorrupted`](shared::error::ErrorCode::StorageCorrupted).
    pub fn try_read<T: DeserializeOwned>(&self, key: &StorageKey) -> AppResult<Option<T>> {
        let key_str = key.to_string();
        let Some(bytes) = self.backend.get(&key_str)? else {
            return Ok(None);
        };

        let trimmed = bytes.trim_ascii();
        if trimmed.is_empty() || trimmed == b"undefined" || trimmed == b"null" {
            return Ok(None);
        }

        serde_json::from_slice(trimmed).map(Some).map_err(|e| {
            tracing::warn!(key = %key_str, error = %e, "Corrupted record, dropping key");
            if let Err(e) = self.remove(key) {
                tracing::warn!(key = %key_str, error = %e, "Failed to drop corrupted key");
            }
            AppError::corrupted(key_str.as_str())
        })
    }

    pub fn read_or_default<T: DeserializeOwned + Default>(&self, key: &StorageKey) -> T {
        self.read(key).unwrap_or_default()
    }

    pub fn write<T: Serialize + ?Sized>(&self, key: &StorageKey, value: &T) -> StorageResult<()> {
        let bytes = serde_json::to_vec(value)?;
        let key_str = key.to_string();
        self.backend.set(&key_str, &bytes)?;
        self.publish(key_str, StorageEventKind::Set);
        Ok(())
    }

    pub fn remove(&self, key: &StorageKey) -> StorageResult<()> {
        let key_str = key.to_string();
        self.backend.remove(&key_str)?;
        self.publish(key_str, StorageEventKind::Removed);
        Ok(())
    }

    /// Read-modify-write of one record
    ///
    /// Nothing is written when `f` fails. Concurrent writers on the same key
    /// race; the last write wins.
    pub fn update<T, R, F>(&self, key: &StorageKey, f: F) -> AppResult<R>
    where
        T: Serialize + DeserializeOwned + Default,
        F: FnOnce(&mut T) -> AppResult<R>,
    {
        let mut value: T = self.read_or_default(key);
        let out = f(&mut value)?;
        self.write(key, &value)?;
        Ok(out)
    }

    /// Raw keys currently held
    pub fn keys(&self) -> StorageResult<Vec<String>> {
        self.backend.keys()
    }

    fn publish(&self, key: String, kind: StorageEventKind) {
        // No subscriber is fine
        let _ = self.events.send(StorageEvent {
            area: self.area,
            key,
            kind,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DurableStore, MemoryStore};
    use shared::error::{AppError, ErrorCode};
    use shared::models::HotelSite;

    fn memory_store() -> LocalStore {
        let (tx, _) = broadcast::channel(16);
        LocalStore::new(StorageArea::Tab, Arc::new(MemoryStore::new()), tx)
    }

    #[test]
    fn missing_and_sentinel_values_read_as_none() {
        let store = memory_store();
        let key = StorageKey::Users;
        assert!(store.read::<Vec<u32>>(&key).is_none());

        for raw in [&b""[..], b"undefined", b"null", b"  "] {
            store.backend.set(&key.to_string(), raw).unwrap();
            assert!(store.read::<Vec<u32>>(&key).is_none());
        }
    }

    #[test]
    fn corrupted_value_is_dropped() {
        let store = memory_store();
        let key = StorageKey::Cash(HotelSite::Fnideq);
        store.backend.set(&key.to_string(), b"{not json").unwrap();

        assert!(store.read::<Vec<u32>>(&key).is_none());
        assert!(store.backend.get(&key.to_string()).unwrap().is_none());
    }

    #[test]
    fn try_read_reports_corruption() {
        let store = memory_store();
        let key = StorageKey::Session;
        assert!(store.try_read::<u32>(&key).unwrap().is_none());

        store.backend.set(&key.to_string(), b"{\"email\":").unwrap();
        let err = store.try_read::<u32>(&key).unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageCorrupted);
        assert!(store.backend.get(&key.to_string()).unwrap().is_none());
    }

    #[test]
    fn write_then_read() {
        let store = memory_store();
        let key = StorageKey::Staff(HotelSite::Mdiq);
        store.write(&key, &vec![1, 2, 3]).unwrap();
        assert_eq!(store.read::<Vec<i32>>(&key), Some(vec![1, 2, 3]));
        assert_eq!(
            store.read_or_default::<Vec<i32>>(&StorageKey::Cash(HotelSite::Mdiq)),
            Vec::<i32>::new()
        );
    }

    #[test]
    fn update_skips_write_on_error() {
        let store = memory_store();
        let key = StorageKey::Vouchers(HotelSite::Fnideq);
        store.write(&key, &vec![1]).unwrap();

        let result: AppResult<()> = store.update(&key, |v: &mut Vec<i32>| {
            v.push(2);
            Err(AppError::validation("nope"))
        });
        assert_eq!(result.unwrap_err().code, ErrorCode::ValidationFailed);
        assert_eq!(store.read::<Vec<i32>>(&key), Some(vec![1]));

        let len = store
            .update(&key, |v: &mut Vec<i32>| {
                v.insert(0, 0);
                Ok(v.len())
            })
            .unwrap();
        assert_eq!(len, 2);
        assert_eq!(store.read::<Vec<i32>>(&key), Some(vec![0, 1]));
    }

    #[test]
    fn writes_publish_events() {
        let (tx, _) = broadcast::channel(16);
        let store = LocalStore::new(
            StorageArea::Durable,
            Arc::new(DurableStore::open_in_memory().unwrap()),
            tx,
        );
        let mut rx = store.subscribe();
        let key = StorageKey::Apartments(HotelSite::AlHoceima);

        store.write(&key, &Vec::<i32>::new()).unwrap();
        store.remove(&key).unwrap();

        let set = rx.try_recv().unwrap();
        assert_eq!(set.area, StorageArea::Durable);
        assert_eq!(set.key, "samia_apartments_al-hoceima");
        assert_eq!(set.kind, StorageEventKind::Set);
        assert_eq!(rx.try_recv().unwrap().kind, StorageEventKind::Removed);
    }
}
