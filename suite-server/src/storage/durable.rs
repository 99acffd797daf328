//! redb-backed store

use super::{KeyValueStore, StorageResult};
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::Arc;

/// key -> JSON bytes
const KV_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("kv");

/// Store that survives restarts
#[derive(Clone)]
pub struct DurableStore {
    db: Arc<Database>,
}

impl DurableStore {
    /// Open or create database
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open in-memory database (for testing)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db =
            Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(KV_TABLE)?;
        }
        write_txn.commit()?;
        Ok(Self { db: Arc::new(db) })
    }
}

impl KeyValueStore for DurableStore {
    fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(KV_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_vec()))
    }

    fn set(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(KV_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(KV_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(KV_TABLE)?;
        let mut keys = Vec::new();
        for entry in table.iter()? {
            let (key, _) = entry?;
            keys.push(key.value().to_string());
        }
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let store = DurableStore::open_in_memory().unwrap();
        assert!(store.get("a").unwrap().is_none());

        store.set("a", b"[1,2]").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some(&b"[1,2]"[..]));

        store.set("a", b"[3]").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some(&b"[3]"[..]));

        store.remove("a").unwrap();
        assert!(store.get("a").unwrap().is_none());
        store.remove("a").unwrap();
    }

    #[test]
    fn keys_are_sorted() {
        let store = DurableStore::open_in_memory().unwrap();
        store.set("samia_b", b"1").unwrap();
        store.set("samia_a", b"1").unwrap();
        assert_eq!(store.keys().unwrap(), vec!["samia_a", "samia_b"]);
    }

    #[test]
    fn reopen_keeps_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("suite.redb");
        {
            let store = DurableStore::open(&path).unwrap();
            store.set("samia_users_db", b"{}").unwrap();
        }
        let store = DurableStore::open(&path).unwrap();
        assert_eq!(
            store.get("samia_users_db").unwrap().as_deref(),
            Some(&b"{}"[..])
        );
    }
}
