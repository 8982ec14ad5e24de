//! redb-based storage layer for the local catalog store
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `store` | fixed key | JSON bytes | Custom product collection + auth session |
//! | `media` | SHA-256 hex | raw bytes | Decoded inline image/brochure payloads |
//!
//! The `store` table mirrors the original client-side key-value store: the
//! whole custom product collection lives under [`CUSTOM_PRODUCTS_KEY`] and the
//! auth session under [`AUTH_SESSION_KEY`]. Inline payloads are decoded out of
//! their records and content-addressed in `media`, so the record JSON stays
//! small while the logical field keeps a resolvable URI.
//!
//! # Capacity
//!
//! The original store had a practical total-capacity ceiling (~5MB quota).
//! That contract is kept: every write computes the projected total size of
//! both tables inside the write transaction and aborts before commit when the
//! ceiling would be exceeded. An aborted write leaves the store byte-for-byte
//! unchanged.

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use thiserror::Error;

/// Table for the fixed-key JSON values
const STORE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("store");

/// Table for decoded inline payloads: key = SHA-256 hex digest, value = bytes
const MEDIA_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("media");

/// Fixed key of the custom product collection (one JSON array)
pub const CUSTOM_PRODUCTS_KEY: &str = "vkt_custom_products";

/// Fixed key of the auth session record (one JSON object)
pub const AUTH_SESSION_KEY: &str = "vkt_auth_session";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The write would exceed the capacity ceiling and was abandoned whole.
    #[error("Capacity exceeded: write needs {needed} bytes, ceiling is {capacity}")]
    CapacityExceeded { needed: u64, capacity: u64 },
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Catalog store backed by redb
///
/// redb commits are copy-on-write with an atomic pointer swap, so a write that
/// fails the capacity check (or the process dying mid-write) never leaves a
/// partial state behind.
#[derive(Clone)]
pub struct CatalogStorage {
    db: Arc<Database>,
    capacity_bytes: u64,
}

impl CatalogStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>, capacity_bytes: u64) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db, capacity_bytes)
    }

    /// Open an in-memory database (for testing and ephemeral sessions)
    pub fn open_in_memory(capacity_bytes: u64) -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db, capacity_bytes)
    }

    fn init(db: Database, capacity_bytes: u64) -> StorageResult<Self> {
        // Create tables up front so readers never race a missing table
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(STORE_TABLE)?;
            let _ = write_txn.open_table(MEDIA_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(db),
            capacity_bytes,
        })
    }

    /// Capacity ceiling this store was opened with
    pub fn capacity_bytes(&self) -> u64 {
        self.capacity_bytes
    }

    // ========== Fixed-key values ==========

    /// Read a fixed-key JSON value
    pub fn get_value(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(STORE_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_vec()))
    }

    /// Write a fixed-key JSON value, capacity-checked
    pub fn put_value(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        self.put_value_with_media(key, value, &[])
    }

    /// Write a fixed-key JSON value together with new media blobs, in one
    /// capacity-checked transaction.
    ///
    /// Blobs are keyed by their SHA-256 hex digest; re-inserting an existing
    /// digest is a no-op for the usage total. If the projected total exceeds
    /// the ceiling the transaction is aborted and nothing is persisted.
    pub fn put_value_with_media(
        &self,
        key: &str,
        value: &[u8],
        blobs: &[(String, Vec<u8>)],
    ) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        let projected = {
            let mut store = write_txn.open_table(STORE_TABLE)?;
            let mut media = write_txn.open_table(MEDIA_TABLE)?;
            store.insert(key, value)?;
            for (digest, bytes) in blobs {
                media.insert(digest.as_str(), bytes.as_slice())?;
            }
            table_bytes(&store)? + table_bytes(&media)?
        };

        if projected > self.capacity_bytes {
            write_txn.abort()?;
            return Err(StorageError::CapacityExceeded {
                needed: projected,
                capacity: self.capacity_bytes,
            });
        }

        write_txn.commit()?;
        Ok(())
    }

    /// Remove a fixed-key value
    pub fn remove_value(&self, key: &str) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut store = write_txn.open_table(STORE_TABLE)?;
            store.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    // ========== Media blobs ==========

    /// Read a media blob by SHA-256 hex digest
    pub fn get_media(&self, digest: &str) -> StorageResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(MEDIA_TABLE)?;
        Ok(table.get(digest)?.map(|guard| guard.value().to_vec()))
    }

    /// Delete every media blob whose digest is not in `live`.
    ///
    /// Returns the number of pruned blobs. Called after successful record
    /// writes/removals so replaced or deleted payloads do not count against
    /// the capacity ceiling forever.
    pub fn retain_media<F>(&self, live: F) -> StorageResult<usize>
    where
        F: Fn(&str) -> bool,
    {
        let write_txn = self.db.begin_write()?;
        let pruned = {
            let mut media = write_txn.open_table(MEDIA_TABLE)?;
            let mut dead = Vec::new();
            for entry in media.iter()? {
                let (key, _) = entry?;
                let digest = key.value().to_string();
                if !live(&digest) {
                    dead.push(digest);
                }
            }
            for digest in &dead {
                media.remove(digest.as_str())?;
            }
            dead.len()
        };
        write_txn.commit()?;
        Ok(pruned)
    }

    /// Current total size of both tables in bytes
    pub fn used_bytes(&self) -> StorageResult<u64> {
        let read_txn = self.db.begin_read()?;
        let store = read_txn.open_table(STORE_TABLE)?;
        let media = read_txn.open_table(MEDIA_TABLE)?;
        Ok(table_bytes(&store)? + table_bytes(&media)?)
    }
}

/// Sum of key + value byte lengths over a `&str -> &[u8]` table
fn table_bytes(table: &impl ReadableTable<&'static str, &'static [u8]>) -> StorageResult<u64> {
    let mut total = 0u64;
    for entry in table.iter()? {
        let (key, value) = entry?;
        total += (key.value().len() + value.value().len()) as u64;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_get_roundtrip() {
        let storage = CatalogStorage::open_in_memory(1024).unwrap();
        storage.put_value(CUSTOM_PRODUCTS_KEY, b"[]").unwrap();
        assert_eq!(
            storage.get_value(CUSTOM_PRODUCTS_KEY).unwrap(),
            Some(b"[]".to_vec())
        );
        assert_eq!(storage.get_value(AUTH_SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn capacity_exceeded_leaves_store_unchanged() {
        let storage = CatalogStorage::open_in_memory(128).unwrap();
        storage.put_value(CUSTOM_PRODUCTS_KEY, b"[]").unwrap();

        let oversized = vec![0u8; 4096];
        let err = storage
            .put_value_with_media(
                CUSTOM_PRODUCTS_KEY,
                b"[{}]",
                &[("deadbeef".to_string(), oversized)],
            )
            .unwrap_err();
        assert!(matches!(err, StorageError::CapacityExceeded { .. }));

        // The aborted transaction must not have touched either table
        assert_eq!(
            storage.get_value(CUSTOM_PRODUCTS_KEY).unwrap(),
            Some(b"[]".to_vec())
        );
        assert_eq!(storage.get_media("deadbeef").unwrap(), None);
    }

    #[test]
    fn retain_media_prunes_orphans() {
        let storage = CatalogStorage::open_in_memory(64 * 1024).unwrap();
        storage
            .put_value_with_media(
                CUSTOM_PRODUCTS_KEY,
                b"[]",
                &[
                    ("aaaa".to_string(), vec![1, 2, 3]),
                    ("bbbb".to_string(), vec![4, 5, 6]),
                ],
            )
            .unwrap();

        let pruned = storage.retain_media(|digest| digest == "aaaa").unwrap();
        assert_eq!(pruned, 1);
        assert!(storage.get_media("aaaa").unwrap().is_some());
        assert!(storage.get_media("bbbb").unwrap().is_none());
    }
}
