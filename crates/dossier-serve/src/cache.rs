//! Durable narrative cache backed by SQLite.
//!
//! One row per cache key: `cache(id TEXT PRIMARY KEY, response TEXT,
//! created_at DATETIME)`. Entries are written once on first successful
//! generation and never mutated or expired; a conflicting insert is a no-op,
//! which also makes concurrent duplicate generations for the same key
//! harmless.
//!
//! The connection is opened once at process start and shared for the process
//! lifetime. Every fault surfaces as [`CacheError`]; callers treat it as a
//! degraded always-miss cache, never as a request failure.

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension, params};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS cache (
    id TEXT PRIMARY KEY,
    response TEXT NOT NULL,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
)";

/// Storage-layer fault. Non-fatal by contract: the narrative service logs it
/// and regenerates.
#[derive(Debug, thiserror::Error)]
#[error("cache unavailable: {0}")]
pub struct CacheError(#[from] rusqlite::Error);

/// A cached narrative with its write timestamp.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub key: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Handle to the narrative cache. Cheap to clone; all clones share the same
/// underlying connection.
#[derive(Clone)]
pub struct CacheStore {
    conn: Arc<Mutex<Connection>>,
}

impl CacheStore {
    /// Open (or create) the on-disk cache at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, CacheError> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;
        conn.execute_batch(SCHEMA)?;

        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        tracing::info!(
            path = %path.display(),
            entries = store.count()?,
            "narrative cache opened"
        );
        Ok(store)
    }

    /// Open a private in-memory cache. Used by tests and as the degraded
    /// fallback when the on-disk store cannot be opened.
    pub fn open_in_memory() -> Result<Self, CacheError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Look up the cached narrative for `key`.
    pub fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let conn = self.conn.lock();
        let text = conn
            .query_row("SELECT response FROM cache WHERE id = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(text)
    }

    /// Insert a narrative for `key`. Idempotent: if the key already exists
    /// the existing entry wins and this call is a no-op.
    pub fn put(&self, key: &str, text: &str) -> Result<(), CacheError> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO cache (id, response) VALUES (?1, ?2) ON CONFLICT(id) DO NOTHING",
            params![key, text],
        )?;
        Ok(())
    }

    /// Full row for `key`, including the write timestamp.
    pub fn entry(&self, key: &str) -> Result<Option<CacheEntry>, CacheError> {
        let conn = self.conn.lock();
        let entry = conn
            .query_row(
                "SELECT id, response, created_at FROM cache WHERE id = ?1",
                [key],
                |row| {
                    Ok(CacheEntry {
                        key: row.get(0)?,
                        text: row.get(1)?,
                        created_at: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(entry)
    }

    /// Number of cached narratives.
    pub fn count(&self) -> Result<u64, CacheError> {
        let conn = self.conn.lock();
        let count: u64 = conn.query_row("SELECT COUNT(*) FROM cache", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Make every subsequent operation fail, simulating a storage outage.
    #[cfg(test)]
    pub(crate) fn sabotage(&self) {
        self.conn
            .lock()
            .execute_batch("DROP TABLE cache")
            .expect("drop cache table");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_on_empty_store_is_none() {
        let store = CacheStore::open_in_memory().unwrap();
        assert!(store.get("roswell").unwrap().is_none());
    }

    #[test]
    fn put_then_get_round_trips() {
        let store = CacheStore::open_in_memory().unwrap();
        store.put("roswell", "## 事件经过\n...").unwrap();
        assert_eq!(store.get("roswell").unwrap().as_deref(), Some("## 事件经过\n..."));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn put_is_write_once() {
        let store = CacheStore::open_in_memory().unwrap();
        store.put("roswell", "first").unwrap();
        store.put("roswell", "second").unwrap();
        assert_eq!(store.get("roswell").unwrap().as_deref(), Some("first"));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn entry_carries_a_timestamp() {
        let store = CacheStore::open_in_memory().unwrap();
        store.put("roswell", "text").unwrap();
        let entry = store.entry("roswell").unwrap().unwrap();
        assert_eq!(entry.key, "roswell");
        assert_eq!(entry.text, "text");
        // CURRENT_TIMESTAMP is close to now; a day of slack avoids flakes.
        let age = Utc::now().signed_duration_since(entry.created_at);
        assert!(age.num_hours().abs() < 24);
    }

    #[test]
    fn keys_are_independent() {
        let store = CacheStore::open_in_memory().unwrap();
        store.put("roswell", "a").unwrap();
        store.put("zeta-reticuli", "b").unwrap();
        assert_eq!(store.get("roswell").unwrap().as_deref(), Some("a"));
        assert_eq!(store.get("zeta-reticuli").unwrap().as_deref(), Some("b"));
    }

    #[test]
    fn sabotaged_store_errors_instead_of_panicking() {
        let store = CacheStore::open_in_memory().unwrap();
        store.sabotage();
        assert!(store.get("roswell").is_err());
        assert!(store.put("roswell", "text").is_err());
    }

    #[test]
    fn on_disk_store_persists_across_reopen() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("cache.db");
        {
            let store = CacheStore::open(&path).unwrap();
            store.put("roswell", "persisted").unwrap();
        }
        let store = CacheStore::open(&path).unwrap();
        assert_eq!(store.get("roswell").unwrap().as_deref(), Some("persisted"));
    }
}
