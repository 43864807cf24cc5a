//! Persistence layer for the week tracker.
//!
//! A string-keyed key-value store backed by `rusqlite`, holding whole JSON
//! blobs: the event log under the `"log"` key and the recorder session
//! under `"session"`. Every commit overwrites the full blob; there is no
//! incremental append.
//!
//! # Thread Safety
//!
//! [`Store`] wraps a `rusqlite::Connection`, which is `Send` but not
//! `Sync`. A store can be moved between threads but not shared without
//! external synchronization; a concurrent embedding must serialize access
//! behind a mutex so the single active-task slot cannot race.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;

use wt_core::{EventLog, Recorder};

/// Store key holding the serialized event log.
pub const LOG_KEY: &str = "log";

/// Store key holding the serialized recorder session.
pub const SESSION_KEY: &str = "session";

/// Persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An error from the underlying database.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A persisted blob is not valid JSON for its expected shape. Parsing
    /// fails fast; nothing is partially loaded.
    #[error("corrupt blob under key \"{key}\": {source}")]
    Corrupt {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Key-value store wrapping a single database connection.
///
/// See the [module documentation](self) for thread safety considerations.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Opens a store at the given path, creating it if necessary.
    ///
    /// The schema is automatically initialized on first open.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.init()?;
        Ok(store)
    }

    /// Opens an in-memory store.
    ///
    /// Useful for testing. The data is destroyed when the connection
    /// closes.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init()?;
        Ok(store)
    }

    /// Initializes the schema. Idempotent.
    fn init(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            ",
        )?;
        Ok(())
    }

    /// Reads the blob stored under a key, if any.
    pub fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Writes a blob under a key, replacing any previous value.
    pub fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    /// Loads the event log.
    ///
    /// A missing key is an empty log; a corrupt blob is a hard error.
    pub fn load_log(&self) -> Result<EventLog, StoreError> {
        match self.get(LOG_KEY)? {
            Some(blob) => EventLog::from_json(&blob).map_err(|source| StoreError::Corrupt {
                key: LOG_KEY,
                source,
            }),
            None => Ok(EventLog::new()),
        }
    }

    /// Persists the whole event log.
    pub fn save_log(&self, log: &EventLog) -> Result<(), StoreError> {
        let blob = log.to_json().map_err(|source| StoreError::Corrupt {
            key: LOG_KEY,
            source,
        })?;
        self.set(LOG_KEY, &blob)?;
        tracing::debug!(events = log.len(), "persisted event log");
        Ok(())
    }

    /// Loads the recorder session.
    ///
    /// A missing key is an idle recorder; a corrupt blob is a hard error.
    pub fn load_session(&self) -> Result<Recorder, StoreError> {
        match self.get(SESSION_KEY)? {
            Some(blob) => {
                serde_json::from_str(&blob).map_err(|source| StoreError::Corrupt {
                    key: SESSION_KEY,
                    source,
                })
            }
            None => Ok(Recorder::new()),
        }
    }

    /// Persists the recorder session.
    pub fn save_session(&self, recorder: &Recorder) -> Result<(), StoreError> {
        let blob = serde_json::to_string(recorder).map_err(|source| StoreError::Corrupt {
            key: SESSION_KEY,
            source,
        })?;
        self.set(SESSION_KEY, &blob)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use wt_core::{CompletedEvent, RecorderState, Sector, TaskName};

    fn sample_log() -> EventLog {
        let start = Local.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).single().unwrap();
        let end = Local.with_ymd_and_hms(2026, 1, 15, 11, 30, 0).single().unwrap();
        let mut log = EventLog::new();
        log.push(
            CompletedEvent::new(
                TaskName::new("code").unwrap(),
                Sector::new("work").unwrap(),
                start,
                end,
            )
            .unwrap(),
        );
        log
    }

    #[test]
    fn get_of_missing_key_is_none() {
        let store = Store::open_in_memory().unwrap();
        assert!(store.get("absent").unwrap().is_none());
    }

    #[test]
    fn set_overwrites_previous_value() {
        let store = Store::open_in_memory().unwrap();
        store.set("k", "first").unwrap();
        store.set("k", "second").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn missing_log_defaults_to_empty() {
        let store = Store::open_in_memory().unwrap();
        assert!(store.load_log().unwrap().is_empty());
    }

    #[test]
    fn log_roundtrips_through_the_store() {
        let store = Store::open_in_memory().unwrap();
        let log = sample_log();
        store.save_log(&log).unwrap();
        assert_eq!(store.load_log().unwrap(), log);
    }

    #[test]
    fn corrupt_log_blob_fails_fast() {
        let store = Store::open_in_memory().unwrap();
        store.set(LOG_KEY, "{definitely not json").unwrap();
        assert!(matches!(
            store.load_log(),
            Err(StoreError::Corrupt { key: LOG_KEY, .. })
        ));
    }

    #[test]
    fn missing_session_defaults_to_idle() {
        let store = Store::open_in_memory().unwrap();
        let recorder = store.load_session().unwrap();
        assert_eq!(recorder.state(), &RecorderState::Idle);
    }

    #[test]
    fn session_roundtrips_through_the_store() {
        let store = Store::open_in_memory().unwrap();
        let mut recorder = Recorder::new();
        recorder
            .start(
                TaskName::new("code").unwrap(),
                Sector::new("work").unwrap(),
                Local.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).single().unwrap(),
            )
            .unwrap();

        store.save_session(&recorder).unwrap();
        assert_eq!(store.load_session().unwrap(), recorder);
    }

    #[test]
    fn corrupt_session_blob_fails_fast() {
        let store = Store::open_in_memory().unwrap();
        store.set(SESSION_KEY, "[]").unwrap();
        assert!(matches!(
            store.load_session(),
            Err(StoreError::Corrupt { key: SESSION_KEY, .. })
        ));
    }

    #[test]
    fn store_persists_across_reopen() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("wt.db");

        {
            let store = Store::open(&path).unwrap();
            store.save_log(&sample_log()).unwrap();
        }

        let store = Store::open(&path).unwrap();
        assert_eq!(store.load_log().unwrap(), sample_log());
    }
}
