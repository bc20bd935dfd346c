//! Key-value operations on the state store.

use jiff::Timestamp;
use log::warn;
use rusqlite::{params, OptionalExtension};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{DatabaseResultExt, Result};

const UPSERT_SQL: &str = "INSERT INTO state (key, value, revision, updated_at) VALUES (?1, ?2, 1, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, revision = state.revision + 1, updated_at = excluded.updated_at \
     RETURNING revision";
const SELECT_VALUE_SQL: &str = "SELECT value FROM state WHERE key = ?1";
const SELECT_REVISION_SQL: &str = "SELECT revision FROM state WHERE key = ?1";
const DELETE_SQL: &str = "DELETE FROM state WHERE key = ?1";

impl super::StateStore {
    /// Reads and decodes the value stored under `key`.
    ///
    /// Returns `None` when the key is missing. A stored value that fails to
    /// decode is treated the same way: the corruption is logged and the
    /// caller falls back to its default, it is never raised.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let raw: Option<String> = self
            .connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read state value")?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!("discarding malformed state under key '{key}': {e}");
                Ok(None)
            }
        }
    }

    /// Writes `value` as JSON under `key`, returning the new revision.
    pub fn write<T: Serialize>(&mut self, key: &str, value: &T) -> Result<u64> {
        let encoded = serde_json::to_string(value)?;
        let now = Timestamp::now().to_string();

        let revision: i64 = self
            .connection
            .query_row(UPSERT_SQL, params![key, encoded, now], |row| row.get(0))
            .db_context("Failed to write state value")?;
        Ok(revision as u64)
    }

    /// Removes `key` entirely; subsequent reads resolve to nothing.
    pub fn clear(&mut self, key: &str) -> Result<()> {
        self.connection
            .execute(DELETE_SQL, params![key])
            .db_context("Failed to clear state value")?;
        Ok(())
    }

    /// Current revision of `key`, `None` when the key is absent.
    pub fn revision(&self, key: &str) -> Result<Option<u64>> {
        let revision: Option<i64> = self
            .connection
            .query_row(SELECT_REVISION_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read state revision")?;
        Ok(revision.map(|r| r as u64))
    }
}
