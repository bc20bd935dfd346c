//! SQLite-backed key-value store for wizard state.
//!
//! The store is the persistence capability behind the wizard: JSON values
//! under string keys, plus a per-key revision counter that lets another
//! handle (or another process) detect foreign writes, the desktop
//! analogue of a browser storage event. Content-level problems (a value
//! that no longer decodes) are logged and degrade to the caller's default;
//! only infrastructure failures surface as errors.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod kv;
pub mod watch;

pub use watch::StoreWatcher;

/// Connection handle for the state store.
pub struct StateStore {
    connection: Connection,
}

impl StateStore {
    /// Opens the store at the given path and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            Connection::open(path).db_context("Failed to open state store")?;

        let store = Self { connection };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Applies the embedded schema, a no-op on an already-initialized file.
    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize state store schema")?;
        Ok(())
    }
}
