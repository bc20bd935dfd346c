//! Static catalog loading and validation.
//!
//! The catalogs are plain YAML files (`tasks.yaml`, `items.yaml` and
//! `shops.yaml`) shared with other tooling, so their field names are fixed
//! (see [`crate::models`]). Loading is the only place shape problems
//! surface: the consolidation engine and the wizard assume validated
//! catalogs and only degrade gracefully on dangling references.

use std::fs;
use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;

use crate::error::{KitlistError, Result};
use crate::models::{ItemCatalog, TaskCatalog};

mod validate;

/// File name of the task catalog inside the data directory.
pub const TASKS_FILE: &str = "tasks.yaml";
/// File name of the item catalog inside the data directory.
pub const ITEMS_FILE: &str = "items.yaml";
/// File name of the shop list inside the data directory.
pub const SHOPS_FILE: &str = "shops.yaml";

/// The three static catalogs consumed by the wizard and the engine.
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    /// Selectable tasks keyed by identifier
    pub tasks: TaskCatalog,
    /// Items keyed by slug
    pub items: ItemCatalog,
    /// Known shop identifiers
    pub shops: Vec<String>,
}

impl Catalogs {
    /// Loads and validates all three catalogs from a data directory.
    ///
    /// # Errors
    ///
    /// Returns `KitlistError::FileSystem` when a file cannot be read and
    /// `KitlistError::Catalog` when parsing or validation fails.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let tasks: TaskCatalog = read_yaml(&dir.join(TASKS_FILE))?;
        let items: ItemCatalog = read_yaml(&dir.join(ITEMS_FILE))?;
        let shops: Vec<String> = read_yaml(&dir.join(SHOPS_FILE))?;

        let catalogs = Self { tasks, items, shops };
        catalogs.validate()?;

        debug!(
            "loaded catalogs: {} tasks, {} items, {} shops",
            catalogs.tasks.len(),
            catalogs.items.len(),
            catalogs.shops.len()
        );
        Ok(catalogs)
    }

    /// Runs the boundary checks over already-parsed catalogs.
    ///
    /// Checks kebab-case identifiers, key/slug agreement, duplicate-free
    /// reference lists, and referential integrity between tasks, items and
    /// shops.
    pub fn validate(&self) -> Result<()> {
        validate::validate(self)
    }
}

fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path).map_err(|e| KitlistError::FileSystem {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_yaml::from_str(&contents)
        .map_err(|e| KitlistError::catalog(path.display().to_string(), e.to_string()))
}
