//! Builder for creating and restoring Wizard instances.

use std::path::{Path, PathBuf};

use log::info;
use tokio::task;

use super::{state::WizardState, Wizard, DEFAULT_STATE_KEY};
use crate::{
    error::{KitlistError, Result},
    models::{SavedChecklist, TaskCatalog},
    store::{StateStore, StoreWatcher},
};

/// Builder for creating and restoring [`Wizard`] instances.
#[derive(Debug, Clone, Default)]
pub struct WizardBuilder {
    store_path: Option<PathBuf>,
    state_key: Option<String>,
    tasks: TaskCatalog,
}

impl WizardBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the task catalog the wizard computes suggestions from.
    pub fn with_tasks(mut self, tasks: TaskCatalog) -> Self {
        self.tasks = tasks;
        self
    }

    /// Sets a custom state store file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/kitlist/kitlist.db` or
    /// `~/.local/share/kitlist/kitlist.db`
    pub fn with_store_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.store_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Overrides the key the checklist record is stored under.
    pub fn with_state_key(mut self, key: impl Into<String>) -> Self {
        self.state_key = Some(key.into());
        self
    }

    /// Builds the wizard, restoring any previously finalized checklist.
    ///
    /// Restoration happens exactly once, here: a stored record puts the
    /// wizard straight on the checklist screen; a missing key or a value
    /// that no longer decodes starts a fresh session at task selection.
    /// The returned wizard is always ready to render.
    ///
    /// # Errors
    ///
    /// Returns `KitlistError::FileSystem` if the store path is invalid and
    /// `KitlistError::Database` if store initialization fails.
    pub async fn build(self) -> Result<Wizard> {
        let store_path = if let Some(path) = self.store_path {
            path
        } else {
            Self::default_store_path()?
        };

        if let Some(parent) = store_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| KitlistError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let state_key = self
            .state_key
            .unwrap_or_else(|| DEFAULT_STATE_KEY.to_string());

        let path = store_path.clone();
        let key = state_key.clone();
        let (revision, saved) = task::spawn_blocking(move || {
            let store = StateStore::new(&path)?;
            let revision = store.revision(&key)?;
            let saved: Option<SavedChecklist> = store.read(&key)?;
            Ok::<_, KitlistError>((revision, saved))
        })
        .await
        .map_err(|e| KitlistError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        let state = match &saved {
            Some(record) => {
                info!(
                    "restored checklist '{}' with {} tasks",
                    record.name,
                    record.selected_tasks.len()
                );
                WizardState::from_saved(record)
            }
            None => WizardState::new(),
        };
        let has_saved_record = saved.is_some();
        let saved_at = saved.map(|record| record.saved_at);

        Ok(Wizard {
            store_path,
            watcher: StoreWatcher::detached(state_key, revision),
            tasks: self.tasks,
            state,
            has_saved_record,
            saved_at,
            ready: true,
        })
    }

    /// Returns the default store path following XDG Base Directory
    /// specification.
    fn default_store_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("kitlist")
            .place_data_file("kitlist.db")
            .map_err(|e| KitlistError::XdgDirectory(e.to_string()))
    }
}
