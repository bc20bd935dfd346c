//! Wizard operations: pure transitions plus persistence.
//!
//! The selection steps (`submit_task_selection`,
//! `confirm_related_selection`) touch no storage and stay synchronous; the
//! operations that write (naming, toggling, resetting) are async and run
//! the store work on a blocking task.

use std::mem;

use jiff::Timestamp;
use log::debug;
use tokio::task;

use super::{state::WizardState, Wizard};
use crate::{
    error::{KitlistError, Result},
    models::{SavedChecklist, Screen},
    params::{ConfirmRelated, NameChecklist, ResetChecklist, SelectTasks, ToggleItem},
    store::StateStore,
};

impl Wizard {
    // Read-only snapshots for view code.

    /// Screen the wizard is currently on.
    pub fn screen(&self) -> Screen {
        self.state.screen
    }

    /// Whether initialization (the one-shot restore) has completed.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Selected task identifiers, in selection order.
    pub fn selected_tasks(&self) -> &[String] {
        &self.state.selected_tasks
    }

    /// Suggestions offered on the `Related` screen.
    pub fn potential_related_tasks(&self) -> &[String] {
        &self.state.potential_related
    }

    /// Item identifiers marked done.
    pub fn checked_items(&self) -> &[String] {
        &self.state.checked_items
    }

    /// The checklist name, empty until the naming step.
    pub fn checklist_name(&self) -> &str {
        &self.state.checklist_name
    }

    /// When the persisted record was last written, if one exists.
    pub fn saved_at(&self) -> Option<&Timestamp> {
        self.saved_at.as_ref()
    }

    /// The store key this wizard persists under.
    pub fn state_key(&self) -> &str {
        self.watcher.key()
    }

    /// Submits the initial task selection.
    ///
    /// Pure transition; nothing is persisted until the checklist is named.
    /// Returns the screen the wizard landed on: `Related` when suggestions
    /// exist, `Name` otherwise.
    pub fn submit_task_selection(&mut self, params: &SelectTasks) -> Screen {
        self.state =
            mem::take(&mut self.state).submit_task_selection(params.tasks.clone(), &self.tasks);
        debug!("task selection submitted, screen = {}", self.state.screen);
        self.state.screen
    }

    /// Folds the user's opt-ins from the related screen into the selection
    /// and moves to the naming step. An empty opt-in means "skip".
    pub fn confirm_related_selection(&mut self, params: &ConfirmRelated) -> Screen {
        self.state = mem::take(&mut self.state).confirm_related_selection(params.tasks.clone());
        debug!("related selection confirmed, screen = {}", self.state.screen);
        self.state.screen
    }

    /// Names the checklist, persists the record, and enters the checklist
    /// screen.
    ///
    /// # Errors
    ///
    /// Returns `KitlistError::InvalidInput` for blank names: the record
    /// written here is what later sessions restore from, so it must carry a
    /// real name.
    pub async fn submit_checklist_name(&mut self, params: &NameChecklist) -> Result<Screen> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(KitlistError::invalid_input(
                "name",
                "Checklist name must not be blank",
            ));
        }

        self.state = mem::take(&mut self.state).submit_checklist_name(name.to_string());
        self.persist().await?;
        Ok(self.state.screen)
    }

    /// Flips one item's checked state, re-persisting when a saved record
    /// exists. Toggling before finalization only touches memory.
    pub async fn toggle_item(&mut self, params: &ToggleItem) -> Result<()> {
        self.state = mem::take(&mut self.state).toggle_item(&params.slug);
        if self.has_saved_record {
            self.persist().await?;
        }
        Ok(())
    }

    /// Clears the persisted record, so the key no longer resolves, and
    /// returns a fresh session at task selection.
    ///
    /// # Errors
    ///
    /// Returns `KitlistError::InvalidInput` unless `confirmed` is set;
    /// resetting discards the saved checklist permanently.
    pub async fn reset(&mut self, params: &ResetChecklist) -> Result<()> {
        if !params.confirmed {
            return Err(KitlistError::invalid_input(
                "confirmed",
                "Resetting discards the saved checklist. Set 'confirmed' to true to proceed.",
            ));
        }

        let store_path = self.store_path.clone();
        let key = self.watcher.key().to_string();
        task::spawn_blocking(move || {
            let mut store = StateStore::new(&store_path)?;
            store.clear(&key)
        })
        .await
        .map_err(|e| KitlistError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        self.state = WizardState::new();
        self.has_saved_record = false;
        self.saved_at = None;
        self.watcher.mark_seen(None);
        debug!("wizard reset, store key cleared");
        Ok(())
    }

    /// Absorbs a foreign write to this wizard's store key.
    ///
    /// When another instance (or another process) changed the record, the
    /// in-memory state is replaced wholesale with whatever the store holds
    /// now: a restored checklist, or a fresh session when the key was
    /// cleared. Partial updates are never merged. Returns whether anything
    /// changed.
    pub async fn sync_external(&mut self) -> Result<bool> {
        let store_path = self.store_path.clone();
        let key = self.watcher.key().to_string();
        let (revision, saved) = task::spawn_blocking(move || {
            let store = StateStore::new(&store_path)?;
            let revision = store.revision(&key)?;
            let saved: Option<SavedChecklist> = store.read(&key)?;
            Ok::<_, KitlistError>((revision, saved))
        })
        .await
        .map_err(|e| KitlistError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        if !self.watcher.update(revision) {
            return Ok(false);
        }

        debug!("absorbing external change to '{}'", self.watcher.key());
        self.has_saved_record = saved.is_some();
        self.saved_at = saved.as_ref().map(|record| record.saved_at);
        self.state = match &saved {
            Some(record) => WizardState::from_saved(record),
            None => WizardState::new(),
        };
        Ok(true)
    }

    /// Writes the current state to the store and records the new revision
    /// as seen.
    async fn persist(&mut self) -> Result<()> {
        let record = self.state.to_saved();
        let saved_at = record.saved_at;
        let store_path = self.store_path.clone();
        let key = self.watcher.key().to_string();

        let revision = task::spawn_blocking(move || {
            let mut store = StateStore::new(&store_path)?;
            store.write(&key, &record)
        })
        .await
        .map_err(|e| KitlistError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        self.watcher.mark_seen(Some(revision));
        self.has_saved_record = true;
        self.saved_at = Some(saved_at);
        Ok(())
    }
}
