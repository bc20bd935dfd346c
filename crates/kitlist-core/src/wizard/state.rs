//! Pure wizard state and transitions.
//!
//! Every transition is `(state, input) -> state` with no side effects;
//! persistence happens in the handler layer after the transition. Keeping
//! the transitions pure makes the flow invariants (the conditional
//! `Related` stop, toggle self-inversion) checkable without a store.

use jiff::Timestamp;

use crate::consolidate;
use crate::models::{SavedChecklist, Screen, TaskCatalog};

/// In-memory state of one wizard session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardState {
    /// Screen the session is on
    pub screen: Screen,

    /// Selected task identifiers, in selection order
    pub selected_tasks: Vec<String>,

    /// Related-task suggestions offered on the `Related` screen (transient)
    pub potential_related: Vec<String>,

    /// Item identifiers marked done on the checklist
    pub checked_items: Vec<String>,

    /// User-chosen checklist name, empty until the naming step
    pub checklist_name: String,
}

impl WizardState {
    /// Fresh state at the task selection screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// State restored from a persisted record, landing on the checklist.
    pub fn from_saved(saved: &SavedChecklist) -> Self {
        Self {
            screen: Screen::Checklist,
            selected_tasks: saved.selected_tasks.clone(),
            potential_related: Vec::new(),
            checked_items: saved.checked_items.clone(),
            checklist_name: saved.name.clone(),
        }
    }

    /// Submits the initial task selection.
    ///
    /// Moves to `Related` when any suggestions exist, otherwise straight to
    /// the naming step. An empty selection is accepted and flows through.
    pub fn submit_task_selection(mut self, selected: Vec<String>, tasks: &TaskCatalog) -> Self {
        let related = consolidate::related_tasks(&selected, tasks);
        self.selected_tasks = selected;
        if related.is_empty() {
            self.potential_related = Vec::new();
            self.screen = Screen::Name;
        } else {
            self.potential_related = related;
            self.screen = Screen::Related;
        }
        self
    }

    /// Appends the suggestions the user opted into (possibly none) and
    /// moves to the naming step.
    ///
    /// No dedup is needed: the candidates were already excluded from the
    /// original selection.
    pub fn confirm_related_selection(mut self, additional: Vec<String>) -> Self {
        self.selected_tasks.extend(additional);
        self.potential_related = Vec::new();
        self.screen = Screen::Name;
        self
    }

    /// Names the checklist and enters it with nothing checked yet.
    pub fn submit_checklist_name(mut self, name: String) -> Self {
        self.checklist_name = name;
        self.checked_items = Vec::new();
        self.screen = Screen::Checklist;
        self
    }

    /// Flips one item's checked membership.
    pub fn toggle_item(mut self, slug: &str) -> Self {
        if let Some(pos) = self.checked_items.iter().position(|s| s == slug) {
            self.checked_items.remove(pos);
        } else {
            self.checked_items.push(slug.to_string());
        }
        self
    }

    /// Snapshot for persistence, stamped now.
    pub fn to_saved(&self) -> SavedChecklist {
        SavedChecklist {
            name: self.checklist_name.clone(),
            selected_tasks: self.selected_tasks.clone(),
            checked_items: self.checked_items.clone(),
            saved_at: Timestamp::now(),
        }
    }
}
