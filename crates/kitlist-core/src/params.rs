//! Parameter structures for wizard operations.
//!
//! These structs carry operation inputs across interface boundaries without
//! framework-specific derives: the CLI wraps them in clap argument structs
//! and converts with `From`, while the core handlers take them by reference.
//! Keeping them here means a future interface (TUI, HTTP, whatever) reuses
//! the same types without touching the wizard.

use serde::{Deserialize, Serialize};

/// Parameters for submitting the initial task selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectTasks {
    /// Identifiers of the chosen tasks, in selection order
    pub tasks: Vec<String>,
}

/// Parameters for confirming related-task opt-ins.
///
/// An empty list means the user skipped all suggestions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfirmRelated {
    /// Identifiers of the additionally accepted tasks
    #[serde(default)]
    pub tasks: Vec<String>,
}

/// Parameters for naming the checklist before it is finalized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NameChecklist {
    /// The checklist name; surrounding whitespace is trimmed
    pub name: String,
}

/// Parameters for toggling one checklist item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToggleItem {
    /// Slug of the item to flip
    pub slug: String,
}

/// Parameters for clearing the saved checklist.
///
/// Destructive: requires explicit confirmation, the same guard the UI puts
/// behind its confirm dialog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResetChecklist {
    /// Must be true for the reset to proceed
    #[serde(default)]
    pub confirmed: bool,
}
