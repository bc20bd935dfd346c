//! The persisted checklist record.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Snapshot written to the state store when a checklist is finalized.
///
/// Stored as JSON under a single key. Restored wholesale on startup and on
/// external change notification; partial updates are never merged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedChecklist {
    /// User-chosen checklist name
    pub name: String,

    /// Selected task identifiers, in selection order
    pub selected_tasks: Vec<String>,

    /// Item identifiers the user has marked done
    pub checked_items: Vec<String>,

    /// Timestamp of this snapshot (UTC)
    pub saved_at: Timestamp,
}
