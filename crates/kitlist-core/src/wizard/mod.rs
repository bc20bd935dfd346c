//! Wizard state machine driving the checklist flow.
//!
//! The wizard owns the current screen, the task selection, and the checked
//! state. Screen transitions are pure functions on [`WizardState`] (see
//! [`state`]) and the [`Wizard`] wraps them with persistence to the
//! [`crate::store::StateStore`] so a finalized checklist survives restarts.
//!
//! Flow: `Tasks` → (`Related` when suggestions exist) → `Name` →
//! `Checklist`, with reset returning to `Tasks` from anywhere. Nothing is
//! persisted before the checklist is named; from then on every toggle
//! re-persists the full record.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │  Pure state     │    │   State store   │
//! │  (async, own    │───▶│  transitions    │    │   (via store/)  │
//! │   persistence)  │    │  (state.rs)     │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: factory restoring a wizard from the store
//! - [`state`]: the pure `(state, input) -> state` transition functions
//! - [`handlers`]: the persisted operations and read-only snapshots

use std::path::PathBuf;

use jiff::Timestamp;

use crate::models::TaskCatalog;
use crate::store::StoreWatcher;

pub mod builder;
pub mod handlers;
pub mod state;


// Re-export the main types
pub use builder::WizardBuilder;
pub use state::WizardState;

/// Default store key for the persisted checklist record.
pub const DEFAULT_STATE_KEY: &str = "kitlist-state";

/// Checklist wizard with persistent finalized state.
pub struct Wizard {
    pub(crate) store_path: PathBuf,
    pub(crate) watcher: StoreWatcher,
    pub(crate) tasks: TaskCatalog,
    pub(crate) state: WizardState,
    pub(crate) has_saved_record: bool,
    pub(crate) saved_at: Option<Timestamp>,
    pub(crate) ready: bool,
}
