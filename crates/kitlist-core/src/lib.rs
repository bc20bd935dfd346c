//! Core library for the Kitlist checklist wizard.
//!
//! This crate provides the business logic behind kitlist: consolidating a
//! task selection into a deduplicated, status-annotated item list, and the
//! wizard state machine that drives the screen flow and persists the
//! finalized checklist.
//!
//! # Architecture
//!
//! - **Consolidation engine** ([`consolidate`]): pure functions from a task
//!   selection and the static catalogs to related-task suggestions and
//!   consolidated items. Required status dominates optional status.
//! - **Wizard state machine** ([`wizard`]): owns the current screen,
//!   selection, and checked state. Transitions are pure functions on
//!   [`wizard::WizardState`]; the [`Wizard`] adds persistence through the
//!   state store so a finalized checklist survives restarts.
//! - **State store** ([`store`]): a SQLite key-value table with per-key
//!   revisions for external change detection.
//! - **Catalogs** ([`catalog`]): YAML loading and boundary validation for
//!   the static task/item/shop data.
//! - **Display** ([`display`]): markdown wrappers consumed by the CLI's
//!   terminal renderer.
//!
//! # Quick Start
//!
//! ```rust
//! use kitlist_core::{
//!     consolidate,
//!     params::{NameChecklist, SelectTasks},
//!     Screen, WizardBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalogs = kitlist_core::Catalogs::load("data")?;
//!
//! let mut wizard = WizardBuilder::new()
//!     .with_tasks(catalogs.tasks.clone())
//!     .build()
//!     .await?;
//!
//! // Lands on `Related` when suggestions exist, `Name` otherwise.
//! let screen = wizard.submit_task_selection(&SelectTasks {
//!     tasks: vec!["wash-windows".to_string()],
//! });
//!
//! if screen == Screen::Name {
//!     wizard
//!         .submit_checklist_name(&NameChecklist {
//!             name: "Weekend".to_string(),
//!         })
//!         .await?;
//!
//!     let items = consolidate::consolidate(
//!         wizard.selected_tasks(),
//!         &catalogs.tasks,
//!         &catalogs.items,
//!     );
//!     for entry in &items {
//!         println!("{}", entry.item.title);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod consolidate;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod store;
pub mod wizard;

// Re-export commonly used types
pub use catalog::Catalogs;
pub use display::{ChecklistView, LocalStamp, RelatedPrompt, TaskOverview};
pub use error::{KitlistError, Result};
pub use models::{
    ConsolidatedItem, Item, ItemCatalog, ItemKind, SavedChecklist, Screen, Task, TaskCatalog,
};
pub use params::{ConfirmRelated, NameChecklist, ResetChecklist, SelectTasks, ToggleItem};
pub use store::{StateStore, StoreWatcher};
pub use wizard::{Wizard, WizardBuilder, WizardState, DEFAULT_STATE_KEY};
