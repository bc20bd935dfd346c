//! Command-line argument definitions using clap.
//!
//! Argument structs here are thin wrappers over the core parameter types:
//! clap-specific attributes stay in this layer and each wrapper converts
//! into its `kitlist_core::params` counterpart with `From`, keeping the
//! core free of CLI framework concerns.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kitlist_core::params::{ResetChecklist, ToggleItem};

/// Main command-line interface for the Kitlist checklist wizard
///
/// Kitlist consolidates the equipment and products needed for a set of
/// chosen tasks into one deduplicated checklist. Required status wins over
/// optional when tasks disagree, related tasks can be folded in before the
/// checklist is named, and the finished checklist is persisted locally so
/// items can be ticked off across sessions.
#[derive(Parser)]
#[command(version, about, name = "kl")]
pub struct Args {
    /// Path to the SQLite state file. Defaults to
    /// $XDG_DATA_HOME/kitlist/kitlist.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Directory containing tasks.yaml, items.yaml and shops.yaml
    #[arg(long, global = true, default_value = "data")]
    pub data_dir: PathBuf,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Kitlist CLI
///
/// A checklist is created in one `start` invocation (selection, related
/// suggestions, naming) and then lives until `reset`: `show` renders it and
/// `check` toggles items. Running `kl` with no command shows the saved
/// checklist.
#[derive(Subcommand)]
pub enum Commands {
    /// List the tasks available in the catalog
    #[command(alias = "t")]
    Tasks,
    /// Start a new checklist from a task selection
    Start(StartArgs),
    /// Show the saved checklist
    #[command(alias = "s")]
    Show,
    /// Toggle an item's checked state
    #[command(alias = "c")]
    Check(CheckArgs),
    /// Discard the saved checklist and start over
    Reset(ResetArgs),
}

/// Start a new checklist
///
/// Submits the task selection and walks the wizard as far as the given
/// flags allow. When related suggestions come up and neither `--with` nor
/// `--skip-related` was passed, the suggestions are printed and nothing is
/// saved yet; the same goes for the naming step and `--name`.
#[derive(clap::Args)]
pub struct StartArgs {
    /// Identifiers of the tasks to start from
    #[arg(required = true)]
    pub tasks: Vec<String>,

    /// Related tasks to take along
    #[arg(long = "with", value_name = "TASK")]
    pub with_tasks: Vec<String>,

    /// Decline all related-task suggestions
    #[arg(long, conflicts_with = "with_tasks")]
    pub skip_related: bool,

    /// Name for the new checklist
    #[arg(long)]
    pub name: Option<String>,
}

/// Toggle one checklist item
#[derive(clap::Args)]
pub struct CheckArgs {
    /// Slug of the item to toggle
    pub slug: String,
}

impl From<CheckArgs> for ToggleItem {
    fn from(val: CheckArgs) -> Self {
        ToggleItem { slug: val.slug }
    }
}

/// Discard the saved checklist
///
/// This permanently clears the stored record; the wizard starts over at
/// task selection. Requires `--confirmed` to guard against accidents.
#[derive(clap::Args)]
pub struct ResetArgs {
    /// Confirm discarding the saved checklist
    #[arg(long)]
    pub confirmed: bool,
}

impl From<ResetArgs> for ResetChecklist {
    fn from(val: ResetArgs) -> Self {
        ResetChecklist {
            confirmed: val.confirmed,
        }
    }
}
