//! Task model definition.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from task identifier to its definition, as loaded from
/// `tasks.yaml`.
pub type TaskCatalog = BTreeMap<String, Task>;

/// A unit of work with item dependencies and suggested companion tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Items that must be on the checklist when this task is selected
    pub required: Vec<String>,

    /// Items that help but are not essential for this task
    #[serde(default)]
    pub optional: Vec<String>,

    /// Tasks commonly done together with this one
    #[serde(default, rename = "relatedTasks")]
    pub related_tasks: Vec<String>,
}
