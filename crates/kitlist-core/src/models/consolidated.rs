//! Consolidated checklist entries derived from a task selection.

use serde::{Deserialize, Serialize};

use super::Item;

/// An item annotated with its aggregate status across the selected tasks.
///
/// `is_required` and `is_optional` are mutually exclusive: required status
/// dominates, so an item required by any selected task is never reported as
/// optional even when other selected tasks only list it as such.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsolidatedItem {
    /// The underlying catalog item
    #[serde(flatten)]
    pub item: Item,

    /// Required by at least one selected task
    pub is_required: bool,

    /// Listed as optional somewhere and required nowhere
    pub is_optional: bool,

    /// Selected tasks that require this item, in selection order
    pub required_by: Vec<String>,

    /// Selected tasks that list this item as optional, in selection order
    pub optional_for: Vec<String>,
}

impl ConsolidatedItem {
    /// Item identifier, for view code that keys on slugs.
    pub fn slug(&self) -> &str {
        &self.item.slug
    }
}
