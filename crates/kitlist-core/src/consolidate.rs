//! Consolidation of selected tasks into one deduplicated item list.
//!
//! Both operations here are pure: no side effects, no mutation of the
//! catalogs, and deterministic first-encountered ordering so that views stay
//! stable across renders. Unknown task identifiers in a selection are
//! skipped rather than reported: a partially stale selection degrades to a
//! smaller result instead of failing the wizard.

use std::collections::HashMap;

use crate::models::{ConsolidatedItem, ItemCatalog, TaskCatalog};

/// Collect related-task suggestions for a selection.
///
/// Unions the `related_tasks` of every selected task, keeping first-seen
/// order and dropping anything already selected. A task suggested by several
/// selected tasks appears once.
pub fn related_tasks(selected: &[String], tasks: &TaskCatalog) -> Vec<String> {
    let mut suggestions = Vec::new();
    for task_id in selected {
        let Some(task) = tasks.get(task_id) else {
            continue;
        };
        for related_id in &task.related_tasks {
            if !selected.contains(related_id) && !suggestions.contains(related_id) {
                suggestions.push(related_id.clone());
            }
        }
    }
    suggestions
}

/// Accumulated status for one item identifier while folding a selection.
#[derive(Default)]
struct ItemStatus {
    required_by: Vec<String>,
    optional_for: Vec<String>,
}

/// Merge the selected tasks' item lists into one status-annotated list.
///
/// Folds the selection in two passes, required first, then optional, so
/// the dominance rule holds by construction: an item required by any
/// selected task is required overall, and only items never required but
/// listed as optional somewhere come out as optional. Identifiers missing
/// from the item catalog are dropped silently.
pub fn consolidate(
    selected: &[String],
    tasks: &TaskCatalog,
    items: &ItemCatalog,
) -> Vec<ConsolidatedItem> {
    let mut order: Vec<String> = Vec::new();
    let mut statuses: HashMap<String, ItemStatus> = HashMap::new();

    // First pass: required items.
    for task_id in selected {
        let Some(task) = tasks.get(task_id) else {
            continue;
        };
        for slug in &task.required {
            if !statuses.contains_key(slug) {
                order.push(slug.clone());
            }
            statuses
                .entry(slug.clone())
                .or_default()
                .required_by
                .push(task_id.clone());
        }
    }

    // Second pass: optional items. Attribution is recorded even for slugs
    // already required so the trace stays complete.
    for task_id in selected {
        let Some(task) = tasks.get(task_id) else {
            continue;
        };
        for slug in &task.optional {
            if !statuses.contains_key(slug) {
                order.push(slug.clone());
            }
            statuses
                .entry(slug.clone())
                .or_default()
                .optional_for
                .push(task_id.clone());
        }
    }

    order
        .into_iter()
        .filter_map(|slug| {
            let item = items.get(&slug)?.clone();
            let status = statuses.remove(&slug).unwrap_or_default();
            let is_required = !status.required_by.is_empty();
            Some(ConsolidatedItem {
                item,
                is_required,
                is_optional: !is_required && !status.optional_for.is_empty(),
                required_by: status.required_by,
                optional_for: status.optional_for,
            })
        })
        .collect()
}
