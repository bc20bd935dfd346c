//! Shared helpers for integration tests.

use kitlist_core::{Item, ItemCatalog, ItemKind, Task, TaskCatalog};

/// Builds the task catalog used across the integration suites.
///
/// `wash-windows` suggests `wipe-sills`; `wipe-sills` requires the cloth
/// that `wash-windows` only lists as optional, which exercises the
/// dominance rule end to end.
pub fn sample_tasks() -> TaskCatalog {
    TaskCatalog::from([
        (
            "wash-windows".to_string(),
            Task {
                required: vec!["glass-cleaner".to_string()],
                optional: vec!["microfiber-cloth".to_string()],
                related_tasks: vec!["wipe-sills".to_string()],
            },
        ),
        (
            "wipe-sills".to_string(),
            Task {
                required: vec!["microfiber-cloth".to_string()],
                optional: vec![],
                related_tasks: vec![],
            },
        ),
        (
            "mop-floors".to_string(),
            Task {
                required: vec!["bucket".to_string(), "mop".to_string()],
                optional: vec![],
                related_tasks: vec![],
            },
        ),
    ])
}

pub fn sample_items() -> ItemCatalog {
    let item = |slug: &str, kind: ItemKind| Item {
        slug: slug.to_string(),
        title: slug.replace('-', " "),
        kind,
        notes: String::new(),
        shops: vec![],
    };
    ItemCatalog::from([
        (
            "glass-cleaner".to_string(),
            item("glass-cleaner", ItemKind::Product),
        ),
        (
            "microfiber-cloth".to_string(),
            item("microfiber-cloth", ItemKind::Product),
        ),
        ("bucket".to_string(), item("bucket", ItemKind::Equipment)),
        ("mop".to_string(), item("mop", ItemKind::Equipment)),
    ])
}

pub fn ids(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}
