//! Referential and format checks for loaded catalogs.
//!
//! These mirror the contract the data files are authored against: kebab-case
//! identifiers, item keys matching their slugs, duplicate-free reference
//! lists, and no dangling references between tasks, items and shops.

use std::collections::HashSet;

use super::{Catalogs, ITEMS_FILE, SHOPS_FILE, TASKS_FILE};
use crate::error::{KitlistError, Result};

/// kebab-case: lowercase alphanumeric segments joined by single hyphens.
fn is_kebab_case(s: &str) -> bool {
    !s.is_empty()
        && s.split('-').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}

fn find_duplicate(values: &[String]) -> Option<&String> {
    let mut seen = HashSet::new();
    values.iter().find(|value| !seen.insert(value.as_str()))
}

pub(super) fn validate(catalogs: &Catalogs) -> Result<()> {
    validate_shops(catalogs)?;
    validate_items(catalogs)?;
    validate_tasks(catalogs)?;
    Ok(())
}

fn validate_shops(catalogs: &Catalogs) -> Result<()> {
    for shop in &catalogs.shops {
        if !is_kebab_case(shop) {
            return Err(KitlistError::catalog(
                SHOPS_FILE,
                format!("shop '{shop}' is not kebab-case"),
            ));
        }
    }
    if let Some(shop) = find_duplicate(&catalogs.shops) {
        return Err(KitlistError::catalog(
            SHOPS_FILE,
            format!("duplicate shop '{shop}'"),
        ));
    }
    Ok(())
}

fn validate_items(catalogs: &Catalogs) -> Result<()> {
    let shops: HashSet<&str> = catalogs.shops.iter().map(String::as_str).collect();

    for (key, item) in &catalogs.items {
        if key != &item.slug {
            return Err(KitlistError::catalog(
                ITEMS_FILE,
                format!("key '{key}' does not match its item slug '{}'", item.slug),
            ));
        }
        if !is_kebab_case(&item.slug) {
            return Err(KitlistError::catalog(
                ITEMS_FILE,
                format!("slug '{}' is not kebab-case", item.slug),
            ));
        }
        for shop in &item.shops {
            if !shops.contains(shop.as_str()) {
                return Err(KitlistError::catalog(
                    ITEMS_FILE,
                    format!("item '{key}' references unknown shop '{shop}'"),
                ));
            }
        }
    }
    Ok(())
}

fn validate_tasks(catalogs: &Catalogs) -> Result<()> {
    for (task_id, task) in &catalogs.tasks {
        for (field, slugs) in [("required", &task.required), ("optional", &task.optional)] {
            if let Some(slug) = find_duplicate(slugs) {
                return Err(KitlistError::catalog(
                    TASKS_FILE,
                    format!("task '{task_id}' lists item '{slug}' twice in {field}"),
                ));
            }
            for slug in slugs {
                if !catalogs.items.contains_key(slug) {
                    return Err(KitlistError::catalog(
                        TASKS_FILE,
                        format!("task '{task_id}' references unknown item '{slug}' in {field}"),
                    ));
                }
            }
        }

        if let Some(related) = find_duplicate(&task.related_tasks) {
            return Err(KitlistError::catalog(
                TASKS_FILE,
                format!("task '{task_id}' lists related task '{related}' twice"),
            ));
        }
        for related in &task.related_tasks {
            if !catalogs.tasks.contains_key(related) {
                return Err(KitlistError::catalog(
                    TASKS_FILE,
                    format!("task '{task_id}' references unknown related task '{related}'"),
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Item, ItemCatalog, ItemKind, Task, TaskCatalog};

    fn valid_catalogs() -> Catalogs {
        let items = ItemCatalog::from([(
            "bucket".to_string(),
            Item {
                slug: "bucket".to_string(),
                title: "Bucket".to_string(),
                kind: ItemKind::Equipment,
                notes: String::new(),
                shops: vec!["hardware-store".to_string()],
            },
        )]);
        let tasks = TaskCatalog::from([(
            "mop-floors".to_string(),
            Task {
                required: vec!["bucket".to_string()],
                optional: vec![],
                related_tasks: vec![],
            },
        )]);
        Catalogs {
            tasks,
            items,
            shops: vec!["hardware-store".to_string()],
        }
    }

    #[test]
    fn test_is_kebab_case() {
        assert!(is_kebab_case("glass-cleaner"));
        assert!(is_kebab_case("b2"));
        assert!(is_kebab_case("shop"));
        assert!(!is_kebab_case(""));
        assert!(!is_kebab_case("Glass-Cleaner"));
        assert!(!is_kebab_case("-leading"));
        assert!(!is_kebab_case("trailing-"));
        assert!(!is_kebab_case("double--hyphen"));
        assert!(!is_kebab_case("under_score"));
    }

    #[test]
    fn test_valid_catalogs_pass() {
        assert!(validate(&valid_catalogs()).is_ok());
    }

    #[test]
    fn test_rejects_slug_key_mismatch() {
        let mut catalogs = valid_catalogs();
        let item = catalogs.items.remove("bucket").expect("item present");
        catalogs.items.insert("pail".to_string(), item);
        catalogs.tasks.clear();
        assert!(validate(&catalogs).is_err());
    }

    #[test]
    fn test_rejects_non_kebab_shop() {
        let mut catalogs = valid_catalogs();
        catalogs.shops.push("Corner Shop".to_string());
        assert!(validate(&catalogs).is_err());
    }

    #[test]
    fn test_rejects_duplicate_shop() {
        let mut catalogs = valid_catalogs();
        catalogs.shops.push("hardware-store".to_string());
        assert!(validate(&catalogs).is_err());
    }

    #[test]
    fn test_rejects_unknown_shop_reference() {
        let mut catalogs = valid_catalogs();
        catalogs
            .items
            .get_mut("bucket")
            .expect("item present")
            .shops
            .push("black-market".to_string());
        assert!(validate(&catalogs).is_err());
    }

    #[test]
    fn test_rejects_unknown_required_item() {
        let mut catalogs = valid_catalogs();
        catalogs
            .tasks
            .get_mut("mop-floors")
            .expect("task present")
            .required
            .push("ghost-item".to_string());
        assert!(validate(&catalogs).is_err());
    }

    #[test]
    fn test_rejects_duplicate_required_item() {
        let mut catalogs = valid_catalogs();
        catalogs
            .tasks
            .get_mut("mop-floors")
            .expect("task present")
            .required
            .push("bucket".to_string());
        assert!(validate(&catalogs).is_err());
    }

    #[test]
    fn test_rejects_unknown_related_task() {
        let mut catalogs = valid_catalogs();
        catalogs
            .tasks
            .get_mut("mop-floors")
            .expect("task present")
            .related_tasks
            .push("paint-fence".to_string());
        assert!(validate(&catalogs).is_err());
    }

    #[test]
    fn test_self_reference_is_allowed() {
        // Not forbidden by the contract; the engine filters it out anyway.
        let mut catalogs = valid_catalogs();
        catalogs
            .tasks
            .get_mut("mop-floors")
            .expect("task present")
            .related_tasks
            .push("mop-floors".to_string());
        assert!(validate(&catalogs).is_ok());
    }
}
