//! Checklist rendering.

use std::fmt;

use jiff::Timestamp;

use super::datetime::LocalStamp;
use crate::models::{ConsolidatedItem, ItemKind};

/// Renders a consolidated checklist as markdown.
///
/// Items are split into an equipment and a products section; within each
/// section the engine's first-encountered order is preserved. Checked items
/// render as ticked checkboxes, optional items carry a badge.
pub struct ChecklistView {
    name: String,
    items: Vec<ConsolidatedItem>,
    checked: Vec<String>,
    saved_at: Option<Timestamp>,
}

impl ChecklistView {
    /// Creates a view over consolidated items and the checked set.
    pub fn new(
        name: impl Into<String>,
        items: Vec<ConsolidatedItem>,
        checked: Vec<String>,
        saved_at: Option<Timestamp>,
    ) -> Self {
        Self {
            name: name.into(),
            items,
            checked,
            saved_at,
        }
    }

    fn is_checked(&self, slug: &str) -> bool {
        self.checked.iter().any(|s| s == slug)
    }

    fn checked_count(&self) -> usize {
        self.items
            .iter()
            .filter(|entry| self.is_checked(entry.slug()))
            .count()
    }

    fn fmt_section(
        &self,
        f: &mut fmt::Formatter<'_>,
        title: &str,
        kind: ItemKind,
    ) -> fmt::Result {
        let entries: Vec<&ConsolidatedItem> = self
            .items
            .iter()
            .filter(|entry| entry.item.kind == kind)
            .collect();
        if entries.is_empty() {
            return Ok(());
        }

        writeln!(f, "## {title}")?;
        writeln!(f)?;
        for entry in entries {
            let mark = if self.is_checked(entry.slug()) { "x" } else { " " };
            let badge = if entry.is_optional { " *(optional)*" } else { "" };
            writeln!(f, "- [{mark}] {}{badge}", entry.item.title)?;

            if !entry.item.notes.is_empty() {
                writeln!(f, "  {}", entry.item.notes)?;
            }
            if !entry.item.shops.is_empty() {
                let shops: Vec<String> = entry
                    .item
                    .shops
                    .iter()
                    .map(|shop| shop.replace('-', " "))
                    .collect();
                writeln!(f, "  Available at: {}", shops.join(", "))?;
            }
        }
        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Display for ChecklistView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = if self.name.is_empty() {
            "Checklist"
        } else {
            self.name.as_str()
        };
        writeln!(f, "# {title}")?;
        writeln!(f)?;

        if let Some(saved_at) = &self.saved_at {
            writeln!(f, "- Saved: {}", LocalStamp(saved_at))?;
        }
        writeln!(f, "- Progress: {}/{}", self.checked_count(), self.items.len())?;
        writeln!(f)?;

        if self.items.is_empty() {
            writeln!(f, "No items on this checklist.")?;
            return Ok(());
        }

        self.fmt_section(f, "Equipment", ItemKind::Equipment)?;
        self.fmt_section(f, "Products", ItemKind::Product)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    fn entry(slug: &str, kind: ItemKind, optional: bool) -> ConsolidatedItem {
        ConsolidatedItem {
            item: Item {
                slug: slug.to_string(),
                title: slug.replace('-', " "),
                kind,
                notes: String::new(),
                shops: vec![],
            },
            is_required: !optional,
            is_optional: optional,
            required_by: vec![],
            optional_for: vec![],
        }
    }

    #[test]
    fn test_partitions_by_kind() {
        let view = ChecklistView::new(
            "Weekend",
            vec![
                entry("bucket", ItemKind::Equipment, false),
                entry("glass-cleaner", ItemKind::Product, false),
            ],
            vec![],
            None,
        );
        let output = format!("{view}");

        assert!(output.contains("# Weekend"));
        assert!(output.contains("## Equipment"));
        assert!(output.contains("## Products"));
        let equipment_at = output.find("## Equipment").expect("equipment section");
        let products_at = output.find("## Products").expect("products section");
        assert!(equipment_at < products_at);
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let view = ChecklistView::new(
            "Weekend",
            vec![entry("bucket", ItemKind::Equipment, false)],
            vec![],
            None,
        );
        let output = format!("{view}");

        assert!(output.contains("## Equipment"));
        assert!(!output.contains("## Products"));
    }

    #[test]
    fn test_checked_items_render_ticked() {
        let view = ChecklistView::new(
            "Weekend",
            vec![
                entry("bucket", ItemKind::Equipment, false),
                entry("mop", ItemKind::Equipment, false),
            ],
            vec!["mop".to_string()],
            None,
        );
        let output = format!("{view}");

        assert!(output.contains("- [ ] bucket"));
        assert!(output.contains("- [x] mop"));
        assert!(output.contains("- Progress: 1/2"));
    }

    #[test]
    fn test_optional_badge() {
        let view = ChecklistView::new(
            "Weekend",
            vec![entry("squeegee", ItemKind::Equipment, true)],
            vec![],
            None,
        );
        let output = format!("{view}");

        assert!(output.contains("- [ ] squeegee *(optional)*"));
    }

    #[test]
    fn test_notes_and_shops() {
        let mut item = entry("glass-cleaner", ItemKind::Product, false);
        item.item.notes = "Ammonia-free works on tinted glass.".to_string();
        item.item.shops = vec!["supermarket".to_string(), "hardware-store".to_string()];

        let view = ChecklistView::new("Weekend", vec![item], vec![], None);
        let output = format!("{view}");

        assert!(output.contains("Ammonia-free works on tinted glass."));
        assert!(output.contains("Available at: supermarket, hardware store"));
    }

    #[test]
    fn test_empty_checklist_text() {
        let view = ChecklistView::new("Weekend", vec![], vec![], None);
        let output = format!("{view}");

        assert!(output.contains("No items on this checklist."));
        assert!(output.contains("- Progress: 0/0"));
    }

    #[test]
    fn test_unnamed_falls_back_to_generic_title() {
        let view = ChecklistView::new("", vec![], vec![], None);
        let output = format!("{view}");
        assert!(output.contains("# Checklist"));
    }

    #[test]
    fn test_saved_stamp_included_when_present() {
        let saved_at = Timestamp::from_second(1640995200).expect("valid timestamp");
        let view = ChecklistView::new("Weekend", vec![], vec![], Some(saved_at));
        let output = format!("{view}");
        // Rendered in the system timezone, so only assert presence.
        assert!(output.contains("- Saved: 20"));

        let without = ChecklistView::new("Weekend", vec![], vec![], None);
        assert!(!format!("{without}").contains("- Saved:"));
    }
}
