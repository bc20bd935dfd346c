//! Catalog and suggestion listing wrappers.

use std::fmt;

use crate::models::TaskCatalog;

/// Newtype wrapper listing the task catalog as markdown.
///
/// One bullet per task with its item counts and related-task hints, so a
/// user can pick identifiers for the selection step. Handles an empty
/// catalog gracefully.
pub struct TaskOverview(pub TaskCatalog);

impl fmt::Display for TaskOverview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks in the catalog.");
        }

        writeln!(f, "# Available Tasks")?;
        writeln!(f)?;
        for (task_id, task) in &self.0 {
            write!(
                f,
                "- **{task_id}**: {} required, {} optional",
                task.required.len(),
                task.optional.len()
            )?;
            if task.related_tasks.is_empty() {
                writeln!(f)?;
            } else {
                writeln!(f, " (related: {})", task.related_tasks.join(", "))?;
            }
        }
        Ok(())
    }
}

/// Newtype wrapper for the related-suggestions prompt.
pub struct RelatedPrompt(pub Vec<String>);

impl fmt::Display for RelatedPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No related suggestions.");
        }

        writeln!(f, "# Related Tasks")?;
        writeln!(f)?;
        writeln!(f, "These tasks are often done together with your selection:")?;
        writeln!(f)?;
        for task_id in &self.0 {
            writeln!(f, "- {task_id}")?;
        }
        Ok(())
    }
}
