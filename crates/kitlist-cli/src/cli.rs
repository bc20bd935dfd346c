//! Command handlers bridging clap arguments and the wizard.

use anyhow::Result;
use kitlist_core::{
    consolidate::consolidate,
    params::{ConfirmRelated, NameChecklist, ResetChecklist, SelectTasks, ToggleItem},
    Catalogs, ChecklistView, RelatedPrompt, Screen, TaskOverview, Wizard,
};

use crate::args::StartArgs;
use crate::renderer::TerminalRenderer;

/// Command dispatcher holding the loaded catalogs, the wizard, and the
/// output renderer.
pub struct Cli {
    catalogs: Catalogs,
    wizard: Wizard,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(catalogs: Catalogs, wizard: Wizard, renderer: TerminalRenderer) -> Self {
        Self {
            catalogs,
            wizard,
            renderer,
        }
    }

    /// Render the task catalog so the user can pick identifiers.
    pub fn list_tasks(&self) -> Result<()> {
        self.renderer
            .render(&TaskOverview(self.catalogs.tasks.clone()).to_string())
    }

    /// Drive the wizard from a task selection as far as the flags allow.
    ///
    /// Stops without saving when related suggestions need an answer or when
    /// the checklist still needs a name; both hints tell the user which flag
    /// to re-run with.
    pub async fn start(&mut self, args: StartArgs) -> Result<()> {
        let screen = self.wizard.submit_task_selection(&SelectTasks {
            tasks: args.tasks,
        });

        if screen == Screen::Related {
            if args.with_tasks.is_empty() && !args.skip_related {
                let prompt = RelatedPrompt(self.wizard.potential_related_tasks().to_vec());
                self.renderer.render(&prompt.to_string())?;
                self.renderer.render(
                    "\nRe-run with `--with <TASK>` to take suggestions along, or `--skip-related` to continue without them.\n",
                )?;
                return Ok(());
            }
            self.wizard.confirm_related_selection(&ConfirmRelated {
                tasks: args.with_tasks,
            });
        }

        match args.name {
            Some(name) => {
                self.wizard
                    .submit_checklist_name(&NameChecklist { name })
                    .await?;
                self.show()
            }
            None => self.renderer.render(
                "Your selection needs a name before the checklist is saved. Re-run with `--name <NAME>`.\n",
            ),
        }
    }

    /// Render the saved checklist with its checked state.
    pub fn show(&self) -> Result<()> {
        if self.wizard.screen() != Screen::Checklist {
            return self
                .renderer
                .render("No saved checklist. Run `kl start <TASK>...` to create one.\n");
        }

        let items = consolidate(
            self.wizard.selected_tasks(),
            &self.catalogs.tasks,
            &self.catalogs.items,
        );
        let view = ChecklistView::new(
            self.wizard.checklist_name(),
            items,
            self.wizard.checked_items().to_vec(),
            self.wizard.saved_at().copied(),
        );
        self.renderer.render(&view.to_string())
    }

    /// Toggle one item and report which way it flipped.
    pub async fn check(&mut self, params: &ToggleItem) -> Result<()> {
        if self.wizard.screen() != Screen::Checklist {
            return self
                .renderer
                .render("No saved checklist. Run `kl start <TASK>...` to create one.\n");
        }

        self.wizard.toggle_item(params).await?;
        let now_checked = self
            .wizard
            .checked_items()
            .iter()
            .any(|slug| slug == &params.slug);
        let verb = if now_checked { "Checked" } else { "Unchecked" };
        self.renderer.render(&format!("{verb} '{}'.\n", params.slug))
    }

    /// Clear the saved checklist after confirmation.
    pub async fn reset(&mut self, params: &ResetChecklist) -> Result<()> {
        self.wizard.reset(params).await?;
        self.renderer
            .render("Checklist cleared. Run `kl start <TASK>...` to begin a new one.\n")
    }
}
