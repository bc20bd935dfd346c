//! Kitlist CLI Application
//!
//! Command-line front end for the kitlist checklist wizard: pick tasks, fold
//! in related suggestions, name the checklist, then tick items off across
//! sessions.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use kitlist_core::{Catalogs, WizardBuilder};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        data_dir,
        no_color,
        command,
    } = Args::parse();

    let catalogs = Catalogs::load(&data_dir)
        .with_context(|| format!("Failed to load catalogs from {}", data_dir.display()))?;

    let wizard = WizardBuilder::new()
        .with_tasks(catalogs.tasks.clone())
        .with_store_path(database_file)
        .build()
        .await
        .context("Failed to initialize wizard")?;

    let renderer = TerminalRenderer::new(!no_color);
    let mut cli = Cli::new(catalogs, wizard, renderer);

    info!("Kitlist started");

    match command {
        Some(Tasks) => cli.list_tasks(),
        Some(Start(start)) => cli.start(start).await,
        Some(Show) => cli.show(),
        Some(Check(check)) => cli.check(&check.into()).await,
        Some(Reset(reset)) => cli.reset(&reset.into()).await,
        None => cli.show(),
    }
}
