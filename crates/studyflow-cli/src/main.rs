//! StudyFlow CLI Application
//!
//! Command-line interface for the StudyFlow study planner.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use studyflow_core::PlannerBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        offline,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .offline(offline)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(planner, renderer);

    info!("StudyFlow started");

    match command {
        Some(Commands::Plan { command }) => cli.handle_plan_command(command).await,
        Some(Commands::Task { command }) => cli.handle_task_command(command).await,
        Some(Commands::Streak) => cli.show_streak().await,
        None => cli.list_plans().await,
    }
}
