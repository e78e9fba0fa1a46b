use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{PlanCommands, TaskCommands};

/// Main command-line interface for the StudyFlow study planner
///
/// StudyFlow turns a study goal (deadline, daily hours, prioritized topics)
/// into a day-by-day schedule and tracks completion against it. Schedules
/// are produced by a hosted text-generation backend when available and by a
/// deterministic fallback planner otherwise, so plan creation always
/// succeeds.
#[derive(Parser)]
#[command(version, about, name = "sf")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/studyflow/studyflow.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Skip AI generation and build schedules with the offline planner
    #[arg(long, global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the StudyFlow CLI
///
/// The CLI is organized into three command categories:
/// - `plan`: Operations for managing study plans (new, list, show, etc.)
/// - `task`: Operations on individual schedule tasks (check, today)
/// - `streak`: Show the consecutive-study-day counter
#[derive(Subcommand)]
pub enum Commands {
    /// Manage study plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Work with scheduled tasks
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Show the consecutive-study-day streak
    Streak,
}
