//! Command-line interface definitions and handlers
//!
//! This module defines the CLI structure using clap's derive API with the
//! parameter wrapper pattern: each command has a CLI-specific argument
//! struct (clap derives, help text, flag names) that converts into the
//! framework-free core parameter type via `From`. CLI concerns stay here;
//! the core types never see clap.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use studyflow_core::params::{CreatePlan, DeletePlan, Id, ToggleTask};
use studyflow_core::Planner;

use crate::renderer::TerminalRenderer;

/// Create a new study plan from goal input
///
/// The schedule is produced by the generation backend when available; any
/// generation trouble degrades to the deterministic offline planner, so the
/// command always yields a complete plan.
#[derive(Args)]
pub struct NewPlanArgs {
    /// What you are studying toward, e.g. "Final Exams"
    pub goal_name: String,
    /// Schedule end date in ISO form (YYYY-MM-DD), today or later
    #[arg(long)]
    pub deadline: String,
    /// Hours available per day, between 0.5 and 8
    #[arg(long, default_value_t = 3.0)]
    pub daily_hours: f64,
    /// Topic to study, as NAME or NAME:PRIORITY (high, medium, low).
    /// Repeat for multiple topics.
    #[arg(long = "topic", value_name = "NAME[:PRIORITY]", required = true)]
    pub topics: Vec<String>,
    /// Learning style: theory-first, practice-heavy, or balanced
    #[arg(long)]
    pub style: Option<String>,
    /// Difficulty level: beginner, intermediate, or advanced
    #[arg(long)]
    pub difficulty: Option<String>,
}

impl From<NewPlanArgs> for CreatePlan {
    fn from(val: NewPlanArgs) -> Self {
        CreatePlan {
            goal_name: val.goal_name,
            deadline: val.deadline,
            daily_hours: val.daily_hours,
            topics: val.topics,
            learning_style: val.style,
            difficulty: val.difficulty,
        }
    }
}

/// Show details of a specific plan
#[derive(Args)]
pub struct ShowPlanArgs {
    /// ID of the plan to display
    #[arg(help = "Unique identifier of the plan to show details for")]
    pub id: u64,
}

impl From<ShowPlanArgs> for Id {
    fn from(val: ShowPlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Regenerate a plan's schedule from its stored goal input
///
/// Completed tasks keep their identifiers; identifiers that no longer match
/// a position in the new schedule simply stop counting toward progress.
#[derive(Args)]
pub struct RegeneratePlanArgs {
    /// ID of the plan to regenerate
    pub id: u64,
}

impl From<RegeneratePlanArgs> for Id {
    fn from(val: RegeneratePlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a plan permanently
#[derive(Args)]
pub struct DeletePlanArgs {
    /// ID of the plan to delete
    #[arg(help = "Unique identifier of the plan to permanently delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeletePlanArgs> for DeletePlan {
    fn from(val: DeletePlanArgs) -> Self {
        DeletePlan {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new plan with a generated schedule
    #[command(alias = "n")]
    New(NewPlanArgs),
    /// List all plans
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a specific plan
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Regenerate a plan's schedule
    #[command(alias = "r")]
    Regenerate(RegeneratePlanArgs),
    /// Delete a plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
}

/// Toggle completion of one scheduled task
///
/// Day and task numbers are the 1-based numbers shown by `plan show`.
/// Checking an already-completed task marks it incomplete again.
#[derive(Args)]
pub struct CheckTaskArgs {
    /// ID of the plan holding the task
    pub plan_id: u64,
    /// Day number as shown in the schedule (starting at 1)
    pub day: u64,
    /// Task number within the day (starting at 1)
    pub task: u64,
}

/// List today's scheduled tasks for a plan
#[derive(Args)]
pub struct TodayArgs {
    /// ID of the plan to look up
    pub plan_id: u64,
}

impl From<TodayArgs> for Id {
    fn from(val: TodayArgs) -> Self {
        Id { id: val.plan_id }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Toggle completion of a task
    #[command(alias = "c")]
    Check(CheckTaskArgs),
    /// Show today's tasks
    Today(TodayArgs),
}

/// Command handler tying the planner to terminal output.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new CLI handler.
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    /// Dispatch a plan subcommand.
    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::New(args) => {
                let created = self
                    .planner
                    .generate_plan(&args.into())
                    .await
                    .context("Failed to create plan")?;
                self.renderer.render(&created.to_string())
            }
            PlanCommands::List => self.list_plans().await,
            PlanCommands::Show(args) => {
                let params: Id = args.into();
                match self.planner.show_plan(&params).await? {
                    Some(plan) => self.renderer.render(&plan.to_string()),
                    None => self
                        .renderer
                        .render(&format!("Plan with ID {} not found.\n", params.id)),
                }
            }
            PlanCommands::Regenerate(args) => {
                let updated = self
                    .planner
                    .regenerate_schedule(&args.into())
                    .await
                    .context("Failed to regenerate schedule")?;
                self.renderer.render(&updated.to_string())
            }
            PlanCommands::Delete(args) => {
                let params: DeletePlan = args.into();
                match self.planner.delete_plan(&params).await? {
                    Some(deleted) => self.renderer.render(&deleted.to_string()),
                    None => self
                        .renderer
                        .render(&format!("Plan with ID {} not found.\n", params.id)),
                }
            }
        }
    }

    /// Dispatch a task subcommand.
    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Check(args) => {
                // The CLI takes the 1-based numbers the schedule displays
                let (Some(day), Some(task)) =
                    (args.day.checked_sub(1), args.task.checked_sub(1))
                else {
                    bail!("Day and task numbers start at 1");
                };
                let params = ToggleTask {
                    plan_id: args.plan_id,
                    day: day as usize,
                    task: task as usize,
                };
                let updated = self
                    .planner
                    .toggle_task(&params)
                    .await
                    .context("Failed to toggle task")?;
                self.renderer.render(&updated.to_string())
            }
            TaskCommands::Today(args) => {
                let listing = self.planner.today_tasks(&args.into()).await?;
                self.renderer.render(&listing.to_string())
            }
        }
    }

    /// List all plans as summaries.
    pub async fn list_plans(&self) -> Result<()> {
        let summaries = self.planner.list_plans_summary().await?;
        if summaries.is_empty() {
            self.renderer.render(&summaries.to_string())
        } else {
            self.renderer
                .render(&format!("# Plans\n\n{summaries}"))
        }
    }

    /// Show the consecutive-study-day streak.
    pub async fn show_streak(&self) -> Result<()> {
        let streak = self.planner.streak().await?;
        self.renderer.render(&streak.to_string())
    }
}
