//! Core library for the StudyFlow study-plan application.
//!
//! This crate turns a study goal (name, deadline, daily hours, prioritized
//! topics) into a day-by-day schedule and tracks completion against it. The
//! schedule preferably comes from a hosted text-generation backend; when
//! generation fails or returns unusable output, a deterministic fallback
//! planner steps in, so plan creation never fails.
//!
//! # Architecture
//!
//! - [`models`]: goal input, schedule, and plan aggregate types
//! - [`generate`]: the generation pipeline (prompt builder, backend client
//!   with bounded retry, lenient response parser, fallback planner,
//!   orchestrator)
//! - [`progress`]: completion tracking and progress derivation
//! - [`db`]: SQLite persistence of plan aggregates and the streak counter
//! - [`planner`]: the high-level async API tying the pieces together
//! - [`display`]: markdown formatting of models and operation results
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use studyflow_core::{params::CreatePlan, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a planner instance (offline: fallback schedules only)
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("studyflow.db"))
//!     .offline(true)
//!     .build()
//!     .await?;
//!
//! // Create a plan; this succeeds even when generation is unavailable
//! let params = CreatePlan {
//!     goal_name: "Exam Prep".to_string(),
//!     deadline: "2099-06-01".to_string(),
//!     daily_hours: 3.0,
//!     topics: vec!["Math:high".to_string(), "Physics:medium".to_string()],
//!     learning_style: None,
//!     difficulty: None,
//! };
//! let created = planner.generate_plan(&params).await?;
//! println!("{created}");
//!
//! // Track completion
//! use studyflow_core::params::ToggleTask;
//! let updated = planner
//!     .toggle_task(&ToggleTask {
//!         plan_id: created.plan.id,
//!         day: 0,
//!         task: 0,
//!     })
//!     .await?;
//! println!("{updated}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod generate;
pub mod models;
pub mod params;
pub mod planner;
pub mod progress;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    DeleteResult, NewPlan, PlanSummaries, Streak, TodayTasks, UpdateResult,
};
pub use error::{PlannerError, Result};
pub use generate::{
    GeneratedPlan, GenerationBackend, GenerationError, HuggingFaceBackend, PlanGenerator,
    PlanSource, RetryPolicy, GENERATION_ADVISORY,
};
pub use models::{
    DaySchedule, Difficulty, GoalDraft, LearningStyle, Plan, PlanSummary, Priority, SchedulePlan,
    StudyGoal, StudyTask, TaskKind, Topic,
};
pub use params::{CreatePlan, DeletePlan, Id, ToggleTask};
pub use planner::{Planner, PlannerBuilder};
pub use progress::{completion_percent, task_id};
