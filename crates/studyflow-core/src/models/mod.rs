//! Data models for study goals, schedules, and plans.
//!
//! This module contains the core domain models of the StudyFlow planning
//! system. Display implementations live in [`crate::display::models`] to keep
//! data structures separate from presentation logic.
//!
//! The model layer splits into three groups:
//!
//! - **Goal input** ([`StudyGoal`], [`GoalDraft`], [`Topic`]): what the user
//!   asks for. A [`GoalDraft`] may be partial; resolving it applies the same
//!   defaults the fallback planner assumes.
//! - **Schedule** ([`SchedulePlan`], [`DaySchedule`], [`StudyTask`]): the
//!   day-by-day output of generation. These types double as the wire contract
//!   for generated JSON, so decoding is lenient and acceptance is decided by
//!   [`SchedulePlan::is_usable`].
//! - **Aggregate** ([`Plan`], [`PlanSummary`]): a goal merged with its
//!   schedule and completion state, as persisted and listed.

pub mod goal;
pub mod plan;
pub mod schedule;
pub mod status;
pub mod summary;


// Re-export all public types at the models level
pub use goal::{
    GoalDraft, StudyGoal, Topic, DEFAULT_DAILY_HOURS, DEFAULT_GOAL_NAME, DEFAULT_HORIZON_DAYS,
    DEFAULT_TOPIC_NAME,
};
pub use plan::Plan;
pub use schedule::{DaySchedule, SchedulePlan, StudyTask};
pub use status::{Difficulty, LearningStyle, Priority, TaskKind};
pub use summary::PlanSummary;
