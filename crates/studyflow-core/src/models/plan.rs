//! Plan model definition and related functionality.

use std::collections::BTreeSet;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{DaySchedule, StudyGoal};

/// Represents a persisted study plan: the goal input it was created from,
/// the generated (or fallback) schedule, and the completion state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: u64,

    /// Goal input the schedule was generated from
    #[serde(flatten)]
    pub goal: StudyGoal,

    /// Title of the generated schedule
    pub plan_name: String,

    /// One entry per calendar day, in chronological order
    pub schedule: Vec<DaySchedule>,

    /// Advisory study tips attached to the plan
    #[serde(default)]
    pub tips: Vec<String>,

    /// Identifiers of completed tasks, each `"{day}-{task}"` with zero-based
    /// positions. Identifiers referencing a replaced schedule are kept but
    /// contribute nothing to progress.
    #[serde(default)]
    pub completed_tasks: BTreeSet<String>,

    /// Derived completion percentage, 0 through 100
    #[serde(default)]
    pub progress: u8,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plan was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Plan {
    /// Number of days in the current schedule.
    pub fn total_days(&self) -> usize {
        self.schedule.len()
    }
}
