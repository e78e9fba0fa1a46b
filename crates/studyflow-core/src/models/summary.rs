//! Plan summary types and functionality.

use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Plan;

/// Summary information about a plan with task statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Plan ID
    pub id: u64,
    /// Goal the plan works toward
    pub goal_name: String,
    /// Last day of the schedule
    pub deadline: Date,
    /// Number of schedule days
    pub total_days: usize,
    /// Total number of tasks across the schedule
    pub total_tasks: usize,
    /// Number of completed tasks counted against the current schedule
    pub completed_tasks: usize,
    /// Completion percentage, 0 through 100
    pub progress: u8,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Last update timestamp
    pub updated_at: Timestamp,
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        Self {
            id: plan.id,
            goal_name: plan.goal.goal_name.clone(),
            deadline: plan.goal.deadline,
            total_days: plan.total_days(),
            total_tasks: plan.total_tasks(),
            completed_tasks: plan.valid_completed_count(),
            progress: plan.progress,
            created_at: plan.created_at,
            updated_at: plan.updated_at,
        }
    }
}
