//! Parameter structures for StudyFlow operations
//!
//! Shared parameter structures usable across different interfaces (CLI,
//! future REST surface) without framework-specific derives. Interface
//! layers wrap these with their own derives and convert via `From`, keeping
//! the core types free of UI concerns.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::{Difficulty, LearningStyle, Priority, StudyGoal, Topic};

/// Minimum accepted daily study hours.
pub const MIN_DAILY_HOURS: f64 = 0.5;

/// Maximum accepted daily study hours.
pub const MAX_DAILY_HOURS: f64 = 8.0;

/// Generic parameters for operations requiring just an ID.
///
/// Used for operations like show_plan, regenerate_schedule, today_tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new plan from goal input.
///
/// Carries the raw form-level values; [`CreatePlan::to_goal`] validates
/// them into a [`StudyGoal`] before generation runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlan {
    /// What the user is studying toward (required, non-empty)
    pub goal_name: String,
    /// Schedule end date in ISO form, today or later
    pub deadline: String,
    /// Hours available per day, 0.5 through 8.0
    pub daily_hours: f64,
    /// Topics as `name` or `name:priority` specs, at least one
    pub topics: Vec<String>,
    /// Preferred theory/practice balance
    pub learning_style: Option<String>,
    /// Self-assessed difficulty of the material
    pub difficulty: Option<String>,
}

impl CreatePlan {
    /// Validates the raw input into a study goal.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` naming the offending field when
    /// the goal name is empty, the deadline is malformed or in the past,
    /// the daily hours fall outside 0.5..=8.0, no topic is given, or a
    /// topic spec has an empty name or unknown priority.
    pub fn to_goal(&self, today: Date) -> Result<StudyGoal> {
        let goal_name = self.goal_name.trim();
        if goal_name.is_empty() {
            return Err(PlannerError::invalid_input(
                "goal_name",
                "Goal name must not be empty",
            ));
        }

        let deadline: Date = self.deadline.parse().map_err(|e| {
            PlannerError::invalid_input(
                "deadline",
                format!("Expected an ISO date (YYYY-MM-DD): {e}"),
            )
        })?;
        if deadline < today {
            return Err(PlannerError::invalid_input(
                "deadline",
                format!("Deadline {deadline} is in the past"),
            ));
        }

        if !(MIN_DAILY_HOURS..=MAX_DAILY_HOURS).contains(&self.daily_hours) {
            return Err(PlannerError::invalid_input(
                "daily_hours",
                format!(
                    "Daily hours must be between {MIN_DAILY_HOURS} and {MAX_DAILY_HOURS}, got {}",
                    self.daily_hours
                ),
            ));
        }

        if self.topics.is_empty() {
            return Err(PlannerError::invalid_input(
                "topics",
                "At least one topic is required",
            ));
        }
        let topics = self
            .topics
            .iter()
            .map(|spec| parse_topic_spec(spec))
            .collect::<Result<Vec<_>>>()?;

        let learning_style = match &self.learning_style {
            Some(raw) => raw
                .parse::<LearningStyle>()
                .map_err(|e| PlannerError::invalid_input("learning_style", e))?,
            None => LearningStyle::default(),
        };
        let difficulty = match &self.difficulty {
            Some(raw) => raw
                .parse::<Difficulty>()
                .map_err(|e| PlannerError::invalid_input("difficulty", e))?,
            None => Difficulty::default(),
        };

        Ok(StudyGoal {
            goal_name: goal_name.to_string(),
            deadline,
            daily_hours: self.daily_hours,
            topics,
            learning_style,
            difficulty,
        })
    }
}

/// Parses a `name` or `name:priority` topic spec. The priority defaults to
/// High when omitted.
fn parse_topic_spec(spec: &str) -> Result<Topic> {
    let (name, priority) = match spec.rsplit_once(':') {
        Some((name, priority)) => {
            let priority = priority
                .parse::<Priority>()
                .map_err(|e| PlannerError::invalid_input("topics", e))?;
            (name, priority)
        }
        None => (spec, Priority::High),
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(PlannerError::invalid_input(
            "topics",
            "Topic name must not be empty",
        ));
    }

    Ok(Topic::new(name, priority))
}

/// Parameters for toggling completion of one task.
///
/// Day and task positions are zero-based indexes into the current schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToggleTask {
    /// ID of the plan holding the task
    pub plan_id: u64,
    /// Zero-based day index
    pub day: usize,
    /// Zero-based task index within the day
    pub task: usize,
}

/// Parameters for permanently deleting a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeletePlan {
    /// ID of the plan to delete
    pub id: u64,
    /// Explicit confirmation flag; deletion is refused without it
    pub confirmed: bool,
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn valid_params() -> CreatePlan {
        CreatePlan {
            goal_name: "Exam Prep".to_string(),
            deadline: "2025-03-11".to_string(),
            daily_hours: 3.0,
            topics: vec!["Math:high".to_string(), "Physics:medium".to_string()],
            learning_style: None,
            difficulty: None,
        }
    }

    fn today() -> Date {
        date(2025, 3, 1)
    }

    #[test]
    fn test_to_goal_valid() {
        let goal = valid_params().to_goal(today()).unwrap();

        assert_eq!(goal.goal_name, "Exam Prep");
        assert_eq!(goal.deadline, date(2025, 3, 11));
        assert_eq!(goal.topics.len(), 2);
        assert_eq!(goal.topics[0].priority, Priority::High);
        assert_eq!(goal.topics[1].priority, Priority::Medium);
        assert_eq!(goal.learning_style, LearningStyle::Balanced);
    }

    #[test]
    fn test_to_goal_rejects_empty_name() {
        let mut params = valid_params();
        params.goal_name = "   ".to_string();

        match params.to_goal(today()).unwrap_err() {
            PlannerError::InvalidInput { field, .. } => assert_eq!(field, "goal_name"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_to_goal_rejects_past_deadline() {
        let mut params = valid_params();
        params.deadline = "2025-02-28".to_string();

        match params.to_goal(today()).unwrap_err() {
            PlannerError::InvalidInput { field, reason } => {
                assert_eq!(field, "deadline");
                assert!(reason.contains("in the past"));
            }
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_to_goal_accepts_same_day_deadline() {
        let mut params = valid_params();
        params.deadline = "2025-03-01".to_string();
        assert!(params.to_goal(today()).is_ok());
    }

    #[test]
    fn test_to_goal_rejects_out_of_range_hours() {
        for hours in [0.0, 0.4, 8.5, -1.0] {
            let mut params = valid_params();
            params.daily_hours = hours;
            assert!(params.to_goal(today()).is_err(), "hours {hours}");
        }
        for hours in [0.5, 8.0] {
            let mut params = valid_params();
            params.daily_hours = hours;
            assert!(params.to_goal(today()).is_ok(), "hours {hours}");
        }
    }

    #[test]
    fn test_to_goal_requires_topics() {
        let mut params = valid_params();
        params.topics.clear();
        assert!(params.to_goal(today()).is_err());
    }

    #[test]
    fn test_topic_spec_defaults_to_high_priority() {
        let topic = parse_topic_spec("Math").unwrap();
        assert_eq!(topic.priority, Priority::High);

        let topic = parse_topic_spec("Math:low").unwrap();
        assert_eq!(topic.priority, Priority::Low);

        assert!(parse_topic_spec(":high").is_err());
        assert!(parse_topic_spec("Math:urgent").is_err());
    }

    #[test]
    fn test_to_goal_parses_styles() {
        let mut params = valid_params();
        params.learning_style = Some("practice-heavy".to_string());
        params.difficulty = Some("advanced".to_string());

        let goal = params.to_goal(today()).unwrap();
        assert_eq!(goal.learning_style, LearningStyle::PracticeHeavy);
        assert_eq!(goal.difficulty, Difficulty::Advanced);

        params = valid_params();
        params.difficulty = Some("impossible".to_string());
        assert!(params.to_goal(today()).is_err());
    }
}
