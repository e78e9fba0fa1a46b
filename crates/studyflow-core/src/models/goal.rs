//! Study-goal input models.

use jiff::civil::Date;
use jiff::ToSpan;
use serde::{Deserialize, Serialize};

use super::{Difficulty, LearningStyle, Priority};

/// Default goal name used when the input omits one.
pub const DEFAULT_GOAL_NAME: &str = "Study Plan";

/// Default planning horizon, in days from today, when no deadline is given.
pub const DEFAULT_HORIZON_DAYS: i64 = 14;

/// Default daily study hours.
pub const DEFAULT_DAILY_HOURS: f64 = 3.0;

/// Name of the placeholder topic used when the input names none.
pub const DEFAULT_TOPIC_NAME: &str = "General Study";

/// A single subject or topic the user wants to study.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Topic {
    /// Topic name as entered by the user
    pub name: String,

    /// Scheduling priority relative to other topics
    #[serde(default)]
    pub priority: Priority,
}

impl Topic {
    /// Creates a topic with the given name and priority.
    pub fn new(name: impl Into<String>, priority: Priority) -> Self {
        Self {
            name: name.into(),
            priority,
        }
    }
}

/// Fully specified study-goal input.
///
/// This is the validated form consumed by the generation pipeline. Use
/// [`GoalDraft`] when fields may be missing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudyGoal {
    /// What the user is studying toward
    pub goal_name: String,

    /// Last day of the schedule (inclusive)
    pub deadline: Date,

    /// Hours available per day, 0.5 through 8.0
    pub daily_hours: f64,

    /// Topics in the order the user entered them
    pub topics: Vec<Topic>,

    /// Preferred theory/practice balance
    #[serde(default)]
    pub learning_style: LearningStyle,

    /// Self-assessed difficulty of the material
    #[serde(default)]
    pub difficulty: Difficulty,
}

/// Partially specified goal input.
///
/// Every field is optional; [`GoalDraft::resolve`] fills the gaps with the
/// same defaults the fallback planner assumes, so that downstream code never
/// has to handle missing input.
#[derive(Debug, Clone, Default)]
pub struct GoalDraft {
    pub goal_name: Option<String>,
    pub deadline: Option<Date>,
    pub daily_hours: Option<f64>,
    pub topics: Vec<Topic>,
    pub learning_style: Option<LearningStyle>,
    pub difficulty: Option<Difficulty>,
}

impl GoalDraft {
    /// Resolves the draft into a complete goal, defaulting any missing
    /// field: the goal name becomes "Study Plan", the deadline lands two
    /// weeks from `today`, daily hours become 3.0, and an empty topic list
    /// becomes a single high-priority "General Study" topic.
    pub fn resolve(self, today: Date) -> StudyGoal {
        let deadline = self
            .deadline
            .unwrap_or_else(|| today.saturating_add(DEFAULT_HORIZON_DAYS.days()));

        let topics = if self.topics.is_empty() {
            vec![Topic::new(DEFAULT_TOPIC_NAME, Priority::High)]
        } else {
            self.topics
        };

        StudyGoal {
            goal_name: self
                .goal_name
                .unwrap_or_else(|| DEFAULT_GOAL_NAME.to_string()),
            deadline,
            daily_hours: self.daily_hours.unwrap_or(DEFAULT_DAILY_HOURS),
            topics,
            learning_style: self.learning_style.unwrap_or_default(),
            difficulty: self.difficulty.unwrap_or_default(),
        }
    }
}
