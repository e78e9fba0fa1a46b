//! Enumerations for goal input and task classification.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of topic priorities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Priority {
    /// Topic should be covered first and most often
    #[default]
    High,

    /// Regular coverage
    Medium,

    /// Cover when time allows
    Low,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

impl Priority {
    /// Convert to the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Numeric weight for sorting topics by importance.
    pub fn weight(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

/// How the user prefers to split theory and practice time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum LearningStyle {
    /// Concepts before exercises
    #[serde(rename = "Theory first")]
    TheoryFirst,

    /// Exercises drive the schedule
    #[serde(rename = "Practice heavy")]
    PracticeHeavy,

    /// Even split
    #[default]
    Balanced,
}

impl FromStr for LearningStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], " ").as_str() {
            "theory first" | "theory" => Ok(LearningStyle::TheoryFirst),
            "practice heavy" | "practice" => Ok(LearningStyle::PracticeHeavy),
            "balanced" => Ok(LearningStyle::Balanced),
            _ => Err(format!("Invalid learning style: {s}")),
        }
    }
}

impl LearningStyle {
    /// Convert to the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            LearningStyle::TheoryFirst => "Theory first",
            LearningStyle::PracticeHeavy => "Practice heavy",
            LearningStyle::Balanced => "Balanced",
        }
    }
}

/// Self-assessed difficulty of the material.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// New to the subject
    Beginner,

    /// Some prior exposure
    #[default]
    Intermediate,

    /// Deepening existing knowledge
    Advanced,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(format!("Invalid difficulty: {s}")),
        }
    }
}

impl Difficulty {
    /// Convert to the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

/// Recognized task types on a schedule day.
///
/// Generated schedules may carry task types outside this set; those are
/// tolerated and rendered with a generic label instead of failing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    /// Learning new material
    Study,

    /// Exercises and applied work
    Practice,

    /// Consolidating previously covered material
    Revision,

    /// Scheduled rest
    Break,
}

impl FromStr for TaskKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "study" => Ok(TaskKind::Study),
            "practice" => Ok(TaskKind::Practice),
            "revision" => Ok(TaskKind::Revision),
            "break" => Ok(TaskKind::Break),
            _ => Err(format!("Invalid task kind: {s}")),
        }
    }
}

impl TaskKind {
    /// Convert to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Study => "study",
            TaskKind::Practice => "practice",
            TaskKind::Revision => "revision",
            TaskKind::Break => "break",
        }
    }

    /// Get the kind with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use studyflow_core::models::TaskKind;
    ///
    /// assert_eq!(TaskKind::Study.with_icon(), "📚 Study");
    /// assert_eq!(TaskKind::Revision.with_icon(), "🔄 Revision");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            TaskKind::Study => "📚 Study",
            TaskKind::Practice => "💻 Practice",
            TaskKind::Revision => "🔄 Revision",
            TaskKind::Break => "☕ Break",
        }
    }

    /// Display label for a raw task-type string, falling back to a generic
    /// label for unrecognized values.
    pub fn label_for(raw: &str) -> &'static str {
        raw.parse::<TaskKind>()
            .map(|kind| kind.with_icon())
            .unwrap_or("📝 Task")
    }
}
