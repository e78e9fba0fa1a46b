//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use super::datetime::friendly_date;
use crate::models::{PlanSummary, StudyTask, TaskKind};

/// Newtype wrapper for displaying collections of plan summaries.
///
/// Provides clean Display formatting for plan collections and handles empty
/// collections gracefully.
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl PlanSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of plan summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the plan summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, PlanSummary> {
        self.0.iter()
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plans found.")
        } else {
            for plan in &self.0 {
                write!(f, "{plan}")?;
            }
            Ok(())
        }
    }
}

/// The tasks scheduled for one calendar date, with completion marks.
pub struct TodayTasks {
    /// ISO date the listing refers to
    pub date: String,
    /// Theme of the matching schedule day, if any
    pub theme: Option<String>,
    /// Tasks with their completion state
    pub tasks: Vec<(StudyTask, bool)>,
}

impl fmt::Display for TodayTasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Today ({})", friendly_date(&self.date))?;
        writeln!(f)?;

        if self.tasks.is_empty() {
            return writeln!(f, "No tasks scheduled for today.");
        }

        if let Some(theme) = &self.theme {
            writeln!(f, "Theme: {theme}")?;
            writeln!(f)?;
        }
        for (task, checked) in &self.tasks {
            let checkbox = if *checked { "x" } else { " " };
            let title = if task.topic.is_empty() {
                &task.subject
            } else {
                &task.topic
            };
            write!(
                f,
                "- [{checkbox}] {}: {title}",
                TaskKind::label_for(&task.kind)
            )?;
            if !task.duration.is_empty() {
                write!(f, " ({})", task.duration)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summaries_display() {
        let summaries = PlanSummaries(Vec::new());
        assert!(summaries.is_empty());
        assert_eq!(summaries.len(), 0);
        assert!(format!("{summaries}").contains("No plans found."));
    }

    #[test]
    fn test_today_without_tasks() {
        let today = TodayTasks {
            date: "2025-03-01".to_string(),
            theme: None,
            tasks: Vec::new(),
        };
        assert!(format!("{today}").contains("No tasks scheduled for today."));
    }

    #[test]
    fn test_today_lists_tasks_with_checkboxes() {
        let task = StudyTask {
            subject: "Math".to_string(),
            topic: "Math - Day 1".to_string(),
            duration: "2.5 hours".to_string(),
            kind: "study".to_string(),
            description: None,
        };
        let today = TodayTasks {
            date: "2025-03-01".to_string(),
            theme: Some("Math".to_string()),
            tasks: vec![(task.clone(), true), (task, false)],
        };

        let output = format!("{today}");
        assert!(output.contains("Theme: Math"));
        assert!(output.contains("- [x] 📚 Study: Math - Day 1 (2.5 hours)"));
        assert!(output.contains("- [ ] 📚 Study: Math - Day 1 (2.5 hours)"));
    }
}
