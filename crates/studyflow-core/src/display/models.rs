//! Display implementations for domain models.
//!
//! All Display trait implementations for the core domain models live here,
//! separated from the model definitions to keep data structures and
//! presentation apart. Output is markdown for rich terminal rendering.

use std::fmt;

use super::datetime::{friendly_date, LocalDateTime};
use crate::models::{
    DaySchedule, Difficulty, LearningStyle, Plan, PlanSummary, Priority, StudyTask, TaskKind,
};
use crate::progress::task_id;

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.goal.goal_name)?;
        writeln!(f)?;

        // Metadata section
        writeln!(
            f,
            "- Progress: {}% ({}/{} tasks)",
            self.progress,
            self.valid_completed_count(),
            self.total_tasks()
        )?;
        writeln!(
            f,
            "- Deadline: {} ({} days scheduled)",
            friendly_date(&self.goal.deadline.to_string()),
            self.total_days()
        )?;
        writeln!(f, "- Daily hours: {}", self.goal.daily_hours)?;
        writeln!(
            f,
            "- Style: {}, difficulty: {}",
            self.goal.learning_style, self.goal.difficulty
        )?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if !self.goal.topics.is_empty() {
            writeln!(f, "\n## Topics")?;
            writeln!(f)?;
            for topic in &self.goal.topics {
                writeln!(f, "- {} (Priority: {})", topic.name, topic.priority)?;
            }
        }

        if self.schedule.is_empty() {
            writeln!(f, "\nNo schedule in this plan.")?;
        } else {
            writeln!(f, "\n## Schedule")?;
            writeln!(f)?;
            for (index, day) in self.schedule.iter().enumerate() {
                self.fmt_day(f, index, day)?;
            }
        }

        if !self.tips.is_empty() {
            writeln!(f, "## Tips")?;
            writeln!(f)?;
            for tip in &self.tips {
                writeln!(f, "- {tip}")?;
            }
        }

        Ok(())
    }
}

impl Plan {
    /// Format one schedule day with completion checkboxes.
    fn fmt_day(&self, f: &mut fmt::Formatter<'_>, index: usize, day: &DaySchedule) -> fmt::Result {
        let done_marker = if !day.tasks.is_empty() && self.day_complete(index) {
            " ✓"
        } else {
            ""
        };
        writeln!(
            f,
            "### Day {}: {} ({}){done_marker}",
            day.day,
            day.theme,
            friendly_date(&day.date)
        )?;
        writeln!(f)?;

        if day.tasks.is_empty() {
            writeln!(f, "No tasks.")?;
        } else {
            for (task_index, task) in day.tasks.iter().enumerate() {
                let checked = self.completed_tasks.contains(&task_id(index, task_index));
                fmt_task(f, task, checked)?;
            }
        }
        writeln!(f)
    }
}

fn fmt_task(f: &mut fmt::Formatter<'_>, task: &StudyTask, checked: bool) -> fmt::Result {
    let checkbox = if checked { "x" } else { " " };
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

    if let Some(description) = &task.description {
        writeln!(f, "  {description}")?;
    }
    Ok(())
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.goal_name)?;
        writeln!(f)?;
        writeln!(
            f,
            "- Progress: {}/{} tasks ({}%)",
            self.completed_tasks, self.total_tasks, self.progress
        )?;
        writeln!(
            f,
            "- Schedule: {} days, deadline {}",
            self.total_days,
            friendly_date(&self.deadline.to_string())
        )?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;
        writeln!(f)
    }
}
