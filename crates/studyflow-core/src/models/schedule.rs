//! Schedule models shared by the generation pipeline and persisted plans.
//!
//! The serde names follow the JSON contract the generation backend is asked
//! to produce (`planName`, `totalDays`, task `type`), so the same types
//! decode generated output and serialize stored schedules. Every field is
//! defaulted on decode: generated output is accepted or rejected by
//! [`SchedulePlan::is_usable`], not by strict field presence.

use serde::{Deserialize, Serialize};

/// A complete day-by-day study schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePlan {
    /// Human-readable plan title
    #[serde(default)]
    pub plan_name: String,

    /// Number of schedule entries; kept equal to `schedule.len()`
    #[serde(default)]
    pub total_days: i64,

    /// One entry per calendar day, in chronological order
    #[serde(default)]
    pub schedule: Vec<DaySchedule>,

    /// Advisory study tips attached to the plan
    #[serde(default)]
    pub tips: Vec<String>,
}

/// Tasks assigned to a single calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DaySchedule {
    /// 1-based sequential day number
    #[serde(default)]
    pub day: i64,

    /// Calendar date in ISO form (`YYYY-MM-DD`)
    #[serde(default)]
    pub date: String,

    /// Label for the day's focus
    #[serde(default)]
    pub theme: String,

    /// Tasks for the day, possibly empty
    #[serde(default)]
    pub tasks: Vec<StudyTask>,
}

/// A single unit of scheduled work.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StudyTask {
    /// Subject the task belongs to
    #[serde(default)]
    pub subject: String,

    /// Specific topic or sub-theme within the subject
    #[serde(default)]
    pub topic: String,

    /// Time allocation as free text containing a decimal, e.g. "2.5 hours"
    #[serde(default)]
    pub duration: String,

    /// Task type: study, practice, revision, or break. Unrecognized values
    /// are tolerated and rendered with a generic label.
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Optional instructions for the task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl StudyTask {
    /// Parses the hour quantity out of the free-form duration text.
    ///
    /// Returns the first decimal number found, so "2.5 hours", "about 2.5h",
    /// and "2.5" all yield 2.5. Returns `None` when no number is present.
    pub fn duration_hours(&self) -> Option<f64> {
        parse_leading_decimal(&self.duration)
    }
}

/// Extracts the first decimal number appearing anywhere in the text.
fn parse_leading_decimal(text: &str) -> Option<f64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let rest = &text[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(rest.len());
    rest[..end].parse().ok()
}

impl SchedulePlan {
    /// The acceptance gate for generated output: the schedule must be
    /// non-empty and its first day must carry at least one task. Anything
    /// failing this check is discarded in favor of the fallback planner.
    pub fn is_usable(&self) -> bool {
        self.schedule
            .first()
            .is_some_and(|day| !day.tasks.is_empty())
    }

    /// Restores the structural invariants on an accepted plan: `total_days`
    /// matches the schedule length and day numbers run 1..=N. Generated
    /// output does not always get these right even when usable.
    pub fn normalize(&mut self) {
        self.total_days = self.schedule.len() as i64;
        for (index, day) in self.schedule.iter_mut().enumerate() {
            day.day = index as i64 + 1;
        }
    }

    /// Total number of tasks across all days.
    pub fn total_task_count(&self) -> usize {
        self.schedule.iter().map(|day| day.tasks.len()).sum()
    }

    /// Sum of all parseable task durations, in hours, rounded to one
    /// decimal place.
    pub fn total_hours(&self) -> f64 {
        let total: f64 = self
            .schedule
            .iter()
            .flat_map(|day| &day.tasks)
            .filter_map(StudyTask::duration_hours)
            .sum();
        (total * 10.0).round() / 10.0
    }

    /// Distinct subjects appearing in the schedule, in first-seen order.
    pub fn subjects(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for task in self.schedule.iter().flat_map(|day| &day.tasks) {
            if !task.subject.is_empty() && !seen.contains(&task.subject.as_str()) {
                seen.push(task.subject.as_str());
            }
        }
        seen
    }
}
