//! Completion tracking and progress derivation.
//!
//! Completed tasks are tracked as position identifiers `"{day}-{task}"`
//! (both zero-based) rather than references to task content, so completion
//! state survives schedule edits. When a schedule is replaced, identifiers
//! that no longer resolve to a task are kept in storage but excluded from
//! every derived figure.

use std::collections::BTreeSet;

use crate::error::{PlannerError, Result};
use crate::models::{DaySchedule, Plan};

/// Builds the identifier for the task at the given schedule position.
pub fn task_id(day_index: usize, task_index: usize) -> String {
    format!("{day_index}-{task_index}")
}

/// Parses an identifier back into `(day_index, task_index)`.
fn parse_task_id(id: &str) -> Option<(usize, usize)> {
    let (day, task) = id.split_once('-')?;
    Some((day.parse().ok()?, task.parse().ok()?))
}

/// Whether an identifier resolves to a task in the given schedule.
fn resolves(schedule: &[DaySchedule], id: &str) -> bool {
    parse_task_id(id)
        .is_some_and(|(day, task)| schedule.get(day).is_some_and(|d| task < d.tasks.len()))
}

/// Completion percentage of a schedule given a set of completed-task
/// identifiers.
///
/// Only identifiers that resolve against the schedule count toward the
/// numerator; the denominator is the schedule's current task count. The
/// result is rounded and clamped to 0..=100, and a schedule with no tasks
/// reports 0.
pub fn completion_percent(schedule: &[DaySchedule], completed: &BTreeSet<String>) -> u8 {
    let total: usize = schedule.iter().map(|day| day.tasks.len()).sum();
    if total == 0 {
        return 0;
    }
    let valid = completed.iter().filter(|id| resolves(schedule, id)).count();
    let percent = (valid as f64 / total as f64 * 100.0).round() as u8;
    percent.min(100)
}

impl Plan {
    /// Total number of tasks in the current schedule.
    pub fn total_tasks(&self) -> usize {
        self.schedule.iter().map(|day| day.tasks.len()).sum()
    }

    /// Number of completed-task identifiers that resolve against the
    /// current schedule.
    pub fn valid_completed_count(&self) -> usize {
        self.completed_tasks
            .iter()
            .filter(|id| resolves(&self.schedule, id))
            .count()
    }

    /// Recomputes the derived progress percentage from the current schedule
    /// and completion set.
    pub fn recompute_progress(&mut self) {
        self.progress = completion_percent(&self.schedule, &self.completed_tasks);
    }

    /// Toggles completion of the task at the given position and recomputes
    /// progress. Returns `true` when the task is now complete.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::TaskNotFound`] when no task exists at the
    /// position in the current schedule.
    pub fn toggle_task(&mut self, day: usize, task: usize) -> Result<bool> {
        let exists = self
            .schedule
            .get(day)
            .is_some_and(|d| task < d.tasks.len());
        if !exists {
            return Err(PlannerError::TaskNotFound {
                plan_id: self.id,
                day,
                task,
            });
        }

        let id = task_id(day, task);
        let now_complete = if self.completed_tasks.contains(&id) {
            self.completed_tasks.remove(&id);
            false
        } else {
            self.completed_tasks.insert(id);
            true
        };
        self.recompute_progress();
        Ok(now_complete)
    }

    /// Whether every task of the given day is complete.
    pub fn day_complete(&self, day_index: usize) -> bool {
        self.schedule.get(day_index).is_some_and(|day| {
            (0..day.tasks.len()).all(|task| self.completed_tasks.contains(&task_id(day_index, task)))
        })
    }

    /// The schedule entry for the given ISO date, with its day index.
    pub fn day_on(&self, iso_date: &str) -> Option<(usize, &DaySchedule)> {
        self.schedule
            .iter()
            .enumerate()
            .find(|(_, day)| day.date == iso_date)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use jiff::Timestamp;

    use super::*;
    use crate::models::{GoalDraft, StudyTask};

    fn plan_with_schedule(days: &[usize]) -> Plan {
        let schedule = days
            .iter()
            .enumerate()
            .map(|(i, &count)| DaySchedule {
                day: i as i64 + 1,
                date: format!("2025-03-{:02}", i + 1),
                theme: "Math".to_string(),
                tasks: (0..count)
                    .map(|_| StudyTask {
                        subject: "Math".to_string(),
                        duration: "1 hours".to_string(),
                        kind: "study".to_string(),
                        ..Default::default()
                    })
                    .collect(),
            })
            .collect();

        Plan {
            id: 1,
            goal: GoalDraft::default().resolve(date(2025, 3, 1)),
            plan_name: "Test".to_string(),
            schedule,
            tips: Vec::new(),
            completed_tasks: BTreeSet::new(),
            progress: 0,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut plan = plan_with_schedule(&[2, 2]);

        assert!(plan.toggle_task(0, 1).unwrap());
        assert!(plan.completed_tasks.contains("0-1"));
        assert_eq!(plan.progress, 25);

        // Double toggle restores the original set
        assert!(!plan.toggle_task(0, 1).unwrap());
        assert!(plan.completed_tasks.is_empty());
        assert_eq!(plan.progress, 0);
    }

    #[test]
    fn test_toggle_out_of_range_is_an_error() {
        let mut plan = plan_with_schedule(&[1]);

        assert!(matches!(
            plan.toggle_task(0, 1),
            Err(PlannerError::TaskNotFound { day: 0, task: 1, .. })
        ));
        assert!(matches!(
            plan.toggle_task(5, 0),
            Err(PlannerError::TaskNotFound { day: 5, .. })
        ));
    }

    #[test]
    fn test_progress_reaches_100_only_when_all_complete() {
        let mut plan = plan_with_schedule(&[2, 1]);

        plan.toggle_task(0, 0).unwrap();
        plan.toggle_task(0, 1).unwrap();
        assert_eq!(plan.progress, 67);

        plan.toggle_task(1, 0).unwrap();
        assert_eq!(plan.progress, 100);
    }

    #[test]
    fn test_stale_identifiers_do_not_count() {
        let mut plan = plan_with_schedule(&[2, 2]);
        plan.completed_tasks.insert("9-9".to_string());
        plan.completed_tasks.insert("not-a-position".to_string());
        plan.completed_tasks.insert("0-0".to_string());

        plan.recompute_progress();

        assert_eq!(plan.valid_completed_count(), 1);
        assert_eq!(plan.progress, 25);
        // Stale identifiers stay stored
        assert!(plan.completed_tasks.contains("9-9"));
    }

    #[test]
    fn test_empty_schedule_reports_zero() {
        let mut plan = plan_with_schedule(&[]);
        plan.completed_tasks.insert("0-0".to_string());
        plan.recompute_progress();
        assert_eq!(plan.progress, 0);
    }

    #[test]
    fn test_day_complete() {
        let mut plan = plan_with_schedule(&[2, 0]);
        assert!(!plan.day_complete(0));

        plan.toggle_task(0, 0).unwrap();
        assert!(!plan.day_complete(0));

        plan.toggle_task(0, 1).unwrap();
        assert!(plan.day_complete(0));

        // A day with no tasks is trivially complete; a missing day is not
        assert!(plan.day_complete(1));
        assert!(!plan.day_complete(2));
    }

    #[test]
    fn test_day_on_finds_matching_date() {
        let plan = plan_with_schedule(&[1, 1]);
        let (index, day) = plan.day_on("2025-03-02").unwrap();
        assert_eq!(index, 1);
        assert_eq!(day.day, 2);
        assert!(plan.day_on("2030-01-01").is_none());
    }
}
