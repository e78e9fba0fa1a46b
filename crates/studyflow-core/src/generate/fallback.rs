//! Deterministic fallback schedule generation.
//!
//! This planner is the availability backstop of the whole pipeline: it makes
//! no external calls, uses no randomness, and has no failure path, so a
//! usable schedule always exists even when generation is down or returns
//! garbage. Given the same goal and the same `today`, its output is
//! identical across invocations.

use jiff::civil::Date;
use jiff::ToSpan;

use crate::models::{
    DaySchedule, Priority, SchedulePlan, StudyGoal, StudyTask, TaskKind, Topic, DEFAULT_TOPIC_NAME,
};

/// Fixed advisory tips attached to every fallback plan.
pub const FALLBACK_TIPS: [&str; 3] = [
    "Stay consistent with your daily study hours",
    "Take short breaks every 45 minutes",
    "Review previous material before starting new topics",
];

/// Hours reserved for the fixed practice task on non-revision days.
const PRACTICE_HOURS: f64 = 0.5;

/// Every fourth day is a revision day.
const REVISION_CADENCE: usize = 4;

/// Builds a complete schedule from the goal input without any external call.
///
/// One entry is produced per calendar day from `today` through the deadline;
/// a past or same-day deadline still yields a single day. Day `i` (zero
/// based) is a revision day when `(i + 1) % 4 == 0`; other days rotate
/// through the topic list in input order, deliberately ignoring priority.
pub fn generate(goal: &StudyGoal, today: Date) -> SchedulePlan {
    let total_days = total_days_until(today, goal.deadline);

    // Even a hand-built goal with no topics must produce a usable schedule.
    let default_topic = Topic::new(DEFAULT_TOPIC_NAME, Priority::High);
    let topics: &[Topic] = if goal.topics.is_empty() {
        std::slice::from_ref(&default_topic)
    } else {
        &goal.topics
    };

    let schedule = (0..total_days)
        .map(|i| {
            let date = today.saturating_add((i as i64).days());
            build_day(i, date, goal.daily_hours, topics)
        })
        .collect();

    SchedulePlan {
        plan_name: goal.goal_name.clone(),
        total_days: total_days as i64,
        schedule,
        tips: FALLBACK_TIPS.iter().map(|tip| tip.to_string()).collect(),
    }
}

/// Number of schedule entries between `today` and the deadline, at least 1.
fn total_days_until(today: Date, deadline: Date) -> usize {
    let days = today
        .until(deadline)
        .map(|span| span.get_days())
        .unwrap_or(0);
    days.max(1) as usize
}

fn build_day(index: usize, date: Date, daily_hours: f64, topics: &[Topic]) -> DaySchedule {
    let revision_day = (index + 1) % REVISION_CADENCE == 0;

    let (theme, tasks) = if revision_day {
        let task = StudyTask {
            subject: "Revision".to_string(),
            topic: "Review previous topics".to_string(),
            duration: format!("{daily_hours} hours"),
            kind: TaskKind::Revision.as_str().to_string(),
            description: Some("Review and consolidate material from the past 3 days".to_string()),
        };
        ("Revision Day".to_string(), vec![task])
    } else {
        let topic = &topics[index % topics.len()];
        let pass = index / topics.len() + 1;
        let study_hours = (daily_hours - PRACTICE_HOURS).max(1.0);

        let study = StudyTask {
            subject: topic.name.clone(),
            topic: format!("{} - Day {pass}", topic.name),
            duration: format!("{study_hours} hours"),
            kind: TaskKind::Study.as_str().to_string(),
            description: Some(format!("Focus on {} concepts and fundamentals", topic.name)),
        };
        let practice = StudyTask {
            subject: topic.name.clone(),
            topic: "Practice".to_string(),
            duration: format!("{PRACTICE_HOURS} hours"),
            kind: TaskKind::Practice.as_str().to_string(),
            description: Some(format!("Practice exercises for {}", topic.name)),
        };
        (topic.name.clone(), vec![study, practice])
    };

    DaySchedule {
        day: index as i64 + 1,
        date: date.to_string(),
        theme,
        tasks,
    }
}
