//! Prompt construction for the generation backend.

use jiff::civil::Date;

use crate::models::StudyGoal;

/// Renders the goal input into a single instruction for the text-generation
/// backend.
///
/// The prompt pins down the exact JSON object the response parser expects;
/// the scheduling guidance (revision cadence, priority weighting, learning
/// style) is advisory to the model and enforced nowhere else. The output is
/// deterministic for a fixed goal and `today`.
pub fn build_study_plan_prompt(goal: &StudyGoal, today: Date) -> String {
    let topic_list = goal
        .topics
        .iter()
        .map(|topic| format!("- {} (Priority: {})", topic.name, topic.priority.as_str()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<s>[INST] You are an expert study planner AI. Create a detailed, day-by-day study plan based on the following information.

STUDY GOAL: {goal_name}
START DATE: {today}
DEADLINE: {deadline}
DAILY STUDY HOURS: {daily_hours} hours
LEARNING STYLE: {learning_style}
DIFFICULTY LEVEL: {difficulty}

SUBJECTS/TOPICS:
{topic_list}

INSTRUCTIONS:
1. Create a day-by-day study schedule from {today} to {deadline}
2. Break each day into specific tasks with time allocations
3. Prioritize high-priority topics accordingly
4. Include revision slots every 3-4 days
5. Add practice/exercise sessions based on learning style
6. Keep daily study time to {daily_hours} hours
7. Include breaks and buffer time

RESPOND ONLY WITH A VALID JSON object in this EXACT format (no markdown, no extra text):
{{
  "planName": "{goal_name}",
  "totalDays": <number>,
  "schedule": [
    {{
      "day": 1,
      "date": "YYYY-MM-DD",
      "theme": "Topic focus for the day",
      "tasks": [
        {{
          "subject": "Subject name",
          "topic": "Specific topic",
          "duration": "X hours",
          "type": "study|practice|revision|break",
          "description": "What to do"
        }}
      ]
    }}
  ],
  "tips": ["Tip 1", "Tip 2", "Tip 3"]
}}
[/INST]"#,
        goal_name = goal.goal_name,
        today = today,
        deadline = goal.deadline,
        daily_hours = goal.daily_hours,
        learning_style = goal.learning_style.as_str(),
        difficulty = goal.difficulty.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::{GoalDraft, Priority, Topic};

    fn goal() -> StudyGoal {
        GoalDraft {
            goal_name: Some("Exam Prep".to_string()),
            deadline: Some(date(2025, 3, 11)),
            daily_hours: Some(3.0),
            topics: vec![
                Topic::new("Math", Priority::High),
                Topic::new("Physics", Priority::Medium),
            ],
            ..Default::default()
        }
        .resolve(date(2025, 3, 1))
    }

    #[test]
    fn test_prompt_embeds_goal_fields() {
        let prompt = build_study_plan_prompt(&goal(), date(2025, 3, 1));

        assert!(prompt.contains("STUDY GOAL: Exam Prep"));
        assert!(prompt.contains("START DATE: 2025-03-01"));
        assert!(prompt.contains("DEADLINE: 2025-03-11"));
        assert!(prompt.contains("DAILY STUDY HOURS: 3 hours"));
        assert!(prompt.contains("LEARNING STYLE: Balanced"));
        assert!(prompt.contains("DIFFICULTY LEVEL: Intermediate"));
    }

    #[test]
    fn test_prompt_lists_topics_in_input_order() {
        let prompt = build_study_plan_prompt(&goal(), date(2025, 3, 1));

        let math = prompt.find("- Math (Priority: High)").unwrap();
        let physics = prompt.find("- Physics (Priority: Medium)").unwrap();
        assert!(math < physics);
    }

    #[test]
    fn test_prompt_states_the_json_contract() {
        let prompt = build_study_plan_prompt(&goal(), date(2025, 3, 1));

        for key in ["\"planName\"", "\"totalDays\"", "\"schedule\"", "\"tips\""] {
            assert!(prompt.contains(key), "missing {key}");
        }
        assert!(prompt.contains("\"type\": \"study|practice|revision|break\""));
        assert!(prompt.contains("RESPOND ONLY WITH A VALID JSON object"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let today = date(2025, 3, 1);
        assert_eq!(
            build_study_plan_prompt(&goal(), today),
            build_study_plan_prompt(&goal(), today)
        );
    }
}
