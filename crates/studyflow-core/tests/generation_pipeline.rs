//! End-to-end tests of the generation pipeline through the public API:
//! goal input in, persisted plan out, whatever the backend does.

use async_trait::async_trait;
use jiff::{ToSpan, Zoned};
use studyflow_core::{
    params::CreatePlan, GenerationBackend, GenerationError, PlanSource, PlannerBuilder,
};
use tempfile::TempDir;

/// Backend substitute returning one fixed outcome.
struct FixedBackend(Result<String, &'static str>);

#[async_trait]
impl GenerationBackend for FixedBackend {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        match &self.0 {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(GenerationError::Backend((*message).to_string())),
        }
    }
}

fn params() -> CreatePlan {
    CreatePlan {
        goal_name: "Exam Prep".to_string(),
        deadline: Zoned::now().date().saturating_add(9.days()).to_string(),
        daily_hours: 3.0,
        topics: vec!["Math:high".to_string(), "Physics:medium".to_string()],
        learning_style: Some("balanced".to_string()),
        difficulty: Some("intermediate".to_string()),
    }
}

async fn planner_with(backend: FixedBackend) -> (TempDir, studyflow_core::Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_backend(Box::new(backend))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

const MODEL_OUTPUT: &str = r#"Here you go:
```json
{"planName":"Exam Prep (AI)","totalDays":2,"schedule":[
  {"day":1,"date":"2025-03-01","theme":"Math",
   "tasks":[{"subject":"Math","topic":"Algebra","duration":"2 hours","type":"study"},
            {"subject":"Math","topic":"Drills","duration":"1 hours","type":"practice"}]},
  {"day":2,"date":"2025-03-02","theme":"Physics",
   "tasks":[{"subject":"Physics","topic":"Mechanics","duration":"3 hours","type":"study"}]}
],"tips":["Sleep well"]}
```"#;

#[tokio::test]
async fn test_model_schedule_is_accepted_and_persisted() {
    let (_temp_dir, planner) = planner_with(FixedBackend(Ok(MODEL_OUTPUT.to_string()))).await;

    let created = planner.generate_plan(&params()).await.unwrap();

    assert_eq!(created.source, PlanSource::Model);
    assert_eq!(created.advisory, None);
    assert_eq!(created.plan.plan_name, "Exam Prep (AI)");
    assert_eq!(created.plan.total_days(), 2);

    let stored = planner
        .show_plan(&studyflow_core::params::Id {
            id: created.plan.id,
        })
        .await
        .unwrap()
        .expect("Plan should exist");
    assert_eq!(stored.schedule, created.plan.schedule);
    assert_eq!(stored.total_tasks(), 3);
}

#[tokio::test]
async fn test_backend_failure_still_creates_a_usable_plan() {
    let (_temp_dir, planner) = planner_with(FixedBackend(Err("token rejected"))).await;

    let created = planner.generate_plan(&params()).await.unwrap();

    assert_eq!(created.source, PlanSource::Fallback);
    assert!(created
        .advisory
        .as_deref()
        .is_some_and(|note| note.contains("encountered an issue")));
    assert_eq!(created.plan.total_days(), 9);
    assert!(!created.plan.schedule[0].tasks.is_empty());
}

#[tokio::test]
async fn test_unusable_output_silently_falls_back() {
    let (_temp_dir, planner) =
        planner_with(FixedBackend(Ok("I cannot create a plan.".to_string()))).await;

    let created = planner.generate_plan(&params()).await.unwrap();

    assert_eq!(created.source, PlanSource::Fallback);
    assert_eq!(created.advisory, None);
    assert!(!created.plan.schedule.is_empty());
}
