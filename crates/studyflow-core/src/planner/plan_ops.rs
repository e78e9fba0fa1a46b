//! Plan database operations for the Planner.
//!
//! rusqlite is synchronous, so every operation opens the database on a
//! blocking task and hands owned data across the boundary.

use std::collections::BTreeSet;

use jiff::civil::Date;
use tokio::task::{self, JoinError};

use super::Planner;
use crate::{
    db::Database,
    error::{PlannerError, Result},
    models::{Plan, SchedulePlan, StudyGoal},
    params::Id,
};

fn join_error(e: JoinError) -> PlannerError {
    PlannerError::Configuration {
        message: format!("Task join error: {e}"),
    }
}

impl Planner {
    /// Persists a freshly generated plan.
    pub async fn create_plan(&self, goal: &StudyGoal, generated: &SchedulePlan) -> Result<Plan> {
        let db_path = self.db_path.clone();
        let goal = goal.clone();
        let generated = generated.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_plan(&goal, &generated)
        })
        .await
        .map_err(join_error)?
    }

    /// Retrieves a plan by its ID.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<Plan>> {
        let db_path = self.db_path.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_plan(plan_id)
        })
        .await
        .map_err(join_error)?
    }

    /// Lists all plans, newest first.
    pub async fn list_plans(&self) -> Result<Vec<Plan>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_plans()
        })
        .await
        .map_err(join_error)?
    }

    /// Stores an updated completion set and its derived progress.
    pub async fn update_completion(
        &self,
        plan_id: u64,
        completed_tasks: BTreeSet<String>,
        progress: u8,
    ) -> Result<()> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_completion(plan_id, &completed_tasks, progress)
        })
        .await
        .map_err(join_error)?
    }

    /// Replaces a plan's schedule after regeneration.
    pub async fn replace_schedule(
        &self,
        plan_id: u64,
        generated: SchedulePlan,
        progress: u8,
    ) -> Result<()> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.replace_schedule(plan_id, &generated, progress)
        })
        .await
        .map_err(join_error)?
    }

    /// Permanently deletes a plan. This operation cannot be undone.
    pub async fn delete_plan_by_id(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_plan(plan_id)
        })
        .await
        .map_err(join_error)?
    }

    /// Records study activity for the given day and returns the updated
    /// streak count.
    pub async fn record_study_day(&self, today: Date) -> Result<u32> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.record_study_day(today)
        })
        .await
        .map_err(join_error)?
    }

    /// The stored consecutive-study-day count.
    pub async fn current_streak(&self) -> Result<u32> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.current_streak()
        })
        .await
        .map_err(join_error)?
    }
}
