//! Plan handler operations that return formatted wrapper types for the
//! Planner.

use jiff::Zoned;

use super::Planner;
use crate::{
    display::{DeleteResult, NewPlan, PlanSummaries, Streak, TodayTasks, UpdateResult},
    error::{PlannerError, Result},
    models::{Plan, PlanSummary},
    params::{CreatePlan, DeletePlan, Id, ToggleTask},
    progress::task_id,
};

impl Planner {
    /// Handle creating a plan from goal input through the generation
    /// pipeline.
    ///
    /// The input is validated, a schedule is produced (generated or
    /// fallback; this step cannot fail), and the merged plan is persisted.
    /// The result carries the plan's provenance and any advisory message.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` when the goal input fails
    /// validation; database errors surface as usual. Generation trouble is
    /// never an error here.
    pub async fn generate_plan(&self, params: &CreatePlan) -> Result<NewPlan> {
        let today = Zoned::now().date();
        let goal = params.to_goal(today)?;

        let generated = self.generator.generate(&goal, today).await;
        let plan = self.create_plan(&goal, &generated.plan).await?;

        Ok(NewPlan::new(plan, generated.source, generated.advisory))
    }

    /// Handle listing plans as summaries for consistent list display.
    pub async fn list_plans_summary(&self) -> Result<PlanSummaries> {
        let plans = self.list_plans().await?;
        let summaries: Vec<PlanSummary> = plans.iter().map(Into::into).collect();
        Ok(PlanSummaries(summaries))
    }

    /// Handle showing a complete plan with its schedule and completion
    /// state, or None if the plan doesn't exist.
    pub async fn show_plan(&self, params: &Id) -> Result<Option<Plan>> {
        self.get_plan(params).await
    }

    /// Handle toggling completion of one task.
    ///
    /// Progress is recomputed against the current schedule and persisted
    /// together with the completion set. Completing a task also records
    /// study activity for the streak counter.
    pub async fn toggle_task(&self, params: &ToggleTask) -> Result<UpdateResult<Plan>> {
        let mut plan = self
            .get_plan(&Id { id: params.plan_id })
            .await?
            .ok_or(PlannerError::PlanNotFound { id: params.plan_id })?;

        let now_complete = plan.toggle_task(params.day, params.task)?;
        self.update_completion(plan.id, plan.completed_tasks.clone(), plan.progress)
            .await?;

        if now_complete {
            self.record_study_day(Zoned::now().date()).await?;
        }

        let changes = vec![
            format!(
                "Marked day {} task {} as {}",
                params.day + 1,
                params.task + 1,
                if now_complete { "complete" } else { "incomplete" }
            ),
            format!("Progress: {}%", plan.progress),
        ];
        Ok(UpdateResult::with_changes(plan, changes))
    }

    /// Handle listing the tasks scheduled for today, with completion marks.
    pub async fn today_tasks(&self, params: &Id) -> Result<TodayTasks> {
        let plan = self
            .get_plan(params)
            .await?
            .ok_or(PlannerError::PlanNotFound { id: params.id })?;

        let today = Zoned::now().date().to_string();
        let listing = match plan.day_on(&today) {
            Some((index, day)) => TodayTasks {
                date: today,
                theme: Some(day.theme.clone()),
                tasks: day
                    .tasks
                    .iter()
                    .enumerate()
                    .map(|(task_index, task)| {
                        let checked = plan.completed_tasks.contains(&task_id(index, task_index));
                        (task.clone(), checked)
                    })
                    .collect(),
            },
            None => TodayTasks {
                date: today,
                theme: None,
                tasks: Vec::new(),
            },
        };
        Ok(listing)
    }

    /// Handle regenerating a plan's schedule from its stored goal input.
    ///
    /// Completion identifiers are kept; those referencing positions that no
    /// longer exist simply stop counting toward progress.
    pub async fn regenerate_schedule(&self, params: &Id) -> Result<UpdateResult<Plan>> {
        let mut plan = self
            .get_plan(params)
            .await?
            .ok_or(PlannerError::PlanNotFound { id: params.id })?;

        let today = Zoned::now().date();
        let generated = self.generator.generate(&plan.goal, today).await;

        plan.plan_name = generated.plan.plan_name.clone();
        plan.schedule = generated.plan.schedule.clone();
        plan.tips = generated.plan.tips.clone();
        plan.recompute_progress();

        self.replace_schedule(plan.id, generated.plan, plan.progress)
            .await?;

        let mut changes = vec![
            format!("Replaced schedule ({} days)", plan.total_days()),
            format!("Progress recomputed: {}%", plan.progress),
        ];
        if let Some(advisory) = generated.advisory {
            changes.push(format!("Note: {advisory}"));
        }
        Ok(UpdateResult::with_changes(plan, changes))
    }

    /// Handle permanently deleting a plan with confirmation.
    ///
    /// Requires explicit confirmation via the `confirmed` field to prevent
    /// accidental deletion. Uses get-before-delete to return the deleted
    /// plan's details, or None if the plan doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if `confirmed` is false
    pub async fn delete_plan(&self, params: &DeletePlan) -> Result<Option<DeleteResult<Plan>>> {
        if !params.confirmed {
            return Err(PlannerError::InvalidInput {
                field: "confirmed".to_string(),
                reason: "Plan deletion requires explicit confirmation. Set 'confirmed' to true to proceed with permanent deletion.".to_string(),
            });
        }

        let id_params = Id { id: params.id };
        let plan = self.get_plan(&id_params).await?;

        if plan.is_some() {
            self.delete_plan_by_id(&id_params).await?;
        }

        Ok(plan.map(DeleteResult::new))
    }

    /// Handle reading the consecutive-study-day streak.
    pub async fn streak(&self) -> Result<Streak> {
        Ok(Streak(self.current_streak().await?))
    }
}
