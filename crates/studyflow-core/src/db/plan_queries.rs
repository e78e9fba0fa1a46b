//! Plan CRUD operations and queries.

use std::collections::BTreeSet;
use std::str::FromStr;

use jiff::civil::Date;
use jiff::Timestamp;
use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension, Row};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{DatabaseResultExt, PlannerError, Result};
use crate::models::{Difficulty, LearningStyle, Plan, SchedulePlan, StudyGoal};

const PLAN_COLUMNS: &str = "id, goal_name, deadline, daily_hours, topics, learning_style, \
     difficulty, plan_name, schedule, tips, completed_tasks, progress, created_at, updated_at";

const INSERT_PLAN_SQL: &str = "INSERT INTO plans (goal_name, deadline, daily_hours, topics, \
     learning_style, difficulty, plan_name, schedule, tips, completed_tasks, progress, \
     created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)";
const CHECK_PLAN_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM plans WHERE id = ?1)";
const UPDATE_COMPLETION_SQL: &str =
    "UPDATE plans SET completed_tasks = ?1, progress = ?2, updated_at = ?3 WHERE id = ?4";
const UPDATE_SCHEDULE_SQL: &str = "UPDATE plans SET plan_name = ?1, schedule = ?2, tips = ?3, \
     progress = ?4, updated_at = ?5 WHERE id = ?6";
const DELETE_PLAN_SQL: &str = "DELETE FROM plans WHERE id = ?1";

/// Reads a JSON document column into the given type.
fn json_column<T: DeserializeOwned>(row: &Row<'_>, index: usize) -> rusqlite::Result<T> {
    let raw: String = row.get(index)?;
    serde_json::from_str(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

/// Serializes a value for storage in a JSON document column.
fn json_value<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Parses a text column through `FromStr`, mapping parse failures the way
/// rusqlite expects.
fn parsed_column<T>(row: &Row<'_>, index: usize) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw: String = row.get(index)?;
    raw.parse::<T>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            index,
            Type::Text,
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("{e}"),
            )),
        )
    })
}

fn row_to_plan(row: &Row<'_>) -> rusqlite::Result<Plan> {
    let goal = StudyGoal {
        goal_name: row.get(1)?,
        deadline: parsed_column::<Date>(row, 2)?,
        daily_hours: row.get(3)?,
        topics: json_column(row, 4)?,
        learning_style: parsed_column::<LearningStyle>(row, 5)?,
        difficulty: parsed_column::<Difficulty>(row, 6)?,
    };

    Ok(Plan {
        id: row.get::<_, i64>(0)? as u64,
        goal,
        plan_name: row.get(7)?,
        schedule: json_column(row, 8)?,
        tips: json_column(row, 9)?,
        completed_tasks: json_column::<BTreeSet<String>>(row, 10)?,
        progress: row.get::<_, i64>(11)?.clamp(0, 100) as u8,
        created_at: parsed_column::<Timestamp>(row, 12)?,
        updated_at: parsed_column::<Timestamp>(row, 13)?,
    })
}

impl super::Database {
    /// Persists a freshly generated plan and returns the stored aggregate.
    pub fn create_plan(&mut self, goal: &StudyGoal, generated: &SchedulePlan) -> Result<Plan> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_PLAN_SQL,
            params![
                goal.goal_name,
                goal.deadline.to_string(),
                goal.daily_hours,
                json_value(&goal.topics)?,
                goal.learning_style.as_str(),
                goal.difficulty.as_str(),
                generated.plan_name,
                json_value(&generated.schedule)?,
                json_value(&generated.tips)?,
                "[]",
                0i64,
                &now_str,
                &now_str,
            ],
        )
        .map_err(|e| PlannerError::database_error("Failed to insert plan", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Plan {
            id,
            goal: goal.clone(),
            plan_name: generated.plan_name.clone(),
            schedule: generated.schedule.clone(),
            tips: generated.tips.clone(),
            completed_tasks: BTreeSet::new(),
            progress: 0,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a plan by its ID.
    pub fn get_plan(&self, id: u64) -> Result<Option<Plan>> {
        let mut stmt = self
            .connection
            .prepare(&format!("SELECT {PLAN_COLUMNS} FROM plans WHERE id = ?1"))
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        stmt.query_row(params![id as i64], row_to_plan)
            .optional()
            .map_err(|e| PlannerError::database_error("Failed to query plan", e))
    }

    /// Lists all plans, newest first.
    pub fn list_plans(&self) -> Result<Vec<Plan>> {
        let mut stmt = self
            .connection
            .prepare(&format!(
                "SELECT {PLAN_COLUMNS} FROM plans ORDER BY created_at DESC, id DESC"
            ))
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        let plans = stmt
            .query_map([], row_to_plan)
            .map_err(|e| PlannerError::database_error("Failed to query plans", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| PlannerError::database_error("Failed to fetch plans", e))?;

        Ok(plans)
    }

    /// Stores an updated completion set and its derived progress.
    pub fn update_completion(
        &mut self,
        id: u64,
        completed_tasks: &BTreeSet<String>,
        progress: u8,
    ) -> Result<()> {
        let rows_affected = self
            .connection
            .execute(
                UPDATE_COMPLETION_SQL,
                params![
                    json_value(completed_tasks)?,
                    progress as i64,
                    Timestamp::now().to_string(),
                    id as i64
                ],
            )
            .map_err(|e| PlannerError::database_error("Failed to update completion state", e))?;

        if rows_affected == 0 {
            return Err(PlannerError::PlanNotFound { id });
        }
        Ok(())
    }

    /// Replaces a plan's schedule after regeneration. Completion state is
    /// left untouched; the caller passes the progress recomputed against the
    /// new schedule.
    pub fn replace_schedule(
        &mut self,
        id: u64,
        generated: &SchedulePlan,
        progress: u8,
    ) -> Result<()> {
        let rows_affected = self
            .connection
            .execute(
                UPDATE_SCHEDULE_SQL,
                params![
                    generated.plan_name,
                    json_value(&generated.schedule)?,
                    json_value(&generated.tips)?,
                    progress as i64,
                    Timestamp::now().to_string(),
                    id as i64
                ],
            )
            .map_err(|e| PlannerError::database_error("Failed to replace schedule", e))?;

        if rows_affected == 0 {
            return Err(PlannerError::PlanNotFound { id });
        }
        Ok(())
    }

    /// Permanently deletes a plan. This operation cannot be undone.
    pub fn delete_plan(&mut self, id: u64) -> Result<()> {
        let exists: bool = self
            .connection
            .query_row(CHECK_PLAN_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .map_err(|e| PlannerError::database_error("Failed to check plan existence", e))?;

        if !exists {
            return Err(PlannerError::PlanNotFound { id });
        }

        self.connection
            .execute(DELETE_PLAN_SQL, params![id as i64])
            .map_err(|e| PlannerError::database_error("Failed to delete plan", e))?;

        Ok(())
    }
}
