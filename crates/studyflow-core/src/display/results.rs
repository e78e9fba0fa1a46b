//! Operation result wrapper types.
//!
//! These wrappers give every mutating operation a consistent formatted
//! confirmation: what happened, any advisory worth surfacing, and the
//! resulting resource.

use std::fmt;

use crate::generate::PlanSource;
use crate::models::Plan;

/// Result of creating a plan through the generation pipeline.
#[derive(Debug)]
pub struct NewPlan {
    pub plan: Plan,
    pub source: PlanSource,
    pub advisory: Option<String>,
}

impl NewPlan {
    /// Create a new plan-creation result.
    pub fn new(plan: Plan, source: PlanSource, advisory: Option<String>) -> Self {
        Self {
            plan,
            source,
            advisory,
        }
    }
}

impl fmt::Display for NewPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created plan with ID: {}", self.plan.id)?;

        if let Some(advisory) = &self.advisory {
            writeln!(f)?;
            writeln!(f, "Note: {advisory}")?;
        }

        writeln!(f)?;
        write!(f, "{}", self.plan)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// Includes optional change summaries to show what was modified.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create an update result with a list of changes.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated plan with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        Ok(())
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted plan '{}' (ID: {})",
            self.resource.goal.goal_name, self.resource.id
        )
    }
}
