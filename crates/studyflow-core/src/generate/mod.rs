//! The plan-generation pipeline.
//!
//! This module turns validated goal input into a usable schedule, whatever
//! the generation backend does:
//!
//! ```text
//! ┌──────────┐   ┌─────────────┐   ┌──────────┐
//! │  Prompt  │──▶│  Generation │──▶│ Response │──▶ usable SchedulePlan
//! │  Builder │   │   Backend   │   │  Parser  │
//! └──────────┘   └─────────────┘   └──────────┘
//!                      │  backend error   │  unusable output
//!                      ▼                  ▼
//!               ┌────────────────────────────┐
//!               │     Fallback Planner       │──▶ usable SchedulePlan
//!               └────────────────────────────┘
//! ```
//!
//! [`PlanGenerator::generate`] never fails: a backend failure or unusable
//! output degrades to the deterministic fallback planner. The only trace of
//! a backend failure is an advisory message for the user; unusable output is
//! substituted silently.

pub mod backend;
pub mod fallback;
pub mod parser;
pub mod prompt;

#[cfg(test)]
mod tests;

use jiff::civil::Date;
use log::{info, warn};

pub use backend::{
    GenerationBackend, GenerationError, HuggingFaceBackend, RetryPolicy, DEFAULT_API_URL,
};

use crate::models::{SchedulePlan, StudyGoal};

/// Advisory shown when generation failed and the fallback plan was used.
pub const GENERATION_ADVISORY: &str =
    "AI generation encountered an issue. Generated a structured plan based on your inputs.";

/// Where an emitted schedule came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSource {
    /// Accepted from the generation backend
    Model,
    /// Produced by the deterministic fallback planner
    Fallback,
}

/// A generation outcome: always a usable plan, plus its provenance and an
/// optional advisory for the user.
#[derive(Debug, Clone)]
pub struct GeneratedPlan {
    pub plan: SchedulePlan,
    pub source: PlanSource,
    pub advisory: Option<String>,
}

/// Orchestrates prompt building, the generation backend, response parsing,
/// and fallback substitution.
pub struct PlanGenerator {
    backend: Option<Box<dyn GenerationBackend>>,
}

impl PlanGenerator {
    /// Creates a generator backed by the given generation backend.
    pub fn new(backend: Box<dyn GenerationBackend>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// Creates a generator that always uses the fallback planner.
    pub fn offline() -> Self {
        Self { backend: None }
    }

    /// Produces a usable schedule for the goal. This cannot fail; the worst
    /// case is the fallback plan with an advisory attached.
    pub async fn generate(&self, goal: &StudyGoal, today: Date) -> GeneratedPlan {
        let Some(backend) = &self.backend else {
            info!("offline mode, building fallback plan for '{}'", goal.goal_name);
            return self.fallback(goal, today, None);
        };

        info!("generating schedule for '{}'", goal.goal_name);
        let prompt = prompt::build_study_plan_prompt(goal, today);

        match backend.generate(&prompt).await {
            Ok(raw) => match parser::extract_schedule(&raw) {
                Some(plan) => {
                    info!(
                        "accepted generated schedule for '{}' ({} days)",
                        goal.goal_name, plan.total_days
                    );
                    GeneratedPlan {
                        plan,
                        source: PlanSource::Model,
                        advisory: None,
                    }
                }
                None => {
                    warn!(
                        "generated output for '{}' was not usable, substituting fallback plan",
                        goal.goal_name
                    );
                    self.fallback(goal, today, None)
                }
            },
            Err(err) => {
                warn!("generation failed for '{}': {err}", goal.goal_name);
                self.fallback(goal, today, Some(GENERATION_ADVISORY.to_string()))
            }
        }
    }

    fn fallback(&self, goal: &StudyGoal, today: Date, advisory: Option<String>) -> GeneratedPlan {
        GeneratedPlan {
            plan: fallback::generate(goal, today),
            source: PlanSource::Fallback,
            advisory,
        }
    }
}
