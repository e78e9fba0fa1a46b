//! High-level planner API for managing study plans.
//!
//! This module provides the main [`Planner`] interface of the StudyFlow
//! system: the coordinator between interface layers, the generation
//! pipeline, and the database.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │    Operations    │    │    Database     │
//! │ (plan_handlers) │───▶│   (plan_ops)     │───▶│   (via db/)     │
//! └─────────────────┘    └──────────────────┘    └─────────────────┘
//!         │
//!         ▼
//! ┌─────────────────┐
//! │  PlanGenerator  │  backend call, parsing, fallback substitution
//! └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with
//!   configuration (database path, generation backend, offline mode)
//! - [`plan_handlers`]: High-level operations returning display wrappers
//!   (generate, list, show, toggle, regenerate, delete, streak)
//! - [`plan_ops`]: Lower-level database operations bridged onto the async
//!   runtime
//!
//! ## Design Principles
//!
//! 1. **Always usable**: plan creation cannot fail on backend trouble; the
//!    generation pipeline degrades to the deterministic fallback planner
//! 2. **Async First**: database work runs on blocking tasks, generation is
//!    natively async
//! 3. **Error Propagation**: comprehensive error handling with context
//! 4. **Display Integration**: handler results format via the display system
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use studyflow_core::{params::CreatePlan, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Offline planner with a custom database path
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("studyflow.db"))
//!     .offline(true)
//!     .build()
//!     .await?;
//!
//! let params = CreatePlan {
//!     goal_name: "Exam Prep".to_string(),
//!     deadline: "2099-06-01".to_string(),
//!     daily_hours: 3.0,
//!     topics: vec!["Math:high".to_string(), "Physics:medium".to_string()],
//!     learning_style: None,
//!     difficulty: None,
//! };
//! let created = planner.generate_plan(&params).await?;
//! println!("{created}");
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use crate::generate::PlanGenerator;

// Module declarations
pub mod builder;
pub mod plan_handlers;
pub mod plan_ops;


// Re-export the main types
pub use builder::PlannerBuilder;

/// Main planner interface for managing study plans.
pub struct Planner {
    pub(crate) db_path: PathBuf,
    pub(crate) generator: PlanGenerator,
}

impl Planner {
    /// Creates a new planner with the given database path and generator.
    pub(crate) fn new(db_path: PathBuf, generator: PlanGenerator) -> Self {
        Self { db_path, generator }
    }
}
