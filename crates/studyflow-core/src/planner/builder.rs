//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{PlannerError, Result},
    generate::{GenerationBackend, HuggingFaceBackend, PlanGenerator},
};

/// Environment variable holding the Hugging Face API token.
pub const API_TOKEN_ENV: &str = "HF_API_TOKEN";

/// Builder for creating and configuring Planner instances.
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
    backend: Option<Box<dyn GenerationBackend>>,
    offline: bool,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            backend: None,
            offline: false,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/studyflow/studyflow.db` or
    /// `~/.local/share/studyflow/studyflow.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets a custom generation backend, replacing the default Hugging Face
    /// client. Primarily useful for tests and alternative providers.
    pub fn with_backend(mut self, backend: Box<dyn GenerationBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Skips the generation backend entirely; every plan comes from the
    /// deterministic fallback planner.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Builds the configured planner instance.
    ///
    /// Without an explicit backend, the Hugging Face client is used with
    /// the token from `HF_API_TOKEN` (if set). A missing token is not an
    /// error: generation will fail fast and plans degrade to the fallback.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::FileSystem` if the database path is invalid
    /// Returns `PlannerError::Database` if database initialization fails
    pub async fn build(self) -> Result<Planner> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PlannerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), PlannerError>(())
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        let generator = if self.offline {
            PlanGenerator::offline()
        } else if let Some(backend) = self.backend {
            PlanGenerator::new(backend)
        } else {
            let token = std::env::var(API_TOKEN_ENV).ok();
            let backend = HuggingFaceBackend::new(token).map_err(|e| {
                PlannerError::Configuration {
                    message: format!("Failed to build generation backend: {e}"),
                }
            })?;
            PlanGenerator::new(Box::new(backend))
        };

        Ok(Planner::new(db_path, generator))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("studyflow")
            .place_data_file("studyflow.db")
            .map_err(|e| PlannerError::XdgDirectory(e.to_string()))
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
