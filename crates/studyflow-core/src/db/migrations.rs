//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, PlannerError, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Check if tips column exists in plans table (added after the
        // initial release)
        let has_tips_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('plans') WHERE name = 'tips'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_tips_column {
            self.connection
                .execute("ALTER TABLE plans ADD COLUMN tips TEXT NOT NULL DEFAULT '[]'", [])
                .map_err(|e| {
                    PlannerError::database_error("Failed to add tips column to plans table", e)
                })?;
        }

        Ok(())
    }
}
