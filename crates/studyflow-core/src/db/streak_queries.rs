//! Consecutive-study-day counter queries.
//!
//! The streak is a process-wide counter, not plan state, so it lives in its
//! own single-row table. All date reasoning happens against an injected
//! "today" so the consecutive-day detection is testable.

use jiff::civil::Date;
use rusqlite::{params, OptionalExtension};

use crate::error::{PlannerError, Result};

const SELECT_STREAK_SQL: &str = "SELECT count, last_date FROM streak WHERE id = 1";
const UPSERT_STREAK_SQL: &str = "INSERT INTO streak (id, count, last_date) VALUES (1, ?1, ?2) \
     ON CONFLICT(id) DO UPDATE SET count = excluded.count, last_date = excluded.last_date";

impl super::Database {
    /// The stored streak count. A lapsed streak reports as stored until the
    /// next recording resets it.
    pub fn current_streak(&self) -> Result<u32> {
        Ok(self.read_streak()?.0)
    }

    /// Records study activity for `today` and returns the updated count.
    ///
    /// Recording twice on the same day is a no-op; a recording the day
    /// after the last one extends the streak; any gap resets it to 1.
    pub fn record_study_day(&mut self, today: Date) -> Result<u32> {
        let (count, last_date) = self.read_streak()?;

        if last_date == Some(today) {
            return Ok(count);
        }

        let continues = last_date.is_some() && last_date == today.yesterday().ok();
        let next = if continues { count + 1 } else { 1 };

        self.connection
            .execute(UPSERT_STREAK_SQL, params![next as i64, today.to_string()])
            .map_err(|e| PlannerError::database_error("Failed to update streak", e))?;

        Ok(next)
    }

    fn read_streak(&self) -> Result<(u32, Option<Date>)> {
        let row: Option<(i64, String)> = self
            .connection
            .query_row(SELECT_STREAK_SQL, [], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .optional()
            .map_err(|e| PlannerError::database_error("Failed to read streak", e))?;

        let Some((count, last_date)) = row else {
            return Ok((0, None));
        };

        let last_date = if last_date.is_empty() {
            None
        } else {
            Some(last_date.parse::<Date>().map_err(|e| {
                PlannerError::Configuration {
                    message: format!("Invalid streak date '{last_date}': {e}"),
                }
            })?)
        };

        Ok((count.clamp(0, i64::from(u32::MAX)) as u32, last_date))
    }
}
