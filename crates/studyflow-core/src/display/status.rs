//! Status message types for operation feedback.

use std::fmt;

/// Wrapper type for displaying the consecutive-study-day streak.
pub struct Streak(pub u32);

impl fmt::Display for Streak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => writeln!(f, "No study streak yet. Complete a task to start one!"),
            1 => writeln!(f, "🔥 Study streak: 1 day"),
            n => writeln!(f, "🔥 Study streak: {n} days"),
        }
    }
}
