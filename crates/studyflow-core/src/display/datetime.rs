//! Date and time display utilities.

use std::fmt;

use jiff::civil::Date;
use jiff::{tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that provides system timezone formatting via
/// the `Display` trait.
///
/// # Format
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Formats an ISO date string as `Mar 11, 2025`, falling back to the raw
/// text when it does not parse. Schedule dates are stored as free text, so
/// generated output with odd dates still renders.
pub fn friendly_date(iso: &str) -> String {
    match iso.parse::<Date>() {
        Ok(date) => date.strftime("%b %d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friendly_date_parses_iso() {
        assert_eq!(friendly_date("2025-03-11"), "Mar 11, 2025");
    }

    #[test]
    fn test_friendly_date_falls_back_to_raw() {
        assert_eq!(friendly_date("someday"), "someday");
        assert_eq!(friendly_date(""), "");
    }
}
