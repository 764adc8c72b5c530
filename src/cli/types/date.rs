//! Game date parsing.

use crate::error::{Result, StatsError};
use chrono::{Local, NaiveDate};

/// Parse a `YYYY-MM-DD` game date.
///
/// # Examples
///
/// ```rust
/// use bball_stats::cli::types::date::parse_game_date;
///
/// let date = parse_game_date("2024-02-29").unwrap();
/// assert_eq!(date.to_string(), "2024-02-29");
/// assert!(parse_game_date("2023-02-29").is_err());
/// ```
pub fn parse_game_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| StatsError::InvalidDate {
        value: s.to_string(),
    })
}

/// Today's date in local time; the default when no `--date` is given.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
