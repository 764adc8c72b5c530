//! The six box-score counters tracked per stat line.

use crate::error::StatsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six aggregable box-score counters.
///
/// This is the only way to choose a column for a leaderboard: the SQL
/// fragment for each variant comes from [`StatCategory::column`], so caller
/// text never reaches a query string.
///
/// # Examples
///
/// ```rust
/// use bball_stats::StatCategory;
///
/// let stat: StatCategory = "rebounds".parse().unwrap();
/// assert_eq!(stat, StatCategory::Rebounds);
/// assert_eq!(stat.to_string(), "Rebounds");
/// assert!("fouls".parse::<StatCategory>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatCategory {
    Points,
    Rebounds,
    Assists,
    Steals,
    Blocks,
    Turnovers,
}

impl StatCategory {
    /// All counters, in box-score (and CSV column) order.
    pub const ALL: [StatCategory; 6] = [
        StatCategory::Points,
        StatCategory::Rebounds,
        StatCategory::Assists,
        StatCategory::Steals,
        StatCategory::Blocks,
        StatCategory::Turnovers,
    ];

    /// Column name in the `stats` table.
    pub fn column(&self) -> &'static str {
        match self {
            StatCategory::Points => "points",
            StatCategory::Rebounds => "rebounds",
            StatCategory::Assists => "assists",
            StatCategory::Steals => "steals",
            StatCategory::Blocks => "blocks",
            StatCategory::Turnovers => "turnovers",
        }
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatCategory::Points => "Points",
            StatCategory::Rebounds => "Rebounds",
            StatCategory::Assists => "Assists",
            StatCategory::Steals => "Steals",
            StatCategory::Blocks => "Blocks",
            StatCategory::Turnovers => "Turnovers",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for StatCategory {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "points" => Ok(StatCategory::Points),
            "rebounds" => Ok(StatCategory::Rebounds),
            "assists" => Ok(StatCategory::Assists),
            "steals" => Ok(StatCategory::Steals),
            "blocks" => Ok(StatCategory::Blocks),
            "turnovers" => Ok(StatCategory::Turnovers),
            _ => Err(StatsError::InvalidStat {
                name: s.to_string(),
            }),
        }
    }
}
