//! Basketball Stat Tracker Library
//!
//! A small record-keeping library for basketball box scores: register teams
//! and players, record per-game stat lines, and report totals, leaderboards
//! and CSV exports from a local SQLite database.
//!
//! ## Features
//!
//! - **Teams and Players**: Register teams and (optionally affiliated) players
//! - **Stat Lines**: Six counters per player per game; the game for a date is
//!   created the first time a stat is recorded for it
//! - **Reports**: Joined stat listing, per-player totals and per-stat leaderboards
//! - **Charts**: Text bar charts per player and per leaderboard
//! - **CSV Export**: `Player,Date,Team,Points,Rebounds,Assists,Steals,Blocks,Turnovers`
//!
//! ## Quick Start
//!
//! ```rust
//! use bball_stats::{storage::{StatLine, StatsDatabase}, StatCategory};
//! use chrono::NaiveDate;
//!
//! # fn example() -> bball_stats::Result<()> {
//! let mut db = StatsDatabase::open_in_memory()?;
//! let lakers = db.add_team("Lakers")?;
//! db.add_player("LeBron", Some(lakers))?;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
//! db.record_stats("LeBron", date, &StatLine { points: 28, ..StatLine::default() })?;
//!
//! let board = db.leaderboard(StatCategory::Points)?;
//! assert_eq!(board[0].total, 28);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a database file without passing `--db` every time:
//! ```bash
//! export BBALL_STATS_DB=~/hoops/basketball_data.db
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{GameId, PlayerId, StatCategory, StatId, TeamId};
pub use error::{Result, StatsError};
pub use storage::StatsDatabase;

pub const DB_PATH_ENV_VAR: &str = "BBALL_STATS_DB";
pub const LOG_ENV_VAR: &str = "BBALL_STATS_LOG";
