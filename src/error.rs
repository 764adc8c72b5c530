//! Error types for the basketball stats tracker

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not determine a data directory; pass --db or set {env_var}")]
    DataDir { env_var: String },

    #[error("Team not found: {name}. Please add the team first.")]
    TeamNotFound { name: String },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Invalid stat: {name} (expected one of Points, Rebounds, Assists, Steals, Blocks, Turnovers)")]
    InvalidStat { name: String },

    #[error("Invalid {kind}: {value}")]
    InvalidId { kind: &'static str, value: String },

    #[error("Invalid date: {value} (expected YYYY-MM-DD)")]
    InvalidDate { value: String },

    #[error("A game already exists on {date}")]
    GameExists { date: chrono::NaiveDate },
}
