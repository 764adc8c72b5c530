//! Runtime configuration: where the database lives and how loud logging is.

use crate::error::{Result, StatsError};
use crate::{DB_PATH_ENV_VAR, LOG_ENV_VAR};
use std::path::PathBuf;

/// Default database file name, kept from the original tool
pub const DEFAULT_DB_FILE: &str = "basketball_data.db";

/// Settings resolved once at startup and passed to every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub log_filter: String,
}

impl Config {
    /// Resolve settings from CLI flags, then environment, then defaults.
    pub fn resolve(db_flag: Option<PathBuf>, verbosity: u8) -> Result<Self> {
        Ok(Self {
            db_path: resolve_db_path(db_flag)?,
            log_filter: resolve_log_filter(verbosity),
        })
    }
}

/// `--db` wins, then `BBALL_STATS_DB`, then `<data dir>/bball-stats/basketball_data.db`.
pub fn resolve_db_path(db_flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = db_flag {
        return Ok(path);
    }

    match std::env::var_os(DB_PATH_ENV_VAR) {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => default_db_path(),
    }
}

/// Path under the platform data directory
pub fn default_db_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| StatsError::DataDir {
        env_var: DB_PATH_ENV_VAR.to_string(),
    })?;
    Ok(data_dir.join("bball-stats").join(DEFAULT_DB_FILE))
}

/// `BBALL_STATS_LOG` wins; otherwise the `-v` count picks a level.
pub fn resolve_log_filter(verbosity: u8) -> String {
    if let Ok(filter) = std::env::var(LOG_ENV_VAR) {
        if !filter.trim().is_empty() {
            return filter;
        }
    }

    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    level.to_string()
}
