//! Common helpers shared across commands.

use crate::{
    cli::types::TeamId,
    config::Config,
    storage::{Player, StatsDatabase},
    Result, StatsError,
};
use serde::Serialize;
use std::io::Write;
use tracing::debug;

/// Open the configured database, creating the schema if needed
pub fn open_database(config: &Config) -> Result<StatsDatabase> {
    debug!(path = %config.db_path.display(), "connecting to database");
    StatsDatabase::open(&config.db_path)
}

/// Resolve a team name to its identity, or fail with `TeamNotFound`
pub fn resolve_team(db: &StatsDatabase, name: &str) -> Result<TeamId> {
    db.find_team_by_name(name)?
        .map(|team| team.team_id)
        .ok_or_else(|| StatsError::TeamNotFound {
            name: name.to_string(),
        })
}

/// Resolve a player name, or fail with `PlayerNotFound`
pub fn resolve_player(db: &StatsDatabase, name: &str) -> Result<Player> {
    db.find_player_by_name(name)?
        .ok_or_else(|| StatsError::PlayerNotFound {
            name: name.to_string(),
        })
}

/// Pretty-print any serializable value followed by a newline
pub fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
