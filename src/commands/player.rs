//! Player commands

use crate::{cli::types::PlayerId, report::table::players_table, storage::StatsDatabase, Result};
use std::io::Write;

use super::{resolve_team, write_json};

/// Handle `player add`.
///
/// A named team must already exist; otherwise nothing is inserted and
/// `TeamNotFound` is returned.
pub fn handle_player_add(
    db: &mut StatsDatabase,
    name: &str,
    team: Option<&str>,
    out: &mut impl Write,
) -> Result<PlayerId> {
    let team_id = team.map(|team| resolve_team(db, team)).transpose()?;
    let player_id = db.add_player(name, team_id)?;

    match team {
        Some(team) => writeln!(out, "✓ Player added: {} ({}) (id {})", name, team, player_id)?,
        None => writeln!(out, "✓ Player added: {} (id {})", name, player_id)?,
    }
    Ok(player_id)
}

/// Handle `player list`
pub fn handle_player_list(db: &StatsDatabase, as_json: bool, out: &mut impl Write) -> Result<()> {
    let players = db.list_players()?;

    if as_json {
        write_json(out, &players)?;
    } else if players.is_empty() {
        writeln!(out, "No players yet. Add one with `player add <NAME>`.")?;
    } else {
        let teams = db.list_teams()?;
        write!(out, "{}", players_table(&players, &teams).render())?;
    }
    Ok(())
}
