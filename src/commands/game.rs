//! Game commands

use crate::{cli::types::GameId, report::table::games_table, storage::StatsDatabase, Result};
use chrono::NaiveDate;
use std::io::Write;

use super::{resolve_team, write_json};

/// Handle `game add`. Either team may be omitted.
pub fn handle_game_add(
    db: &mut StatsDatabase,
    date: NaiveDate,
    home: Option<&str>,
    away: Option<&str>,
    out: &mut impl Write,
) -> Result<GameId> {
    let team1_id = home.map(|name| resolve_team(db, name)).transpose()?;
    let team2_id = away.map(|name| resolve_team(db, name)).transpose()?;

    let game_id = db.add_game(date, team1_id, team2_id)?;
    writeln!(out, "✓ Game added for {} (id {})", date, game_id)?;
    Ok(game_id)
}

/// Handle `game list`
pub fn handle_game_list(db: &StatsDatabase, as_json: bool, out: &mut impl Write) -> Result<()> {
    let games = db.list_games()?;

    if as_json {
        write_json(out, &games)?;
    } else if games.is_empty() {
        writeln!(out, "No games yet. Games are created when stats are recorded.")?;
    } else {
        let teams = db.list_teams()?;
        write!(out, "{}", games_table(&games, &teams).render())?;
    }
    Ok(())
}
