//! Team commands

use crate::{cli::types::TeamId, report::table::teams_table, storage::StatsDatabase, Result};
use std::io::Write;

use super::write_json;

/// Handle `team add`
pub fn handle_team_add(db: &mut StatsDatabase, name: &str, out: &mut impl Write) -> Result<TeamId> {
    let team_id = db.add_team(name)?;
    writeln!(out, "✓ Team added: {} (id {})", name, team_id)?;
    Ok(team_id)
}

/// Handle `team list`
pub fn handle_team_list(db: &StatsDatabase, as_json: bool, out: &mut impl Write) -> Result<()> {
    let teams = db.list_teams()?;

    if as_json {
        write_json(out, &teams)?;
    } else if teams.is_empty() {
        writeln!(out, "No teams yet. Add one with `team add <NAME>`.")?;
    } else {
        write!(out, "{}", teams_table(&teams).render())?;
    }
    Ok(())
}
