//! Leaderboard command

use crate::{
    cli::types::StatCategory,
    report::{render_leaderboard_chart, table::leaderboard_table},
    storage::StatsDatabase,
    Result,
};
use std::io::Write;

use super::write_json;

/// Handle `leaderboard <STAT>`
pub fn handle_leaderboard(
    db: &StatsDatabase,
    stat: StatCategory,
    as_json: bool,
    chart: bool,
    width: usize,
    out: &mut impl Write,
) -> Result<()> {
    let entries = db.leaderboard(stat)?;

    if as_json {
        write_json(out, &entries)?;
    } else if entries.is_empty() {
        writeln!(out, "No stats recorded yet.")?;
    } else if chart {
        write!(out, "{}", render_leaderboard_chart(stat, &entries, width))?;
    } else {
        write!(out, "{}", leaderboard_table(stat, &entries).render())?;
    }
    Ok(())
}
