//! Stat line commands: record, show, list, totals, delete and chart.

use crate::{
    cli::types::{StatCategory, StatId},
    report::{
        melt, render_player_chart, series_by_player,
        table::{stats_table, totals_table},
    },
    storage::{StatLine, StatsDatabase},
    Result,
};
use chrono::NaiveDate;
use std::io::Write;
use tracing::info;

use super::{resolve_player, write_json};

/// Handle `stats add`: the game for `date` is reused or created, then the
/// line is inserted. An unknown player inserts nothing.
pub fn handle_stats_add(
    db: &mut StatsDatabase,
    player: &str,
    date: NaiveDate,
    line: StatLine,
    out: &mut impl Write,
) -> Result<StatId> {
    let stat_id = db.record_stats(player, date, &line)?;
    writeln!(
        out,
        "✓ Stats added for {} on {} (stat id {})",
        player, date, stat_id
    )?;
    Ok(stat_id)
}

/// Handle `stats show`
pub fn handle_stats_show(
    db: &StatsDatabase,
    player: &str,
    date: NaiveDate,
    as_json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let found = resolve_player(db, player)?;
    let stats = db.player_stats_for_date(found.player_id, date)?;

    if as_json {
        return write_json(out, &stats);
    }

    match stats.stat_id {
        Some(stat_id) => writeln!(out, "{} on {} (stat id {})", player, date, stat_id)?,
        None => writeln!(out, "{} on {} (no stats recorded)", player, date)?,
    }
    for stat in StatCategory::ALL {
        writeln!(out, "  {:<10} {:>4}", stat.to_string(), stats.line.get(stat))?;
    }
    Ok(())
}

/// Handle `stats list`
pub fn handle_stats_list(db: &StatsDatabase, as_json: bool, out: &mut impl Write) -> Result<()> {
    let records = db.list_all_stats()?;

    if as_json {
        write_json(out, &records)?;
    } else if records.is_empty() {
        writeln!(out, "No stats recorded yet.")?;
    } else {
        write!(out, "{}", stats_table(&records).render())?;
    }
    Ok(())
}

/// Handle `stats totals`
pub fn handle_stats_totals(db: &StatsDatabase, as_json: bool, out: &mut impl Write) -> Result<()> {
    let totals = db.player_totals()?;

    if as_json {
        write_json(out, &totals)?;
    } else if totals.is_empty() {
        writeln!(out, "No stats recorded yet.")?;
    } else {
        write!(out, "{}", totals_table(&totals).render())?;
    }
    Ok(())
}

/// Handle `stats delete`. Deleting an unknown id succeeds and changes nothing.
pub fn handle_stats_delete(
    db: &mut StatsDatabase,
    stat_id: StatId,
    out: &mut impl Write,
) -> Result<bool> {
    let removed = db.delete_stat(stat_id)?;
    if removed {
        info!(%stat_id, "stat deleted");
        writeln!(out, "✓ Stat {} deleted", stat_id)?;
    } else {
        writeln!(out, "No stat with id {}; nothing to delete", stat_id)?;
    }
    Ok(removed)
}

/// Handle `stats chart`: one bar chart per player (or just `player`)
pub fn handle_stats_chart(
    db: &StatsDatabase,
    player: Option<&str>,
    width: usize,
    out: &mut impl Write,
) -> Result<()> {
    let mut records = db.list_all_stats()?;
    if let Some(name) = player {
        records.retain(|r| r.player == name);
    }

    if records.is_empty() {
        match player {
            Some(name) => writeln!(out, "No stats recorded for {}.", name)?,
            None => writeln!(out, "No stats recorded yet.")?,
        }
        return Ok(());
    }

    let series = series_by_player(&melt(&records));
    for (i, player_series) in series.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        write!(out, "{}", render_player_chart(player_series, width))?;
    }
    Ok(())
}
