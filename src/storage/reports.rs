//! Aggregate and joined read queries behind the stats tables and leaderboards

use super::{models::*, schema::StatsDatabase};
use crate::cli::types::{PlayerId, StatCategory};
use crate::error::Result;
use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension};
use tracing::debug;

const ALL_STATS_QUERY: &str = "SELECT p.name, g.date, t.name,
        s.points, s.rebounds, s.assists, s.steals, s.blocks, s.turnovers,
        s.stat_id
 FROM stats AS s
 JOIN players AS p ON s.player_id = p.player_id
 JOIN games AS g ON s.game_id = g.game_id
 LEFT JOIN teams AS t ON p.team_id = t.team_id
 ORDER BY s.stat_id";

impl StatsDatabase {
    /// Every stat row joined with player name, game date and team name.
    ///
    /// Players without a team still appear, with `team: None`.
    pub fn list_all_stats(&self) -> Result<Vec<StatRecord>> {
        let mut stmt = self.conn.prepare(ALL_STATS_QUERY)?;
        let rows = stmt.query_map([], |row| {
            Ok(StatRecord {
                player: row.get(0)?,
                date: row.get(1)?,
                team: row.get(2)?,
                line: Self::row_to_stat_line(row, 3)?,
                stat_id: row.get(9)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        debug!(count = records.len(), "listed stat records");
        Ok(records)
    }

    /// Sum of each counter per player name, ordered by name
    pub fn player_totals(&self) -> Result<Vec<PlayerTotals>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.name,
                    COALESCE(SUM(s.points), 0), COALESCE(SUM(s.rebounds), 0),
                    COALESCE(SUM(s.assists), 0), COALESCE(SUM(s.steals), 0),
                    COALESCE(SUM(s.blocks), 0), COALESCE(SUM(s.turnovers), 0)
             FROM stats AS s
             JOIN players AS p ON s.player_id = p.player_id
             JOIN games AS g ON s.game_id = g.game_id
             GROUP BY p.name
             ORDER BY p.name",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(PlayerTotals {
                player: row.get(0)?,
                points: row.get(1)?,
                rebounds: row.get(2)?,
                assists: row.get(3)?,
                steals: row.get(4)?,
                blocks: row.get(5)?,
                turnovers: row.get(6)?,
            })
        })?;

        let mut totals = Vec::new();
        for row in rows {
            totals.push(row?);
        }
        Ok(totals)
    }

    /// Players ranked by the summed value of one counter, highest first.
    ///
    /// Ties are broken by player name so the ordering is stable.
    pub fn leaderboard(&self, stat: StatCategory) -> Result<Vec<LeaderboardEntry>> {
        // The column comes from the closed StatCategory table, never from caller text
        let sql = format!(
            "SELECT p.name, COALESCE(SUM(s.{column}), 0) AS total
             FROM stats AS s
             JOIN players AS p ON s.player_id = p.player_id
             GROUP BY p.name
             ORDER BY total DESC, p.name",
            column = stat.column()
        );
        debug!(%stat, "leaderboard query");

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| {
            Ok(LeaderboardEntry {
                player: row.get(0)?,
                total: row.get(1)?,
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }

    /// Leaderboard for a stat given by name. Unknown names are rejected before
    /// any query runs.
    pub fn leaderboard_by_name(&self, stat_name: &str) -> Result<Vec<LeaderboardEntry>> {
        let stat: StatCategory = stat_name.parse()?;
        self.leaderboard(stat)
    }

    /// The first stat line recorded for a player on a date, or a zeroed line
    /// with no id when there is none.
    pub fn player_stats_for_date(
        &self,
        player_id: PlayerId,
        date: NaiveDate,
    ) -> Result<PlayerGameStats> {
        let found = self
            .conn
            .query_row(
                "SELECT s.stat_id,
                        s.points, s.rebounds, s.assists, s.steals, s.blocks, s.turnovers
                 FROM stats AS s
                 JOIN games AS g ON s.game_id = g.game_id
                 WHERE s.player_id = ? AND g.date = ?
                 ORDER BY s.stat_id
                 LIMIT 1",
                params![player_id, date],
                |row| {
                    Ok(PlayerGameStats {
                        stat_id: Some(row.get(0)?),
                        line: Self::row_to_stat_line(row, 1)?,
                    })
                },
            )
            .optional()?;

        Ok(found.unwrap_or_default())
    }
}
