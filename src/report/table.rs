//! Plain-text tables for terminal output.

use crate::cli::types::StatCategory;
use crate::storage::{Game, LeaderboardEntry, Player, PlayerTotals, StatRecord, Team};
use std::collections::HashMap;

/// A column-aligned text table.
///
/// Columns are left-aligned unless marked numeric with
/// [`Table::numeric_columns`], in which case every body cell is right-aligned.
/// Headers are always left-aligned.
#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    numeric: Vec<bool>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        Self {
            numeric: vec![false; headers.len()],
            headers,
            rows: Vec::new(),
        }
    }

    /// Right-align the body cells of the given column indexes
    pub fn numeric_columns(mut self, columns: impl IntoIterator<Item = usize>) -> Self {
        for i in columns {
            if let Some(flag) = self.numeric.get_mut(i) {
                *flag = true;
            }
        }
        self
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let columns = self.headers.len();
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().take(columns).enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let mut out = String::new();
        out.push_str(&format_row(&self.headers, &widths, &[]));
        out.push('\n');
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&rule.join("  "));
        out.push('\n');
        for row in &self.rows {
            out.push_str(&format_row(row, &widths, &self.numeric));
            out.push('\n');
        }
        out
    }
}

fn format_row(cells: &[String], widths: &[usize], numeric: &[bool]) -> String {
    let padded: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, width)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            if numeric.get(i).copied().unwrap_or(false) {
                format!("{:>width$}", cell, width = width)
            } else {
                format!("{:<width$}", cell, width = width)
            }
        })
        .collect();
    padded.join("  ").trim_end().to_string()
}

pub fn teams_table(teams: &[Team]) -> Table {
    let mut table = Table::new(["ID", "Team"]).numeric_columns([0]);
    for team in teams {
        table.push_row(vec![team.team_id.to_string(), team.name.clone()]);
    }
    table
}

/// Players with their team resolved to a name (blank when unaffiliated)
pub fn players_table(players: &[Player], teams: &[Team]) -> Table {
    let names: HashMap<_, _> = teams.iter().map(|t| (t.team_id, t.name.as_str())).collect();

    let mut table = Table::new(["ID", "Player", "Team"]).numeric_columns([0]);
    for player in players {
        let team = player
            .team_id
            .and_then(|id| names.get(&id).copied())
            .unwrap_or("");
        table.push_row(vec![
            player.player_id.to_string(),
            player.name.clone(),
            team.to_string(),
        ]);
    }
    table
}

pub fn games_table(games: &[Game], teams: &[Team]) -> Table {
    let names: HashMap<_, _> = teams.iter().map(|t| (t.team_id, t.name.as_str())).collect();
    let team_name = |id: Option<crate::cli::types::TeamId>| {
        id.and_then(|id| names.get(&id).copied())
            .unwrap_or("")
            .to_string()
    };

    let mut table = Table::new(["ID", "Date", "Team 1", "Team 2"]).numeric_columns([0]);
    for game in games {
        table.push_row(vec![
            game.game_id.to_string(),
            game.date.to_string(),
            team_name(game.team1_id),
            team_name(game.team2_id),
        ]);
    }
    table
}

/// The "Game Stats" listing, one row per stat line
pub fn stats_table(records: &[StatRecord]) -> Table {
    let mut headers = vec!["Player".to_string(), "Date".to_string(), "Team".to_string()];
    headers.extend(StatCategory::ALL.iter().map(|s| s.to_string()));
    headers.push("stat_id".to_string());

    // Six counters then stat_id
    let mut table = Table::new(headers).numeric_columns(3..10);
    for record in records {
        let mut row = vec![
            record.player.clone(),
            record.date.to_string(),
            record.team.clone().unwrap_or_default(),
        ];
        row.extend(StatCategory::ALL.iter().map(|s| record.line.get(*s).to_string()));
        row.push(record.stat_id.to_string());
        table.push_row(row);
    }
    table
}

pub fn totals_table(totals: &[PlayerTotals]) -> Table {
    let mut headers = vec!["Player".to_string()];
    headers.extend(StatCategory::ALL.iter().map(|s| s.to_string()));

    let mut table = Table::new(headers).numeric_columns(1..7);
    for t in totals {
        table.push_row(vec![
            t.player.clone(),
            t.points.to_string(),
            t.rebounds.to_string(),
            t.assists.to_string(),
            t.steals.to_string(),
            t.blocks.to_string(),
            t.turnovers.to_string(),
        ]);
    }
    table
}

pub fn leaderboard_table(stat: StatCategory, entries: &[LeaderboardEntry]) -> Table {
    let mut table = Table::new(["Rank".to_string(), "Player".to_string(), format!("Total {}", stat)])
        .numeric_columns([0, 2]);
    for (rank, entry) in entries.iter().enumerate() {
        table.push_row(vec![
            (rank + 1).to_string(),
            entry.player.clone(),
            entry.total.to_string(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::{PlayerId, StatId, TeamId};
    use crate::storage::StatLine;
    use chrono::NaiveDate;

    #[test]
    fn test_table_alignment() {
        let mut table = Table::new(["Name", "Pts"]).numeric_columns([1]);
        table.push_row(vec!["Al".to_string(), "7".to_string()]);
        table.push_row(vec!["Bartholomew".to_string(), "123".to_string()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Name         Pts");
        assert_eq!(lines[1], "-----------  ---");
        assert_eq!(lines[2], "Al             7");
        assert_eq!(lines[3], "Bartholomew  123");
    }

    #[test]
    fn test_empty_table_renders_header() {
        let table = Table::new(["ID", "Team"]);
        assert_eq!(table.render().lines().count(), 2);
    }

    #[test]
    fn test_digit_only_names_stay_left_aligned() {
        let teams = vec![
            Team {
                team_id: TeamId::new(1),
                name: "Bulls".to_string(),
            },
            Team {
                team_id: TeamId::new(12),
                name: "23".to_string(),
            },
        ];

        let rendered = teams_table(&teams).render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "ID  Team");
        assert_eq!(lines[2], " 1  Bulls");
        assert_eq!(lines[3], "12  23");
    }

    #[test]
    fn test_players_table_resolves_team_names() {
        let teams = vec![Team {
            team_id: TeamId::new(1),
            name: "Knicks".to_string(),
        }];
        let players = vec![
            Player {
                player_id: PlayerId::new(1),
                name: "Jalen".to_string(),
                team_id: Some(TeamId::new(1)),
            },
            Player {
                player_id: PlayerId::new(2),
                name: "Walk-on".to_string(),
                team_id: None,
            },
        ];

        let rendered = players_table(&players, &teams).render();
        assert!(rendered.contains("Jalen    Knicks"));
        assert!(rendered.lines().any(|l| l.ends_with("Walk-on")));
    }

    #[test]
    fn test_stats_table_columns() {
        let records = vec![StatRecord {
            player: "Steph".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            team: None,
            line: StatLine {
                points: 30,
                ..StatLine::default()
            },
            stat_id: StatId::new(9),
        }];

        let rendered = stats_table(&records).render();
        let header = rendered.lines().next().unwrap();
        assert!(header.starts_with("Player"));
        assert!(header.contains("Turnovers"));
        assert!(header.ends_with("stat_id"));
        assert!(rendered.contains("2024-01-01"));
    }

    #[test]
    fn test_leaderboard_table_ranks() {
        let entries = vec![
            LeaderboardEntry {
                player: "A".to_string(),
                total: 15,
            },
            LeaderboardEntry {
                player: "B".to_string(),
                total: 8,
            },
        ];
        let rendered = leaderboard_table(StatCategory::Points, &entries).render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[0].contains("Total Points"));
        assert!(lines[2].starts_with("   1  A"));
        assert!(lines[3].starts_with("   2  B"));
    }
}
