//! Basic database query operations

use super::{models::*, schema::StatsDatabase};
use crate::cli::types::{GameId, PlayerId, StatId, TeamId};
use crate::error::{Result, StatsError};
use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension, Row};
use tracing::{debug, info};

impl StatsDatabase {
    /// Insert a new team. Names are not required to be unique.
    pub fn add_team(&mut self, name: &str) -> Result<TeamId> {
        self.conn
            .execute("INSERT INTO teams (name) VALUES (?)", params![name])?;
        let team_id = TeamId::new(self.conn.last_insert_rowid());
        info!(%team_id, name, "team added");
        Ok(team_id)
    }

    /// All teams in insertion order
    pub fn list_teams(&self) -> Result<Vec<Team>> {
        let mut stmt = self
            .conn
            .prepare("SELECT team_id, name FROM teams ORDER BY team_id")?;
        let rows = stmt.query_map([], Self::row_to_team)?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(row?);
        }
        Ok(teams)
    }

    /// First team with exactly this name, if any
    pub fn find_team_by_name(&self, name: &str) -> Result<Option<Team>> {
        let team = self
            .conn
            .query_row(
                "SELECT team_id, name FROM teams WHERE name = ? ORDER BY team_id LIMIT 1",
                params![name],
                Self::row_to_team,
            )
            .optional()?;
        Ok(team)
    }

    /// Insert a new player. The caller resolves the team beforehand; an unknown
    /// `team_id` is rejected by the foreign key with a `Database` error.
    pub fn add_player(&mut self, name: &str, team_id: Option<TeamId>) -> Result<PlayerId> {
        self.conn.execute(
            "INSERT INTO players (name, team_id) VALUES (?, ?)",
            params![name, team_id],
        )?;
        let player_id = PlayerId::new(self.conn.last_insert_rowid());
        info!(%player_id, name, "player added");
        Ok(player_id)
    }

    /// All players in insertion order
    pub fn list_players(&self) -> Result<Vec<Player>> {
        let mut stmt = self
            .conn
            .prepare("SELECT player_id, name, team_id FROM players ORDER BY player_id")?;
        let rows = stmt.query_map([], Self::row_to_player)?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// First player with exactly this name, if any
    pub fn find_player_by_name(&self, name: &str) -> Result<Option<Player>> {
        let player = self
            .conn
            .query_row(
                "SELECT player_id, name, team_id FROM players
                 WHERE name = ? ORDER BY player_id LIMIT 1",
                params![name],
                Self::row_to_player,
            )
            .optional()?;
        Ok(player)
    }

    /// Insert a game for `date`. Fails with [`StatsError::GameExists`] if the
    /// date already has one.
    pub fn add_game(
        &mut self,
        date: NaiveDate,
        team1_id: Option<TeamId>,
        team2_id: Option<TeamId>,
    ) -> Result<GameId> {
        if self.find_game_by_date(date)?.is_some() {
            return Err(StatsError::GameExists { date });
        }

        self.conn.execute(
            "INSERT INTO games (date, team1_id, team2_id) VALUES (?, ?, ?)",
            params![date, team1_id, team2_id],
        )?;
        let game_id = GameId::new(self.conn.last_insert_rowid());
        info!(%game_id, %date, "game added");
        Ok(game_id)
    }

    /// The game played on `date`, if one has been recorded
    pub fn find_game_by_date(&self, date: NaiveDate) -> Result<Option<Game>> {
        let game = self
            .conn
            .query_row(
                "SELECT game_id, date, team1_id, team2_id FROM games WHERE date = ?",
                params![date],
                Self::row_to_game,
            )
            .optional()?;
        Ok(game)
    }

    /// All games ordered by date
    pub fn list_games(&self) -> Result<Vec<Game>> {
        let mut stmt = self.conn.prepare(
            "SELECT game_id, date, team1_id, team2_id FROM games ORDER BY date, game_id",
        )?;
        let rows = stmt.query_map([], Self::row_to_game)?;

        let mut games = Vec::new();
        for row in rows {
            games.push(row?);
        }
        Ok(games)
    }

    /// Reuse the game on `date`, or create one with only the date set.
    ///
    /// The insert is ignored when the date already exists (unique index), so
    /// two calls for the same date always resolve to the same game.
    pub fn get_or_create_game(&mut self, date: NaiveDate) -> Result<GameId> {
        let inserted = self
            .conn
            .execute("INSERT OR IGNORE INTO games (date) VALUES (?)", params![date])?;
        if inserted > 0 {
            info!(%date, "game created for new date");
        }

        let game_id = self.conn.query_row(
            "SELECT game_id FROM games WHERE date = ?",
            params![date],
            |row| row.get(0),
        )?;
        Ok(game_id)
    }

    /// Insert one stat line. Repeating the same (game, player) pair adds
    /// another row rather than replacing the first.
    pub fn add_stat(
        &mut self,
        game_id: GameId,
        player_id: PlayerId,
        line: &StatLine,
    ) -> Result<StatId> {
        self.conn.execute(
            "INSERT INTO stats
             (game_id, player_id, points, rebounds, assists, steals, blocks, turnovers)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                game_id,
                player_id,
                line.points,
                line.rebounds,
                line.assists,
                line.steals,
                line.blocks,
                line.turnovers
            ],
        )?;
        let stat_id = StatId::new(self.conn.last_insert_rowid());
        info!(%stat_id, %game_id, %player_id, "stat line added");
        Ok(stat_id)
    }

    /// Fetch a single stored stat row
    pub fn get_stat(&self, stat_id: StatId) -> Result<Option<Stat>> {
        let stat = self
            .conn
            .query_row(
                "SELECT stat_id, game_id, player_id,
                        points, rebounds, assists, steals, blocks, turnovers
                 FROM stats WHERE stat_id = ?",
                params![stat_id],
                |row| {
                    Ok(Stat {
                        stat_id: row.get(0)?,
                        game_id: row.get(1)?,
                        player_id: row.get(2)?,
                        line: Self::row_to_stat_line(row, 3)?,
                    })
                },
            )
            .optional()?;
        Ok(stat)
    }

    /// Delete a stat row. Returns whether a row was removed; a missing id is
    /// not an error.
    pub fn delete_stat(&mut self, stat_id: StatId) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM stats WHERE stat_id = ?", params![stat_id])?;
        debug!(%stat_id, removed, "delete stat");
        Ok(removed > 0)
    }

    /// Record a player's line for the game on `date`, creating the game if
    /// this is the first stat for that date.
    pub fn record_stats(
        &mut self,
        player_name: &str,
        date: NaiveDate,
        line: &StatLine,
    ) -> Result<StatId> {
        let player = self
            .find_player_by_name(player_name)?
            .ok_or_else(|| StatsError::PlayerNotFound {
                name: player_name.to_string(),
            })?;

        let game_id = self.get_or_create_game(date)?;
        self.add_stat(game_id, player.player_id, line)
    }

    fn row_to_team(row: &Row) -> rusqlite::Result<Team> {
        Ok(Team {
            team_id: row.get(0)?,
            name: row.get(1)?,
        })
    }

    fn row_to_player(row: &Row) -> rusqlite::Result<Player> {
        Ok(Player {
            player_id: row.get(0)?,
            name: row.get(1)?,
            team_id: row.get(2)?,
        })
    }

    fn row_to_game(row: &Row) -> rusqlite::Result<Game> {
        Ok(Game {
            game_id: row.get(0)?,
            date: row.get(1)?,
            team1_id: row.get(2)?,
            team2_id: row.get(3)?,
        })
    }

    /// Read six consecutive counter columns starting at `first`. NULLs read as 0.
    pub(crate) fn row_to_stat_line(row: &Row, first: usize) -> rusqlite::Result<StatLine> {
        let counter = |offset: usize| -> rusqlite::Result<u32> {
            Ok(row.get::<_, Option<u32>>(first + offset)?.unwrap_or(0))
        };
        Ok(StatLine {
            points: counter(0)?,
            rebounds: counter(1)?,
            assists: counter(2)?,
            steals: counter(3)?,
            blocks: counter(4)?,
            turnovers: counter(5)?,
        })
    }
}
