//! Database schema and connection management

use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;
use tracing::{debug, info};

/// Database connection manager for basketball stats.
///
/// Owns the single connection used for the whole session. It is opened once,
/// handed to every repository operation through `&self`/`&mut self`, and
/// closed when the value is dropped.
///
/// Foreign keys are enforced by SQLite (`PRAGMA foreign_keys = ON`), not only
/// by name resolution in the command layer. Inserting a player with a
/// [`TeamId`](crate::TeamId) that does not exist, or a stat for a missing game
/// or player, fails with [`StatsError::Database`](crate::StatsError::Database)
/// and writes nothing.
pub struct StatsDatabase {
    pub(crate) conn: Connection,
}

impl StatsDatabase {
    /// Open (or create) the database file at `path` and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the data directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        debug!(path = %path.display(), "opening stats database");
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Open a private in-memory database (used by tests)
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    /// Wrap an existing connection, enabling foreign keys and ensuring the schema
    pub fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let mut db = Self { conn };
        db.ensure_schema()?;
        Ok(db)
    }

    /// Create every table and index that does not exist yet.
    ///
    /// Safe to call any number of times.
    pub fn ensure_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS teams (
                team_id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                player_id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                team_id INTEGER,
                FOREIGN KEY (team_id) REFERENCES teams(team_id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS games (
                game_id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                team1_id INTEGER,
                team2_id INTEGER,
                FOREIGN KEY (team1_id) REFERENCES teams(team_id),
                FOREIGN KEY (team2_id) REFERENCES teams(team_id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS stats (
                stat_id INTEGER PRIMARY KEY AUTOINCREMENT,
                game_id INTEGER NOT NULL,
                player_id INTEGER NOT NULL,
                points INTEGER NOT NULL DEFAULT 0 CHECK (points >= 0),
                rebounds INTEGER NOT NULL DEFAULT 0 CHECK (rebounds >= 0),
                assists INTEGER NOT NULL DEFAULT 0 CHECK (assists >= 0),
                steals INTEGER NOT NULL DEFAULT 0 CHECK (steals >= 0),
                blocks INTEGER NOT NULL DEFAULT 0 CHECK (blocks >= 0),
                turnovers INTEGER NOT NULL DEFAULT 0 CHECK (turnovers >= 0),
                FOREIGN KEY (game_id) REFERENCES games(game_id),
                FOREIGN KEY (player_id) REFERENCES players(player_id)
            )",
            [],
        )?;

        // One game per date; get-or-create relies on this
        self.conn.execute(
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_games_date ON games(date)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_stats_player ON stats(player_id)",
            [],
        )?;

        info!("stats schema ready");
        Ok(())
    }
}
