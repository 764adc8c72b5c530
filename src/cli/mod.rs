//! CLI argument definitions and parsing.

pub mod types;

use crate::storage::StatLine;
use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{date::parse_game_date, StatCategory, StatId};

/// The six box-score counters; any left out are recorded as 0.
#[derive(Debug, Clone, Copy, Args)]
pub struct StatLineArgs {
    #[clap(long, default_value_t = 0)]
    pub points: u32,

    #[clap(long, default_value_t = 0)]
    pub rebounds: u32,

    #[clap(long, default_value_t = 0)]
    pub assists: u32,

    #[clap(long, default_value_t = 0)]
    pub steals: u32,

    #[clap(long, default_value_t = 0)]
    pub blocks: u32,

    #[clap(long, default_value_t = 0)]
    pub turnovers: u32,
}

impl From<StatLineArgs> for StatLine {
    fn from(args: StatLineArgs) -> Self {
        StatLine {
            points: args.points,
            rebounds: args.rebounds,
            assists: args.assists,
            steals: args.steals,
            blocks: args.blocks,
            turnovers: args.turnovers,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum TeamCmd {
    /// Register a new team
    Add {
        /// Team name
        name: String,
    },

    /// List all teams
    List {
        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum PlayerCmd {
    /// Register a new player
    Add {
        /// Player name
        name: String,

        /// Name of an existing team to assign the player to.
        #[clap(long, short)]
        team: Option<String>,
    },

    /// List all players
    List {
        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum GameCmd {
    /// Create a game for a date, optionally naming both teams
    Add {
        /// Game date, YYYY-MM-DD (defaults to today).
        #[clap(long, short, value_parser = parse_game_date)]
        date: Option<NaiveDate>,

        /// Home team name.
        #[clap(long)]
        home: Option<String>,

        /// Away team name.
        #[clap(long)]
        away: Option<String>,
    },

    /// List all games by date
    List {
        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum StatsCmd {
    /// Record a player's stat line for a game date.
    ///
    /// The game for that date is created on first use. Recording the same
    /// player and date again adds another line.
    Add {
        /// Player name
        #[clap(long, short)]
        player: String,

        /// Game date, YYYY-MM-DD (defaults to today).
        #[clap(long, short, value_parser = parse_game_date)]
        date: Option<NaiveDate>,

        #[clap(flatten)]
        line: StatLineArgs,
    },

    /// Show a player's stat line for one date
    Show {
        /// Player name
        #[clap(long, short)]
        player: String,

        /// Game date, YYYY-MM-DD (defaults to today).
        #[clap(long, short, value_parser = parse_game_date)]
        date: Option<NaiveDate>,

        /// Output results as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// List every recorded stat line with player, date and team
    List {
        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },

    /// Per-player totals of all six counters
    Totals {
        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },

    /// Delete one stat line by id (see `stats list`)
    Delete {
        /// Stat id
        stat_id: StatId,
    },

    /// Draw a bar chart of each player's summed counters
    Chart {
        /// Only chart this player.
        #[clap(long, short)]
        player: Option<String>,

        /// Maximum bar width in characters.
        #[clap(long, default_value_t = 40)]
        width: usize,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "bball-stats", about = "Basketball stat tracker")]
pub struct BballStats {
    /// Path to the SQLite database (or set `BBALL_STATS_DB` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[clap(long, short, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage teams
    Team {
        #[clap(subcommand)]
        cmd: TeamCmd,
    },

    /// Manage players
    Player {
        #[clap(subcommand)]
        cmd: PlayerCmd,
    },

    /// Manage games
    Game {
        #[clap(subcommand)]
        cmd: GameCmd,
    },

    /// Record, view and delete stat lines
    Stats {
        #[clap(subcommand)]
        cmd: StatsCmd,
    },

    /// Rank players by the total of one stat
    Leaderboard {
        /// Points, Rebounds, Assists, Steals, Blocks or Turnovers.
        stat: StatCategory,

        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,

        /// Draw the ranking as a bar chart.
        #[clap(long)]
        chart: bool,

        /// Maximum bar width in characters (with --chart).
        #[clap(long, default_value_t = 40)]
        width: usize,
    },

    /// Export all stat lines as CSV
    Export {
        /// Write to this file instead of stdout.
        #[clap(long, short)]
        output: Option<PathBuf>,
    },
}
