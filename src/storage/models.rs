//! Data models for the storage layer

use crate::cli::types::{GameId, PlayerId, StatCategory, StatId, TeamId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A team players may belong to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: TeamId,
    pub name: String,
}

/// A tracked player, optionally affiliated with a team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub name: String,
    pub team_id: Option<TeamId>,
}

/// A single game date. The team references are optional; recording stats
/// creates games with only the date set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub game_id: GameId,
    pub date: NaiveDate,
    pub team1_id: Option<TeamId>,
    pub team2_id: Option<TeamId>,
}

/// The six box-score counters of one stat line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatLine {
    pub points: u32,
    pub rebounds: u32,
    pub assists: u32,
    pub steals: u32,
    pub blocks: u32,
    pub turnovers: u32,
}

impl StatLine {
    pub fn get(&self, stat: StatCategory) -> u32 {
        match stat {
            StatCategory::Points => self.points,
            StatCategory::Rebounds => self.rebounds,
            StatCategory::Assists => self.assists,
            StatCategory::Steals => self.steals,
            StatCategory::Blocks => self.blocks,
            StatCategory::Turnovers => self.turnovers,
        }
    }
}

/// A stored stat row: one player's counters for one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub stat_id: StatId,
    pub game_id: GameId,
    pub player_id: PlayerId,
    #[serde(flatten)]
    pub line: StatLine,
}

/// A stat row joined with its player, game date and (optional) team name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRecord {
    pub player: String,
    pub date: NaiveDate,
    pub team: Option<String>,
    #[serde(flatten)]
    pub line: StatLine,
    pub stat_id: StatId,
}

/// Counters summed over every stat row of one player name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTotals {
    pub player: String,
    pub points: i64,
    pub rebounds: i64,
    pub assists: i64,
    pub steals: i64,
    pub blocks: i64,
    pub turnovers: i64,
}

/// One leaderboard position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player: String,
    pub total: i64,
}

/// A player's stats for a single date. `stat_id` is `None` (and the line is
/// all zeros) when nothing was recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerGameStats {
    pub stat_id: Option<StatId>,
    #[serde(flatten)]
    pub line: StatLine,
}
