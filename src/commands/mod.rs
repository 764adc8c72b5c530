//! Command implementations for the basketball stats CLI
//!
//! Each handler is a thin consumer of [`StatsDatabase`]: it resolves names to
//! identities, calls one repository operation and writes the result to `out`.

pub mod common;
pub mod export;
pub mod game;
pub mod leaderboard;
pub mod player;
pub mod stats;
pub mod team;


pub use common::{open_database, resolve_player, resolve_team, write_json};
