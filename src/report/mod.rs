//! Terminal presentation of query results: tables and bar charts.

pub mod chart;
pub mod table;

pub use chart::{melt, render_leaderboard_chart, render_player_chart, series_by_player};
pub use table::Table;
