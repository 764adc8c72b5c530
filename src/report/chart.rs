//! Bar-chart views of stat lines and leaderboards.
//!
//! Stat records are first melted into one point per (record, counter), then
//! grouped per player and summed per counter, which is what a per-player bar
//! chart of "Stat" against "Value" shows.

use crate::cli::types::{StatCategory, StatId};
use crate::storage::{LeaderboardEntry, StatRecord};
use chrono::NaiveDate;
use serde::Serialize;

const BAR: char = '█';

/// One counter value of one stat line, in long form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub player: String,
    pub date: NaiveDate,
    pub team: Option<String>,
    pub stat_id: StatId,
    pub stat: StatCategory,
    pub value: u32,
}

/// A player's summed counters, in box-score order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSeries {
    pub player: String,
    pub bars: Vec<(StatCategory, u64)>,
}

/// Reshape wide records into six long-form points each
pub fn melt(records: &[StatRecord]) -> Vec<ChartPoint> {
    records
        .iter()
        .flat_map(|record| {
            StatCategory::ALL.iter().map(move |stat| ChartPoint {
                player: record.player.clone(),
                date: record.date,
                team: record.team.clone(),
                stat_id: record.stat_id,
                stat: *stat,
                value: record.line.get(*stat),
            })
        })
        .collect()
}

/// Group points by player (first-seen order) and sum each counter
pub fn series_by_player(points: &[ChartPoint]) -> Vec<PlayerSeries> {
    let mut series: Vec<PlayerSeries> = Vec::new();

    for point in points {
        let index = match series.iter().position(|s| s.player == point.player) {
            Some(index) => index,
            None => {
                series.push(PlayerSeries {
                    player: point.player.clone(),
                    bars: StatCategory::ALL.iter().map(|s| (*s, 0)).collect(),
                });
                series.len() - 1
            }
        };

        if let Some(bar) = series[index].bars.iter_mut().find(|(s, _)| *s == point.stat) {
            bar.1 += u64::from(point.value);
        }
    }
    series
}

/// Horizontal bars scaled so the largest value spans `width` characters.
/// Any non-zero value gets at least one block.
pub fn render_bars(rows: &[(String, u64)], width: usize) -> String {
    let label_width = rows.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let max = rows.iter().map(|(_, v)| *v).max().unwrap_or(0);

    let mut out = String::new();
    for (label, value) in rows {
        let len = bar_length(*value, max, width);
        let bar: String = std::iter::repeat(BAR).take(len).collect();
        let line = format!(
            "{:<label_width$} | {} {}",
            label,
            bar,
            value,
            label_width = label_width
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn bar_length(value: u64, max: u64, width: usize) -> usize {
    if value == 0 || max == 0 || width == 0 {
        return 0;
    }
    let scaled = (value as u128 * width as u128 + max as u128 / 2) / max as u128;
    (scaled as usize).max(1)
}

/// A titled chart for one player
pub fn render_player_chart(series: &PlayerSeries, width: usize) -> String {
    let rows: Vec<(String, u64)> = series
        .bars
        .iter()
        .map(|(stat, value)| (stat.to_string(), *value))
        .collect();
    format!("{}\n{}", series.player, render_bars(&rows, width))
}

/// Leaderboard drawn as bars, highest first
pub fn render_leaderboard_chart(
    stat: StatCategory,
    entries: &[LeaderboardEntry],
    width: usize,
) -> String {
    let rows: Vec<(String, u64)> = entries
        .iter()
        .map(|e| (e.player.clone(), e.total.max(0) as u64))
        .collect();
    format!("Total {}\n{}", stat, render_bars(&rows, width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StatLine;

    fn record(player: &str, stat_id: i64, line: StatLine) -> StatRecord {
        StatRecord {
            player: player.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            team: None,
            line,
            stat_id: StatId::new(stat_id),
        }
    }

    #[test]
    fn test_melt_produces_six_points_per_record() {
        let records = vec![
            record(
                "A",
                1,
                StatLine {
                    points: 10,
                    turnovers: 2,
                    ..StatLine::default()
                },
            ),
            record("B", 2, StatLine::default()),
        ];

        let points = melt(&records);
        assert_eq!(points.len(), 12);
        assert_eq!(points[0].stat, StatCategory::Points);
        assert_eq!(points[0].value, 10);
        assert_eq!(points[5].stat, StatCategory::Turnovers);
        assert_eq!(points[5].value, 2);
        assert!(points[6..].iter().all(|p| p.player == "B" && p.value == 0));
    }

    #[test]
    fn test_series_sums_per_player_in_first_seen_order() {
        let records = vec![
            record(
                "Zed",
                1,
                StatLine {
                    points: 4,
                    ..StatLine::default()
                },
            ),
            record(
                "Amy",
                2,
                StatLine {
                    points: 1,
                    ..StatLine::default()
                },
            ),
            record(
                "Zed",
                3,
                StatLine {
                    points: 6,
                    assists: 3,
                    ..StatLine::default()
                },
            ),
        ];

        let series = series_by_player(&melt(&records));
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].player, "Zed");
        assert_eq!(series[0].bars[0], (StatCategory::Points, 10));
        assert_eq!(series[0].bars[2], (StatCategory::Assists, 3));
        assert_eq!(series[1].player, "Amy");
        assert_eq!(series[1].bars[0], (StatCategory::Points, 1));
    }

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar_length(0, 10, 40), 0);
        assert_eq!(bar_length(10, 10, 40), 40);
        assert_eq!(bar_length(5, 10, 40), 20);
        assert_eq!(bar_length(1, 1000, 40), 1);
        assert_eq!(bar_length(3, 0, 40), 0);
    }

    #[test]
    fn test_render_bars() {
        let rows = vec![("Points".to_string(), 4), ("Steals".to_string(), 0)];
        let rendered = render_bars(&rows, 4);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Points | ████ 4");
        assert_eq!(lines[1], "Steals |  0");
    }

    #[test]
    fn test_leaderboard_chart_has_title() {
        let entries = vec![LeaderboardEntry {
            player: "A".to_string(),
            total: 2,
        }];
        let rendered = render_leaderboard_chart(StatCategory::Blocks, &entries, 2);
        assert_eq!(rendered, "Total Blocks\nA | ██ 2\n");
    }
}
