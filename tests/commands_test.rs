//! End-to-end tests driving the `bball-stats` binary against a temporary database

use std::path::Path;
use std::process::{Command, Output};

fn run(db: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bball-stats"))
        .arg("--db")
        .arg(db)
        .args(args)
        .env_remove("BBALL_STATS_DB")
        .env_remove("BBALL_STATS_LOG")
        .output()
        .expect("failed to run bball-stats")
}

fn run_ok(db: &Path, args: &[&str]) -> String {
    let output = run(db, args);
    assert!(
        output.status.success(),
        "{:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_full_session() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("basketball_data.db");

    run_ok(&db, &["team", "add", "Lakers"]);
    run_ok(&db, &["player", "add", "LeBron", "--team", "Lakers"]);
    run_ok(&db, &["player", "add", "Bench Guy"]);

    run_ok(
        &db,
        &[
            "stats", "add", "--player", "LeBron", "--date", "2024-01-10", "--points", "30",
            "--rebounds", "8",
        ],
    );
    run_ok(
        &db,
        &["stats", "add", "--player", "Bench Guy", "--date", "2024-01-10", "--points", "4"],
    );

    let games = run_ok(&db, &["game", "list", "--json"]);
    let games: serde_json::Value = serde_json::from_str(&games).unwrap();
    assert_eq!(games.as_array().unwrap().len(), 1);
    assert_eq!(games[0]["date"], "2024-01-10");

    let board = run_ok(&db, &["leaderboard", "points", "--json"]);
    let board: serde_json::Value = serde_json::from_str(&board).unwrap();
    assert_eq!(board[0]["player"], "LeBron");
    assert_eq!(board[0]["total"], 30);
    assert_eq!(board[1]["total"], 4);

    let csv = run_ok(&db, &["export"]);
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("Player,Date,Team,Points,Rebounds,Assists,Steals,Blocks,Turnovers")
    );
    assert_eq!(lines.next(), Some("LeBron,2024-01-10,Lakers,30,8,0,0,0,0"));
    assert_eq!(lines.next(), Some("Bench Guy,2024-01-10,,4,0,0,0,0,0"));
}

#[test]
fn test_lookup_miss_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("stats.db");

    let output = run(&db, &["player", "add", "Someone", "--team", "Missing"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Team not found: Missing"));

    let players = run_ok(&db, &["player", "list", "--json"]);
    assert_eq!(players.trim(), "[]");
}

#[test]
fn test_invalid_leaderboard_stat_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("stats.db");

    let output = run(&db, &["leaderboard", "fouls"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("fouls"));
}

#[test]
fn test_delete_unknown_stat_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("stats.db");

    let out = run_ok(&db, &["stats", "delete", "42"]);
    assert!(out.contains("nothing to delete"));
}

#[test]
fn test_export_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("stats.db");
    let csv_path = dir.path().join("basketball_stats.csv");

    run_ok(&db, &["player", "add", "Solo"]);
    run_ok(&db, &["stats", "add", "--player", "Solo", "--date", "2024-02-02"]);
    run_ok(&db, &["export", "--output", csv_path.to_str().unwrap()]);

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv.ends_with("Solo,2024-02-02,,0,0,0,0,0,0\n"));
}
