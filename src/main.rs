//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use bball_stats::{
    cli::{types::date::today, BballStats, Commands, GameCmd, PlayerCmd, StatsCmd, TeamCmd},
    commands::{
        export::handle_export,
        game::{handle_game_add, handle_game_list},
        leaderboard::handle_leaderboard,
        open_database,
        player::{handle_player_add, handle_player_list},
        stats::{
            handle_stats_add, handle_stats_chart, handle_stats_delete, handle_stats_list,
            handle_stats_show, handle_stats_totals,
        },
        team::{handle_team_add, handle_team_list},
    },
    config::Config,
    logging,
};
use clap::Parser;

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = BballStats::parse();

    let config = Config::resolve(app.db, app.verbose)?;
    logging::init(&config.log_filter);

    let mut db = open_database(&config)
        .with_context(|| format!("failed to open database at {}", config.db_path.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match app.command {
        Commands::Team { cmd } => match cmd {
            TeamCmd::Add { name } => {
                handle_team_add(&mut db, &name, &mut out)?;
            }
            TeamCmd::List { json } => handle_team_list(&db, json, &mut out)?,
        },

        Commands::Player { cmd } => match cmd {
            PlayerCmd::Add { name, team } => {
                handle_player_add(&mut db, &name, team.as_deref(), &mut out)?;
            }
            PlayerCmd::List { json } => handle_player_list(&db, json, &mut out)?,
        },

        Commands::Game { cmd } => match cmd {
            GameCmd::Add { date, home, away } => {
                handle_game_add(
                    &mut db,
                    date.unwrap_or_else(today),
                    home.as_deref(),
                    away.as_deref(),
                    &mut out,
                )?;
            }
            GameCmd::List { json } => handle_game_list(&db, json, &mut out)?,
        },

        Commands::Stats { cmd } => match cmd {
            StatsCmd::Add { player, date, line } => {
                handle_stats_add(
                    &mut db,
                    &player,
                    date.unwrap_or_else(today),
                    line.into(),
                    &mut out,
                )?;
            }
            StatsCmd::Show { player, date, json } => {
                handle_stats_show(&db, &player, date.unwrap_or_else(today), json, &mut out)?
            }
            StatsCmd::List { json } => handle_stats_list(&db, json, &mut out)?,
            StatsCmd::Totals { json } => handle_stats_totals(&db, json, &mut out)?,
            StatsCmd::Delete { stat_id } => {
                handle_stats_delete(&mut db, stat_id, &mut out)?;
            }
            StatsCmd::Chart { player, width } => {
                handle_stats_chart(&db, player.as_deref(), width, &mut out)?
            }
        },

        Commands::Leaderboard {
            stat,
            json,
            chart,
            width,
        } => handle_leaderboard(&db, stat, json, chart, width, &mut out)?,

        Commands::Export { output } => {
            handle_export(&db, output.as_deref(), &mut out).with_context(|| match &output {
                Some(path) => format!("failed to export stats to {}", path.display()),
                None => "failed to export stats".to_string(),
            })?
        }
    }

    Ok(())
}
