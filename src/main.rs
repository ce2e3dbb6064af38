//! Command-line entry point for inspecting a qualification bracket
//!
//! Operator tooling for tournament hosts: loads the tracker configuration,
//! seeds the roster, and prints the match schedule and current standings the
//! way the tracker itself would pair the players. The live game integrates
//! the library directly; this binary never touches live game state.

use anyhow::Result;
use clap::Parser;
use quali_bracket::config::TrackerConfig;
use quali_bracket::rating::ProcessRatingEngine;
use quali_bracket::team::RecordingTeamAssignment;
use quali_bracket::tracker::QualificationTracker;
use quali_bracket::types::MatchSlot;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Quali Bracket - qualification pairing and rating inspection
#[derive(Parser)]
#[command(
    name = "quali-bracket",
    version,
    about = "Inspect qualification pairings and standings for a tournament session"
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Roster override, space-separated in pairing order
    #[arg(short, long, value_name = "LIST", help = "Override the seed player list")]
    players: Option<String>,

    /// Team size override
    #[arg(short, long, value_name = "N", help = "Override the team size (1 or 2)")]
    team_size: Option<usize>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Sort the roster by rating before printing
    #[arg(long, help = "Re-seed the pairing order by descending rating")]
    sort: bool,

    /// Emit standings as JSON instead of text
    #[arg(long, help = "Print standings as JSON")]
    json: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without printing")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from environment and CLI arguments
fn load_config(args: &Args) -> Result<TrackerConfig> {
    let mut config = if let Some(config_path) = &args.config {
        TrackerConfig::from_file(config_path)?
    } else {
        TrackerConfig::from_env()?
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }
    if let Some(players) = &args.players {
        config.bracket.player_list = players.clone();
    }
    if let Some(team_size) = args.team_size {
        config.bracket.team_size = team_size;
    }

    quali_bracket::config::validate_config(&config)?;
    Ok(config)
}

fn print_schedule(tracker: &QualificationTracker) {
    let team_size = tracker.team_size();
    let players = tracker.players();
    println!("Schedule ({} per side):", team_size);
    for index in 0..tracker.match_count() {
        let start = index * 2 * team_size;
        if start + 2 * team_size > players.len() {
            break;
        }
        let red = &players[start..start + team_size];
        let blue = &players[start + team_size..start + 2 * team_size];
        let marker = if tracker.current_match() == MatchSlot::Match(index) {
            "*"
        } else {
            " "
        };
        println!(
            "{} match {}: {} vs {}",
            marker,
            index,
            red.join(" "),
            blue.join(" ")
        );
    }
}

fn print_standings(tracker: &QualificationTracker, json: bool) -> Result<()> {
    let mut standings: Vec<(&str, i32)> = tracker
        .players()
        .iter()
        .map(|p| (p.as_str(), tracker.rating_of(p)))
        .collect();
    standings.sort_by_key(|(_, rating)| std::cmp::Reverse(*rating));

    if json {
        let entries: Vec<serde_json::Value> = standings
            .iter()
            .map(|(player, rating)| serde_json::json!({ "player": player, "rating": rating }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        println!("Standings:");
        for (player, rating) in standings {
            println!("  {:>5}  {}", rating, player);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if args.dry_run {
        info!("Configuration validation successful");
        return Ok(());
    }

    let engine = Arc::new(ProcessRatingEngine::new(
        config.rating.update_command.clone(),
        config.rating.update_args.clone(),
    ));
    let connected: Vec<String> = config
        .bracket
        .player_list
        .split(' ')
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect();
    let teams = Arc::new(RecordingTeamAssignment::new(connected));

    let mut tracker = QualificationTracker::new(config, teams, engine)?;
    if args.sort {
        tracker.sort_players_by_rating();
    }

    info!(
        "Session {} with {} players, {} matches",
        tracker.session_id(),
        tracker.players().len(),
        tracker.match_count()
    );

    print_schedule(&tracker);
    print_standings(&tracker, args.json)?;

    Ok(())
}
