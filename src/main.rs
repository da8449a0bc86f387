use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

use connect_four_sim::ai::AgentKind;
use connect_four_sim::config::AppConfig;
use connect_four_sim::simulation::Simulator;

/// Simulate Connect Four games between automated players.
#[derive(Parser)]
#[command(
    name = "connect-four-sim",
    about = "Simulate Connect Four games between automated players"
)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override number of games to play
    #[arg(long)]
    games: Option<u64>,

    /// Override the agent playing first
    #[arg(long, value_enum)]
    player_one: Option<AgentKind>,

    /// Override the agent playing second
    #[arg(long, value_enum)]
    player_two: Option<AgentKind>,

    /// Base seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Play games across all cores
    #[arg(long)]
    parallel: bool,

    /// Print the final statistics as JSON
    #[arg(long)]
    json: bool,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    SimpleLogger::new()
        .with_level(cli.log_level)
        .init()
        .context("initializing logger")?;

    // Load configuration
    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        app_config.simulation.num_games = games;
    }
    if let Some(kind) = cli.player_one {
        app_config.players.player_one = kind;
    }
    if let Some(kind) = cli.player_two {
        app_config.players.player_two = kind;
    }
    if cli.seed.is_some() {
        app_config.simulation.seed = cli.seed;
    }
    if cli.parallel {
        app_config.simulation.parallel = true;
    }
    app_config.validate().context("invalid configuration")?;

    let start = Instant::now();
    let stats = Simulator::new(&app_config)
        .run()
        .context("simulation aborted")?;
    let elapsed = start.elapsed();

    info!(
        "Played {} games in {:.2?} ({:.0} games/s)",
        stats.games,
        elapsed,
        stats.games as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
    );

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).context("serializing statistics")?
        );
    } else {
        println!("{stats}");
    }

    Ok(())
}
