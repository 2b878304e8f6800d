//! # Lift Dispatch
//!
//! Builds an elevator bank from a TOML file (or defaults), replays the
//! configured call scenario through the dispatch controller and prints the
//! fleet state before and after.
//!
//! ```bash
//! # Built-in demonstration on a 5-floor, 2-car bank
//! lift_dispatch
//!
//! # Scenario from a config file, zoned strategy, JSON output
//! lift_dispatch --config config/lift.toml --strategy zoned --json
//! ```

use clap::Parser;
use lift_common::config::LogLevel;
use lift_dispatch::config::{DispatchConfig, ScenarioStep, load_config};
use lift_dispatch::controller::{DispatchController, DispatchOutcome, FleetSnapshot};
use lift_dispatch::strategy::StrategyKind;
use std::path::PathBuf;
use std::process;
use tracing::{Level, error, info, warn};
use tracing_subscriber::EnvFilter;

/// Lift Dispatch — elevator bank dispatch simulator
#[derive(Parser, Debug)]
#[command(name = "lift_dispatch")]
#[command(author = "RTS007")]
#[command(version)]
#[command(about = "Replay hall and cab calls through a pluggable elevator dispatch strategy")]
struct Args {
    /// Path to a lift TOML config. Without it the built-in demonstration runs.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the number of floors.
    #[arg(long)]
    floors: Option<u32>,

    /// Override the number of elevators.
    #[arg(long)]
    elevators: Option<u32>,

    /// Override the dispatch strategy.
    #[arg(long, value_enum)]
    strategy: Option<StrategyKind>,

    /// Print the effective configuration as TOML and exit.
    #[arg(long)]
    print_config: bool,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long)]
    verbose: bool,

    /// Output logs and snapshots in JSON format.
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    let config = resolve_config(&args);
    let level = config
        .as_ref()
        .map(|c| c.shared.log_level)
        .unwrap_or_default();
    setup_tracing(&args, level);

    let result = config
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
        .and_then(|config| run(&args, config));

    if let Err(e) = result {
        error!("FATAL: {e}");
        process::exit(1);
    }
}

/// Load the config file (or defaults) and apply command-line overrides.
fn resolve_config(args: &Args) -> Result<DispatchConfig, lift_common::config::ConfigError> {
    let mut config = match args.config {
        Some(ref path) => load_config(path)?,
        None => DispatchConfig::default(),
    };

    if let Some(floors) = args.floors {
        config.building.floors = floors;
    }
    if let Some(elevators) = args.elevators {
        config.building.elevators = elevators;
    }
    if let Some(strategy) = args.strategy {
        config.building.strategy = strategy;
    }
    if args.config.is_none() {
        config.scenario = ScenarioStep::demo_for(&config.building);
    }

    config.validate()?;
    Ok(config)
}

fn run(args: &Args, config: DispatchConfig) -> Result<(), Box<dyn std::error::Error>> {
    if args.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    info!(
        "{} v{} starting...",
        config.shared.service_name,
        env!("CARGO_PKG_VERSION")
    );

    let mut controller = DispatchController::from_config(&config.building)?;
    print_snapshot(args, "initial", &controller.snapshot())?;

    let mut served = 0usize;
    let mut dropped = 0usize;
    for step in &config.scenario {
        for outcome in step.apply(&mut controller)? {
            match outcome {
                DispatchOutcome::Served { .. } => served += 1,
                DispatchOutcome::NoElevatorAvailable { .. } => dropped += 1,
            }
        }
    }

    if controller.pending() > 0 {
        warn!(
            pending = controller.pending(),
            "scenario left requests queued, draining"
        );
        for outcome in controller.process_requests() {
            match outcome {
                DispatchOutcome::Served { .. } => served += 1,
                DispatchOutcome::NoElevatorAvailable { .. } => dropped += 1,
            }
        }
    }

    info!(served, dropped, "scenario complete");
    print_snapshot(args, "final", &controller.snapshot())?;
    Ok(())
}

fn print_snapshot(
    args: &Args,
    label: &str,
    snapshot: &FleetSnapshot,
) -> Result<(), serde_json::Error> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(snapshot)?);
        return Ok(());
    }

    println!("── {label} state ({} strategy) ──", snapshot.strategy);
    for e in &snapshot.elevators {
        println!(
            "Elevator {} is at floor {} with status {} and direction {}",
            e.id, e.current_floor, e.status, e.direction
        );
    }
    Ok(())
}

/// Setup tracing subscriber based on CLI arguments and the configured level.
fn setup_tracing(args: &Args, level: LogLevel) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::from(level)
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}
