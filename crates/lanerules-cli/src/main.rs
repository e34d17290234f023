//! # lanerules CLI entry point
//!
//! Parses command-line arguments, initializes logging and the traffic
//! rules registry, and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lanerules_cli::input::load_rules_config;
use lanerules_cli::list::run_list;
use lanerules_cli::profile::{run_profile, ProfileArgs};
use lanerules_cli::speed::{run_speed_limit, SpeedLimitArgs};

/// lanerules: traffic rules by jurisdiction and participant.
///
/// Resolves posted speed limits from regulatory elements and exposes the
/// default speed profiles of the built-in jurisdictions.
#[derive(Parser, Debug)]
#[command(name = "lanerules", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    /// Rules configuration file (YAML or JSON) with `location` and `participant`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the posted speed limit of a map element.
    SpeedLimit(SpeedLimitArgs),

    /// Print a jurisdiction's default speed profile.
    Profile(ProfileArgs),

    /// List registered (location, participant) rule sets.
    Rules,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    if cli.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let registry = lanerules_traffic::init_registry()?;

    let config = cli
        .config
        .as_deref()
        .map(load_rules_config)
        .transpose()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::SpeedLimit(args) => run_speed_limit(&args, config.as_ref(), &registry, &mut out),
        Commands::Profile(args) => run_profile(&args, config.as_ref(), &registry, &mut out),
        Commands::Rules => run_list(&registry, &mut out),
    }
}
