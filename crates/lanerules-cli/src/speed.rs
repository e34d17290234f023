//! # Speed Limit Subcommand
//!
//! Resolves the posted speed limit of one map element. The decision is
//! printed as JSON; `null` means no speed limit applies.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use lanerules_traffic::{RulesConfig, TrafficRulesRegistry};

use crate::input::load_elements;
use crate::resolve_rules_config;

/// Arguments for the `lanerules speed-limit` subcommand.
#[derive(Args, Debug)]
pub struct SpeedLimitArgs {
    /// Jurisdiction code (e.g. `us`). Overrides the config file.
    #[arg(long)]
    pub location: Option<String>,

    /// Participant class (`vehicle`, `pedestrian`, `bicycle`). Overrides the config file.
    #[arg(long)]
    pub participant: Option<String>,

    /// YAML or JSON list of the map element's regulatory elements, in order.
    #[arg(long, value_name = "PATH")]
    pub elements: PathBuf,
}

/// Execute the speed-limit subcommand.
///
/// Returns exit code 0 on success and 1 if a speed-limit element could not
/// be interpreted. Configuration problems are returned as errors.
pub fn run_speed_limit(
    args: &SpeedLimitArgs,
    config: Option<&RulesConfig>,
    registry: &TrafficRulesRegistry,
    out: &mut dyn Write,
) -> Result<u8> {
    let rules_config = resolve_rules_config(
        config,
        args.location.as_deref(),
        args.participant.as_deref(),
    )?;
    let rules = registry.create(&rules_config)?;
    let elements = load_elements(&args.elements)?;

    match rules.speed_limit(&elements) {
        Ok(decision) => {
            tracing::info!(
                location = %rules_config.location,
                participant = %rules_config.participant,
                found = decision.is_some(),
                "resolved speed limit"
            );
            serde_json::to_writer_pretty(&mut *out, &decision)?;
            writeln!(out)?;
            Ok(0)
        }
        Err(e) => {
            writeln!(out, "FAIL: {}: {e}", args.elements.display())?;
            Ok(1)
        }
    }
}
