//! # Profile Subcommand
//!
//! Prints the default speed profile of a jurisdiction as JSON.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use lanerules_traffic::{RulesConfig, TrafficRulesRegistry};

use crate::resolve_rules_config;

/// Arguments for the `lanerules profile` subcommand.
#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Jurisdiction code (e.g. `us`). Overrides the config file.
    #[arg(long)]
    pub location: Option<String>,

    /// Participant class whose rules provide the profile. Defaults to `vehicle`.
    #[arg(long)]
    pub participant: Option<String>,
}

/// Execute the profile subcommand.
pub fn run_profile(
    args: &ProfileArgs,
    config: Option<&RulesConfig>,
    registry: &TrafficRulesRegistry,
    out: &mut dyn Write,
) -> Result<u8> {
    let participant = match (args.participant.as_deref(), config) {
        (Some(p), _) => Some(p),
        (None, Some(_)) => None,
        (None, None) => Some("vehicle"),
    };
    let rules_config = resolve_rules_config(config, args.location.as_deref(), participant)?;
    let rules = registry.create(&rules_config)?;

    serde_json::to_writer_pretty(&mut *out, rules.country_speed_limits())?;
    writeln!(out)?;
    Ok(0)
}
