//! # lanerules-cli: Command-Line Interface
//!
//! Provides the `lanerules` binary on top of the traffic rules engine.
//!
//! ## Subcommands
//!
//! - `lanerules speed-limit`: Resolve the posted speed limit of a map
//!   element from a YAML/JSON list of its regulatory elements.
//! - `lanerules profile`: Print a jurisdiction's default speed profile.
//! - `lanerules rules`: List the registered (location, participant) pairs.
//!
//! ```bash
//! lanerules speed-limit --location us --participant vehicle --elements lanelet_42.yaml
//! lanerules --config rules.yaml profile
//! lanerules rules
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from business logic.
//! - Handlers write to a caller-supplied writer and return an exit code.
//! - Handlers delegate to `lanerules-traffic`; no rule logic lives here.

pub mod input;
pub mod list;
pub mod profile;
pub mod speed;

use anyhow::{bail, Result};

use lanerules_traffic::RulesConfig;

/// Combine a configuration file with command-line overrides.
///
/// Flags win over file values. Without a file, both flags are required.
pub fn resolve_rules_config(
    file: Option<&RulesConfig>,
    location: Option<&str>,
    participant: Option<&str>,
) -> Result<RulesConfig> {
    let base_location = file.map(|c| c.location.as_str());
    let base_participant = file.map(|c| c.participant.as_str());

    let location = match location.or(base_location) {
        Some(l) => l,
        None => bail!("no location given; pass --location or --config"),
    };
    let participant = match participant.or(base_participant) {
        Some(p) => p,
        None => bail!("no participant given; pass --participant or --config"),
    };

    Ok(RulesConfig::from_raw(location, participant)?)
}
