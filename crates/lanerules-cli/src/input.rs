//! # Input Files
//!
//! Loads rule configurations and regulatory element lists from disk.
//! Files ending in `.json` are parsed as JSON, everything else as YAML.

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use lanerules_core::{RegulatoryAnnotation, RegulatoryElementPtr};
use lanerules_traffic::RulesConfig;

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    if is_json(path) {
        serde_json::from_str(&content).with_context(|| format!("invalid JSON in {}", path.display()))
    } else {
        serde_yaml::from_str(&content).with_context(|| format!("invalid YAML in {}", path.display()))
    }
}

/// Load a [`RulesConfig`] from a YAML or JSON file.
pub fn load_rules_config(path: &Path) -> Result<RulesConfig> {
    let config: RulesConfig = load(path)?;
    tracing::debug!(
        path = %path.display(),
        location = %config.location,
        participant = %config.participant,
        "loaded rules configuration"
    );
    Ok(config)
}

/// Load an ordered list of regulatory elements from a YAML or JSON file.
///
/// The file holds a sequence of `{id, kind, type_code}` records; order is
/// preserved because resolution is order-sensitive.
pub fn load_elements(path: &Path) -> Result<Vec<RegulatoryElementPtr>> {
    let annotations: Vec<RegulatoryAnnotation> = load(path)?;
    tracing::debug!(path = %path.display(), count = annotations.len(), "loaded regulatory elements");
    Ok(annotations
        .into_iter()
        .map(RegulatoryAnnotation::into_ptr)
        .collect())
}
