//! # Rules Configuration
//!
//! [`RulesConfig`] selects which registered rule set a consumer wants:
//! a jurisdiction and a participant class. It deserializes from YAML or
//! JSON, and every field is validated into its typed identifier during
//! deserialization.
//!
//! ```yaml
//! location: us
//! participant: vehicle
//! ```

use serde::{Deserialize, Serialize};

use lanerules_core::{ConfigurationError, JurisdictionId, LaneRulesError, Participant};

/// Selection of a (jurisdiction, participant) rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    /// Jurisdiction whose traffic law applies.
    pub location: JurisdictionId,
    /// Participant class the rules are evaluated for.
    pub participant: Participant,
}

impl RulesConfig {
    /// Create a configuration from typed identifiers.
    pub fn new(location: JurisdictionId, participant: Participant) -> Self {
        Self {
            location,
            participant,
        }
    }

    /// Create a configuration from raw strings, e.g. command-line values.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::InvalidValue`] naming the rejected field.
    pub fn from_raw(location: &str, participant: &str) -> Result<Self, ConfigurationError> {
        let location =
            JurisdictionId::new(location).map_err(|e| ConfigurationError::InvalidValue {
                field: "location",
                reason: e.to_string(),
            })?;
        let participant =
            participant
                .parse::<Participant>()
                .map_err(|e| ConfigurationError::InvalidValue {
                    field: "participant",
                    reason: e.to_string(),
                })?;
        Ok(Self::new(location, participant))
    }

    /// Parse a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, LaneRulesError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, LaneRulesError> {
        Ok(serde_json::from_str(json)?)
    }
}
