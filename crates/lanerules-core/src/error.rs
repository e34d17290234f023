//! # Error Hierarchy
//!
//! Structured error types for lanerules, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Two failure classes reach callers of the rules engine:
//!
//! - [`ConfigurationError`]: the deployment asked for something the
//!   registry cannot provide (unsupported jurisdiction/participant pair,
//!   duplicate registration). Never retried.
//! - [`InterpretationError`]: map content claims to carry a rule but the
//!   rule cannot be decoded. Propagated to the caller, never swallowed.
//!
//! "No rule applies" is not an error and is expressed with `Option`.

use thiserror::Error;

use crate::jurisdiction::JurisdictionId;
use crate::participant::Participant;

/// Top-level error type for lanerules.
#[derive(Error, Debug)]
pub enum LaneRulesError {
    /// Registry or configuration misuse.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Undecodable regulatory content on a map element.
    #[error("interpretation error: {0}")]
    Interpretation(#[from] InterpretationError),

    /// Domain primitive validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors raised while building or querying the traffic rules registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// No rules are registered for the requested combination.
    #[error("no traffic rules registered for location \"{location}\" and participant \"{participant}\"")]
    UnsupportedCombination {
        /// The requested jurisdiction.
        location: JurisdictionId,
        /// The requested participant class.
        participant: Participant,
    },

    /// A second factory was registered under an existing key.
    #[error("traffic rules for location \"{location}\" and participant \"{participant}\" are already registered")]
    DuplicateRegistration {
        /// The jurisdiction of the conflicting entry.
        location: JurisdictionId,
        /// The participant class of the conflicting entry.
        participant: Participant,
    },

    /// A configuration value could not be turned into a typed identifier.
    #[error("invalid configuration value for {field}: {reason}")]
    InvalidValue {
        /// The configuration field that was rejected.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// Errors raised while interpreting regulatory annotations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpretationError {
    /// A speed-limit annotation carries a type code that is neither a known
    /// sign code nor a velocity literal.
    #[error("unable to interpret the velocity information from \"{code}\"")]
    UnrecognizedSpeedCode {
        /// The offending type code, verbatim.
        code: String,
    },
}

/// Validation errors for domain primitive newtypes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Jurisdiction identifier is empty.
    #[error("invalid jurisdiction ID: must be non-empty")]
    InvalidJurisdictionId,

    /// Participant string does not name a known participant class.
    #[error("unknown participant class: \"{0}\" (expected vehicle, pedestrian or bicycle)")]
    UnknownParticipant(String),

    /// Velocity literal could not be parsed.
    #[error("invalid velocity: \"{value}\" ({reason})")]
    InvalidVelocity {
        /// The string that failed to parse.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}
