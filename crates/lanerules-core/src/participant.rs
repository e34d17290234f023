//! # Participant Classes
//!
//! Defines the [`Participant`] enum, the single list of traffic actor
//! classes that rules can be registered for. Every `match` on
//! `Participant` is exhaustive, so adding a class forces every consumer
//! to decide how to handle it.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The class of traffic participant a rule set is evaluated for.
///
/// | Participant | Identifier |
/// |-------------|------------|
/// | Vehicle | `vehicle` |
/// | Pedestrian | `pedestrian` |
/// | Bicycle | `bicycle` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Participant {
    /// Motorized road vehicle.
    Vehicle,
    /// Person on foot.
    Pedestrian,
    /// Cyclist.
    Bicycle,
}

impl Participant {
    /// Returns all participant classes in canonical order.
    pub fn all() -> &'static [Participant] {
        &[Self::Vehicle, Self::Pedestrian, Self::Bicycle]
    }

    /// Returns the string identifier for this participant class.
    ///
    /// Matches the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vehicle => "vehicle",
            Self::Pedestrian => "pedestrian",
            Self::Bicycle => "bicycle",
        }
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Participant {
    type Err = ValidationError;

    /// Parse a participant class from its string identifier (case-sensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vehicle" => Ok(Self::Vehicle),
            "pedestrian" => Ok(Self::Pedestrian),
            "bicycle" => Ok(Self::Bicycle),
            other => Err(ValidationError::UnknownParticipant(other.to_string())),
        }
    }
}
