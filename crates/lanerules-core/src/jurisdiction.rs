//! # Jurisdiction Identifiers
//!
//! A jurisdiction names the body of traffic law (a country or region) whose
//! rules apply. It is half of every registry key; the other half is the
//! [`Participant`](crate::Participant) class.
//!
//! ## Validation
//!
//! [`JurisdictionId`] is validated to be non-empty at construction time and
//! is stored trimmed. Comparison is by value and case-sensitive.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// -- Validating Deserialize for JurisdictionId --------------------------------

impl<'de> Deserialize<'de> for JurisdictionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// A jurisdiction identifier, typically a lowercase ISO 3166-1 alpha-2 code
/// (e.g. `"us"`, `"de"`).
///
/// # Validation
///
/// Must be a non-empty string. No further format restrictions are imposed
/// because regional rule sets (e.g. `"us-ca"`) are valid keys as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct JurisdictionId(String);

impl JurisdictionId {
    /// Create a jurisdiction identifier from a string, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidJurisdictionId`] if the string is
    /// empty or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidJurisdictionId);
        }
        Ok(Self(trimmed))
    }

    /// Identifier for one of the [`Locations`] constants, which are known
    /// to be non-empty.
    fn well_known(code: &'static str) -> Self {
        Self(code.to_string())
    }

    /// Access the jurisdiction identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JurisdictionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for JurisdictionId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Well-known jurisdiction codes.
#[derive(Debug, Clone, Copy)]
pub struct Locations;

impl Locations {
    /// Germany.
    pub const GERMANY: &'static str = "de";
    /// United States of America.
    pub const UNITED_STATES: &'static str = "us";

    /// [`JurisdictionId`] for [`Locations::GERMANY`].
    pub fn germany() -> JurisdictionId {
        JurisdictionId::well_known(Self::GERMANY)
    }

    /// [`JurisdictionId`] for [`Locations::UNITED_STATES`].
    pub fn united_states() -> JurisdictionId {
        JurisdictionId::well_known(Self::UNITED_STATES)
    }
}
