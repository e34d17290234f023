//! # Symbolic Speed Sign Tables
//!
//! A [`SpeedSignTable`] maps a jurisdiction's speed-sign catalogue codes
//! (e.g. `"us-r2-30"`) to velocities. Lookups are exact and case-sensitive.
//!
//! Decoding a sign code is a two-step lookup with an explicit result:
//!
//! 1. exact match in the table → [`SignDecoding::Table`];
//! 2. otherwise, parse the code as a velocity literal → [`SignDecoding::Literal`];
//! 3. otherwise → [`SignDecoding::Unrecognized`].

use std::collections::HashMap;

use lanerules_core::{InterpretationError, Velocity, VelocityUnit};

/// Outcome of decoding a speed-sign type code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SignDecoding {
    /// The code is a catalogue entry.
    Table(Velocity),
    /// The code is a velocity literal such as `"30mph"`.
    Literal(Velocity),
    /// The code is neither.
    Unrecognized,
}

impl SignDecoding {
    /// The decoded velocity, if any.
    pub fn velocity(&self) -> Option<Velocity> {
        match self {
            Self::Table(v) | Self::Literal(v) => Some(*v),
            Self::Unrecognized => None,
        }
    }

    /// Convert to a `Result`, naming `code` on failure.
    pub fn into_velocity(self, code: &str) -> Result<Velocity, InterpretationError> {
        self.velocity()
            .ok_or_else(|| InterpretationError::UnrecognizedSpeedCode {
                code: code.to_string(),
            })
    }
}

/// Fixed mapping from sign codes to velocities.
#[derive(Debug, Clone, Default)]
pub struct SpeedSignTable {
    entries: HashMap<String, Velocity>,
}

impl SpeedSignTable {
    /// Build a table from `(code, value)` pairs expressed in `unit`.
    ///
    /// Later duplicates overwrite earlier ones; tables are literal data and
    /// are expected not to contain any.
    pub fn from_entries<'a>(
        unit: VelocityUnit,
        entries: impl IntoIterator<Item = (&'a str, f64)>,
    ) -> Self {
        let entries = entries
            .into_iter()
            .map(|(code, value)| (code.to_string(), Velocity::new(value, unit)))
            .collect();
        Self { entries }
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(&self, code: &str) -> Option<Velocity> {
        self.entries.get(code).copied()
    }

    /// Decode `code` via the table, falling back to literal parsing.
    pub fn decode(&self, code: &str) -> SignDecoding {
        if let Some(v) = self.lookup(code) {
            return SignDecoding::Table(v);
        }
        match code.parse::<Velocity>() {
            Ok(v) => SignDecoding::Literal(v),
            Err(_) => SignDecoding::Unrecognized,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
