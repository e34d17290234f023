//! # Velocity Values
//!
//! [`Velocity`] stores every speed in one canonical unit (metres per
//! second) so that values built from different units compare directly.
//! [`VelocityUnit`] names the units a velocity can be expressed in.
//!
//! ## Literal Grammar
//!
//! `Velocity::from_str` accepts `<number>[whitespace]<unit>?`:
//!
//! | Unit string | Unit |
//! |-------------|------|
//! | `km/h`, `kmh`, *(none)* | kilometres per hour |
//! | `m/s`, `mps` | metres per second |
//! | `mph`, `mi/h` | miles per hour |
//!
//! The number is a decimal with optional sign and fraction. Exponents are
//! not accepted, and negative values are rejected.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const MPS_PER_KMH: f64 = 1.0 / 3.6;
const MPS_PER_MPH: f64 = 0.44704;

/// Unit a velocity literal or constant is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VelocityUnit {
    /// Metres per second (canonical).
    MetersPerSecond,
    /// Kilometres per hour.
    KilometersPerHour,
    /// Miles per hour.
    MilesPerHour,
}

impl VelocityUnit {
    /// Multiplier converting a value in this unit to metres per second.
    fn mps_factor(self) -> f64 {
        match self {
            Self::MetersPerSecond => 1.0,
            Self::KilometersPerHour => MPS_PER_KMH,
            Self::MilesPerHour => MPS_PER_MPH,
        }
    }

    /// Canonical symbol used when rendering values in this unit.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::MetersPerSecond => "m/s",
            Self::KilometersPerHour => "km/h",
            Self::MilesPerHour => "mph",
        }
    }
}

impl std::fmt::Display for VelocityUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for VelocityUnit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m/s" | "mps" => Ok(Self::MetersPerSecond),
            "km/h" | "kmh" => Ok(Self::KilometersPerHour),
            "mph" | "mi/h" => Ok(Self::MilesPerHour),
            other => Err(ValidationError::InvalidVelocity {
                value: other.to_string(),
                reason: "unknown velocity unit".into(),
            }),
        }
    }
}

/// A speed, stored in metres per second.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Velocity {
    mps: f64,
}

impl Velocity {
    /// Build a velocity from a scalar and the unit it is expressed in.
    pub fn new(value: f64, unit: VelocityUnit) -> Self {
        Self {
            mps: value * unit.mps_factor(),
        }
    }

    /// Velocity from metres per second.
    pub fn from_mps(value: f64) -> Self {
        Self::new(value, VelocityUnit::MetersPerSecond)
    }

    /// Velocity from kilometres per hour.
    pub fn from_kmh(value: f64) -> Self {
        Self::new(value, VelocityUnit::KilometersPerHour)
    }

    /// Velocity from miles per hour.
    pub fn from_mph(value: f64) -> Self {
        Self::new(value, VelocityUnit::MilesPerHour)
    }

    /// Value in metres per second.
    pub fn as_mps(&self) -> f64 {
        self.mps
    }

    /// Value in kilometres per hour.
    pub fn as_kmh(&self) -> f64 {
        self.in_unit(VelocityUnit::KilometersPerHour)
    }

    /// Value in miles per hour.
    pub fn as_mph(&self) -> f64 {
        self.in_unit(VelocityUnit::MilesPerHour)
    }

    /// Value expressed in `unit`.
    pub fn in_unit(&self, unit: VelocityUnit) -> f64 {
        self.mps / unit.mps_factor()
    }
}

impl std::fmt::Display for Velocity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} m/s", self.mps)
    }
}

impl FromStr for Velocity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let split = numeric_prefix_len(trimmed);
        if split == 0 {
            return Err(ValidationError::InvalidVelocity {
                value: s.to_string(),
                reason: "no leading numeric value".into(),
            });
        }

        let (number, rest) = trimmed.split_at(split);
        let value: f64 = number.parse().map_err(|_| ValidationError::InvalidVelocity {
            value: s.to_string(),
            reason: format!("malformed number {number:?}"),
        })?;
        if value.is_sign_negative() {
            return Err(ValidationError::InvalidVelocity {
                value: s.to_string(),
                reason: "velocity must not be negative".into(),
            });
        }

        let unit_str = rest.trim();
        let unit = if unit_str.is_empty() {
            VelocityUnit::KilometersPerHour
        } else {
            unit_str
                .parse::<VelocityUnit>()
                .map_err(|_| ValidationError::InvalidVelocity {
                    value: s.to_string(),
                    reason: format!("unknown velocity unit {unit_str:?}"),
                })?
        };

        Ok(Self::new(value, unit))
    }
}

/// Length in bytes of the leading `[+-]?digits[.digits]` run of `s`, or 0
/// if `s` does not start with a number.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        0
    } else {
        end
    }
}
