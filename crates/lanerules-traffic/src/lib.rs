//! # lanerules-traffic: Traffic Rules Engine
//!
//! Answers, for a jurisdiction and a participant class, which rules govern
//! movement through a map element:
//!
//! - **Contract** (`rules.rs`): [`TrafficRules`], implemented once per
//!   (jurisdiction, participant) pair.
//! - **Registry** (`registry.rs`): immutable table from
//!   `(JurisdictionId, Participant)` to a rules factory.
//! - **Sign tables** (`sign_table.rs`): symbolic speed sign codes to
//!   velocities, with literal fallback.
//! - **Resolution** (`resolution.rs`): first speed-limit element wins.
//! - **Profiles** (`speed.rs`): per-jurisdiction default limits.
//! - **Jurisdictions** (`jurisdictions/`): built-in rule sets.
//!
//! ## Startup
//!
//! ```
//! use lanerules_core::{Locations, Participant, RegulatoryAnnotation, Velocity};
//!
//! let registry = lanerules_traffic::init_registry().unwrap();
//! let rules = registry
//!     .lookup(&Locations::united_states(), Participant::Vehicle)
//!     .unwrap();
//! let elements = vec![RegulatoryAnnotation::speed_limit(1, "us-r2-30").into_ptr()];
//! let limit = rules.speed_limit(&elements).unwrap().unwrap();
//! assert_eq!(limit.speed_limit, Velocity::from_mph(30.0));
//! ```
//!
//! `init_registry()` is called once by the process entry point; the
//! returned registry is passed to whoever needs rules. There is no global
//! registration state.

pub mod config;
pub mod jurisdictions;
pub mod registry;
pub mod resolution;
pub mod rules;
pub mod sign_table;
pub mod speed;

pub use config::RulesConfig;
pub use registry::{RulesFactory, RulesKey, TrafficRulesRegistry, TrafficRulesRegistryBuilder};
pub use resolution::resolve_speed_limit;
pub use rules::TrafficRules;
pub use sign_table::{SignDecoding, SpeedSignTable};
pub use speed::{CountrySpeedLimits, RoadCategory, SpeedLimitInformation};

use lanerules_core::ConfigurationError;

/// Build the registry with every built-in jurisdiction.
///
/// # Errors
///
/// [`ConfigurationError::DuplicateRegistration`] if two built-in
/// jurisdictions claim the same key.
pub fn init_registry() -> Result<TrafficRulesRegistry, ConfigurationError> {
    let mut builder = TrafficRulesRegistry::builder();
    jurisdictions::register_all(&mut builder)?;
    let registry = builder.build();
    tracing::debug!(entries = registry.len(), "traffic rules registry initialized");
    Ok(registry)
}
