//! # lanerules-core: Foundational Types
//!
//! Defines the primitives shared by every lanerules crate: who a rule is
//! for ([`Participant`]), where it applies ([`JurisdictionId`]), the speed
//! values rules produce ([`Velocity`]), the map-side capability the engine
//! consumes ([`RegulatoryElement`]), and the error hierarchy.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `lanerules-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod jurisdiction;
pub mod participant;
pub mod regulatory;
pub mod units;

// Re-export primary types for ergonomic imports.
pub use error::{ConfigurationError, InterpretationError, LaneRulesError, ValidationError};
pub use jurisdiction::{JurisdictionId, Locations};
pub use participant::Participant;
pub use regulatory::{
    AreaRef, ElementId, RegulatoryAnnotation, RegulatoryElement, RegulatoryElementKind,
    RegulatoryElementPtr,
};
pub use units::{Velocity, VelocityUnit};
