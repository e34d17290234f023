//! # Traffic Rules Contract
//!
//! [`TrafficRules`] is the capability every (jurisdiction, participant)
//! implementation provides. Callers obtain an instance from the
//! [`TrafficRulesRegistry`](crate::registry::TrafficRulesRegistry) and
//! query it with the regulatory elements attached to a map element.
//!
//! ## Absence vs. Failure
//!
//! "No opinion" is `None`. The only hard failure is an
//! [`InterpretationError`] from [`TrafficRules::speed_limit`] when a
//! speed-limit element carries an undecodable code.

use lanerules_core::{
    AreaRef, InterpretationError, JurisdictionId, Participant, RegulatoryElementPtr,
};

use crate::speed::{CountrySpeedLimits, SpeedLimitInformation};

/// Rules of one jurisdiction for one participant class.
///
/// Implementations hold no mutable state; every method is a pure function
/// of its inputs and may be called concurrently.
pub trait TrafficRules: Send + Sync + std::fmt::Debug {
    /// The jurisdiction these rules encode.
    fn location(&self) -> &JurisdictionId;

    /// The participant class these rules apply to.
    fn participant(&self) -> Participant;

    /// Whether the participant may traverse an area primitive.
    fn can_pass_area(&self, area: &AreaRef) -> bool;

    /// Passability decided from regulatory elements alone.
    ///
    /// `None` defers to the generic right-of-way handling of the caller.
    fn can_pass_regulatory_elements(&self, elements: &[RegulatoryElementPtr]) -> Option<bool>;

    /// The speed limit posted by `elements`, if any.
    ///
    /// Returns `Ok(None)` when the participant has no notion of a speed
    /// limit or no speed-limit element is present. Jurisdiction defaults are
    /// never substituted here; use [`TrafficRules::country_speed_limits`].
    ///
    /// # Errors
    ///
    /// [`InterpretationError`] if a speed-limit element's type code can be
    /// decoded neither from the jurisdiction's sign table nor as a literal.
    fn speed_limit(
        &self,
        elements: &[RegulatoryElementPtr],
    ) -> Result<Option<SpeedLimitInformation>, InterpretationError>;

    /// Default speed limits of the jurisdiction.
    fn country_speed_limits(&self) -> &CountrySpeedLimits;
}
