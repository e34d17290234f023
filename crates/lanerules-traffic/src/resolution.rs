//! # Speed Limit Resolution
//!
//! Turns the regulatory elements of a map element into a posted speed
//! limit, using a jurisdiction's [`SpeedSignTable`].
//!
//! ## Algorithm
//!
//! 1. The **first** speed-limit element in sequence order is used. Further
//!    speed-limit elements on the same map element are ignored; conflicting
//!    signs are not reconciled.
//! 2. No speed-limit element → `Ok(None)`. Defaults are not substituted.
//! 3. The element's type code is decoded via [`SpeedSignTable::decode`].
//!    An unrecognized code is an [`InterpretationError`].
//! 4. A posted limit is always mandatory.

use lanerules_core::{InterpretationError, RegulatoryElementPtr};

use crate::sign_table::{SignDecoding, SpeedSignTable};
use crate::speed::SpeedLimitInformation;

/// Resolve the posted speed limit from `elements`.
///
/// # Errors
///
/// [`InterpretationError::UnrecognizedSpeedCode`] if the selected element's
/// type code is neither in `table` nor a velocity literal.
pub fn resolve_speed_limit(
    table: &SpeedSignTable,
    elements: &[RegulatoryElementPtr],
) -> Result<Option<SpeedLimitInformation>, InterpretationError> {
    let mut speed_limits = elements.iter().filter(|e| e.is_speed_limit());

    let Some(element) = speed_limits.next() else {
        return Ok(None);
    };

    let ignored = speed_limits.count();
    if ignored > 0 {
        tracing::debug!(
            element_id = element.id(),
            ignored,
            "multiple speed limits on one map element; using the first"
        );
    }

    let code = element.type_code();
    let decoding = table.decode(code);
    match decoding {
        SignDecoding::Table(_) => {
            tracing::trace!(element_id = element.id(), code, "speed limit from sign table");
        }
        SignDecoding::Literal(_) => {
            tracing::debug!(element_id = element.id(), code, "speed limit parsed from literal");
        }
        SignDecoding::Unrecognized => {
            tracing::warn!(element_id = element.id(), code, "undecodable speed limit code");
        }
    }

    let velocity = decoding.into_velocity(code)?;
    Ok(Some(SpeedLimitInformation::mandatory(velocity)))
}
