//! # United States
//!
//! Traffic rules for the `"us"` jurisdiction. Speed signs follow the
//! MUTCD R2 ("Speed Limit") series and all constants are in miles per
//! hour.
//!
//! | Participant | Areas | Speed limits |
//! |-------------|-------|--------------|
//! | Vehicle | never passable | from R2 signs or literals |
//! | Pedestrian | passable | none |
//! | Bicycle | not passable | none |

use std::sync::OnceLock;

use lanerules_core::{
    AreaRef, ConfigurationError, InterpretationError, JurisdictionId, Locations, Participant,
    RegulatoryElementPtr, Velocity, VelocityUnit,
};

use crate::registry::TrafficRulesRegistryBuilder;
use crate::resolution::resolve_speed_limit;
use crate::rules::TrafficRules;
use crate::sign_table::SpeedSignTable;
use crate::speed::{CountrySpeedLimits, SpeedLimitInformation};

/// R2 sign codes and their limits in mph.
///
/// `us-r2` without a suffix is the generic sign and reads 45 mph.
/// `us-r2-26` reads 25 mph.
pub const US_SPEED_SIGNS: &[(&str, f64)] = &[
    ("us-r2", 45.0),
    ("us-r2-5", 5.0),
    ("us-r2-10", 10.0),
    ("us-r2-15", 15.0),
    ("us-r2-20", 20.0),
    ("us-r2-26", 25.0),
    ("us-r2-30", 30.0),
    ("us-r2-35", 35.0),
    ("us-r2-40", 40.0),
    ("us-r2-45", 45.0),
    ("us-r2-50", 50.0),
    ("us-r2-55", 55.0),
    ("us-r2-60", 60.0),
    ("us-r2-65", 65.0),
    ("us-r2-70", 70.0),
    ("us-r2-75", 75.0),
    ("us-r2-80", 80.0),
];

/// Build the US default speed profile.
pub fn us_speed_limits() -> CountrySpeedLimits {
    let mandatory = |mph| SpeedLimitInformation::mandatory(Velocity::from_mph(mph));
    let advisory = |mph| SpeedLimitInformation::advisory(Velocity::from_mph(mph));
    CountrySpeedLimits {
        vehicle_urban_road: mandatory(25.0),
        vehicle_nonurban_road: mandatory(55.0),
        vehicle_urban_highway: advisory(55.0),
        vehicle_nonurban_highway: advisory(70.0),
        play_street: mandatory(4.0),
        pedestrian: mandatory(3.0),
        bicycle: mandatory(12.0),
    }
}

/// Process-wide US profile shared by every US rules instance.
pub fn shared_us_speed_limits() -> &'static CountrySpeedLimits {
    static LIMITS: OnceLock<CountrySpeedLimits> = OnceLock::new();
    LIMITS.get_or_init(us_speed_limits)
}

/// Process-wide US speed sign table.
pub fn us_speed_sign_table() -> &'static SpeedSignTable {
    static TABLE: OnceLock<SpeedSignTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        SpeedSignTable::from_entries(VelocityUnit::MilesPerHour, US_SPEED_SIGNS.iter().copied())
    })
}

/// Register the US vehicle, pedestrian and bicycle rules.
///
/// On error, entries registered before the failing one stay in `builder`.
pub fn register(builder: &mut TrafficRulesRegistryBuilder) -> Result<(), ConfigurationError> {
    builder
        .register(Locations::united_states(), Participant::Vehicle, UsVehicle::new)?
        .register(Locations::united_states(), Participant::Pedestrian, UsPedestrian::new)?
        .register(Locations::united_states(), Participant::Bicycle, UsBicycle::new)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Vehicle
// ---------------------------------------------------------------------------

/// US rules for motor vehicles in normal driving mode.
#[derive(Debug, Clone)]
pub struct UsVehicle {
    location: JurisdictionId,
}

impl UsVehicle {
    /// Create the rules.
    pub fn new() -> Self {
        Self {
            location: Locations::united_states(),
        }
    }
}

impl Default for UsVehicle {
    fn default() -> Self {
        Self::new()
    }
}

impl TrafficRules for UsVehicle {
    fn location(&self) -> &JurisdictionId {
        &self.location
    }

    fn participant(&self) -> Participant {
        Participant::Vehicle
    }

    // Vehicles in normal driving mode stay on lanelets.
    fn can_pass_area(&self, _area: &AreaRef) -> bool {
        false
    }

    fn can_pass_regulatory_elements(&self, _elements: &[RegulatoryElementPtr]) -> Option<bool> {
        None
    }

    fn speed_limit(
        &self,
        elements: &[RegulatoryElementPtr],
    ) -> Result<Option<SpeedLimitInformation>, InterpretationError> {
        resolve_speed_limit(us_speed_sign_table(), elements)
    }

    fn country_speed_limits(&self) -> &CountrySpeedLimits {
        shared_us_speed_limits()
    }
}

// ---------------------------------------------------------------------------
// Pedestrian
// ---------------------------------------------------------------------------

/// US rules for pedestrians. Pedestrians have no posted speed limit.
#[derive(Debug, Clone)]
pub struct UsPedestrian {
    location: JurisdictionId,
}

impl UsPedestrian {
    /// Create the rules.
    pub fn new() -> Self {
        Self {
            location: Locations::united_states(),
        }
    }
}

impl Default for UsPedestrian {
    fn default() -> Self {
        Self::new()
    }
}

impl TrafficRules for UsPedestrian {
    fn location(&self) -> &JurisdictionId {
        &self.location
    }

    fn participant(&self) -> Participant {
        Participant::Pedestrian
    }

    fn can_pass_area(&self, _area: &AreaRef) -> bool {
        true
    }

    fn can_pass_regulatory_elements(&self, _elements: &[RegulatoryElementPtr]) -> Option<bool> {
        None
    }

    fn speed_limit(
        &self,
        _elements: &[RegulatoryElementPtr],
    ) -> Result<Option<SpeedLimitInformation>, InterpretationError> {
        Ok(None)
    }

    fn country_speed_limits(&self) -> &CountrySpeedLimits {
        shared_us_speed_limits()
    }
}

// ---------------------------------------------------------------------------
// Bicycle
// ---------------------------------------------------------------------------

/// US rules for cyclists. Posted limits are not evaluated for bicycles.
#[derive(Debug, Clone)]
pub struct UsBicycle {
    location: JurisdictionId,
}

impl UsBicycle {
    /// Create the rules.
    pub fn new() -> Self {
        Self {
            location: Locations::united_states(),
        }
    }
}

impl Default for UsBicycle {
    fn default() -> Self {
        Self::new()
    }
}

impl TrafficRules for UsBicycle {
    fn location(&self) -> &JurisdictionId {
        &self.location
    }

    fn participant(&self) -> Participant {
        Participant::Bicycle
    }

    fn can_pass_area(&self, _area: &AreaRef) -> bool {
        false
    }

    fn can_pass_regulatory_elements(&self, _elements: &[RegulatoryElementPtr]) -> Option<bool> {
        None
    }

    fn speed_limit(
        &self,
        _elements: &[RegulatoryElementPtr],
    ) -> Result<Option<SpeedLimitInformation>, InterpretationError> {
        Ok(None)
    }

    fn country_speed_limits(&self) -> &CountrySpeedLimits {
        shared_us_speed_limits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lanerules_core::RegulatoryAnnotation;

    fn signs(codes: &[&str]) -> Vec<RegulatoryElementPtr> {
        codes
            .iter()
            .enumerate()
            .map(|(i, code)| RegulatoryAnnotation::speed_limit(i as i64, *code).into_ptr())
            .collect()
    }

    #[test]
    fn every_table_code_decodes_mandatory() {
        let rules = UsVehicle::new();
        for &(code, mph) in US_SPEED_SIGNS {
            let info = rules.speed_limit(&signs(&[code])).unwrap().unwrap();
            assert_eq!(
                info,
                SpeedLimitInformation::mandatory(Velocity::from_mph(mph)),
                "code {code}"
            );
        }
    }

    #[test]
    fn generic_r2_is_45_mph() {
        let info = UsVehicle::new().speed_limit(&signs(&["us-r2"])).unwrap().unwrap();
        assert_eq!(info.speed_limit, Velocity::from_mph(45.0));
        assert!(info.is_mandatory);
    }

    #[test]
    fn r2_26_reads_25_mph() {
        let info = UsVehicle::new().speed_limit(&signs(&["us-r2-26"])).unwrap().unwrap();
        assert_eq!(info.speed_limit, Velocity::from_mph(25.0));
    }

    #[test]
    fn literal_code_decodes() {
        let info = UsVehicle::new().speed_limit(&signs(&["5mph"])).unwrap().unwrap();
        assert_eq!(info, SpeedLimitInformation::mandatory(Velocity::from_mph(5.0)));
    }

    #[test]
    fn unknown_code_names_the_code() {
        let err = UsVehicle::new()
            .speed_limit(&signs(&["bogus-code"]))
            .unwrap_err();
        assert!(err.to_string().contains("bogus-code"));
    }

    #[test]
    fn table_is_case_sensitive() {
        assert!(UsVehicle::new().speed_limit(&signs(&["US-R2-30"])).is_err());
    }

    #[test]
    fn vehicle_never_passes_areas() {
        let rules = UsVehicle::new();
        for id in [-1, 0, 1, i64::MAX] {
            assert!(!rules.can_pass_area(&AreaRef(id)));
        }
    }

    #[test]
    fn no_passability_opinion() {
        let elements = signs(&["us-r2-30"]);
        assert_eq!(UsVehicle::new().can_pass_regulatory_elements(&elements), None);
        assert_eq!(UsPedestrian::new().can_pass_regulatory_elements(&elements), None);
        assert_eq!(UsBicycle::new().can_pass_regulatory_elements(&elements), None);
    }

    #[test]
    fn non_vehicles_have_no_speed_limit() {
        let elements = signs(&["us-r2-30", "bogus-code"]);
        assert_eq!(UsPedestrian::new().speed_limit(&elements).unwrap(), None);
        assert_eq!(UsBicycle::new().speed_limit(&elements).unwrap(), None);
        let bogus = signs(&["bogus-code"]);
        assert_eq!(UsPedestrian::new().speed_limit(&bogus).unwrap(), None);
        assert_eq!(UsBicycle::new().speed_limit(&bogus).unwrap(), None);
    }

    #[test]
    fn default_profile_values() {
        let limits = us_speed_limits();
        assert_eq!(
            limits.vehicle_urban_road,
            SpeedLimitInformation::mandatory(Velocity::from_mph(25.0))
        );
        assert_eq!(
            limits.vehicle_nonurban_road,
            SpeedLimitInformation::mandatory(Velocity::from_mph(55.0))
        );
        assert_eq!(
            limits.vehicle_urban_highway,
            SpeedLimitInformation::advisory(Velocity::from_mph(55.0))
        );
        assert_eq!(
            limits.vehicle_nonurban_highway,
            SpeedLimitInformation::advisory(Velocity::from_mph(70.0))
        );
        assert_eq!(limits.play_street.speed_limit, Velocity::from_mph(4.0));
        assert_eq!(limits.pedestrian.speed_limit, Velocity::from_mph(3.0));
        assert_eq!(limits.bicycle.speed_limit, Velocity::from_mph(12.0));
    }

    #[test]
    fn profile_is_shared_across_participants() {
        let a = UsVehicle::new();
        let b = UsPedestrian::new();
        let c = UsBicycle::new();
        assert!(std::ptr::eq(a.country_speed_limits(), b.country_speed_limits()));
        assert!(std::ptr::eq(b.country_speed_limits(), c.country_speed_limits()));
        assert_eq!(a.country_speed_limits(), &us_speed_limits());
    }

    #[test]
    fn sign_table_has_every_code() {
        let table = us_speed_sign_table();
        assert_eq!(table.len(), US_SPEED_SIGNS.len());
        for &(code, mph) in US_SPEED_SIGNS {
            assert_eq!(table.lookup(code), Some(Velocity::from_mph(mph)));
        }
    }

    #[test]
    fn register_installs_three_participants() {
        let mut builder = TrafficRulesRegistryBuilder::new();
        register(&mut builder).unwrap();
        let registry = builder.build();
        for participant in Participant::all() {
            let rules = registry
                .lookup(&Locations::united_states(), *participant)
                .unwrap();
            assert_eq!(rules.participant(), *participant);
        }
    }

    #[test]
    fn register_twice_fails() {
        let mut builder = TrafficRulesRegistryBuilder::new();
        register(&mut builder).unwrap();
        assert!(matches!(
            register(&mut builder),
            Err(ConfigurationError::DuplicateRegistration { .. })
        ));
    }

    #[test]
    fn failed_register_keeps_earlier_entries() {
        let mut builder = TrafficRulesRegistryBuilder::new();
        builder
            .register(Locations::united_states(), Participant::Bicycle, UsBicycle::new)
            .unwrap();
        assert!(matches!(
            register(&mut builder),
            Err(ConfigurationError::DuplicateRegistration {
                participant: Participant::Bicycle,
                ..
            })
        ));
        let registry = builder.build();
        assert_eq!(registry.len(), 3);
        assert!(registry.contains(&Locations::united_states(), Participant::Vehicle));
        assert!(registry.contains(&Locations::united_states(), Participant::Pedestrian));
    }
}
