//! # US Traffic Rules, End to End
//!
//! Exercises the registry built by `init_registry()` the way a consumer
//! would: look up rules by (jurisdiction, participant), then query them with
//! the regulatory elements of a map element.

use std::sync::Arc;

use lanerules_core::{
    AreaRef, ConfigurationError, InterpretationError, JurisdictionId, Locations, Participant,
    RegulatoryAnnotation, RegulatoryElementKind, RegulatoryElementPtr, Velocity,
};
use lanerules_traffic::jurisdictions::us::US_SPEED_SIGNS;
use lanerules_traffic::{init_registry, RulesConfig, SpeedLimitInformation, TrafficRules};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn us(participant: Participant) -> Arc<dyn TrafficRules> {
    init_tracing();
    init_registry()
        .expect("built-in registrations are unique")
        .lookup(&Locations::united_states(), participant)
        .expect("US rules are registered")
}

fn speed_sign(id: i64, code: &str) -> RegulatoryElementPtr {
    RegulatoryAnnotation::speed_limit(id, code).into_ptr()
}

#[test]
fn registry_contains_all_us_participants() {
    let registry = init_registry().unwrap();
    assert_eq!(registry.len(), 3);
    for participant in Participant::all() {
        assert!(registry.contains(&Locations::united_states(), *participant));
    }
}

#[test]
fn unsupported_jurisdiction_is_configuration_error() {
    let registry = init_registry().unwrap();
    let err = registry
        .lookup(&Locations::germany(), Participant::Vehicle)
        .unwrap_err();
    assert!(matches!(err, ConfigurationError::UnsupportedCombination { .. }));
    let msg = err.to_string();
    assert!(msg.contains("de"));
    assert!(msg.contains("vehicle"));
}

#[test]
fn lookup_via_config() {
    let registry = init_registry().unwrap();
    let config = RulesConfig::from_yaml_str("location: us\nparticipant: bicycle\n").unwrap();
    let rules = registry.create(&config).unwrap();
    assert_eq!(rules.participant(), Participant::Bicycle);
    assert_eq!(rules.location().as_str(), "us");
}

#[test]
fn vehicle_can_never_pass_areas() {
    let rules = us(Participant::Vehicle);
    assert!(!rules.can_pass_area(&AreaRef(1)));
    assert!(!rules.can_pass_area(&AreaRef(-99)));
}

#[test]
fn every_symbolic_code_resolves() {
    let rules = us(Participant::Vehicle);
    for &(code, mph) in US_SPEED_SIGNS {
        let info = rules.speed_limit(&[speed_sign(1, code)]).unwrap();
        assert_eq!(
            info,
            Some(SpeedLimitInformation::mandatory(Velocity::from_mph(mph))),
            "code {code}"
        );
    }
}

#[test]
fn base_sign_is_45_mph() {
    let info = us(Participant::Vehicle)
        .speed_limit(&[speed_sign(1, "us-r2")])
        .unwrap()
        .unwrap();
    assert_eq!(info.speed_limit, Velocity::from_mph(45.0));
    assert!(info.is_mandatory);
}

#[test]
fn literal_fallback_decodes() {
    let rules = us(Participant::Vehicle);
    let info = rules.speed_limit(&[speed_sign(1, "5mph")]).unwrap().unwrap();
    assert_eq!(info, SpeedLimitInformation::mandatory(Velocity::from_mph(5.0)));

    let info = rules.speed_limit(&[speed_sign(1, "40 km/h")]).unwrap().unwrap();
    assert_eq!(info.speed_limit, Velocity::from_kmh(40.0));
}

#[test]
fn unparseable_code_is_interpretation_error() {
    let err = us(Participant::Vehicle)
        .speed_limit(&[speed_sign(1, "bogus-code")])
        .unwrap_err();
    assert_eq!(
        err,
        InterpretationError::UnrecognizedSpeedCode {
            code: "bogus-code".into()
        }
    );
    assert!(err.to_string().contains("bogus-code"));
}

#[test]
fn negative_literal_is_interpretation_error() {
    for code in ["-5mph", "-0 km/h"] {
        let err = us(Participant::Vehicle)
            .speed_limit(&[speed_sign(1, code)])
            .unwrap_err();
        assert_eq!(
            err,
            InterpretationError::UnrecognizedSpeedCode { code: code.into() }
        );
        assert!(err.to_string().contains(code));
    }
}

#[test]
fn second_element_used_when_first_is_not_a_speed_limit() {
    let elements = vec![
        RegulatoryAnnotation::traffic_sign(1, "us-r2-80").into_ptr(),
        speed_sign(2, "us-r2-35"),
    ];
    let info = us(Participant::Vehicle).speed_limit(&elements).unwrap().unwrap();
    assert_eq!(info.speed_limit, Velocity::from_mph(35.0));
}

#[test]
fn first_speed_limit_wins_over_second() {
    let elements = vec![speed_sign(1, "us-r2-20"), speed_sign(2, "us-r2-70")];
    let info = us(Participant::Vehicle).speed_limit(&elements).unwrap().unwrap();
    assert_eq!(info.speed_limit, Velocity::from_mph(20.0));
}

#[test]
fn no_speed_limit_element_is_absent_not_default() {
    let elements = vec![
        RegulatoryAnnotation::new(1, RegulatoryElementKind::TrafficLight, "us-r2-30").into_ptr(),
        RegulatoryAnnotation::new(2, RegulatoryElementKind::AllWayStop, "").into_ptr(),
    ];
    let rules = us(Participant::Vehicle);
    assert_eq!(rules.speed_limit(&elements).unwrap(), None);
    assert_eq!(rules.speed_limit(&[]).unwrap(), None);
}

#[test]
fn pedestrians_and_cyclists_have_no_speed_limit() {
    let elements = vec![speed_sign(1, "us-r2-30"), speed_sign(2, "bogus-code")];
    for participant in [Participant::Pedestrian, Participant::Bicycle] {
        assert_eq!(us(participant).speed_limit(&elements).unwrap(), None);
    }
}

#[test]
fn no_rules_give_a_passability_opinion() {
    let elements = vec![speed_sign(1, "us-r2-30")];
    for participant in Participant::all() {
        assert_eq!(us(*participant).can_pass_regulatory_elements(&elements), None);
    }
}

#[test]
fn country_limits_exposed_for_every_participant() {
    for participant in Participant::all() {
        let limits = us(*participant).country_speed_limits().clone();
        assert_eq!(limits.vehicle_urban_road.speed_limit, Velocity::from_mph(25.0));
        assert!(!limits.vehicle_nonurban_highway.is_mandatory);
    }
}

#[test]
fn concurrent_resolution_shares_registry() {
    let registry = Arc::new(init_registry().unwrap());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                let rules = registry
                    .lookup(&JurisdictionId::new("us").unwrap(), Participant::Vehicle)
                    .unwrap();
                let (code, mph) = US_SPEED_SIGNS[i % US_SPEED_SIGNS.len()];
                let info = rules.speed_limit(&[speed_sign(i as i64, code)]).unwrap().unwrap();
                assert_eq!(info.speed_limit, Velocity::from_mph(mph));
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Codes that are neither catalogue entries nor numeric literals are
        /// always reported, and the error names them.
        #[test]
        fn non_numeric_codes_are_rejected(code in "[a-z][a-z0-9-]{0,20}") {
            prop_assume!(!US_SPEED_SIGNS.iter().any(|(c, _)| *c == code));
            let rules = us(Participant::Vehicle);
            let err = rules.speed_limit(&[speed_sign(1, &code)]).unwrap_err();
            prop_assert!(err.to_string().contains(&code));
        }

        /// Integer mph literals round-trip through resolution.
        #[test]
        fn mph_literals_resolve(n in 1u32..200) {
            let rules = us(Participant::Vehicle);
            let info = rules.speed_limit(&[speed_sign(1, &format!("{n}mph"))]).unwrap().unwrap();
            prop_assert_eq!(info.speed_limit, Velocity::from_mph(f64::from(n)));
            prop_assert!(info.is_mandatory);
        }
    }
}
