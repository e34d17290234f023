//! # Speed Limit Decisions & Country Profiles
//!
//! [`SpeedLimitInformation`] is the value every speed query produces.
//! [`CountrySpeedLimits`] is the per-jurisdiction table of default limits
//! by road category, used by generic resolution logic when a map element
//! carries no posted limit.

use serde::{Deserialize, Serialize};

use lanerules_core::Velocity;

/// A speed limit together with its legal weight.
///
/// `is_mandatory == true` means the limit is legally binding (posted or
/// fixed by law). `false` marks an advisory value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedLimitInformation {
    /// The limit, in canonical units.
    pub speed_limit: Velocity,
    /// Whether the limit is legally binding.
    pub is_mandatory: bool,
}

impl SpeedLimitInformation {
    /// A binding limit.
    pub fn mandatory(speed_limit: Velocity) -> Self {
        Self {
            speed_limit,
            is_mandatory: true,
        }
    }

    /// An advisory limit.
    pub fn advisory(speed_limit: Velocity) -> Self {
        Self {
            speed_limit,
            is_mandatory: false,
        }
    }
}

impl std::fmt::Display for SpeedLimitInformation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let weight = if self.is_mandatory { "mandatory" } else { "advisory" };
        write!(f, "{} ({weight})", self.speed_limit)
    }
}

/// Road categories covered by a [`CountrySpeedLimits`] profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadCategory {
    /// Vehicle traffic on roads inside built-up areas.
    VehicleUrbanRoad,
    /// Vehicle traffic on roads outside built-up areas.
    VehicleNonurbanRoad,
    /// Vehicle traffic on highways inside built-up areas.
    VehicleUrbanHighway,
    /// Vehicle traffic on highways outside built-up areas.
    VehicleNonurbanHighway,
    /// Shared residential zones where vehicles yield to playing children.
    PlayStreet,
    /// Pedestrian ways.
    Pedestrian,
    /// Bicycle ways.
    Bicycle,
}

impl RoadCategory {
    /// All categories in profile order.
    pub fn all() -> &'static [RoadCategory] {
        &[
            Self::VehicleUrbanRoad,
            Self::VehicleNonurbanRoad,
            Self::VehicleUrbanHighway,
            Self::VehicleNonurbanHighway,
            Self::PlayStreet,
            Self::Pedestrian,
            Self::Bicycle,
        ]
    }
}

/// Default speed limits of a jurisdiction, one per [`RoadCategory`].
///
/// Built once per jurisdiction and shared read-only by every rules
/// instance of that jurisdiction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountrySpeedLimits {
    /// Roads inside built-up areas.
    pub vehicle_urban_road: SpeedLimitInformation,
    /// Roads outside built-up areas.
    pub vehicle_nonurban_road: SpeedLimitInformation,
    /// Highways inside built-up areas.
    pub vehicle_urban_highway: SpeedLimitInformation,
    /// Highways outside built-up areas.
    pub vehicle_nonurban_highway: SpeedLimitInformation,
    /// Play streets.
    pub play_street: SpeedLimitInformation,
    /// Pedestrian ways.
    pub pedestrian: SpeedLimitInformation,
    /// Bicycle ways.
    pub bicycle: SpeedLimitInformation,
}

impl CountrySpeedLimits {
    /// The default limit for `category`.
    pub fn get(&self, category: RoadCategory) -> &SpeedLimitInformation {
        match category {
            RoadCategory::VehicleUrbanRoad => &self.vehicle_urban_road,
            RoadCategory::VehicleNonurbanRoad => &self.vehicle_nonurban_road,
            RoadCategory::VehicleUrbanHighway => &self.vehicle_urban_highway,
            RoadCategory::VehicleNonurbanHighway => &self.vehicle_nonurban_highway,
            RoadCategory::PlayStreet => &self.play_street,
            RoadCategory::Pedestrian => &self.pedestrian,
            RoadCategory::Bicycle => &self.bicycle,
        }
    }

    /// `(category, limit)` pairs in profile order.
    pub fn iter(&self) -> impl Iterator<Item = (RoadCategory, &SpeedLimitInformation)> + '_ {
        RoadCategory::all().iter().map(move |&c| (c, self.get(c)))
    }
}
