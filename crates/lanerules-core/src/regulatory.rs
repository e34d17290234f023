//! # Regulatory Elements
//!
//! The capability interface the rules engine needs from the map model.
//! A regulatory element is one rule-bearing object attached to a map
//! element (a speed-limit sign, a traffic light, a right-of-way marking).
//!
//! The engine only ever asks two things of an element: what [kind] it is
//! and what type code it carries. Map crates implement
//! [`RegulatoryElement`] for their own types; [`RegulatoryAnnotation`] is
//! a plain owned implementation used for file input and tests.
//!
//! [kind]: RegulatoryElement::kind

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Map element identifier.
pub type ElementId = i64;

/// Discriminator for regulatory elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegulatoryElementKind {
    /// Posted speed limit.
    SpeedLimit,
    /// Any other traffic sign.
    TrafficSign,
    /// Signal-controlled junction.
    TrafficLight,
    /// Priority rule between lanes.
    RightOfWay,
    /// All-way stop junction.
    AllWayStop,
}

impl RegulatoryElementKind {
    /// Returns the snake_case identifier for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SpeedLimit => "speed_limit",
            Self::TrafficSign => "traffic_sign",
            Self::TrafficLight => "traffic_light",
            Self::RightOfWay => "right_of_way",
            Self::AllWayStop => "all_way_stop",
        }
    }
}

impl std::fmt::Display for RegulatoryElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only view of a regulatory element.
///
/// Implementations are owned by the map model. The rules engine borrows
/// them for the duration of a single query and never retains them.
pub trait RegulatoryElement: Send + Sync + std::fmt::Debug {
    /// Identifier of the element in its map.
    fn id(&self) -> ElementId;

    /// What kind of rule this element represents.
    fn kind(&self) -> RegulatoryElementKind;

    /// Jurisdiction-specific type code (e.g. a sign catalogue code such as
    /// `"us-r2-30"`, or a literal such as `"30mph"`).
    fn type_code(&self) -> &str;

    /// Whether this element is a speed limit.
    fn is_speed_limit(&self) -> bool {
        self.kind() == RegulatoryElementKind::SpeedLimit
    }
}

/// Shared handle to a regulatory element.
pub type RegulatoryElementPtr = Arc<dyn RegulatoryElement>;

/// An owned regulatory element with explicit fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegulatoryAnnotation {
    /// Element identifier.
    pub id: ElementId,
    /// Element kind.
    pub kind: RegulatoryElementKind,
    /// Type code, interpreted by the jurisdiction's rules.
    pub type_code: String,
}

impl RegulatoryAnnotation {
    /// Create an annotation of any kind.
    pub fn new(id: ElementId, kind: RegulatoryElementKind, type_code: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            type_code: type_code.into(),
        }
    }

    /// Create a speed-limit annotation.
    pub fn speed_limit(id: ElementId, type_code: impl Into<String>) -> Self {
        Self::new(id, RegulatoryElementKind::SpeedLimit, type_code)
    }

    /// Create a generic traffic-sign annotation.
    pub fn traffic_sign(id: ElementId, type_code: impl Into<String>) -> Self {
        Self::new(id, RegulatoryElementKind::TrafficSign, type_code)
    }

    /// Wrap into a shared [`RegulatoryElementPtr`].
    pub fn into_ptr(self) -> RegulatoryElementPtr {
        Arc::new(self)
    }
}

impl RegulatoryElement for RegulatoryAnnotation {
    fn id(&self) -> ElementId {
        self.id
    }

    fn kind(&self) -> RegulatoryElementKind {
        self.kind
    }

    fn type_code(&self) -> &str {
        &self.type_code
    }
}

/// Opaque reference to an area primitive of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AreaRef(pub ElementId);

impl AreaRef {
    /// Identifier of the referenced area.
    pub fn id(&self) -> ElementId {
        self.0
    }
}
