//! Building construction data model
//!
//! Global invariants enforced:
//! - All numeric area/geometry fields are nullable; `None` means "not
//!   provided" and is distinct from zero
//! - A default Building is the all-empty record the form layer starts from
//!   (steel frame, unknown compartmentation, empty breakdowns)
//! - The scorer treats a Building as read-only; only the form layer mutates it

use serde::{Deserialize, Serialize};

/// One entry in a percentage breakdown of a construction element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialShare {
    /// Material label as selected on the form (e.g. "Heavy Non-Combustible")
    pub material: String,
    /// Share of the element made of this material, 0-100
    pub percent: f64,
}

impl MaterialShare {
    pub fn new(material: impl Into<String>, percent: f64) -> Self {
        MaterialShare {
            material: material.into(),
            percent,
        }
    }
}

/// Roof construction: measured footprint plus a material breakdown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Roof {
    pub area_sqm: Option<f64>,
    pub breakdown: Vec<MaterialShare>,
    /// Cached sum of breakdown percentages; 100 when the breakdown is complete
    pub total_percent: f64,
}

/// Wall construction: breakdown only (walls are not independently measured)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Walls {
    pub breakdown: Vec<MaterialShare>,
    pub total_percent: f64,
}

/// Upper floors / mezzanine construction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mezzanine {
    pub area_sqm: Option<f64>,
    pub breakdown: Vec<MaterialShare>,
    pub total_percent: f64,
}

/// Overall building geometry; descriptive only, never read by the scorer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geometry {
    pub floors: Option<f64>,
    pub basements: Option<f64>,
    pub height_m: Option<f64>,
}

/// Combustible external cladding flag with free-text detail
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cladding {
    pub present: bool,
    pub details: String,
}

/// Fire compartmentation standard of the building
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compartmentation {
    Low,
    Medium,
    High,
    #[default]
    Unknown,
}

impl Compartmentation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Compartmentation::Low => "low",
            Compartmentation::Medium => "medium",
            Compartmentation::High => "high",
            Compartmentation::Unknown => "unknown",
        }
    }
}

/// Structural frame type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameType {
    #[default]
    Steel,
    ProtectedSteel,
    Timber,
    ReinforcedConcrete,
    Masonry,
    Other,
}

impl FrameType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameType::Steel => "steel",
            FrameType::ProtectedSteel => "protected_steel",
            FrameType::Timber => "timber",
            FrameType::ReinforcedConcrete => "reinforced_concrete",
            FrameType::Masonry => "masonry",
            FrameType::Other => "other",
        }
    }
}

/// One building as entered on the construction assessment form
///
/// All fields default so a partially filled JSON document deserializes into
/// the documented all-empty record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Building {
    /// Display label; not consumed by the scorer
    pub name: String,
    pub roof: Roof,
    pub walls: Walls,
    pub upper_floors_mezzanine: Mezzanine,
    pub geometry: Geometry,
    pub combustible_cladding: Cladding,
    pub compartmentation: Compartmentation,
    pub frame_type: FrameType,
    /// Free text; not consumed by the scorer
    pub notes: String,
}
