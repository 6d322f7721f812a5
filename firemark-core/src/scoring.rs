//! Construction risk scoring rubric
//!
//! Global invariants enforced:
//! - Total function: never panics, every branch has a defined fallback for
//!   missing or partial data
//! - Deterministic: equal input yields bit-identical output
//! - The input Building is never mutated
//! - Outputs stay within documented ranges: score 0-100, rating 1-5,
//!   combustible percent 0-100

use crate::building::{Building, Compartmentation, FrameType, MaterialShare};
use crate::factors::{combustible_fraction_factor, generic_factor, mezzanine_factor};
use crate::rating::{assign_rating_with_thresholds, RatingThresholds};
use serde::{Deserialize, Serialize};

/// Reference roof footprint used to scale the mezzanine penalty when no roof
/// area has been entered
const FALLBACK_ROOF_AREA_SQM: f64 = 1000.0;

/// Mezzanine penalty scale runs from 0.6 (tiny mezzanine) to 1.2 (mezzanine
/// as large as the roof)
const MEZZ_SCALE_BASE: f64 = 0.6;
const MEZZ_SCALE_RANGE: f64 = 0.6;

/// Walls have no measured area; assume they scale with 60% of the roof footprint
const WALL_AREA_PROXY_RATIO: f64 = 0.6;

/// Combustible cladding is weighted as 10% of the reference footprint
const CLADDING_AREA_RATIO: f64 = 0.1;

/// Combustible fraction assumed for an element with no usable breakdown data
const MISSING_BREAKDOWN_FRACTION: f64 = 0.5;

/// Scorer output: a pure derived value, recomputed on every change to a
/// Building and never trusted from a stored cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CalculatedMetrics {
    /// Bounded construction risk score, 0-100 (higher is better)
    pub construction_score: u32,
    /// Discrete 1-5 rating derived from the score (5 = Excellent)
    pub construction_rating: u8,
    /// Area-weighted estimate of combustible construction, 0-100
    pub combustible_percent: u32,
}

/// Configurable penalty and bonus weights for the scoring rubric
#[derive(Debug, Clone, PartialEq)]
pub struct RubricWeights {
    /// Roof penalty weight when a roof area has been measured
    pub roof_measured: f64,
    /// Roof penalty weight when the roof area is unknown
    pub roof_unmeasured: f64,
    pub walls: f64,
    pub mezzanine: f64,
    pub cladding_penalty: f64,
    pub frame_timber_penalty: f64,
    pub frame_steel_penalty: f64,
    /// Bonus for protected steel, reinforced concrete, or masonry frames
    pub frame_protected_bonus: f64,
    pub compartmentation_high_bonus: f64,
    pub compartmentation_medium_bonus: f64,
    pub compartmentation_low_penalty: f64,
}

impl Default for RubricWeights {
    fn default() -> Self {
        RubricWeights {
            roof_measured: 12.0,
            roof_unmeasured: 8.0,
            walls: 15.0,
            mezzanine: 20.0,
            cladding_penalty: 10.0,
            frame_timber_penalty: 15.0,
            frame_steel_penalty: 8.0,
            frame_protected_bonus: 5.0,
            compartmentation_high_bonus: 10.0,
            compartmentation_medium_bonus: 5.0,
            compartmentation_low_penalty: 5.0,
        }
    }
}

/// Score one building with default weights and thresholds
pub fn score(building: &Building) -> CalculatedMetrics {
    score_with_config(
        building,
        &RubricWeights::default(),
        &RatingThresholds::default(),
    )
}

/// Score one building with custom weights and rating thresholds
pub fn score_with_config(
    building: &Building,
    weights: &RubricWeights,
    thresholds: &RatingThresholds,
) -> CalculatedMetrics {
    let raw = raw_score(building, weights);
    let construction_score = raw.clamp(0.0, 100.0).round() as u32;
    let construction_rating =
        assign_rating_with_thresholds(f64::from(construction_score), thresholds).value();
    let combustible_percent = combustible_percent(building);

    CalculatedMetrics {
        construction_score,
        construction_rating,
        combustible_percent,
    }
}

/// Sum of factor(material) * percent/100 over a breakdown
fn weighted_factor(breakdown: &[MaterialShare], factor: fn(&str) -> f64) -> f64 {
    breakdown
        .iter()
        .map(|share| factor(&share.material) * (share.percent / 100.0))
        .sum()
}

/// An element contributes only once its breakdown holds usable data
fn has_breakdown_data(breakdown: &[MaterialShare], total_percent: f64) -> bool {
    !breakdown.is_empty() && total_percent > 0.0
}

/// Unclamped score accumulation starting from 100
fn raw_score(building: &Building, weights: &RubricWeights) -> f64 {
    let mut raw = 100.0;
    let roof_area = building.roof.area_sqm.unwrap_or(0.0);

    // Roof is the dominant driver; a measured roof carries more weight
    if has_breakdown_data(&building.roof.breakdown, building.roof.total_percent) {
        let weight = if roof_area > 0.0 {
            weights.roof_measured
        } else {
            weights.roof_unmeasured
        };
        raw -= weighted_factor(&building.roof.breakdown, generic_factor) * weight;
    }

    if has_breakdown_data(&building.walls.breakdown, building.walls.total_percent) {
        raw -= weighted_factor(&building.walls.breakdown, generic_factor) * weights.walls;
    }

    // Mezzanine penalty scales with its footprint relative to the roof
    let mezzanine = &building.upper_floors_mezzanine;
    if has_breakdown_data(&mezzanine.breakdown, mezzanine.total_percent) {
        let mezz_area = mezzanine.area_sqm.unwrap_or(0.0);
        let reference = if roof_area > 0.0 {
            roof_area
        } else {
            FALLBACK_ROOF_AREA_SQM
        };
        let ratio = (mezz_area / reference).clamp(0.0, 1.0);
        let scale = MEZZ_SCALE_BASE + MEZZ_SCALE_RANGE * ratio;
        raw -= weighted_factor(&mezzanine.breakdown, mezzanine_factor) * weights.mezzanine * scale;
    }

    if building.combustible_cladding.present {
        raw -= weights.cladding_penalty;
    }

    raw += match building.frame_type {
        FrameType::Timber => -weights.frame_timber_penalty,
        FrameType::Steel => -weights.frame_steel_penalty,
        FrameType::ProtectedSteel | FrameType::ReinforcedConcrete | FrameType::Masonry => {
            weights.frame_protected_bonus
        }
        FrameType::Other => 0.0,
    };

    raw += match building.compartmentation {
        Compartmentation::High => weights.compartmentation_high_bonus,
        Compartmentation::Medium => weights.compartmentation_medium_bonus,
        Compartmentation::Low => -weights.compartmentation_low_penalty,
        Compartmentation::Unknown => 0.0,
    };

    raw
}

/// Combustible fraction of one element, defaulting conservatively when the
/// breakdown is absent or incomplete
///
/// The sum is deliberately not renormalized when percentages do not total
/// 100; the form layer blocks saving until each breakdown is complete.
fn element_combustible_fraction(breakdown: &[MaterialShare], total_percent: f64) -> f64 {
    if !has_breakdown_data(breakdown, total_percent) {
        return MISSING_BREAKDOWN_FRACTION;
    }
    weighted_factor(breakdown, combustible_fraction_factor)
}

/// Area-weighted combustible percentage, independent of the score
fn combustible_percent(building: &Building) -> u32 {
    let roof_area = building.roof.area_sqm.unwrap_or(0.0);
    let mezz_area = building.upper_floors_mezzanine.area_sqm.unwrap_or(0.0);
    let wall_proxy_area = if roof_area > 0.0 {
        roof_area * WALL_AREA_PROXY_RATIO
    } else {
        0.0
    };
    let cladding_base = if roof_area > 0.0 { roof_area } else { mezz_area };
    let cladding_area = if building.combustible_cladding.present && cladding_base > 0.0 {
        CLADDING_AREA_RATIO * cladding_base
    } else {
        0.0
    };

    let total_ref_area = roof_area + mezz_area + wall_proxy_area + cladding_area;
    if total_ref_area <= 0.0 {
        // No area data available at all
        return 0;
    }

    let roof_fraction =
        element_combustible_fraction(&building.roof.breakdown, building.roof.total_percent);
    let wall_fraction =
        element_combustible_fraction(&building.walls.breakdown, building.walls.total_percent);
    let mezz_fraction = element_combustible_fraction(
        &building.upper_floors_mezzanine.breakdown,
        building.upper_floors_mezzanine.total_percent,
    );

    // Cladding, when present, counts as fully combustible
    let weighted = roof_area * roof_fraction
        + mezz_area * mezz_fraction
        + wall_proxy_area * wall_fraction
        + cladding_area;

    (100.0 * weighted / total_ref_area).clamp(0.0, 100.0).round() as u32
}
