//! Construction rating classification
//!
//! Global invariants enforced:
//! - The rating is a non-decreasing step function of the construction score
//! - Every score maps to exactly one rating

/// Discrete 1-5 construction rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rating {
    Poor,         // < 30
    BelowAverage, // 30-49
    Average,      // 50-69
    Good,         // 70-84
    Excellent,    // >= 85
}

impl Rating {
    /// Numeric value as displayed and persisted (1 = Poor .. 5 = Excellent)
    pub fn value(&self) -> u8 {
        match self {
            Rating::Poor => 1,
            Rating::BelowAverage => 2,
            Rating::Average => 3,
            Rating::Good => 4,
            Rating::Excellent => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Poor => "Poor",
            Rating::BelowAverage => "Below Average",
            Rating::Average => "Average",
            Rating::Good => "Good",
            Rating::Excellent => "Excellent",
        }
    }

    /// Recover a rating from its persisted 1-5 value, clamping out-of-range input
    pub fn from_value(value: u8) -> Rating {
        match value {
            0 | 1 => Rating::Poor,
            2 => Rating::BelowAverage,
            3 => Rating::Average,
            4 => Rating::Good,
            _ => Rating::Excellent,
        }
    }
}

/// Configurable score thresholds for rating assignment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingThresholds {
    pub excellent: f64,
    pub good: f64,
    pub average: f64,
    pub below_average: f64,
}

impl Default for RatingThresholds {
    fn default() -> Self {
        RatingThresholds {
            excellent: 85.0,
            good: 70.0,
            average: 50.0,
            below_average: 30.0,
        }
    }
}

/// Assign a rating from a construction score with default thresholds
pub fn assign_rating(score: f64) -> Rating {
    assign_rating_with_thresholds(score, &RatingThresholds::default())
}

/// Assign a rating with custom thresholds
pub fn assign_rating_with_thresholds(score: f64, thresholds: &RatingThresholds) -> Rating {
    if score >= thresholds.excellent {
        Rating::Excellent
    } else if score >= thresholds.good {
        Rating::Good
    } else if score >= thresholds.average {
        Rating::Average
    } else if score >= thresholds.below_average {
        Rating::BelowAverage
    } else {
        Rating::Poor
    }
}
