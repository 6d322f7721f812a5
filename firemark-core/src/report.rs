//! Reporting and output generation
//!
//! Global invariants enforced:
//! - Deterministic output ordering
//! - Byte-for-byte identical output across runs

use crate::building::Building;
use crate::rating::Rating;
use crate::scoring::CalculatedMetrics;
use serde::{Deserialize, Serialize};

/// Complete risk report for one building
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BuildingRiskReport {
    /// Display label: the building's name, or a positional fallback
    pub building: String,
    /// Zero-based position of the building in the source document
    pub index: usize,
    pub construction_score: u32,
    pub construction_rating: u8,
    pub rating_label: String,
    /// Suppressed when neither roof nor mezzanine has a usable area
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combustible_percent: Option<u32>,
}

impl BuildingRiskReport {
    /// Create a report from a building and its computed metrics
    pub fn new(index: usize, building: &Building, metrics: CalculatedMetrics) -> Self {
        let label = if building.name.trim().is_empty() {
            format!("building {}", index + 1)
        } else {
            building.name.clone()
        };

        // The combustible estimate is meaningless without any area data
        let roof_area = building.roof.area_sqm.unwrap_or(0.0);
        let mezz_area = building.upper_floors_mezzanine.area_sqm.unwrap_or(0.0);
        let combustible_percent =
            (roof_area > 0.0 || mezz_area > 0.0).then_some(metrics.combustible_percent);

        BuildingRiskReport {
            building: label,
            index,
            construction_score: metrics.construction_score,
            construction_rating: metrics.construction_rating,
            rating_label: Rating::from_value(metrics.construction_rating)
                .as_str()
                .to_string(),
            combustible_percent,
        }
    }
}

/// Sort reports deterministically, riskiest first
pub fn sort_reports(mut reports: Vec<BuildingRiskReport>) -> Vec<BuildingRiskReport> {
    reports.sort_by(|a, b| {
        // 1. Score ascending (lowest score = highest risk)
        a.construction_score
            .cmp(&b.construction_score)
            // 2. Document position ascending
            .then_with(|| a.index.cmp(&b.index))
            // 3. Label ascending
            .then_with(|| a.building.cmp(&b.building))
    });
    reports
}

/// Render reports as text output
pub fn render_text(reports: &[BuildingRiskReport]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<7} {:<8} {:<15} {:<10} {}\n",
        "SCORE", "RATING", "LABEL", "COMBUST%", "BUILDING"
    ));

    for report in reports {
        let combustible = match report.combustible_percent {
            Some(percent) => format!("{}%", percent),
            None => "-".to_string(),
        };
        output.push_str(&format!(
            "{:<7} {:<8} {:<15} {:<10} {}\n",
            report.construction_score,
            report.construction_rating,
            report.rating_label,
            combustible,
            report.building,
        ));
    }

    output
}

/// Render reports as JSON output
pub fn render_json(reports: &[BuildingRiskReport]) -> String {
    serde_json::to_string_pretty(reports).unwrap_or_else(|_| "[]".to_string())
}
