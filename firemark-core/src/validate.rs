//! Completeness and range checks for entered building data
//!
//! Validation is advisory: the scorer is total and never rejects input, so
//! issues reported here gate whether a record is complete enough to save,
//! not whether it can be scored.

use crate::building::{Building, MaterialShare};

/// Tolerance when comparing a cached total against the sum of its breakdown
const PERCENT_EPSILON: f64 = 0.01;

/// One advisory problem with an entered building record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Dotted path of the offending field (e.g. "roof.total_percent")
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationIssue {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Collect all completeness and range issues for one building
pub fn validate_building(building: &Building) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    check_breakdown(
        "roof",
        &building.roof.breakdown,
        building.roof.total_percent,
        &mut issues,
    );
    check_breakdown(
        "walls",
        &building.walls.breakdown,
        building.walls.total_percent,
        &mut issues,
    );
    check_breakdown(
        "upper_floors_mezzanine",
        &building.upper_floors_mezzanine.breakdown,
        building.upper_floors_mezzanine.total_percent,
        &mut issues,
    );

    check_non_negative("roof.area_sqm", building.roof.area_sqm, &mut issues);
    check_non_negative(
        "upper_floors_mezzanine.area_sqm",
        building.upper_floors_mezzanine.area_sqm,
        &mut issues,
    );
    check_non_negative("geometry.floors", building.geometry.floors, &mut issues);
    check_non_negative(
        "geometry.basements",
        building.geometry.basements,
        &mut issues,
    );
    check_non_negative("geometry.height_m", building.geometry.height_m, &mut issues);

    issues
}

/// True when the record has no outstanding issues and is ready to save
pub fn is_complete(building: &Building) -> bool {
    validate_building(building).is_empty()
}

fn check_breakdown(
    element: &str,
    breakdown: &[MaterialShare],
    total_percent: f64,
    issues: &mut Vec<ValidationIssue>,
) {
    if breakdown.is_empty() {
        // An element left entirely blank is allowed; the scorer treats it as
        // absent data
        return;
    }

    for (index, share) in breakdown.iter().enumerate() {
        if !(0.0..=100.0).contains(&share.percent) || share.percent.is_nan() {
            issues.push(ValidationIssue::new(
                format!("{}.breakdown[{}].percent", element, index),
                format!("percent must be between 0 and 100 (got {})", share.percent),
            ));
        }
        if share.material.trim().is_empty() {
            issues.push(ValidationIssue::new(
                format!("{}.breakdown[{}].material", element, index),
                "material label must not be empty",
            ));
        }
    }

    let sum: f64 = breakdown.iter().map(|share| share.percent).sum();
    if (sum - total_percent).abs() > PERCENT_EPSILON {
        issues.push(ValidationIssue::new(
            format!("{}.total_percent", element),
            format!(
                "cached total {} does not match breakdown sum {}",
                total_percent, sum
            ),
        ));
    }
    if (sum - 100.0).abs() > PERCENT_EPSILON {
        issues.push(ValidationIssue::new(
            format!("{}.breakdown", element),
            format!("breakdown percentages must total 100 (got {})", sum),
        ));
    }
}

fn check_non_negative(field: &str, value: Option<f64>, issues: &mut Vec<ValidationIssue>) {
    if let Some(v) = value {
        if v < 0.0 || v.is_nan() {
            issues.push(ValidationIssue::new(
                field,
                format!("value must be non-negative (got {})", v),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::building::MaterialShare;

    #[test]
    fn test_default_building_is_complete() {
        assert!(is_complete(&Building::default()));
    }

    #[test]
    fn test_complete_breakdown_passes() {
        let mut building = Building::default();
        building
            .roof
            .breakdown
            .push(MaterialShare::new("Heavy Non-Combustible", 60.0));
        building
            .roof
            .breakdown
            .push(MaterialShare::new("Approved Composite Panel", 40.0));
        building.roof.total_percent = 100.0;
        assert!(is_complete(&building));
    }

    #[test]
    fn test_incomplete_breakdown_is_flagged() {
        let mut building = Building::default();
        building
            .walls
            .breakdown
            .push(MaterialShare::new("Unknown", 80.0));
        building.walls.total_percent = 80.0;
        let issues = validate_building(&building);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "walls.breakdown");
        assert!(issues[0].message.contains("total 100"));
    }

    #[test]
    fn test_stale_cached_total_is_flagged() {
        let mut building = Building::default();
        building
            .roof
            .breakdown
            .push(MaterialShare::new("Timber", 100.0));
        building.roof.total_percent = 60.0;
        let issues = validate_building(&building);
        assert!(issues
            .iter()
            .any(|issue| issue.field == "roof.total_percent"));
    }

    #[test]
    fn test_out_of_range_percent_is_flagged() {
        let mut building = Building::default();
        building
            .roof
            .breakdown
            .push(MaterialShare::new("Timber", 140.0));
        building.roof.total_percent = 140.0;
        let issues = validate_building(&building);
        assert!(issues
            .iter()
            .any(|issue| issue.field == "roof.breakdown[0].percent"));
    }

    #[test]
    fn test_empty_material_label_is_flagged() {
        let mut building = Building::default();
        building.roof.breakdown.push(MaterialShare::new("  ", 100.0));
        building.roof.total_percent = 100.0;
        let issues = validate_building(&building);
        assert!(issues
            .iter()
            .any(|issue| issue.field == "roof.breakdown[0].material"));
    }

    #[test]
    fn test_negative_area_is_flagged() {
        let mut building = Building::default();
        building.roof.area_sqm = Some(-10.0);
        building.geometry.height_m = Some(12.0);
        let issues = validate_building(&building);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "roof.area_sqm");
    }

    #[test]
    fn test_issues_never_block_scoring() {
        let mut building = Building::default();
        building
            .roof
            .breakdown
            .push(MaterialShare::new("Combustible (Other)", 250.0));
        building.roof.total_percent = 250.0;
        assert!(!validate_building(&building).is_empty());
        // Scoring still succeeds and stays within bounds
        let metrics = crate::scoring::score(&building);
        assert!(metrics.construction_score <= 100);
    }
}
