//! Firemark core library - construction fire-risk scoring
//!
//! Converts a structured description of a building's construction (material
//! breakdowns, areas, frame type, compartmentation, cladding) into a bounded
//! 0-100 risk score, a 1-5 rating, and an area-weighted combustible
//! percentage.

#![deny(warnings)]

// Global invariants enforced in this crate:
// - Scoring is strictly per-building
// - No global mutable state
// - No randomness, clocks, threads, or async
// - The scorer is total: missing or partial data degrades to documented
//   defaults, never to a panic
// - Identical input yields byte-for-byte identical output

pub mod building;
pub mod config;
pub mod factors;
pub mod parser;
pub mod rating;
pub mod report;
pub mod scoring;
pub mod validate;

pub use building::Building;
pub use config::ResolvedConfig;
pub use parser::parse_numeric_input;
pub use rating::Rating;
pub use report::{render_json, render_text, sort_reports, BuildingRiskReport};
pub use scoring::{score, CalculatedMetrics};

use anyhow::{Context, Result};
use std::path::Path;

/// Assess all buildings in a JSON document with default configuration
pub fn assess(path: &Path) -> Result<Vec<BuildingRiskReport>> {
    assess_with_config(path, None)
}

/// Assess all buildings in a JSON document with optional resolved configuration
///
/// Validation issues are advisory and reported on stderr; every building is
/// still scored.
pub fn assess_with_config(
    path: &Path,
    resolved_config: Option<&ResolvedConfig>,
) -> Result<Vec<BuildingRiskReport>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read building document: {}", path.display()))?;
    let buildings = parse_building_document(&content)
        .with_context(|| format!("failed to parse building document: {}", path.display()))?;

    let defaults = ResolvedConfig::defaults()?;
    let config = resolved_config.unwrap_or(&defaults);

    let mut reports = Vec::with_capacity(buildings.len());
    for (index, building) in buildings.iter().enumerate() {
        for issue in validate::validate_building(building) {
            eprintln!(
                "warning: building {}: {}: {}",
                index + 1,
                issue.field,
                issue.message
            );
        }
        let metrics = scoring::score_with_config(building, &config.weights, &config.thresholds);
        reports.push(BuildingRiskReport::new(index, building, metrics));
    }

    Ok(sort_reports(reports))
}

/// Parse a building document: either a single Building object or an array
pub fn parse_building_document(content: &str) -> Result<Vec<Building>> {
    let value: serde_json::Value =
        serde_json::from_str(content).context("document is not valid JSON")?;
    match value {
        serde_json::Value::Array(_) => {
            serde_json::from_value(value).context("invalid building array")
        }
        serde_json::Value::Object(_) => {
            let building: Building =
                serde_json::from_value(value).context("invalid building object")?;
            Ok(vec![building])
        }
        _ => anyhow::bail!("building document must be a JSON object or array"),
    }
}
