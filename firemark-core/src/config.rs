//! Configuration file support for Firemark
//!
//! Loads project-specific configuration from JSON files.
//!
//! Search order:
//! 1. Explicit path (--config CLI flag)
//! 2. `.firemarkrc.json` in the working directory
//! 3. `firemark.config.json` in the working directory
//!
//! All fields are optional. Omitted values fall back to the rubric defaults.

use crate::rating::RatingThresholds;
use crate::scoring::RubricWeights;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Firemark configuration loaded from a JSON config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FiremarkConfig {
    /// Custom rubric penalty/bonus weights
    #[serde(default)]
    pub weights: Option<WeightConfig>,

    /// Custom rating thresholds
    #[serde(default)]
    pub thresholds: Option<ThresholdConfig>,
}

/// Custom rubric penalty/bonus weights
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeightConfig {
    /// Roof penalty weight with a measured area (default: 12.0)
    pub roof_measured: Option<f64>,
    /// Roof penalty weight without a measured area (default: 8.0)
    pub roof_unmeasured: Option<f64>,
    /// Wall penalty weight (default: 15.0)
    pub walls: Option<f64>,
    /// Mezzanine penalty weight before area scaling (default: 20.0)
    pub mezzanine: Option<f64>,
    /// Flat penalty for combustible cladding (default: 10.0)
    pub cladding: Option<f64>,
    /// Penalty for a timber frame (default: 15.0)
    pub frame_timber: Option<f64>,
    /// Penalty for an unprotected steel frame (default: 8.0)
    pub frame_steel: Option<f64>,
    /// Bonus for protected steel, reinforced concrete, or masonry (default: 5.0)
    pub frame_protected: Option<f64>,
    /// Bonus for high compartmentation (default: 10.0)
    pub compartmentation_high: Option<f64>,
    /// Bonus for medium compartmentation (default: 5.0)
    pub compartmentation_medium: Option<f64>,
    /// Penalty for low compartmentation (default: 5.0)
    pub compartmentation_low: Option<f64>,
}

/// Custom rating thresholds on the 0-100 score
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdConfig {
    /// Minimum score for rating 5 (default: 85.0)
    pub excellent: Option<f64>,
    /// Minimum score for rating 4 (default: 70.0)
    pub good: Option<f64>,
    /// Minimum score for rating 3 (default: 50.0)
    pub average: Option<f64>,
    /// Minimum score for rating 2 (default: 30.0)
    pub below_average: Option<f64>,
}

/// Resolved configuration ready for use by the scorer
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub weights: RubricWeights,
    pub thresholds: RatingThresholds,
    /// Path the config was loaded from (None if defaults)
    pub config_path: Option<PathBuf>,
}

impl FiremarkConfig {
    /// Validate the configuration for logical errors
    pub fn validate(&self) -> Result<()> {
        if let Some(ref w) = self.weights {
            for (name, value) in [
                ("roof_measured", w.roof_measured),
                ("roof_unmeasured", w.roof_unmeasured),
                ("walls", w.walls),
                ("mezzanine", w.mezzanine),
                ("cladding", w.cladding),
                ("frame_timber", w.frame_timber),
                ("frame_steel", w.frame_steel),
                ("frame_protected", w.frame_protected),
                ("compartmentation_high", w.compartmentation_high),
                ("compartmentation_medium", w.compartmentation_medium),
                ("compartmentation_low", w.compartmentation_low),
            ] {
                if let Some(v) = value {
                    if v < 0.0 {
                        anyhow::bail!("weights.{} must be non-negative (got {})", name, v);
                    }
                    if v > 100.0 {
                        anyhow::bail!("weights.{} must be at most 100.0 (got {})", name, v);
                    }
                }
            }
        }

        if let Some(ref t) = self.thresholds {
            let defaults = RatingThresholds::default();
            let excellent = t.excellent.unwrap_or(defaults.excellent);
            let good = t.good.unwrap_or(defaults.good);
            let average = t.average.unwrap_or(defaults.average);
            let below_average = t.below_average.unwrap_or(defaults.below_average);

            for (name, v) in [
                ("excellent", excellent),
                ("good", good),
                ("average", average),
                ("below_average", below_average),
            ] {
                if !(0.0..=100.0).contains(&v) {
                    anyhow::bail!("thresholds.{} must be between 0 and 100 (got {})", name, v);
                }
            }
            if below_average >= average {
                anyhow::bail!(
                    "thresholds.below_average ({}) must be less than thresholds.average ({})",
                    below_average,
                    average
                );
            }
            if average >= good {
                anyhow::bail!(
                    "thresholds.average ({}) must be less than thresholds.good ({})",
                    average,
                    good
                );
            }
            if good >= excellent {
                anyhow::bail!(
                    "thresholds.good ({}) must be less than thresholds.excellent ({})",
                    good,
                    excellent
                );
            }
        }

        Ok(())
    }

    /// Resolve config into a form ready for use
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        self.validate()?;

        let defaults = RubricWeights::default();
        let weights = match &self.weights {
            Some(w) => RubricWeights {
                roof_measured: w.roof_measured.unwrap_or(defaults.roof_measured),
                roof_unmeasured: w.roof_unmeasured.unwrap_or(defaults.roof_unmeasured),
                walls: w.walls.unwrap_or(defaults.walls),
                mezzanine: w.mezzanine.unwrap_or(defaults.mezzanine),
                cladding_penalty: w.cladding.unwrap_or(defaults.cladding_penalty),
                frame_timber_penalty: w.frame_timber.unwrap_or(defaults.frame_timber_penalty),
                frame_steel_penalty: w.frame_steel.unwrap_or(defaults.frame_steel_penalty),
                frame_protected_bonus: w.frame_protected.unwrap_or(defaults.frame_protected_bonus),
                compartmentation_high_bonus: w
                    .compartmentation_high
                    .unwrap_or(defaults.compartmentation_high_bonus),
                compartmentation_medium_bonus: w
                    .compartmentation_medium
                    .unwrap_or(defaults.compartmentation_medium_bonus),
                compartmentation_low_penalty: w
                    .compartmentation_low
                    .unwrap_or(defaults.compartmentation_low_penalty),
            },
            None => defaults,
        };

        let threshold_defaults = RatingThresholds::default();
        let thresholds = match &self.thresholds {
            Some(t) => RatingThresholds {
                excellent: t.excellent.unwrap_or(threshold_defaults.excellent),
                good: t.good.unwrap_or(threshold_defaults.good),
                average: t.average.unwrap_or(threshold_defaults.average),
                below_average: t.below_average.unwrap_or(threshold_defaults.below_average),
            },
            None => threshold_defaults,
        };

        Ok(ResolvedConfig {
            weights,
            thresholds,
            config_path: None,
        })
    }
}

impl ResolvedConfig {
    /// Build a ResolvedConfig with all defaults (no config file)
    pub fn defaults() -> Result<Self> {
        FiremarkConfig::default().resolve()
    }
}

/// Discover and load a config file from the given directory
///
/// Search order:
/// 1. `.firemarkrc.json`
/// 2. `firemark.config.json`
///
/// Returns `None` if no config file is found (use defaults).
pub fn discover_config(dir: &Path) -> Result<Option<(FiremarkConfig, PathBuf)>> {
    let rc_path = dir.join(".firemarkrc.json");
    if rc_path.exists() {
        let config = load_config_file(&rc_path)?;
        return Ok(Some((config, rc_path)));
    }

    let config_path = dir.join("firemark.config.json");
    if config_path.exists() {
        let config = load_config_file(&config_path)?;
        return Ok(Some((config, config_path)));
    }

    Ok(None)
}

/// Load config from an explicit file path
pub fn load_config_file(path: &Path) -> Result<FiremarkConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;

    let config: FiremarkConfig = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config file: {}", path.display()))?;

    config
        .validate()
        .with_context(|| format!("invalid config in: {}", path.display()))?;

    Ok(config)
}

/// Load and resolve configuration, preferring an explicit path over discovery
pub fn load_and_resolve(dir: &Path, explicit_path: Option<&Path>) -> Result<ResolvedConfig> {
    match explicit_path {
        Some(path) => {
            let config = load_config_file(path)?;
            let mut resolved = config.resolve()?;
            resolved.config_path = Some(path.to_path_buf());
            Ok(resolved)
        }
        None => match discover_config(dir)? {
            Some((config, path)) => {
                let mut resolved = config.resolve()?;
                resolved.config_path = Some(path);
                Ok(resolved)
            }
            None => ResolvedConfig::defaults(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config_resolves_to_rubric_defaults() {
        let resolved = ResolvedConfig::defaults().unwrap();
        assert_eq!(resolved.weights, RubricWeights::default());
        assert_eq!(resolved.thresholds, RatingThresholds::default());
        assert!(resolved.config_path.is_none());
    }

    #[test]
    fn test_partial_weights_merge_with_defaults() {
        let config: FiremarkConfig =
            serde_json::from_str(r#"{"weights": {"walls": 20.0}}"#).unwrap();
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.weights.walls, 20.0);
        assert_eq!(resolved.weights.roof_measured, 12.0);
        assert_eq!(resolved.weights.mezzanine, 20.0);
    }

    #[test]
    fn test_negative_weight_is_rejected() {
        let config: FiremarkConfig =
            serde_json::from_str(r#"{"weights": {"cladding": -1.0}}"#).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("weights.cladding"));
    }

    #[test]
    fn test_unordered_thresholds_are_rejected() {
        let config: FiremarkConfig =
            serde_json::from_str(r#"{"thresholds": {"good": 90.0}}"#).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("thresholds.good"));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: Result<FiremarkConfig, _> =
            serde_json::from_str(r#"{"wieghts": {"walls": 20.0}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_discover_prefers_rc_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(".firemarkrc.json"),
            r#"{"weights": {"walls": 18.0}}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("firemark.config.json"),
            r#"{"weights": {"walls": 25.0}}"#,
        )
        .unwrap();

        let (config, path) = discover_config(dir.path()).unwrap().unwrap();
        assert!(path.ends_with(".firemarkrc.json"));
        assert_eq!(config.weights.unwrap().walls, Some(18.0));
    }

    #[test]
    fn test_discover_returns_none_without_config() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_and_resolve_with_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        fs::write(&path, r#"{"thresholds": {"excellent": 90.0}}"#).unwrap();

        let resolved = load_and_resolve(dir.path(), Some(&path)).unwrap();
        assert_eq!(resolved.thresholds.excellent, 90.0);
        assert_eq!(resolved.thresholds.good, 70.0);
        assert_eq!(resolved.config_path, Some(path));
    }

    #[test]
    fn test_malformed_config_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_config_file(&path).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }
}
