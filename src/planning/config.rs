// src/planning/config.rs

use crate::error::{PlanError, Result};
use crate::strategy::implementations::{DEFAULT_FORECAST_WINDOW, DEFAULT_SERVICE_LEVEL};
use crate::strategy::optimization::service_level_z;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Months of history feeding each forecast.
pub const LOOKBACK_MONTHS: u32 = 24;

/// Rows with fewer observed months than this are flagged as low confidence.
pub const MIN_CONFIDENT_MONTHS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlanConfig {
    /// Moving-average window for products without `best_n`.
    pub default_forecast_window: u32,
    /// Cycle service level the safety stock is sized for, in (0, 1).
    pub service_level: f64,
    /// Explicit z multiplier; overrides `service_level` when set.
    pub safety_factor: Option<f64>,
    pub min_confident_months: usize,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            default_forecast_window: DEFAULT_FORECAST_WINDOW,
            service_level: DEFAULT_SERVICE_LEVEL,
            safety_factor: None,
            min_confident_months: MIN_CONFIDENT_MONTHS,
        }
    }
}

impl PlanConfig {
    /// Parses a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_forecast_window == 0 {
            return Err(PlanError::Config(
                "default_forecast_window must be at least 1".to_owned(),
            ));
        }
        if !(self.service_level > 0.0 && self.service_level < 1.0) {
            return Err(PlanError::Config(format!(
                "service_level must be between 0 and 1, got {}",
                self.service_level
            )));
        }
        if let Some(factor) = self.safety_factor {
            if !factor.is_finite() || factor < 0.0 {
                return Err(PlanError::Config(format!(
                    "safety_factor must be a non-negative number, got {factor}"
                )));
            }
        }
        Ok(())
    }

    /// The z multiplier applied to demand dispersion.
    pub fn safety_z(&self) -> f64 {
        self.safety_factor
            .unwrap_or_else(|| service_level_z(self.service_level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_planning_conventions() {
        let config = PlanConfig::default();
        assert_eq!(config.default_forecast_window, 4);
        assert_eq!(config.min_confident_months, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = PlanConfig::from_toml_str("service_level = 0.9\n").unwrap();
        assert_eq!(config.service_level, 0.9);
        assert_eq!(config.default_forecast_window, 4);
    }

    #[test]
    fn explicit_factor_overrides_service_level() {
        let config = PlanConfig::from_toml_str("safety_factor = 1.0\n").unwrap();
        assert_eq!(config.safety_z(), 1.0);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(matches!(
            PlanConfig::from_toml_str("service_level = 1.5\n"),
            Err(PlanError::Config(_))
        ));
        assert!(matches!(
            PlanConfig::from_toml_str("default_forecast_window = 0\n"),
            Err(PlanError::Config(_))
        ));
        assert!(matches!(
            PlanConfig::from_toml_str("safety_factor = -2.0\n"),
            Err(PlanError::Config(_))
        ));
    }

    #[test]
    fn history_length_is_not_configurable() {
        for source in ["lookback_months = 6\n", "lookback_months = 4000000000\n"] {
            assert!(matches!(
                PlanConfig::from_toml_str(source),
                Err(PlanError::ConfigParse(_))
            ));
        }
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            PlanConfig::from_toml_str("service_level = \"high\"\n"),
            Err(PlanError::ConfigParse(_))
        ));
    }
}
