//! Start-up configuration.
//!
//! Values come from an optional read-only YAML file and from command-line
//! flags, with flags taking precedence. Nothing here is ever written back.

use std::path::Path;

use dofplot_core::analysis::{FocalRange, SubjectRange, SweepAxis};
use dofplot_core::model::OutputMetric;
use serde::{Deserialize, Serialize};

/// Error types for loading start-up configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "IO error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Initial UI values; anything left out falls back to the built-in defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct StartupConfig {
    /// Sensor label from the catalog, e.g. "APS-C"
    pub sensor: Option<String>,
    /// f-number, snapped to the nearest catalog stop
    pub aperture: Option<f64>,
    /// Full-frame-equivalent focal length in mm
    pub focal_equiv: Option<f64>,
    /// Subject distance in meters
    pub subject: Option<f64>,
    pub axis: Option<SweepAxis>,
    pub metric: Option<OutputMetric>,
    pub focal_range: Option<FocalRange>,
    pub subject_range: Option<SubjectRange>,
}

impl StartupConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_saphyr::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    /// Overlay `overrides` on top of `self`; set values in `overrides` win
    #[must_use]
    pub fn merge(self, overrides: StartupConfig) -> Self {
        Self {
            sensor: overrides.sensor.or(self.sensor),
            aperture: overrides.aperture.or(self.aperture),
            focal_equiv: overrides.focal_equiv.or(self.focal_equiv),
            subject: overrides.subject.or(self.subject),
            axis: overrides.axis.or(self.axis),
            metric: overrides.metric.or(self.metric),
            focal_range: overrides.focal_range.or(self.focal_range),
            subject_range: overrides.subject_range.or(self.subject_range),
        }
    }
}
