//! Configuration types for parameter sweeps.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, SweepError};
use crate::model::{InputField, OutputMetric};

/// Candidates this close to the upper bound (relative to the step) count as
/// reaching it
const RANGE_END_TOLERANCE: f64 = 1e-9;
/// Largest number of points a ranged domain may hold
pub const MAX_RANGE_POINTS: usize = 100_000;

/// Input varied along the x-axis of a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SweepAxis {
    #[default]
    Aperture,
    #[serde(alias = "focalLengthMm")]
    Focal,
    #[serde(alias = "subjectDistanceM")]
    Subject,
}

impl SweepAxis {
    pub const ALL: [SweepAxis; 3] = [Self::Aperture, Self::Focal, Self::Subject];

    /// The parameter-set field this axis varies
    #[must_use]
    pub fn field(&self) -> InputField {
        match self {
            Self::Aperture => InputField::Aperture,
            Self::Focal => InputField::FocalLength,
            Self::Subject => InputField::SubjectDistance,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.field().label()
    }

    /// Name used on the command line and in start-up files
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Aperture => "aperture",
            Self::Focal => "focal",
            Self::Subject => "subject",
        }
    }

    /// Whether `metric` changes along this axis
    #[must_use]
    pub fn supports(&self, metric: OutputMetric) -> bool {
        !matches!((self, metric), (Self::Subject, OutputMetric::Hyperfocal))
    }
}

impl fmt::Display for SweepAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SweepAxis {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "aperture" => Ok(Self::Aperture),
            "focal" | "focalLengthMm" => Ok(Self::Focal),
            "subject" | "subjectDistanceM" => Ok(Self::Subject),
            _ => Err(ParseError::UnknownAxis(s.to_string())),
        }
    }
}

/// Inclusive interval with a step size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangePreset {
    pub low: f64,
    pub high: f64,
    pub step: f64,
}

impl RangePreset {
    pub const fn new(low: f64, high: f64, step: f64) -> Self {
        Self { low, high, step }
    }

    /// Generate the domain for this preset
    pub fn values(&self) -> Result<Vec<f64>, SweepError> {
        inclusive_range(self.low, self.high, self.step)
    }
}

/// Full-frame-equivalent focal length buckets, in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FocalRange {
    Wide,
    #[default]
    Normal,
    Tele,
}

impl FocalRange {
    pub const ALL: [FocalRange; 3] = [Self::Wide, Self::Normal, Self::Tele];

    #[must_use]
    pub fn preset(&self) -> RangePreset {
        match self {
            Self::Wide => RangePreset::new(10.0, 28.0, 1.0),
            Self::Normal => RangePreset::new(24.0, 100.0, 1.0),
            Self::Tele => RangePreset::new(80.0, 300.0, 1.0),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Wide => "wide",
            Self::Normal => "normal",
            Self::Tele => "tele",
        }
    }
}

impl fmt::Display for FocalRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FocalRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownFocalRange(s.to_string()))
    }
}

/// Subject distance buckets, in meters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubjectRange {
    Near,
    #[default]
    Normal,
    Far,
    SuperFar,
}

impl SubjectRange {
    pub const ALL: [SubjectRange; 4] = [Self::Near, Self::Normal, Self::Far, Self::SuperFar];

    #[must_use]
    pub fn preset(&self) -> RangePreset {
        match self {
            Self::Near => RangePreset::new(0.1, 1.0, 0.1),
            Self::Normal => RangePreset::new(1.0, 5.0, 0.05),
            Self::Far => RangePreset::new(5.0, 10.0, 0.1),
            Self::SuperFar => RangePreset::new(10.0, 100.0, 1.0),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Near => "near",
            Self::Normal => "normal",
            Self::Far => "far",
            Self::SuperFar => "super-far",
        }
    }
}

impl fmt::Display for SubjectRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SubjectRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownSubjectRange(s.to_string()))
    }
}

/// Selected preset per ranged axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RangeSelection {
    pub focal: FocalRange,
    pub subject: SubjectRange,
}

/// Configuration for a single sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Input varied along the x-axis
    pub axis: SweepAxis,
    /// Metric plotted on the y-axis
    pub metric: OutputMetric,
    /// Preset buckets for focal and subject sweeps
    #[serde(default)]
    pub ranges: RangeSelection,
    /// Crop factor of the selected sensor, scales the focal domain
    pub crop_factor: f64,
}

impl SweepConfig {
    #[must_use]
    pub fn new(axis: SweepAxis, metric: OutputMetric, crop_factor: f64) -> Self {
        Self {
            axis,
            metric,
            ranges: RangeSelection::default(),
            crop_factor,
        }
    }

    #[must_use]
    pub fn with_focal_range(mut self, focal: FocalRange) -> Self {
        self.ranges.focal = focal;
        self
    }

    #[must_use]
    pub fn with_subject_range(mut self, subject: SubjectRange) -> Self {
        self.ranges.subject = subject;
        self
    }

    /// Check the axis/metric pairing and the crop factor
    pub fn validate(&self) -> Result<(), SweepError> {
        if !self.axis.supports(self.metric) {
            return Err(SweepError::InvalidCombination {
                axis: self.axis,
                metric: self.metric,
            });
        }
        if !self.crop_factor.is_finite() || self.crop_factor <= 0.0 {
            return Err(SweepError::InvalidCropFactor(self.crop_factor));
        }
        Ok(())
    }
}

/// Generate `low, low + step, ...` below `high`, then `high` exactly once.
///
/// Ranges needing [`MAX_RANGE_POINTS`] points or more are rejected.
///
/// Points are computed as `low + i * step` so rounding error does not
/// accumulate. A candidate within a tiny fraction of `step` of `high` is
/// treated as `high` itself.
pub fn inclusive_range(low: f64, high: f64, step: f64) -> Result<Vec<f64>, SweepError> {
    if !low.is_finite() || !high.is_finite() || !step.is_finite() || step <= 0.0 || low > high {
        return Err(SweepError::InvalidRange { low, high, step });
    }
    if (high - low) / step >= MAX_RANGE_POINTS as f64 {
        return Err(SweepError::InvalidRange { low, high, step });
    }

    let limit = high - step * RANGE_END_TOLERANCE;
    let mut values: Vec<f64> = (0_u32..)
        .map(|i| low + i as f64 * step)
        .take_while(|&v| v < limit)
        .collect();
    values.push(high);
    Ok(values)
}
