use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::optics::{DofLimits, dof_limits, hyperfocal_distance, mm_to_m};

use super::Sensor;

/// Input fields of a [`ParameterSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    #[serde(rename = "focalLengthMm")]
    FocalLength,
    Aperture,
    #[serde(rename = "subjectDistanceM")]
    SubjectDistance,
    #[serde(rename = "circleOfConfusionMm")]
    CircleOfConfusion,
}

impl InputField {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::FocalLength => "focal length",
            Self::Aperture => "aperture",
            Self::SubjectDistance => "subject distance",
            Self::CircleOfConfusion => "circle of confusion",
        }
    }
}

/// Metrics derived from a [`ParameterSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMetric {
    Hyperfocal,
    Limits,
    #[default]
    Total,
}

impl OutputMetric {
    pub const ALL: [OutputMetric; 3] = [Self::Hyperfocal, Self::Limits, Self::Total];

    /// Get a display label for the metric
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hyperfocal => "hyperfocal distance",
            Self::Limits => "near/far limits",
            Self::Total => "total depth of field",
        }
    }

    /// Name used on the command line and in start-up files
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hyperfocal => "hyperfocal",
            Self::Limits => "limits",
            Self::Total => "total",
        }
    }
}

impl fmt::Display for OutputMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputMetric {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hyperfocal" => Ok(Self::Hyperfocal),
            "limits" => Ok(Self::Limits),
            "total" => Ok(Self::Total),
            _ => Err(ParseError::UnknownMetric(s.to_string())),
        }
    }
}

/// Value of one [`OutputMetric`], in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MetricValue {
    Hyperfocal(f64),
    Limits(DofLimits),
    /// `None` when the near limit lies beyond the far limit
    Total(Option<f64>),
}

impl MetricValue {
    /// Single scalar for the metric, `None` for limits and undefined totals
    #[must_use]
    pub fn scalar(&self) -> Option<f64> {
        match self {
            Self::Hyperfocal(h) => Some(*h),
            Self::Limits(_) => None,
            Self::Total(total) => *total,
        }
    }
}

/// One optical configuration.
///
/// Values never change after construction; [`ParameterSet::with`] returns a
/// new set with a single field replaced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSet {
    focal_length_mm: f64,
    aperture: f64,
    subject_distance_m: f64,
    circle_of_confusion_mm: f64,
}

impl ParameterSet {
    #[must_use]
    pub fn new(
        focal_length_mm: f64,
        aperture: f64,
        subject_distance_m: f64,
        circle_of_confusion_mm: f64,
    ) -> Self {
        Self {
            focal_length_mm,
            aperture,
            subject_distance_m,
            circle_of_confusion_mm,
        }
    }

    /// Parameter set whose circle of confusion comes from the sensor diagonal
    #[must_use]
    pub fn for_sensor(
        focal_length_mm: f64,
        aperture: f64,
        subject_distance_m: f64,
        sensor: &Sensor,
    ) -> Self {
        Self::new(
            focal_length_mm,
            aperture,
            subject_distance_m,
            sensor.circle_of_confusion_mm(),
        )
    }

    pub fn focal_length_mm(&self) -> f64 {
        self.focal_length_mm
    }

    pub fn aperture(&self) -> f64 {
        self.aperture
    }

    pub fn subject_distance_m(&self) -> f64 {
        self.subject_distance_m
    }

    pub fn circle_of_confusion_mm(&self) -> f64 {
        self.circle_of_confusion_mm
    }

    /// Read a field by name
    #[must_use]
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::FocalLength => self.focal_length_mm,
            InputField::Aperture => self.aperture,
            InputField::SubjectDistance => self.subject_distance_m,
            InputField::CircleOfConfusion => self.circle_of_confusion_mm,
        }
    }

    /// Copy of this set with one field replaced
    #[must_use]
    pub fn with(&self, field: InputField, value: f64) -> Self {
        let mut copy = *self;
        match field {
            InputField::FocalLength => copy.focal_length_mm = value,
            InputField::Aperture => copy.aperture = value,
            InputField::SubjectDistance => copy.subject_distance_m = value,
            InputField::CircleOfConfusion => copy.circle_of_confusion_mm = value,
        }
        copy
    }

    /// Hyperfocal distance in meters
    #[must_use]
    pub fn hyperfocal(&self) -> f64 {
        hyperfocal_distance(
            mm_to_m(self.focal_length_mm),
            self.aperture,
            mm_to_m(self.circle_of_confusion_mm),
        )
    }

    /// Near and far sharpness limits in meters
    #[must_use]
    pub fn limits(&self) -> DofLimits {
        dof_limits(
            mm_to_m(self.focal_length_mm),
            self.subject_distance_m,
            self.hyperfocal(),
        )
    }

    /// Total depth of field in meters, `None` for degenerate configurations
    #[must_use]
    pub fn total(&self) -> Option<f64> {
        self.limits().total()
    }

    /// Evaluate any metric
    #[must_use]
    pub fn metric(&self, metric: OutputMetric) -> MetricValue {
        match metric {
            OutputMetric::Hyperfocal => MetricValue::Hyperfocal(self.hyperfocal()),
            OutputMetric::Limits => MetricValue::Limits(self.limits()),
            OutputMetric::Total => MetricValue::Total(self.total()),
        }
    }
}
