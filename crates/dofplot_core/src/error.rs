use std::fmt;

use crate::analysis::SweepAxis;
use crate::model::OutputMetric;

/// Errors raised while building a sweep
#[derive(Debug, Clone, PartialEq)]
pub enum SweepError {
    /// The metric does not depend on the swept input
    InvalidCombination {
        axis: SweepAxis,
        metric: OutputMetric,
    },
    /// Crop factor must be finite and positive
    InvalidCropFactor(f64),
    /// Range bounds or step cannot produce an increasing domain
    InvalidRange { low: f64, high: f64, step: f64 },
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::InvalidCombination { axis, metric } => write!(
                f,
                "{} cannot be plotted against {}",
                metric.label(),
                axis.label()
            ),
            SweepError::InvalidCropFactor(crop) => {
                write!(f, "invalid crop factor {crop}: must be finite and positive")
            }
            SweepError::InvalidRange { low, high, step } => {
                write!(f, "invalid range [{low}, {high}] with step {step}")
            }
        }
    }
}

impl std::error::Error for SweepError {}

/// Errors raised when parsing selection names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownAxis(String),
    UnknownMetric(String),
    UnknownFocalRange(String),
    UnknownSubjectRange(String),
    UnknownSensor(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownAxis(name) => write!(f, "unknown sweep axis '{name}'"),
            ParseError::UnknownMetric(name) => write!(f, "unknown metric '{name}'"),
            ParseError::UnknownFocalRange(name) => {
                write!(f, "unknown focal range preset '{name}'")
            }
            ParseError::UnknownSubjectRange(name) => {
                write!(f, "unknown subject range preset '{name}'")
            }
            ParseError::UnknownSensor(name) => write!(f, "sensor '{name}' not found"),
        }
    }
}

impl std::error::Error for ParseError {}
