//! Depth-of-field computation library
//!
//! This crate provides the optical model and parameter sweep engine behind
//! the `dofplot` terminal charts. It supports:
//! - Circle of confusion, hyperfocal distance and near/far sharpness limits
//! - Immutable parameter sets with single-field overrides
//! - Axis binding: evaluate one metric while one input varies
//! - Sweeps over f-stops, focal lengths and subject distances with
//!   renderer-agnostic chart descriptions
//! - Compact length labels (cm / m / km)
//!
//! # Example
//!
//! ```
//! use dofplot_core::analysis::{SweepAxis, SweepConfig, build_sweep};
//! use dofplot_core::model::{OutputMetric, ParameterSet, SENSORS};
//!
//! let sensor = &SENSORS[0];
//! let params = ParameterSet::for_sensor(50.0, 8.0, 2.0, sensor);
//! let config = SweepConfig::new(SweepAxis::Aperture, OutputMetric::Total, sensor.crop_factor);
//!
//! let chart = build_sweep(&params, &config).unwrap();
//! assert_eq!(chart.x.len(), 31);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod error;
pub mod evaluate;
pub mod format;
pub mod optics;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{SweepAxis, SweepChart, SweepConfig, build_sweep};
pub use evaluate::BoundMetric;
pub use format::format_length;
pub use model::{InputField, MetricValue, OutputMetric, ParameterSet, Sensor};
