//! Parameter sweep module.
//!
//! A sweep varies one input of a [`ParameterSet`](crate::model::ParameterSet)
//! over a domain while the others stay fixed, evaluates one metric at every
//! point and describes the result as a renderer-agnostic chart.
//!
//! ```
//! use dofplot_core::analysis::{FocalRange, SweepAxis, SweepConfig, build_sweep};
//! use dofplot_core::model::{OutputMetric, ParameterSet, SENSORS};
//!
//! let sensor = &SENSORS[3];
//! let params = ParameterSet::for_sensor(25.0, 4.0, 3.0, sensor);
//! let config = SweepConfig::new(SweepAxis::Focal, OutputMetric::Limits, sensor.crop_factor)
//!     .with_focal_range(FocalRange::Tele);
//!
//! let chart = build_sweep(&params, &config).unwrap();
//! assert_eq!(chart.x.first(), Some(&40.0));
//! assert_eq!(chart.x.last(), Some(&150.0));
//! ```
//!
//! # Domains
//!
//! - Aperture sweeps use the f-stop catalog verbatim.
//! - Focal sweeps use the selected [`FocalRange`] divided by the crop factor,
//!   so the bounds stay full-frame equivalent.
//! - Subject sweeps use the selected [`SubjectRange`] verbatim.
//!
//! Every ranged domain is built with [`inclusive_range`].

mod builder;
mod chart;
mod config;

pub use builder::*;
pub use chart::*;
pub use config::*;
