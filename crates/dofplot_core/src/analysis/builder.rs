//! Sweep builder: domain construction, evaluation and axis metadata.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::SweepError;
use crate::evaluate::BoundMetric;
use crate::format::format_length_or;
use crate::model::{F_STOPS, MetricValue, OutputMetric, ParameterSet, f_stop_ticks};

use super::{
    AxisDescriptor, Fill, SweepAxis, SweepChart, SweepConfig, SweepSeries, Trace, inclusive_range,
};

/// Default y-axis range for near/far limit charts, in meters
pub const LIMITS_AXIS_RANGE: [f64; 2] = [0.0, 300.0];
/// Default y-axis range for total depth-of-field charts, in meters
pub const TOTAL_AXIS_RANGE: [f64; 2] = [0.0, 100.0];

/// Build the chart for one sweep.
///
/// Fails fast on an axis/metric pair that cannot vary together, an invalid
/// crop factor or a preset that yields no valid domain. The parameter set is
/// never modified.
pub fn build_sweep(params: &ParameterSet, config: &SweepConfig) -> Result<SweepChart, SweepError> {
    config.validate()?;

    let x = sweep_domain(config)?;
    let bound = params.bind(config.axis.field(), config.metric);
    let values = evaluate_domain(&bound, &x);
    let series = build_series(config.metric, &values);

    let x_axis = x_axis_descriptor(config.axis);
    let mut y_axis = y_axis_descriptor(config.metric);
    // An all-infinite far limit keeps the default ceiling
    y_axis.clamp_max(series.upper().values.iter().copied());

    tracing::debug!(
        axis = %config.axis,
        metric = %config.metric,
        points = x.len(),
        y_range = ?y_axis.range,
        "Built sweep"
    );

    Ok(SweepChart {
        x,
        series,
        x_axis,
        y_axis,
    })
}

/// Input values for the configured axis, strictly increasing
pub fn sweep_domain(config: &SweepConfig) -> Result<Vec<f64>, SweepError> {
    match config.axis {
        SweepAxis::Aperture => Ok(F_STOPS.to_vec()),
        SweepAxis::Focal => {
            let preset = config.ranges.focal.preset();
            inclusive_range(
                (preset.low / config.crop_factor).round(),
                (preset.high / config.crop_factor).round(),
                preset.step,
            )
        }
        SweepAxis::Subject => config.ranges.subject.preset().values(),
    }
}

/// Evaluate a bound metric at every domain point, preserving order
pub fn evaluate_domain(bound: &BoundMetric, domain: &[f64]) -> Vec<MetricValue> {
    #[cfg(feature = "parallel")]
    let values = domain.par_iter().map(|&x| bound.evaluate(x)).collect();

    #[cfg(not(feature = "parallel"))]
    let values = domain.iter().map(|&x| bound.evaluate(x)).collect();

    values
}

fn build_series(metric: OutputMetric, values: &[MetricValue]) -> SweepSeries {
    match metric {
        OutputMetric::Limits => {
            let (near, far): (Vec<Option<f64>>, Vec<Option<f64>>) = values
                .iter()
                .map(|v| match v {
                    MetricValue::Limits(limits) => (Some(limits.near), Some(limits.far)),
                    _ => (None, None),
                })
                .unzip();
            SweepSeries::Band {
                near: trace("near limit", near, Fill::None),
                far: trace("far limit", far, Fill::ToNextY),
            }
        }
        OutputMetric::Hyperfocal | OutputMetric::Total => {
            let ys = values.iter().map(MetricValue::scalar).collect();
            SweepSeries::Single(trace(metric.label(), ys, Fill::None))
        }
    }
}

fn trace(name: &str, values: Vec<Option<f64>>, fill: Fill) -> Trace {
    let labels = values.iter().map(|&v| format_length_or(v)).collect();
    Trace {
        name: name.to_string(),
        values,
        labels,
        fill,
    }
}

/// x-axis for a sweep axis; aperture is log-scaled with every third f-stop as a tick
#[must_use]
pub fn x_axis_descriptor(axis: SweepAxis) -> AxisDescriptor {
    match axis {
        SweepAxis::Aperture => AxisDescriptor::log("aperture", f_stop_ticks()),
        SweepAxis::Focal => AxisDescriptor::linear("focal length [mm]"),
        SweepAxis::Subject => AxisDescriptor::linear("subject distance [m]"),
    }
}

/// y-axis for a metric, before clamping
#[must_use]
pub fn y_axis_descriptor(metric: OutputMetric) -> AxisDescriptor {
    match metric {
        OutputMetric::Limits => AxisDescriptor::linear("distance [m]")
            .with_range(LIMITS_AXIS_RANGE[0], LIMITS_AXIS_RANGE[1]),
        OutputMetric::Hyperfocal => AxisDescriptor::linear("hyperfocal distance [m]"),
        OutputMetric::Total => AxisDescriptor::linear("total depth of field [m]")
            .with_range(TOTAL_AXIS_RANGE[0], TOTAL_AXIS_RANGE[1]),
    }
}
