//! Renderer-agnostic chart description produced by a sweep.

use serde::{Deserialize, Serialize};

/// Axis scaling mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    #[default]
    Linear,
    /// Base-10 logarithmic; only positive values are representable
    Log,
}

impl AxisScale {
    /// Transform a data value into plot space
    #[must_use]
    pub fn to_plot(self, value: f64) -> Option<f64> {
        match self {
            Self::Linear => value.is_finite().then_some(value),
            Self::Log => (value.is_finite() && value > 0.0)
                .then(|| value.log10())
                .filter(|v| v.is_finite()),
        }
    }
}

/// Title, scale and bounds of one chart axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisDescriptor {
    pub title: String,
    pub scale: AxisScale,
    /// Explicit tick positions in data space
    pub tick_values: Option<Vec<f64>>,
    /// `[min, max]` in data space; `None` lets the renderer auto-fit
    pub range: Option<[f64; 2]>,
    /// Interactive zooming/panning disabled
    pub fixed_range: bool,
}

impl AxisDescriptor {
    pub fn linear(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            scale: AxisScale::Linear,
            tick_values: None,
            range: None,
            fixed_range: true,
        }
    }

    pub fn log(title: impl Into<String>, tick_values: Vec<f64>) -> Self {
        Self {
            title: title.into(),
            scale: AxisScale::Log,
            tick_values: Some(tick_values),
            range: None,
            fixed_range: true,
        }
    }

    #[must_use]
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some([min, max]);
        self
    }

    /// Lower the upper bound to the largest finite value, if any.
    ///
    /// The bound never moves up, and axes without a range are left alone.
    pub fn clamp_max<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        if let Some([_, max]) = self.range.as_mut() {
            *max = clamp_axis_max(*max, values);
        }
    }
}

/// `min(default_max, largest finite value)`, or `default_max` with no finite value
#[must_use]
pub fn clamp_axis_max<I>(default_max: f64, values: I) -> f64
where
    I: IntoIterator<Item = Option<f64>>,
{
    values
        .into_iter()
        .flatten()
        .filter(|v| v.is_finite())
        .reduce(f64::max)
        .map_or(default_max, |max| max.min(default_max))
}

/// How the area under a trace is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Fill {
    #[default]
    None,
    /// Fill down to the previous trace
    ToNextY,
}

/// One line on the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub name: String,
    /// y value per x point; `None` where the metric is undefined
    pub values: Vec<Option<f64>>,
    /// Point labels for hover text
    pub labels: Vec<String>,
    pub fill: Fill,
}

impl Trace {
    /// `(x, y)` pairs transformed into plot space, skipping points that
    /// cannot be drawn. Unbounded values are pinned to `y_ceiling`.
    #[must_use]
    pub fn plot_points(
        &self,
        x: &[f64],
        x_scale: AxisScale,
        y_scale: AxisScale,
        y_ceiling: f64,
    ) -> Vec<(f64, f64)> {
        x.iter()
            .zip(&self.values)
            .filter_map(|(&px, py)| {
                let py = match (*py)? {
                    v if v == f64::INFINITY => y_ceiling,
                    v => v,
                };
                Some((x_scale.to_plot(px)?, y_scale.to_plot(py)?))
            })
            .collect()
    }
}

/// Trace layout of a sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SweepSeries {
    /// One value per point
    Single(Trace),
    /// Near and far limits with the band between them filled
    Band { near: Trace, far: Trace },
}

impl SweepSeries {
    /// Traces in drawing order
    #[must_use]
    pub fn traces(&self) -> Vec<&Trace> {
        match self {
            Self::Single(trace) => vec![trace],
            Self::Band { near, far } => vec![near, far],
        }
    }

    /// The trace that bounds the chart from above: `far` for a band
    #[must_use]
    pub fn upper(&self) -> &Trace {
        match self {
            Self::Single(trace) => trace,
            Self::Band { far, .. } => far,
        }
    }
}

/// Complete chart for one sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepChart {
    /// Swept input values, strictly increasing
    pub x: Vec<f64>,
    pub series: SweepSeries,
    pub x_axis: AxisDescriptor,
    pub y_axis: AxisDescriptor,
}

impl SweepChart {
    /// Number of points on the x-axis
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Largest finite y value across all traces
    #[must_use]
    pub fn finite_y_max(&self) -> Option<f64> {
        self.series
            .traces()
            .into_iter()
            .flat_map(|t| t.values.iter().copied().flatten())
            .filter(|v| v.is_finite())
            .reduce(f64::max)
    }
}
