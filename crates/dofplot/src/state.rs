//! UI state: the selections behind the controls and the current chart.
//!
//! Every change rebuilds the sweep from scratch; the previous chart is
//! dropped, never patched.

use dofplot_core::analysis::{
    FocalRange, RangeSelection, SubjectRange, SweepAxis, SweepChart, SweepConfig, build_sweep,
};
use dofplot_core::error::{ParseError, SweepError};
use dofplot_core::format::{format_length, format_length_or};
use dofplot_core::model::{
    F_STOPS, OutputMetric, ParameterSet, SENSORS, Sensor, nearest_f_stop_index, sensor_index,
};

use crate::config::StartupConfig;

/// Longest full-frame-equivalent focal length the UI offers, in mm
pub const MAX_FOCAL_EQUIV_MM: f64 = 300.0;
/// Slider bounds for log10 of the equivalent focal length (10mm to 300mm)
pub const LOG_FOCAL_BOUNDS: (f64, f64) = (1.0, 2.477_121_254_719_662);
/// Slider bounds for log10 of the subject distance (10cm to 100m)
pub const LOG_SUBJECT_BOUNDS: (f64, f64) = (-1.0, 2.0);
/// Slider increment for both logarithmic controls
pub const LOG_STEP: f64 = 0.05;

const DEFAULT_F_STOP_INDEX: usize = 6;
const DEFAULT_LOG_FOCAL_EQUIV: f64 = 1.7;
const DEFAULT_LOG_SUBJECT: f64 = 0.3;

/// One adjustable control in the side panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    #[default]
    Sensor,
    Aperture,
    FocalLength,
    SubjectDistance,
    Axis,
    Metric,
    FocalRange,
    SubjectRange,
}

impl Control {
    pub const ALL: [Control; 8] = [
        Self::Sensor,
        Self::Aperture,
        Self::FocalLength,
        Self::SubjectDistance,
        Self::Axis,
        Self::Metric,
        Self::FocalRange,
        Self::SubjectRange,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sensor => "Sensor",
            Self::Aperture => "Aperture",
            Self::FocalLength => "Focal length",
            Self::SubjectDistance => "Subject",
            Self::Axis => "X axis",
            Self::Metric => "Y metric",
            Self::FocalRange => "Focal range",
            Self::SubjectRange => "Subject range",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Step through `items` by `delta`, wrapping at both ends
fn cycle<T: Copy + PartialEq>(items: &[T], current: T, delta: i32) -> T {
    let len = items.len() as i32;
    let pos = items.iter().position(|&i| i == current).unwrap_or(0) as i32;
    items[(pos + delta).rem_euclid(len) as usize]
}

/// Step an index by `delta`, clamped to `0..len`
fn step_index(index: usize, delta: i32, len: usize) -> usize {
    (index as i64 + delta as i64).clamp(0, len as i64 - 1) as usize
}

fn step_log(value: f64, delta: i32, (low, high): (f64, f64)) -> f64 {
    // Snap to the step grid so repeated presses do not drift
    let stepped = ((value / LOG_STEP).round() + delta as f64) * LOG_STEP;
    stepped.clamp(low, high)
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub sensor_index: usize,
    pub f_stop_index: usize,
    pub log_focal_equiv: f64,
    pub log_subject: f64,
    pub axis: SweepAxis,
    pub metric: OutputMetric,
    pub ranges: RangeSelection,
    pub selected: Control,
    pub chart: Option<SweepChart>,
    pub error_message: Option<String>,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        let mut state = Self {
            sensor_index: 0,
            f_stop_index: DEFAULT_F_STOP_INDEX,
            log_focal_equiv: DEFAULT_LOG_FOCAL_EQUIV,
            log_subject: DEFAULT_LOG_SUBJECT,
            axis: SweepAxis::Aperture,
            metric: OutputMetric::Total,
            ranges: RangeSelection::default(),
            selected: Control::default(),
            chart: None,
            error_message: None,
            exit: false,
        };
        state.replot();
        state
    }
}

impl AppState {
    /// Build the initial state from start-up values
    pub fn from_config(config: &StartupConfig) -> Result<Self, ParseError> {
        let mut state = Self::default();

        if let Some(label) = &config.sensor {
            state.sensor_index = sensor_index(label)?;
        }
        if let Some(aperture) = config.aperture {
            state.f_stop_index = nearest_f_stop_index(aperture);
        }
        if let Some(focal) = config.focal_equiv.filter(|f| *f > 0.0) {
            state.log_focal_equiv = focal.log10().clamp(LOG_FOCAL_BOUNDS.0, LOG_FOCAL_BOUNDS.1);
        }
        if let Some(subject) = config.subject.filter(|s| *s > 0.0) {
            state.log_subject = subject
                .log10()
                .clamp(LOG_SUBJECT_BOUNDS.0, LOG_SUBJECT_BOUNDS.1);
        }
        if let Some(focal_range) = config.focal_range {
            state.ranges.focal = focal_range;
        }
        if let Some(subject_range) = config.subject_range {
            state.ranges.subject = subject_range;
        }
        if let Some(axis) = config.axis {
            state.axis = axis;
        }
        if let Some(metric) = config.metric {
            state.set_metric(metric);
        }

        state.replot();
        Ok(state)
    }

    pub fn sensor(&self) -> &'static Sensor {
        &SENSORS[self.sensor_index.min(SENSORS.len() - 1)]
    }

    /// Full-frame-equivalent focal length in whole millimeters
    pub fn focal_equiv(&self) -> f64 {
        10f64.powf(self.log_focal_equiv).round().min(MAX_FOCAL_EQUIV_MM)
    }

    /// Focal length on the selected sensor in whole millimeters
    pub fn focal(&self) -> f64 {
        self.sensor().actual_focal_mm(self.focal_equiv()).round()
    }

    pub fn aperture(&self) -> f64 {
        F_STOPS[self.f_stop_index.min(F_STOPS.len() - 1)]
    }

    /// Subject distance in meters, rounded to centimeters
    pub fn subject(&self) -> f64 {
        (100.0 * 10f64.powf(self.log_subject)).round() / 100.0
    }

    pub fn params(&self) -> ParameterSet {
        ParameterSet::for_sensor(self.focal(), self.aperture(), self.subject(), self.sensor())
    }

    pub fn sweep_config(&self) -> SweepConfig {
        SweepConfig {
            axis: self.axis,
            metric: self.metric,
            ranges: self.ranges,
            crop_factor: self.sensor().crop_factor,
        }
    }

    /// Build the chart for the current selections
    pub fn build_chart(&self) -> Result<SweepChart, SweepError> {
        build_sweep(&self.params(), &self.sweep_config())
    }

    /// Replace the chart with a fresh sweep
    pub fn replot(&mut self) {
        match self.build_chart() {
            Ok(chart) => {
                tracing::debug!(
                    axis = %self.axis,
                    metric = %self.metric,
                    points = chart.len(),
                    "Replotted"
                );
                self.chart = Some(chart);
                self.error_message = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Sweep failed");
                self.chart = None;
                self.error_message = Some(e.to_string());
            }
        }
    }

    /// Select a metric; hyperfocal cannot vary with subject distance, so the
    /// axis falls back to aperture
    pub fn set_metric(&mut self, metric: OutputMetric) {
        self.metric = metric;
        if !self.axis.supports(metric) {
            tracing::info!(axis = %self.axis, metric = %metric, "Resetting axis to aperture");
            self.axis = SweepAxis::Aperture;
        }
    }

    /// Move the axis selection by `delta`, skipping axes the metric cannot vary along
    fn step_axis(&mut self, delta: i32) {
        let mut axis = cycle(&SweepAxis::ALL, self.axis, delta);
        while !axis.supports(self.metric) {
            axis = cycle(&SweepAxis::ALL, axis, delta.signum());
        }
        self.axis = axis;
    }

    /// Adjust the value of a control by `delta` steps and replot
    pub fn adjust(&mut self, control: Control, delta: i32) {
        match control {
            Control::Sensor => {
                self.sensor_index = step_index(self.sensor_index, delta, SENSORS.len());
            }
            Control::Aperture => {
                self.f_stop_index = step_index(self.f_stop_index, delta, F_STOPS.len());
            }
            Control::FocalLength => {
                self.log_focal_equiv = step_log(self.log_focal_equiv, delta, LOG_FOCAL_BOUNDS);
            }
            Control::SubjectDistance => {
                self.log_subject = step_log(self.log_subject, delta, LOG_SUBJECT_BOUNDS);
            }
            Control::Axis => self.step_axis(delta),
            Control::Metric => {
                let metric = cycle(&OutputMetric::ALL, self.metric, delta);
                self.set_metric(metric);
            }
            Control::FocalRange => {
                self.ranges.focal = cycle(&FocalRange::ALL, self.ranges.focal, delta);
            }
            Control::SubjectRange => {
                self.ranges.subject = cycle(&SubjectRange::ALL, self.ranges.subject, delta);
            }
        }
        self.replot();
    }

    /// Display text for a control's current value
    pub fn value_text(&self, control: Control) -> String {
        match control {
            Control::Sensor => self.sensor().label.to_string(),
            Control::Aperture => format!("f/{}", self.aperture()),
            Control::FocalLength => {
                format!("{} mm ({} mm eq.)", self.focal(), self.focal_equiv())
            }
            Control::SubjectDistance => format_length(self.subject()),
            Control::Axis => self.axis.label().to_string(),
            Control::Metric => self.metric.label().to_string(),
            Control::FocalRange => self.ranges.focal.name().to_string(),
            Control::SubjectRange => self.ranges.subject.name().to_string(),
        }
    }

    /// Read-out rows for the current parameter set
    pub fn readout(&self) -> Vec<(&'static str, String)> {
        let params = self.params();
        let limits = params.limits();
        vec![
            ("Focal", format!("{} mm", params.focal_length_mm())),
            ("Hyperfocal", format_length(params.hyperfocal())),
            ("Near limit", format_length_or(Some(limits.near))),
            ("Far limit", format_length_or(Some(limits.far))),
            ("Total DoF", format_length_or(params.total())),
            (
                "CoC",
                format!("{:.4} mm", params.circle_of_confusion_mm()),
            ),
        ]
    }
}
