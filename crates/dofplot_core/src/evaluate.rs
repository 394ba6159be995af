//! Axis binding: evaluate one metric while a single input varies.
//!
//! A [`BoundMetric`] owns a copy of its base [`ParameterSet`], so every call
//! builds a fresh set from that copy. Calls never observe each other and can
//! run in any order or on any thread.

use crate::model::{InputField, MetricValue, OutputMetric, ParameterSet};

/// A metric bound to one varying input field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundMetric {
    base: ParameterSet,
    field: InputField,
    metric: OutputMetric,
}

impl BoundMetric {
    pub fn field(&self) -> InputField {
        self.field
    }

    pub fn metric(&self) -> OutputMetric {
        self.metric
    }

    /// The parameter set every evaluation starts from
    pub fn base(&self) -> &ParameterSet {
        &self.base
    }

    /// Evaluate the metric with the bound field set to `value`
    #[must_use]
    pub fn evaluate(&self, value: f64) -> MetricValue {
        self.base.with(self.field, value).metric(self.metric)
    }

    /// Convert into a plain closure
    pub fn into_fn(self) -> impl Fn(f64) -> MetricValue + Send + Sync + Copy {
        move |value| self.evaluate(value)
    }
}

impl ParameterSet {
    /// Bind `metric` to vary with `field`, holding every other field fixed.
    #[must_use]
    pub fn bind(&self, field: InputField, metric: OutputMetric) -> BoundMetric {
        BoundMetric {
            base: *self,
            field,
            metric,
        }
    }
}
