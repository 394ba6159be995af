//! Tests for the sweep builder
//!
//! These tests verify that:
//! - Ranged domains include both bounds exactly once
//! - Focal domains are scaled by the crop factor
//! - Limits sweeps split into a filled near/far band
//! - Bounded y-axes clamp down to the largest finite value of the upper trace
//! - Invalid selections fail fast

use crate::analysis::{
    AxisDescriptor, AxisScale, Fill, FocalRange, LIMITS_AXIS_RANGE, MAX_RANGE_POINTS,
    SubjectRange, SweepAxis, SweepConfig, SweepSeries, TOTAL_AXIS_RANGE, Trace, build_sweep,
    clamp_axis_max, inclusive_range, sweep_domain,
};
use crate::error::{ParseError, SweepError};
use crate::model::{F_STOPS, OutputMetric, ParameterSet, SENSORS};

fn full_frame(focal_mm: f64, aperture: f64, subject_m: f64) -> ParameterSet {
    ParameterSet::for_sensor(focal_mm, aperture, subject_m, &SENSORS[0])
}

fn assert_strictly_increasing(values: &[f64]) {
    for pair in values.windows(2) {
        assert!(pair[1] > pair[0], "{} !> {}", pair[1], pair[0]);
    }
}

// ============================================================================
// Inclusive ranges
// ============================================================================

#[test]
fn test_inclusive_range_hits_both_ends() {
    let values = inclusive_range(1.0, 5.0, 0.05).unwrap();

    assert_eq!(values.len(), 81);
    assert_eq!(values[0], 1.0);
    assert_eq!(*values.last().unwrap(), 5.0);
    for pair in values.windows(2) {
        assert!((pair[1] - pair[0] - 0.05).abs() < 1e-9);
    }
}

#[test]
fn test_inclusive_range_appends_uneven_end() {
    let values = inclusive_range(0.0, 1.0, 0.3).unwrap();

    assert_eq!(values.len(), 5);
    assert!((values[3] - 0.9).abs() < 1e-12);
    assert_eq!(values[4], 1.0);
    assert_strictly_increasing(&values);
}

#[test]
fn test_inclusive_range_never_duplicates_end() {
    // 0.1 + 9 * 0.1 lands a hair away from 1.0
    let values = inclusive_range(0.1, 1.0, 0.1).unwrap();

    assert_eq!(values.len(), 10);
    assert_eq!(values.iter().filter(|&&v| (v - 1.0).abs() < 1e-6).count(), 1);
    assert_strictly_increasing(&values);
}

#[test]
fn test_inclusive_range_single_point() {
    assert_eq!(inclusive_range(3.0, 3.0, 1.0).unwrap(), vec![3.0]);
}

#[test]
fn test_inclusive_range_rejects_bad_input() {
    assert!(matches!(
        inclusive_range(1.0, 5.0, 0.0),
        Err(SweepError::InvalidRange { .. })
    ));
    assert!(inclusive_range(5.0, 1.0, 1.0).is_err());
    assert!(inclusive_range(1.0, f64::INFINITY, 1.0).is_err());
}

#[test]
fn test_inclusive_range_rejects_oversized_domains() {
    assert_eq!(
        inclusive_range(0.0, 100.0, 1e-12),
        Err(SweepError::InvalidRange {
            low: 0.0,
            high: 100.0,
            step: 1e-12
        })
    );
    assert!(inclusive_range(0.0, MAX_RANGE_POINTS as f64, 1.0).is_err());

    let largest = inclusive_range(0.0, (MAX_RANGE_POINTS - 1) as f64, 1.0).unwrap();
    assert_eq!(largest.len(), MAX_RANGE_POINTS);
}

#[test]
fn test_subject_presets_are_increasing_and_inclusive() {
    for range in SubjectRange::ALL {
        let preset = range.preset();
        let values = preset.values().unwrap();
        assert_eq!(values[0], preset.low, "{range}");
        assert_eq!(*values.last().unwrap(), preset.high, "{range}");
        assert_strictly_increasing(&values);
    }
    assert_eq!(SubjectRange::SuperFar.preset().values().unwrap().len(), 91);
}

// ============================================================================
// Domains
// ============================================================================

#[test]
fn test_aperture_domain_is_f_stop_catalog() {
    let config = SweepConfig::new(SweepAxis::Aperture, OutputMetric::Total, 1.53);
    assert_eq!(sweep_domain(&config).unwrap(), F_STOPS.to_vec());
}

#[test]
fn test_focal_domain_scaled_by_crop_factor() {
    let config = SweepConfig::new(SweepAxis::Focal, OutputMetric::Total, SENSORS[1].crop_factor);
    let values = sweep_domain(&config).unwrap();

    // 24 / 1.53 and 100 / 1.53 rounded
    assert_eq!(values.first(), Some(&16.0));
    assert_eq!(values.last(), Some(&65.0));
    assert_eq!(values.len(), 50);
    assert!(values.iter().all(|v| v.fract() == 0.0));
}

#[test]
fn test_focal_domain_full_frame_presets() {
    let wide = SweepConfig::new(SweepAxis::Focal, OutputMetric::Total, 1.0)
        .with_focal_range(FocalRange::Wide);
    let values = sweep_domain(&wide).unwrap();
    assert_eq!((values[0], values[values.len() - 1]), (10.0, 28.0));
    assert_eq!(values.len(), 19);
}

#[test]
fn test_subject_domain_ignores_crop_factor() {
    let config = SweepConfig::new(SweepAxis::Subject, OutputMetric::Total, 5.64)
        .with_subject_range(SubjectRange::Far);
    let values = sweep_domain(&config).unwrap();
    assert_eq!(values.first(), Some(&5.0));
    assert_eq!(values.last(), Some(&10.0));
}

// ============================================================================
// Charts
// ============================================================================

#[test]
fn test_aperture_total_chart() {
    let params = full_frame(50.0, 8.0, 2.0);
    let config = SweepConfig::new(SweepAxis::Aperture, OutputMetric::Total, 1.0);
    let chart = build_sweep(&params, &config).unwrap();

    assert_eq!(chart.len(), F_STOPS.len());
    assert_eq!(chart.x_axis.scale, AxisScale::Log);
    assert_eq!(chart.x_axis.title, "aperture");
    assert_eq!(
        chart.x_axis.tick_values.as_deref(),
        Some(&[1.0, 1.4, 2.0, 2.8, 4.0, 5.6, 8.0, 11.0, 16.0, 22.0, 32.0][..])
    );

    let SweepSeries::Single(trace) = &chart.series else {
        panic!("expected a single trace");
    };
    assert_eq!(trace.values.len(), chart.len());
    assert_eq!(trace.labels.len(), chart.len());
    assert_eq!(trace.values[18], params.total());

    // Largest total (at f/32) is well below the 100m ceiling
    let max = chart.finite_y_max().unwrap();
    assert!(max < TOTAL_AXIS_RANGE[1]);
    assert_eq!(chart.y_axis.range, Some([0.0, max]));
    assert_eq!(trace.values.last().copied().flatten(), Some(max));
}

#[test]
fn test_limits_chart_is_a_band_with_infinite_far() {
    let params = full_frame(24.0, 8.0, 10.0);
    let config = SweepConfig::new(SweepAxis::Focal, OutputMetric::Limits, 1.0)
        .with_focal_range(FocalRange::Wide);
    let chart = build_sweep(&params, &config).unwrap();

    let SweepSeries::Band { near, far } = &chart.series else {
        panic!("expected a near/far band");
    };
    assert_eq!(near.values.len(), chart.len());
    assert_eq!(far.values.len(), chart.len());
    assert!(far.values.iter().all(|v| v.is_some_and(f64::is_infinite)));
    assert!(far.labels.iter().all(|l| l == "∞"));

    // Only the far trace bounds the axis, so the band keeps its height
    assert_eq!(chart.y_axis.range, Some(LIMITS_AXIS_RANGE));
    let near_max = near.values.iter().copied().flatten().fold(0.0, f64::max);
    let [_, top] = LIMITS_AXIS_RANGE;
    let pinned = far.plot_points(&chart.x, chart.x_axis.scale, chart.y_axis.scale, top);
    assert!(pinned.iter().all(|&(_, y)| y == top && y > near_max));
}

#[test]
fn test_limits_clamp_follows_finite_far_limits() {
    // Close subjects keep every far limit finite
    let params = full_frame(50.0, 4.0, 1.0);
    let config = SweepConfig::new(SweepAxis::Subject, OutputMetric::Limits, 1.0)
        .with_subject_range(SubjectRange::Near);
    let chart = build_sweep(&params, &config).unwrap();

    let SweepSeries::Band { far, .. } = &chart.series else {
        panic!("expected a near/far band");
    };
    let far_max = far.values.iter().copied().flatten().fold(0.0, f64::max);
    assert!(far.values.iter().all(|v| v.is_some_and(f64::is_finite)));
    assert_eq!(chart.y_axis.range, Some([0.0, far_max]));
    assert_eq!(chart.series.upper(), far);
}

#[test]
fn test_limits_band_keeps_height_for_super_far_subjects() {
    let params = full_frame(24.0, 8.0, 10.0);
    let config = SweepConfig::new(SweepAxis::Subject, OutputMetric::Limits, 1.0)
        .with_subject_range(SubjectRange::SuperFar);
    let chart = build_sweep(&params, &config).unwrap();

    let SweepSeries::Band { near, far } = &chart.series else {
        panic!("expected a near/far band");
    };
    assert!(far.values.iter().all(|v| v.is_some_and(f64::is_infinite)));
    assert_eq!(chart.y_axis.range, Some(LIMITS_AXIS_RANGE));

    let [_, top] = LIMITS_AXIS_RANGE;
    let near_last = near.values.last().copied().flatten().unwrap();
    let far_points = far.plot_points(&chart.x, chart.x_axis.scale, chart.y_axis.scale, top);
    assert_eq!(far_points.last(), Some(&(100.0, top)));
    assert!(near_last < top);
}

#[test]
fn test_limits_band_brackets_subject() {
    let params = full_frame(50.0, 4.0, 3.0);
    let config = SweepConfig::new(SweepAxis::Aperture, OutputMetric::Limits, 1.0);
    let chart = build_sweep(&params, &config).unwrap();

    let SweepSeries::Band { near, far } = &chart.series else {
        panic!("expected a near/far band");
    };
    for (n, f) in near.values.iter().zip(&far.values) {
        let (n, f) = (n.unwrap(), f.unwrap());
        assert!(n < 3.0 && f > 3.0);
    }
}

#[test]
fn test_plot_points_pin_infinity_and_skip_undefined() {
    let trace = Trace {
        name: "far limit".into(),
        values: vec![Some(2.0), Some(f64::INFINITY), None, Some(-1.0)],
        labels: vec![String::new(); 4],
        fill: Fill::ToNextY,
    };
    let x = [1.0, 10.0, 100.0, 1000.0];

    let linear = trace.plot_points(&x, AxisScale::Linear, AxisScale::Linear, 50.0);
    assert_eq!(linear, vec![(1.0, 2.0), (10.0, 50.0), (1000.0, -1.0)]);

    // Non-positive values have no place on a log axis
    let log = trace.plot_points(&x, AxisScale::Log, AxisScale::Log, 100.0);
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].0, 0.0);
    assert_eq!(log[1], (1.0, 2.0));
}

#[test]
fn test_hyperfocal_chart_has_no_range() {
    let params = full_frame(50.0, 8.0, 2.0);
    let config = SweepConfig::new(SweepAxis::Focal, OutputMetric::Hyperfocal, 1.0)
        .with_focal_range(FocalRange::Tele);
    let chart = build_sweep(&params, &config).unwrap();

    assert_eq!(chart.y_axis.range, None);
    assert_eq!(chart.y_axis.title, "hyperfocal distance [m]");
    assert_eq!(chart.x_axis.title, "focal length [mm]");
    assert_eq!(chart.x_axis.scale, AxisScale::Linear);
}

#[test]
fn test_total_chart_with_undefined_points() {
    // Subjects from 10cm with a 200mm lens sit inside the focal length at first
    let params = full_frame(200.0, 8.0, 1.0);
    let config = SweepConfig::new(SweepAxis::Subject, OutputMetric::Total, 1.0)
        .with_subject_range(SubjectRange::Near);
    let chart = build_sweep(&params, &config).unwrap();

    let SweepSeries::Single(trace) = &chart.series else {
        panic!("expected a single trace");
    };
    assert_eq!(trace.values[0], None);
    assert_eq!(trace.labels[0], "n/a");
    assert!(trace.values.last().unwrap().is_some());
}

#[test]
fn test_build_sweep_leaves_params_untouched() {
    let params = full_frame(35.0, 5.6, 4.0);
    let snapshot = params;
    let config = SweepConfig::new(SweepAxis::Aperture, OutputMetric::Limits, 1.0);

    let first = build_sweep(&params, &config).unwrap();
    let second = build_sweep(&params, &config).unwrap();

    assert_eq!(params, snapshot);
    assert_eq!(first, second);
}

#[test]
fn test_hyperfocal_against_subject_rejected() {
    let params = full_frame(50.0, 8.0, 2.0);
    let config = SweepConfig::new(SweepAxis::Subject, OutputMetric::Hyperfocal, 1.0);

    assert_eq!(
        build_sweep(&params, &config),
        Err(SweepError::InvalidCombination {
            axis: SweepAxis::Subject,
            metric: OutputMetric::Hyperfocal,
        })
    );
}

#[test]
fn test_invalid_crop_factor_rejected() {
    let params = full_frame(50.0, 8.0, 2.0);
    for crop in [0.0, -1.0, f64::NAN] {
        let config = SweepConfig::new(SweepAxis::Focal, OutputMetric::Total, crop);
        assert!(matches!(
            build_sweep(&params, &config),
            Err(SweepError::InvalidCropFactor(_))
        ));
    }
}

// ============================================================================
// Axis clamping
// ============================================================================

#[test]
fn test_clamp_to_finite_max() {
    let values = [Some(12.0), Some(37.4), Some(f64::INFINITY), None];
    assert_eq!(clamp_axis_max(100.0, values), 37.4);
}

#[test]
fn test_clamp_keeps_default_without_finite_values() {
    let values = [Some(f64::INFINITY), None, Some(f64::NAN)];
    assert_eq!(clamp_axis_max(100.0, values), 100.0);
    assert_eq!(clamp_axis_max(100.0, std::iter::empty()), 100.0);
}

#[test]
fn test_clamp_never_raises_bound() {
    assert_eq!(clamp_axis_max(100.0, [Some(250.0), Some(30.0)]), 100.0);
}

#[test]
fn test_descriptor_clamp_only_touches_ranged_axes() {
    let mut ranged = AxisDescriptor::linear("distance [m]").with_range(0.0, 300.0);
    ranged.clamp_max([Some(42.0)]);
    assert_eq!(ranged.range, Some([0.0, 42.0]));

    let mut open = AxisDescriptor::linear("hyperfocal distance [m]");
    open.clamp_max([Some(42.0)]);
    assert_eq!(open.range, None);
}

// ============================================================================
// Names
// ============================================================================

#[test]
fn test_selection_names_parse() {
    assert_eq!("aperture".parse::<SweepAxis>(), Ok(SweepAxis::Aperture));
    assert_eq!("focalLengthMm".parse::<SweepAxis>(), Ok(SweepAxis::Focal));
    assert_eq!("subject".parse::<SweepAxis>(), Ok(SweepAxis::Subject));
    assert_eq!("tele".parse::<FocalRange>(), Ok(FocalRange::Tele));
    assert_eq!("super-far".parse::<SubjectRange>(), Ok(SubjectRange::SuperFar));
    assert_eq!(
        "macro".parse::<SubjectRange>(),
        Err(ParseError::UnknownSubjectRange("macro".to_string()))
    );
}

#[test]
fn test_chart_serializes_infinity_as_null() {
    let params = full_frame(24.0, 8.0, 10.0);
    let config = SweepConfig::new(SweepAxis::Aperture, OutputMetric::Limits, 1.0);
    let chart = build_sweep(&params, &config).unwrap();

    let json = serde_json::to_value(&chart).unwrap();
    assert_eq!(json["series"]["kind"], "band");
    assert!(json["series"]["far"]["values"][30].is_null());
    assert_eq!(json["x_axis"]["scale"], "log");
}
