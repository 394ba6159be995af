//! Closed-form depth-of-field formulas.
//!
//! All distances are in meters unless a name says otherwise. The functions are
//! pure; callers are expected to pass positive, finite inputs.

use serde::{Deserialize, Serialize};

/// Sensor diagonal divided by this gives the circle of confusion
pub const COC_DIVISOR: f64 = 1500.0;

/// Near and far limits of acceptable sharpness, in meters.
///
/// `far` is `f64::INFINITY` when everything beyond `near` is in focus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DofLimits {
    pub near: f64,
    pub far: f64,
}

impl DofLimits {
    /// Whether the far limit reaches infinity
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.far.is_infinite()
    }

    /// Total depth of field, `None` for degenerate limits
    #[must_use]
    pub fn total(&self) -> Option<f64> {
        total_dof(self.near, self.far)
    }
}

/// Convert millimeters to meters
#[inline]
#[must_use]
pub fn mm_to_m(mm: f64) -> f64 {
    mm / 1000.0
}

/// Circle of confusion in millimeters for a sensor diagonal in millimeters
#[must_use]
pub fn circle_of_confusion(sensor_diagonal_mm: f64) -> f64 {
    sensor_diagonal_mm / COC_DIVISOR
}

/// Hyperfocal distance `H = f + f² / (N · c)`.
#[must_use]
pub fn hyperfocal_distance(focal_m: f64, aperture: f64, coc_m: f64) -> f64 {
    focal_m + focal_m.powi(2) / (aperture * coc_m)
}

/// Near and far sharpness limits for a subject distance and hyperfocal distance.
///
/// The far limit is infinite once `subject - focal` exceeds the hyperfocal
/// distance.
#[must_use]
pub fn dof_limits(focal_m: f64, subject_m: f64, hyperfocal_m: f64) -> DofLimits {
    let hs = hyperfocal_m * subject_m;
    let sf = subject_m - focal_m;

    let near = hs / (hyperfocal_m + sf);
    let far = if hyperfocal_m < sf {
        f64::INFINITY
    } else {
        hs / (hyperfocal_m - sf)
    };

    DofLimits { near, far }
}

/// Total depth of field `far - near`.
///
/// Returns `None` when `near > far`, which marks a degenerate configuration.
/// A zero-width range is `Some(0.0)`.
#[must_use]
pub fn total_dof(near_m: f64, far_m: f64) -> Option<f64> {
    if near_m > far_m {
        return None;
    }
    Some(far_m - near_m)
}
