/// Standard f-stop values in ascending order
pub const F_STOPS: [f64; 31] = [
    1.0, 1.1, 1.2, 1.4, 1.6, 1.8, 2.0, 2.2, 2.5, 2.8, 3.2, 3.5, 4.0, 4.5, 5.0, 5.6, 6.3, 7.1, 8.0,
    9.0, 10.0, 11.0, 13.0, 14.0, 16.0, 18.0, 20.0, 22.0, 25.0, 29.0, 32.0,
];

/// Every n-th f-stop is used as a tick on aperture axes
pub const F_STOP_TICK_STRIDE: usize = 3;

/// Index of an exact catalog value
#[must_use]
pub fn f_stop_index(aperture: f64) -> Option<usize> {
    F_STOPS.iter().position(|&stop| stop == aperture)
}

/// Index of the catalog value closest to `aperture`
#[must_use]
pub fn nearest_f_stop_index(aperture: f64) -> usize {
    F_STOPS
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            (*a - aperture)
                .abs()
                .total_cmp(&(*b - aperture).abs())
        })
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Catalog values shown as ticks on a log-scale aperture axis
#[must_use]
pub fn f_stop_ticks() -> Vec<f64> {
    F_STOPS
        .iter()
        .copied()
        .step_by(F_STOP_TICK_STRIDE)
        .collect()
}
