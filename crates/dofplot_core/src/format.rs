//! Compact length labels for chart points and read-outs.

/// Maximum number of characters kept for the numeric part of a label
const MAX_LABEL_DIGITS: usize = 4;

/// Round to a number of significant digits
#[must_use]
pub fn round_significant(number: f64, digits: i32) -> f64 {
    if number == 0.0 || !number.is_finite() {
        return number;
    }
    let all_digits = number.abs().log10().floor() as i32 + 1;
    let factor = 10f64.powi(digits - all_digits);
    (factor * number).round() / factor
}

/// Format a distance in meters as cm, m or km.
///
/// - `>= 1000` m: whole kilometers
/// - `>= 1` m: three significant digits
/// - otherwise: whole centimeters
///
/// The number is cut to at most four characters. Non-finite input is not a
/// length; callers filter it out before formatting.
#[must_use]
pub fn format_length(meters: f64) -> String {
    let (rounded, unit) = if meters >= 1000.0 {
        ((meters / 1000.0).round(), "km")
    } else if meters >= 1.0 {
        (round_significant(meters, 3), "m")
    } else {
        ((meters * 100.0).round(), "cm")
    };

    let number: String = rounded.to_string().chars().take(MAX_LABEL_DIGITS).collect();
    format!("{number} {unit}")
}

/// Label for a value that may be infinite or undefined
#[must_use]
pub fn format_length_or(meters: Option<f64>) -> String {
    match meters {
        Some(m) if m.is_finite() => format_length(m),
        Some(m) if m.is_infinite() && m > 0.0 => "∞".to_string(),
        _ => "n/a".to_string(),
    }
}
