//! Numeric helpers shared by the engine and the memory register

/// Default number of decimal places kept in a result
pub const DEFAULT_DECIMAL_PLACES: u32 = 10;

/// Parses an operand buffer into a finite number
///
/// A lone sign or decimal point holds no number and yields `None`.
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Rounds a result to `places` decimal places, half up
///
/// The epsilon nudge absorbs binary artifacts such as `0.1 + 0.2`.
#[must_use]
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places.min(15) as i32);
    let scaled = (value + f64::EPSILON) * factor;
    if !scaled.is_finite() {
        return value;
    }
    (scaled + 0.5).floor() / factor
}

/// Formats a number for the display using the shortest exact representation
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // folds -0 into 0
        return "0".to_string();
    }
    format!("{value}")
}
