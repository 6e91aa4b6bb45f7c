//! Label formatting for axes and tooltips.

use chrono::Month;

/// Degree-Celsius unit marker appended to temperature labels.
const DEGREES_C: char = '\u{2103}';

/// Full English month name for a zero-based month index (0 = January).
pub fn month_name(month_index: u32) -> &'static str {
    u8::try_from(month_index + 1)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("")
}

/// Absolute temperature rounded to one decimal, e.g. "9.3℃".
pub fn format_temperature(temperature: f64) -> String {
    format!("{:.1}{}", temperature, DEGREES_C)
}

/// Signed variance rounded to one decimal with an explicit leading sign,
/// e.g. "+0.6℃" or "-2.2℃".
pub fn format_variance(variance: f64) -> String {
    format!("{:+.1}{}", variance, DEGREES_C)
}

/// Legend tick label: breakpoint temperature to one decimal.
pub fn format_breakpoint(value: f64) -> String {
    format!("{:.1}", value)
}
