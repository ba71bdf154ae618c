use std::fmt;

/// Unit of every volume figure in the snapshot (100 million CNY)
pub const VOLUME_UNIT: &str = "亿元";
/// Unit of bucketed axis labels (10,000 × 100 million CNY)
pub const AXIS_SCALE_UNIT: &str = "万亿";
/// Rendered in place of a missing or `NaN` value
pub const PLACEHOLDER: &str = "--";

const AXIS_SCALE_THRESHOLD: f64 = 10_000.0;

/// Thousands-grouped number with at most two fractional digits.
///
/// - `1234567.891` -> `1,234,567.89`
/// - `250.0` -> `250`
/// - `NaN` -> `--`, `±inf` -> `∞` / `-∞`
pub fn format_magnitude(value: f64) -> String {
    if value.is_nan() {
        return PLACEHOLDER.to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞".to_string() } else { "-∞".to_string() };
    }

    let rounded = format!("{:.2}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');
    let is_zero = int_part == "0" && frac_part.is_empty();

    let mut out = String::with_capacity(rounded.len() + int_part.len() / 3 + 1);
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    for (idx, digit) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Volume figure with its unit, e.g. `12,345.6亿元`
pub fn format_volume(value: f64) -> String {
    format!("{}{}", format_magnitude(value), VOLUME_UNIT)
}

/// Percentage with exactly two fractional digits; `+` only when `value > 0`.
///
/// Non-finite input renders as `--%`, `+∞%` or `-∞%`.
pub fn format_signed_percent(value: f64) -> String {
    if value.is_nan() {
        return format!("{PLACEHOLDER}%");
    }
    if value.is_infinite() {
        return if value > 0.0 { "+∞%".to_string() } else { "-∞%".to_string() };
    }
    // Collapse -0.0 so zero never carries a sign
    let value = if value == 0.0 { 0.0 } else { value };
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{sign}{value:.2}%")
}

/// Index level with two fractional digits
pub fn format_index(value: f64) -> String {
    format!("{value:.2}")
}

/// Value-axis tick label: either bucketed text or the raw number
#[derive(Debug, Clone, PartialEq)]
pub enum AxisLabel {
    Scaled(String),
    Raw(f64),
}

impl fmt::Display for AxisLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisLabel::Scaled(text) => f.write_str(text),
            AxisLabel::Raw(value) => write!(f, "{value}"),
        }
    }
}

/// `n >= 10000` becomes `n / 10000` with one decimal and the `万亿` suffix;
/// anything smaller is returned untouched.
pub fn format_axis_scale(value: f64) -> AxisLabel {
    if value >= AXIS_SCALE_THRESHOLD {
        AxisLabel::Scaled(format!("{:.1}{}", value / AXIS_SCALE_THRESHOLD, AXIS_SCALE_UNIT))
    } else {
        AxisLabel::Raw(value)
    }
}
