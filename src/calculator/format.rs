//! Rendering evaluation results back into buffer text.

/// Fractional digits kept when no profile overrides it
pub const DEFAULT_PRECISION: usize = 10;

/// Upper bound for the configurable precision
pub const MAX_PRECISION: usize = 15;

/// Integral values at or above this magnitude go through the decimal path
const INTEGER_DISPLAY_LIMIT: f64 = 1e15;

/// Format a finite result for the display.
///
/// Integral values print without a fractional part. Everything else keeps
/// at most `precision` fractional digits with trailing zeros trimmed. The
/// output is always valid evaluator input.
pub fn format_result(value: f64, precision: usize) -> String {
    if value.fract() == 0.0 && value.abs() < INTEGER_DISPLAY_LIMIT {
        return format!("{}", value as i64);
    }

    let precision = precision.min(MAX_PRECISION);
    let formatted = format!("{:.*}", precision, value);
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };

    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
