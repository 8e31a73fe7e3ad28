//! Human-readable byte formatting.

/// Fractional digits used when no explicit precision is given.
pub const DEFAULT_DECIMALS: usize = 2;

const UNITS: [&str; 9] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format a byte count with the default precision, e.g. `1536` -> `"1.5 KB"`.
pub fn format_bytes(bytes: u64) -> String {
    format_bytes_with(bytes as f64, DEFAULT_DECIMALS)
}

/// Format a byte count at the given precision.
///
/// Returns `"n/a"` for non-finite or negative input and `"0 Bytes"` for zero.
/// Otherwise the value is scaled into the largest 1024-based unit below it,
/// rounded half-away-from-zero to `decimals` fractional digits, and printed
/// with trailing zeros stripped.
pub fn format_bytes_with(bytes: f64, decimals: usize) -> String {
    if !bytes.is_finite() || bytes < 0.0 {
        return "n/a".to_owned();
    }
    if bytes == 0.0 {
        return "0 Bytes".to_owned();
    }

    let exponent = (bytes.ln() / 1024f64.ln()).floor() as i32;
    let exponent = exponent.clamp(0, UNITS.len() as i32 - 1);
    let value = bytes / 1024f64.powi(exponent);

    format!("{} {}", trim_number(value, decimals), UNITS[exponent as usize])
}

/// Round to `decimals` fractional digits (half away from zero) and drop the
/// trailing zeros a fixed-width rendering would keep, so `1.50` reads `1.5`
/// and `1.00` reads `1`.
fn trim_number(value: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    let mut text = format!("{rounded:.decimals$}");
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    text
}
