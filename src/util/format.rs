/// Formats `value` with `precision` significant digits.
///
/// Follows the conventions of C's `%g`: scientific notation is used when the
/// decimal exponent is below `-4` or at least `precision`, and trailing zeros
/// are removed in both forms. A precision of `0` is treated as `1`.
///
/// `NaN` is rendered as `NaN` and infinities as `inf` / `-inf`.
///
/// ## Example
/// ```
/// use reckon::util::format::format_significant;
///
/// assert_eq!(format_significant(std::f64::consts::PI, 6), "3.14159");
/// assert_eq!(format_significant(1_000_000.0, 6), "1e+06");
/// assert_eq!(format_significant(14.0, 6), "14");
/// assert_eq!(format_significant(f64::NEG_INFINITY, 6), "-inf");
/// ```
#[must_use]
pub fn format_significant(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };
    let digits = i32::try_from(precision).unwrap_or(i32::MAX);

    if exponent < -4 || exponent >= digits {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.unsigned_abs())
    } else {
        let decimals = usize::try_from(digits - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Strips trailing zeros after a decimal point, and the point itself if
/// nothing remains after it.
fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
