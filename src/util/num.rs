use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

const OVERFLOW_DETAILS: &str = "result exceeds the representable range";

/// Rejects a result that became infinite although every operand was finite.
///
/// Infinite operands (for example from the literal `1e999`) propagate without
/// an error; only the step that first leaves the `f64` range fails.
///
/// ## Parameters
/// - `result`: The computed value.
/// - `operands`: The inputs the value was computed from.
/// - `operation`: Name of the operator or function, for the error message.
///
/// ## Errors
/// [`EvalError::Overflow`] when `result` is infinite and all `operands` are
/// finite.
///
/// ## Example
/// ```
/// use reckon::util::num::finite_or_overflow;
///
/// assert_eq!(finite_or_overflow(8.0, &[2.0, 3.0], "^").unwrap(), 8.0);
/// assert!(finite_or_overflow(f64::INFINITY, &[10.0, 400.0], "^").is_err());
/// assert!(finite_or_overflow(f64::INFINITY, &[f64::INFINITY], "exp").is_ok());
/// ```
pub fn finite_or_overflow(result: f64, operands: &[f64], operation: &str) -> EvalResult<f64> {
    if result.is_infinite() && operands.iter().all(|x| x.is_finite()) {
        return Err(EvalError::Overflow { operation: operation.to_string(),
                                         details:   OVERFLOW_DETAILS.to_string(), });
    }
    Ok(result)
}

/// Returns `true` if `value` is finite and has no fractional part.
#[must_use]
pub fn is_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Converts `value` to `u32` if it is a non-negative integer in range.
///
/// ## Example
/// ```
/// use reckon::util::num::f64_to_u32_exact;
///
/// assert_eq!(f64_to_u32_exact(170.0), Some(170));
/// assert_eq!(f64_to_u32_exact(3.5), None);
/// assert_eq!(f64_to_u32_exact(-1.0), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn f64_to_u32_exact(value: f64) -> Option<u32> {
    if is_integer(value) && (0.0..=f64::from(u32::MAX)).contains(&value) {
        Some(value as u32)
    } else {
        None
    }
}

/// Converts a truth value to `1.0` or `0.0`.
#[must_use]
pub const fn from_bool(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

/// Any non-zero value is true, including `NaN`.
#[must_use]
pub fn is_truthy(value: f64) -> bool {
    value != 0.0
}
