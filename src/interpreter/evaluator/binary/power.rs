use crate::{
    error::EvalError,
    interpreter::evaluator::core::EvalResult,
    util::num::{finite_or_overflow, is_integer},
};

/// Raises `base` to `exponent`.
///
/// # Parameters
/// - `base`: The base value.
/// - `exponent`: The exponent value.
/// - `operation`: `"^"` or `"pow"`, used in error messages.
///
/// # Errors
/// - [`EvalError::DomainError`] for `0` raised to a negative power, and for a
///   negative base with a finite non-integer exponent (the real result does
///   not exist).
/// - [`EvalError::Overflow`] when finite operands produce an infinite result.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::binary::power::checked_pow;
///
/// assert_eq!(checked_pow(2.0, 10.0, "^").unwrap(), 1024.0);
/// assert_eq!(checked_pow(-8.0, 3.0, "^").unwrap(), -512.0);
/// assert!(checked_pow(-2.0, 0.5, "pow").is_err());
/// assert!(checked_pow(10.0, 400.0, "^").is_err());
/// ```
pub fn checked_pow(base: f64, exponent: f64, operation: &str) -> EvalResult<f64> {
    if base == 0.0 && exponent < 0.0 {
        return Err(EvalError::DomainError { function: operation.to_string(),
                                            details:  "zero cannot be raised to a negative power".into(), });
    }
    if base < 0.0 && exponent.is_finite() && !is_integer(exponent) {
        let details = format!("negative base {base} requires an integer exponent, got {exponent}");
        return Err(EvalError::DomainError { function: operation.to_string(),
                                            details });
    }

    finite_or_overflow(base.powf(exponent), &[base, exponent], operation)
}
