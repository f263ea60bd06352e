use crate::{
    error::EvalError,
    interpreter::evaluator::{
        core::EvalResult,
        utils::{domain_error, unary_arg},
    },
    util::num::f64_to_u32_exact,
};

/// Largest `n` whose factorial is finite as an `f64`.
pub const MAX_FACTORIAL: u32 = 170;

/// Factorial of a non-negative integer, `n!`.
///
/// Reached through postfix `!`. The product is accumulated in `f64`, so
/// results above `2^53` are the nearest representable value.
///
/// # Errors
/// - [`EvalError::DomainError`] for negative, fractional or `NaN` input.
/// - [`EvalError::Overflow`] above 170, where the result is not
///   representable.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::factorial::factorial;
///
/// assert_eq!(factorial(&[5.0]).unwrap(), 120.0);
/// assert_eq!(factorial(&[0.0]).unwrap(), 1.0);
/// assert!(factorial(&[171.0]).is_err());
/// ```
pub fn factorial(args: &[f64]) -> EvalResult<f64> {
    let x = unary_arg("factorial", args)?;

    if x.is_nan() || x < 0.0 || (x.is_finite() && x.fract() != 0.0) {
        return Err(domain_error("factorial", format!("requires a non-negative integer, got {x}")));
    }
    if x > f64::from(MAX_FACTORIAL) {
        return Err(EvalError::Overflow { operation: "factorial".to_string(),
                                         details:   format!("{x}! exceeds the representable range"), });
    }

    let n = f64_to_u32_exact(x).ok_or_else(|| domain_error("factorial", format!("invalid input {x}")))?;
    Ok((2..=n).map(f64::from).product())
}
