use crate::interpreter::evaluator::{core::EvalResult, utils::binary_args};

/// Shared implementation of `min` and `max`.
///
/// Both take exactly two arguments. If one argument is `NaN` the other is
/// returned.
///
/// # Parameters
/// - `name`: `"min"` or `"max"`.
/// - `args`: The two arguments.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::min_max::min_max;
///
/// assert_eq!(min_max("min", &[3.0, -1.0]).unwrap(), -1.0);
/// assert_eq!(min_max("max", &[3.0, -1.0]).unwrap(), 3.0);
/// ```
pub fn min_max(name: &str, args: &[f64]) -> EvalResult<f64> {
    let (a, b) = binary_args(name, args)?;
    Ok(if name == "min" { a.min(b) } else { a.max(b) })
}
