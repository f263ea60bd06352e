use std::collections::HashMap;

use crate::{
    interpreter::evaluator::{core::EvalResult, function::core::Arity, utils::check_arity},
    util::num::finite_or_overflow,
};

const AT_LEAST_ONE: Arity = Arity::AtLeast(1);

/// Sum of all arguments.
///
/// # Errors
/// [`EvalError::Overflow`](crate::error::EvalError::Overflow) when finite
/// arguments add up to an infinite total.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::statistics::sum;
///
/// assert_eq!(sum(&[1.0, 2.0, 3.0]).unwrap(), 6.0);
/// assert_eq!(sum(&[4.0]).unwrap(), 4.0);
/// ```
pub fn sum(args: &[f64]) -> EvalResult<f64> {
    check_arity("sum", args, AT_LEAST_ONE)?;
    finite_or_overflow(args.iter().sum(), args, "sum")
}

/// Product of all arguments.
///
/// # Errors
/// [`EvalError::Overflow`](crate::error::EvalError::Overflow) when finite
/// arguments multiply to an infinite result.
pub fn product(args: &[f64]) -> EvalResult<f64> {
    check_arity("product", args, AT_LEAST_ONE)?;
    finite_or_overflow(args.iter().product(), args, "product")
}

/// Arithmetic mean of all arguments.
///
/// Divides the plain sum by the count. When finite arguments sum past the
/// largest `f64`, each argument is scaled down first instead, so a mean that
/// is itself representable is still returned.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::statistics::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]).unwrap(), 2.0);
/// assert_eq!(mean(&[1e308, 1e308]).unwrap(), 1e308);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn mean(args: &[f64]) -> EvalResult<f64> {
    check_arity("mean", args, AT_LEAST_ONE)?;
    let count = args.len() as f64;
    let total: f64 = args.iter().sum();
    if total.is_finite() {
        return Ok(total / count);
    }
    finite_or_overflow(args.iter().map(|x| x / count).sum(), args, "mean")
}

/// Middle value of the sorted arguments, or the mean of the two middle
/// values for an even count.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::statistics::median;
///
/// assert_eq!(median(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
/// ```
pub fn median(args: &[f64]) -> EvalResult<f64> {
    check_arity("median", args, AT_LEAST_ONE)?;

    let mut sorted = args.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[mid])
    } else {
        Ok(sorted[mid - 1] / 2.0 + sorted[mid] / 2.0)
    }
}

/// Most frequent argument.
///
/// Ties go to the value that reached the highest count first while scanning
/// left to right, so `mode(1, 2, 2, 3, 3)` is `2`. `0` and `-0` count as the
/// same value, as do all `NaN`s.
pub fn mode(args: &[f64]) -> EvalResult<f64> {
    check_arity("mode", args, AT_LEAST_ONE)?;

    let mut counts: HashMap<u64, usize> = HashMap::new();
    let mut best = (args[0], 0);

    for &value in args {
        let count = counts.entry(value_key(value)).or_insert(0);
        *count += 1;
        if *count > best.1 {
            best = (value, *count);
        }
    }

    Ok(best.0)
}

/// Hash key for counting equal floats.
fn value_key(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}
