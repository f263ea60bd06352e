use crate::interpreter::evaluator::{
    core::EvalResult,
    function::core::Arity,
    utils::{arity_error, domain_error, unary_arg},
};

/// Natural logarithm.
///
/// # Errors
/// [`EvalError::DomainError`](crate::error::EvalError::DomainError) for
/// inputs that are not positive.
pub fn ln(args: &[f64]) -> EvalResult<f64> {
    let x = positive_arg("ln", unary_arg("ln", args)?)?;
    Ok(x.ln())
}

/// Base-10 logarithm.
pub fn log10(args: &[f64]) -> EvalResult<f64> {
    let x = positive_arg("log10", unary_arg("log10", args)?)?;
    Ok(x.log10())
}

/// Base-2 logarithm.
pub fn log2(args: &[f64]) -> EvalResult<f64> {
    let x = positive_arg("log2", unary_arg("log2", args)?)?;
    Ok(x.log2())
}

/// Logarithm with an optional base.
///
/// `log(x)` is the base-10 logarithm; `log(x, b)` is the base-`b` logarithm.
/// Bases 10 and 2 use the dedicated functions so exact powers give exact
/// results.
///
/// # Errors
/// [`EvalError::DomainError`](crate::error::EvalError::DomainError) when `x`
/// is not positive, or when the base is not positive or equals `1`.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::log::log;
///
/// assert_eq!(log(&[1000.0]).unwrap(), 3.0);
/// assert_eq!(log(&[8.0, 2.0]).unwrap(), 3.0);
/// assert!(log(&[8.0, 1.0]).is_err());
/// ```
#[allow(clippy::float_cmp)]
pub fn log(args: &[f64]) -> EvalResult<f64> {
    let (x, base) = match *args {
        [x] => (x, None),
        [x, base] => (x, Some(base)),
        _ => return Err(arity_error("log", Arity::OneOf(&[1, 2]), args.len())),
    };
    let x = positive_arg("log", x)?;
    let Some(base) = base else {
        return Ok(x.log10());
    };

    if base <= 0.0 || base == 1.0 || base.is_nan() {
        return Err(domain_error("log", format!("base must be positive and not 1, got {base}")));
    }

    Ok(if base == 10.0 {
        x.log10()
    } else if base == 2.0 {
        x.log2()
    } else {
        x.ln() / base.ln()
    })
}

/// Rejects zero, negative and `NaN` inputs to a logarithm.
fn positive_arg(function: &str, x: f64) -> EvalResult<f64> {
    if x > 0.0 {
        Ok(x)
    } else {
        Err(domain_error(function, format!("input must be positive, got {x}")))
    }
}

#[cfg(test)]
mod tests {
    use super::{ln, log, log2, log10};
    use crate::error::EvalError;

    #[test]
    fn test_logarithms() {
        assert_eq!(ln(&[1.0]), Ok(0.0));
        assert_eq!(log10(&[100.0]), Ok(2.0));
        assert_eq!(log2(&[1024.0]), Ok(10.0));
        assert_eq!(log(&[100.0]), Ok(2.0));
        assert_eq!(log(&[1000.0, 10.0]), Ok(3.0));
        assert!((log(&[81.0, 3.0]).unwrap() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_domain() {
        for x in [0.0, -1.0, f64::NAN] {
            assert!(matches!(ln(&[x]), Err(EvalError::DomainError { .. })));
            assert!(matches!(log(&[x]), Err(EvalError::DomainError { .. })));
        }
        assert!(matches!(log(&[8.0, 0.0]), Err(EvalError::DomainError { .. })));
        assert!(matches!(log(&[8.0, -2.0]), Err(EvalError::DomainError { .. })));
        assert!(matches!(log(&[8.0, 1.0]), Err(EvalError::DomainError { .. })));
    }

    #[test]
    fn test_arity() {
        assert!(matches!(log(&[]), Err(EvalError::ArityError { .. })));
        assert!(matches!(log(&[1.0, 2.0, 3.0]), Err(EvalError::ArityError { .. })));
    }
}
