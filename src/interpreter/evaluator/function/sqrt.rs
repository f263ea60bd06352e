use crate::interpreter::evaluator::{
    core::EvalResult,
    utils::{domain_error, unary_arg},
};

/// Computes the square root of a non-negative value.
///
/// `sqrt(0)` is `0`.
///
/// # Errors
/// [`EvalError::DomainError`](crate::error::EvalError::DomainError) for
/// negative inputs; there is no real square root.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::sqrt::sqrt;
///
/// assert_eq!(sqrt(&[9.0]).unwrap(), 3.0);
/// assert!(sqrt(&[-1.0]).is_err());
/// ```
pub fn sqrt(args: &[f64]) -> EvalResult<f64> {
    let x = unary_arg("sqrt", args)?;
    if x < 0.0 {
        return Err(domain_error("sqrt", format!("cannot take the square root of {x}")));
    }
    Ok(x.sqrt())
}

#[cfg(test)]
mod tests {
    use super::sqrt;
    use crate::error::EvalError;

    #[test]
    fn test_zero_and_negative() {
        assert_eq!(sqrt(&[0.0]), Ok(0.0));
        assert_eq!(sqrt(&[-0.0]), Ok(-0.0));
        assert!(matches!(sqrt(&[-1e-300]), Err(EvalError::DomainError { .. })));
    }
}
