use crate::{
    error::EvalError,
    interpreter::evaluator::{core::EvalResult, function::core::Arity},
};

/// Checks that a builtin received an accepted number of arguments.
///
/// # Parameters
/// - `name`: Function name, for the error message.
/// - `args`: The evaluated arguments.
/// - `arity`: The accepted argument counts.
///
/// # Errors
/// [`EvalError::ArityError`] when `args.len()` is not accepted by `arity`.
pub fn check_arity(name: &str, args: &[f64], arity: Arity) -> EvalResult<()> {
    if arity.check(args.len()) {
        Ok(())
    } else {
        Err(arity_error(name, arity, args.len()))
    }
}

/// Builds an [`EvalError::ArityError`].
pub fn arity_error(name: &str, expected: Arity, got: usize) -> EvalError {
    EvalError::ArityError { name: name.to_string(),
                            expected,
                            got }
}

/// Unpacks the single argument of a one-argument builtin.
///
/// # Errors
/// [`EvalError::ArityError`] unless exactly one argument was supplied.
pub fn unary_arg(name: &str, args: &[f64]) -> EvalResult<f64> {
    match args {
        [x] => Ok(*x),
        _ => Err(arity_error(name, Arity::Exact(1), args.len())),
    }
}

/// Unpacks both arguments of a two-argument builtin.
///
/// # Errors
/// [`EvalError::ArityError`] unless exactly two arguments were supplied.
pub fn binary_args(name: &str, args: &[f64]) -> EvalResult<(f64, f64)> {
    match args {
        [x, y] => Ok((*x, *y)),
        _ => Err(arity_error(name, Arity::Exact(2), args.len())),
    }
}

/// Builds an [`EvalError::DomainError`].
pub fn domain_error(function: &str, details: impl Into<String>) -> EvalError {
    EvalError::DomainError { function: function.to_string(),
                             details:  details.into(), }
}
