use thiserror::Error;

use crate::interpreter::evaluator::function::core::Arity;

/// Represents all errors that can occur during evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Attempted division (or `mod`) by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// An argument lies outside the domain of the function or operator.
    #[error("domain error in {function}: {details}")]
    DomainError {
        /// The function or operator that rejected its input.
        function: String,
        /// Why the input was rejected.
        details:  String,
    },
    /// The result is too large to be represented.
    #[error("overflow in {operation}: {details}")]
    Overflow {
        /// The function or operator that overflowed.
        operation: String,
        /// What exceeded the representable range.
        details:   String,
    },
    /// The function has no value at this input, e.g. `tan(90)`.
    #[error("undefined result in {function}: {details}")]
    UndefinedResult {
        /// The function whose result is undefined.
        function: String,
        /// Why the result is undefined.
        details:  String,
    },
    /// The name is bound neither as a variable nor as a constant.
    #[error("undefined variable '{name}'")]
    UndefinedVariable {
        /// The unresolved name.
        name: String,
    },
    /// A function was called with the wrong number of arguments.
    #[error("function '{name}' requires {expected} argument(s), got {got}")]
    ArityError {
        /// The function name.
        name:     String,
        /// The accepted argument counts.
        expected: Arity,
        /// The number of arguments supplied.
        got:      usize,
    },
    /// Called a function that is not in the registry.
    #[error("unknown function '{name}'")]
    UnknownFunction {
        /// The function name.
        name: String,
    },
    /// A number literal could not be converted to a float.
    #[error("invalid number literal '{literal}'")]
    InvalidLiteral {
        /// The literal text.
        literal: String,
    },
}
