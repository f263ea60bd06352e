/// Binary operator evaluation logic.
///
/// Handles arithmetic, exponentiation, comparisons and logical connectives.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the tree-walking [`Evaluator`](core::Evaluator), the
/// [`evaluate`](core::evaluate) entry point and the handling of literals,
/// names and assignment.
pub mod core;

/// Utility functions for evaluation.
///
/// Argument unpacking and arity checks shared by the function library.
pub mod utils;

/// Function evaluation.
///
/// Holds the builtin registry and the implementations of every builtin
/// function, including postfix factorial.
pub mod function;

pub use self::core::{EvalResult, Evaluator, evaluate};
