/// Builtin registry and function-call evaluation.
///
/// Declares the name-keyed table of every builtin with its arity, and the
/// lookup used by both the lexer (to classify words) and the evaluator.
pub mod core;
/// Trigonometric, rounding and miscellaneous builtins.
///
/// Angles are in degrees.
pub mod builtin;
/// Logarithm function implementations.
///
/// Supports natural, base-10, base-2 and arbitrary-base logarithms.
pub mod log;
/// The `sqrt` (square root) function implementation.
pub mod sqrt;
/// `min` and `max` function implementations.
pub mod min_max;
/// Aggregate statistics over any number of arguments.
///
/// `sum`, `product`, `mean`, `median` and `mode`.
pub mod statistics;
/// Postfix factorial.
pub mod factorial;
