/// Parser entry point and assignment level.
///
/// Contains [`core::parse`], which turns a whole token slice into one
/// expression tree, and the assignment rule that sits at the bottom of the
/// precedence ladder.
pub mod core;

/// Binary operator levels.
///
/// Implements the left-associative logical, comparison, additive and
/// multiplicative levels and the right-associative exponent level.
pub mod binary;

/// Sign, postfix and primary levels.
///
/// Handles prefix `-`/`+`, postfix factorial, literals, names, calls and
/// parenthesized groups.
pub mod unary;

/// Utility functions for the parser.
pub mod utils;

pub use self::core::{ParseResult, parse};
