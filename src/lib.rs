//! # reckon
//!
//! reckon is an arithmetic and logical expression engine written in Rust.
//! It tokenizes, parses, and evaluates single-line expressions with support
//! for variables, named constants, a library of mathematical functions,
//! comparisons and logical operators.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::Error,
    interpreter::{
        environment::{ConstantTable, Environment},
        evaluator::evaluate,
        lexer::tokenize,
        parser::parse,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator enums that represent
/// the syntactic structure of an expression as a tree. The AST is built by
/// the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines one node variant per language construct.
/// - Renders trees in a fully parenthesized form for inspection.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while turning a line of
/// text into a number. Each stage has its own error family, and [`Error`]
/// wraps all three so the whole pipeline can use `?`.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches positions and detailed messages for context.
pub mod error;
/// Orchestrates the expression pipeline.
///
/// This module ties together lexing, parsing, evaluation and the variable
/// environment to turn a line of text into a value.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser and evaluator.
/// - Holds variable and constant storage.
pub mod interpreter;
/// General numeric and formatting helpers.
///
/// # Responsibilities
/// - Finite-result and integer checks shared by the evaluator.
/// - Formatting of results with a fixed number of significant digits.
pub mod util;

/// Runs the full pipeline on one line of text.
///
/// Tokenizes `line`, parses the tokens into one expression and evaluates it
/// against `env` and `consts`. Each stage fails fast; when any stage fails,
/// `env` is left exactly as it was.
///
/// # Errors
/// The first [`Error`] raised by the lexer, the parser or the evaluator.
///
/// # Examples
/// ```
/// use reckon::{
///     evaluate_line,
///     interpreter::environment::{ConstantTable, Environment},
/// };
///
/// let mut env = Environment::new();
/// let consts = ConstantTable::default();
///
/// assert_eq!(evaluate_line("x = 2 + 3 * 4", &mut env, &consts).unwrap(), 14.0);
/// assert_eq!(evaluate_line("x > 10 && x < 20", &mut env, &consts).unwrap(), 1.0);
///
/// // 'y' is not defined
/// assert!(evaluate_line("y + 1", &mut env, &consts).is_err());
/// ```
pub fn evaluate_line(line: &str,
                     env: &mut Environment,
                     consts: &ConstantTable)
                     -> Result<f64, Error> {
    run_pipeline(line, env, consts).inspect_err(|e| debug!(line, error = %e, "evaluation failed"))
}

fn run_pipeline(line: &str, env: &mut Environment, consts: &ConstantTable) -> Result<f64, Error> {
    let tokens = tokenize(line)?;
    let expr = parse(&tokens)?;
    Ok(evaluate(&expr, env, consts)?)
}

/// An evaluation session: a variable environment plus a constant table.
///
/// Variables assigned in one call to [`evaluate`](Self::evaluate) are visible
/// in every later call until [`reset`](Self::reset).
///
/// # Examples
/// ```
/// use reckon::Session;
///
/// let mut session = Session::new();
///
/// assert_eq!(session.evaluate("r = 2").unwrap(), 2.0);
/// let area = session.evaluate("pi r^2").unwrap();
/// assert!((area - 4.0 * std::f64::consts::PI).abs() < 1e-12);
///
/// session.reset();
/// assert!(session.evaluate("r").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    variables: Environment,
    constants: ConstantTable,
}

impl Session {
    /// Creates a session with no variables and the built-in constants.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with no variables and the given constants.
    #[must_use]
    pub fn with_constants(constants: ConstantTable) -> Self {
        Self { variables: Environment::new(),
               constants }
    }

    /// Evaluates one line of text in this session.
    ///
    /// # Errors
    /// See [`evaluate_line`].
    pub fn evaluate(&mut self, line: &str) -> Result<f64, Error> {
        evaluate_line(line, &mut self.variables, &self.constants)
    }

    /// The variables assigned so far.
    #[must_use]
    pub const fn variables(&self) -> &Environment {
        &self.variables
    }

    /// The constants visible to this session.
    #[must_use]
    pub const fn constants(&self) -> &ConstantTable {
        &self.constants
    }

    /// Removes every variable. Constants are kept.
    pub fn reset(&mut self) {
        self.variables.reset();
    }
}
