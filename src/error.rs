/// Lexing errors.
///
/// Raised by the tokenizer when the input contains a character, numeral or
/// operator that cannot start a valid token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// a token sequence: empty input, unbalanced parentheses, missing operands and
/// leftover tokens.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while walking the syntax tree.
/// Evaluation errors include things like division by zero, domain violations,
/// overflow and unknown names.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
use thiserror::Error;

/// Any failure of the tokenize → parse → evaluate pipeline.
///
/// Each stage has its own error family; this enum only tags which stage
/// failed so callers can use `?` across the whole pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens do not form a valid expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression could not be evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
