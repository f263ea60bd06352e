use thiserror::Error;

/// Represents all errors that can occur while parsing a token sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input contained no tokens at all.
    #[error("empty expression")]
    EmptyExpression,
    /// An opening parenthesis was never closed.
    #[error("unmatched parenthesis: '(' at position {position} is never closed")]
    UnmatchedParen {
        /// Byte offset of the opening parenthesis.
        position: usize,
    },
    /// An operand was required but an operator, a closing parenthesis or the
    /// end of input was found instead.
    #[error("missing operand: {context}")]
    MissingOperand {
        /// Describes what was found where the operand should have been.
        context: String,
    },
    /// A token appeared where the expression parsed so far cannot continue:
    /// after a complete expression, or inside a group or call where only `,`
    /// or `)` may follow.
    #[error("unexpected token '{token}' at position {position}")]
    UnexpectedTrailingToken {
        /// Text of the first leftover token.
        token:    String,
        /// Byte offset of that token.
        position: usize,
    },
    /// The expression nests deeper than the parser allows.
    #[error("expression nests deeper than {limit} levels")]
    NestingTooDeep {
        /// The maximum accepted depth.
        limit: usize,
    },
}
