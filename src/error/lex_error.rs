use thiserror::Error;

/// Represents all errors that can occur while scanning the input text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character that no token can start with.
    #[error("invalid character '{ch}' at position {position}")]
    InvalidCharacter {
        /// The offending character.
        ch:       char,
        /// Byte offset of the character in the input.
        position: usize,
    },
    /// A numeral containing more than one decimal point, such as `3.14.15`.
    #[error("invalid number '{literal}' at position {position}: multiple decimal points")]
    MultipleDecimalPoints {
        /// The malformed numeral.
        literal:  String,
        /// Byte offset of the numeral in the input.
        position: usize,
    },
    /// An exponent marker not followed by at least one digit, such as `2e` or
    /// `1.5e+`.
    #[error("invalid scientific notation '{literal}' at position {position}: exponent needs at least one digit")]
    MalformedExponent {
        /// The malformed numeral.
        literal:  String,
        /// Byte offset of the numeral in the input.
        position: usize,
    },
    /// A single `&` or `|`; only the doubled forms are operators.
    #[error("invalid operator '{operator}' at position {position}, did you mean '{operator}{operator}'?")]
    InvalidOperator {
        /// The lone operator character.
        operator: char,
        /// Byte offset of the operator in the input.
        position: usize,
    },
}
