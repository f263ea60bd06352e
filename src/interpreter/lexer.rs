use std::fmt;

use logos::Logos;
use tracing::trace;

use crate::{error::LexError, interpreter::evaluator::function::core::is_function_name};

/// The category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A numeral such as `42`, `.5` or `6.022e23`.
    Number,
    /// `+ - * / ^`, the argument separator `,` and postfix `!`.
    Operator,
    /// `(` or `)`.
    Paren,
    /// A reserved function name such as `sin`.
    Function,
    /// Any other word: a variable or constant name.
    Identifier,
    /// `=`
    Assign,
    /// `< > <= >= == !=`
    Comparison,
    /// `&&` or `||`
    Logical,
}

/// A classified lexical unit.
///
/// Tokens are created once during scanning and never mutated. `text` is the
/// lexeme exactly as written; `position` is its byte offset in the input.
/// An implicitly inserted `*` takes the position of the token that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token category.
    pub kind:     TokenKind,
    /// The literal lexeme.
    pub text:     String,
    /// Byte offset of the lexeme in the input.
    pub position: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self { kind,
               text: text.into(),
               position }
    }

    /// Returns `true` when the token has the given kind and text.
    #[must_use]
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }

    /// Returns `true` for `(`.
    #[must_use]
    pub fn is_open_paren(&self) -> bool {
        self.is(TokenKind::Paren, "(")
    }

    /// Returns `true` for `)`.
    #[must_use]
    pub fn is_close_paren(&self) -> bool {
        self.is(TokenKind::Paren, ")")
    }

    /// Whether a token of this shape ends an operand, so that a following
    /// operand gets an implicit `*` in front of it.
    fn ends_operand(&self) -> bool {
        self.kind == TokenKind::Number || self.is_close_paren()
    }

    /// Whether a token of this shape starts an operand that can be implicitly
    /// multiplied onto a preceding one.
    fn starts_operand(&self) -> bool {
        matches!(self.kind,
                 TokenKind::Number | TokenKind::Function | TokenKind::Identifier)
        || self.is_open_paren()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Raw lexemes as recognised by the scanner, before classification.
///
/// Numerals are matched generously here (any run of digits and dots with an
/// optional exponent tail) so that malformed ones reach [`validate_numeral`]
/// as a single lexeme and produce a precise error.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    /// Numerals, possibly malformed: `3.14`, `2e`, `1.2.3`.
    #[regex(r"[0-9.]+([eE][+-]?[0-9.]*)?")]
    Numeral,
    /// Function names and identifiers.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Word,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `,`
    #[token(",")]
    Comma,
    /// `!`
    #[token("!")]
    Bang,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `&&`
    #[token("&&")]
    DoubleAmpersand,
    /// `||`
    #[token("||")]
    DoublePipe,
    /// A lone `&`, always rejected.
    #[token("&")]
    Ampersand,
    /// A lone `|`, always rejected.
    #[token("|")]
    Pipe,
}

impl RawToken {
    /// Token kind for the fixed-spelling lexemes.
    ///
    /// Numerals and words are classified separately by [`tokenize`].
    const fn kind(self) -> TokenKind {
        match self {
            Self::Numeral => TokenKind::Number,
            Self::Word => TokenKind::Identifier,
            Self::Plus
            | Self::Minus
            | Self::Star
            | Self::Slash
            | Self::Caret
            | Self::Comma
            | Self::Bang
            | Self::Ampersand
            | Self::Pipe => TokenKind::Operator,
            Self::LParen | Self::RParen => TokenKind::Paren,
            Self::Equals => TokenKind::Assign,
            Self::EqualEqual
            | Self::BangEqual
            | Self::LessEqual
            | Self::GreaterEqual
            | Self::Less
            | Self::Greater => TokenKind::Comparison,
            Self::DoubleAmpersand | Self::DoublePipe => TokenKind::Logical,
        }
    }
}

/// Splits an expression into tokens.
///
/// Scanning runs left to right. Whitespace only separates tokens. Words are
/// classified as [`TokenKind::Function`] when they name a builtin function
/// (case-sensitive) and as [`TokenKind::Identifier`] otherwise.
///
/// Implicit multiplication: whenever a number or `)` is directly followed by
/// a number, function name, identifier or `(`, a `*` operator token is
/// inserted between them, so `2sin(90)` scans like `2 * sin(90)` and
/// `2(3+4)` like `2 * (3+4)`. Postfix `!` never triggers an insertion.
///
/// # Errors
/// - [`LexError::InvalidCharacter`] for characters no token starts with.
/// - [`LexError::MultipleDecimalPoints`] for numerals like `3.14.15`.
/// - [`LexError::MalformedExponent`] for numerals like `2e` or `1e+`.
/// - [`LexError::InvalidOperator`] for a lone `&` or `|`.
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("2(3+4)").unwrap();
/// let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
///
/// assert_eq!(texts, ["2", "*", "(", "3", "+", "4", ")"]);
/// assert_eq!(tokens[1].kind, TokenKind::Operator);
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut lexer = RawToken::lexer(input);

    while let Some(raw) = lexer.next() {
        let position = lexer.span().start;
        let slice = lexer.slice();

        let token = match raw {
            Ok(RawToken::Numeral) => {
                validate_numeral(slice, position)?;
                Token::new(TokenKind::Number, slice, position)
            },
            Ok(RawToken::Word) => classify_word(slice, position),
            Ok(RawToken::Ampersand) => {
                return Err(LexError::InvalidOperator { operator: '&',
                                                       position });
            },
            Ok(RawToken::Pipe) => {
                return Err(LexError::InvalidOperator { operator: '|',
                                                       position });
            },
            Ok(raw) => Token::new(raw.kind(), slice, position),
            Err(()) => {
                let ch = input[position..].chars().next().unwrap_or('\u{FFFD}');
                return Err(LexError::InvalidCharacter { ch, position });
            },
        };

        push_token(&mut tokens, token);
    }

    trace!(input, count = tokens.len(), "tokenized expression");
    Ok(tokens)
}

/// Appends a token, inserting an implicit `*` when the previous token ends an
/// operand and the new one starts another.
fn push_token(tokens: &mut Vec<Token>, token: Token) {
    if let Some(last) = tokens.last()
       && last.ends_operand()
       && token.starts_operand()
    {
        tokens.push(Token::new(TokenKind::Operator, "*", token.position));
    }
    tokens.push(token);
}

/// Classifies a word as a reserved function name or a plain identifier.
fn classify_word(word: &str, position: usize) -> Token {
    let kind = if is_function_name(word) {
        TokenKind::Function
    } else {
        TokenKind::Identifier
    };
    Token::new(kind, word, position)
}

/// Checks that a scanned numeral is well formed.
///
/// A valid numeral has at least one mantissa digit, at most one decimal
/// point, and, if an `e`/`E` follows, an optional sign and one or more
/// exponent digits.
///
/// # Errors
/// - [`LexError::InvalidCharacter`] for a bare `.` with no digits.
/// - [`LexError::MultipleDecimalPoints`] for a second `.` in the numeral.
/// - [`LexError::MalformedExponent`] for a missing or non-integer exponent.
fn validate_numeral(literal: &str, position: usize) -> Result<(), LexError> {
    let (mantissa, exponent) = match literal.find(['e', 'E']) {
        Some(index) => (&literal[..index], Some(&literal[index + 1..])),
        None => (literal, None),
    };

    let mantissa_dots = mantissa.matches('.').count();
    if mantissa_dots > 1 {
        return Err(LexError::MultipleDecimalPoints { literal: literal.to_string(),
                                                     position });
    }
    if !mantissa.bytes().any(|b| b.is_ascii_digit()) {
        return Err(LexError::InvalidCharacter { ch: '.', position });
    }

    let Some(exponent) = exponent else {
        return Ok(());
    };
    let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);

    if digits.contains('.') && mantissa_dots == 1 {
        return Err(LexError::MultipleDecimalPoints { literal: literal.to_string(),
                                                     position });
    }
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LexError::MalformedExponent { literal: literal.to_string(),
                                                 position });
    }

    Ok(())
}
