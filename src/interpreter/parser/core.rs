use std::iter::Peekable;

use tracing::trace;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_logical_or,
            utils::{descend, unexpected_token},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting the parser accepts.
///
/// Every group, call, sign, exponent, factorial, assignment and chained
/// binary operator counts as one level. Past this limit parsing stops with
/// [`ParseError::NestingTooDeep`] instead of exhausting the stack.
pub const MAX_DEPTH: usize = 100;

/// Parses a complete token sequence into a single expression.
///
/// The whole slice must form exactly one expression. Parsing fails fast on
/// the first error and never returns a partial tree.
///
/// # Parameters
/// - `tokens`: The tokens produced by [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// The root of the expression tree.
///
/// # Errors
/// - [`ParseError::EmptyExpression`] when `tokens` is empty.
/// - [`ParseError::UnexpectedTrailingToken`] when tokens remain after a
///   complete expression.
/// - [`ParseError::NestingTooDeep`] when the expression nests deeper than
///   [`MAX_DEPTH`].
/// - Any error raised by the precedence levels below.
///
/// # Example
/// ```
/// use reckon::interpreter::{lexer::tokenize, parser::parse};
///
/// let tokens = tokenize("2^3^2").unwrap();
/// let expr = parse(&tokens).unwrap();
///
/// assert_eq!(expr.to_string(), "(2 ^ (3 ^ 2))");
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Expr> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, 0)?;

    if let Some(token) = iter.next() {
        return Err(unexpected_token(token));
    }

    trace!(%expr, "parsed expression");
    Ok(expr)
}

/// Parses a full expression.
///
/// This is the entry point for recursive expression parsing, used at the top
/// level, inside parentheses and for each call argument. It begins at the
/// lowest-precedence level, assignment.
///
/// Grammar: `expression := assignment`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Nesting level of this expression, `0` at the top.
///
/// # Returns
/// The parsed expression node.
pub(crate) fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_assignment(tokens, depth)
}

/// Parses `name = value`, or falls through to the logical-or level.
///
/// Needs two tokens of lookahead: an identifier alone is an ordinary operand,
/// and only an identifier directly followed by `=` starts an assignment. The
/// lookahead is done on a clone of the iterator so nothing is consumed unless
/// the rule matches.
///
/// The right-hand side is parsed at the logical-or level, so `x = y = 1` is
/// rejected with a trailing `=`.
///
/// Grammar: `assignment := IDENT "=" logical_or | logical_or`
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut lookahead = tokens.clone();
    if let Some(name) = lookahead.next()
       && name.kind == TokenKind::Identifier
       && let Some(assign) = lookahead.next()
       && assign.kind == TokenKind::Assign
    {
        tokens.next();
        tokens.next();
        let value = parse_logical_or(tokens, descend(depth)?)?;
        return Ok(Expr::Assignment { name:  name.text.clone(),
                                     value: Box::new(value), });
    }

    parse_logical_or(tokens, depth)
}
