use std::iter::Peekable;

use crate::{
    ast::{Expr, FACTORIAL, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_exponent,
            core::{ParseResult, parse_expression},
            utils::{descend, missing_operand, parse_arguments, unexpected_token},
        },
    },
};

/// Parses a prefix sign.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `+`  (no-op, produces no node)
///
/// The operand of a sign is parsed at the exponent level, so `-3^2` is
/// `-(3^2)`. At most one sign is allowed: `--5` fails with a missing operand
/// at the second `-`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+")? exponent
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting level.
///
/// # Returns
/// An [`Expr::UnaryOp`] or the expression parsed at the exponent level.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(token) = tokens.peek()
       && token.is(TokenKind::Operator, "-")
    {
        tokens.next();
        let expr = parse_exponent(tokens, descend(depth)?)?;
        Ok(Expr::UnaryOp { op:   UnaryOperator::Negate,
                           expr: Box::new(expr), })
    } else if let Some(token) = tokens.peek()
              && token.is(TokenKind::Operator, "+")
    {
        tokens.next();
        parse_exponent(tokens, depth)
    } else {
        parse_exponent(tokens, depth)
    }
}

/// Parses a primary expression followed by any number of factorial marks.
///
/// Each `!` wraps the expression built so far in a one-argument call to the
/// factorial function, so `5!!` is `!(!(5))`.
///
/// Grammar:
/// ```text
///     postfix := primary "!"*
/// ```
pub(crate) fn parse_postfix<'a, I>(tokens: &mut Peekable<I>, mut depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut node = parse_primary(tokens, depth)?;
    while let Some(token) = tokens.peek()
          && token.is(TokenKind::Operator, FACTORIAL)
    {
        tokens.next();
        depth = descend(depth)?;
        node = Expr::FunctionCall { name:      FACTORIAL.to_string(),
                                    arguments: vec![node], };
    }
    Ok(node)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - number literals
/// - identifiers, or calls when directly followed by `(`
/// - reserved function names, called with zero arguments when no `(` follows
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | (IDENT | FUNCTION) ("(" arguments ")")?
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`].
///
/// # Errors
/// - [`ParseError::MissingOperand`] when an operator, a `)` or the end of
///   input is found instead.
/// - [`ParseError::UnmatchedParen`] when a group or call is never closed.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.peek().copied() else {
        return Err(missing_operand(None));
    };

    match token.kind {
        TokenKind::Number => {
            tokens.next();
            Ok(Expr::number(token.text.clone()))
        },
        TokenKind::Identifier => {
            tokens.next();
            parse_name(tokens, token, false, depth)
        },
        TokenKind::Function => {
            tokens.next();
            parse_name(tokens, token, true, depth)
        },
        TokenKind::Paren if token.is_open_paren() => parse_grouping(tokens, depth),
        _ => Err(missing_operand(Some(token))),
    }
}

/// Parses what follows a name: a call argument list or nothing.
///
/// A name immediately followed by `(` is a call. A reserved function name
/// without `(` is a zero-argument call, which the evaluator then checks
/// against the function's arity. Any other bare name is an identifier.
fn parse_name<'a, I>(tokens: &mut Peekable<I>,
                     name: &Token,
                     is_function: bool,
                     depth: usize)
                     -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(open) = tokens.peek().copied()
       && open.is_open_paren()
    {
        tokens.next();
        let arguments = parse_arguments(tokens, open.position, depth)?;
        return Ok(Expr::FunctionCall { name: name.text.clone(),
                                       arguments });
    }

    if is_function {
        Ok(Expr::FunctionCall { name:      name.text.clone(),
                                arguments: Vec::new(), })
    } else {
        Ok(Expr::identifier(name.text.clone()))
    }
}

/// Parses a parenthesized expression.
///
/// Expects a `(` token, parses one full expression, then requires a `)`.
///
/// Grammar:
/// ```text
///     grouping := "(" expression ")"
/// ```
///
/// # Errors
/// - [`ParseError::UnmatchedParen`] carrying the position of the `(` when the
///   input ends before the closing parenthesis.
/// - [`ParseError::UnexpectedTrailingToken`] when some other token stands
///   where the `)` should be, as in `(1 2)`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(open) = tokens.next() else {
        return Err(missing_operand(None));
    };
    let expr = parse_expression(tokens, descend(depth)?)?;

    match tokens.next() {
        Some(close) if close.is_close_paren() => Ok(expr),
        Some(stray) => Err(unexpected_token(stray)),
        None => Err(ParseError::UnmatchedParen { position: open.position }),
    }
}
