use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, ComparisonOperator, Expr, LogicalOperator},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            unary::{parse_postfix, parse_unary},
            utils::descend,
        },
    },
};

/// Parses logical OR expressions.
///
/// Left-associative: `a || b || c` parses as `(a || b) || c`.
///
/// The rule is: `logical_or := logical_and ("||" logical_and)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting level. Each chained `||` adds one.
///
/// # Returns
/// An `Expr::Logical` tree, or the operand itself when no `||` follows.
pub(crate) fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>, mut depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_logical_and(tokens, depth)?;
    while let Some(token) = tokens.peek()
          && let Some(op @ LogicalOperator::Or) = token_to_logical_operator(token)
    {
        tokens.next();
        depth = descend(depth)?;
        let right = parse_logical_and(tokens, depth)?;
        left = Expr::Logical { left: Box::new(left),
                               op,
                               right: Box::new(right) };
    }
    Ok(left)
}

/// Parses logical AND expressions.
///
/// Binds tighter than `||`, so `0 || 1 && 0` parses as `0 || (1 && 0)`.
///
/// The rule is: `logical_and := comparison ("&&" comparison)*`
pub(crate) fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>, mut depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_comparison(tokens, depth)?;
    while let Some(token) = tokens.peek()
          && let Some(op @ LogicalOperator::And) = token_to_logical_operator(token)
    {
        tokens.next();
        depth = descend(depth)?;
        let right = parse_comparison(tokens, depth)?;
        left = Expr::Logical { left: Box::new(left),
                               op,
                               right: Box::new(right) };
    }
    Ok(left)
}

/// Parses relational and equality operators.
///
/// All six operators share one precedence level and chain left to right, so
/// `1 < 2 < 3` compares the `0`/`1` result of `1 < 2` with `3`.
///
/// The rule is: `comparison := additive (("<" | ">" | "<=" | ">=" | "==" |
/// "!=") additive)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A possibly nested `Expr::Comparison` tree.
pub(crate) fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, mut depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_additive(tokens, depth)?;
    while let Some(token) = tokens.peek()
          && let Some(op) = token_to_comparison_operator(token)
    {
        tokens.next();
        depth = descend(depth)?;
        let right = parse_additive(tokens, depth)?;
        left = Expr::Comparison { left: Box::new(left),
                                  op,
                                  right: Box::new(right) };
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub(crate) fn parse_additive<'a, I>(tokens: &mut Peekable<I>, mut depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_multiplicative(tokens, depth)?;
    while let Some(token) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    {
        tokens.next();
        depth = descend(depth)?;
        let right = parse_multiplicative(tokens, depth)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right) };
    }
    Ok(left)
}

/// Parses multiplication and division.
///
/// Operands are parsed at the unary level, so `2 * -3` is accepted. Implicit
/// multiplication reaches this level as an ordinary `*` token.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
pub(crate) fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, mut depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_unary(tokens, depth)?;
    while let Some(token) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    {
        tokens.next();
        depth = descend(depth)?;
        let right = parse_unary(tokens, depth)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right) };
    }
    Ok(left)
}

/// Parses exponentiation.
///
/// Right-associative: `a ^ b ^ c` parses as `a ^ (b ^ c)`. The right operand
/// goes back through the unary level, which both produces the right
/// associativity and admits a signed exponent such as `2^-1`. The base is a
/// postfix expression, so `-3^2` leaves the sign to the unary level above and
/// means `-(3^2)`.
///
/// The rule is: `exponent := postfix ("^" unary)?`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An exponentiation expression tree.
pub(crate) fn parse_exponent<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let base = parse_postfix(tokens, depth)?;
    if let Some(token) = tokens.peek()
       && let Some(op @ BinaryOperator::Pow) = token_to_binary_operator(token)
    {
        tokens.next();
        let exponent = parse_unary(tokens, descend(depth)?)?;
        return Ok(Expr::BinaryOp { left: Box::new(base),
                                   op,
                                   right: Box::new(exponent) });
    }
    Ok(base)
}

/// Maps an operator token to its arithmetic operator.
///
/// # Returns
/// `Some(op)` for `+ - * / ^`, `None` for anything else.
fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    if token.kind != TokenKind::Operator {
        return None;
    }
    match token.text.as_str() {
        "+" => Some(BinaryOperator::Add),
        "-" => Some(BinaryOperator::Sub),
        "*" => Some(BinaryOperator::Mul),
        "/" => Some(BinaryOperator::Div),
        "^" => Some(BinaryOperator::Pow),
        _ => None,
    }
}

/// Maps a comparison token to its operator.
fn token_to_comparison_operator(token: &Token) -> Option<ComparisonOperator> {
    if token.kind != TokenKind::Comparison {
        return None;
    }
    match token.text.as_str() {
        "<" => Some(ComparisonOperator::Less),
        ">" => Some(ComparisonOperator::Greater),
        "<=" => Some(ComparisonOperator::LessEqual),
        ">=" => Some(ComparisonOperator::GreaterEqual),
        "==" => Some(ComparisonOperator::Equal),
        "!=" => Some(ComparisonOperator::NotEqual),
        _ => None,
    }
}

/// Maps a logical token to its operator.
fn token_to_logical_operator(token: &Token) -> Option<LogicalOperator> {
    if token.kind != TokenKind::Logical {
        return None;
    }
    match token.text.as_str() {
        "&&" => Some(LogicalOperator::And),
        "||" => Some(LogicalOperator::Or),
        _ => None,
    }
}
