use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{MAX_DEPTH, ParseResult, parse_expression},
    },
};

/// Parses a call argument list after its opening `(`.
///
/// Arguments are comma-separated full expressions, so an argument may itself
/// be an assignment. An immediately encountered `)` produces an empty list.
///
/// Grammar (simplified): `arguments := (expression ("," expression)*)? ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the `(`.
/// - `open_position`: Byte offset of the `(`, reported if it is never closed.
/// - `depth`: Nesting level of the call itself.
///
/// # Returns
/// The argument expressions in call order.
///
/// # Errors
/// - [`ParseError::UnmatchedParen`] if the input ends before the `)`.
/// - [`ParseError::UnexpectedTrailingToken`] if a token other than `,` or
///   `)` follows an argument, as in `max(x 1)`.
/// - [`ParseError::MissingOperand`] for an empty argument such as `max(1,)`.
pub(in crate::interpreter::parser) fn parse_arguments<'a, I>(tokens: &mut Peekable<I>,
                                                             open_position: usize,
                                                             depth: usize)
                                                             -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let depth = descend(depth)?;
    let mut arguments = Vec::new();
    if let Some(token) = tokens.peek()
       && token.is_close_paren()
    {
        tokens.next();
        return Ok(arguments);
    }

    loop {
        arguments.push(parse_expression(tokens, depth)?);
        match tokens.next() {
            Some(token) if token.is(TokenKind::Operator, ",") => {},
            Some(token) if token.is_close_paren() => break,
            Some(stray) => return Err(unexpected_token(stray)),
            None => return Err(ParseError::UnmatchedParen { position: open_position }),
        }
    }
    Ok(arguments)
}

/// Builds a [`ParseError::MissingOperand`] describing what was found where an
/// operand was expected.
pub(in crate::interpreter::parser) fn missing_operand(found: Option<&Token>) -> ParseError {
    let context = match found {
        Some(token) => format!("found '{}' at position {}", token.text, token.position),
        None => "reached end of input".to_string(),
    };
    ParseError::MissingOperand { context }
}

/// Builds a [`ParseError::UnexpectedTrailingToken`] for a token that cannot
/// continue the expression parsed so far.
pub(in crate::interpreter::parser) fn unexpected_token(token: &Token) -> ParseError {
    ParseError::UnexpectedTrailingToken { token:    token.text.clone(),
                                          position: token.position, }
}

/// Steps one nesting level deeper.
///
/// # Errors
/// [`ParseError::NestingTooDeep`] once [`MAX_DEPTH`] is exceeded.
pub(in crate::interpreter::parser) fn descend(depth: usize) -> ParseResult<usize> {
    if depth >= MAX_DEPTH {
        return Err(ParseError::NestingTooDeep { limit: MAX_DEPTH });
    }
    Ok(depth + 1)
}
