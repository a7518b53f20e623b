use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Position, Token},
        parser::core::ParseResult,
    },
};

/// Builds the error for a token the grammar does not allow here.
///
/// Running into [`Token::Eof`] is reported as an unexpected end of input
/// rather than as an unexpected token.
pub(in crate::interpreter::parser) fn unexpected(token: &Token,
                                                 position: Position,
                                                 expected: &str)
                                                 -> ParseError {
    match token {
        Token::Eof => ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                         position },
        tok => ParseError::UnexpectedToken { found: tok.to_string(),
                                             expected: expected.to_string(),
                                             position },
    }
}

/// Consumes the next token, which must equal `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected token.
/// - `expected`: The token that must come next.
///
/// # Returns
/// The position of the consumed token.
///
/// # Errors
/// Returns `UnexpectedToken` or `UnexpectedEndOfInput` if the next token
/// differs.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token)
                                                    -> ParseResult<Position>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((tok, position)) if tok == expected => Ok(*position),
        Some((tok, position)) => Err(unexpected(tok, *position, &format!("'{expected}'"))),
        None => Err(ParseError::UnexpectedEndOfInput { expected: format!("'{expected}'"),
                                                       position: Position::default(), }),
    }
}

/// Parses a plain identifier and returns its name with its position.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, Position)>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((Token::Identifier(name), position)) => Ok((name.clone(), *position)),
        Some((tok, position)) => Err(unexpected(tok, *position, "an identifier")),
        None => Err(ParseError::UnexpectedEndOfInput { expected: "an identifier".to_string(),
                                                       position: Position::default(), }),
    }
}

/// Parses a possibly empty run of parameter names.
///
/// Collects identifiers until the next token is not one; the caller checks
/// for the token that must follow (`=` or `->`).
///
/// Grammar: `parameters := IDENT*`
pub(in crate::interpreter::parser) fn parse_parameters<'a, I>(tokens: &mut Peekable<I>)
                                                              -> Vec<String>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let mut params = Vec::new();
    while let Some((Token::Identifier(name), _)) = tokens.peek() {
        params.push(name.clone());
        tokens.next();
    }
    params
}

/// Whether the stream is at `and IDENT IDENT+ =`, the start of another
/// definition in a declaration block. Consumes nothing.
///
/// A bare `and` that does not introduce a definition is the logical
/// connective.
pub(in crate::interpreter::parser) fn starts_next_definition<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut lookahead = tokens.clone();
    if !matches!(lookahead.next(), Some((Token::And, _))) {
        return false;
    }
    if !matches!(lookahead.next(), Some((Token::Identifier(_), _))) {
        return false;
    }

    let mut params = 0;
    while let Some((Token::Identifier(_), _)) = lookahead.peek() {
        lookahead.next();
        params += 1;
    }

    params > 0 && matches!(lookahead.next(), Some((Token::Equals, _)))
}

/// Consumes the end of input, allowing one `;;` terminator before it.
///
/// # Errors
/// Returns `UnexpectedToken` if anything else is left over, such as a
/// closing parenthesis without an opening one.
pub(in crate::interpreter::parser) fn expect_end<'a, I>(tokens: &mut Peekable<I>)
                                                        -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, Position)>
{
    if let Some((Token::SemiSemi, _)) = tokens.peek() {
        tokens.next();
    }
    match tokens.next() {
        Some((Token::Eof, _)) | None => Ok(()),
        Some((tok, position)) => Err(unexpected(tok, *position, "end of input")),
    }
}
