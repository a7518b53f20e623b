use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        lexer::{Position, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, unexpected},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`    (numeric negation)
/// - `not`  (logical not)
///
/// Unary operators are right-recursive, so they stack: `- - x` is parsed as
/// `-(-x)`. They bind tighter than every binary operator and looser than
/// application, so `-f x` negates the call.
///
/// Grammar:
/// ```text
///     unary := ("-" | "not") unary
///            | application
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let op = match tokens.peek() {
        Some((Token::Minus, _)) => UnaryOperator::Negate,
        Some((Token::Not, _)) => UnaryOperator::Not,
        _ => return parse_application(tokens),
    };
    tokens.next();

    let expr = parse_unary(tokens)?;
    Ok(Expr::unary(op, expr))
}

/// Parses function application by juxtaposition.
///
/// An atom followed by one or more atoms is a call with those atoms as
/// arguments; a lone atom is returned unchanged. Arguments are atoms only,
/// so `f x - 1` is `(f x) - 1` and `f (x - 1)` needs the parentheses.
///
/// Grammar: `application := atom atom*`
fn parse_application<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let callee = parse_atom(tokens)?;

    let mut arguments = Vec::new();
    while let Some((token, _)) = tokens.peek()
          && starts_atom(token)
    {
        arguments.push(parse_atom(tokens)?);
    }

    if arguments.is_empty() {
        return Ok(callee);
    }

    Ok(Expr::Call { callee: Box::new(callee),
                    arguments })
}

/// Parses an atomic expression.
///
/// Grammar:
/// ```text
///     atom := INTEGER
///           | BOOL
///           | IDENT
///           | "(" expression ")"
/// ```
///
/// # Errors
/// Returns a `ParseError` for any other token, or when a parenthesised
/// expression is not closed.
fn parse_atom<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(n), _)) => Ok(Expr::Num(*n)),
        Some((Token::Bool(b), _)) => Ok(Expr::Bool(*b)),
        Some((Token::Identifier(name), _)) => Ok(Expr::var(name.clone())),
        Some((Token::LParen, _)) => {
            let expr = parse_expression(tokens)?;
            expect(tokens, &Token::RParen)?;
            Ok(expr)
        },
        Some((tok, position)) => Err(unexpected(tok, *position, "an expression")),
        None => Err(unexpected(&Token::Eof, Position::default(), "an expression")),
    }
}

/// Whether `token` can begin an atom, and therefore an argument.
const fn starts_atom(token: &Token) -> bool {
    matches!(token,
             Token::Integer(_) | Token::Bool(_) | Token::Identifier(_) | Token::LParen)
}
