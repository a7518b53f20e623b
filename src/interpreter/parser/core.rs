use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Position, Token},
        parser::{
            binary::parse_logical_or,
            utils::{expect, parse_identifier, parse_parameters},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing and also the loosest
/// grammar level. An `if`, `let` or `fun` construct starts here and its last
/// sub-expression extends as far to the right as possible. Anything else
/// descends through the precedence hierarchy starting at logical OR.
///
/// Grammar:
/// ```text
///     expression := "if" expression "then" expression "else" expression
///                 | "let" IDENT IDENT* "=" expression "in" expression
///                 | "fun" IDENT+ "->" expression
///                 | logical_or
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Position)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    match tokens.peek() {
        Some((Token::If, _)) => parse_if(tokens),
        Some((Token::Let, _)) => parse_let(tokens),
        Some((Token::Fun, _)) => parse_fun(tokens),
        _ => parse_logical_or(tokens),
    }
}

/// Parses an `if` expression. Both branches are mandatory.
///
/// Syntax:
/// ```text
///     if <condition> then <expr> else <expr>
/// ```
///
/// # Errors
/// - `UnexpectedToken` if `then` or `else` is missing.
/// - Propagates any errors from sub-expression parsing.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    expect(tokens, &Token::If)?;
    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::Then)?;
    let then_branch = parse_expression(tokens)?;
    expect(tokens, &Token::Else)?;
    let else_branch = parse_expression(tokens)?;

    Ok(Expr::if_expr(condition, then_branch, else_branch))
}

/// Parses a `let` expression.
///
/// Syntax:
/// ```text
///     let <name> = <bound> in <body>
///     let <name> <param>+ = <bound> in <body>
/// ```
/// The second form binds `name` to the anonymous function
/// `fun <param>+ -> <bound>`.
///
/// # Errors
/// - `UnexpectedToken` if the name, `=` or `in` is missing.
/// - Propagates any errors from sub-expression parsing.
fn parse_let<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    expect(tokens, &Token::Let)?;
    let (name, _) = parse_identifier(tokens)?;
    let params = parse_parameters(tokens);
    expect(tokens, &Token::Equals)?;
    let bound = parse_expression(tokens)?;
    expect(tokens, &Token::In)?;
    let body = parse_expression(tokens)?;

    let bound = if params.is_empty() {
        bound
    } else {
        Expr::Fun { params,
                    body: Box::new(bound) }
    };

    Ok(Expr::let_in(name, bound, body))
}

/// Parses an anonymous function: `fun <param>+ -> <body>`.
///
/// # Errors
/// - `UnexpectedToken` if no parameter precedes `->`, or `->` is missing.
/// - Propagates any errors from parsing the body.
fn parse_fun<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    expect(tokens, &Token::Fun)?;
    let params = parse_parameters(tokens);
    if params.is_empty() {
        // Report the token that stands where the first parameter should be.
        parse_identifier(tokens)?;
    }
    expect(tokens, &Token::Arrow)?;
    let body = parse_expression(tokens)?;

    Ok(Expr::Fun { params,
                   body: Box::new(body) })
}
