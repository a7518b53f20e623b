use std::iter::Peekable;

use crate::{
    ast::{Expr, FunctionDef, Program},
    error::ParseError,
    interpreter::{
        lexer::{Position, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{
                expect, expect_end, parse_identifier, parse_parameters, starts_next_definition,
            },
        },
    },
};

/// Parses a whole program.
///
/// A program is an optional block of top-level function declarations
/// followed by the main expression and the end of input. A bare expression
/// is a valid program with an empty function table.
///
/// Grammar:
/// ```text
///     program := block? expression ";;"? EOF
///     block   := ("letrec" | "let") definition ("and" definition)* "in"
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator over the whole input, ending with `Eof`.
///
/// # Returns
/// The parsed [`Program`].
///
/// # Errors
/// Returns the first `ParseError` met; nothing is returned for the part
/// that did parse.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let functions = parse_function_block(tokens)?.unwrap_or_default();
    let main = parse_expression(tokens)?;
    expect_end(tokens)?;

    Ok(Program { functions, main })
}

/// Parses a free-standing expression that must span the whole input.
///
/// Grammar: `expression_input := expression ";;"? EOF`
pub fn parse_standalone_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let expr = parse_expression(tokens)?;
    expect_end(tokens)?;

    Ok(expr)
}

/// Parses the block of top-level function declarations, if there is one.
///
/// `letrec` always opens a block. `let` opens one only when the bound name
/// is followed by a parameter (`let f x = ...`); a plain `let x = ...` is
/// left alone to be parsed as the main expression. Each further definition
/// starts with `and IDENT IDENT+ =`; any other `and` belongs to the body
/// before it.
///
/// If no block is present, the function returns `Ok(None)` and does not
/// consume any input.
///
/// # Returns
/// - `Ok(Some(definitions))` if a block is parsed,
/// - `Ok(None)` if the program starts with its main expression.
fn parse_function_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Vec<FunctionDef>>>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let opens_block = match tokens.peek() {
        Some((Token::LetRec, _)) => true,
        Some((Token::Let, _)) => declares_function(tokens),
        _ => false,
    };
    if !opens_block {
        return Ok(None);
    }
    tokens.next();

    let mut definitions = vec![parse_function_definition(tokens)?];
    while starts_next_definition(tokens) {
        tokens.next();
        definitions.push(parse_function_definition(tokens)?);
    }
    expect(tokens, &Token::In)?;

    Ok(Some(definitions))
}

/// Looks past a leading `let` for `IDENT IDENT`, the shape of a function
/// declaration. Consumes nothing.
fn declares_function<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut lookahead = tokens.clone();
    lookahead.next();

    matches!((lookahead.next(), lookahead.next()),
             (Some((Token::Identifier(_), _)), Some((Token::Identifier(_), _))))
}

/// Parses a single function definition: `<name> <param>+ = <body>`.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name is missing,
/// - no parameter is declared (`MissingParameters`),
/// - the `=` is missing,
/// - the body expression fails to parse.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<FunctionDef>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let (name, name_position) = parse_identifier(tokens)?;
    let params = parse_parameters(tokens);
    let equals = expect(tokens, &Token::Equals)?;

    if params.is_empty() {
        return Err(ParseError::MissingParameters { name,
                                                   position: equals });
    }

    let body = parse_expression(tokens)?;

    Ok(FunctionDef { name,
                     params,
                     body,
                     line: name_position.line })
}
