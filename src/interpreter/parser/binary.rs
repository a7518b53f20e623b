use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Position, Token},
        parser::{core::ParseResult, unary::parse_unary, utils::starts_next_definition},
    },
};

/// Parses logical OR expressions.
///
/// Handles left-associative chains of `or` (also spelled `||`). Lowest
/// precedence of the binary operators.
///
/// Grammar: `logical_or := logical_and (("or" | "||") logical_and)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A binary expression tree using `BinaryOperator::Or`.
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    parse_left_assoc(tokens, parse_logical_and, |op| matches!(op, BinaryOperator::Or))
}

/// Parses logical AND expressions.
///
/// Handles left-associative chains of `and` (also spelled `&&`). Binds
/// tighter than `or` and looser than the comparisons.
///
/// The keyword `and` also separates definitions in a declaration block. An
/// `and` followed by `IDENT IDENT+ =` ends the expression so that the block
/// can read the next definition; write `a and (f x = y)` to compare instead.
///
/// Grammar: `logical_and := comparison (("and" | "&&") comparison)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Position)` pairs.
///
/// # Returns
/// A binary expression tree with `BinaryOperator::And` nodes.
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let head = parse_comparison(tokens)?;

    let mut rest = Vec::new();
    while let Some(op) = peek_operator(tokens, |op| matches!(op, BinaryOperator::And))
          && !starts_next_definition(tokens)
    {
        tokens.next();
        rest.push((op, parse_comparison(tokens)?));
    }

    Ok(fold_chain(head, rest))
}

/// Parses a comparison.
///
/// Comparisons are non-associative: at most one of `=`, `<>`, `<`, `<=`, `>`,
/// `>=` may appear at this level. `1 < 2 < 3` is rejected instead of being
/// grouped either way; `(1 < 2) = true` is fine.
///
/// Grammar: `comparison := additive (comparison_op additive)?`
///
/// # Errors
/// Returns `ParseError::ChainedComparison` when a second comparison operator
/// follows the right operand.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let left = parse_additive(tokens)?;

    let Some(op) = peek_operator(tokens, is_comparison_op) else {
        return Ok(left);
    };
    tokens.next();
    let right = parse_additive(tokens)?;

    if let Some((token, position)) = tokens.peek()
       && token_to_binary_operator(token).is_some_and(is_comparison_op)
    {
        return Err(ParseError::ChainedComparison { operator: token.to_string(),
                                                   position: *position, });
    }

    Ok(Expr::binary(op, left, right))
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    parse_left_assoc(tokens, parse_multiplicative, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    })
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/` and `%`.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "%") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    parse_left_assoc(tokens, parse_unary, |op| {
        matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
    })
}

/// Parses one left-associative precedence level.
///
/// The chain is read as a head operand followed by `(operator, operand)`
/// pairs, which are then combined with [`fold_chain`].
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the head operand.
/// - `parse_operand`: Parser for the next tighter level.
/// - `accepts`: Whether an operator belongs to this level.
fn parse_left_assoc<'a, I>(tokens: &mut Peekable<I>,
                           parse_operand: impl Fn(&mut Peekable<I>) -> ParseResult<Expr>,
                           accepts: impl Fn(BinaryOperator) -> bool)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let head = parse_operand(tokens)?;

    let mut rest = Vec::new();
    while let Some(op) = peek_operator(tokens, &accepts) {
        tokens.next();
        rest.push((op, parse_operand(tokens)?));
    }

    Ok(fold_chain(head, rest))
}

/// Left-folds a parsed operator chain.
///
/// Each `(operator, operand)` pair combines with everything accumulated so
/// far, never with the single operand before it, so `a - b - c` becomes
/// `(a - b) - c`.
///
/// # Example
/// ```
/// use minifun::{
///     ast::{BinaryOperator, Expr},
///     interpreter::parser::binary::fold_chain,
/// };
///
/// let chain = fold_chain(Expr::Num(10),
///                        vec![(BinaryOperator::Sub, Expr::Num(3)),
///                             (BinaryOperator::Add, Expr::Num(2))]);
///
/// assert_eq!(chain.to_string(), "((10 - 3) + 2)");
/// ```
#[must_use]
pub fn fold_chain(head: Expr, rest: Vec<(BinaryOperator, Expr)>) -> Expr {
    rest.into_iter()
        .fold(head, |acc, (op, operand)| Expr::binary(op, acc, operand))
}

/// Returns the operator at the front of the stream if `accepts` allows it.
/// Does not consume anything.
fn peek_operator<'a, I>(tokens: &mut Peekable<I>,
                        accepts: impl Fn(BinaryOperator) -> bool)
                        -> Option<BinaryOperator>
    where I: Iterator<Item = &'a (Token, Position)>
{
    tokens.peek()
          .and_then(|(token, _)| token_to_binary_operator(token))
          .filter(|op| accepts(*op))
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for all tokens that are not binary operators, including
/// `-` used as a prefix, which the caller never asks about.
///
/// # Example
/// ```
/// use minifun::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Equals),
///            Some(BinaryOperator::Equal));
/// assert_eq!(token_to_binary_operator(&Token::Or), Some(BinaryOperator::Or));
/// assert_eq!(token_to_binary_operator(&Token::Let), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::And | Token::AmpAmp => Some(BinaryOperator::And),
        Token::Or | Token::PipePipe => Some(BinaryOperator::Or),
        Token::Equals => Some(BinaryOperator::Equal),
        Token::NotEqual => Some(BinaryOperator::NotEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        _ => None,
    }
}

/// Determines whether a binary operator belongs to the comparison level.
///
/// # Example
/// ```
/// use minifun::{ast::BinaryOperator, interpreter::parser::binary::is_comparison_op};
///
/// assert!(is_comparison_op(BinaryOperator::Less));
/// assert!(is_comparison_op(BinaryOperator::NotEqual));
/// assert!(!is_comparison_op(BinaryOperator::And));
/// ```
#[must_use]
pub const fn is_comparison_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Equal
             | BinaryOperator::NotEqual
             | BinaryOperator::Less
             | BinaryOperator::LessEqual
             | BinaryOperator::Greater
             | BinaryOperator::GreaterEqual)
}
