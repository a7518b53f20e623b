//! # minifun
//!
//! minifun is a small functional language written in Rust. It lexes, parses
//! and evaluates programs made of integers, booleans, conditionals,
//! let-bindings and top-level function declarations.
//!
//! ```
//! let value = minifun::run("letrec fact n = if n = 0 then 1 else n * fact (n - 1) in fact 5")
//!     .unwrap();
//!
//! assert_eq!(value.to_string(), "120");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::{Expr, Program},
    error::{Error, ParseError},
    interpreter::{
        environment::Environment,
        evaluator::core::{evaluate, run_program},
        parser::program::{parse_program as parse_program_tokens, parse_standalone_expression},
        value::Value,
    },
};

pub use crate::interpreter::lexer::tokenize;

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum, function declarations and programs.
/// The AST is built by the parser and traversed by the evaluator.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// Lexing and parsing failures are [`error::ParseError`]s and carry a source
/// position; evaluation failures are [`error::RuntimeError`]s. Both convert
/// into [`error::Error`].
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, environments and
/// value representations.
pub mod interpreter;

/// Parses a complete program: an optional block of function declarations
/// followed by the main expression.
///
/// # Errors
/// Returns the first lexical or syntax error.
///
/// # Examples
/// ```
/// use minifun::parse_program;
///
/// let program = parse_program("let f x y = x + y in f 3 4").unwrap();
/// assert_eq!(program.functions.len(), 1);
/// assert_eq!(program.main.to_string(), "(f 3 4)");
///
/// assert!(parse_program("1 < 2 < 3").is_err());
/// ```
pub fn parse_program(source: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(source)?;
    parse_program_tokens(&mut tokens.iter().peekable())
}

/// Parses a free-standing expression spanning the whole input.
///
/// # Errors
/// Returns the first lexical or syntax error.
///
/// # Examples
/// ```
/// use minifun::parse_expression;
///
/// let expr = parse_expression("3 + 4 * 2").unwrap();
/// assert_eq!(expr.to_string(), "(3 + (4 * 2))");
/// ```
pub fn parse_expression(source: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(source)?;
    parse_standalone_expression(&mut tokens.iter().peekable())
}

/// Lexes, parses and runs a program, returning the value of its main
/// expression.
///
/// # Errors
/// Returns an [`Error::Parse`] if the source does not parse and an
/// [`Error::Runtime`] if evaluation fails.
///
/// # Examples
/// ```
/// use minifun::{error::{Error, RuntimeError}, interpreter::value::Value, run};
///
/// assert_eq!(run("let f x y = x + y in f 3 4"), Ok(Value::Integer(7)));
///
/// let err = run("10 / (5 - 5)").unwrap_err();
/// assert_eq!(err, Error::Runtime(RuntimeError::DivisionByZero));
/// ```
pub fn run(source: &str) -> Result<Value, Error> {
    let program = parse_program(source)?;
    Ok(run_program(&program)?)
}

/// Evaluates a free-standing expression with no function declarations and
/// no variables in scope.
///
/// # Errors
/// Returns an [`Error::Parse`] or [`Error::Runtime`] as for [`run`].
///
/// # Examples
/// ```
/// use minifun::{eval, interpreter::value::Value};
///
/// assert_eq!(eval("if 1 < 2 then 10 else 20"), Ok(Value::Integer(10)));
/// assert!(eval("let x = 1 in y").is_err());
/// ```
pub fn eval(source: &str) -> Result<Value, Error> {
    let expr = parse_expression(source)?;
    Ok(evaluate(&[], &Environment::new(), &expr)?)
}
