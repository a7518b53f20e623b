/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Every parse error carries the line and column of the offending token;
/// parsing stops at the first one and never yields a partial tree.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unbound
/// variables, undefined functions, type mismatches, division by zero and
/// integer overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// Any failure produced while turning source text into a value.
///
/// Returned by the convenience entry points [`crate::run`] and
/// [`crate::eval`], which chain lexing, parsing and evaluation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The source text is not a well-formed program.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation of a well-formed program failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
