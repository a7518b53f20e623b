use std::fmt;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// Every successfully evaluated expression produces exactly one `Value`.
/// There are no function values and no compound data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// A 64 bit signed integer.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by literals, comparisons and logical operators. Used as the
    /// condition of `if` expressions, which must evaluate to `Bool`.
    Bool(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl Value {
    /// Extracts the integer, or fails with a `TypeError` naming `context`.
    ///
    /// # Parameters
    /// - `context`: What needed the integer, used in the error message.
    ///
    /// # Example
    /// ```
    /// use minifun::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(4).as_integer("test").unwrap(), 4);
    /// assert!(Value::Bool(true).as_integer("test").is_err());
    /// ```
    pub fn as_integer(self, context: &str) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(n),
            Self::Bool(_) => Err(RuntimeError::type_error(format!("{context} expects an \
                                                                   integer, found {}",
                                                                  self.type_name()))),
        }
    }

    /// Extracts the boolean, or fails with a `TypeError` naming `context`.
    pub fn as_bool(self, context: &str) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(b),
            Self::Integer(_) => Err(RuntimeError::type_error(format!("{context} expects a \
                                                                      boolean, found {}",
                                                                     self.type_name()))),
        }
    }

    /// The name of the value's kind, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "int",
            Self::Bool(_) => "bool",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
