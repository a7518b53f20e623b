use thiserror::Error;

use crate::ast::BinaryOperator;

/// Represents all errors that can occur during evaluation.
///
/// Evaluation is fail-fast: the first error unwinds straight to the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RuntimeError {
    /// A variable that is not bound in the current environment.
    ///
    /// Function bodies only see their own parameters, so this is also what a
    /// function reports when it refers to a variable of its caller.
    #[error("Runtime error: Unbound variable '{name}'.")]
    UnboundVariable {
        /// The name of the variable.
        name: String,
    },
    /// A call to a name with no top-level declaration.
    #[error("Runtime error: Undefined function '{name}'.")]
    UndefinedFunction {
        /// The name of the function.
        name: String,
    },
    /// Operand kinds do not fit the operator, a condition is not a boolean, or
    /// a call has the wrong number of arguments.
    #[error("Runtime error: Type error: {details}.")]
    TypeError {
        /// Details about the mismatch.
        details: String,
    },
    /// Integer division or modulo by zero.
    #[error("Runtime error: Division by zero.")]
    DivisionByZero,
    /// The result of an integer operation does not fit in 64 bits.
    #[error("Runtime error: Integer overflow while computing '{operator}'.")]
    Overflow {
        /// The operator that overflowed. Negation is reported as `-`.
        operator: String,
    },
}

impl RuntimeError {
    /// Builds a [`RuntimeError::TypeError`] from anything printable.
    pub(crate) fn type_error(details: impl Into<String>) -> Self {
        Self::TypeError { details: details.into() }
    }

    /// Builds a [`RuntimeError::Overflow`] for a binary operator.
    pub(crate) fn overflow(operator: BinaryOperator) -> Self {
        Self::Overflow { operator: operator.to_string() }
    }
}
