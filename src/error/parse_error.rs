use thiserror::Error;

use crate::interpreter::lexer::Position;

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A character sequence that is not part of the token alphabet.
    #[error("Syntax error at {position}: Invalid token '{token}'.")]
    InvalidToken {
        /// The offending source slice.
        token:    String,
        /// Where the slice starts.
        position: Position,
    },
    /// An integer literal that does not fit in 64 bits.
    #[error("Syntax error at {position}: Integer literal {literal} is too large.")]
    LiteralTooLarge {
        /// The literal as written.
        literal:  String,
        /// Where the literal starts.
        position: Position,
    },
    /// Found a token the grammar does not allow at this point.
    #[error("Syntax error at {position}: Expected {expected}, found '{found}'.")]
    UnexpectedToken {
        /// The token encountered.
        found:    String,
        /// What the parser was looking for.
        expected: String,
        /// Where the token starts.
        position: Position,
    },
    /// Reached the end of input while a construct was still open.
    #[error("Syntax error at {position}: Unexpected end of input, expected {expected}.")]
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
        /// Position of the end of input.
        position: Position,
    },
    /// A second comparison operator at the same level, as in `1 < 2 < 3`.
    #[error("Syntax error at {position}: Comparison operators do not chain, found a second \
             '{operator}'. Use parentheses to group the comparison.")]
    ChainedComparison {
        /// The second comparison operator.
        operator: String,
        /// Where it appears.
        position: Position,
    },
    /// A declared function without any parameter.
    #[error("Syntax error at {position}: Function '{name}' must declare at least one parameter.")]
    MissingParameters {
        /// The function name.
        name:     String,
        /// Where the definition's `=` appears.
        position: Position,
    },
}

impl ParseError {
    /// Gets the source position the error points at.
    ///
    /// ## Example
    /// ```
    /// use minifun::parse_program;
    ///
    /// let err = parse_program("1 +\n  )").unwrap_err();
    ///
    /// assert_eq!(err.position().line, 2);
    /// assert_eq!(err.position().column, 3);
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::InvalidToken { position, .. }
            | Self::LiteralTooLarge { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position, .. }
            | Self::ChainedComparison { position, .. }
            | Self::MissingParameters { position, .. } => *position,
        }
    }
}
