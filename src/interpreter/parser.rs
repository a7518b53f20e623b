/// Core parsing logic.
///
/// Contains the result type and the entry point for expressions, which is
/// also the loosest grammar level: `if`, `let` and `fun`.
pub mod core;

/// Unary operator, application and atom parsing.
///
/// Handles prefix `-` and `not`, function application by juxtaposition and
/// the atomic expressions they apply to.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the left-associative chains (`||`, `&&`, additive,
/// multiplicative) and the non-associative comparison level.
pub mod binary;

/// Program parsing.
///
/// Parses the optional block of top-level function declarations, the main
/// expression and the end of input.
pub mod program;

/// Utility functions for the parser.
///
/// Provides token expectations, identifier and parameter lists, and error
/// construction shared by the other parser modules.
pub mod utils;
