/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparisons and logical operators once both operands
/// have been evaluated.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the function table it reads from and
/// the program entry point.
pub mod core;

/// Function evaluation.
///
/// Resolves calls against the function table, checks arity and evaluates the
/// body in a fresh environment.
pub mod function;
