/// The environment module holds variable bindings during evaluation.
///
/// Environments are persistent: extending one returns a new environment and
/// leaves the original untouched, so a `let` body can shadow a name without
/// the binding leaking back to the enclosing expression.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the tree produced by the parser and reduces it to a
/// single [`value::Value`]. It reads function declarations from a borrowed
/// table and variables from an [`environment::Environment`].
///
/// # Responsibilities
/// - Evaluates every expression form, strictly and left to right.
/// - Resolves calls against the function table and binds parameters.
/// - Reports runtime errors such as division by zero or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// paired with the line and column where it starts. Whitespace and `(* *)`
/// comments are skipped. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Recognises integer and boolean literals, identifiers, keywords and
///   operators.
/// - Reports lexical errors for invalid characters and oversized literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser with one function per precedence
/// level. It either returns a complete tree or the first syntax error; there
/// is no recovery.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Values are 64 bit signed integers and booleans.
pub mod value;
