/// Operator dispatch.
pub mod core;

/// Integer arithmetic with division-by-zero and overflow checks.
pub mod arithmetic;

/// Equality and ordering.
pub mod comparison;

/// Boolean connectives.
pub mod logic;
