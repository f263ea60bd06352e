/// Arithmetic operators `+ - * /` and dispatch of `^`.
pub mod core;

/// Exponentiation with domain and overflow checks.
///
/// Shared by the `^` operator and the `pow` builtin.
pub mod power;

/// Relational and equality operators.
pub mod comparison;

/// Logical `&&` and `||`.
pub mod logic;
