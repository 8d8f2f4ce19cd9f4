/// Core evaluation logic.
///
/// Walks expressions, sub-expressions, terms and factors, including the
/// chained-equality rules.
pub mod core;

/// Builtin function evaluation.
///
/// Holds the builtin table types, the default and optional math tables, and
/// the call path with its arity checks.
pub mod function;
