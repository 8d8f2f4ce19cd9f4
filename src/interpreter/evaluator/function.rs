/// Builtin table types and the call path.
///
/// Defines `Arity`, `Builtin`, the static builtin tables and argument
/// checking.
pub mod core;
/// `min` and `max` implementations.
pub mod min_max;
/// Optional mathematical builtins such as `sqrt`, `ln` and `sin`.
pub mod builtin;
