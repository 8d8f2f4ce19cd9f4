/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing a line.
/// Parse errors split into two categories: syntax errors, which the line
/// dispatcher answers by retrying the line as a plain expression, and semantic
/// errors such as references to unbound variables, which always end the line.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// expression, such as malformed numerals, unknown builtins, builtin calls with
/// the wrong number of arguments and runaway nesting.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while handling one line of input.
///
/// The shell renders this with its `Display` implementation; callers that need
/// to tell phases apart can match on the variant.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The line could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The line parsed but could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
