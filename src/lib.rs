//! # linecalc
//!
//! linecalc is a line-oriented calculator. Each line is either an assignment,
//! `name = expression`, or an expression to evaluate. Variables store their
//! defining expression rather than a value and are re-evaluated wherever they
//! are referenced. Expressions support `+ - * /`, parentheses, chained
//! equality (`a == b == c`) and calls into a table of builtin functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::Error, interpreter::dispatcher::Interpreter};

/// Defines the structure of a parsed line.
///
/// This module declares the expression tree (`Expression`, `SubExpression`,
/// `Term`, `Factor`) and `Statement`. Trees are built by the parser, walked by
/// the evaluator and never mutated in between.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// # Responsibilities
/// - Separates syntax errors, which trigger the assignment fallback, from
///   errors that end a line.
/// - Carries positions, names and literals for user feedback.
pub mod error;
/// Lexing, parsing, evaluation and line dispatch.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, environment and evaluator.
/// - Provides `Interpreter`, the entry point for evaluating lines.
pub mod interpreter;
/// Numeric conversion helpers.
pub mod util;

/// Runs every non-blank line of `source` through a fresh interpreter.
///
/// Execution stops at the first failing line.
///
/// # Returns
/// The value of the last expression line, or `None` if there was none.
///
/// # Errors
/// Returns the error of the first line that fails.
///
/// # Examples
/// ```
/// use linecalc::evaluate_source;
///
/// let source = "x = 3 + 4\nx * 2";
/// assert_eq!(evaluate_source(source), Ok(Some(14.0)));
///
/// // `y` is never assigned.
/// assert!(evaluate_source("x = y + 1").is_err());
/// ```
pub fn evaluate_source(source: &str) -> Result<Option<f64>, Error> {
    let mut interpreter = Interpreter::new();
    let mut result = None;

    for line in source.lines().filter(|line| !line.trim().is_empty()) {
        if let Some(value) = interpreter.execute_line(line)? {
            result = Some(value);
        }
    }

    Ok(result)
}
