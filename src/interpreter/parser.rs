/// Entry point of the grammar and shared result type.
///
/// Defines `ParseResult` and the chained-equality level, `parse_expression`,
/// from which every other level is reached.
pub mod core;

/// Additive and multiplicative chains.
///
/// Parses the two left-associative operator levels: sub-expressions joined by
/// `+`/`-` and terms joined by `*`/`/`.
pub mod binary;

/// Factor parsing.
///
/// Decides, from the next character alone, whether a factor is a number, a
/// parenthesized group, a variable reference or a builtin call.
pub mod factor;

/// Statement-level entry points.
///
/// Parses a whole line either as an assignment or as a standalone expression,
/// requiring the line to be fully consumed.
pub mod statement;

/// Lexical helpers for the parser.
///
/// Assembles identifiers and numerals character by character and parses
/// argument lists.
pub mod utils;
