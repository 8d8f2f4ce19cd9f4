/// The lexer module splits a line into single-character tokens.
///
/// It strips whitespace, classifies each remaining character with a `logos`
/// lexer and wraps the result in a `TokenStream`, the cursor the parser walks.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// Recursive descent over a fixed precedence grammar: chained equality, then
/// addition and subtraction, then multiplication and division, then factors.
/// Variable references are resolved against the environment while parsing.
///
/// # Responsibilities
/// - Converts tokens into `Expression` trees and `Statement`s.
/// - Reports structural mismatches as syntax errors.
/// - Captures variable definitions at parse time.
pub mod parser;
/// The environment holds variable definitions and the builtin table.
pub mod environment;
/// The evaluator module computes the value of AST nodes.
///
/// Evaluation is a read-only walk over a tree and the environment. Variables
/// are re-evaluated from their stored definitions every time, and builtin
/// calls dispatch through the environment's table.
pub mod evaluator;
/// The line dispatcher.
///
/// Decides for each line whether it is an assignment or an expression and
/// applies it to the environment.
pub mod dispatcher;
