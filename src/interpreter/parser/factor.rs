use crate::{
    ast::Factor,
    error::ParseError,
    interpreter::{
        environment::Environment,
        lexer::{Token, TokenStream},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{parse_arguments, parse_identifier, parse_number},
        },
    },
};

/// Parses a single factor.
///
/// The kind of factor is decided by the next character alone:
/// ```text
///     factor := number
///             | "(" expression ")"
///             | identifier
///             | identifier "(" ")"
///             | identifier "(" expression ("," expression)* ")"
/// ```
/// A digit or `-` starts a number, `(` starts a group and a letter starts a
/// name. Anything else is a syntax error.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of a factor.
/// - `env`: Environment used to resolve variable references.
///
/// # Returns
/// The parsed [`Factor`] or a `ParseError` on failure.
pub fn parse_factor(tokens: &mut TokenStream, env: &Environment) -> ParseResult<Factor> {
    match tokens.peek() {
        Some(Token::Digit(_) | Token::Minus) => Ok(Factor::Number(parse_number(tokens))),
        Some(Token::LParen) => parse_grouping(tokens, env),
        Some(Token::Letter(_)) => parse_identifier_or_call(tokens, env),
        found => Err(ParseError::ExpectedFactor { found,
                                                  position: tokens.position() }),
    }
}

/// Parses a parenthesized expression, `"(" expression ")"`.
fn parse_grouping(tokens: &mut TokenStream, env: &Environment) -> ParseResult<Factor> {
    tokens.consume(Token::LParen)?;
    let expr = parse_expression(tokens, env)?;
    tokens.consume(Token::RParen)?;
    Ok(Factor::Paren(Box::new(expr)))
}

/// Parses a name and what follows it.
///
/// If the name is followed by `(`, a builtin call is parsed; whether the
/// builtin exists is only checked when the call is evaluated. Otherwise the
/// name is a variable reference, and its current definition is captured
/// from `env` right away.
///
/// # Errors
/// - `UndefinedVariable` if the name is not followed by `(` and has no
///   binding in `env`.
/// - Propagates any errors from argument parsing.
fn parse_identifier_or_call(tokens: &mut TokenStream, env: &Environment) -> ParseResult<Factor> {
    let name = parse_identifier(tokens)?;

    if tokens.peek() == Some(Token::LParen) {
        let arguments = parse_arguments(tokens, env)?;
        return Ok(Factor::BuiltinCall { name, arguments });
    }

    match env.lookup(&name) {
        Some(bound) => Ok(Factor::Variable { name, bound }),
        None => Err(ParseError::UndefinedVariable { name,
                                                    position: tokens.position() }),
    }
}
