use crate::{
    ast::{Expression, NumberLiteral},
    error::ParseError,
    interpreter::{
        environment::Environment,
        lexer::{Token, TokenStream},
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses an identifier, a non-empty run of letters.
///
/// # Parameters
/// - `tokens`: Token stream positioned at an identifier.
///
/// # Returns
/// The identifier as a `String`.
///
/// # Errors
/// Returns `ExpectedIdentifier` if the cursor is not on a letter.
pub(in crate::interpreter::parser) fn parse_identifier(tokens: &mut TokenStream)
                                                       -> ParseResult<String> {
    let position = tokens.position();
    let mut name = String::new();

    while let Some(Token::Letter(c)) = tokens.peek() {
        name.push(c);
        tokens.advance();
    }

    if name.is_empty() {
        return Err(ParseError::ExpectedIdentifier { found: tokens.peek(),
                                                    position });
    }
    Ok(name)
}

/// Parses a numeric literal.
///
/// An optional leading `-` sets the sign, then every digit and decimal point
/// up to the next other character is collected verbatim. The text is not
/// validated here: `1.2.3` or a lone `-` are returned as they are and only
/// fail once the literal is evaluated.
///
/// Grammar: `number := "-"? (digit | ".")*`
pub(in crate::interpreter::parser) fn parse_number(tokens: &mut TokenStream) -> NumberLiteral {
    let negative = tokens.peek() == Some(Token::Minus);
    if negative {
        tokens.advance();
    }

    let mut digits = String::new();
    while let Some(token @ (Token::Digit(_) | Token::Dot)) = tokens.peek() {
        digits.push(token.as_char());
        tokens.advance();
    }

    NumberLiteral::new(negative, digits)
}

/// Parses the parenthesized argument list of a builtin call.
///
/// If the two next tokens are `(` and `)` the call has no arguments.
/// Otherwise one or more comma-separated expressions are parsed up to the
/// closing `)`.
///
/// Grammar: `arguments := "(" ")" | "(" expression ("," expression)* ")"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at `(`.
/// - `env`: Environment used to resolve variable references.
///
/// # Returns
/// The argument expressions in order.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an argument fails to parse,
/// - an argument is followed by anything but `,` or `)`.
pub(in crate::interpreter::parser) fn parse_arguments(tokens: &mut TokenStream,
                                                      env: &Environment)
                                                      -> ParseResult<Vec<Expression>> {
    if tokens.peek() == Some(Token::LParen) && tokens.peek_next() == Some(Token::RParen) {
        tokens.consume(Token::LParen)?;
        tokens.consume(Token::RParen)?;
        return Ok(Vec::new());
    }

    tokens.consume(Token::LParen)?;
    let mut arguments = Vec::new();
    loop {
        arguments.push(parse_expression(tokens, env)?);
        if tokens.peek() == Some(Token::RParen) {
            break;
        }
        tokens.consume(Token::Comma)?;
    }
    tokens.consume(Token::RParen)?;

    Ok(arguments)
}

/// Ensures the whole line has been consumed.
///
/// # Errors
/// Returns `TrailingInput` with the first leftover token.
pub(in crate::interpreter::parser) fn expect_end(tokens: &TokenStream) -> ParseResult<()> {
    match tokens.peek() {
        None => Ok(()),
        Some(found) => Err(ParseError::TrailingInput { found,
                                                       position: tokens.position() }),
    }
}
