use crate::{
    ast::{AdditiveOperator, MultiplicativeOperator, SubExpression, Term},
    interpreter::{
        environment::Environment,
        lexer::{Token, TokenStream},
        parser::{core::ParseResult, factor::parse_factor},
    },
};

/// Parses addition and subtraction chains.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `sub_expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `env`: Environment used to resolve variable references.
///
/// # Returns
/// A [`SubExpression`] holding the leading term and every signed term after it.
pub fn parse_sub_expression(tokens: &mut TokenStream,
                            env: &Environment)
                            -> ParseResult<SubExpression> {
    let first = parse_term(tokens, env)?;
    let mut rest = Vec::new();

    while let Some(op) = tokens.peek().and_then(additive_operator) {
        tokens.advance();
        rest.push((op, parse_term(tokens, env)?));
    }

    Ok(SubExpression { first, rest })
}

/// Parses multiplication and division chains.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `env`: Environment used to resolve variable references.
///
/// # Returns
/// A [`Term`] holding the leading factor and every signed factor after it.
pub fn parse_term(tokens: &mut TokenStream, env: &Environment) -> ParseResult<Term> {
    let first = parse_factor(tokens, env)?;
    let mut rest = Vec::new();

    while let Some(op) = tokens.peek().and_then(multiplicative_operator) {
        tokens.advance();
        rest.push((op, parse_factor(tokens, env)?));
    }

    Ok(Term { first, rest })
}

const fn additive_operator(token: Token) -> Option<AdditiveOperator> {
    match token {
        Token::Plus => Some(AdditiveOperator::Add),
        Token::Minus => Some(AdditiveOperator::Sub),
        _ => None,
    }
}

const fn multiplicative_operator(token: Token) -> Option<MultiplicativeOperator> {
    match token {
        Token::Star => Some(MultiplicativeOperator::Mul),
        Token::Slash => Some(MultiplicativeOperator::Div),
        _ => None,
    }
}
