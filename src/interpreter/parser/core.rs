use crate::{
    ast::Expression,
    error::ParseError,
    interpreter::{
        environment::Environment,
        lexer::{Token, TokenStream},
        parser::binary::parse_sub_expression,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing and the lowest-precedence
/// level: a chain of sub-expressions joined by `==`. A single `=` is left
/// alone, so that `x=1` fails further up instead of being read as `x == 1`.
///
/// Grammar: `expression := sub_expression ("==" sub_expression)*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the expression.
/// - `env`: Environment used to resolve variable references.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Besides syntax and undefined-variable errors, returns `NestingTooDeep`
/// once groups and calls nest past
/// [`MAX_NESTING_DEPTH`](crate::interpreter::lexer::MAX_NESTING_DEPTH).
pub fn parse_expression(tokens: &mut TokenStream, env: &Environment) -> ParseResult<Expression> {
    tokens.descend()?;
    let expr = parse_equality_chain(tokens, env);
    tokens.ascend();
    expr
}

fn parse_equality_chain(tokens: &mut TokenStream, env: &Environment) -> ParseResult<Expression> {
    let first = parse_sub_expression(tokens, env)?;
    let mut chain = Vec::new();

    while tokens.peek() == Some(Token::Equals) && tokens.peek_next() == Some(Token::Equals) {
        tokens.consume(Token::Equals)?;
        tokens.consume(Token::Equals)?;
        chain.push(parse_sub_expression(tokens, env)?);
    }

    Ok(Expression { first, chain })
}
