use crate::{
    ast::{Expression, Statement},
    interpreter::{
        environment::Environment,
        lexer::{Token, TokenStream},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_end, parse_identifier},
        },
    },
};

/// Parses a whole line as an assignment.
///
/// Grammar: `assignment := identifier "=" expression`
///
/// The right-hand side is parsed against `env` as it is now, so it cannot
/// refer to the name being assigned unless that name already has an older
/// definition. Nothing is stored here; the caller decides what to do with the
/// returned statement.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the line.
/// - `env`: Environment used to resolve variable references.
///
/// # Returns
/// A [`Statement::Assignment`].
///
/// # Errors
/// - A syntax error if the line is not of the form `name = expression`.
/// - `UndefinedVariable` if the right-hand side references an unbound name.
pub fn parse_assignment(tokens: &mut TokenStream, env: &Environment) -> ParseResult<Statement> {
    let name = parse_identifier(tokens)?;
    tokens.consume(Token::Equals)?;
    let value = parse_expression(tokens, env)?;
    expect_end(tokens)?;

    Ok(Statement::Assignment { name, value })
}

/// Parses a whole line as a bare expression.
///
/// # Errors
/// Returns any error from [`parse_expression`], or `TrailingInput` if the
/// expression ends before the line does.
pub fn parse_standalone_expression(tokens: &mut TokenStream,
                                   env: &Environment)
                                   -> ParseResult<Expression> {
    let expr = parse_expression(tokens, env)?;
    expect_end(tokens)?;
    Ok(expr)
}
