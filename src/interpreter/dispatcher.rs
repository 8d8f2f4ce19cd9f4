use log::debug;

use crate::{
    ast::Statement,
    error::{Error, ParseError},
    interpreter::{
        environment::Environment,
        evaluator::core::EvalResult,
        lexer::TokenStream,
        parser::statement::{parse_assignment, parse_standalone_expression},
    },
};

/// Handles input one line at a time against a persistent environment.
///
/// Every line is first tried as an assignment. If that attempt fails with a
/// syntax error, the same line is parsed again from the start as a plain
/// expression. Any other failure, and any failure of the second attempt, is
/// the line's result. Nothing but the environment carries over between lines.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    environment: Environment,
}

impl Interpreter {
    /// Creates an interpreter with a fresh default environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an interpreter around an existing environment, for example one
    /// with extra builtins registered.
    #[must_use]
    pub const fn with_environment(environment: Environment) -> Self {
        Self { environment }
    }

    /// The interpreter's environment.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Mutable access to the environment, for registering builtins mid-session.
    pub const fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    /// Parses one line without executing it.
    ///
    /// # Errors
    /// - `EmptyInput` for a blank line.
    /// - `UndefinedVariable` from either attempt; it is never retried.
    /// - Any error from the expression attempt.
    pub fn parse_line(&self, line: &str) -> Result<Statement, ParseError> {
        let mut tokens = TokenStream::from_line(line)?;

        match parse_assignment(&mut tokens, &self.environment) {
            Ok(statement) => return Ok(statement),
            Err(e) if e.is_syntax_error() => {
                debug!("not an assignment ({e}); parsing {line:?} as an expression");
            },
            Err(e) => return Err(e),
        }

        tokens.reset();
        parse_standalone_expression(&mut tokens, &self.environment).map(Statement::Expression)
    }

    /// Applies a parsed statement.
    ///
    /// An assignment stores its expression unevaluated and produces no value.
    /// An expression is evaluated and its value returned.
    ///
    /// # Errors
    /// Returns any `RuntimeError` raised while evaluating an expression.
    pub fn execute(&mut self, statement: Statement) -> EvalResult<Option<f64>> {
        match statement {
            Statement::Assignment { name, value } => {
                self.environment.define(name, value);
                Ok(None)
            },
            Statement::Expression(expr) => self.environment.evaluate(&expr).map(Some),
        }
    }

    /// Parses and executes one line.
    ///
    /// # Returns
    /// `None` for an accepted assignment, or the value of an expression line.
    ///
    /// # Errors
    /// Returns the first parse or runtime error of the line. A failing line
    /// leaves the environment unchanged.
    ///
    /// # Example
    /// ```
    /// use linecalc::interpreter::dispatcher::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    /// assert_eq!(interpreter.execute_line("x = 3 + 4"), Ok(None));
    /// assert_eq!(interpreter.execute_line("x * 2"), Ok(Some(14.0)));
    /// ```
    pub fn execute_line(&mut self, line: &str) -> Result<Option<f64>, Error> {
        let statement = self.parse_line(line)?;
        Ok(self.execute(statement)?)
    }
}
