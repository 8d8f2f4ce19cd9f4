use crate::interpreter::lexer::Token;

/// Represents all errors that can occur during tokenizing or parsing.
///
/// Positions are token offsets into the whitespace-stripped line.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line contained no characters once whitespace was removed.
    #[error("Empty input.")]
    EmptyInput,
    /// A specific token was required but a different one (or none) was found.
    #[error("Unexpected token at position {position}: expected '{expected}', found {}.",
            describe(.found))]
    UnexpectedToken {
        /// The token the grammar required.
        expected: Token,
        /// The token actually at the cursor, `None` at end of input.
        found:    Option<Token>,
        /// Cursor position of the mismatch.
        position: usize,
    },
    /// No factor (number, group, variable or call) starts at the cursor.
    #[error("Expected a number, '(' or a name at position {position}, found {}.",
            describe(.found))]
    ExpectedFactor {
        /// The token actually at the cursor, `None` at end of input.
        found:    Option<Token>,
        /// Cursor position of the mismatch.
        position: usize,
    },
    /// An assignment target did not start with a letter.
    #[error("Expected a name at position {position}, found {}.", describe(.found))]
    ExpectedIdentifier {
        /// The token actually at the cursor, `None` at end of input.
        found:    Option<Token>,
        /// Cursor position of the mismatch.
        position: usize,
    },
    /// Tokens remained after a complete statement.
    #[error("Unexpected trailing input at position {position}: '{found}'.")]
    TrailingInput {
        /// The first token left over.
        found:    Token,
        /// Cursor position of the leftover token.
        position: usize,
    },
    /// Parentheses or builtin calls nested deeper than the parser allows.
    #[error("Expression nested deeper than {limit} levels at position {position}.")]
    NestingTooDeep {
        /// The nesting limit that was hit.
        limit:    usize,
        /// Cursor position where the limit was reached.
        position: usize,
    },
    /// A variable was referenced before any assignment bound it.
    #[error("Undefined variable '{name}' referenced before assignment.")]
    UndefinedVariable {
        /// The name of the variable.
        name:     String,
        /// Cursor position just after the name.
        position: usize,
    },
}

impl ParseError {
    /// Whether this error is a structural mismatch in the grammar.
    ///
    /// Only syntax errors make the line dispatcher retry a failed assignment
    /// as a plain expression. [`ParseError::UndefinedVariable`] and
    /// [`ParseError::EmptyInput`] are not syntax errors.
    ///
    /// # Example
    /// ```
    /// use linecalc::error::ParseError;
    ///
    /// let err = ParseError::ExpectedFactor { found: None, position: 0 };
    /// assert!(err.is_syntax_error());
    ///
    /// let err = ParseError::UndefinedVariable { name: "z".to_string(), position: 1 };
    /// assert!(!err.is_syntax_error());
    /// ```
    #[must_use]
    pub const fn is_syntax_error(&self) -> bool {
        matches!(self,
                 Self::UnexpectedToken { .. }
                 | Self::ExpectedFactor { .. }
                 | Self::ExpectedIdentifier { .. }
                 | Self::TrailingInput { .. }
                 | Self::NestingTooDeep { .. })
    }
}

fn describe(found: &Option<Token>) -> String {
    found.map_or_else(|| "end of input".to_string(), |token| format!("'{token}'"))
}
