use std::fmt;

use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in a calculator line.
///
/// Every token covers exactly one character: numbers and names are assembled
/// character by character by the parser, not by the lexer. Characters outside
/// the grammar become [`Token::Unknown`] so they can be reported where the
/// parser meets them.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// A single decimal digit.
    #[regex(r"[0-9]", single_char)]
    Digit(char),
    /// A single letter, in any script; runs of letters form identifiers.
    #[regex(r"\p{L}", single_char)]
    Letter(char),
    /// `.`
    #[token(".")]
    Dot,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Any character the grammar does not use.
    Unknown(char),
}

impl Token {
    /// Returns the character this token was read from.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Digit(c) | Self::Letter(c) | Self::Unknown(c) => c,
            Self::Dot => '.',
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Star => '*',
            Self::Slash => '/',
            Self::Equals => '=',
            Self::LParen => '(',
            Self::RParen => ')',
            Self::Comma => ',',
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

fn single_char(lex: &logos::Lexer<Token>) -> Option<char> {
    lex.slice().chars().next()
}

/// Removes all whitespace from a line.
///
/// Whitespace is not part of the grammar, so `x = 3 + 4` and `x=3+4` are the
/// same line. Note that this also joins digits: `1 2` reads as `12`.
///
/// # Example
/// ```
/// use linecalc::interpreter::lexer::strip_whitespace;
///
/// assert_eq!(strip_whitespace(" max( 3, 7 )\t"), "max(3,7)");
/// ```
#[must_use]
pub fn strip_whitespace(line: &str) -> String {
    line.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Splits a whitespace-free line into one token per character.
///
/// Each character is classified on its own, so no token ever spans two
/// characters. Never fails: unrecognized characters become
/// [`Token::Unknown`].
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    source.chars().map(classify).collect()
}

fn classify(c: char) -> Token {
    let mut buf = [0; 4];
    let mut lexer = Token::lexer(c.encode_utf8(&mut buf));

    match lexer.next() {
        Some(Ok(token)) if lexer.remainder().is_empty() => token,
        _ => Token::Unknown(c),
    }
}

/// How many expressions may be open at once while parsing one line.
///
/// Every parenthesized group and every builtin argument opens a new
/// expression. Past this limit parsing fails with
/// [`ParseError::NestingTooDeep`].
pub const MAX_NESTING_DEPTH: usize = 128;

/// A forward-only cursor over the tokens of one line.
///
/// The stream offers one token of lookahead through [`TokenStream::peek`] and a
/// second through [`TokenStream::peek_next`], which the grammar needs for `==`
/// and for the `()` form of a builtin call. There is no way to step back except
/// [`TokenStream::reset`], which restarts the whole line.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens:   Vec<Token>,
    position: usize,
    depth:    usize,
}

impl TokenStream {
    /// Creates a stream over a non-empty token sequence.
    ///
    /// # Errors
    /// Returns [`ParseError::EmptyInput`] if `tokens` is empty.
    pub fn new(tokens: Vec<Token>) -> ParseResult<Self> {
        if tokens.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        Ok(Self { tokens,
                  position: 0,
                  depth: 0 })
    }

    /// Strips whitespace from `line`, tokenizes it and wraps the result.
    ///
    /// # Errors
    /// Returns [`ParseError::EmptyInput`] if the line is blank.
    ///
    /// # Example
    /// ```
    /// use linecalc::{
    ///     error::ParseError,
    ///     interpreter::lexer::{Token, TokenStream},
    /// };
    ///
    /// let stream = TokenStream::from_line("1 + x").unwrap();
    /// assert_eq!(stream.peek(), Some(Token::Digit('1')));
    /// assert_eq!(stream.peek_next(), Some(Token::Plus));
    ///
    /// assert_eq!(TokenStream::from_line("   ").unwrap_err(), ParseError::EmptyInput);
    /// ```
    pub fn from_line(line: &str) -> ParseResult<Self> {
        Self::new(tokenize(&strip_whitespace(line)))
    }

    /// Returns the token at the cursor without advancing.
    #[must_use]
    pub fn peek(&self) -> Option<Token> {
        self.tokens.get(self.position).copied()
    }

    /// Returns the token after the one at the cursor.
    #[must_use]
    pub fn peek_next(&self) -> Option<Token> {
        self.tokens.get(self.position + 1).copied()
    }

    /// Current cursor position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Whether every token has been consumed.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Consumes and returns the token at the cursor, if any.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.peek()?;
        self.position += 1;
        Some(token)
    }

    /// Consumes the token at the cursor if it equals `expected`.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedToken`] carrying both tokens if the
    /// cursor holds anything else, including the end of input. The cursor
    /// does not move on failure.
    pub fn consume(&mut self, expected: Token) -> ParseResult<()> {
        match self.peek() {
            Some(token) if token == expected => {
                self.position += 1;
                Ok(())
            },
            found => Err(ParseError::UnexpectedToken { expected,
                                                       found,
                                                       position: self.position }),
        }
    }

    /// Opens one more level of expression nesting.
    ///
    /// # Errors
    /// Returns [`ParseError::NestingTooDeep`] if [`MAX_NESTING_DEPTH`] levels
    /// are already open.
    pub const fn descend(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { limit:    MAX_NESTING_DEPTH,
                                                    position: self.position, });
        }
        self.depth += 1;
        Ok(())
    }

    /// Closes the innermost level opened by [`TokenStream::descend`].
    pub const fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Moves the cursor back to the start of the line.
    pub const fn reset(&mut self) {
        self.position = 0;
        self.depth = 0;
    }
}
