use std::{cell::RefCell, rc::Rc};

use crate::{
    error::ParseError,
    interpreter::lexer::{Position, Token, Tokens},
};

/// A cursor over a token sequence.
///
/// Cloning the stream is cheap and records the current position; assigning a
/// clone back rewinds the parser. This is how ordered alternatives backtrack.
///
/// Failures of abandoned alternatives are remembered across rewinds, so the
/// furthest one can still be reported once every alternative is exhausted.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    tokens:   &'a [(Token, Position)],
    cursor:   usize,
    end:      Position,
    furthest: Rc<RefCell<Option<ParseError>>>,
}

impl<'a> TokenStream<'a> {
    /// Creates a stream positioned at the first token.
    #[must_use]
    pub fn new(tokens: &'a Tokens) -> Self {
        Self { tokens:   &tokens.tokens,
               cursor:   0,
               end:      tokens.end,
               furthest: Rc::new(RefCell::new(None)), }
    }

    /// Remembers the failure of an abandoned alternative.
    pub fn record(&self, error: ParseError) {
        let mut furthest = self.furthest.borrow_mut();
        *furthest = Some(match furthest.take() {
                             Some(previous) => previous.furthest(error),
                             None => error,
                         });
    }

    /// Combines `error` with every failure recorded so far and returns the
    /// one that reached furthest into the source.
    #[must_use]
    pub fn deepest(&self, error: ParseError) -> ParseError {
        match self.furthest.borrow().clone() {
            Some(recorded) => recorded.furthest(error),
            None => error,
        }
    }

    /// Returns the next token without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.cursor).map(|(tok, _)| tok)
    }

    /// Consumes and returns the next token.
    pub fn next_token(&mut self) -> Option<&'a Token> {
        let token = self.peek()?;
        self.cursor += 1;
        Some(token)
    }

    /// Position of the next token, or the end of the source.
    #[must_use]
    pub fn position(&self) -> Position {
        self.tokens
            .get(self.cursor)
            .map_or(self.end, |(_, position)| *position)
    }

    /// Returns `true` once every token has been consumed.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// Consumes the next token if it equals `expected`.
    pub fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.cursor += 1;
            return true;
        }
        false
    }

    /// Consumes the next token, which must equal `expected`.
    ///
    /// # Errors
    /// Reports the token actually found (or the end of input) together with
    /// `description` as the only expected alternative.
    pub fn expect(&mut self, expected: &Token, description: &str) -> Result<(), ParseError> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.unexpected(&[description]))
        }
    }

    /// Builds an error for the token at the current position.
    #[must_use]
    pub fn unexpected(&self, expected: &[&str]) -> ParseError {
        let expected = expected.iter().map(ToString::to_string).collect();
        let position = self.position();

        match self.peek() {
            Some(tok) => ParseError::UnexpectedToken { found: tok.to_string(),
                                                       expected,
                                                       position },
            None => ParseError::UnexpectedEndOfInput { expected, position },
        }
    }
}
