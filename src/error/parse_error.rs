use crate::interpreter::lexer::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a token that no grammar alternative accepts.
    UnexpectedToken {
        /// The token encountered.
        found:    String,
        /// The alternatives that would have been accepted here.
        expected: Vec<String>,
        /// Where the token starts.
        position: Position,
    },
    /// Reached the end of input while a rule still needed tokens.
    UnexpectedEndOfInput {
        /// The alternatives that would have been accepted here.
        expected: Vec<String>,
        /// The end of the source.
        position: Position,
    },
    /// The lexer could not recognise a character sequence.
    InvalidToken {
        /// The offending source text.
        slice:    String,
        /// Where the text starts.
        position: Position,
    },
    /// A unary expression carried both a prefix and a postfix operator.
    ConflictingUnary {
        /// Where the postfix operator starts.
        position: Position,
    },
}

impl ParseError {
    /// Source position at which the failure was detected.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position, .. }
            | Self::InvalidToken { position, .. }
            | Self::ConflictingUnary { position } => *position,
        }
    }

    /// The grammar alternatives that were exhausted at the failure point.
    #[must_use]
    pub fn expected(&self) -> &[String] {
        match self {
            Self::UnexpectedToken { expected, .. } | Self::UnexpectedEndOfInput { expected, .. } => {
                expected
            },
            Self::InvalidToken { .. } | Self::ConflictingUnary { .. } => &[],
        }
    }

    /// Keeps whichever of two failures got further into the source.
    ///
    /// Failures at the same position are combined by merging their expected
    /// alternatives, so the final report lists everything that was tried
    /// there.
    ///
    /// # Example
    /// ```
    /// use cinder::{error::ParseError, interpreter::lexer::Position};
    ///
    /// let at = |offset| Position { offset, line: 1, column: offset + 1 };
    /// let near = ParseError::UnexpectedToken { found:    "}".into(),
    ///                                          expected: vec!["';'".into()],
    ///                                          position: at(3), };
    /// let far = ParseError::UnexpectedToken { found:    "}".into(),
    ///                                         expected: vec!["')'".into()],
    ///                                         position: at(9), };
    ///
    /// assert_eq!(near.furthest(far).position().offset, 9);
    /// ```
    #[must_use]
    pub fn furthest(self, other: Self) -> Self {
        let (mine, theirs) = (self.position().offset, other.position().offset);
        if mine > theirs {
            return self;
        }
        if theirs > mine {
            return other;
        }

        match (self, other) {
            (Self::UnexpectedToken { found,
                                     mut expected,
                                     position, },
             other) => {
                expected.extend(other.expected().iter().cloned());
                Self::UnexpectedToken { found,
                                        expected: normalize(expected),
                                        position }
            },
            (Self::UnexpectedEndOfInput { mut expected,
                                          position, },
             other) => {
                expected.extend(other.expected().iter().cloned());
                Self::UnexpectedEndOfInput { expected: normalize(expected),
                                             position }
            },
            (first, _) => first,
        }
    }
}

fn normalize(mut expected: Vec<String>) -> Vec<String> {
    expected.sort();
    expected.dedup();
    expected
}

fn join_expected(expected: &[String]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [single] => single.clone(),
        [init @ .., last] => format!("{} or {last}", init.join(", ")),
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { found,
                                    expected,
                                    position, } => write!(f,
                                                          "Error at {position}: Unexpected token {found}, expected {}.",
                                                          join_expected(expected)),

            Self::UnexpectedEndOfInput { expected, position } => write!(f,
                                                                        "Error at {position}: Unexpected end of input, expected {}.",
                                                                        join_expected(expected)),

            Self::InvalidToken { slice, position } => {
                write!(f, "Error at {position}: Unrecognised input '{slice}'.")
            },

            Self::ConflictingUnary { position } => write!(f,
                                                          "Error at {position}: An operand cannot carry both a prefix and a postfix operator."),
        }
    }
}

impl std::error::Error for ParseError {}
