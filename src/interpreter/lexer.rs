use logos::Logos;

use crate::{ast::TypeName, error::ParseError};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Whitespace and comments never reach the parser.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Real literal tokens, such as `3.14`.
    #[regex(r"[0-9]+\.[0-9]+", parse_float)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal tokens, such as `"hello"`. Quotes are stripped.
    #[regex(r#""[^"]*""#, parse_string)]
    Str(String),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// Type names: `int`, `float`, `char`, `bool` and `void`.
    #[token("int", |_| TypeName::Int)]
    #[token("float", |_| TypeName::Float)]
    #[token("char", |_| TypeName::Char)]
    #[token("bool", |_| TypeName::Bool)]
    #[token("void", |_| TypeName::Void)]
    Type(TypeName),
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `for`
    #[token("for")]
    For,
    /// `return`
    #[token("return")]
    Return,
    /// `print`
    #[token("print")]
    Print,
    /// Identifier tokens; variable or function names such as `x` or `isPrime`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// ```
    /// /* Multi line comments. */
    /// ```
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", |lex| {
        track_newlines(lex);
        logos::Skip
    })]
    MultiLineComment,
    /// `++`
    #[token("++")]
    PlusPlus,
    /// `--`
    #[token("--")]
    MinusMinus,
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
    /// `%`
    #[token("%")]
    Percent,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    PipePipe,
    /// `!`
    #[token("!")]
    Bang,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,

    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "real literal {r:?}"),
            Self::Integer(n) => write!(f, "integer literal {n}"),
            Self::Str(s) => write!(f, "string literal \"{s}\""),
            Self::Bool(b) => write!(f, "'{b}'"),
            Self::Type(ty) => write!(f, "'{ty}'"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            other => write!(f, "'{}'", symbol(other)),
        }
    }
}

/// Returns the source spelling of a keyword or punctuation token.
const fn symbol(token: &Token) -> &'static str {
    match token {
        Token::If => "if",
        Token::Else => "else",
        Token::While => "while",
        Token::For => "for",
        Token::Return => "return",
        Token::Print => "print",
        Token::PlusPlus => "++",
        Token::MinusMinus => "--",
        Token::Plus => "+",
        Token::Minus => "-",
        Token::Star => "*",
        Token::Slash => "/",
        Token::Percent => "%",
        Token::EqualEqual => "==",
        Token::BangEqual => "!=",
        Token::LessEqual => "<=",
        Token::GreaterEqual => ">=",
        Token::Less => "<",
        Token::Greater => ">",
        Token::AndAnd => "&&",
        Token::PipePipe => "||",
        Token::Bang => "!",
        Token::Equals => "=",
        Token::LParen => "(",
        Token::RParen => ")",
        Token::LBrace => "{",
        Token::RBrace => "}",
        Token::Semicolon => ";",
        Token::Comma => ",",
        _ => "?",
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset at which it starts, so every
/// token can be given a line and column.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

/// A location in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Byte offset from the start of the source.
    pub offset: usize,
    /// 1-based line number.
    pub line:   usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// The complete token sequence of a source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Tokens {
    /// Tokens paired with the position where each one starts.
    pub tokens: Vec<(Token, Position)>,
    /// The position just past the last character of the source.
    pub end:    Position,
}

/// Splits source text into positioned tokens.
///
/// # Errors
/// Returns [`ParseError::InvalidToken`] for the first character sequence that
/// matches no token (for example a lone `&`, or an integer too large for
/// `i64`).
///
/// # Example
/// ```
/// use cinder::interpreter::lexer::{Token, tokenize};
///
/// let lexed = tokenize("int x = 1; // trailing comment").unwrap();
/// let kinds: Vec<_> = lexed.tokens.iter().map(|(tok, _)| tok.clone()).collect();
///
/// assert_eq!(kinds.len(), 5);
/// assert_eq!(kinds[1], Token::Identifier("x".into()));
/// assert_eq!(lexed.tokens[3].1.column, 9);
/// ```
pub fn tokenize(source: &str) -> Result<Tokens, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line:       1,
                                                                    line_start: 0, });

    while let Some(token) = lexer.next() {
        let position = position_at(source,
                                   lexer.span().start,
                                   lexer.extras.line,
                                   lexer.extras.line_start);
        match token {
            Ok(tok) => {
                if matches!(tok, Token::Str(_)) {
                    track_newlines(&mut lexer);
                }
                tokens.push((tok, position));
            },
            Err(()) => {
                return Err(ParseError::InvalidToken { slice: lexer.slice().to_string(),
                                                      position });
            },
        }
    }

    let end = position_at(source,
                          source.len(),
                          lexer.extras.line,
                          lexer.extras.line_start);
    Ok(Tokens { tokens, end })
}

fn position_at(source: &str, offset: usize, line: usize, line_start: usize) -> Position {
    let column = source.get(line_start..offset)
                       .map_or(0, |prefix| prefix.chars().count())
                 + 1;
    Position { offset, line, column }
}

/// Advances the line counter past newlines embedded in a multi-line token.
fn track_newlines(lex: &mut logos::Lexer<Token>) {
    let start = lex.span().start;
    let slice = lex.slice();
    let newlines = slice.matches('\n').count();
    if let Some(last) = slice.rfind('\n') {
        lex.extras.line += newlines;
        lex.extras.line_start = start + last + 1;
    }
}

/// Parses a floating-point literal from the current token slice.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit into an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
/// Strips the quotes off a string literal. Strings may span lines; the
/// line counter is advanced by [`tokenize`] once the token's own position is
/// taken.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}
/// Parses a boolean literal from the current token slice (`true` or `false`).
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap()
                        .tokens
                        .into_iter()
                        .map(|(tok, _)| tok)
                        .collect()
    }

    #[test]
    fn keywords_win_over_identifiers() {
        assert_eq!(kinds("int integer return returns"),
                   vec![Token::Type(TypeName::Int),
                        Token::Identifier("integer".into()),
                        Token::Return,
                        Token::Identifier("returns".into())]);
    }

    #[test]
    fn comments_are_skipped_and_lines_tracked() {
        let lexed = tokenize("/* a\n * b */ x // c\n  y").unwrap();
        assert_eq!(lexed.tokens.len(), 2);
        assert_eq!(lexed.tokens[0].1,
                   Position { offset: 13,
                              line:   2,
                              column: 9, });
        assert_eq!(lexed.tokens[1].1.line, 3);
        assert_eq!(lexed.tokens[1].1.column, 3);
    }

    #[test]
    fn multi_line_strings_start_where_they_open() {
        let lexed = tokenize("return 1 \"a\nb\"; x").unwrap();
        assert_eq!(lexed.tokens[2].0, Token::Str("a\nb".into()));
        assert_eq!(lexed.tokens[2].1,
                   Position { offset: 9,
                              line:   1,
                              column: 10, });
        assert_eq!(lexed.tokens[3].1.line, 2);
        assert_eq!(lexed.tokens[3].1.column, 3);
        assert_eq!(lexed.tokens[4].1.column, 5);
    }

    #[test]
    fn longest_operator_is_chosen() {
        assert_eq!(kinds("i++ <= --j"),
                   vec![Token::Identifier("i".into()),
                        Token::PlusPlus,
                        Token::LessEqual,
                        Token::MinusMinus,
                        Token::Identifier("j".into())]);
    }

    #[test]
    fn literals_keep_their_kind() {
        assert_eq!(kinds(r#"7 7.5 "hi there" false"#),
                   vec![Token::Integer(7),
                        Token::Real(7.5),
                        Token::Str("hi there".into()),
                        Token::Bool(false)]);
    }

    #[test]
    fn unknown_characters_are_rejected() {
        let err = tokenize("int x = a & b;").unwrap_err();
        assert!(matches!(err, ParseError::InvalidToken { ref slice, .. } if slice == "&"));
        assert_eq!(err.position().column, 11);
    }
}
