/// The evaluator module executes a parsed program.
///
/// The evaluator walks the AST directly: it evaluates expressions, executes
/// statements, manages call frames and scopes, and carries `return` values
/// out of nested blocks and loops.
///
/// # Responsibilities
/// - Evaluates every expression and statement kind of the language.
/// - Binds variables with lexical scoping and shadowing.
/// - Reports runtime errors such as unknown names, arity mismatches and
///   division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens,
/// each tagged with its line and column. Whitespace and comments are
/// dropped here.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Recognises keywords, type names, literals, identifiers and operators.
/// - Reports input that forms no token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with ordered, backtracking alternatives. When
/// no alternative matches, the failure that got furthest into the source is
/// reported.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
pub mod value;
