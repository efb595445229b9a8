/// Entry points and top-level rules.
///
/// Contains [`core::parse`], the program and function rules, and the
/// expression rule that decides between assignment and a plain operator
/// expression.
pub mod core;

/// Unary operator and primary expression parsing.
///
/// Handles the optional prefix and postfix operators around a primary, and
/// the primaries themselves: calls, literals, parenthesized expressions and
/// variables.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the precedence levels from logical OR down to
/// multiplication.
pub mod binary;

/// Block parsing.
pub mod block;

/// Utility functions for the parser.
///
/// Provides the backtracking combinators and the small token-level rules
/// that several grammar rules share.
pub mod utils;

/// Statement parsing.
///
/// Declarations, control flow, `return`, `print` and expression statements.
pub mod statement;

/// The backtracking token cursor every rule operates on.
pub mod stream;
