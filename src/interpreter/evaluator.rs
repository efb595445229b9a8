/// Core evaluation logic and context management.
///
/// Contains the runtime context, the expression dispatcher, the `Flow` type
/// that carries `return` values outward, and the entry point that runs
/// `main`.
pub mod core;

/// Variable storage.
///
/// Call frames and lexical scopes, with shadowing and nearest-binding
/// assignment.
pub mod environment;

/// Statement execution.
///
/// Declarations, blocks, conditionals, loops, `return` and `print`.
pub mod statement;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparisons and the non-short-circuiting logical
/// operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements negation, logical NOT and the increment and decrement
/// operators.
pub mod unary;

/// Function evaluation.
///
/// Handles calls to user-defined functions, argument checking, and return
/// value computation.
pub mod function;
