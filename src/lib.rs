//! # cinder
//!
//! cinder is an interpreter for a small imperative, C-like teaching language
//! written in Rust. Source text is parsed into an abstract syntax tree which
//! is then executed directly by a tree-walking evaluator.
//!
//! ```
//! let source = r"
//!     int square(int x) { return x * x; }
//!     int main() { return square(n) + 1; }
//! ";
//!
//! assert_eq!(cinder::run(source, [("n", 6_i64)]).unwrap(), 37);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, Write};

use tracing::debug;

use crate::{
    ast::Program,
    error::RuntimeError,
    interpreter::{evaluator::core::Context, value::core::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the expression, statement, function and program
/// types that represent source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines node types for all language constructs.
/// - Defines the closed operator and type-name enums together with their
///   source spellings.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing
/// or evaluating code. Parse errors carry the source position of the
/// failure; runtime errors describe the faulty operation.
///
/// # Responsibilities
/// - Defines the error enums for both phases.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the value
/// representation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General numeric helpers.
///
/// Floor division and modulo, checked integer arithmetic and conversion
/// between integers and reals, shared by the evaluator.
pub mod util;

pub use interpreter::parser::core::parse;

/// Executes a parsed program and returns the integer result of `main`.
///
/// `bindings` are declared, in order, in the scope `main` runs in; a name
/// that appears twice keeps its last value. `print` writes to standard
/// output.
///
/// # Returns
/// The value of the first `return` reached in `main`, or `-1` if `main`
/// finishes without returning.
///
/// # Errors
/// Any [`RuntimeError`], including [`RuntimeError::MissingMain`] when the
/// program has no `main` function.
///
/// # Example
/// ```
/// use cinder::{evaluate, parse};
///
/// let program = parse("int main() { return a / b; }").unwrap();
/// assert_eq!(evaluate(&program, [("a", 7_i64), ("b", 2_i64)]).unwrap(), 3);
/// ```
pub fn evaluate<I, S, V>(program: &Program, bindings: I) -> Result<i64, RuntimeError>
    where I: IntoIterator<Item = (S, V)>,
          S: AsRef<str>,
          V: Into<Value>
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    evaluate_with_output(program, bindings, &mut out)
}

/// Like [`evaluate`], but `print` output goes to `out`.
///
/// `out` is flushed once the program finishes successfully. An error raised
/// by the program is returned as is, without flushing.
///
/// # Example
/// ```
/// use cinder::{evaluate_with_output, parse};
///
/// let program = parse(r#"int main() { print("hi"); print(2.0); }"#).unwrap();
/// let mut out = Vec::new();
///
/// let result = evaluate_with_output(&program, Vec::<(&str, i64)>::new(), &mut out);
///
/// assert_eq!(result.unwrap(), -1);
/// assert_eq!(String::from_utf8(out).unwrap(), "hi\n2.0\n");
/// ```
pub fn evaluate_with_output<I, S, V>(program: &Program,
                                     bindings: I,
                                     out: &mut dyn Write)
                                     -> Result<i64, RuntimeError>
    where I: IntoIterator<Item = (S, V)>,
          S: AsRef<str>,
          V: Into<Value>
{
    let result = Context::new(program, out).run_main(bindings);
    debug!(?result, "evaluation finished");
    let result = result?;
    out.flush()
       .map_err(|e| RuntimeError::Output { details: e.to_string() })?;
    Ok(result)
}


/// Parses and executes source code in one step.
///
/// # Errors
/// Returns the parse error if the source does not parse, and the runtime
/// error if execution fails.
///
/// # Examples
/// ```
/// use cinder::run;
///
/// let source = "int main() { int x = 10; { int x = 20; } return x; }";
/// assert_eq!(run(source, [("unused", 0_i64)]).unwrap(), 10);
///
/// // 'y' is never declared.
/// assert!(run("int main() { return y; }", [("x", 1_i64)]).is_err());
/// ```
pub fn run<I, S, V>(source: &str, bindings: I) -> Result<i64, Box<dyn std::error::Error>>
    where I: IntoIterator<Item = (S, V)>,
          S: AsRef<str>,
          V: Into<Value>
{
    let program = parse(source)?;
    Ok(evaluate(&program, bindings)?)
}
