/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: unrecognised input, tokens no rule accepts, premature end of input
/// and malformed unary expressions. Every parse error carries the source
/// position of the failure.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unknown variables or functions, arity mismatches, type mismatches and
/// arithmetic faults.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
