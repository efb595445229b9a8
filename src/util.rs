/// Numeric helpers.
///
/// Floor division and modulo for integers and reals, checked integer
/// arithmetic and the integer-to-real conversion used when operand kinds are
/// mixed. Every fallible helper reports a `RuntimeError` instead of
/// panicking or wrapping silently.
pub mod num;
