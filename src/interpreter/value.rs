/// Runtime values.
///
/// Defines [`core::Value`], the four kinds of data a program manipulates, and
/// [`core::Number`], the numeric view arithmetic is carried out on.
pub mod core;
