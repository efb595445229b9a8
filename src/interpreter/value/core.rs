use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::i64_to_f64,
};

/// Represents a runtime value in the interpreter.
///
/// Variables are untyped; a name may hold any kind of value and the kind may
/// change on assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Real(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison and logical operators. In arithmetic it counts
    /// as `1` or `0`.
    Bool(bool),
    /// A string. Strings only come from literals and `+` concatenation.
    Str(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => Self::Integer(*n),
            LiteralValue::Real(r) => Self::Real(*r),
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Str(s) => Self::Str(s.clone()),
        }
    }
}

/// A value reduced to the two numeric kinds arithmetic works on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Integers and booleans.
    Integer(i64),
    /// Reals.
    Real(f64),
}

impl Number {
    /// The number as an `f64`, converting integers.
    #[must_use]
    pub fn to_real(self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64(n),
            Self::Real(r) => r,
        }
    }
}

impl Value {
    /// Truthiness used by conditions and the logical operators.
    ///
    /// `false`, `0`, `0.0` and the empty string are false; everything else is
    /// true.
    ///
    /// # Example
    /// ```
    /// use cinder::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(-3).is_truthy());
    /// assert!(!Value::Real(0.0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0,
            Self::Bool(b) => *b,
            Self::Str(s) => !s.is_empty(),
        }
    }

    /// Returns the numeric view of the value, or `None` for strings.
    ///
    /// Booleans become the integers `0` and `1`.
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Integer(n) => Some(Number::Integer(*n)),
            Self::Bool(b) => Some(Number::Integer(i64::from(*b))),
            Self::Real(r) => Some(Number::Real(*r)),
            Self::Str(_) => None,
        }
    }

    /// Converts the value into the integer a program run yields.
    ///
    /// # Errors
    /// [`RuntimeError::TypeError`] for reals and strings.
    ///
    /// # Example
    /// ```
    /// use cinder::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(7).as_exit_code().unwrap(), 7);
    /// assert_eq!(Value::Bool(true).as_exit_code().unwrap(), 1);
    /// assert!(Value::Real(1.5).as_exit_code().is_err());
    /// ```
    pub fn as_exit_code(&self) -> EvalResult<i64> {
        match self.as_number() {
            Some(Number::Integer(n)) => Ok(n),
            _ => Err(RuntimeError::TypeError { details: format!("main must return an integer, \
                                                                 got {}",
                                                                self.type_name()), }),
        }
    }

    /// A short name of the value's kind, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Bool(_) => "bool",
            Self::Str(_) => "string",
        }
    }
}

impl std::fmt::Display for Value {
    /// Formats values the way `print` shows them. Reals always keep a
    /// fractional part so `2.0` never reads as an integer.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r:?}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_print_output() {
        assert_eq!(Value::Integer(-4).to_string(), "-4");
        assert_eq!(Value::Real(3.0).to_string(), "3.0");
        assert_eq!(Value::Real(3.5).to_string(), "3.5");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::from("is prime").to_string(), "is prime");
    }

    #[test]
    fn booleans_are_numeric() {
        assert_eq!(Value::Bool(true).as_number(), Some(Number::Integer(1)));
        assert_eq!(Value::Bool(false).as_number(), Some(Number::Integer(0)));
        assert_eq!(Value::from("1").as_number(), None);
    }

    #[test]
    fn literals_convert_to_values() {
        assert_eq!(Value::from(&LiteralValue::Real(0.5)), Value::Real(0.5));
        assert_eq!(Value::from(&LiteralValue::Str("a".into())), Value::from("a"));
    }

    #[test]
    fn strings_cannot_be_exit_codes() {
        assert!(matches!(Value::from("0").as_exit_code(),
                         Err(RuntimeError::TypeError { .. })));
    }
}
