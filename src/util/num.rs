use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Converts an `i64` to the nearest `f64`.
///
/// Integers beyond `2^53` lose precision, exactly as mixed integer/real
/// arithmetic in the language does.
///
/// ## Example
/// ```
/// use cinder::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(-42), -42.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Integer division rounding toward negative infinity.
///
/// ## Errors
/// - `RuntimeError::DivisionByZero` if `divisor` is zero.
/// - `RuntimeError::Overflow` for `i64::MIN / -1`.
///
/// ## Example
/// ```
/// use cinder::{error::RuntimeError, util::num::floor_div};
///
/// assert_eq!(floor_div(7, 2).unwrap(), 3);
/// assert_eq!(floor_div(-7, 2).unwrap(), -4);
/// assert_eq!(floor_div(7, 0), Err(RuntimeError::DivisionByZero));
/// ```
pub fn floor_div(dividend: i64, divisor: i64) -> EvalResult<i64> {
    if divisor == 0 {
        return Err(RuntimeError::DivisionByZero);
    }
    let quotient = dividend.checked_div(divisor)
                           .ok_or_else(|| overflow(dividend, "/", divisor))?;
    if dividend % divisor != 0 && (dividend < 0) != (divisor < 0) {
        return Ok(quotient - 1);
    }
    Ok(quotient)
}

/// Integer remainder whose sign follows the divisor.
///
/// ## Errors
/// Returns `RuntimeError::DivisionByZero` if `divisor` is zero.
///
/// ## Example
/// ```
/// use cinder::util::num::floor_mod;
///
/// assert_eq!(floor_mod(7, 3).unwrap(), 1);
/// assert_eq!(floor_mod(-7, 3).unwrap(), 2);
/// assert_eq!(floor_mod(7, -3).unwrap(), -2);
/// ```
pub fn floor_mod(dividend: i64, divisor: i64) -> EvalResult<i64> {
    if divisor == 0 {
        return Err(RuntimeError::DivisionByZero);
    }
    let remainder = dividend.wrapping_rem(divisor);
    if remainder != 0 && (remainder < 0) != (divisor < 0) {
        return Ok(remainder + divisor);
    }
    Ok(remainder)
}

/// Real division rounded down to a whole number, for `/` with an integer
/// dividend and a real divisor (or the other way round).
///
/// ## Errors
/// Returns `RuntimeError::DivisionByZero` if `divisor` is zero.
pub fn floor_div_real(dividend: f64, divisor: f64) -> EvalResult<f64> {
    Ok(div_real(dividend, divisor)?.floor())
}

/// Plain real division.
///
/// ## Errors
/// Returns `RuntimeError::DivisionByZero` if `divisor` is zero.
///
/// ## Example
/// ```
/// use cinder::util::num::div_real;
///
/// assert_eq!(div_real(7.0, 2.0).unwrap(), 3.5);
/// assert!(div_real(1.0, 0.0).is_err());
/// ```
pub fn div_real(dividend: f64, divisor: f64) -> EvalResult<f64> {
    if divisor == 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }
    Ok(dividend / divisor)
}

/// Real remainder whose sign follows the divisor.
///
/// ## Errors
/// Returns `RuntimeError::DivisionByZero` if `divisor` is zero.
///
/// ## Example
/// ```
/// use cinder::util::num::floor_mod_real;
///
/// assert_eq!(floor_mod_real(-7.5, 2.0).unwrap(), 0.5);
/// ```
pub fn floor_mod_real(dividend: f64, divisor: f64) -> EvalResult<f64> {
    if divisor == 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }
    let remainder = dividend % divisor;
    if remainder != 0.0 && (remainder < 0.0) != (divisor < 0.0) {
        return Ok(remainder + divisor);
    }
    Ok(remainder)
}

/// Applies a checked integer operation, mapping overflow to
/// `RuntimeError::Overflow`.
///
/// ## Example
/// ```
/// use cinder::util::num::checked;
///
/// assert_eq!(checked(2, "+", 3, i64::checked_add).unwrap(), 5);
/// assert!(checked(i64::MAX, "*", 2, i64::checked_mul).is_err());
/// ```
pub fn checked(left: i64,
               symbol: &str,
               right: i64,
               op: fn(i64, i64) -> Option<i64>)
               -> EvalResult<i64> {
    op(left, right).ok_or_else(|| overflow(left, symbol, right))
}

fn overflow(left: i64, symbol: &str, right: i64) -> RuntimeError {
    RuntimeError::Overflow { details: format!("{left} {symbol} {right}") }
}
