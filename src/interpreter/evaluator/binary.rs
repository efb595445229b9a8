use std::cmp::Ordering;

use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{Number, Value},
    },
    util::num::{checked, div_real, floor_div, floor_div_real, floor_mod, floor_mod_real},
};

impl Context<'_, '_> {
    /// Evaluates a binary operation node.
    ///
    /// Both operands are always evaluated, left first, before the operator
    /// is applied. This holds for `&&` and `||` as well: their right operand
    /// runs even when the left one already decides the result.
    pub fn eval_binary_op(&mut self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr)
                          -> EvalResult<Value> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        eval_binary(op, &left, &right)
    }
}

/// Applies a binary operator to two evaluated operands.
///
/// Booleans take part in arithmetic as `0` and `1`. Integer arithmetic is
/// checked; mixing an integer with a real produces a real. `+` also joins two
/// strings.
///
/// `/` floors whenever the left operand is an integer or boolean, and is true
/// division when it is a real. `%` always floors, so the sign of the result
/// follows the divisor.
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] for `/` or `%` by zero.
/// - [`RuntimeError::Overflow`] when integer arithmetic overflows.
/// - [`RuntimeError::TypeError`] for arithmetic on strings and for ordering
///   comparisons between a string and a number.
///
/// # Example
/// ```
/// use cinder::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, value::core::Value},
/// };
///
/// let div = |a: Value, b: Value| eval_binary(BinaryOperator::Div, &a, &b).unwrap();
///
/// assert_eq!(div(Value::Integer(7), Value::Integer(2)), Value::Integer(3));
/// assert_eq!(div(Value::Real(7.0), Value::Integer(2)), Value::Real(3.5));
/// assert_eq!(div(Value::Integer(7), Value::Real(2.0)), Value::Real(3.0));
/// ```
pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
        Sub,
    };

    match op {
        Add => {
            if let (Value::Str(a), Value::Str(b)) = (left, right) {
                return Ok(Value::Str(format!("{a}{b}")));
            }
            arithmetic(op,
                       left,
                       right,
                       |a, b| checked(a, "+", b, i64::checked_add),
                       |a, b| Ok(a + b))
        },
        Sub => arithmetic(op,
                          left,
                          right,
                          |a, b| checked(a, "-", b, i64::checked_sub),
                          |a, b| Ok(a - b)),
        Mul => arithmetic(op,
                          left,
                          right,
                          |a, b| checked(a, "*", b, i64::checked_mul),
                          |a, b| Ok(a * b)),
        Div => divide(left, right),
        Mod => arithmetic(op, left, right, floor_mod, floor_mod_real),
        Equal => {
            Ok(Value::Bool(ordering(op, left, right).ok().flatten() == Some(Ordering::Equal)))
        },
        NotEqual => {
            Ok(Value::Bool(ordering(op, left, right).ok().flatten() != Some(Ordering::Equal)))
        },
        Less => compare(op, left, right, Ordering::is_lt),
        Greater => compare(op, left, right, Ordering::is_gt),
        LessEqual => compare(op, left, right, Ordering::is_le),
        GreaterEqual => compare(op, left, right, Ordering::is_ge),
        And => Ok(Value::Bool(left.is_truthy() && right.is_truthy())),
        Or => Ok(Value::Bool(left.is_truthy() || right.is_truthy())),
    }
}

/// Reduces both operands to numbers and applies the integer or the real
/// version of an operator.
fn arithmetic(op: BinaryOperator,
              left: &Value,
              right: &Value,
              on_integers: fn(i64, i64) -> EvalResult<i64>,
              on_reals: fn(f64, f64) -> EvalResult<f64>)
              -> EvalResult<Value> {
    match numbers(op, left, right)? {
        (Number::Integer(a), Number::Integer(b)) => on_integers(a, b).map(Value::Integer),
        (a, b) => on_reals(a.to_real(), b.to_real()).map(Value::Real),
    }
}

fn divide(left: &Value, right: &Value) -> EvalResult<Value> {
    match numbers(BinaryOperator::Div, left, right)? {
        (Number::Integer(a), Number::Integer(b)) => floor_div(a, b).map(Value::Integer),
        (a @ Number::Integer(_), b) => floor_div_real(a.to_real(), b.to_real()).map(Value::Real),
        (a, b) => div_real(a.to_real(), b.to_real()).map(Value::Real),
    }
}

fn numbers(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<(Number, Number)> {
    match (left.as_number(), right.as_number()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(mismatch(op, left, right)),
    }
}

fn compare(op: BinaryOperator,
           left: &Value,
           right: &Value,
           test: fn(Ordering) -> bool)
           -> EvalResult<Value> {
    Ok(Value::Bool(ordering(op, left, right)?.is_some_and(test)))
}

/// Orders two values.
///
/// Numbers compare by value whatever their kind, strings compare
/// lexicographically. `Ok(None)` means the kinds are comparable but the
/// values are unordered (a NaN operand).
///
/// # Errors
/// [`RuntimeError::TypeError`] when one operand is a string and the other is
/// not.
fn ordering(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Option<Ordering>> {
    if let (Value::Str(a), Value::Str(b)) = (left, right) {
        return Ok(Some(a.cmp(b)));
    }
    match numbers(op, left, right)? {
        (Number::Integer(a), Number::Integer(b)) => Ok(Some(a.cmp(&b))),
        (a, b) => Ok(a.to_real().partial_cmp(&b.to_real())),
    }
}

fn mismatch(op: BinaryOperator, left: &Value, right: &Value) -> RuntimeError {
    RuntimeError::TypeError { details: format!("cannot apply '{op}' to {} and {}",
                                               left.type_name(),
                                               right.type_name()), }
}
