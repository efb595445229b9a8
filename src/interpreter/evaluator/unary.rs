use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::eval_binary,
            core::{Context, EvalResult},
        },
        value::core::{Number, Value},
    },
};

impl Context<'_, '_> {
    /// Evaluates a unary operation.
    ///
    /// - `-x` negates a number (booleans count as `0`/`1`).
    /// - `!x` yields the negated truthiness of `x` as a boolean.
    /// - `++x`/`--x` store the updated value and yield it; `x++`/`x--` store
    ///   the updated value and yield the previous one.
    ///
    /// # Errors
    /// - [`RuntimeError::InvalidIncrementTarget`] if `++`/`--` is applied to
    ///   anything but a variable.
    /// - [`RuntimeError::TypeError`] when negating or incrementing a string.
    /// - [`RuntimeError::Overflow`] for `-i64::MIN` or an overflowing step.
    pub fn eval_unary_op(&mut self,
                         op: UnaryOperator,
                         expr: &Expr,
                         prefix: bool)
                         -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => negate(&self.eval(expr)?),
            UnaryOperator::Not => Ok(Value::Bool(!self.eval(expr)?.is_truthy())),
            UnaryOperator::Increment => self.eval_step(op, BinaryOperator::Add, expr, prefix),
            UnaryOperator::Decrement => self.eval_step(op, BinaryOperator::Sub, expr, prefix),
        }
    }

    fn eval_step(&mut self,
                 op: UnaryOperator,
                 step: BinaryOperator,
                 expr: &Expr,
                 prefix: bool)
                 -> EvalResult<Value> {
        let Expr::Variable { name } = expr else {
            return Err(RuntimeError::InvalidIncrementTarget { op: op.to_string() });
        };

        let previous = self.eval_variable(name)?;
        let updated = eval_binary(step, &previous, &Value::Integer(1))?;
        self.env.assign_nearest(name, updated.clone());

        Ok(if prefix { updated } else { previous })
    }
}

fn negate(value: &Value) -> EvalResult<Value> {
    match value.as_number() {
        Some(Number::Integer(n)) => {
            n.checked_neg()
             .map(Value::Integer)
             .ok_or_else(|| RuntimeError::Overflow { details: format!("-({n})") })
        },
        Some(Number::Real(r)) => Ok(Value::Real(-r)),
        None => Err(RuntimeError::TypeError { details: format!("cannot negate a {}",
                                                               value.type_name()), }),
    }
}
