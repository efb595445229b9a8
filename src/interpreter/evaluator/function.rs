use tracing::trace;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Flow},
        value::core::Value,
    },
};

impl Context<'_, '_> {
    /// Evaluates a call to a user-defined function.
    ///
    /// The argument count is checked first. Arguments are then evaluated
    /// left to right in the caller's scope and bound positionally to the
    /// parameters in a fresh call frame, so the body only sees its own
    /// parameters and locals.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `args`: Argument expressions at the call site.
    ///
    /// # Returns
    /// The value of the first `return` reached in the body, or integer `0`
    /// if the body completes without returning.
    ///
    /// # Errors
    /// - [`RuntimeError::UnknownFunction`] if no function has this name.
    /// - [`RuntimeError::ArgumentCountMismatch`] if the number of arguments
    ///   differs from the number of parameters.
    /// - Any error raised by the arguments or the body.
    pub fn eval_function_call(&mut self, name: &str, args: &[Expr]) -> EvalResult<Value> {
        let function = self.function(name)
                           .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string() })?;

        if function.params.len() != args.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name:     name.to_string(),
                                                             expected: function.params.len(),
                                                             found:    args.len(), });
        }

        let values = args.iter()
                         .map(|arg| self.eval(arg))
                         .collect::<EvalResult<Vec<_>>>()?;

        trace!(function = name, depth = self.env.depth(), "call");
        self.with_frame(|ctx| {
                for (param, value) in function.params.iter().zip(values) {
                    ctx.env.define_local(&param.name, value);
                }
                match ctx.exec_statements(&function.body.statements)? {
                    Flow::Return(value) => Ok(value),
                    Flow::Normal => Ok(Value::Integer(0)),
                }
            })
    }
}
