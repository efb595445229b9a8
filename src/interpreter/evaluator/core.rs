use std::{
    collections::{HashMap, hash_map::Entry},
    io::Write,
};

use tracing::{debug, warn};

use crate::{
    ast::{Expr, Function, Program},
    error::RuntimeError,
    interpreter::{evaluator::environment::Environment, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Value returned by `main` when it finishes without a `return`.
pub const NO_RETURN_EXIT_CODE: i64 = -1;

/// How a statement finished.
///
/// A `return` does not unwind with an error; it travels outward as
/// [`Flow::Return`] through every enclosing block and loop until the function
/// call that owns it.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Execution continues with the next statement.
    Normal,
    /// A `return` was executed, carrying the function's result.
    Return(Value),
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the function table built from a
/// [`Program`], the variable [`Environment`] and the sink that `print`
/// writes to.
///
/// ## Usage
///
/// A `Context` is created for one program run. [`Context::run_main`] binds
/// the inputs and executes `main`; all evaluation methods (like
/// [`Context::eval`] and [`Context::exec_statement`]) share this state.
pub struct Context<'p, 'o> {
    /// Variable storage for all active calls.
    pub env:   Environment,
    /// Functions by name. The first definition of a name wins.
    functions: HashMap<&'p str, &'p Function>,
    /// Destination of `print`.
    out:       &'o mut dyn Write,
}

impl<'p, 'o> Context<'p, 'o> {
    /// Creates a context for `program` whose `print` output goes to `out`.
    ///
    /// Later definitions of an already defined function name are ignored.
    pub fn new(program: &'p Program, out: &'o mut dyn Write) -> Self {
        let mut functions = HashMap::new();
        for function in &program.functions {
            match functions.entry(function.name.as_str()) {
                Entry::Vacant(slot) => {
                    slot.insert(function);
                },
                Entry::Occupied(_) => {
                    warn!(name = %function.name, "ignoring duplicate function definition");
                },
            }
        }

        Self { env: Environment::new(),
               functions,
               out }
    }

    /// Looks up a function definition by name.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&'p Function> {
        self.functions.get(name).copied()
    }

    /// Runs the program's `main` function.
    ///
    /// Every binding is declared in the global scope, in order, and `main`'s
    /// body then executes directly in that scope. `main`'s own parameters are
    /// not bound from anything.
    ///
    /// # Returns
    /// The value of the first `return` reached in `main` as an integer, or
    /// [`NO_RETURN_EXIT_CODE`] if `main` finishes without returning.
    ///
    /// # Errors
    /// [`RuntimeError::MissingMain`] if the program has no `main`, any error
    /// raised while executing it, and [`RuntimeError::TypeError`] if the
    /// returned value is a real or a string.
    pub fn run_main<I, S, V>(&mut self, bindings: I) -> EvalResult<i64>
        where I: IntoIterator<Item = (S, V)>,
              S: AsRef<str>,
              V: Into<Value>
    {
        let main = self.function("main").ok_or(RuntimeError::MissingMain)?;

        for (name, value) in bindings {
            self.env.define_local(name.as_ref(), value.into());
        }

        debug!(statements = main.body.statements.len(), "running main");
        match self.exec_statements(&main.body.statements)? {
            Flow::Return(value) => value.as_exit_code(),
            Flow::Normal => Ok(NO_RETURN_EXIT_CODE),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant: literals, variables, unary and
    /// binary operations, assignments and function calls.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed [`Value`].
    ///
    /// # Example
    /// ```
    /// use cinder::{
    ///     ast::{BinaryOperator, Expr, Program},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let program = Program::default();
    /// let mut out = Vec::new();
    /// let mut context = Context::new(&program, &mut out);
    ///
    /// let expr = Expr::binary(Expr::literal(7), BinaryOperator::Div, Expr::literal(2));
    /// assert_eq!(context.eval(&expr).unwrap(), Value::Integer(3));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value } => Ok(Value::from(value)),
            Expr::Variable { name } => self.eval_variable(name),
            Expr::BinaryOp { left, op, right } => self.eval_binary_op(left, *op, right),
            Expr::UnaryOp { op, expr, prefix } => self.eval_unary_op(*op, expr, *prefix),
            Expr::Assignment { var, expr } => self.eval_assignment(var, expr),
            Expr::FunctionCall { name, args } => self.eval_function_call(name, args),
        }
    }

    /// Resolves a variable in the current call.
    ///
    /// # Errors
    /// [`RuntimeError::UnknownVariable`] if no visible scope defines `name`.
    pub fn eval_variable(&self, name: &str) -> EvalResult<Value> {
        self.env
            .get_variable(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })
    }

    /// Evaluates `expr` and stores it in the nearest existing binding of
    /// `var`.
    ///
    /// # Returns
    /// The assigned value.
    ///
    /// # Errors
    /// [`RuntimeError::UnknownVariable`] if `var` was never declared.
    fn eval_assignment(&mut self, var: &str, expr: &Expr) -> EvalResult<Value> {
        let value = self.eval(expr)?;
        if self.env.assign_nearest(var, value.clone()) {
            Ok(value)
        } else {
            Err(RuntimeError::UnknownVariable { name: var.to_string() })
        }
    }

    /// Runs `body` inside a fresh scope that is removed afterwards, whether
    /// or not `body` succeeds.
    pub fn with_scope<T>(&mut self,
                         body: impl FnOnce(&mut Self) -> EvalResult<T>)
                         -> EvalResult<T> {
        self.env.push_scope();
        let result = body(self);
        self.env.pop_scope();
        result
    }

    /// Runs `body` inside a fresh call frame that is removed afterwards,
    /// whether or not `body` succeeds.
    pub fn with_frame<T>(&mut self,
                         body: impl FnOnce(&mut Self) -> EvalResult<T>)
                         -> EvalResult<T> {
        self.env.push_frame();
        let result = body(self);
        self.env.pop_frame();
        result
    }

    /// Writes one line of `print` output.
    ///
    /// # Errors
    /// [`RuntimeError::Output`] if the sink rejects the write.
    pub fn write_line(&mut self, value: &Value) -> EvalResult<()> {
        writeln!(self.out, "{value}").map_err(|e| RuntimeError::Output { details: e.to_string() })
    }
}
