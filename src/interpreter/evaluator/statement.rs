use crate::{
    ast::{Block, Expr, Statement, VarDecl},
    interpreter::{
        evaluator::core::{Context, EvalResult, Flow},
        value::core::Value,
    },
};

impl Context<'_, '_> {
    /// Executes a single statement.
    ///
    /// # Returns
    /// [`Flow::Return`] if a `return` was executed inside the statement, and
    /// [`Flow::Normal`] otherwise.
    ///
    /// # Errors
    /// Any runtime error raised by the expressions involved. Scopes opened by
    /// the statement are closed before the error is returned.
    pub fn exec_statement(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::Expression { expr } => {
                self.eval(expr)?;
                Ok(Flow::Normal)
            },
            Statement::VarDecl(decl) => {
                self.exec_var_decl(decl)?;
                Ok(Flow::Normal)
            },
            Statement::Block(block) => self.exec_block(block),
            Statement::If { condition,
                            then_branch,
                            else_branch, } => {
                if self.eval(condition)?.is_truthy() {
                    self.exec_statement(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.exec_statement(else_branch)
                } else {
                    Ok(Flow::Normal)
                }
            },
            Statement::While { condition, body } => self.exec_while(condition, body),
            Statement::For { init,
                             condition,
                             increment,
                             body, } => {
                self.exec_for(init.as_deref(), condition, increment.as_ref(), body)
            },
            Statement::Return { value } => {
                let value = match value {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Integer(0),
                };
                Ok(Flow::Return(value))
            },
            Statement::Print { expr } => {
                let value = self.eval(expr)?;
                self.write_line(&value)?;
                Ok(Flow::Normal)
            },
        }
    }

    /// Executes statements in order in the current scope, stopping at the
    /// first `return`.
    pub fn exec_statements(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        for statement in statements {
            if let Flow::Return(value) = self.exec_statement(statement)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Normal)
    }

    /// Executes a block in a new child scope. Declarations made inside the
    /// block disappear when it ends.
    pub fn exec_block(&mut self, block: &Block) -> EvalResult<Flow> {
        self.with_scope(|ctx| ctx.exec_statements(&block.statements))
    }

    /// Declares a variable in the innermost scope. Without an initializer the
    /// variable starts as integer `0`.
    fn exec_var_decl(&mut self, decl: &VarDecl) -> EvalResult<()> {
        let value = match &decl.init {
            Some(init) => self.eval(init)?,
            None => Value::Integer(0),
        };
        self.env.define_local(&decl.name, value);
        Ok(())
    }

    fn exec_while(&mut self, condition: &Expr, body: &Statement) -> EvalResult<Flow> {
        while self.eval(condition)?.is_truthy() {
            if let Flow::Return(value) = self.exec_statement(body)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Normal)
    }

    /// Executes a `for` loop.
    ///
    /// The initializer runs in one scope that every iteration shares, so the
    /// loop variable is not re-created per iteration and is gone after the
    /// loop. The increment is skipped when the body returns.
    fn exec_for(&mut self,
                init: Option<&Statement>,
                condition: &Expr,
                increment: Option<&Expr>,
                body: &Statement)
                -> EvalResult<Flow> {
        self.with_scope(|ctx| {
            if let Some(init) = init {
                ctx.exec_statement(init)?;
            }
            while ctx.eval(condition)?.is_truthy() {
                if let Flow::Return(value) = ctx.exec_statement(body)? {
                    return Ok(Flow::Return(value));
                }
                if let Some(increment) = increment {
                    ctx.eval(increment)?;
                }
            }
            Ok(Flow::Normal)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::RuntimeError,
        interpreter::{evaluator::core::Context, parser::core::parse},
    };

    fn run_with_output(source: &str) -> (Result<i64, RuntimeError>, String) {
        let program = parse(source).unwrap();
        let mut out = Vec::new();
        let result = Context::new(&program, &mut out).run_main(Vec::<(&str, i64)>::new());
        (result, String::from_utf8(out).unwrap())
    }

    fn run(source: &str) -> Result<i64, RuntimeError> {
        run_with_output(source).0
    }

    #[test]
    fn nested_blocks_shadow_and_restore() {
        let source = r"
            int main() {
                int x = 10;
                {
                    int x = 20;
                    {
                        int x = 30;
                        print(x);
                    }
                    print(x);
                }
                print(x);
                return x;
            }
        ";
        let (result, output) = run_with_output(source);
        assert_eq!(result, Ok(10));
        assert_eq!(output, "30\n20\n10\n");
    }

    #[test]
    fn assignment_in_a_block_reaches_the_outer_variable() {
        assert_eq!(run("int main() { int x = 1; { x = 5; } return x; }"), Ok(5));
    }

    #[test]
    fn block_declarations_do_not_leak() {
        assert_eq!(run("int main() { { int y = 1; } return y; }"),
                   Err(RuntimeError::UnknownVariable { name: "y".into() }));
    }

    #[test]
    fn uninitialised_declaration_is_zero() {
        assert_eq!(run("int main() { int x; return x + 7; }"), Ok(7));
    }

    #[test]
    fn return_leaves_nested_loops_immediately() {
        let source = r"
            int main() {
                int i = 0;
                while (true) {
                    for (int j = 0; j < 10; j++) {
                        if (j == 3) { return i * 10 + j; }
                    }
                    i = i + 1;
                }
            }
        ";
        assert_eq!(run(source), Ok(3));
    }

    #[test]
    fn for_variable_is_scoped_to_the_loop() {
        assert_eq!(run("int main() { for (int i = 0; i < 3; i++) { } return i; }"),
                   Err(RuntimeError::UnknownVariable { name: "i".into() }));
    }

    #[test]
    fn for_with_outer_counter_keeps_final_value() {
        assert_eq!(run("int main() { int i = 0; for (i = 0; i < 4; i++) { } return i; }"),
                   Ok(4));
    }

    #[test]
    fn for_body_declarations_are_shared_across_iterations() {
        let source = r"
            int main() {
                int total = 0;
                for (int i = 0; i < 3; i++)
                    total = total + i;
                return total;
            }
        ";
        assert_eq!(run(source), Ok(3));
    }

    #[test]
    fn if_else_uses_truthiness() {
        assert_eq!(run("int main() { if (0) return 1; else return 2; }"), Ok(2));
        assert_eq!(run("int main() { if (\"\") return 1; return 3; }"), Ok(3));
        assert_eq!(run("int main() { if (0.5) return 1; return 3; }"), Ok(1));
    }

    #[test]
    fn print_formats_each_kind() {
        let (_, output) =
            run_with_output("int main() { print(7); print(7.0); print(7 > 6); print(\"seven\"); }");
        assert_eq!(output, "7\n7.0\ntrue\nseven\n");
    }
}
