/// Represents a literal value in the language.
///
/// The kind of a literal is carried by the value itself; declared types are
/// never consulted.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A string literal, without its surrounding quotes.
    Str(String),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Variables and function names are kept as plain names and resolved only
/// when the expression is evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string or boolean).
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A binary operation (addition, comparison, logical and, ...).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A unary operation, either prefix (`-x`, `!x`, `++x`) or postfix
    /// (`x++`).
    UnaryOp {
        /// The unary operator to apply.
        op:     UnaryOperator,
        /// The operand expression.
        expr:   Box<Self>,
        /// `true` for `++x`, `false` for `x++`.
        prefix: bool,
    },
    /// Assignment to an existing variable. Evaluates to the assigned value.
    Assignment {
        /// The name of the variable being assigned.
        var:  String,
        /// The value which is being assigned.
        expr: Box<Self>,
    },
    /// Function call expression (e.g. `factorial(n - 1)`).
    FunctionCall {
        /// Name of the function being called.
        name: String,
        /// Arguments to the function, in call order.
        args: Vec<Self>,
    },
}

impl Expr {
    /// Builds a literal expression from anything convertible into a
    /// [`LiteralValue`].
    ///
    /// ## Example
    /// ```
    /// use cinder::ast::{Expr, LiteralValue};
    ///
    /// assert_eq!(Expr::literal(3), Expr::Literal { value: LiteralValue::Integer(3) });
    /// ```
    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        Self::Literal { value: value.into() }
    }

    /// Builds a variable reference.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name: name.into() }
    }

    /// Builds a binary operation node.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }
}

/// Recognised type names. They are recorded in declarations but never
/// enforced.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TypeName {
    /// `int`
    Int,
    /// `float`
    Float,
    /// `char`
    Char,
    /// `bool`
    Bool,
    /// `void`
    Void,
}

/// Represents a statement inside a function body.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// An expression evaluated for its side effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
    /// A variable declaration with an optional initializer.
    VarDecl(VarDecl),
    /// A braced sequence of statements with its own scope.
    Block(Block),
    /// Conditional statement.
    If {
        /// The condition expression.
        condition:   Expr,
        /// Statement executed if the condition holds.
        then_branch: Box<Self>,
        /// Statement executed otherwise.
        else_branch: Option<Box<Self>>,
    },
    /// `while` loop.
    While {
        /// Condition checked before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
    },
    /// C-style `for` loop.
    For {
        /// Either a [`Statement::VarDecl`] or a [`Statement::Expression`].
        init:      Option<Box<Self>>,
        /// Condition checked before every iteration.
        condition: Expr,
        /// Expression evaluated after every completed body execution.
        increment: Option<Expr>,
        /// The loop body.
        body:      Box<Self>,
    },
    /// `return` with an optional value.
    Return {
        /// The returned value, if any.
        value: Option<Expr>,
    },
    /// The `print` built-in.
    Print {
        /// The value to print.
        expr: Expr,
    },
}

/// A variable declaration such as `int x = 5;`. Also used for function
/// parameters, which never carry an initializer.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    /// Declared type.
    pub ty:   TypeName,
    /// The name of the variable.
    pub name: String,
    /// The initial value of the variable.
    pub init: Option<Expr>,
}

/// A braced list of statements. Statement order is preserved.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
}

/// Represents a user-defined function definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// Declared return type.
    pub return_type: TypeName,
    /// The name of the function.
    pub name:        String,
    /// The parameters, in declaration order.
    pub params:      Vec<VarDecl>,
    /// The function body.
    pub body:        Block,
}

/// A whole parsed program.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Function definitions in source order.
    pub functions:   Vec<Function>,
    /// Global variable declarations. The parser never fills this in.
    pub global_vars: Vec<VarDecl>,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Logical NOT (`!x`).
    Not,
    /// Increment (`++x` or `x++`).
    Increment,
    /// Decrement (`--x` or `x--`).
    Decrement,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Not => "!",
            Self::Increment => "++",
            Self::Decrement => "--",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Char => "char",
            Self::Bool => "bool",
            Self::Void => "void",
        };
        write!(f, "{name}")
    }
}
