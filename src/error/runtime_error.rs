#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Read or assigned a variable that is not declared in the current call.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that the program does not define.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// The program has no `main` function to start from.
    MissingMain,
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The number of declared parameters.
        expected: usize,
        /// The number of arguments at the call site.
        found:    usize,
    },
    /// `++` or `--` was applied to something other than a variable.
    InvalidIncrementTarget {
        /// The operator that was applied.
        op: String,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
    },
    /// Attempted division or modulo by zero.
    DivisionByZero,
    /// Integer arithmetic overflowed.
    Overflow {
        /// The operation that overflowed.
        details: String,
    },
    /// Writing the output of `print` failed.
    Output {
        /// The underlying I/O failure.
        details: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => write!(f, "Runtime error: Unknown variable '{name}'."),
            Self::UnknownFunction { name } => write!(f, "Runtime error: Unknown function '{name}'."),
            Self::MissingMain => write!(f, "Runtime error: The program defines no 'main' function."),
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found, } => write!(f,
                                                             "Runtime error: Function '{name}' takes {expected} argument(s) but {found} were given."),
            Self::InvalidIncrementTarget { op } => write!(f,
                                                          "Runtime error: '{op}' can only be applied to a variable."),
            Self::TypeError { details } => write!(f, "Runtime error: Type error: {details}."),
            Self::DivisionByZero => write!(f, "Runtime error: Division by zero."),
            Self::Overflow { details } => write!(f,
                                                 "Runtime error: Integer overflow while computing {details}."),
            Self::Output { details } => write!(f, "Runtime error: Failed to write output: {details}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
