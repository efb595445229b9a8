use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// Variable storage for a running program.
///
/// The environment is a stack of call frames, and every frame is a stack of
/// scopes. Lookups only ever see the scopes of the current frame, so a
/// function body has no access to its caller's variables. The bottom frame
/// holds the global scope in which `main` runs.
#[derive(Debug, Clone)]
pub struct Environment {
    frames: Vec<Vec<HashMap<String, Value>>>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment with a single frame holding one empty global
    /// scope.
    #[must_use]
    pub fn new() -> Self {
        Self { frames: vec![vec![HashMap::new()]] }
    }

    /// Adds a fresh empty scope on top of the current frame.
    ///
    /// # Example
    /// ```
    /// use cinder::interpreter::{evaluator::environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.define_local("x", Value::Integer(10));
    ///
    /// env.push_scope();
    /// env.define_local("x", Value::Integer(20));
    /// assert_eq!(env.get_variable("x"), Some(&Value::Integer(20)));
    ///
    /// env.pop_scope();
    /// assert_eq!(env.get_variable("x"), Some(&Value::Integer(10)));
    /// ```
    pub fn push_scope(&mut self) {
        if let Some(frame) = self.frames.last_mut() {
            frame.push(HashMap::new());
        }
    }

    /// Removes the innermost scope of the current frame with all its
    /// bindings.
    pub fn pop_scope(&mut self) {
        if let Some(frame) = self.frames.last_mut() {
            frame.pop();
        }
    }

    /// Starts a new call frame with one empty scope.
    pub fn push_frame(&mut self) {
        self.frames.push(vec![HashMap::new()]);
    }

    /// Discards the current call frame.
    pub fn pop_frame(&mut self) {
        self.frames.pop();
    }

    /// Number of active call frames, the global one included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Retrieves a variable visible from the current scope.
    ///
    /// Lookup begins at the innermost scope of the current frame and proceeds
    /// outward. Returns `None` if no scope of the frame defines the name.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.frames
            .last()?
            .iter()
            .rev()
            .find_map(|scope| scope.get(name))
    }

    /// Defines a variable in the innermost scope, shadowing any outer
    /// binding of the same name. Redefining a name in the same scope
    /// replaces its value.
    pub fn define_local(&mut self, name: &str, value: Value) {
        if let Some(scope) = self.frames.last_mut().and_then(|frame| frame.last_mut()) {
            scope.insert(name.to_string(), value);
        }
    }

    /// Assigns to the nearest existing binding of `name`.
    ///
    /// # Returns
    /// `false` if no scope of the current frame defines the name; nothing is
    /// created in that case.
    ///
    /// # Example
    /// ```
    /// use cinder::interpreter::{evaluator::environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.define_local("y", Value::Integer(1));
    /// env.push_scope();
    ///
    /// assert!(env.assign_nearest("y", Value::Integer(5)));
    /// assert!(!env.assign_nearest("z", Value::Integer(5)));
    ///
    /// env.pop_scope();
    /// assert_eq!(env.get_variable("y"), Some(&Value::Integer(5)));
    /// ```
    pub fn assign_nearest(&mut self, name: &str, value: Value) -> bool {
        let Some(frame) = self.frames.last_mut() else {
            return false;
        };
        match frame.iter_mut().rev().find_map(|scope| scope.get_mut(name)) {
            Some(slot) => {
                *slot = value;
                true
            },
            None => false,
        }
    }
}
