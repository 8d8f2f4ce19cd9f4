use std::{collections::HashMap, rc::Rc};

use log::trace;

use crate::{
    ast::Expression,
    interpreter::evaluator::function::core::{Arity, Builtin, BuiltinFn, DEFAULT_BUILTINS},
};

/// Stores everything that outlives a single line.
///
/// The environment maps variable names to their *defining expressions*, not
/// to values: a variable is re-evaluated every time it is referenced. It also
/// holds the builtin function table.
///
/// ## Usage
///
/// An `Environment` is created once and handed by reference to every parse
/// and evaluation call. Parsing only reads it (to capture variable
/// definitions); the only mutations are [`Environment::define`] and
/// [`Environment::register_builtin`]. Bound expressions are shared through
/// `Rc`, so an environment belongs to a single thread; separate sessions need
/// separate environments.
#[derive(Debug, Clone)]
pub struct Environment {
    variables: HashMap<String, Rc<Expression>>,
    builtins:  HashMap<String, Builtin>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment with no variables and the default builtin
    /// table, which contains `max`.
    #[must_use]
    pub fn new() -> Self {
        let mut env = Self::without_builtins();
        for (name, builtin) in DEFAULT_BUILTINS {
            env.register_builtin(*name, builtin.arity, builtin.func);
        }
        env
    }

    /// Creates an environment with no variables and no builtins.
    #[must_use]
    pub fn without_builtins() -> Self {
        Self { variables: HashMap::new(),
               builtins:  HashMap::new(), }
    }

    /// Binds `name` to `value`, replacing any previous definition.
    ///
    /// Only expressions parsed after this call see the new definition;
    /// references parsed earlier keep the definition they captured.
    pub fn define(&mut self, name: impl Into<String>, value: Expression) {
        let name = name.into();
        trace!("define {name} = {value}");
        self.variables.insert(name, Rc::new(value));
    }

    /// Returns the current definition of `name`, if any.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Rc<Expression>> {
        self.variables.get(name).cloned()
    }

    /// Adds `func` to the builtin table under `name`, replacing any builtin
    /// already registered with that name.
    ///
    /// # Example
    /// ```
    /// use linecalc::interpreter::{
    ///     dispatcher::Interpreter,
    ///     environment::Environment,
    ///     evaluator::function::core::Arity,
    /// };
    ///
    /// let mut env = Environment::new();
    /// env.register_builtin("twice", Arity::Exact(1), |args| Ok(args[0] * 2.0));
    ///
    /// let mut interpreter = Interpreter::with_environment(env);
    /// assert_eq!(interpreter.execute_line("twice(21)"), Ok(Some(42.0)));
    /// ```
    pub fn register_builtin(&mut self, name: impl Into<String>, arity: Arity, func: BuiltinFn) {
        let name = name.into();
        trace!("register builtin {name}/{arity}");
        self.builtins.insert(name, Builtin { arity, func });
    }

    /// Looks up a builtin by name.
    #[must_use]
    pub fn resolve_builtin(&self, name: &str) -> Option<&Builtin> {
        self.builtins.get(name)
    }
}
