use std::fmt;

use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::EvalResult,
            function::{builtin, min_max},
        },
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluated argument values in call order.
pub type BuiltinFn = fn(&[f64]) -> EvalResult<f64>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    #[must_use]
    pub fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::OneOf(arr) => arr.contains(&n),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::OneOf(arr) => {
                let counts = arr.iter().map(ToString::to_string).collect::<Vec<_>>();
                write!(f, "{}", counts.join(" or "))
            },
        }
    }
}

/// An entry of the builtin table.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// Argument counts the function accepts.
    pub arity: Arity,
    /// The native implementation.
    pub func:  BuiltinFn,
}

impl Builtin {
    /// Checks the argument count and invokes the function.
    ///
    /// # Errors
    /// Returns `BuiltinArity` if `args` has a length the builtin does not
    /// accept, or whatever error the function itself reports.
    pub fn call(&self, name: &str, args: &[f64]) -> EvalResult<f64> {
        if !self.arity.check(args.len()) {
            return Err(RuntimeError::BuiltinArity { name:     name.to_string(),
                                                    expected: self.arity.to_string(),
                                                    found:    args.len(), });
        }
        (self.func)(args)
    }
}

/// Defines a static builtin table.
///
/// Each entry provides a name, an arity specification and a function pointer
/// implementing the builtin. The table is a slice of `(name, Builtin)` pairs
/// that [`Environment`] copies into its own map.
macro_rules! builtin_table {
    (
        $table:ident {
            $(
                $name:literal => {
                    arity: $arity:expr,
                    func: $func:expr $(,)?
                }
            ),* $(,)?
        }
    ) => {
        pub(crate) static $table: &[(&str, Builtin)] = &[
            $(
                ($name, Builtin { arity: $arity, func: $func }),
            )*
        ];
    };
}

builtin_table!(DEFAULT_BUILTINS {
    "max" => { arity: Arity::Exact(2), func: min_max::max },
});

builtin_table!(MATH_BUILTINS {
    "min"   => { arity: Arity::Exact(2), func: min_max::min },
    "abs"   => { arity: Arity::Exact(1), func: builtin::abs },
    "sqrt"  => { arity: Arity::Exact(1), func: builtin::sqrt },
    "ln"    => { arity: Arity::Exact(1), func: builtin::ln },
    "log"   => { arity: Arity::OneOf(&[1, 2]), func: builtin::log },
    "exp"   => { arity: Arity::Exact(1), func: builtin::exp },
    "sin"   => { arity: Arity::Exact(1), func: builtin::sin },
    "cos"   => { arity: Arity::Exact(1), func: builtin::cos },
    "tan"   => { arity: Arity::Exact(1), func: builtin::tan },
    "floor" => { arity: Arity::Exact(1), func: builtin::floor },
    "ceil"  => { arity: Arity::Exact(1), func: builtin::ceil },
    "round" => { arity: Arity::Exact(1), func: builtin::round },
});

/// Destructures a builtin's arguments into a fixed-size array.
///
/// # Errors
/// Returns `BuiltinArity` if `args` does not hold exactly `N` values.
///
/// # Example
/// ```
/// use linecalc::interpreter::evaluator::function::core::arguments;
///
/// let [a, b] = arguments::<2>("max", &[1.0, 2.0]).unwrap();
/// assert_eq!((a, b), (1.0, 2.0));
///
/// assert!(arguments::<2>("max", &[1.0]).is_err());
/// ```
pub fn arguments<const N: usize>(name: &str, args: &[f64]) -> EvalResult<[f64; N]> {
    <[f64; N]>::try_from(args).map_err(|_| RuntimeError::BuiltinArity { name:     name.to_string(),
                                                                      expected: N.to_string(),
                                                                      found:    args.len(), })
}

impl Environment {
    /// Adds the optional math builtins (`min`, `abs`, `sqrt`, `ln`, `log`,
    /// `exp`, `sin`, `cos`, `tan`, `floor`, `ceil`, `round`) to the table.
    pub fn register_math_builtins(&mut self) {
        for (name, builtin) in MATH_BUILTINS {
            self.register_builtin(*name, builtin.arity, builtin.func);
        }
    }

    /// Evaluates a builtin call.
    ///
    /// The name is resolved first; then every argument is evaluated left to
    /// right, and the builtin is invoked with the resulting values.
    ///
    /// # Parameters
    /// - `name`: Builtin name.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `depth`: Evaluation depth of the call.
    ///
    /// # Returns
    /// The builtin's result or an error if lookup, arity or an argument fails.
    pub(crate) fn eval_builtin_call(&self,
                                    name: &str,
                                    arguments: &[Expression],
                                    depth: usize)
                                    -> EvalResult<f64> {
        let builtin =
            self.resolve_builtin(name)
                .ok_or_else(|| RuntimeError::UnknownBuiltin { name: name.to_string() })?;

        let values = arguments.iter()
                              .map(|arg| self.eval_expression(arg, depth))
                              .collect::<EvalResult<Vec<_>>>()?;

        builtin.call(name, &values)
    }
}
