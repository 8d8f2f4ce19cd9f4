/// Represents all errors that can occur during evaluation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// A numeric literal's text is not a valid numeral, e.g. `1.2.3`.
    #[error("Invalid numeric literal '{literal}'.")]
    NumericConversion {
        /// The literal as written, sign included.
        literal: String,
    },
    /// Called a name that is not in the builtin table.
    #[error("Unknown builtin function '{name}'.")]
    UnknownBuiltin {
        /// The name of the function.
        name: String,
    },
    /// A builtin received a number of arguments it does not accept.
    #[error("Builtin '{name}' expects {expected} argument(s), but {found} were given.")]
    BuiltinArity {
        /// The name of the function.
        name:     String,
        /// Human-readable description of the accepted counts.
        expected: String,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// Evaluation nested deeper than the evaluator allows, typically through a
    /// long chain of definitions such as `n = n + 1` repeated many times.
    #[error("Evaluation exceeded the maximum depth of {limit}.")]
    EvaluationTooDeep {
        /// The depth limit that was hit.
        limit: usize,
    },
}
