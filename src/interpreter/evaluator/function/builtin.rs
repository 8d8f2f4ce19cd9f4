use crate::{
    error::RuntimeError,
    interpreter::evaluator::{core::EvalResult, function::core::arguments},
};

/// Defines a one-argument builtin that applies an `f64` method.
///
/// # Example
/// ```
/// use linecalc::interpreter::evaluator::function::builtin::sqrt;
///
/// assert_eq!(sqrt(&[9.0]), Ok(3.0));
/// assert!(sqrt(&[-1.0]).unwrap().is_nan());
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        pub fn $fname(args: &[f64]) -> EvalResult<f64> {
            let [x] = arguments(stringify!($fname), args)?;
            Ok(x.$real_fn())
        }
    };
}

real_builtin!(abs, abs);
real_builtin!(sqrt, sqrt);
real_builtin!(ln, ln);
real_builtin!(exp, exp);
real_builtin!(sin, sin);
real_builtin!(cos, cos);
real_builtin!(tan, tan);
real_builtin!(floor, floor);
real_builtin!(ceil, ceil);
real_builtin!(round, round);

/// Computes a logarithm.
///
/// With one argument this is the base-10 logarithm; with two, the second
/// argument is the base.
///
/// # Example
/// ```
/// use linecalc::interpreter::evaluator::function::builtin::log;
///
/// assert_eq!(log(&[1000.0]), Ok(3.0));
/// assert_eq!(log(&[8.0, 2.0]), Ok(3.0));
/// ```
pub fn log(args: &[f64]) -> EvalResult<f64> {
    match args {
        [x] => Ok(x.log10()),
        [x, base] => Ok(x.log(*base)),
        _ => Err(RuntimeError::BuiltinArity { name:     "log".to_string(),
                                              expected: "1 or 2".to_string(),
                                              found:    args.len(), }),
    }
}
