use crate::interpreter::evaluator::{core::EvalResult, function::core::arguments};

/// Returns the larger of two values.
///
/// Returns `a` when `a >= b`, otherwise `b`. The first argument wins ties,
/// and a NaN makes the comparison false, so `max(NaN, 1)` is `1` and
/// `max(1, NaN)` is NaN.
///
/// # Example
/// ```
/// use linecalc::interpreter::evaluator::function::min_max::max;
///
/// assert_eq!(max(&[3.0, 7.0]), Ok(7.0));
/// assert_eq!(max(&[f64::NAN, 1.0]), Ok(1.0));
/// assert!(max(&[1.0, f64::NAN]).unwrap().is_nan());
/// ```
pub fn max(args: &[f64]) -> EvalResult<f64> {
    let [a, b] = arguments("max", args)?;
    Ok(if a >= b { a } else { b })
}

/// Returns the smaller of two values, mirroring [`max`].
pub fn min(args: &[f64]) -> EvalResult<f64> {
    let [a, b] = arguments("min", args)?;
    Ok(if a <= b { a } else { b })
}
