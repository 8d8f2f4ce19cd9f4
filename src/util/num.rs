use crate::{ast::NumberLiteral, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Converts a numeric literal to `f64`.
///
/// The literal's digit text must be a valid decimal numeral: digits with at
/// most one decimal point, and at least one digit. The sign is applied after
/// conversion.
///
/// ## Errors
/// Returns `NumericConversion` with the literal as written if the digit text
/// is empty or not a valid numeral (for example `1.2.3`).
///
/// ## Example
/// ```
/// use linecalc::{ast::NumberLiteral, error::RuntimeError, util::num::parse_numeral};
///
/// assert_eq!(parse_numeral(&NumberLiteral::new(true, "2.5")), Ok(-2.5));
///
/// assert_eq!(parse_numeral(&NumberLiteral::new(false, "1.2.3")),
///            Err(RuntimeError::NumericConversion { literal: "1.2.3".to_string() }));
/// ```
pub fn parse_numeral(literal: &NumberLiteral) -> EvalResult<f64> {
    let invalid = || RuntimeError::NumericConversion { literal: literal.to_string() };

    if !literal.digits.chars().any(|c| c.is_ascii_digit())
       || !literal.digits.chars().all(|c| c.is_ascii_digit() || c == '.')
    {
        return Err(invalid());
    }

    let magnitude = literal.digits.parse::<f64>().map_err(|_| invalid())?;
    Ok(if literal.negative { -magnitude } else { magnitude })
}
