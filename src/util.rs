/// Numeric conversion helpers.
///
/// Turns the verbatim text of a numeric literal into an `f64`, reporting
/// malformed literals as runtime errors.
pub mod num;
