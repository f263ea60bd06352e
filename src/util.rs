/// Numeric helpers.
///
/// Finite-result checks, integer tests and exact float-to-integer conversion
/// shared by the evaluator and the function library.
pub mod num;

/// Result formatting.
///
/// Renders evaluation results with a fixed number of significant digits for
/// display.
pub mod format;
