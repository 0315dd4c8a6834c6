use thiserror::Error;

/// Reasons a GridText is rejected before any step is computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
  /// The input does not start with `<digit> <digit>\n`.
  #[error("Expected two numbers separated by a space at the beginning")]
  HeaderFormat,

  /// The body is not `rows` lines of `cols` dots and stars.
  ///
  /// The message names the column count first.
  #[error("Expected array of dots (.) and stars (*) that are {cols} x {rows}")]
  GridShape {
    rows: usize,
    cols: usize,
  },
}
