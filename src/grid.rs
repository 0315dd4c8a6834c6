//! Reading and writing GridText.
//!
//! ```text
//! 4 8
//! ........
//! ....*...
//! ...**...
//! ........
//! ```
//!
//! The header holds the row count and the column count, one digit each.
//! Every body row is terminated by a newline, `*` is alive, `.` is dead.

use itertools::Itertools;
use log::trace;
use regex::Regex;
use crate::cell::*;
use crate::error::GridError;

const HEADER_PATTERN: &str = r"\A[0-9] [0-9]\n";
const HEADER_LEN: usize = 4;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Header {
  pub rows: usize,
  pub cols: usize,
}

fn header_re() -> Regex {
  Regex::new(HEADER_PATTERN).expect("header pattern compiles")
}

fn body_re(header: Header) -> Regex {
  let pattern = format!(r"\A(?:[.*]{{{}}}\n){{{}}}\z", header.cols, header.rows);
  Regex::new(&pattern).expect("body pattern compiles")
}

/// Read the dimensions from the header line.
pub fn read_header(src: impl AsRef<str>) -> Result<Header, GridError> {
  let src = src.as_ref();
  if !header_re().is_match(src) {
    return Err(GridError::HeaderFormat);
  }

  let bytes = src.as_bytes();
  let header = Header {
    rows: (bytes[0] - b'0') as usize,
    cols: (bytes[2] - b'0') as usize,
  };
  trace!("header {:?}", header);
  Ok(header)
}

/// Everything after the header line. Input without a valid header is
/// returned unchanged.
pub fn strip_header(src: &str) -> &str {
  if header_re().is_match(src) {
    &src[HEADER_LEN..]
  } else {
    src
  }
}

/// Check that `src` is a header followed by exactly the body it declares.
pub fn validate(src: impl AsRef<str>) -> Result<Header, GridError> {
  let src = src.as_ref();
  let header = read_header(src)?;

  if !body_re(header).is_match(strip_header(src)) {
    return Err(GridError::GridShape {
      rows: header.rows,
      cols: header.cols,
    });
  }

  Ok(header)
}

/// Split a body (header already stripped) into rows of cells.
///
/// Nothing is validated here.
pub fn decode(body: impl AsRef<str>) -> CellMatrix {
  let rows = body.as_ref()
    .lines()
    .map(|line| line.chars().map(Cell::from).collect_vec())
    .collect_vec();
  CellMatrix::new(rows)
}

/// Write `matrix` under a header of `height` and `width`. The header is
/// taken as given, not measured from the matrix.
pub fn encode(matrix: &CellMatrix, height: usize, width: usize) -> String {
  let mut output = format!("{} {}\n", height, width);
  for row in matrix.rows() {
    output.extend(row.iter().map(|cell| cell.symbol()));
    output.push('\n');
  }
  output
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  const BODY: &str = "\
........
....*...
...**...
........
";

  fn body_matrix() -> CellMatrix {
    let o = Cell::Dead;
    let x = Cell::Alive;
    CellMatrix::new(vec![
      vec![o, o, o, o, o, o, o, o],
      vec![o, o, o, o, x, o, o, o],
      vec![o, o, o, x, x, o, o, o],
      vec![o, o, o, o, o, o, o, o],
    ])
  }

  #[test]
  fn test_validate_ok() {
    let src = format!("4 8\n{}", BODY);
    assert_eq!(validate(&src), Ok(Header { rows: 4, cols: 8 }));
  }

  #[test]
  fn test_bad_header() {
    assert_eq!(validate("abc"), Err(GridError::HeaderFormat));
    assert_eq!(validate("4x8\n"), Err(GridError::HeaderFormat));
    assert_eq!(validate("48 8\n"), Err(GridError::HeaderFormat));
    assert_eq!(validate(""), Err(GridError::HeaderFormat));
    assert_eq!(validate(" 4 8\n"), Err(GridError::HeaderFormat));
  }

  #[test]
  fn test_bad_body() {
    let shape = Err(GridError::GridShape { rows: 4, cols: 8 });
    assert_eq!(validate("4 8\n.........."), shape);
    // missing final newline
    assert_eq!(validate(format!("4 8\n{}", BODY.trim_end())), shape);
    // trailing content
    assert_eq!(validate(format!("4 8\n{}\n", BODY)), shape);
    // illegal character
    assert_eq!(validate(format!("4 8\n{}", BODY.replace('*', "o"))), shape);
    // body larger than declared
    assert_eq!(validate(format!("3 8\n{}", BODY)), Err(GridError::GridShape { rows: 3, cols: 8 }));
  }

  #[test]
  fn test_shape_message_is_cols_by_rows() {
    let err = validate("4 8\n..........").unwrap_err();
    assert_eq!(err.to_string(), "Expected array of dots (.) and stars (*) that are 8 x 4");
  }

  #[test]
  fn test_zero_dimensions() {
    assert_eq!(validate("0 5\n"), Ok(Header { rows: 0, cols: 5 }));
    assert_eq!(validate("2 0\n\n\n"), Ok(Header { rows: 2, cols: 0 }));
    assert_eq!(validate("2 0\n"), Err(GridError::GridShape { rows: 2, cols: 0 }));
  }

  #[test]
  fn test_strip_header() {
    assert_eq!(strip_header(&format!("4 8\n{}", BODY)), BODY);
    assert_eq!(strip_header("abc"), "abc");
  }

  #[test]
  fn test_decode() {
    assert_eq!(decode(BODY), body_matrix());
  }

  #[test]
  fn test_encode() {
    assert_eq!(encode(&body_matrix(), 4, 8), format!("4 8\n{}", BODY));
  }

  #[test]
  fn test_decode_then_encode_keeps_body() {
    let src = "3 3\n*.*\n.*.\n**.\n";
    let header = validate(src).unwrap();
    let matrix = decode(strip_header(src));
    assert_eq!(encode(&matrix, header.rows, header.cols), src);
  }
}
