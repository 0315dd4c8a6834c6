use itertools::Itertools;
use crate::cell::*;
use crate::rule::Rule;

/// The eight neighbor locations of (`x`, `y`), clockwise from the upper
/// left: NW, N, NE, E, SE, S, SW, W.
///
/// A neighbor below is `None` whenever (`x`, `y`) sits on the last row, and
/// one to the right is `None` whenever it sits on the last column. The
/// edge is decided by the position of the cell itself, not by checking the
/// candidate coordinate against the matrix bounds.
pub fn neighbor_locations(
  matrix: &CellMatrix,
  x: usize,
  y: usize,
) -> [Option<Location>; 8] {
  let x = x as isize;
  let y = y as isize;
  let top = y - 1;
  let left = x - 1;
  let bottom = if y == matrix.height() as isize - 1 { -1 } else { y + 1 };
  let right = if x == matrix.width() as isize - 1 { -1 } else { x + 1 };

  [
    Location::new(left, top),
    Location::new(x, top),
    Location::new(right, top),
    Location::new(right, y),
    Location::new(right, bottom),
    Location::new(x, bottom),
    Location::new(left, bottom),
    Location::new(left, y),
  ]
}

pub fn alive_neighbor_count(matrix: &CellMatrix, x: usize, y: usize) -> usize {
  neighbor_locations(matrix, x, y)
    .iter()
    .flatten()
    .filter(|loc| matrix.value_at(loc.x, loc.y).is_alive())
    .count()
}

/// Value of the cell at (`x`, `y`) in the next generation.
pub fn next_cell(matrix: &CellMatrix, x: usize, y: usize, rule: Rule) -> Cell {
  rule.apply(matrix.value_at(x, y), alive_neighbor_count(matrix, x, y))
}

/// Compute the whole next generation from `matrix`, which is left as is.
pub fn step(matrix: &CellMatrix, rule: Rule) -> CellMatrix {
  let rows = matrix.rows()
    .iter()
    .enumerate()
    .map(|(y, row)| {
      (0..row.len())
        .map(|x| next_cell(matrix, x, y, rule))
        .collect_vec()
    })
    .collect_vec();
  CellMatrix::new(rows)
}
