use std::fmt::{self, Display};

pub const ALIVE: char = '*';
pub const DEAD: char = '.';

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Cell {
  Alive,
  Dead,
}

impl Cell {
  pub fn is_alive(self) -> bool {
    self == Cell::Alive
  }

  pub fn symbol(self) -> char {
    match self {
      Cell::Alive => ALIVE,
      Cell::Dead => DEAD,
    }
  }
}

/// Anything other than [`ALIVE`] reads as a dead cell.
impl From<char> for Cell {
  fn from(c: char) -> Self {
    if c == ALIVE {
      Cell::Alive
    } else {
      Cell::Dead
    }
  }
}

impl Display for Cell {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

/// Column `x`, row `y`, both zero-based.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Location {
  pub x: usize,
  pub y: usize,
}

impl Location {
  /// `None` if either coordinate is negative.
  pub fn new(x: isize, y: isize) -> Option<Self> {
    if x < 0 || y < 0 {
      None
    } else {
      Some(Self {
        x: x as usize,
        y: y as usize,
      })
    }
  }
}

/// Rows of cells, top to bottom. All rows are expected to have the same
/// length, but nothing here enforces it; see [`crate::grid::validate`].
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct CellMatrix {
  rows: Vec<Vec<Cell>>,
}

impl CellMatrix {
  pub fn new(rows: Vec<Vec<Cell>>) -> Self {
    Self { rows }
  }

  pub fn height(&self) -> usize {
    self.rows.len()
  }

  /// Width of the first row.
  pub fn width(&self) -> usize {
    self.rows.first().map_or(0, Vec::len)
  }

  pub fn rows(&self) -> &[Vec<Cell>] {
    &self.rows
  }

  pub fn get(&self, loc: Location) -> Option<Cell> {
    self.rows.get(loc.y)?.get(loc.x).copied()
  }

  /// Cells outside the matrix read as dead.
  pub fn value_at(&self, x: usize, y: usize) -> Cell {
    self.get(Location { x, y }).unwrap_or(Cell::Dead)
  }
}
