use std::fmt::{self, Display};
use crate::cell::Cell;

/// Bit `n` of a mask is set when `n` alive neighbors trigger the rule.
pub(crate) type NeighborMask = u16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
  birth: NeighborMask,
  survival: NeighborMask,
}

pub const GAME_OF_LIFE: Rule = Rule {
  birth: 0b000001000,
  survival: 0b000001100,
};

impl Rule {
  /// Next value of a cell that is currently `cell` with `alive_neighbors`
  /// alive neighbors.
  pub fn apply(&self, cell: Cell, alive_neighbors: usize) -> Cell {
    if alive_neighbors > 8 {
      return Cell::Dead;
    }

    let mask = if cell.is_alive() {
      self.survival
    } else {
      self.birth
    };

    if mask >> alive_neighbors & 1 == 1 {
      Cell::Alive
    } else {
      Cell::Dead
    }
  }
}

impl Display for Rule {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "B")?;
    let mut b = self.birth;
    while b != 0 {
      write!(f, "{}", b.trailing_zeros())?;
      b &= b - 1;
    }
    write!(f, "/S")?;
    let mut s = self.survival;
    while s != 0 {
      write!(f, "{}", s.trailing_zeros())?;
      s &= s - 1;
    }
    Ok(())
  }
}
