//! One generation of Conway's Game of Life over a grid written as text.
//!
//! ```
//! let next = lifestep::next_generation("4 8\n........\n....*...\n...**...\n........\n");
//! assert_eq!(next.unwrap(), "4 8\n........\n...**...\n...**...\n........\n");
//! ```

pub mod cell;
pub mod error;
pub mod grid;
pub mod rule;
pub mod step;

use log::debug;
pub use error::GridError;
use rule::GAME_OF_LIFE;

/// Validate `input`, advance it by one generation and write it back with
/// the same header.
pub fn next_generation(input: impl AsRef<str>) -> Result<String, GridError> {
  let input = input.as_ref();
  let header = grid::validate(input)?;
  debug!("read {} x {} grid", header.rows, header.cols);

  let matrix = grid::decode(grid::strip_header(input));
  let next = step::step(&matrix, GAME_OF_LIFE);
  debug!("stepped with rule {}", GAME_OF_LIFE);

  Ok(grid::encode(&next, header.rows, header.cols))
}
