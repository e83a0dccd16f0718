//! Perfect maze engine.
//!
//! A [`Maze`] is carved with a randomized depth-first search into a spanning tree over its
//! cells, so there is exactly one simple path between any two cells. [`Maze::solve`] then finds
//! the path from the top-left to the bottom-right cell with a backtracking depth-first search.
//!
//! ```
//! use mazecore::{dims::Dims, Maze};
//!
//! let mut maze = Maze::new(8, 12)?;
//! maze.generate_seeded(42)?;
//!
//! let path = maze.solve()?;
//! assert_eq!(path.first(), Some(&Dims(0, 0)));
//! assert_eq!(path.last(), Some(&Dims(7, 11)));
//! # Ok::<(), mazecore::MazeError>(())
//! ```

pub mod algorithms;
pub mod array;
pub mod dims;
pub mod error;
pub mod gameboard;
pub mod maze;

pub use error::MazeError;
pub use maze::Maze;
