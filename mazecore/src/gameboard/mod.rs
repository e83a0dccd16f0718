pub mod cell;
pub mod grid;

pub use cell::{Cell, CellWall};
pub use grid::Grid;
