use serde::Serialize;
use smallvec::SmallVec;

use self::CellWall::*;
use crate::{
    array::Array2D,
    dims::Dims,
    error::MazeError,
    gameboard::cell::{Cell, CellWall},
};

/// Fixed-size board of cells in row-major layout.
#[derive(Debug, Clone, Serialize)]
pub struct Grid {
    pub(crate) cells: Array2D<Cell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 || rows > i32::MAX as usize || cols > i32::MAX as usize {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }

        Ok(Grid {
            cells: Array2D::from_fn(rows, cols, Cell::new),
        })
    }

    /// `(rows, cols)`
    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn rows(&self) -> usize {
        self.size().0 as usize
    }

    pub fn cols(&self) -> usize {
        self.size().1 as usize
    }

    pub fn cell_count(&self) -> usize {
        self.rows() * self.cols()
    }

    pub fn entry(&self) -> Dims {
        Dims::ZERO
    }

    pub fn exit(&self) -> Dims {
        self.size() - Dims::ONE
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        self.cells.dim_to_idx(pos).is_some()
    }

    pub fn is_valid_neighbor(&self, cell: Dims, off: Dims) -> bool {
        off.abs_sum() == 1 && self.is_in_bounds(cell) && self.is_in_bounds(cell + off)
    }

    pub fn is_valid_wall(&self, cell: Dims, wall: CellWall) -> bool {
        self.is_valid_neighbor(cell, wall.to_coord())
    }

    /// Returns the wall of `cell` that separates it from `cell2`,
    /// or `None` if the two positions are not adjacent.
    pub fn which_wall_between(cell: Dims, cell2: Dims) -> Option<CellWall> {
        match (cell.0 - cell2.0, cell.1 - cell2.1) {
            (1, 0) => Some(Top),
            (0, -1) => Some(Right),
            (-1, 0) => Some(Bottom),
            (0, 1) => Some(Left),
            _ => None,
        }
    }

    pub fn neighbor(&self, cell: Dims, wall: CellWall) -> Option<Dims> {
        self.is_valid_wall(cell, wall).then(|| cell + wall.to_coord())
    }

    /// In-bounds neighbors in [`CellWall::get_in_order`] order, regardless of walls.
    pub fn get_neighbors_pos(&self, cell: Dims) -> SmallVec<[Dims; 4]> {
        CellWall::get_in_order()
            .into_iter()
            .filter_map(|wall| self.neighbor(cell, wall))
            .collect()
    }

    /// Neighbors reachable through a removed wall, in [`CellWall::get_in_order`] order.
    pub fn open_neighbors(&self, cell: Dims) -> SmallVec<[Dims; 4]> {
        CellWall::get_in_order()
            .into_iter()
            .filter(|&wall| self.is_open(cell, wall))
            .filter_map(|wall| self.neighbor(cell, wall))
            .collect()
    }

    /// Whether `wall` of `cell` has been removed. Out-of-bounds positions are closed.
    pub fn is_open(&self, cell: Dims, wall: CellWall) -> bool {
        self.get_cell(cell).is_some_and(|c| c.is_open(wall))
    }

    /// Removes `wall` of `cell` together with the matching wall of the neighbor.
    ///
    /// Returns `false` and leaves the grid untouched if there is no neighbor behind the wall.
    pub fn remove_wall(&mut self, cell: Dims, wall: CellWall) -> bool {
        if !self.is_valid_wall(cell, wall) {
            return false;
        }

        self.cells[cell].remove_wall(wall);
        self.cells[cell + wall.to_coord()].remove_wall(wall.reverse_wall());

        true
    }

    /// Number of removed wall pairs. Border walls are never removed, so each
    /// pair is counted once by looking only at right and bottom walls.
    pub fn removed_wall_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                [Right, Bottom]
                    .into_iter()
                    .filter(|&wall| cell.is_open(wall))
                    .count()
            })
            .sum()
    }

    pub fn carved_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_carved()).count()
    }

    /// Puts every wall back and clears both visitation markers.
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = Cell::new(cell.coord);
        }
    }

    pub fn clear_solve_marks(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.set_solve_visited(false);
        }
    }

    pub fn get_cells(&self) -> &Array2D<Cell> {
        &self.cells
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }
}
