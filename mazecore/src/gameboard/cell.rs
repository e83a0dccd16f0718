use serde::Serialize;

use crate::dims::Dims;

use self::CellWall::*;

#[derive(Debug, Clone, Serialize)]
pub struct Cell {
    top: bool,
    right: bool,
    bottom: bool,
    left: bool,
    #[serde(skip)]
    carved: bool,
    #[serde(skip)]
    solve_visited: bool,
    pub(crate) coord: Dims,
}

impl Cell {
    /// New cell with all four walls present and no visitation marks.
    pub fn new(pos: Dims) -> Cell {
        Cell {
            top: true,
            right: true,
            bottom: true,
            left: true,
            carved: false,
            solve_visited: false,
            coord: pos,
        }
    }

    /// Only [`Grid::remove_wall`](super::Grid::remove_wall) calls this, so the matching wall of
    /// the neighbor is always removed too.
    pub(crate) fn remove_wall(&mut self, wall: CellWall) {
        match wall {
            Top => self.top = false,
            Right => self.right = false,
            Bottom => self.bottom = false,
            Left => self.left = false,
        }
    }

    /// `true` if the wall is still standing.
    pub fn get_wall(&self, wall: CellWall) -> bool {
        match wall {
            Top => self.top,
            Right => self.right,
            Bottom => self.bottom,
            Left => self.left,
        }
    }

    pub fn is_open(&self, wall: CellWall) -> bool {
        !self.get_wall(wall)
    }

    /// Wall flags in [`CellWall::get_in_order`] order.
    pub fn walls(&self) -> [bool; 4] {
        CellWall::get_in_order().map(|wall| self.get_wall(wall))
    }

    pub fn get_coord(&self) -> Dims {
        self.coord
    }

    pub fn is_carved(&self) -> bool {
        self.carved
    }

    pub(crate) fn mark_carved(&mut self) {
        self.carved = true;
    }

    pub fn is_solve_visited(&self) -> bool {
        self.solve_visited
    }

    pub(crate) fn set_solve_visited(&mut self, visited: bool) {
        self.solve_visited = visited;
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Cell {}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CellWall {
    Top,
    Right,
    Bottom,
    Left,
}

impl CellWall {
    /// Offset in `(row, col)` to the neighbor behind this wall.
    pub fn to_coord(&self) -> Dims {
        match self {
            Top => Dims(-1, 0),
            Right => Dims(0, 1),
            Bottom => Dims(1, 0),
            Left => Dims(0, -1),
        }
    }

    pub fn reverse_wall(&self) -> CellWall {
        match self {
            Top => Bottom,
            Right => Left,
            Bottom => Top,
            Left => Right,
        }
    }

    /// Canonical direction order: up, right, down, left.
    ///
    /// The solver breaks ties in this order.
    pub const fn get_in_order() -> [CellWall; 4] {
        [Top, Right, Bottom, Left]
    }
}
