use std::fmt;

use rand::seq::SliceRandom as _;
use smallvec::SmallVec;

use crate::{
    dims::Dims,
    error::MazeError,
    gameboard::{CellWall, Grid},
};

use super::{Params, Random};

pub trait Carver: fmt::Debug + Sync + Send {
    /// Carves passages into a pristine grid, turning it into a perfect maze.
    ///
    /// Fails with [`MazeError::AlreadyGenerated`] if any cell of the grid was already carved.
    fn carve(&self, grid: &mut Grid, rng: &mut Random, params: &Params) -> Result<(), MazeError>;
}

/// Randomized depth-first search with an explicit stack.
///
/// Parameters:
/// - `no_rng`: always take the first unvisited neighbor (up, right, down, left) instead of a
///   random one.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstSearch;

impl Carver for DepthFirstSearch {
    fn carve(&self, grid: &mut Grid, rng: &mut Random, params: &Params) -> Result<(), MazeError> {
        if grid.carved_count() > 0 {
            return Err(MazeError::AlreadyGenerated);
        }

        let no_rng = params.parsed_or_warn("no_rng", false);
        let cell_count = grid.cell_count();
        log::debug!(
            "carving {}x{} grid (no_rng: {})",
            grid.rows(),
            grid.cols(),
            no_rng
        );

        let mut stack: Vec<Dims> = Vec::with_capacity(cell_count);
        let mut current = grid.entry();
        grid.cells[current].mark_carved();
        let mut max_depth = 0usize;

        loop {
            let unvisited = CellWall::get_in_order()
                .into_iter()
                .filter_map(|wall| grid.neighbor(current, wall).map(|pos| (wall, pos)))
                .filter(|&(_, pos)| !grid.cells[pos].is_carved())
                .collect::<SmallVec<[_; 4]>>();

            let chosen = if no_rng {
                unvisited.first()
            } else {
                unvisited.choose(rng)
            };

            if let Some(&(wall, next)) = chosen {
                grid.remove_wall(current, wall);
                stack.push(current);
                max_depth = max_depth.max(stack.len());
                current = next;
                grid.cells[current].mark_carved();
            } else if let Some(prev) = stack.pop() {
                current = prev;
            } else {
                break;
            }
        }

        log::debug!(
            "carving done, {} walls removed, max stack depth {}",
            grid.removed_wall_count(),
            max_depth
        );

        Ok(())
    }
}
