use crate::{
    dims::Dims,
    error::MazeError,
    gameboard::{CellWall, Grid},
};

/// One level of the depth-first search: the cell and the index of the next
/// direction (in [`CellWall::get_in_order`]) to try from it.
#[derive(Debug, Clone, Copy)]
struct Frame {
    pos: Dims,
    next_way: usize,
}

/// Backtracking depth-first search from the top-left to the bottom-right cell.
///
/// Moves only through removed walls and tries directions in the order up, right, down, left.
/// The search keeps its own stack instead of recursing, the frames on the stack are exactly the
/// path from the entry to the cell being expanded.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackSolver;

impl BacktrackSolver {
    /// Finds the path from [`Grid::entry`] to [`Grid::exit`], both ends included.
    ///
    /// Clears the solve markers of the grid first. Walls are never touched.
    pub fn solve(&self, grid: &mut Grid) -> Result<Vec<Dims>, MazeError> {
        let (entry, exit) = (grid.entry(), grid.exit());
        self.solve_between(grid, entry, exit)
    }

    pub fn solve_between(
        &self,
        grid: &mut Grid,
        from: Dims,
        to: Dims,
    ) -> Result<Vec<Dims>, MazeError> {
        if !grid.is_in_bounds(from) || !grid.is_in_bounds(to) {
            return Err(MazeError::NoPathFound);
        }

        grid.clear_solve_marks();

        let mut stack = Vec::with_capacity(grid.cell_count());
        stack.push(Frame {
            pos: from,
            next_way: 0,
        });
        grid.cells[from].set_solve_visited(true);
        let mut expanded = 1usize;

        while let Some(frame) = stack.last_mut() {
            if frame.pos == to {
                log::debug!(
                    "path of length {} found, {} cells explored",
                    stack.len(),
                    expanded
                );
                return Ok(stack.iter().map(|frame| frame.pos).collect());
            }

            let pos = frame.pos;
            let mut next = None;
            while let Some(&wall) = CellWall::get_in_order().get(frame.next_way) {
                frame.next_way += 1;

                if !grid.is_open(pos, wall) {
                    continue;
                }

                if let Some(neighbor) = grid.neighbor(pos, wall) {
                    if !grid.cells[neighbor].is_solve_visited() {
                        next = Some(neighbor);
                        break;
                    }
                }
            }

            match next {
                Some(neighbor) => {
                    grid.cells[neighbor].set_solve_visited(true);
                    expanded += 1;
                    stack.push(Frame {
                        pos: neighbor,
                        next_way: 0,
                    });
                }
                // dead end, the cell stays marked
                None => {
                    stack.pop();
                }
            }
        }

        log::debug!("no path found, {} cells explored", expanded);
        Err(MazeError::NoPathFound)
    }
}
