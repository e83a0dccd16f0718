use std::fmt::Write as _;

use mazecore::{
    dims::Dims,
    gameboard::Grid,
    Maze,
};

const WALL_CHARS: [char; 4] = ['T', 'R', 'B', 'L'];

/// Wall flags of a cell as `TRBL`, with `-` in place of removed walls.
pub fn wall_mask(walls: [bool; 4]) -> String {
    walls
        .iter()
        .zip(WALL_CHARS)
        .map(|(&wall, ch)| if wall { ch } else { '-' })
        .collect()
}

/// Plain text summary of a solved maze, one path position per line.
pub fn report(maze: &Maze, path: &[Dims], show_walls: bool) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    let Dims(rows, cols) = maze.size();

    match maze.seed() {
        Some(seed) => writeln!(out, "seed: {}", seed)?,
        None => writeln!(out, "seed: unknown")?,
    }
    writeln!(out, "size: {}x{}", rows, cols)?;
    writeln!(out, "length: {}", path.len())?;
    writeln!(out, "path:")?;
    for pos in path {
        writeln!(out, "{},{}", pos.row(), pos.col())?;
    }

    if show_walls {
        write_walls(&mut out, maze.grid())?;
    }

    Ok(out)
}

fn write_walls(out: &mut String, grid: &Grid) -> std::fmt::Result {
    writeln!(out, "walls:")?;
    let masks: Vec<_> = grid.iter_cells().map(|cell| wall_mask(cell.walls())).collect();
    for row in masks.chunks(grid.cols()) {
        writeln!(out, "{}", row.join(" "))?;
    }

    Ok(())
}
