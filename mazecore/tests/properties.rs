use hashbrown::HashSet;
use mazecore::{
    algorithms::{Params, Random},
    dims::Dims,
    gameboard::{CellWall, Grid},
    Maze, MazeError,
};
use rand::SeedableRng as _;

const SIZES: [(usize, usize); 9] = [
    (1, 1),
    (1, 2),
    (2, 1),
    (1, 17),
    (13, 1),
    (2, 2),
    (5, 8),
    (16, 16),
    (31, 7),
];

fn generated(rows: usize, cols: usize, seed: u64) -> Maze {
    let mut maze = Maze::new(rows, cols).unwrap();
    maze.generate_seeded(seed).unwrap();
    maze
}

fn walls(grid: &Grid) -> Vec<[bool; 4]> {
    grid.iter_cells().map(|cell| cell.walls()).collect()
}

/// Flood fill over removed walls, failing on any edge leading back to an
/// already seen cell other than the one we came from.
fn assert_spanning_tree(grid: &Grid) {
    let mut seen = HashSet::new();
    let mut stack = vec![(grid.entry(), None)];
    seen.insert(grid.entry());

    while let Some((pos, parent)) = stack.pop() {
        for next in grid.open_neighbors(pos) {
            if Some(next) == parent {
                continue;
            }
            assert!(seen.insert(next), "cycle through {:?} -> {:?}", pos, next);
            stack.push((next, Some(pos)));
        }
    }

    assert_eq!(seen.len(), grid.cell_count(), "not every cell is reachable");
}

#[test]
fn every_cell_carved_once() {
    for (rows, cols) in SIZES {
        for seed in 0..8 {
            let maze = generated(rows, cols, seed);
            let grid = maze.grid();

            assert_eq!(grid.carved_count(), rows * cols);
            assert_eq!(grid.removed_wall_count(), rows * cols - 1);
        }
    }
}

#[test]
fn removed_walls_form_spanning_tree() {
    for (rows, cols) in SIZES {
        for seed in 0..8 {
            assert_spanning_tree(generated(rows, cols, seed).grid());
        }
    }
}

#[test]
fn walls_are_symmetric() {
    let maze = generated(12, 9, 5);
    let grid = maze.grid();

    for cell in grid.iter_cells() {
        let pos = cell.get_coord();
        for wall in CellWall::get_in_order() {
            match grid.neighbor(pos, wall) {
                Some(other) => assert_eq!(
                    grid.is_open(pos, wall),
                    grid.is_open(other, wall.reverse_wall())
                ),
                None => assert!(!grid.is_open(pos, wall), "border wall removed at {:?}", pos),
            }
        }
    }
}

#[test]
fn solution_walks_through_open_walls() {
    for (rows, cols) in SIZES {
        for seed in 0..8 {
            let mut maze = generated(rows, cols, seed);
            let path = maze.solve().unwrap().to_vec();

            assert_eq!(path.first(), Some(&Dims(0, 0)));
            assert_eq!(path.last(), Some(&Dims(rows as i32 - 1, cols as i32 - 1)));
            assert!(!path.is_empty() && path.len() <= rows * cols);
            assert_eq!(path.len() == 1, rows == 1 && cols == 1);

            for pair in path.windows(2) {
                assert!(pair[0].is_adjacent(pair[1]));
                let wall = Grid::which_wall_between(pair[0], pair[1]).unwrap();
                assert!(maze.grid().is_open(pair[0], wall));
            }

            let unique: HashSet<_> = path.iter().collect();
            assert_eq!(unique.len(), path.len(), "path is not simple");
        }
    }
}

#[test]
fn solving_does_not_touch_walls() {
    let mut maze = generated(10, 10, 77);
    let before = walls(maze.grid());

    let first = maze.solve().unwrap().to_vec();
    let second = maze.solve().unwrap().to_vec();

    assert_eq!(first, second);
    assert_eq!(before, walls(maze.grid()));
}

#[test]
fn same_seed_same_layout() {
    for (rows, cols) in SIZES {
        let a = generated(rows, cols, 2024);
        let b = generated(rows, cols, 2024);
        assert_eq!(walls(a.grid()), walls(b.grid()));
    }

    let mut a = Maze::new(9, 9).unwrap();
    let mut b = Maze::new(9, 9).unwrap();
    a.generate_with(&mut Random::seed_from_u64(8)).unwrap();
    b.generate_with(&mut Random::seed_from_u64(8)).unwrap();
    assert_eq!(walls(a.grid()), walls(b.grid()));
}

#[test]
fn single_cell_maze() {
    let mut maze = generated(1, 1, 0);
    assert_eq!(maze.grid().removed_wall_count(), 0);
    assert_eq!(maze.solve().unwrap(), &[Dims(0, 0)]);
}

#[test]
fn single_row_is_a_corridor() {
    let cols = 23;
    let mut maze = generated(1, cols, 4);
    let path = maze.solve().unwrap();

    let expected: Vec<_> = (0..cols as i32).map(|col| Dims(0, col)).collect();
    assert_eq!(path, expected.as_slice());
}

#[test]
fn single_column_is_a_corridor() {
    let rows = 11;
    let mut maze = generated(rows, 1, 4);
    let path = maze.solve().unwrap();

    let expected: Vec<_> = (0..rows as i32).map(|row| Dims(row, 0)).collect();
    assert_eq!(path, expected.as_slice());
}

#[test]
fn zero_dimensions_are_rejected() {
    assert_eq!(
        Maze::new(0, 5).unwrap_err(),
        MazeError::InvalidDimensions { rows: 0, cols: 5 }
    );
    assert_eq!(
        Maze::new(5, 0).unwrap_err(),
        MazeError::InvalidDimensions { rows: 5, cols: 0 }
    );
    assert!(Maze::new(0, 0).is_err());
}

#[test]
fn large_corridor_does_not_overflow_the_stack() {
    // a single row forces both searches to the deepest possible stack
    let mut maze = Maze::new(1, 200_000).unwrap();
    maze.generate_seeded(1).unwrap();
    assert_eq!(maze.solve().unwrap().len(), 200_000);
}

#[test]
fn no_rng_needs_no_seed() {
    let params = Params::new().with("no_rng", true);
    let mut a = Maze::new(7, 3).unwrap().with_params(params.clone());
    let mut b = Maze::new(7, 3).unwrap().with_params(params);
    a.generate().unwrap();
    b.generate().unwrap();

    assert_eq!(walls(a.grid()), walls(b.grid()));
    assert_spanning_tree(a.grid());
}
