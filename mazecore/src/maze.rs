use std::sync::Arc;

use crate::{
    algorithms::{
        seeded_random, BacktrackSolver, Carver, DepthFirstSearch, MazeSpec, Params, Random,
    },
    dims::Dims,
    error::MazeError,
    gameboard::Grid,
};

/// Perfect maze with a two-phase lifecycle: [`Maze::generate`] once, then
/// [`Maze::solve`] as many times as needed.
///
/// Generating twice is rejected, call [`Maze::reset`] to start over with a
/// pristine grid.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    carver: Arc<dyn Carver>,
    params: Params,
    seed: Option<u64>,
    used_seed: Option<u64>,
    generated: bool,
    solution: Vec<Dims>,
}

impl Maze {
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        Ok(Maze {
            grid: Grid::new(rows, cols)?,
            carver: Arc::new(DepthFirstSearch),
            params: Params::default(),
            seed: None,
            used_seed: None,
            generated: false,
            solution: Vec::new(),
        })
    }

    pub fn from_spec(spec: &MazeSpec) -> Result<Self, MazeError> {
        let mut maze = Self::new(spec.rows, spec.cols)?.with_params(spec.params.clone());
        maze.seed = spec.seed;
        Ok(maze)
    }

    pub fn with_carver(mut self, carver: impl Carver + 'static) -> Self {
        self.carver = Arc::new(carver);
        self
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Carves the maze with the seed from its [`MazeSpec`], or a random one.
    pub fn generate(&mut self) -> Result<(), MazeError> {
        let (mut rng, seed) = seeded_random(self.seed);
        self.generate_with(&mut rng)?;
        self.used_seed = Some(seed);
        Ok(())
    }

    pub fn generate_seeded(&mut self, seed: u64) -> Result<(), MazeError> {
        let (mut rng, seed) = seeded_random(Some(seed));
        self.generate_with(&mut rng)?;
        self.used_seed = Some(seed);
        Ok(())
    }

    /// Carves the maze using the given random source.
    ///
    /// The seed of the source is unknown here, so [`Maze::seed`] returns `None` afterwards.
    pub fn generate_with(&mut self, rng: &mut Random) -> Result<(), MazeError> {
        if self.generated {
            return Err(MazeError::AlreadyGenerated);
        }

        self.carver.carve(&mut self.grid, rng, &self.params)?;
        self.generated = true;
        self.used_seed = None;
        self.solution.clear();

        Ok(())
    }

    /// Finds the path from `(0, 0)` to `(rows - 1, cols - 1)`.
    ///
    /// Walls are not modified, only the solve markers of the cells.
    pub fn solve(&mut self) -> Result<&[Dims], MazeError> {
        if !self.generated {
            return Err(MazeError::NotGenerated);
        }

        self.solution.clear();
        self.solution = BacktrackSolver.solve(&mut self.grid)?;

        Ok(&self.solution)
    }

    /// Last found path, empty before a successful [`Maze::solve`].
    pub fn solution(&self) -> &[Dims] {
        &self.solution
    }

    /// Puts back every wall and forgets the solution, so the maze can be generated again.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.generated = false;
        self.used_seed = None;
        self.solution.clear();
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> Dims {
        self.grid.size()
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// Seed of the last generation, if it's known.
    pub fn seed(&self) -> Option<u64> {
        self.used_seed
    }
}
