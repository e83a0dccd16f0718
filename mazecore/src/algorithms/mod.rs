pub mod carver;
pub mod solver;
pub mod types;

use rand::{thread_rng, Rng as _, SeedableRng as _};

pub use carver::{Carver, DepthFirstSearch};
pub use solver::BacktrackSolver;
pub use types::*;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Seeds a [`Random`], picking a seed from the thread rng when none is given.
///
/// Returns the seed too, so the maze can be reproduced later.
pub fn seeded_random(seed: Option<u64>) -> (Random, u64) {
    let seed = seed.unwrap_or_else(|| thread_rng().gen());
    (Random::seed_from_u64(seed), seed)
}
