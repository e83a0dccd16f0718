use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Position or offset on the grid, stored as `(row, col)`.
///
/// Components are signed so that offsets like `Dims(-1, 0)` can be added to
/// a position without casting. Positions stored inside a grid are never
/// negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);
    pub const ONE: Dims = Dims(1, 1);

    pub fn row(self) -> i32 {
        self.0
    }

    pub fn col(self) -> i32 {
        self.1
    }

    /// Iterates over every position in `from..to`, row by row.
    pub fn iter_fill(from: Dims, to: Dims) -> impl Iterator<Item = Dims> {
        (from.0..to.0).flat_map(move |row| (from.1..to.1).map(move |col| Dims(row, col)))
    }

    pub fn all_non_negative(self) -> bool {
        self.0 >= 0 && self.1 >= 0
    }

    pub fn abs_sum(self) -> i32 {
        self.0.abs() + self.1.abs()
    }

    /// Manhattan distance of 1, i.e. the two positions share a wall.
    pub fn is_adjacent(self, other: Dims) -> bool {
        (self - other).abs_sum() == 1
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Dims {
    type Output = Dims;

    fn sub(self, other: Dims) -> Dims {
        Dims(self.0 - other.0, self.1 - other.1)
    }
}
