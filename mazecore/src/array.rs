use std::ops;

use serde::Serialize;

use crate::dims::Dims;

/// Fixed-size, row-major 2D buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Array2D<T> {
    buf: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Array2D<T> {
    /// Builds the array by calling `f` for every position, row by row.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(Dims) -> T) -> Self {
        let buf = Dims::iter_fill(Dims::ZERO, Dims(rows as i32, cols as i32))
            .map(&mut f)
            .collect();

        Self { buf, rows, cols }
    }

    pub fn size(&self) -> Dims {
        Dims(self.rows as i32, self.cols as i32)
    }

    pub fn dim_to_idx(&self, pos: Dims) -> Option<usize> {
        if !pos.all_non_negative() {
            return None;
        }

        let Dims(row, col) = pos;
        let (row, col) = (row as usize, col as usize);

        if row >= self.rows || col >= self.cols {
            return None;
        }

        Some(row * self.cols + col)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Dims> {
        if idx >= self.buf.len() {
            return None;
        }

        Some(Dims((idx / self.cols) as i32, (idx % self.cols) as i32))
    }

    pub fn get(&self, pos: Dims) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Dims) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.buf.iter_mut()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }
}

impl<T> ops::Index<Dims> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Dims) -> &Self::Output {
        self.get(index).expect("Index out of bounds")
    }
}

impl<T> ops::IndexMut<Dims> for Array2D<T> {
    fn index_mut(&mut self, index: Dims) -> &mut Self::Output {
        self.get_mut(index).expect("Index out of bounds")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        let arr = Array2D::from_fn(3, 4, |_| 0u8);
        for pos in arr.iter_pos() {
            let idx = arr.dim_to_idx(pos).unwrap();
            assert_eq!(arr.idx_to_dim(idx), Some(pos));
        }
        assert_eq!(arr.iter_pos().count(), 12);
    }

    #[test]
    fn out_of_bounds() {
        let mut arr = Array2D::from_fn(2, 2, |_| 0u8);
        assert_eq!(arr.get(Dims(-1, 0)), None);
        assert_eq!(arr.get(Dims(0, 2)), None);
        assert_eq!(arr.get(Dims(2, 0)), None);
        assert!(arr.get_mut(Dims(1, -1)).is_none());
    }

    #[test]
    fn from_fn_sees_positions() {
        let arr = Array2D::from_fn(2, 3, |pos| pos);
        assert_eq!(arr[Dims(1, 2)], Dims(1, 2));
        assert_eq!(arr.size(), Dims(2, 3));
        assert!(arr.iter().zip(arr.iter_pos()).all(|(&a, b)| a == b));
    }
}
