//! `SquareMatrix`: a dense, row-major square matrix that grows one row and one
//! column at a time.
//!
//! Storage is a single contiguous `Vec<T>`, so a row is one slice. Growth
//! re-lays the buffer, which is \(O(n^2)\) per call; the matrix never shrinks.

/// A square matrix backed by contiguous row-major storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareMatrix<T> {
    data: Vec<T>,
    side: usize,
}

impl<T> SquareMatrix<T> {
    /// Returns the number of rows (equal to the number of columns).
    #[inline(always)]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns `true` if the matrix has no cells.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.side == 0
    }

    /// Returns a shared reference to the element at (row, col).
    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.side && col < self.side {
            self.data.get(row * self.side + col)
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at (row, col).
    #[inline(always)]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.side && col < self.side {
            self.data.get_mut(row * self.side + col)
        } else {
            None
        }
    }

    /// Returns a row as a slice.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.side {
            let start = row * self.side;
            Some(&self.data[start..start + self.side])
        } else {
            None
        }
    }

    /// Iterates over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // `chunks_exact(0)` panics, and an empty matrix has no rows anyway.
        self.data.chunks_exact(self.side.max(1)).take(self.side)
    }
}

impl<T: Clone> SquareMatrix<T> {
    /// Creates a `side x side` matrix with every cell set to `fill`.
    ///
    /// Returns `None` if `side * side` cells cannot be addressed or allocated.
    pub fn filled(side: usize, fill: T) -> Option<Self> {
        let len = side.checked_mul(side)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).ok()?;
        data.resize(len, fill);
        Some(Self { data, side })
    }

    /// Appends one row and one column of `fill`, keeping every existing cell at
    /// its (row, col) position. Returns the new side length, or `None` (leaving
    /// the matrix untouched) if the larger matrix cannot be allocated.
    pub fn grow_with(&mut self, fill: T) -> Option<usize> {
        let old = self.side;
        let side = old.checked_add(1)?;
        let len = side.checked_mul(side)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).ok()?;
        for row in self.data.chunks_exact(old.max(1)).take(old) {
            data.extend_from_slice(row);
            data.push(fill.clone());
        }
        data.resize(len, fill);
        self.data = data;
        self.side = side;
        Some(side)
    }
}

impl<T> Default for SquareMatrix<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            side: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_starts_zeroed() {
        let m = SquareMatrix::filled(3, 0u32).unwrap();
        assert_eq!(m.side(), 3);
        assert!(m.rows().all(|row| row.iter().all(|&w| w == 0)));
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m.get(0, 3), None);
    }

    #[test]
    fn matrix_growth_preserves_cells() {
        let mut m = SquareMatrix::<u32>::default();
        assert!(m.is_empty());
        assert_eq!(m.rows().count(), 0);

        assert_eq!(m.grow_with(0), Some(1));
        assert_eq!(m.grow_with(0), Some(2));
        *m.get_mut(0, 1).unwrap() = 7;
        *m.get_mut(1, 0).unwrap() = 9;

        m.grow_with(0);
        assert_eq!(m.side(), 3);
        assert_eq!(m.row(0).unwrap(), &[0, 7, 0]);
        assert_eq!(m.row(1).unwrap(), &[9, 0, 0]);
        assert_eq!(m.row(2).unwrap(), &[0, 0, 0]);
        assert_eq!(m.rows().count(), 3);
    }

    #[test]
    fn oversized_matrix_is_refused() {
        assert!(SquareMatrix::filled(usize::MAX, 0u8).is_none());
        // Addressable cell count, but far more bytes than any allocator grants.
        assert!(SquareMatrix::filled(1usize << (usize::BITS / 2 - 1), 0u64).is_none());

        let mut m = SquareMatrix::<u8>::default();
        m.side = usize::MAX;
        assert_eq!(m.grow_with(0), None);
        assert_eq!(m.side(), usize::MAX);
    }
}
