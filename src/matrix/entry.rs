//! A single nonzero entry of a sparse matrix

/// A nonzero matrix entry at `(row, col)`, 0-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixEntry<T> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

impl<T> MatrixEntry<T> {
    pub fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }

    /// The entry with its coordinates swapped
    pub fn transposed(self) -> Self {
        Self {
            row: self.col,
            col: self.row,
            value: self.value,
        }
    }
}

impl<T> From<(usize, usize, T)> for MatrixEntry<T> {
    fn from((row, col, value): (usize, usize, T)) -> Self {
        Self::new(row, col, value)
    }
}

impl<T> From<MatrixEntry<T>> for (usize, usize, T) {
    fn from(entry: MatrixEntry<T>) -> Self {
        (entry.row, entry.col, entry.value)
    }
}
