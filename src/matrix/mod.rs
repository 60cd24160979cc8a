//! Sparse matrix representations and the capability set they share

pub mod config;
pub mod conversion;
pub mod cross;
pub mod entry;
pub mod triple;

pub use config::{MatrixConfig, SystemParameters};
pub use cross::CrossListMatrix;
pub use entry::MatrixEntry;
pub use triple::TripleListMatrix;

use ndarray::Array2;

use crate::error::Result;
use crate::Element;

/// Index of a node in a representation's node arena
pub(crate) type NodeId = usize;

/// Operations every sparse matrix representation supports
///
/// Matrices are built by appending entries in ascending row-major order
/// (ascending row, then ascending column within a row). Derived matrices are
/// returned as new, independently owned values; dropping a matrix releases
/// every node it owns.
pub trait SparseMatrix<T: Element>: Sized {
    /// Creates an empty `n_rows × n_cols` matrix
    fn with_config(n_rows: usize, n_cols: usize, config: MatrixConfig) -> Result<Self>;

    /// Number of rows
    fn n_rows(&self) -> usize;

    /// Number of columns
    fn n_cols(&self) -> usize;

    /// Number of stored (nonzero) entries
    fn nnz(&self) -> usize;

    fn config(&self) -> &MatrixConfig;

    /// Reserves node storage for at least `additional` more entries
    fn reserve(&mut self, additional: usize) -> Result<()>;

    /// Appends a nonzero entry at `(row, col)`
    ///
    /// Zero values are not stored. Depending on the config, entries outside
    /// the shape or out of ascending order are rejected.
    fn insert_last(&mut self, value: T, row: usize, col: usize) -> Result<()>;

    /// Releases every entry, keeping the shape and config
    fn clear(&mut self);

    /// Iterates entries in row-major order
    fn entries(&self) -> Box<dyn Iterator<Item = MatrixEntry<T>> + '_>;

    /// Returns the `n_cols × n_rows` transpose
    fn transpose(&self) -> Result<Self>;

    /// Returns `self + other`; shapes must be equal
    fn add(&self, other: &Self) -> Result<Self>;

    /// Returns `self × other`; `self.n_cols()` must equal `other.n_rows()`
    fn mul(&self, other: &Self) -> Result<Self>;

    /// Creates an empty matrix with the default config
    fn new(n_rows: usize, n_cols: usize) -> Result<Self> {
        Self::with_config(n_rows, n_cols, MatrixConfig::default())
    }

    fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_cols())
    }

    fn is_empty(&self) -> bool {
        self.nnz() == 0
    }

    /// Builds a matrix from entries given in ascending row-major order
    fn from_entries<I, E>(n_rows: usize, n_cols: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<MatrixEntry<T>>,
    {
        Self::from_entries_with_config(n_rows, n_cols, MatrixConfig::default(), entries)
    }

    fn from_entries_with_config<I, E>(
        n_rows: usize,
        n_cols: usize,
        config: MatrixConfig,
        entries: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<MatrixEntry<T>>,
    {
        let mut matrix = Self::with_config(n_rows, n_cols, config)?;
        for entry in entries {
            let MatrixEntry { row, col, value } = entry.into();
            matrix.insert_last(value, row, col)?;
        }
        Ok(matrix)
    }

    /// Returns the value at `(row, col)`, or zero when no entry is stored
    fn get(&self, row: usize, col: usize) -> T {
        self.entries()
            .find(|e| e.row == row && e.col == col)
            .map_or_else(T::zero, |e| e.value)
    }

    /// Expands the matrix into a dense array
    ///
    /// Entries outside the shape (only possible with bounds checking
    /// disabled) are left out.
    fn to_dense(&self) -> Array2<T> {
        let mut dense = Array2::zeros((self.n_rows(), self.n_cols()));
        for MatrixEntry { row, col, value } in self.entries() {
            if let Some(cell) = dense.get_mut([row, col]) {
                *cell = value;
            }
        }
        dense
    }

    /// Rebuilds this matrix in another representation, keeping the config
    fn convert<M: SparseMatrix<T>>(&self) -> Result<M> {
        M::from_entries_with_config(
            self.n_rows(),
            self.n_cols(),
            self.config().clone(),
            self.entries(),
        )
    }
}
