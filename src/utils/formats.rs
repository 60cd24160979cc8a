//! Utilities for converting between our linked representations and sprs

use sprs::{CsMat, TriMat};

use crate::error::{Result, SparseError};
use crate::matrix::{MatrixConfig, MatrixEntry, SparseMatrix};
use crate::Element;

/// Fails on an entry that is out of range or not after `last` in row-major
/// order, then records it as the new `last`
///
/// Both can only happen when the matrix was built unchecked.
fn check_entry<T>(
    shape: (usize, usize),
    last: &mut Option<(usize, usize)>,
    entry: &MatrixEntry<T>,
) -> Result<()> {
    let (row, col) = (entry.row, entry.col);
    let (n_rows, n_cols) = shape;
    if row >= n_rows || col >= n_cols {
        return Err(SparseError::IndexOutOfBounds {
            row,
            col,
            n_rows,
            n_cols,
        });
    }
    if let Some((last_row, last_col)) = *last {
        if (row, col) <= (last_row, last_col) {
            return Err(SparseError::OutOfOrder {
                row,
                col,
                last_row,
                last_col,
            });
        }
    }
    *last = Some((row, col));
    Ok(())
}

/// Converts a linked matrix to sprs CsMat in CSR format
pub fn to_sprs_csr<T, M>(matrix: &M) -> Result<CsMat<T>>
where
    T: Element + Default,
    M: SparseMatrix<T>,
{
    let mut indptr = Vec::new();
    let mut indices = Vec::new();
    let mut data = Vec::new();
    indptr.try_reserve_exact(matrix.n_rows() + 1)?;
    indices.try_reserve_exact(matrix.nnz())?;
    data.try_reserve_exact(matrix.nnz())?;

    let mut last = None;
    indptr.push(0);
    for entry in matrix.entries() {
        check_entry(matrix.shape(), &mut last, &entry)?;
        let MatrixEntry { row, col, value } = entry;
        // Close every row up to and including the previous one
        while indptr.len() <= row {
            indptr.push(indices.len());
        }
        indices.push(col);
        data.push(value);
    }
    while indptr.len() <= matrix.n_rows() {
        indptr.push(indices.len());
    }

    Ok(CsMat::new(
        (matrix.n_rows(), matrix.n_cols()),
        indptr,
        indices,
        data,
    ))
}

/// Converts a linked matrix to sprs CsMat in CSC format
pub fn to_sprs_csc<T, M>(matrix: &M) -> Result<CsMat<T>>
where
    T: Element + Default,
    M: SparseMatrix<T>,
{
    let mut triplets = TriMat::with_capacity((matrix.n_rows(), matrix.n_cols()), matrix.nnz());
    let mut last = None;
    for entry in matrix.entries() {
        check_entry(matrix.shape(), &mut last, &entry)?;
        let MatrixEntry { row, col, value } = entry;
        triplets.add_triplet(row, col, value);
    }
    Ok(triplets.to_csc())
}

/// Converts sprs CsMat (CSR or CSC) to a linked matrix
///
/// Explicitly stored zeros are dropped.
pub fn from_sprs<T, M>(matrix: &CsMat<T>) -> Result<M>
where
    T: Element + Default,
    M: SparseMatrix<T>,
{
    from_sprs_with_config(matrix, MatrixConfig::default())
}

pub fn from_sprs_with_config<T, M>(matrix: &CsMat<T>, config: MatrixConfig) -> Result<M>
where
    T: Element + Default,
    M: SparseMatrix<T>,
{
    // Ensure matrix is in CSR format
    let csr = if matrix.is_csr() {
        matrix.clone()
    } else {
        matrix.to_csr()
    };

    let (n_rows, n_cols) = csr.shape();
    let mut result = M::with_config(n_rows, n_cols, config)?;
    result.reserve(csr.nnz())?;

    // sprs keeps the indices of every outer vector sorted
    for (row, vector) in csr.outer_iterator().enumerate() {
        for (col, &value) in vector.iter() {
            result.insert_last(value, row, col)?;
        }
    }

    Ok(result)
}
