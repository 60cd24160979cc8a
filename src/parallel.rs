//! # Row-parallel arithmetic
//!
//! Every output row of a sum or product depends only on the matching row of
//! the left operand (and the whole of the right operand), so rows can be
//! computed independently with Rayon and then appended to the result in row
//! order. Appending stays serial, which keeps the result's chains sorted.

use rayon::prelude::*;

use crate::accumulator::RowEntries;
use crate::error::Result;
use crate::matrix::{MatrixConfig, SparseMatrix};
use crate::Element;

/// Computes `n_rows` output rows, in parallel when the config allows it
///
/// The returned vector holds row `i` at index `i` regardless of how the rows
/// were scheduled.
pub fn compute_rows<T, F>(n_rows: usize, config: &MatrixConfig, row: F) -> Vec<RowEntries<T>>
where
    T: Element,
    F: Fn(usize) -> RowEntries<T> + Sync + Send,
{
    if config.system_params.use_parallel(n_rows) {
        tracing::debug!(n_rows, "computing rows in parallel");
        (0..n_rows).into_par_iter().map(row).collect()
    } else {
        (0..n_rows).map(row).collect()
    }
}

/// Builds a matrix from rows produced by [`compute_rows`]
pub fn assemble<T, M>(
    n_rows: usize,
    n_cols: usize,
    config: MatrixConfig,
    rows: Vec<RowEntries<T>>,
) -> Result<M>
where
    T: Element,
    M: SparseMatrix<T>,
{
    let mut result = M::with_config(n_rows, n_cols, config)?;
    let nnz = rows.iter().map(Vec::len).sum();
    result.reserve(nnz)?;

    for (i, row) in rows.into_iter().enumerate() {
        for (j, value) in row {
            result.insert_last(value, i, j)?;
        }
    }

    Ok(result)
}
