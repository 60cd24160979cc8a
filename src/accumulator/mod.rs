//! Row kernels shared by both matrix representations
//!
//! Both representations reduce `add` and `mul` to operations over sorted
//! sparse rows and columns:
//!
//! - **Merge**: the sum of two ascending sequences, for addition
//! - **Merge-join dot**: the dot product of a row and a column, for multiplication
//!
//! Every kernel produces ascending, zero-free output so that the result can
//! be appended to a new matrix without violating its ordering invariant.

pub mod dot;
pub mod merge;

pub use dot::sparse_dot;
pub use merge::{merge_sorted, MergeSorted};

use num_traits::Num;

/// One output row: ascending `(col, value)` pairs, none of them zero
pub type RowEntries<T> = Vec<(usize, T)>;

/// Adds two ascending sparse rows
pub fn add_row<T, A, B>(a: A, b: B) -> RowEntries<T>
where
    T: Copy + Num,
    A: IntoIterator<Item = (usize, T)>,
    B: IntoIterator<Item = (usize, T)>,
{
    merge_sorted(a, b).collect()
}

/// Computes one row of a product
///
/// `a_row` is row `i` of the left operand; `column(j)` yields column `j` of
/// the right operand in ascending row order. Only nonzero dot products are
/// kept.
pub fn multiply_row<T, A, B, F>(a_row: A, n_cols: usize, column: F) -> RowEntries<T>
where
    T: Copy + Num,
    A: Iterator<Item = (usize, T)> + Clone,
    B: IntoIterator<Item = (usize, T)>,
    F: Fn(usize) -> B,
{
    let mut row = Vec::new();

    if a_row.clone().next().is_none() {
        return row;
    }

    for j in 0..n_cols {
        let sum = sparse_dot(a_row.clone(), column(j));
        if !sum.is_zero() {
            row.push((j, sum));
        }
    }

    row
}
