//! Error types for sparse matrix construction and arithmetic

use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SparseError {
    #[error("Invalid dimensions for {op}: {}×{} and {}×{}", lhs.0, lhs.1, rhs.0, rhs.1)]
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("Entry ({row}, {col}) out of bounds for {n_rows}×{n_cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        n_rows: usize,
        n_cols: usize,
    },

    #[error("Entry ({row}, {col}) inserted after ({last_row}, {last_col}); entries must be appended in ascending row-major order")]
    OutOfOrder {
        row: usize,
        col: usize,
        last_row: usize,
        last_col: usize,
    },

    #[error("Allocation failure: {0}")]
    AllocationFailure(#[from] TryReserveError),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SparseError>;

impl SparseError {
    pub(crate) fn dimension_mismatch(
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    ) -> Self {
        SparseError::DimensionMismatch { op, lhs, rhs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SparseError::dimension_mismatch("add", (2, 3), (3, 2));
        assert_eq!(err.to_string(), "Invalid dimensions for add: 2×3 and 3×2");

        let err = SparseError::OutOfOrder {
            row: 0,
            col: 1,
            last_row: 1,
            last_col: 0,
        };
        assert!(err.to_string().starts_with("Entry (0, 1) inserted after (1, 0)"));
    }

    #[test]
    fn test_allocation_failure_from_try_reserve() {
        let mut v: Vec<u64> = Vec::new();
        let err: SparseError = v.try_reserve(usize::MAX).unwrap_err().into();
        assert!(matches!(err, SparseError::AllocationFailure(_)));
    }
}
