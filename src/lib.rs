//! # linked-sparse: sparse matrices over linked lists
//!
//! This library stores sparse matrices as linked structures and implements
//! their arithmetic as streaming merges over sorted rows and columns, never
//! iterating the dense index space.
//!
//! ## Representations
//!
//! - [`TripleListMatrix`]: a single row-major chain of `(row, col, value)`
//!   nodes with O(1) tail append.
//! - [`CrossListMatrix`]: an orthogonal cross list. Every node is linked into
//!   a circular row chain and a circular column chain, each headed by a
//!   sentinel, so both row-major and column-major traversal are available.
//!
//! Both implement [`SparseMatrix`], so code and tests can be written once
//! against either representation.
//!
//! ## Algorithm Components
//!
//! 1. **Insertion**: entries are appended in ascending row-major order. Out
//!    of order or out of range insertions are rejected (configurable via
//!    [`MatrixConfig`]).
//! 2. **Transpose**: re-inserts every entry with swapped coordinates; the
//!    triple list uses a counting transpose to stay row-major.
//! 3. **Addition**: a sorted merge of matching rows; sums that cancel to zero
//!    are dropped.
//! 4. **Multiplication**: a merge-join dot product of every row of the left
//!    operand with every column of the right one.
//!
//! Output rows of addition and multiplication are independent and are
//! computed with Rayon for large enough matrices.
//!
//! ## Usage
//!
//! ```
//! use linked_sparse::{CrossListMatrix, SparseMatrix};
//!
//! // A = [1 2; 0 3]
//! let a = CrossListMatrix::<i64>::from_entries(2, 2, vec![(0, 0, 1), (0, 1, 2), (1, 1, 3)])?;
//! let identity = CrossListMatrix::<i64>::from_entries(2, 2, vec![(0, 0, 1), (1, 1, 1)])?;
//!
//! let c = a.mul(&identity)?;
//! assert_eq!(c.get(0, 1), 2);
//! assert_eq!(c.nnz(), 3);
//!
//! let t = c.transpose()?;
//! assert_eq!(t.get(1, 0), 2);
//! # Ok::<(), linked_sparse::SparseError>(())
//! ```

pub mod accumulator;
pub mod error;
pub mod io;
pub mod matrix;
pub mod parallel;
pub mod utils;

use num_traits::Num;

// Re-export primary components
pub use error::{Result, SparseError};
pub use matrix::{CrossListMatrix, MatrixEntry, SparseMatrix, TripleListMatrix};
pub use matrix::config::{MatrixConfig, SystemParameters};
pub use utils::{from_sprs, to_sprs_csc, to_sprs_csr};

/// Numeric types that can be stored in a sparse matrix
///
/// Rows may be computed on several threads, hence `Send + Sync`.
pub trait Element: Copy + Num + Send + Sync {}

impl<T> Element for T where T: Copy + Num + Send + Sync {}

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
