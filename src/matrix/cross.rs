//! Orthogonal cross list matrix format implementation
//!
//! Every nonzero entry is a node linked into two circular doubly linked
//! chains at once:
//!
//! - its **row chain**, through `left`/`right`, ordered by ascending column
//! - its **column chain**, through `up`/`down`, ordered by ascending row
//!
//! Each chain is headed by a sentinel node, so an empty row or column is a
//! sentinel linked to itself. Row-major and column-major traversal are both
//! available without storing any entry twice.
//!
//! All nodes live in one arena. The first `n_rows` slots are the row
//! sentinels, the next `n_cols` slots the column sentinels, and the real
//! entries follow in insertion order. Links are arena indices.

use std::fmt;

use crate::accumulator::{add_row, multiply_row};
use crate::error::{Result, SparseError};
use crate::matrix::{MatrixConfig, MatrixEntry, NodeId, SparseMatrix};
use crate::parallel::{assemble, compute_rows};
use crate::Element;

#[derive(Debug, Clone)]
struct CrossNode<T> {
    row: usize,
    col: usize,
    value: T,
    up: NodeId,
    down: NodeId,
    left: NodeId,
    right: NodeId,
}

impl<T> CrossNode<T> {
    /// A sentinel heading an empty circular chain
    fn sentinel(id: NodeId, row: usize, col: usize, value: T) -> Self {
        Self {
            row,
            col,
            value,
            up: id,
            down: id,
            left: id,
            right: id,
        }
    }
}

/// A sparse matrix stored as an orthogonal cross-linked list
#[derive(Clone)]
pub struct CrossListMatrix<T> {
    n_rows: usize,
    n_cols: usize,
    nodes: Vec<CrossNode<T>>,
    config: MatrixConfig,
}

/// Iterator over one row chain, yielding `(col, value)` in ascending column order
#[derive(Clone)]
pub struct CrossRowIter<'a, T> {
    nodes: &'a [CrossNode<T>],
    head: NodeId,
    cursor: NodeId,
}

impl<'a, T: Copy> Iterator for CrossRowIter<'a, T> {
    type Item = (usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.head {
            return None;
        }
        let node = &self.nodes[self.cursor];
        self.cursor = node.right;
        Some((node.col, node.value))
    }
}

/// Iterator over one column chain, yielding `(row, value)` in ascending row order
#[derive(Clone)]
pub struct CrossColIter<'a, T> {
    nodes: &'a [CrossNode<T>],
    head: NodeId,
    cursor: NodeId,
}

impl<'a, T: Copy> Iterator for CrossColIter<'a, T> {
    type Item = (usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.head {
            return None;
        }
        let node = &self.nodes[self.cursor];
        self.cursor = node.down;
        Some((node.row, node.value))
    }
}

/// Row-major iterator over all entries, walking row sentinel by row sentinel
pub struct CrossEntries<'a, T> {
    nodes: &'a [CrossNode<T>],
    n_rows: usize,
    row: usize,
    cursor: NodeId,
}

impl<'a, T: Copy> Iterator for CrossEntries<'a, T> {
    type Item = MatrixEntry<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.row < self.n_rows {
            // Row sentinel ids equal their row index
            if self.cursor == self.row {
                // Back at the sentinel: move on to the next row chain
                self.row += 1;
                if self.row < self.n_rows {
                    self.cursor = self.nodes[self.row].right;
                }
                continue;
            }
            let node = &self.nodes[self.cursor];
            self.cursor = node.right;
            return Some(MatrixEntry::new(node.row, node.col, node.value));
        }
        None
    }
}

impl<T: Element> CrossListMatrix<T> {
    /// Row sentinels occupy ids `0..n_rows`, so a row's sentinel id is the
    /// row index itself. `CrossEntries` relies on this too.
    fn row_head(&self, row: usize) -> NodeId {
        row
    }

    fn col_head(&self, col: usize) -> NodeId {
        self.n_rows + col
    }

    fn sentinel_count(&self) -> usize {
        self.n_rows + self.n_cols
    }

    /// Links every sentinel to itself
    fn reset_sentinels(&mut self) {
        for id in 0..self.sentinel_count() {
            let node = &mut self.nodes[id];
            node.up = id;
            node.down = id;
            node.left = id;
            node.right = id;
        }
    }

    /// Iterates row `i` in ascending column order
    ///
    /// # Panics
    ///
    /// Panics if `i >= n_rows`
    pub fn row_iter(&self, i: usize) -> CrossRowIter<'_, T> {
        assert!(i < self.n_rows, "Row index out of bounds");
        let head = self.row_head(i);
        CrossRowIter {
            nodes: &self.nodes,
            head,
            cursor: self.nodes[head].right,
        }
    }

    /// Iterates column `j` in ascending row order
    ///
    /// # Panics
    ///
    /// Panics if `j >= n_cols`
    pub fn col_iter(&self, j: usize) -> CrossColIter<'_, T> {
        assert!(j < self.n_cols, "Column index out of bounds");
        let head = self.col_head(j);
        CrossColIter {
            nodes: &self.nodes,
            head,
            cursor: self.nodes[head].down,
        }
    }

    /// Iterates all entries in row-major order
    pub fn iter(&self) -> CrossEntries<'_, T> {
        CrossEntries {
            nodes: &self.nodes,
            n_rows: self.n_rows,
            row: 0,
            cursor: if self.n_rows > 0 { self.nodes[0].right } else { 0 },
        }
    }

    /// Checks that appending at `(row, col)` keeps both chains ascending
    fn order_violation(&self, row: usize, col: usize) -> Option<SparseError> {
        let row_head = self.row_head(row);
        let last_in_row = self.nodes[row_head].left;
        if last_in_row != row_head && self.nodes[last_in_row].col >= col {
            let last = &self.nodes[last_in_row];
            return Some(SparseError::OutOfOrder {
                row,
                col,
                last_row: last.row,
                last_col: last.col,
            });
        }

        let col_head = self.col_head(col);
        let last_in_col = self.nodes[col_head].up;
        if last_in_col != col_head && self.nodes[last_in_col].row >= row {
            let last = &self.nodes[last_in_col];
            return Some(SparseError::OutOfOrder {
                row,
                col,
                last_row: last.row,
                last_col: last.col,
            });
        }

        None
    }
}

impl<T: Element> SparseMatrix<T> for CrossListMatrix<T> {
    fn with_config(n_rows: usize, n_cols: usize, config: MatrixConfig) -> Result<Self> {
        let mut nodes = Vec::new();
        nodes.try_reserve_exact(n_rows + n_cols)?;

        for i in 0..n_rows {
            nodes.push(CrossNode::sentinel(i, i, usize::MAX, T::zero()));
        }
        for j in 0..n_cols {
            nodes.push(CrossNode::sentinel(n_rows + j, usize::MAX, j, T::zero()));
        }

        Ok(Self {
            n_rows,
            n_cols,
            nodes,
            config,
        })
    }

    fn n_rows(&self) -> usize {
        self.n_rows
    }

    fn n_cols(&self) -> usize {
        self.n_cols
    }

    fn nnz(&self) -> usize {
        self.nodes.len() - self.sentinel_count()
    }

    fn config(&self) -> &MatrixConfig {
        &self.config
    }

    fn reserve(&mut self, additional: usize) -> Result<()> {
        self.nodes.try_reserve(additional)?;
        Ok(())
    }

    /// Links the new node in front of the row sentinel and in front of the
    /// column sentinel, i.e. at the end of both circular chains.
    ///
    /// Coordinates are always bounds checked: a cross list has no sentinel
    /// to link an out-of-range entry to.
    fn insert_last(&mut self, value: T, row: usize, col: usize) -> Result<()> {
        if value.is_zero() {
            tracing::trace!(row, col, "skipping zero entry");
            return Ok(());
        }

        if row >= self.n_rows || col >= self.n_cols {
            return Err(SparseError::IndexOutOfBounds {
                row,
                col,
                n_rows: self.n_rows,
                n_cols: self.n_cols,
            });
        }

        if let Some(err) = self.order_violation(row, col) {
            if self.config.check_order {
                return Err(err);
            }
            tracing::warn!("{}", err);
        }

        let right = self.row_head(row);
        let down = self.col_head(col);
        let left = self.nodes[right].left;
        let up = self.nodes[down].up;

        self.nodes.try_reserve(1)?;
        let id = self.nodes.len();
        self.nodes.push(CrossNode {
            row,
            col,
            value,
            up,
            down,
            left,
            right,
        });

        self.nodes[up].down = id;
        self.nodes[down].up = id;
        self.nodes[left].right = id;
        self.nodes[right].left = id;

        Ok(())
    }

    fn clear(&mut self) {
        let sentinels = self.sentinel_count();
        self.nodes.truncate(sentinels);
        self.nodes.shrink_to_fit();
        self.reset_sentinels();
    }

    fn entries(&self) -> Box<dyn Iterator<Item = MatrixEntry<T>> + '_> {
        Box::new(self.iter())
    }

    /// Re-inserts every entry with its coordinates swapped, walking the
    /// original row by row. Each destination row chain then receives its
    /// entries in ascending original-row order.
    fn transpose(&self) -> Result<Self> {
        let mut result = Self::with_config(self.n_cols, self.n_rows, self.config.clone())?;
        result.reserve(self.nnz())?;

        for entry in self.iter() {
            let MatrixEntry { row, col, value } = entry.transposed();
            result.insert_last(value, row, col)?;
        }

        Ok(result)
    }

    /// Merges the row chains of both operands, row by row
    fn add(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(SparseError::dimension_mismatch(
                "add",
                self.shape(),
                other.shape(),
            ));
        }

        tracing::debug!(
            shape = ?self.shape(),
            lhs_nnz = self.nnz(),
            rhs_nnz = other.nnz(),
            "cross list add"
        );

        let rows = compute_rows(self.n_rows, &self.config, |i| {
            add_row(self.row_iter(i), other.row_iter(i))
        });

        let result: Self = assemble(self.n_rows, self.n_cols, self.config.clone(), rows)?;
        tracing::debug!(nnz = result.nnz(), "cross list add done");
        Ok(result)
    }

    /// Merge-joins every row chain of `self` with every column chain of `other`
    fn mul(&self, other: &Self) -> Result<Self> {
        if self.n_cols != other.n_rows {
            return Err(SparseError::dimension_mismatch(
                "mul",
                self.shape(),
                other.shape(),
            ));
        }

        tracing::debug!(
            lhs = ?self.shape(),
            rhs = ?other.shape(),
            lhs_nnz = self.nnz(),
            rhs_nnz = other.nnz(),
            "cross list mul"
        );

        let rows = compute_rows(self.n_rows, &self.config, |i| {
            multiply_row(self.row_iter(i), other.n_cols, |j| other.col_iter(j))
        });

        let result: Self = assemble(self.n_rows, other.n_cols, self.config.clone(), rows)?;
        tracing::debug!(nnz = result.nnz(), "cross list mul done");
        Ok(result)
    }

    fn get(&self, row: usize, col: usize) -> T {
        if row >= self.n_rows {
            return T::zero();
        }
        self.row_iter(row)
            .find(|&(c, _)| c == col)
            .map_or_else(T::zero, |(_, value)| value)
    }
}

impl<T: fmt::Debug + Element> fmt::Debug for CrossListMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CrossListMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        // Print a sample of the matrix content
        let max_rows_to_print = 5.min(self.n_rows);

        if max_rows_to_print > 0 {
            writeln!(f, "  content sample:")?;

            for i in 0..max_rows_to_print {
                write!(f, "    row {}: ", i)?;
                let row: Vec<_> = self.row_iter(i).collect();

                if row.is_empty() {
                    writeln!(f, "(empty)")?;
                } else {
                    let max_elements = 5.min(row.len());

                    for (col, value) in &row[..max_elements] {
                        write!(f, "({}, {:?}) ", col, value)?;
                    }

                    if row.len() > max_elements {
                        write!(f, "... ({} more)", row.len() - max_elements)?;
                    }

                    writeln!(f)?;
                }
            }

            if self.n_rows > max_rows_to_print {
                writeln!(f, "    ... ({} more rows)", self.n_rows - max_rows_to_print)?;
            }
        }

        write!(f, "}}")
    }
}
