//! Triple list matrix format implementation
//!
//! The triple list stores every nonzero entry as a `(row, col, value)` node
//! in a single forward-linked chain with head and tail references, so that
//! appending is O(1). The chain is kept in row-major order:
//!
//! ```text
//! head -> (0,1,a) -> (0,3,b) -> (2,0,c) -> (2,2,d) <- tail
//! ```
//!
//! Nodes live in an arena owned by the matrix and link to their successor by
//! index.

use std::fmt;

use crate::accumulator::{merge_sorted, multiply_row};
use crate::error::{Result, SparseError};
use crate::matrix::{MatrixConfig, MatrixEntry, NodeId, SparseMatrix};
use crate::parallel::{assemble, compute_rows};
use crate::utils::{exclusive_scan, try_filled};
use crate::Element;

#[derive(Debug, Clone)]
struct TripleNode<T> {
    entry: MatrixEntry<T>,
    next: Option<NodeId>,
}

/// A sparse matrix stored as a row-major chain of `(row, col, value)` triples
#[derive(Clone)]
pub struct TripleListMatrix<T> {
    n_rows: usize,
    n_cols: usize,

    /// Node arena; chain order is given by `head` and the `next` links
    nodes: Vec<TripleNode<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,

    config: MatrixConfig,
}

/// Iterator over the chain of a [`TripleListMatrix`]
#[derive(Clone)]
pub struct TripleIter<'a, T> {
    nodes: &'a [TripleNode<T>],
    cursor: Option<NodeId>,
}

impl<'a, T: Copy> Iterator for TripleIter<'a, T> {
    type Item = MatrixEntry<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.nodes[self.cursor?];
        self.cursor = node.next;
        Some(node.entry)
    }
}

/// Iterator over one row segment of the chain, yielding `(col, value)`
#[derive(Clone)]
pub struct TripleRowIter<'a, T> {
    nodes: &'a [TripleNode<T>],
    cursor: Option<NodeId>,
    row: usize,
}

impl<'a, T: Copy> Iterator for TripleRowIter<'a, T> {
    type Item = (usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.nodes[self.cursor?];
        if node.entry.row != self.row {
            self.cursor = None;
            return None;
        }
        self.cursor = node.next;
        Some((node.entry.col, node.entry.value))
    }
}

impl<T: Element> TripleListMatrix<T> {
    /// Iterates the chain from head to tail
    pub fn iter(&self) -> TripleIter<'_, T> {
        TripleIter {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }

    /// Finds the first node of every row in one pass over the chain
    fn row_starts(&self) -> Result<Vec<Option<NodeId>>> {
        let mut starts = try_filled(self.n_rows, None)?;
        let mut cursor = self.head;
        let mut previous_row = None;

        while let Some(id) = cursor {
            let node = &self.nodes[id];
            let row = node.entry.row;
            if previous_row != Some(row) {
                let slot = starts
                    .get_mut(row)
                    .ok_or_else(|| self.out_of_bounds(&node.entry))?;
                if slot.is_none() {
                    *slot = Some(id);
                }
                previous_row = Some(row);
            }
            cursor = node.next;
        }

        Ok(starts)
    }

    fn row_from(&self, row: usize, start: Option<NodeId>) -> TripleRowIter<'_, T> {
        TripleRowIter {
            nodes: &self.nodes,
            cursor: start,
            row,
        }
    }

    fn out_of_bounds(&self, entry: &MatrixEntry<T>) -> SparseError {
        SparseError::IndexOutOfBounds {
            row: entry.row,
            col: entry.col,
            n_rows: self.n_rows,
            n_cols: self.n_cols,
        }
    }
}

impl<T: Element> SparseMatrix<T> for TripleListMatrix<T> {
    fn with_config(n_rows: usize, n_cols: usize, config: MatrixConfig) -> Result<Self> {
        Ok(Self {
            n_rows,
            n_cols,
            nodes: Vec::new(),
            head: None,
            tail: None,
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
        self.nodes.len()
    }

    fn config(&self) -> &MatrixConfig {
        &self.config
    }

    fn reserve(&mut self, additional: usize) -> Result<()> {
        self.nodes.try_reserve(additional)?;
        Ok(())
    }

    fn insert_last(&mut self, value: T, row: usize, col: usize) -> Result<()> {
        if value.is_zero() {
            tracing::trace!(row, col, "skipping zero entry");
            return Ok(());
        }

        if self.config.check_bounds && (row >= self.n_rows || col >= self.n_cols) {
            return Err(SparseError::IndexOutOfBounds {
                row,
                col,
                n_rows: self.n_rows,
                n_cols: self.n_cols,
            });
        }

        if let Some(tail) = self.tail {
            let last = &self.nodes[tail].entry;
            if (row, col) <= (last.row, last.col) {
                let err = SparseError::OutOfOrder {
                    row,
                    col,
                    last_row: last.row,
                    last_col: last.col,
                };
                if self.config.check_order {
                    return Err(err);
                }
                tracing::warn!("{}", err);
            }
        }

        self.nodes.try_reserve(1)?;
        let id = self.nodes.len();
        self.nodes.push(TripleNode {
            entry: MatrixEntry::new(row, col, value),
            next: None,
        });

        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);

        Ok(())
    }

    fn clear(&mut self) {
        self.nodes = Vec::new();
        self.head = None;
        self.tail = None;
    }

    fn entries(&self) -> Box<dyn Iterator<Item = MatrixEntry<T>> + '_> {
        Box::new(self.iter())
    }

    /// Counting transpose: the chain is re-emitted in column-major order,
    /// which is the row-major order of the result.
    fn transpose(&self) -> Result<Self> {
        let mut col_counts = try_filled(self.n_cols, 0usize)?;
        for entry in self.iter() {
            *col_counts
                .get_mut(entry.col)
                .ok_or_else(|| self.out_of_bounds(&entry))? += 1;
        }

        let mut next_slot = exclusive_scan(&col_counts)?;
        let mut order: Vec<NodeId> = try_filled(self.nnz(), 0)?;

        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            let slot = &mut next_slot[node.entry.col];
            order[*slot] = id;
            *slot += 1;
            cursor = node.next;
        }

        let mut result = Self::with_config(self.n_cols, self.n_rows, self.config.clone())?;
        result.reserve(self.nnz())?;
        for id in order {
            let MatrixEntry { row, col, value } = self.nodes[id].entry.transposed();
            result.insert_last(value, row, col)?;
        }

        Ok(result)
    }

    /// Single pass over both chains, merged by `(row, col)`
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
            "triple list add"
        );

        let keyed = |e: MatrixEntry<T>| ((e.row, e.col), e.value);

        let mut result = Self::with_config(self.n_rows, self.n_cols, self.config.clone())?;
        result.reserve(self.nnz().max(other.nnz()))?;
        for ((row, col), value) in merge_sorted(self.iter().map(keyed), other.iter().map(keyed)) {
            result.insert_last(value, row, col)?;
        }

        tracing::debug!(nnz = result.nnz(), "triple list add done");
        Ok(result)
    }

    /// Transposes `other` so its columns become traversable rows, then
    /// merge-joins every row of `self` with every row of the transpose.
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
            "triple list mul"
        );

        let other_t = other.transpose()?;
        let a_starts = self.row_starts()?;
        let b_starts = other_t.row_starts()?;

        let rows = compute_rows(self.n_rows, &self.config, |i| match a_starts[i] {
            None => Vec::new(),
            Some(start) => multiply_row(self.row_from(i, Some(start)), other.n_cols, |j| {
                other_t.row_from(j, b_starts[j])
            }),
        });

        let result: Self = assemble(self.n_rows, other.n_cols, self.config.clone(), rows)?;
        tracing::debug!(nnz = result.nnz(), "triple list mul done");
        Ok(result)
    }
}

impl<T: fmt::Debug + Element> fmt::Debug for TripleListMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TripleListMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        let max_entries = 10.min(self.nnz());
        if max_entries > 0 {
            writeln!(f, "  chain sample:")?;
            for entry in self.iter().take(max_entries) {
                writeln!(f, "    ({}, {}) = {:?}", entry.row, entry.col, entry.value)?;
            }
            if self.nnz() > max_entries {
                writeln!(f, "    ... ({} more)", self.nnz() - max_entries)?;
            }
        }

        write!(f, "}}")
    }
}
