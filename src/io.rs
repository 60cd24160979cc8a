//! Plain-text triple format reader/writer
//!
//! A matrix is written as a `rows cols` header followed by `row col value`
//! triples with 1-based indices, terminated by the triple `0 0 0` or by the
//! end of input. Several matrices may follow each other in one stream.
//! Tokens are whitespace separated and may be split across lines freely.
//!
//! ```text
//! 2 2
//! 1 1 1
//! 1 2 2
//! 2 2 3
//! 0 0 0
//! ```

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{Result, SparseError};
use crate::matrix::{MatrixConfig, MatrixEntry, SparseMatrix};
use crate::Element;

/// Whitespace tokenizer over a buffered reader that remembers line numbers
pub struct TokenReader<R> {
    reader: R,
    line: usize,
    pending: std::vec::IntoIter<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            pending: Vec::new().into_iter(),
        }
    }

    /// Current line number (1-based; 0 before anything was read)
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the next token, or `None` at end of input
    pub fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.next() {
                return Ok(Some(token));
            }

            let mut buf = String::new();
            if self.reader.read_line(&mut buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            self.pending = buf
                .split_whitespace()
                .map(str::to_owned)
                .collect::<Vec<_>>()
                .into_iter();
        }
    }

    fn parse_next<V: FromStr>(&mut self, what: &str) -> Result<Option<V>> {
        match self.next_token()? {
            None => Ok(None),
            Some(token) => token
                .parse()
                .map(Some)
                .map_err(|_| self.error(format!("invalid {}: {:?}", what, token))),
        }
    }

    fn expect_next<V: FromStr>(&mut self, what: &str) -> Result<V> {
        self.parse_next(what)?
            .ok_or_else(|| self.error(format!("unexpected end of input, expected {}", what)))
    }

    fn error(&self, message: String) -> SparseError {
        SparseError::Parse {
            line: self.line,
            message,
        }
    }
}

/// Reads one matrix with the default config
///
/// Returns `Ok(None)` when the input is exhausted before a header is found.
pub fn read_matrix<T, M, R>(tokens: &mut TokenReader<R>) -> Result<Option<M>>
where
    T: Element + FromStr,
    M: SparseMatrix<T>,
    R: BufRead,
{
    read_matrix_with_config(tokens, MatrixConfig::default())
}

pub fn read_matrix_with_config<T, M, R>(
    tokens: &mut TokenReader<R>,
    config: MatrixConfig,
) -> Result<Option<M>>
where
    T: Element + FromStr,
    M: SparseMatrix<T>,
    R: BufRead,
{
    let n_rows: usize = match tokens.parse_next("row count")? {
        Some(n) => n,
        None => return Ok(None),
    };
    let n_cols: usize = tokens.expect_next("column count")?;

    let mut matrix = M::with_config(n_rows, n_cols, config)?;

    loop {
        let row: usize = match tokens.parse_next("row index")? {
            Some(row) => row,
            None => break,
        };
        let col: usize = tokens.expect_next("column index")?;
        let value: T = tokens.expect_next("value")?;

        if row == 0 && col == 0 && value.is_zero() {
            break;
        }
        if row == 0 || col == 0 {
            return Err(tokens.error(format!("indices are 1-based, got ({}, {})", row, col)));
        }

        matrix.insert_last(value, row - 1, col - 1)?;
    }

    tracing::debug!(
        n_rows,
        n_cols,
        nnz = matrix.nnz(),
        line = tokens.line(),
        "read matrix"
    );

    Ok(Some(matrix))
}

/// Writes every entry as a 1-based `row col value` line, in row-major order
pub fn write_entries<T, M, W>(matrix: &M, writer: &mut W) -> Result<()>
where
    T: Element + Display,
    M: SparseMatrix<T>,
    W: Write,
{
    for MatrixEntry { row, col, value } in matrix.entries() {
        writeln!(writer, "{} {} {}", row + 1, col + 1, value)?;
    }
    Ok(())
}

/// Writes the `rows cols` header, the entries and the `0 0 0` terminator
pub fn write_matrix<T, M, W>(matrix: &M, writer: &mut W) -> Result<()>
where
    T: Element + Display,
    M: SparseMatrix<T>,
    W: Write,
{
    writeln!(writer, "{} {}", matrix.n_rows(), matrix.n_cols())?;
    write_entries(matrix, writer)?;
    writeln!(writer, "0 0 0")?;
    Ok(())
}
