//! Conversion functions between matrix representations

use crate::error::Result;
use crate::matrix::{CrossListMatrix, SparseMatrix, TripleListMatrix};
use crate::Element;

impl<T: Element> TripleListMatrix<T> {
    /// Converts this triple list to an orthogonal cross list
    ///
    /// The chain is already row-major, so every row and column chain of the
    /// result is appended in ascending order.
    pub fn to_cross(&self) -> Result<CrossListMatrix<T>> {
        let mut cross =
            CrossListMatrix::with_config(self.n_rows(), self.n_cols(), self.config().clone())?;
        cross.reserve(self.nnz())?;
        for entry in self.iter() {
            cross.insert_last(entry.value, entry.row, entry.col)?;
        }
        Ok(cross)
    }
}

impl<T: Element> CrossListMatrix<T> {
    /// Converts this cross list to a triple list by walking the row chains
    pub fn to_triple(&self) -> Result<TripleListMatrix<T>> {
        let mut triple =
            TripleListMatrix::with_config(self.n_rows(), self.n_cols(), self.config().clone())?;
        triple.reserve(self.nnz())?;
        for entry in self.iter() {
            triple.insert_last(entry.value, entry.row, entry.col)?;
        }
        Ok(triple)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triple_to_cross_conversion() {
        // Create a triple list
        //    [1 2 0]
        //    [0 3 0]
        //    [4 0 5]
        let triple = TripleListMatrix::<i64>::from_entries(
            3,
            3,
            vec![(0, 0, 1), (0, 1, 2), (1, 1, 3), (2, 0, 4), (2, 2, 5)],
        )
        .unwrap();

        let cross = triple.to_cross().unwrap();

        assert_eq!(cross.shape(), (3, 3));
        assert_eq!(cross.nnz(), 5);

        // Check contents of first column
        let col0: Vec<_> = cross.col_iter(0).collect();
        assert_eq!(col0, vec![(0, 1), (2, 4)]);

        // Check contents of second column
        let col1: Vec<_> = cross.col_iter(1).collect();
        assert_eq!(col1, vec![(0, 2), (1, 3)]);
    }

    #[test]
    fn test_roundtrip_conversion() {
        let original = CrossListMatrix::<f64>::from_entries(
            2,
            4,
            vec![(0, 3, 1.5), (1, 0, -2.0), (1, 2, 0.25)],
        )
        .unwrap();

        let roundtrip = original.to_triple().unwrap().to_cross().unwrap();

        assert_eq!(roundtrip.shape(), original.shape());
        let a: Vec<_> = original.iter().collect();
        let b: Vec<_> = roundtrip.iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generic_convert_keeps_config() {
        let config = crate::MatrixConfig::sequential();
        let triple =
            TripleListMatrix::<i32>::from_entries_with_config(2, 2, config.clone(), vec![(1, 1, 7)])
                .unwrap();
        let cross: CrossListMatrix<i32> = triple.convert().unwrap();
        assert_eq!(cross.config(), &config);
        assert_eq!(cross.get(1, 1), 7);
    }
}
