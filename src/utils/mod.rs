//! Utility functions and helpers

pub mod formats;

use crate::error::Result;

pub use formats::{from_sprs, from_sprs_with_config, to_sprs_csc, to_sprs_csr};

/// A vector of `len` copies of `value`, reporting allocation failure
pub(crate) fn try_filled<V: Clone>(len: usize, value: V) -> Result<Vec<V>> {
    let mut filled = Vec::new();
    filled.try_reserve_exact(len)?;
    filled.resize(len, value);
    Ok(filled)
}

/// Exclusive prefix sum of `counts`, with the total appended
///
/// Turns per-bucket counts into the first slot of every bucket, as used by
/// the counting transpose.
pub fn exclusive_scan(counts: &[usize]) -> Result<Vec<usize>> {
    let mut offsets = Vec::new();
    offsets.try_reserve_exact(counts.len() + 1)?;
    offsets.push(0);
    offsets.extend(counts.iter().scan(0, |total, &count| {
        *total += count;
        Some(*total)
    }));
    Ok(offsets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusive_scan() {
        // Column counts to first slot per column
        let input = vec![2, 0, 3, 1];
        let expected = vec![0, 2, 2, 5, 6];
        assert_eq!(exclusive_scan(&input).unwrap(), expected);

        assert_eq!(exclusive_scan(&[]).unwrap(), vec![0]);
    }

    #[test]
    fn test_try_filled() {
        assert_eq!(try_filled(3, 7u8).unwrap(), vec![7, 7, 7]);
        assert!(matches!(
            try_filled(usize::MAX / 4, 0usize),
            Err(crate::SparseError::AllocationFailure(_))
        ));
    }
}
