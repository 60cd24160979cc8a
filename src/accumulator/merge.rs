//! Sorted merge of two sparse sequences
//!
//! Used for matrix addition: both inputs are ascending by key, equal keys are
//! summed, and sums that cancel to zero are dropped.

use num_traits::Num;
use std::iter::Peekable;

/// Iterator over the sum of two key-sorted sparse sequences
///
/// Each input must be strictly ascending by key. The output is strictly
/// ascending by key and never contains a zero value produced by a sum.
pub struct MergeSorted<A, B>
where
    A: Iterator,
    B: Iterator,
{
    a: Peekable<A>,
    b: Peekable<B>,
}

impl<K, T, A, B> MergeSorted<A, B>
where
    K: Ord,
    T: Copy + Num,
    A: Iterator<Item = (K, T)>,
    B: Iterator<Item = (K, T)>,
{
    pub fn new(a: A, b: B) -> Self {
        Self {
            a: a.peekable(),
            b: b.peekable(),
        }
    }
}

impl<K, T, A, B> Iterator for MergeSorted<A, B>
where
    K: Ord,
    T: Copy + Num,
    A: Iterator<Item = (K, T)>,
    B: Iterator<Item = (K, T)>,
{
    type Item = (K, T);

    fn next(&mut self) -> Option<Self::Item> {
        use std::cmp::Ordering;

        loop {
            let ordering = match (self.a.peek(), self.b.peek()) {
                (Some((ka, _)), Some((kb, _))) => ka.cmp(kb),
                // Drain whichever side remains
                (Some(_), None) => return self.a.next(),
                (None, Some(_)) => return self.b.next(),
                (None, None) => return None,
            };

            match ordering {
                Ordering::Less => return self.a.next(),
                Ordering::Greater => return self.b.next(),
                Ordering::Equal => {
                    let (key, va) = self.a.next()?;
                    let (_, vb) = self.b.next()?;
                    let sum = va + vb;
                    if !sum.is_zero() {
                        return Some((key, sum));
                    }
                }
            }
        }
    }
}

/// Merge two key-sorted sparse sequences into their sum
pub fn merge_sorted<K, T, A, B>(a: A, b: B) -> MergeSorted<A::IntoIter, B::IntoIter>
where
    K: Ord,
    T: Copy + Num,
    A: IntoIterator<Item = (K, T)>,
    B: IntoIterator<Item = (K, T)>,
{
    MergeSorted::new(a.into_iter(), b.into_iter())
}
