//! Merge-join dot product of two sparse vectors

use num_traits::Num;
use std::cmp::Ordering;

/// Dot product of two index-sorted sparse vectors
///
/// Advances whichever cursor has the smaller index and accumulates the
/// product on equal indices. Work is O(len(a) + len(b)).
pub fn sparse_dot<T, A, B>(a: A, b: B) -> T
where
    T: Copy + Num,
    A: IntoIterator<Item = (usize, T)>,
    B: IntoIterator<Item = (usize, T)>,
{
    let mut a = a.into_iter();
    let mut b = b.into_iter();
    let mut sum = T::zero();

    let (mut ea, mut eb) = (a.next(), b.next());
    while let (Some((ia, va)), Some((ib, vb))) = (ea, eb) {
        match ia.cmp(&ib) {
            Ordering::Equal => {
                sum = sum + va * vb;
                ea = a.next();
                eb = b.next();
            }
            Ordering::Less => ea = a.next(),
            Ordering::Greater => eb = b.next(),
        }
    }

    sum
}
