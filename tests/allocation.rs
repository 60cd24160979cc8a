//! Checks that clearing and dropping matrices releases every node
//!
//! A counting allocator tracks live bytes per thread. Matrices use the
//! sequential config so that no allocation happens on a worker thread.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use linked_sparse::{CrossListMatrix, MatrixConfig, SparseMatrix, TripleListMatrix};

struct CountingAllocator;

thread_local! {
    static LIVE_BYTES: Cell<isize> = const { Cell::new(0) };
}

fn track(delta: isize) {
    let _ = LIVE_BYTES.try_with(|live| live.set(live.get() + delta));
}

fn live_bytes() -> isize {
    LIVE_BYTES.with(Cell::get)
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            track(layout.size() as isize);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        track(-(layout.size() as isize));
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = System.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            track(new_size as isize - layout.size() as isize);
        }
        new_ptr
    }
}

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

fn banded<M: SparseMatrix<i64>>(n: usize) -> M {
    let mut matrix = M::with_config(n, n, MatrixConfig::sequential()).unwrap();
    for i in 0..n {
        for j in i.saturating_sub(2)..(i + 3).min(n) {
            matrix.insert_last((i + j + 1) as i64, i, j).unwrap();
        }
    }
    matrix
}

fn exercise<M: SparseMatrix<i64>>() {
    let a: M = banded(50);
    let b = a.transpose().unwrap();
    let sum = a.add(&b).unwrap();
    let product = a.mul(&b).unwrap();
    assert!(product.nnz() > sum.nnz());
}

fn check_lifecycle_releases_memory<M: SparseMatrix<i64>>() {
    // One-time lazy initialization stays out of the measurement
    exercise::<M>();

    let baseline = live_bytes();
    exercise::<M>();
    assert_eq!(live_bytes(), baseline, "dropping matrices leaked memory");

    // Clearing keeps only the fixed structure of the matrix
    let mut matrix = M::with_config(50, 50, MatrixConfig::sequential()).unwrap();
    let empty_size = live_bytes();
    for i in 0..50 {
        matrix.insert_last(1, i, i).unwrap();
    }
    assert!(live_bytes() > empty_size);

    matrix.clear();
    assert!(matrix.is_empty());
    assert_eq!(live_bytes(), empty_size, "clear kept node storage");

    drop(matrix);
    assert_eq!(live_bytes(), baseline);
}

#[test]
fn test_lifecycle_releases_memory() {
    check_lifecycle_releases_memory::<CrossListMatrix<i64>>();
    check_lifecycle_releases_memory::<TripleListMatrix<i64>>();
}
