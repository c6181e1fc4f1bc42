//! Balanced block decomposition of `n` rows among `p` workers.
//!
//! Worker `id` owns rows `floor(id * n / p) ..= floor((id + 1) * n / p) - 1`.
//! For any `n` and `p >= 1` the ranges tile `0..n` with no gaps or overlaps,
//! and any two ranges differ in length by at most one row. When `p > n`,
//! `p - n` workers receive an empty range.

use std::ops::Range;

/// A contiguous range of rows owned by one worker.
///
/// Stored half-open as `first..end`; the inclusive last row is `end - 1`.
/// An empty range has `first == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowRange {
    first: usize,
    end: usize,
}

impl RowRange {
    pub fn new(first: usize, end: usize) -> Self {
        debug_assert!(first <= end, "row range {first}..{end} is reversed");
        RowRange { first, end }
    }

    /// First row of the range (equal to `end` when empty).
    pub fn first(&self) -> usize {
        self.first
    }

    /// Inclusive last row, or `None` for an empty range.
    pub fn last(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.end - 1)
        }
    }

    /// One past the last row.
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.first
    }

    pub fn is_empty(&self) -> bool {
        self.first == self.end
    }

    pub fn contains(&self, row: usize) -> bool {
        self.first <= row && row < self.end
    }

    pub fn rows(&self) -> Range<usize> {
        self.first..self.end
    }
}

/// First row owned by worker `id`: `floor(id * n / p)`.
///
/// # Panics
/// Panics if `p == 0`.
pub fn block_low(id: usize, p: usize, n: usize) -> usize {
    assert!(p > 0, "worker count must be positive");
    // 128-bit intermediate keeps `id * n` from overflowing.
    (id as u128 * n as u128 / p as u128) as usize
}

/// Inclusive last row owned by worker `id`, or `None` if it owns no rows.
pub fn block_high(id: usize, p: usize, n: usize) -> Option<usize> {
    block_low(id + 1, p, n)
        .checked_sub(1)
        .filter(|&high| high >= block_low(id, p, n))
}

/// Number of rows owned by worker `id`.
pub fn block_size(id: usize, p: usize, n: usize) -> usize {
    block_low(id + 1, p, n) - block_low(id, p, n)
}

/// Worker that owns row `row`: `floor((p * (row + 1) - 1) / n)`.
///
/// # Panics
/// Panics if `n == 0` or `row >= n`.
pub fn owner(row: usize, p: usize, n: usize) -> usize {
    assert!(row < n, "row {row} out of range for {n} rows");
    ((p as u128 * (row as u128 + 1) - 1) / n as u128) as usize
}

/// Row range owned by worker `id` out of `p` workers sharing `n` rows.
pub fn partition(id: usize, p: usize, n: usize) -> RowRange {
    RowRange::new(block_low(id, p, n), block_low(id + 1, p, n))
}

/// All `p` partitions of `n` rows, in worker order.
pub fn partitions(p: usize, n: usize) -> impl Iterator<Item = RowRange> {
    (0..p).map(move |id| partition(id, p, n))
}
