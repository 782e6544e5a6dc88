//! Two-row rolling buffer shared by the DP engines.

/// The previous and current frontier of a DP grid.
///
/// Both rows are allocated once and swapped after every outer iteration, so
/// a full pass over an `m x n` grid performs exactly two allocations.
#[derive(Debug)]
pub(crate) struct RollingRows<T> {
    prev: Vec<T>,
    curr: Vec<T>,
}

impl<T: Copy> RollingRows<T> {
    /// Allocate two rows of `width` cells, both filled with `fill`.
    pub(crate) fn new(width: usize, fill: T) -> Self {
        Self {
            prev: vec![fill; width],
            curr: vec![fill; width],
        }
    }

    /// Mutable access to the previous row, used to seed the first frontier.
    pub(crate) fn seed(&mut self) -> &mut [T] {
        &mut self.prev
    }

    /// Borrow the previous row for reading and the current row for writing.
    pub(crate) fn split(&mut self) -> (&[T], &mut [T]) {
        (&self.prev, &mut self.curr)
    }

    /// Promote the current row to previous. The old previous row becomes
    /// scratch space for the next iteration and keeps its stale contents.
    pub(crate) fn advance(&mut self) {
        std::mem::swap(&mut self.prev, &mut self.curr);
    }

    /// The most recently completed row.
    pub(crate) fn last(&self) -> &[T] {
        &self.prev
    }
}

/// Order two series as `(outer, inner)` with the inner one no longer than the
/// outer one, so rows are sized by the shorter series.
///
/// Every recurrence in this crate is unchanged by transposing the grid, so
/// the swap does not alter any result.
pub(crate) fn orient<'a>(a: &'a [f64], b: &'a [f64]) -> (&'a [f64], &'a [f64]) {
    if b.len() <= a.len() { (a, b) } else { (b, a) }
}
