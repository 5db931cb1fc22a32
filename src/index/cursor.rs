// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Cursor over the combinations of a product space.

use std::ops::Index;

use crate::error::{Result, ValidationError};

use super::space::{flatten, ProductSpace};

/// Composite index: one value per axis of a [`ProductSpace`].
///
/// Starts at all zeros and walks the space in row-major order through
/// [`increment`](Self::increment). After the last combination the cursor is
/// [`done`](Self::is_done) and further increments do nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSpaceIndex {
    space: ProductSpace,
    values: Vec<usize>,
    done: bool,
}

impl ProductSpaceIndex {
    /// Cursor at the all-zero combination of `space`.
    pub fn new(space: ProductSpace) -> Self {
        let values = vec![0; space.rank()];
        Self {
            space,
            values,
            done: false,
        }
    }

    /// The space being enumerated.
    pub fn space(&self) -> &ProductSpace {
        &self.space
    }

    /// Advance to the next combination; the last axis varies fastest.
    pub fn increment(&mut self) {
        if self.done {
            return;
        }
        for (v, &n) in self.values.iter_mut().zip(self.space.dims()).rev() {
            *v += 1;
            if *v < n {
                return;
            }
            *v = 0;
        }
        self.done = true;
    }

    /// True once the cursor has stepped past the last combination.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Return to the all-zero combination.
    pub fn reset(&mut self) {
        self.values.iter_mut().for_each(|v| *v = 0);
        self.done = false;
    }

    /// Value on `axis`, or `None` if the axis does not exist.
    pub fn get(&self, axis: usize) -> Option<usize> {
        self.values.get(axis).copied()
    }

    /// All per-axis values.
    pub fn values(&self) -> &[usize] {
        &self.values
    }

    /// Row-major flat index of the current combination.
    pub fn flat_index(&self) -> usize {
        flatten(self.space.dims(), &self.values)
    }

    /// Project out `axis`, keeping the values of all other axes.
    ///
    /// Positions of the axes after `axis` shift down by one.
    pub fn remove_axis(&mut self, axis: usize) -> Result<()> {
        self.space = self.space.without_axis(axis)?;
        self.values.remove(axis);
        Ok(())
    }

    /// Project out several axes given by their positions in the current space.
    ///
    /// Axes are removed highest position first, so every entry of `axes`
    /// refers to the space before any removal, whatever the argument order.
    pub fn remove_axes(&mut self, axes: &[usize]) -> Result<()> {
        let mut sorted = axes.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        for pair in sorted.windows(2) {
            if pair[0] == pair[1] {
                return Err(ValidationError::InvalidPermutation {
                    op: "ProductSpaceIndex::remove_axes",
                    order: axes.to_vec(),
                    rank: self.space.rank(),
                }
                .into());
            }
        }
        if let Some(&highest) = sorted.first() {
            self.space
                .check_axis(highest, "ProductSpaceIndex::remove_axes")?;
        }
        for axis in sorted {
            self.remove_axis(axis)?;
        }
        Ok(())
    }
}

impl Index<usize> for ProductSpaceIndex {
    type Output = usize;

    fn index(&self, axis: usize) -> &usize {
        &self.values[axis]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space(dims: &[usize]) -> ProductSpace {
        ProductSpace::new(dims.to_vec()).unwrap()
    }

    #[test]
    fn test_enumerates_row_major() {
        let mut i = space(&[2, 3]).cursor();
        let mut seen = Vec::new();
        while !i.is_done() {
            seen.push((i[0], i[1], i.flat_index()));
            i.increment();
        }
        assert_eq!(
            seen,
            vec![
                (0, 0, 0),
                (0, 1, 1),
                (0, 2, 2),
                (1, 0, 3),
                (1, 1, 4),
                (1, 2, 5)
            ]
        );
    }

    #[test]
    fn test_flat_index_counts_increments() {
        let mut i = space(&[3, 1, 4, 2]).cursor();
        let mut count = 0;
        while !i.is_done() {
            assert_eq!(i.flat_index(), count);
            count += 1;
            i.increment();
        }
        assert_eq!(count, 24);
    }

    #[test]
    fn test_increment_after_done_is_noop() {
        let mut i = space(&[2]).cursor();
        i.increment();
        i.increment();
        assert!(i.is_done());
        let snapshot = i.clone();
        i.increment();
        assert_eq!(i, snapshot);
    }

    #[test]
    fn test_empty_space_has_one_combination() {
        let mut i = space(&[]).cursor();
        assert!(!i.is_done());
        assert_eq!(i.flat_index(), 0);
        i.increment();
        assert!(i.is_done());
    }

    #[test]
    fn test_reset() {
        let mut i = space(&[2, 2]).cursor();
        for _ in 0..4 {
            i.increment();
        }
        assert!(i.is_done());
        i.reset();
        assert!(!i.is_done());
        assert_eq!(i.values(), &[0, 0]);
    }

    #[test]
    fn test_get() {
        let mut i = space(&[2, 3]).cursor();
        i.increment();
        assert_eq!(i.get(1), Some(1));
        assert_eq!(i.get(2), None);
    }

    #[test]
    fn test_remove_axis_keeps_other_values() {
        let s = space(&[2, 3, 4]);
        let mut i = s.cursor();
        // Move to (1, 2, 3)
        for _ in 0..23 {
            i.increment();
        }
        assert_eq!(i.values(), &[1, 2, 3]);
        i.remove_axis(1).unwrap();
        assert_eq!(i.values(), &[1, 3]);
        assert_eq!(i.space().dims(), &[2, 4]);
        assert_eq!(i.flat_index(), 7);
    }

    #[test]
    fn test_remove_axes_is_order_independent() {
        // Ket/bra space of [d1, by_dim, d2] = [2, 3, 2]
        let s = space(&[2, 3, 2]).square();
        let mut i = s.cursor();
        for _ in 0..100 {
            i.increment();
        }
        let mut a = i.clone();
        a.remove_axes(&[1, 4]).unwrap();
        let mut b = i.clone();
        b.remove_axes(&[4, 1]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.space().dims(), &[2, 2, 2, 2]);
        assert_eq!(
            a.values(),
            &[i[0], i[2], i[3], i[5]],
            "spectator ket and bra axes must be the ones dropped"
        );
    }

    #[test]
    fn test_remove_axes_rejects_duplicates_and_range() {
        let mut i = space(&[2, 3, 4]).cursor();
        assert!(i.remove_axes(&[1, 1]).is_err());
        assert!(i.remove_axes(&[0, 3]).is_err());
        // Failed calls leave the cursor untouched
        assert_eq!(i.space().dims(), &[2, 3, 4]);
    }
}
