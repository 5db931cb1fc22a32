// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Product space: an ordered list of axis sizes.

use crate::error::{Result, ValidationError};

use super::cursor::ProductSpaceIndex;

/// Ordered axis sizes of a composite index space.
///
/// All axes have size ≥ 1. The empty axis list describes a space with a
/// single (empty) element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductSpace {
    dims: Vec<usize>,
}

impl ProductSpace {
    /// Create a product space, rejecting axes of size 0.
    pub fn new(dims: impl Into<Vec<usize>>) -> Result<Self> {
        let dims = dims.into();
        if let Some(axis) = dims.iter().position(|&n| n == 0) {
            return Err(ValidationError::EmptyAxis {
                op: "ProductSpace::new",
                axis,
            }
            .into());
        }
        Ok(Self { dims })
    }

    /// Axis sizes, most significant first.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Number of axes.
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Product of all axis sizes.
    pub fn total_size(&self) -> usize {
        self.dims.iter().product()
    }

    /// Ket axes followed by an identical copy for the bra axes.
    ///
    /// Turns a Hilbert-space factorization `[d0, d1, …]` into the joint
    /// ket/bra space `[d0, d1, …, d0, d1, …]` of its Liouville space.
    pub fn square(&self) -> Self {
        let mut dims = Vec::with_capacity(2 * self.dims.len());
        dims.extend_from_slice(&self.dims);
        dims.extend_from_slice(&self.dims);
        Self { dims }
    }

    /// The space with axis `axis` deleted.
    pub fn without_axis(&self, axis: usize) -> Result<Self> {
        self.check_axis(axis, "ProductSpace::without_axis")?;
        let mut dims = self.dims.clone();
        dims.remove(axis);
        Ok(Self { dims })
    }

    /// Flat row-major index of `values`.
    pub fn flat_index(&self, values: &[usize]) -> Result<usize> {
        self.check_values(values, "ProductSpace::flat_index")?;
        Ok(flatten(&self.dims, values))
    }

    /// Per-axis values of flat index `flat`.
    pub fn unflatten(&self, flat: usize) -> Result<Vec<usize>> {
        let total = self.total_size();
        if flat >= total {
            return Err(ValidationError::OutOfBounds {
                op: "ProductSpace::unflatten",
                name: "flat index",
                value: flat,
                min: 0,
                max: total - 1,
            }
            .into());
        }
        let mut values = vec![0; self.dims.len()];
        let mut rest = flat;
        for (v, &n) in values.iter_mut().zip(&self.dims).rev() {
            *v = rest % n;
            rest /= n;
        }
        Ok(values)
    }

    /// Cursor positioned at the all-zero combination.
    pub fn cursor(&self) -> ProductSpaceIndex {
        ProductSpaceIndex::new(self.clone())
    }

    /// Flat-index map for a re-ordering of the axes.
    ///
    /// Let `P` be the space whose axis `a` is this space's axis `order[a]`.
    /// The returned vector has one entry per flat index of `P`, in row-major
    /// order, holding the flat index of the same multi-index in `self`.
    /// For a matrix `M` indexed by `self`, `M'[p, q] = M[map[p], map[q]]` is
    /// then `M` re-indexed by `P`.
    pub fn permutation_map(&self, order: &[usize]) -> Result<Vec<usize>> {
        let rank = self.dims.len();
        let mut seen = vec![false; rank];
        let is_permutation = order.len() == rank
            && order
                .iter()
                .all(|&k| k < rank && !std::mem::replace(&mut seen[k], true));
        if !is_permutation {
            return Err(ValidationError::InvalidPermutation {
                op: "ProductSpace::permutation_map",
                order: order.to_vec(),
                rank,
            }
            .into());
        }

        let permuted = Self {
            dims: order.iter().map(|&k| self.dims[k]).collect(),
        };
        let mut map = Vec::with_capacity(self.total_size());
        let mut source = vec![0; rank];
        let mut p = permuted.cursor();
        while !p.is_done() {
            for (a, &k) in order.iter().enumerate() {
                source[k] = p[a];
            }
            map.push(flatten(&self.dims, &source));
            p.increment();
        }
        Ok(map)
    }

    pub(crate) fn check_axis(&self, axis: usize, op: &'static str) -> Result<()> {
        if axis >= self.dims.len() {
            return Err(ValidationError::OutOfBounds {
                op,
                name: "axis",
                value: axis,
                min: 0,
                max: self.dims.len().saturating_sub(1),
            }
            .into());
        }
        Ok(())
    }

    fn check_values(&self, values: &[usize], op: &'static str) -> Result<()> {
        if values.len() != self.dims.len() {
            return Err(ValidationError::ShapeMismatch {
                op,
                expected: self.dims.len(),
                actual: values.len(),
            }
            .into());
        }
        for (&v, &n) in values.iter().zip(&self.dims) {
            if v >= n {
                return Err(ValidationError::OutOfBounds {
                    op,
                    name: "axis value",
                    value: v,
                    min: 0,
                    max: n - 1,
                }
                .into());
            }
        }
        Ok(())
    }
}

/// Row-major flattening; callers guarantee `values[i] < dims[i]`.
pub(crate) fn flatten(dims: &[usize], values: &[usize]) -> usize {
    dims.iter()
        .zip(values)
        .fold(0, |acc, (&n, &v)| acc * n + v)
}
