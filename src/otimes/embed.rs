// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Hilbert-space embedding of local operators.
//!
//! An operator A on H_1 ⊗ H_2 (dimensions d1 · d2) is lifted to
//! H_1 ⊗ H_by ⊗ H_2, acting as the identity on the inserted spectator:
//!
//!   B[(f, m, s), (f', m', s')] = δ_{m m'} · A[f·d2 + s, f'·d2 + s']

use ndarray::Array2;
use num_complex::Complex64;
use tracing::debug;

use super::kron::{identity, kron, kron3};
use crate::error::Result;
use crate::index::ProductSpace;
use crate::validation::{check_bounds, cofactor, square_dim};

/// Embed `m` between identities of size `dim_before` and `dim_after`.
///
/// Identity factors of size ≤ 1 are omitted; when both are, `m` is returned
/// unchanged.
pub fn embed_edges(dim_before: usize, m: &Array2<Complex64>, dim_after: usize) -> Array2<Complex64> {
    match (dim_before <= 1, dim_after <= 1) {
        (true, true) => m.clone(),
        (true, false) => kron(m, &identity(dim_after)),
        (false, true) => kron(&identity(dim_before), m),
        (false, false) => kron3(&identity(dim_before), m, &identity(dim_after)),
    }
}

/// Insert an idle spectator of dimension `by_dim` after the first `d1`
/// Hilbert factor of `a`.
///
/// `a` is `d × d` with `d = d1 · d2`. The result is `(d · by_dim)`-dimensional
/// and acts on `d1 ⊗ by_dim ⊗ d2`.
///
/// # Errors
/// Fails when `a` is not square, `d1 > d`, `d1` does not divide `d`, or
/// `by_dim == 0`.
pub fn embed_at(a: &Array2<Complex64>, d1: usize, by_dim: usize) -> Result<Array2<Complex64>> {
    let d = square_dim(a, "embed_at")?;
    check_bounds(d1, 0, d, "d1", "embed_at")?;
    check_bounds(by_dim, 1, usize::MAX, "by_dim", "embed_at")?;

    if d1 <= 1 {
        return Ok(kron(&identity(by_dim), a));
    }
    if d1 == d {
        return Ok(kron(a, &identity(by_dim)));
    }
    let d2 = cofactor(d, d1, "embed_at")?;

    debug!(d, d1, by_dim, d2, "Embedding spectator into Hilbert space");

    let space = ProductSpace::new(vec![d1, by_dim, d2])?;
    let dim = space.total_size();
    let mut out = Array2::zeros((dim, dim));

    let mut i = space.cursor();
    while !i.is_done() {
        let row = i[0] * d2 + i[2];
        let mut j = space.cursor();
        while !j.is_done() {
            if i[1] == j[1] {
                out[[i.flat_index(), j.flat_index()]] = a[[row, j[0] * d2 + j[2]]];
            }
            j.increment();
        }
        i.increment();
    }
    Ok(out)
}

/// Normalized partial trace over a spectator inserted by [`embed_at`].
///
/// `b` acts on `d1 ⊗ by_dim ⊗ d2`; the result acts on `d1 ⊗ d2` and equals
/// `(1/by_dim) Σ_m b[(f, m, s), (f', m, s')]`. For `b = embed_at(a, d1,
/// by_dim)` this recovers `a`.
///
/// # Errors
/// Fails when `b` is not square, or `d1 · by_dim` does not divide its
/// dimension.
pub fn trace_out_spectator(
    b: &Array2<Complex64>,
    d1: usize,
    by_dim: usize,
) -> Result<Array2<Complex64>> {
    let dim = square_dim(b, "trace_out_spectator")?;
    let d1 = d1.max(1);
    let d2 = cofactor(dim, d1.saturating_mul(by_dim), "trace_out_spectator")?;

    let space = ProductSpace::new(vec![d1, by_dim, d2])?;
    let reduced = space.without_axis(1)?;
    let weight = 1.0 / by_dim as f64;
    let mut out = Array2::zeros((d1 * d2, d1 * d2));

    let mut i = space.cursor();
    while !i.is_done() {
        let mut j = space.cursor();
        while !j.is_done() {
            if i[1] == j[1] {
                let row = reduced.flat_index(&[i[0], i[2]])?;
                let col = reduced.flat_index(&[j[0], j[2]])?;
                out[[row, col]] += b[[i.flat_index(), j.flat_index()]] * weight;
            }
            j.increment();
        }
        i.increment();
    }
    Ok(out)
}
