// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Liouville-space embedding and tensor products.
//!
//! A superoperator on a d-dimensional Hilbert space is a d² × d² matrix whose
//! row and column indices are vectorized density-matrix indices
//! `ket · d + bra`. When the Hilbert space factorizes, the ket and the bra
//! each carry the full factorization: a row index of a superoperator on
//! H_1 ⊗ H_2 reads `((ket1·d2 + ket2)·d1 + bra1)·d2 + bra2`.
//! Both operations in this module preserve that (ket block, bra block)
//! layout.

use ndarray::Array2;
use num_complex::Complex64;
use tracing::debug;

use super::kron::{identity, kron};
use crate::error::Result;
use crate::index::ProductSpace;
use crate::validation::{check_bounds, cofactor, hilbert_dim, square_dim};

/// Spectator ket axis in the squared `[d1, by_dim, d2]` space.
const KET_SPECTATOR: usize = 1;
/// Spectator bra axis in the squared `[d1, by_dim, d2]` space.
const BRA_SPECTATOR: usize = 4;

/// Insert an idle spectator of Hilbert dimension `by_dim` into the
/// superoperator `a`, after the first `d1` Hilbert factor.
///
/// `a` is `d² × d²`; the result is `(d·by_dim)² × (d·by_dim)²` and acts on the
/// Liouville space of `d1 ⊗ by_dim ⊗ d2`. Its element at ket/bra composite
/// indices `I`, `J` vanishes unless the spectator ket values and the spectator
/// bra values of `I` and `J` agree; then it equals `a` at `I`, `J` with both
/// spectator axes removed.
///
/// # Errors
/// Fails when `a` is not square, its dimension is not a perfect square,
/// `d1 > d`, `d1` does not divide `d`, or `by_dim == 0`.
pub fn embed_liouville(
    a: &Array2<Complex64>,
    d1: usize,
    by_dim: usize,
) -> Result<Array2<Complex64>> {
    let dl = square_dim(a, "embed_liouville")?;
    let d = hilbert_dim(dl, "embed_liouville")?;
    check_bounds(d1, 0, d, "d1", "embed_liouville")?;
    check_bounds(by_dim, 1, usize::MAX, "by_dim", "embed_liouville")?;

    // The spectator's Liouville identity, combined ket-wise and bra-wise.
    if d1 <= 1 {
        return liouville_kron(&identity(by_dim * by_dim), a);
    }
    if d1 == d {
        return liouville_kron(a, &identity(by_dim * by_dim));
    }
    let d2 = cofactor(d, d1, "embed_liouville")?;

    debug!(d, d1, by_dim, d2, "Embedding spectator into Liouville space");

    let ket_bra = ProductSpace::new(vec![d1, by_dim, d2])?.square();
    let dim = ket_bra.total_size();
    let mut out = Array2::zeros((dim, dim));

    let mut i = ket_bra.cursor();
    while !i.is_done() {
        let mut i_red = i.clone();
        i_red.remove_axes(&[KET_SPECTATOR, BRA_SPECTATOR])?;
        let row = i_red.flat_index();

        let mut j = ket_bra.cursor();
        while !j.is_done() {
            if i[KET_SPECTATOR] == j[KET_SPECTATOR] && i[BRA_SPECTATOR] == j[BRA_SPECTATOR] {
                let mut j_red = j.clone();
                j_red.remove_axes(&[KET_SPECTATOR, BRA_SPECTATOR])?;
                out[[i.flat_index(), j.flat_index()]] = a[[row, j_red.flat_index()]];
            }
            j.increment();
        }
        i.increment();
    }
    Ok(out)
}

/// Tensor product of two superoperators that keeps ket/bra locality.
///
/// For `a` on Liouville(D1) and `b` on Liouville(D2):
///
///   C[((k1·D2 + k2)·D1 + b1)·D2 + b2, …] = A[k1·D1 + b1, …] · B[k2·D2 + b2, …]
///
/// with the same layout on the column side. A `1 × 1` operand acts as a
/// scalar factor.
///
/// # Errors
/// Fails when an operand is not square or (unless `1 × 1`) its dimension is
/// not a perfect square.
pub fn liouville_kron(a: &Array2<Complex64>, b: &Array2<Complex64>) -> Result<Array2<Complex64>> {
    let dl1 = square_dim(a, "liouville_kron: a")?;
    let dl2 = square_dim(b, "liouville_kron: b")?;

    if dl1 == 1 {
        return Ok(b * a[[0, 0]]);
    }
    if dl2 == 1 {
        return Ok(a * b[[0, 0]]);
    }

    let d1 = hilbert_dim(dl1, "liouville_kron: a")?;
    let d2 = hilbert_dim(dl2, "liouville_kron: b")?;

    // kron(a, b) is indexed by (k1, b1, k2, b2); bring the kets together.
    let flat_layout = ProductSpace::new(vec![d1, d1, d2, d2])?;
    let map = flat_layout.permutation_map(&[0, 2, 1, 3])?;
    Ok(permute_square(&kron(a, b), &map))
}

/// `out[p, q] = m[map[p], map[q]]`.
pub(crate) fn permute_square(m: &Array2<Complex64>, map: &[usize]) -> Array2<Complex64> {
    Array2::from_shape_fn((map.len(), map.len()), |(p, q)| m[[map[p], map[q]]])
}
