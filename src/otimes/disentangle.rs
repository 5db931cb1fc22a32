// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! System/environment re-ordering of Liouville propagators.
//!
//! With H = H_S ⊗ H_E the joint Hilbert index is `n·Nm + x`, and a joint
//! Liouville index is `(n·Nm + x)·Ns·Nm + (m·Nm + x')` for ket (n, x) and bra
//! (m, x'). The factorized ordering Liouville_S ⊗ Liouville_E instead reads
//! `((n·Ns + m)·Nm + x)·Nm + x'`. Both maps here are pure permutations of
//! rows and columns.

use ndarray::Array2;
use num_complex::Complex64;
use tracing::debug;

use super::liouville::permute_square;
use crate::error::Result;
use crate::index::ProductSpace;
use crate::validation::{cofactor, hilbert_dim, square_dim};

/// Re-order a jointly vectorized propagator into Liouville_S ⊗ Liouville_E.
///
/// `m` is `(Ns·Nm)² × (Ns·Nm)²`; `ns` is the system Hilbert dimension.
///
/// # Errors
/// Fails when `m` is not square, its dimension is not a perfect square, or
/// `ns` does not divide the Hilbert dimension.
pub fn disentangle(m: &Array2<Complex64>, ns: usize) -> Result<Array2<Complex64>> {
    let map = factorized_order(m, ns, "disentangle")?;
    Ok(permute_square(m, &map))
}

/// Inverse of [`disentangle`]: Liouville_S ⊗ Liouville_E back to joint order.
///
/// # Errors
/// Same preconditions as [`disentangle`].
pub fn entangle(m: &Array2<Complex64>, ns: usize) -> Result<Array2<Complex64>> {
    let map = factorized_order(m, ns, "entangle")?;
    let n = map.len();
    let mut out = Array2::zeros((n, n));
    for (p, &row) in map.iter().enumerate() {
        for (q, &col) in map.iter().enumerate() {
            out[[row, col]] = m[[p, q]];
        }
    }
    Ok(out)
}

/// Joint flat index for every factorized flat index.
fn factorized_order(m: &Array2<Complex64>, ns: usize, op: &'static str) -> Result<Vec<usize>> {
    let dl = square_dim(m, op)?;
    let ntot = hilbert_dim(dl, op)?;
    let nm = cofactor(ntot, ns, op)?;

    debug!(ns, nm, "Reordering propagator between joint and factorized Liouville layout");

    // Joint axes are (n, x, m, x'); the factorized layout is (n, m, x, x').
    let joint = ProductSpace::new(vec![ns, nm, ns, nm])?;
    joint.permutation_map(&[0, 2, 1, 3])
}
