// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Column orthonormality checks for basis-rotation matrices.
//!
//! For a matrix A with columns a_i the deviation of pair (i, j) is
//! |⟨a_i, a_j⟩ − δ_ij| with the Hermitian inner product. These are pass/fail
//! checks; nothing here corrects a matrix.

use ndarray::{Array2, ArrayView1};
use num_complex::Complex64;
use tracing::{info, warn};

/// A column pair whose overlap deviates from orthonormality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthogonalityViolation {
    /// First column.
    pub i: usize,
    /// Second column (`j >= i`).
    pub j: usize,
    /// Inner product ⟨a_i, a_j⟩.
    pub overlap: Complex64,
}

impl OrthogonalityViolation {
    /// |overlap − δ_ij|
    pub fn deviation(&self) -> f64 {
        deviation(self.i, self.j, self.overlap)
    }
}

/// Largest deviation from orthonormality over all column pairs.
///
/// Zero for any unitary matrix; 1 for a matrix with two identical unit
/// columns.
pub fn max_orthogonality_deviation(a: &Array2<Complex64>) -> f64 {
    let n = a.ncols();
    let mut max_dev = 0.0_f64;
    for i in 0..n {
        for j in 0..n {
            let dev = deviation(i, j, inner(a.column(i), a.column(j)));
            max_dev = max_dev.max(dev);
        }
    }
    max_dev
}

/// All pairs `j >= i` whose deviation exceeds `threshold`.
pub fn orthogonality_violations(a: &Array2<Complex64>, threshold: f64) -> Vec<OrthogonalityViolation> {
    let n = a.ncols();
    let mut violations = Vec::new();
    for i in 0..n {
        for j in i..n {
            let overlap = inner(a.column(i), a.column(j));
            if deviation(i, j, overlap) > threshold {
                violations.push(OrthogonalityViolation { i, j, overlap });
            }
        }
    }
    violations
}

/// Log every column pair of `a` that violates orthonormality by more than
/// `threshold`; returns whether any did.
pub fn report_orthogonality(a: &Array2<Complex64>, threshold: f64, label: &str) -> bool {
    let violations = orthogonality_violations(a, threshold);
    for v in &violations {
        warn!(
            label,
            i = v.i,
            j = v.j,
            overlap = %v.overlap,
            deviation = v.deviation(),
            "Columns deviate from orthonormality"
        );
    }
    if violations.is_empty() {
        info!(label, threshold, "Columns orthonormal within threshold");
    }
    !violations.is_empty()
}

/// ⟨u, v⟩ = Σ_k conj(u_k) v_k
fn inner(u: ArrayView1<Complex64>, v: ArrayView1<Complex64>) -> Complex64 {
    u.iter().zip(v.iter()).map(|(x, y)| x.conj() * y).sum()
}

fn deviation(i: usize, j: usize, overlap: Complex64) -> f64 {
    if i == j {
        (overlap - 1.0).norm()
    } else {
        overlap.norm()
    }
}
