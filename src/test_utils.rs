// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Shared test utilities for operator tests.

use ndarray::Array2;
use num_complex::Complex64;

/// Shorthand complex constructor.
pub fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

/// σx
pub fn pauli_x() -> Array2<Complex64> {
    ndarray::arr2(&[[c(0.0, 0.0), c(1.0, 0.0)], [c(1.0, 0.0), c(0.0, 0.0)]])
}

/// σy
pub fn pauli_y() -> Array2<Complex64> {
    ndarray::arr2(&[[c(0.0, 0.0), c(0.0, -1.0)], [c(0.0, 1.0), c(0.0, 0.0)]])
}

/// σz
pub fn pauli_z() -> Array2<Complex64> {
    ndarray::arr2(&[[c(1.0, 0.0), c(0.0, 0.0)], [c(0.0, 0.0), c(-1.0, 0.0)]])
}

/// Deterministic matrix with distinct, non-trivial complex entries.
///
/// Entries are small integers plus a seed-dependent offset, so products of
/// entries stay exactly representable and comparisons can be exact.
pub fn sample_matrix(rows: usize, cols: usize, seed: u64) -> Array2<Complex64> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    Array2::from_shape_fn((rows, cols), |_| {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let re = ((state >> 33) % 17) as f64 - 8.0;
        let im = ((state >> 45) % 13) as f64 - 6.0;
        c(re, im)
    })
}

/// Exact element-wise equality with a readable failure message.
pub fn assert_matrix_eq(actual: &Array2<Complex64>, expected: &Array2<Complex64>) {
    assert_eq!(actual.dim(), expected.dim(), "shape mismatch");
    for ((idx, a), e) in actual.indexed_iter().zip(expected.iter()) {
        assert_eq!(a, e, "mismatch at {idx:?}");
    }
}

/// Element-wise equality within `epsilon`.
pub fn assert_matrix_close(actual: &Array2<Complex64>, expected: &Array2<Complex64>, epsilon: f64) {
    assert_eq!(actual.dim(), expected.dim(), "shape mismatch");
    for ((idx, a), e) in actual.indexed_iter().zip(expected.iter()) {
        assert!(
            (a - e).norm() <= epsilon,
            "mismatch at {idx:?}: {a} vs {e}"
        );
    }
}
