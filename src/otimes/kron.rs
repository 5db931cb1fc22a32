// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Kronecker products and row-major vectorization.
//!
//! All products use row-major flattening:
//!   (A ⊗ B)[r1·rows(B) + r2, c1·cols(B) + c2] = A[r1, c1] · B[r2, c2]

use ndarray::{s, Array1, Array2, Zip};
use num_complex::Complex64;

use crate::error::{Result, ValidationError};

/// Identity operator of dimension `n`.
pub fn identity(n: usize) -> Array2<Complex64> {
    Array2::from_diag_elem(n, Complex64::new(1.0, 0.0))
}

/// Kronecker product A ⊗ B of two (possibly rectangular) matrices.
pub fn kron(a: &Array2<Complex64>, b: &Array2<Complex64>) -> Array2<Complex64> {
    let (rows_b, cols_b) = b.dim();
    let mut out = Array2::zeros((a.nrows() * rows_b, a.ncols() * cols_b));

    for ((r1, c1), &x) in a.indexed_iter() {
        let block = out.slice_mut(s![
            r1 * rows_b..(r1 + 1) * rows_b,
            c1 * cols_b..(c1 + 1) * cols_b
        ]);
        Zip::from(block).and(b).for_each(|o, &y| *o = x * y);
    }
    out
}

/// A ⊗ B ⊗ C, evaluated as (A ⊗ B) ⊗ C.
pub fn kron3(
    a: &Array2<Complex64>,
    b: &Array2<Complex64>,
    c: &Array2<Complex64>,
) -> Array2<Complex64> {
    kron(&kron(a, b), c)
}

/// Left-associative product of any number of factors.
///
/// The empty product is the 1 × 1 identity.
pub fn kron_all(ops: &[Array2<Complex64>]) -> Array2<Complex64> {
    match ops.split_first() {
        None => identity(1),
        Some((first, rest)) => rest.iter().fold(first.clone(), |acc, op| kron(&acc, op)),
    }
}

/// Kronecker product of two vectors: w[i·len(v) + j] = u[i] · v[j].
pub fn kron_vec(u: &Array1<Complex64>, v: &Array1<Complex64>) -> Array1<Complex64> {
    let mut out = Array1::zeros(u.len() * v.len());
    for (i, &x) in u.iter().enumerate() {
        let block = out.slice_mut(s![i * v.len()..(i + 1) * v.len()]);
        Zip::from(block).and(v).for_each(|o, &y| *o = x * y);
    }
    out
}

/// Row-major vectorization: v[i·n + j] = M[i, j].
///
/// This is how a density matrix becomes a Liouville-space vector.
pub fn vectorize(m: &Array2<Complex64>) -> Array1<Complex64> {
    m.iter().copied().collect()
}

/// Inverse of [`vectorize`].
pub fn unvectorize(v: &Array1<Complex64>, rows: usize, cols: usize) -> Result<Array2<Complex64>> {
    let expected = rows.checked_mul(cols).unwrap_or(usize::MAX);
    if v.len() != expected {
        return Err(ValidationError::ShapeMismatch {
            op: "unvectorize",
            expected,
            actual: v.len(),
        }
        .into());
    }
    Ok(Array2::from_shape_fn((rows, cols), |(i, j)| v[i * cols + j]))
}
