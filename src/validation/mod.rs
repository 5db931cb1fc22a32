// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Dimension preconditions shared by the tensor-algebra routines.

use ndarray::Array2;
use num_complex::Complex64;

use crate::config::ResourceLimits;
use crate::error::{Result, ValidationError};

/// Check that `m` is square and non-empty, returning its dimension.
pub fn square_dim(m: &Array2<Complex64>, op: &'static str) -> Result<usize> {
    let (rows, cols) = m.dim();
    if rows != cols {
        return Err(ValidationError::NotSquare { op, rows, cols }.into());
    }
    if rows == 0 {
        return Err(ValidationError::OutOfBounds {
            op,
            name: "dimension",
            value: 0,
            min: 1,
            max: usize::MAX,
        }
        .into());
    }
    Ok(rows)
}

/// Exact integer square root, if `n` is a perfect square.
pub fn integer_sqrt(n: usize) -> Option<usize> {
    let guess = (n as f64).sqrt().round() as usize;
    // Float rounding can be off by one for large n.
    (guess.saturating_sub(1)..=guess + 1).find(|&r| r.checked_mul(r) == Some(n))
}

/// Hilbert dimension underlying a Liouville dimension.
pub fn hilbert_dim(liouville_dim: usize, op: &'static str) -> Result<usize> {
    integer_sqrt(liouville_dim).ok_or_else(|| {
        ValidationError::NotPerfectSquare {
            op,
            dim: liouville_dim,
        }
        .into()
    })
}

/// Return `total / factor`, failing unless `factor` divides `total` exactly.
pub fn cofactor(total: usize, factor: usize, op: &'static str) -> Result<usize> {
    if factor == 0 || total % factor != 0 {
        return Err(ValidationError::NotDivisible { op, factor, total }.into());
    }
    Ok(total / factor)
}

/// Check `min <= value <= max`.
pub fn check_bounds(
    value: usize,
    min: usize,
    max: usize,
    name: &'static str,
    op: &'static str,
) -> Result<()> {
    if value < min || value > max {
        return Err(ValidationError::OutOfBounds {
            op,
            name,
            value,
            min,
            max,
        }
        .into());
    }
    Ok(())
}

/// Output dimension `base * factor * factor...`, or `None` on overflow.
pub fn checked_dim(base: usize, factors: &[usize]) -> Option<usize> {
    factors
        .iter()
        .try_fold(base, |acc, &f| acc.checked_mul(f))
}

/// Validate a Hilbert-space result dimension against the configured limit.
pub fn check_hilbert_limit(
    requested: Option<usize>,
    limits: &ResourceLimits,
    op: &'static str,
) -> Result<()> {
    check_limit(requested, limits.max_hilbert_dim, "hilbert dimension", op)
}

/// Validate a Liouville-space result dimension against the configured limit.
pub fn check_liouville_limit(
    requested: Option<usize>,
    limits: &ResourceLimits,
    op: &'static str,
) -> Result<()> {
    check_limit(
        requested,
        limits.max_liouville_dim,
        "liouville dimension",
        op,
    )
}

fn check_limit(
    requested: Option<usize>,
    limit: usize,
    resource: &'static str,
    op: &'static str,
) -> Result<()> {
    // Overflow is reported as the largest representable request.
    let requested = requested.unwrap_or(usize::MAX);
    if requested > limit {
        return Err(ValidationError::ResourceLimit {
            op,
            resource,
            limit,
            requested,
        }
        .into());
    }
    Ok(())
}
