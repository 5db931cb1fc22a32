// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Configured entry point to the tensor-algebra routines.
//!
//! [`OperatorAlgebra`] forwards to the free functions in [`crate::otimes`]
//! and [`crate::diagnostics`], but first checks the size of the result
//! against [`ResourceLimits`](crate::config::ResourceLimits) so that a bad
//! dimension parameter fails before a huge dense allocation.

use ndarray::{Array1, Array2};
use num_complex::Complex64;

use crate::config::Config;
use crate::diagnostics::report_orthogonality;
use crate::error::Result;
use crate::otimes;
use crate::validation::{check_hilbert_limit, check_liouville_limit, checked_dim};

/// Tensor-algebra routines bound to a validated [`Config`].
#[derive(Debug, Clone)]
pub struct OperatorAlgebra {
    config: Config,
}

impl OperatorAlgebra {
    /// Create a new algebra after validating `config`.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// [`otimes::kron`] with a Hilbert-dimension limit on the larger side.
    pub fn kron(&self, a: &Array2<Complex64>, b: &Array2<Complex64>) -> Result<Array2<Complex64>> {
        let rows = checked_dim(a.nrows(), &[b.nrows()]);
        let cols = checked_dim(a.ncols(), &[b.ncols()]);
        let dim = rows.zip(cols).map(|(r, c)| r.max(c));
        check_hilbert_limit(dim, &self.config.limits, "kron")?;
        Ok(otimes::kron(a, b))
    }

    /// [`otimes::kron_vec`] with a Liouville-dimension limit on the length.
    pub fn kron_vec(&self, u: &Array1<Complex64>, v: &Array1<Complex64>) -> Result<Array1<Complex64>> {
        check_liouville_limit(checked_dim(u.len(), &[v.len()]), &self.config.limits, "kron_vec")?;
        Ok(otimes::kron_vec(u, v))
    }

    /// [`otimes::embed_edges`] with a Hilbert-dimension limit.
    pub fn embed_edges(
        &self,
        dim_before: usize,
        m: &Array2<Complex64>,
        dim_after: usize,
    ) -> Result<Array2<Complex64>> {
        let dim = checked_dim(m.nrows().max(m.ncols()), &[dim_before.max(1), dim_after.max(1)]);
        check_hilbert_limit(dim, &self.config.limits, "embed_edges")?;
        Ok(otimes::embed_edges(dim_before, m, dim_after))
    }

    /// [`otimes::embed_at`] with a Hilbert-dimension limit.
    pub fn embed_at(&self, a: &Array2<Complex64>, d1: usize, by_dim: usize) -> Result<Array2<Complex64>> {
        check_hilbert_limit(checked_dim(a.nrows(), &[by_dim]), &self.config.limits, "embed_at")?;
        otimes::embed_at(a, d1, by_dim)
    }

    /// [`otimes::embed_liouville`] with a Liouville-dimension limit.
    pub fn embed_liouville(
        &self,
        a: &Array2<Complex64>,
        d1: usize,
        by_dim: usize,
    ) -> Result<Array2<Complex64>> {
        check_liouville_limit(
            checked_dim(a.nrows(), &[by_dim, by_dim]),
            &self.config.limits,
            "embed_liouville",
        )?;
        otimes::embed_liouville(a, d1, by_dim)
    }

    /// [`otimes::liouville_kron`] with a Liouville-dimension limit.
    pub fn liouville_kron(&self, a: &Array2<Complex64>, b: &Array2<Complex64>) -> Result<Array2<Complex64>> {
        check_liouville_limit(
            checked_dim(a.nrows(), &[b.nrows()]),
            &self.config.limits,
            "liouville_kron",
        )?;
        otimes::liouville_kron(a, b)
    }

    /// [`otimes::disentangle`]; the result has the size of the input.
    pub fn disentangle(&self, m: &Array2<Complex64>, ns: usize) -> Result<Array2<Complex64>> {
        check_liouville_limit(Some(m.nrows()), &self.config.limits, "disentangle")?;
        otimes::disentangle(m, ns)
    }

    /// [`otimes::entangle`]; the result has the size of the input.
    pub fn entangle(&self, m: &Array2<Complex64>, ns: usize) -> Result<Array2<Complex64>> {
        check_liouville_limit(Some(m.nrows()), &self.config.limits, "entangle")?;
        otimes::entangle(m, ns)
    }

    /// Orthonormality check of a basis rotation with the configured threshold.
    ///
    /// Returns `true` when a violation was found (and logged).
    pub fn check_basis(&self, a: &Array2<Complex64>, label: &str) -> bool {
        report_orthogonality(a, self.config.diagnostics.orthogonality_threshold, label)
    }
}
