// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Tensor-product algebra for composite Hilbert and Liouville spaces.
//!
//! Operators defined on small subsystems are combined into, and extracted
//! from, the composite space of an open-quantum-system propagator:
//!
//! - [`kron`]: Kronecker products and row-major vectorization
//! - [`embed`]: spectator insertion in Hilbert space (and its partial trace)
//! - [`liouville`]: spectator insertion and tensor products of superoperators
//! - [`disentangle`]: joint ↔ system-⊗-environment Liouville ordering
//!
//! Every routine allocates and returns a fresh result; inputs are never
//! modified. Precondition failures are returned as
//! [`ValidationError`](crate::error::ValidationError)s naming the routine.
//!
//! # Example
//!
//! ```
//! use ndarray::Array2;
//! use num_complex::Complex64;
//! use qubit_os_otimes::otimes::{disentangle, embed_liouville, kron, liouville_kron};
//!
//! let sz = Array2::from_diag(&ndarray::arr1(&[
//!     Complex64::new(1.0, 0.0),
//!     Complex64::new(-1.0, 0.0),
//! ]));
//! // Superoperator ρ ↦ σz ρ σz on a qubit
//! let l_sys = kron(&sz, &sz);
//! // Same channel with a 3-level idle environment appended
//! let joint = embed_liouville(&l_sys, 2, 3).unwrap();
//! assert_eq!(joint.nrows(), 36);
//! // Split back into Liouville_S ⊗ Liouville_E
//! let split = disentangle(&joint, 2).unwrap();
//! let env = Array2::from_diag_elem(9, Complex64::new(1.0, 0.0));
//! assert_eq!(split, kron(&l_sys, &env));
//! assert_eq!(joint, liouville_kron(&l_sys, &env).unwrap());
//! ```

pub mod disentangle;
pub mod embed;
pub mod kron;
pub mod liouville;

pub use disentangle::{disentangle, entangle};
pub use embed::{embed_at, embed_edges, trace_out_spectator};
pub use kron::{identity, kron, kron3, kron_all, kron_vec, unvectorize, vectorize};
pub use liouville::{embed_liouville, liouville_kron};
