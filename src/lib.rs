// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! QubitOS Tensor Algebra
//!
//! This crate provides the tensor-product routines QubitOS uses to build
//! open-quantum-system propagators from subsystem operators: Kronecker
//! products, spectator embedding in Hilbert and Liouville space, and the
//! re-ordering between joint and factorized Liouville layouts.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          OperatorAlgebra                 │
//! │   (config + resource limits)             │
//! ├──────────────────┬──────────────────────┤
//! │     otimes       │    diagnostics       │
//! │ kron / embed /   │  orthogonality       │
//! │ liouville /      │  checks              │
//! │ disentangle      │                      │
//! ├──────────────────┴──────────────────────┤
//! │     index (ProductSpace cursor)          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`index`]: Mixed-radix indices over product spaces
//! - [`otimes`]: Kronecker products and spectator embedding
//! - [`diagnostics`]: Basis orthonormality checks
//! - [`algebra`]: Configured facade with resource limits
//! - [`config`]: Configuration management
//! - [`validation`]: Dimension preconditions
//! - [`error`]: Error types

pub mod algebra;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod index;
pub mod otimes;
pub mod validation;

pub use algebra::OperatorAlgebra;
pub use config::Config;
pub use error::{Error, Result};

#[cfg(test)]
pub mod test_utils;


/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
