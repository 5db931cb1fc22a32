// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Row-major multi-axis index arithmetic.
//!
//! A [`ProductSpace`] is an ordered list of axis sizes `[n0, n1, …, n_{k-1}]`.
//! A flat index decomposes into per-axis values with the first axis most
//! significant:
//!
//!   I = Σ_i v_i · Π_{j>i} n_j
//!
//! [`ProductSpaceIndex`] is a cursor over all combinations in that order
//! (last axis fastest). Every embedding and re-ordering routine in
//! [`crate::otimes`] goes through this module, so the flattening convention
//! lives in exactly one place.
//!
//! # Example
//!
//! ```
//! use qubit_os_otimes::index::ProductSpace;
//!
//! let space = ProductSpace::new(vec![2, 3]).unwrap();
//! let mut i = space.cursor();
//! let mut seen = Vec::new();
//! while !i.is_done() {
//!     seen.push(i.flat_index());
//!     i.increment();
//! }
//! assert_eq!(seen, vec![0, 1, 2, 3, 4, 5]);
//! ```

pub mod cursor;
pub mod space;

pub use cursor::ProductSpaceIndex;
pub use space::ProductSpace;
