// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for the tensor-algebra core.

use thiserror::Error;

/// Result type alias for tensor-algebra operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
    /// Dimension precondition violated
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

/// Precondition failures of the tensor-algebra routines.
///
/// Every variant names the failing operation and carries the offending
/// numbers so a configuration bug can be traced back to its source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Operator is not square
    #[error("{op}: matrix must be square, got {rows} x {cols}")]
    NotSquare {
        op: &'static str,
        rows: usize,
        cols: usize,
    },
    /// Liouville dimension without an integer Hilbert dimension
    #[error("{op}: dimension {dim} is not a perfect square")]
    NotPerfectSquare { op: &'static str, dim: usize },
    /// Factor does not divide the total dimension
    #[error("{op}: factor {factor} does not divide dimension {total}")]
    NotDivisible {
        op: &'static str,
        factor: usize,
        total: usize,
    },
    /// Value outside its admissible range
    #[error("{op}: {name} = {value} outside [{min}, {max}]")]
    OutOfBounds {
        op: &'static str,
        name: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
    /// Length or arity mismatch
    #[error("{op}: expected {expected} elements, got {actual}")]
    ShapeMismatch {
        op: &'static str,
        expected: usize,
        actual: usize,
    },
    /// Product space axis of size zero
    #[error("{op}: axis {axis} has size 0")]
    EmptyAxis { op: &'static str, axis: usize },
    /// Axis order is not a permutation
    #[error("{op}: {order:?} is not a permutation of 0..{rank}")]
    InvalidPermutation {
        op: &'static str,
        order: Vec<usize>,
        rank: usize,
    },
    /// Result would exceed a configured limit
    #[error("{op}: {resource} of {requested} exceeds limit {limit}")]
    ResourceLimit {
        op: &'static str,
        resource: &'static str,
        limit: usize,
        requested: usize,
    },
}
