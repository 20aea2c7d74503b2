//! ReferenceCellError: Unified error type for reference-cell public APIs
//!
//! Every fallible query in this crate reports a caller-contract violation
//! through this type. Nothing here is transient, so callers never retry.

use thiserror::Error;

use crate::topology::shape_kind::ShapeKind;

/// Unified error type for reference-cell operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReferenceCellError {
    /// A raw shape code outside the seven supported kinds.
    #[error("invalid shape kind code {0} (expected 0..=6)")]
    InvalidShapeKind(u8),
    /// A shape name that does not match any supported kind.
    #[error("unknown shape name `{0}`")]
    UnknownShapeName(String),
    /// A dimension argument that is negative or above the allowed maximum.
    #[error("invalid dimension {dim} (expected 0..={max})")]
    InvalidDimension { dim: i64, max: usize },
    /// An entity index past the end of its dimension.
    #[error("entity index {index} out of range for dimension {dim} (count {count})")]
    IndexOutOfRange {
        dim: usize,
        index: usize,
        count: usize,
    },
    /// A canonical table failed invariant validation.
    #[error("invalid topology for {kind}: {reason}")]
    InvalidTopology { kind: ShapeKind, reason: String },
}

impl ReferenceCellError {
    pub(crate) fn invalid_dimension(dim: usize, max: usize) -> Self {
        ReferenceCellError::InvalidDimension {
            dim: i64::try_from(dim).unwrap_or(i64::MAX),
            max,
        }
    }
}
