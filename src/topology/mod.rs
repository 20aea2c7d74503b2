//! Reference-cell topology.
//!
//! This module provides:
//! - [`ShapeKind`], the stable enumeration of supported shapes
//! - the topology catalog holding one canonical record per shape
//! - the connectivity resolver computing incidence between entity dimensions
//! - [`ReferenceCell`], the read-only query API callers work with

pub mod catalog;
pub mod connectivity;
pub mod reference_cell;
pub mod shape_kind;

pub use catalog::{CanonicalTopology, lookup};
pub use reference_cell::{MAX_DIM, ReferenceCell, checked_dimension};
pub use shape_kind::ShapeKind;
