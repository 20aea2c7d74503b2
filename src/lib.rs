#![cfg_attr(docsrs, feature(doc_cfg))]
//! # reference-cells
//!
//! Canonical topological descriptions of the reference cells used by
//! finite-element codes: interval, triangle, quadrilateral, tetrahedron,
//! hexahedron, pyramid and prism. Each cell knows its vertex coordinates,
//! its edge and face vertex lists, and the incidence relations between
//! entities of every pair of dimensions.
//!
//! ## Features
//! - One immutable, process-wide record per shape, built lazily and shared
//!   by every [`ReferenceCell`](topology::ReferenceCell) of that shape
//! - Bounds-checked queries reporting [`ReferenceCellError`](cell_error::ReferenceCellError)
//! - Connectivity precomputed per shape, returned in ascending index order
//!
//! ## Usage
//! ```rust
//! use reference_cells::prelude::*;
//!
//! let hex = ReferenceCell::hexahedron();
//! assert_eq!(hex.vertex_count(), 8);
//! assert_eq!(hex.faces_nvertices(), vec![4; 6]);
//! // edges of the bottom face
//! assert_eq!(hex.connectivity(2, 0, 1).unwrap(), vec![0, 1, 3, 5]);
//! ```
//!
//! ## Invariant checking
//! Catalog tables are validated when first built in debug builds, or in any
//! build with the `check-invariants` or `strict-invariants` feature.

pub mod cell_error;
pub mod debug_invariants;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used types:
pub mod prelude {
    pub use crate::cell_error::ReferenceCellError;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::topology::catalog::CanonicalTopology;
    pub use crate::topology::reference_cell::ReferenceCell;
    pub use crate::topology::shape_kind::ShapeKind;
}
