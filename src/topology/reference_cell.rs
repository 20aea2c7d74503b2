//! `ReferenceCell`: the read-only query API over one canonical topology.
//!
//! A `ReferenceCell` is a `Copy` handle onto a record of the topology
//! catalog. It has no setters, owns nothing that needs releasing, and can be
//! shared across threads freely.
//!
//! Table accessors (`vertices`, `edges`, `faces`, `faces_nvertices`) return
//! fresh copies; [`ReferenceCell::topology`] offers the same data as
//! borrowed immutable slices when copying is not wanted.
//!
//! # Example
//! ```rust
//! # fn try_main() -> Result<(), reference_cells::cell_error::ReferenceCellError> {
//! use reference_cells::topology::reference_cell::ReferenceCell;
//! use reference_cells::topology::shape_kind::ShapeKind;
//!
//! let tet = ReferenceCell::tetrahedron();
//! assert_eq!(tet.cell_type(), ShapeKind::Tetrahedron);
//! assert_eq!(tet.entity_count(1)?, 6);
//! // edge 0 joins vertices 2 and 3, shared by faces 0 and 1
//! assert_eq!(tet.connectivity(1, 0, 2)?, vec![0, 1]);
//! # Ok(())
//! # }
//! # try_main().unwrap();
//! ```

use std::hash::{Hash, Hasher};

use crate::cell_error::ReferenceCellError;
use crate::topology::catalog::{self, CanonicalTopology};
use crate::topology::shape_kind::ShapeKind;

/// Highest entity dimension any reference cell has.
pub const MAX_DIM: usize = 3;

/// Convert a signed dimension coming from a foreign caller.
///
/// Negative values and values above [`MAX_DIM`] are rejected with
/// [`ReferenceCellError::InvalidDimension`].
pub fn checked_dimension(raw: i64) -> Result<usize, ReferenceCellError> {
    usize::try_from(raw)
        .ok()
        .filter(|&dim| dim <= MAX_DIM)
        .ok_or(ReferenceCellError::InvalidDimension {
            dim: raw,
            max: MAX_DIM,
        })
}

/// A reference cell of one [`ShapeKind`].
#[derive(Clone, Copy, Debug)]
pub struct ReferenceCell {
    topology: &'static CanonicalTopology,
}

impl ReferenceCell {
    fn from_catalog(kind: ShapeKind) -> Self {
        Self {
            topology: catalog::lookup(kind),
        }
    }

    /// The reference interval `[0, 1]`.
    pub fn interval() -> Self {
        Self::from_catalog(ShapeKind::Interval)
    }

    /// The reference triangle with vertices `(0,0)`, `(1,0)`, `(0,1)`.
    pub fn triangle() -> Self {
        Self::from_catalog(ShapeKind::Triangle)
    }

    /// The reference unit square.
    pub fn quadrilateral() -> Self {
        Self::from_catalog(ShapeKind::Quadrilateral)
    }

    /// The reference tetrahedron spanned by the origin and the unit vectors.
    pub fn tetrahedron() -> Self {
        Self::from_catalog(ShapeKind::Tetrahedron)
    }

    /// The reference unit cube.
    pub fn hexahedron() -> Self {
        Self::from_catalog(ShapeKind::Hexahedron)
    }

    /// The reference pyramid over the unit square with apex `(0,0,1)`.
    pub fn pyramid() -> Self {
        Self::from_catalog(ShapeKind::Pyramid)
    }

    /// The reference prism: the reference triangle extruded to `z = 1`.
    pub fn prism() -> Self {
        Self::from_catalog(ShapeKind::Prism)
    }

    /// The shape kind this cell was built from.
    #[inline]
    pub fn cell_type(&self) -> ShapeKind {
        self.topology.kind()
    }

    /// Topological dimension (1 for intervals, 2 for polygons, 3 for solids).
    #[inline]
    pub fn dim(&self) -> usize {
        self.topology.dim()
    }

    /// Borrowed view of the shared canonical record.
    #[inline]
    pub fn topology(&self) -> &'static CanonicalTopology {
        self.topology
    }

    /// Vertex coordinates, one `dim()`-tuple per vertex, in canonical order.
    pub fn vertices(&self) -> Vec<Vec<f64>> {
        self.topology
            .vertices()
            .iter()
            .map(|v| v.to_vec())
            .collect()
    }

    /// Endpoint vertex indices of every edge.
    pub fn edges(&self) -> Vec<[usize; 2]> {
        self.topology.edges().to_vec()
    }

    /// Vertex indices of every face. Empty below 3D.
    pub fn faces(&self) -> Vec<Vec<usize>> {
        self.topology
            .faces()
            .iter()
            .map(|f| f.to_vec())
            .collect()
    }

    /// Number of vertices of each face, parallel to [`faces`](Self::faces).
    pub fn faces_nvertices(&self) -> Vec<usize> {
        self.topology.faces_nvertices().to_vec()
    }

    /// Coordinates of vertex `index`.
    pub fn vertex(&self, index: usize) -> Result<&'static [f64], ReferenceCellError> {
        let vertices = self.topology.vertices();
        vertices
            .get(index)
            .copied()
            .ok_or(ReferenceCellError::IndexOutOfRange {
                dim: 0,
                index,
                count: vertices.len(),
            })
    }

    /// Vertex coordinates flattened vertex-major: `dim()` values per vertex.
    pub fn vertices_flat(&self) -> Vec<f64> {
        self.topology.vertices().concat()
    }

    /// Edge endpoints flattened: two indices per edge.
    pub fn edges_flat(&self) -> Vec<usize> {
        self.topology.edges().concat()
    }

    /// Face vertices concatenated; split with [`faces_nvertices`](Self::faces_nvertices).
    pub fn faces_flat(&self) -> Vec<usize> {
        self.topology.faces().concat()
    }

    /// Number of entities of dimension `dim`: vertices, edges, faces, volumes.
    ///
    /// Dimensions above 3 fail with [`ReferenceCellError::InvalidDimension`].
    /// Dimensions above the cell's own but at most 3 yield 0.
    pub fn entity_count(&self, dim: usize) -> Result<usize, ReferenceCellError> {
        self.topology
            .entity_count(dim)
            .ok_or_else(|| ReferenceCellError::invalid_dimension(dim, MAX_DIM))
    }

    /// Number of vertices, same as `entity_count(0)`.
    pub fn vertex_count(&self) -> usize {
        self.topology.vertices().len()
    }

    /// Number of edges, same as `entity_count(1)`.
    pub fn edge_count(&self) -> usize {
        self.topology.edges().len()
    }

    /// Number of faces, same as `entity_count(2)`; 0 below 3D.
    pub fn face_count(&self) -> usize {
        self.topology.faces().len()
    }

    /// 1 for 3D cells, 0 otherwise.
    pub fn volume_count(&self) -> usize {
        usize::from(self.dim() == MAX_DIM)
    }

    /// Indices of the entities of dimension `connected_dim` incident to
    /// entity `entity_index` of dimension `entity_dim`, ascending.
    ///
    /// The cell itself is entity 0 of dimension `dim()`.
    ///
    /// # Errors
    /// - [`ReferenceCellError::InvalidDimension`] if either dimension
    ///   exceeds `dim()`.
    /// - [`ReferenceCellError::IndexOutOfRange`] if `entity_index` does not
    ///   name an entity of `entity_dim`.
    pub fn connectivity(
        &self,
        entity_dim: usize,
        entity_index: usize,
        connected_dim: usize,
    ) -> Result<Vec<usize>, ReferenceCellError> {
        let table = self.topology.connectivity();
        for d in [entity_dim, connected_dim] {
            if d > self.dim() {
                return Err(ReferenceCellError::invalid_dimension(d, self.dim()));
            }
        }
        table
            .incident(entity_dim, entity_index, connected_dim)
            .map(<[usize]>::to_vec)
            .ok_or_else(|| ReferenceCellError::IndexOutOfRange {
                dim: entity_dim,
                index: entity_index,
                count: table.entity_count(entity_dim).unwrap_or(0),
            })
    }

    /// Local vertex indices of entity `(dim, index)`, ascending.
    pub fn entity_vertices(&self, dim: usize, index: usize) -> Result<Vec<usize>, ReferenceCellError> {
        self.connectivity(dim, index, 0)
    }
}

impl PartialEq for ReferenceCell {
    fn eq(&self, other: &Self) -> bool {
        self.cell_type() == other.cell_type()
    }
}

impl Eq for ReferenceCell {}

impl Hash for ReferenceCell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cell_type().hash(state);
    }
}

#[cfg(test)]
mod layout_tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(ReferenceCell: Send, Sync, Copy, Eq, Hash);
}
