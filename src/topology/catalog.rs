//! The topology catalog: one canonical, immutable record per [`ShapeKind`].
//!
//! The vertex/edge/face tables are compile-time constants. On first access
//! they are expanded, once per process, into [`CanonicalTopology`] records
//! that also carry the resolved connectivity. The expansion sits behind a
//! `once_cell` `Lazy`, so concurrent first lookups all observe the same
//! records and later lookups never synchronize.
//!
//! # Numbering
//! Simplices follow the usual reference numbering (vertex `i` is the origin
//! for `i == 0`, the `i`-th unit vector otherwise). Quadrilaterals and
//! hexahedra use tensor-product numbering: vertex `i` sits at
//! `(i & 1, (i >> 1) & 1, (i >> 2) & 1)`, and their faces list vertices in
//! the same tensor-product order rather than cyclically.

use itertools::Itertools;
use once_cell::sync::Lazy;

use crate::cell_error::ReferenceCellError;
use crate::debug_invariants::DebugInvariants;
use crate::topology::connectivity::{ConnectivityTable, MAX_VERTICES};
use crate::topology::shape_kind::ShapeKind;

/// Compile-time description of one shape.
struct ShapeTable {
    vertices: &'static [&'static [f64]],
    edges: &'static [[usize; 2]],
    faces: &'static [&'static [usize]],
}

const INTERVAL: ShapeTable = ShapeTable {
    vertices: &[&[0.0], &[1.0]],
    edges: &[[0, 1]],
    faces: &[],
};

const TRIANGLE: ShapeTable = ShapeTable {
    vertices: &[&[0.0, 0.0], &[1.0, 0.0], &[0.0, 1.0]],
    edges: &[[1, 2], [0, 2], [0, 1]],
    faces: &[],
};

const QUADRILATERAL: ShapeTable = ShapeTable {
    vertices: &[&[0.0, 0.0], &[1.0, 0.0], &[0.0, 1.0], &[1.0, 1.0]],
    edges: &[[0, 1], [0, 2], [1, 3], [2, 3]],
    faces: &[],
};

const TETRAHEDRON: ShapeTable = ShapeTable {
    vertices: &[
        &[0.0, 0.0, 0.0],
        &[1.0, 0.0, 0.0],
        &[0.0, 1.0, 0.0],
        &[0.0, 0.0, 1.0],
    ],
    edges: &[[2, 3], [1, 3], [1, 2], [0, 3], [0, 2], [0, 1]],
    faces: &[&[1, 2, 3], &[0, 2, 3], &[0, 1, 3], &[0, 1, 2]],
};

const HEXAHEDRON: ShapeTable = ShapeTable {
    vertices: &[
        &[0.0, 0.0, 0.0],
        &[1.0, 0.0, 0.0],
        &[0.0, 1.0, 0.0],
        &[1.0, 1.0, 0.0],
        &[0.0, 0.0, 1.0],
        &[1.0, 0.0, 1.0],
        &[0.0, 1.0, 1.0],
        &[1.0, 1.0, 1.0],
    ],
    edges: &[
        [0, 1],
        [0, 2],
        [0, 4],
        [1, 3],
        [1, 5],
        [2, 3],
        [2, 6],
        [3, 7],
        [4, 5],
        [4, 6],
        [5, 7],
        [6, 7],
    ],
    faces: &[
        &[0, 1, 2, 3],
        &[0, 1, 4, 5],
        &[0, 2, 4, 6],
        &[1, 3, 5, 7],
        &[2, 3, 6, 7],
        &[4, 5, 6, 7],
    ],
};

const PYRAMID: ShapeTable = ShapeTable {
    vertices: &[
        &[0.0, 0.0, 0.0],
        &[1.0, 0.0, 0.0],
        &[0.0, 1.0, 0.0],
        &[1.0, 1.0, 0.0],
        &[0.0, 0.0, 1.0],
    ],
    edges: &[[0, 1], [0, 2], [0, 4], [1, 3], [1, 4], [2, 3], [2, 4], [3, 4]],
    faces: &[&[0, 1, 2, 3], &[0, 1, 4], &[0, 2, 4], &[1, 3, 4], &[2, 3, 4]],
};

const PRISM: ShapeTable = ShapeTable {
    vertices: &[
        &[0.0, 0.0, 0.0],
        &[1.0, 0.0, 0.0],
        &[0.0, 1.0, 0.0],
        &[0.0, 0.0, 1.0],
        &[1.0, 0.0, 1.0],
        &[0.0, 1.0, 1.0],
    ],
    edges: &[
        [0, 1],
        [0, 2],
        [0, 3],
        [1, 2],
        [1, 4],
        [2, 5],
        [3, 4],
        [3, 5],
        [4, 5],
    ],
    faces: &[&[0, 1, 2], &[0, 1, 3, 4], &[0, 2, 3, 5], &[1, 2, 4, 5], &[3, 4, 5]],
};

fn shape_table(kind: ShapeKind) -> &'static ShapeTable {
    match kind {
        ShapeKind::Interval => &INTERVAL,
        ShapeKind::Triangle => &TRIANGLE,
        ShapeKind::Quadrilateral => &QUADRILATERAL,
        ShapeKind::Tetrahedron => &TETRAHEDRON,
        ShapeKind::Hexahedron => &HEXAHEDRON,
        ShapeKind::Pyramid => &PYRAMID,
        ShapeKind::Prism => &PRISM,
    }
}

/// The canonical topology of one shape kind.
///
/// Instances only exist inside the catalog; obtain them with [`lookup`] or
/// through [`ReferenceCell::topology`](crate::topology::reference_cell::ReferenceCell::topology).
#[derive(Debug, PartialEq, serde::Serialize)]
pub struct CanonicalTopology {
    kind: ShapeKind,
    dim: usize,
    vertices: &'static [&'static [f64]],
    edges: &'static [[usize; 2]],
    faces: &'static [&'static [usize]],
    faces_nvertices: Vec<usize>,
    connectivity: ConnectivityTable,
}

impl CanonicalTopology {
    fn build(kind: ShapeKind) -> Result<Self, ReferenceCellError> {
        let table = shape_table(kind);
        let dim = kind.dimension();
        Ok(Self {
            kind,
            dim,
            vertices: table.vertices,
            edges: table.edges,
            faces: table.faces,
            faces_nvertices: table.faces.iter().map(|face| face.len()).collect(),
            connectivity: ConnectivityTable::build(
                dim,
                table.vertices.len(),
                table.edges,
                table.faces,
            )?,
        })
    }

    /// The shape kind this record describes.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Topological dimension of the shape.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Vertex coordinates in canonical order, `dim` components each.
    pub fn vertices(&self) -> &'static [&'static [f64]] {
        self.vertices
    }

    /// Endpoint vertex indices of every edge, in canonical order.
    pub fn edges(&self) -> &'static [[usize; 2]] {
        self.edges
    }

    /// Vertex indices of every face; empty below 3D.
    pub fn faces(&self) -> &'static [&'static [usize]] {
        self.faces
    }

    /// Vertex count of each face, parallel to [`faces`](Self::faces).
    pub fn faces_nvertices(&self) -> &[usize] {
        &self.faces_nvertices
    }

    /// Incidence relations resolved for this shape.
    pub fn connectivity(&self) -> &ConnectivityTable {
        &self.connectivity
    }

    /// Listed entities of dimension `dim`, `None` above 3. Volumes count
    /// only for 3D cells.
    pub fn entity_count(&self, dim: usize) -> Option<usize> {
        match dim {
            0 => Some(self.vertices.len()),
            1 => Some(self.edges.len()),
            2 => Some(self.faces.len()),
            3 => Some(usize::from(self.dim == 3)),
            _ => None,
        }
    }

    fn invalid(&self, reason: String) -> ReferenceCellError {
        ReferenceCellError::InvalidTopology {
            kind: self.kind,
            reason,
        }
    }
}

impl DebugInvariants for CanonicalTopology {
    fn validate_invariants(&self) -> Result<(), ReferenceCellError> {
        let nv = self.vertices.len();
        if self.dim != self.kind.dimension() || self.dim > 3 {
            return Err(self.invalid(format!("dimension {} does not match kind", self.dim)));
        }
        if nv == 0 || nv > MAX_VERTICES {
            return Err(self.invalid(format!("unsupported vertex count {nv}")));
        }
        if let Some((i, v)) = self.vertices.iter().find_position(|v| v.len() != self.dim) {
            return Err(self.invalid(format!("vertex {i} has {} coordinates", v.len())));
        }
        if self.dim < 1 && !self.edges.is_empty() {
            return Err(self.invalid("edges listed for a 0D cell".into()));
        }
        if self.dim < 2 && !self.faces.is_empty() {
            return Err(self.invalid("faces listed for a cell below 2D".into()));
        }

        for (i, &[a, b]) in self.edges.iter().enumerate() {
            if a >= nv || b >= nv || a == b {
                return Err(self.invalid(format!("edge {i} = [{a}, {b}] is malformed")));
            }
        }
        if !self.edges.iter().map(|&[a, b]| (a.min(b), a.max(b))).all_unique() {
            return Err(self.invalid("duplicate edge".into()));
        }

        if self.faces_nvertices.len() != self.faces.len() {
            return Err(self.invalid("faces_nvertices is not parallel to faces".into()));
        }
        for (i, (face, &n)) in self.faces.iter().zip(&self.faces_nvertices).enumerate() {
            if face.len() != n || n < 3 {
                return Err(self.invalid(format!("face {i} has {} vertices, recorded {n}", face.len())));
            }
            if face.iter().any(|&v| v >= nv) || !face.iter().all_unique() {
                return Err(self.invalid(format!("face {i} = {face:?} is malformed")));
            }
        }
        if !self.faces.iter().map(|face| face.iter().sorted().collect_vec()).all_unique() {
            return Err(self.invalid("duplicate face".into()));
        }

        if self.connectivity.dim() != self.dim {
            return Err(self.invalid("connectivity dimension mismatch".into()));
        }
        for d in 0..self.dim {
            if self.connectivity.entity_count(d) != self.entity_count(d) {
                return Err(self.invalid(format!("connectivity entity count mismatch in dimension {d}")));
            }
        }
        Ok(())
    }
}

static CATALOG: Lazy<[CanonicalTopology; 7]> = Lazy::new(|| {
    log::debug!(
        "building reference topology catalog for {} shape kinds",
        ShapeKind::ALL.len()
    );
    ShapeKind::ALL.map(|kind| {
        // tables are compile-time constants; a failure here is a corrupt table
        let topology = CanonicalTopology::build(kind)
            .unwrap_or_else(|err| panic!("[invariants] reference topology catalog table is inconsistent: {err}"));
        topology.debug_assert_invariants();
        log::trace!(
            "{kind}: {} vertices, {} edges, {} faces",
            topology.vertices.len(),
            topology.edges.len(),
            topology.faces.len()
        );
        topology
    })
});

/// The canonical topology of `kind`. Always succeeds.
pub fn lookup(kind: ShapeKind) -> &'static CanonicalTopology {
    &CATALOG[usize::from(kind.code())]
}

/// Look up a kind by its raw code, as received from a foreign caller.
pub fn lookup_code(code: u8) -> Result<&'static CanonicalTopology, ReferenceCellError> {
    ShapeKind::try_from(code).map(lookup)
}
