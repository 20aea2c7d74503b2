//! Incidence relations between the entities of one reference cell.
//!
//! Every entity is identified by the set of local vertices it spans. The
//! relation between an entity of dimension `d1` and the entities of
//! dimension `d2` is then a subset test on those vertex sets:
//!
//! - `d1 == d2`: identity, each entity is incident only to itself.
//! - `d1 < d2`: the lower entity's vertices must all lie in the higher one.
//! - `d1 > d2`: the lower entity's vertices must all lie in the higher one,
//!   i.e. the same test with the roles swapped.
//!
//! The cell itself is the single entity of dimension `dim` (index 0), so a
//! triangle answers `(1, i, 2)` with `[0]` even though it lists no faces.
//! Face arity plays no role; a quadrilateral face of a prism is handled like
//! a triangular one.
//!
//! Tables are built once per shape and incident indices are stored in
//! ascending order, so repeated lookups always return identical slices.

use itertools::Itertools;

use crate::cell_error::ReferenceCellError;

/// Bit `v` set iff local vertex `v` belongs to the entity.
type VertexMask = u32;

/// Largest vertex count a [`VertexMask`] can describe.
pub const MAX_VERTICES: usize = VertexMask::BITS as usize;

fn vertex_mask(vertices: &[usize]) -> VertexMask {
    vertices.iter().fold(0, |mask, &v| mask | (1 << v))
}

#[inline]
fn is_subset(lower: VertexMask, higher: VertexMask) -> bool {
    lower & !higher == 0
}

/// Precomputed incidence for every `(entity_dim, connected_dim)` pair of one cell.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ConnectivityTable {
    dim: usize,
    /// Number of addressable entities per dimension, the cell itself included.
    entity_counts: Vec<usize>,
    /// `relations[d1 * (dim + 1) + d2][i]` = entities of `d2` incident to `(d1, i)`.
    relations: Vec<Vec<Vec<usize>>>,
}

impl ConnectivityTable {
    /// Resolve all incidence relations of a cell of dimension `dim`.
    ///
    /// `edges` and `faces` are the cell's sub-entity tables; entries at or
    /// above `dim` are ignored in favour of the whole cell. Every listed
    /// vertex index must be below `vertex_count`, which itself may not
    /// exceed [`MAX_VERTICES`].
    pub(crate) fn build(
        dim: usize,
        vertex_count: usize,
        edges: &[[usize; 2]],
        faces: &[&[usize]],
    ) -> Result<Self, ReferenceCellError> {
        if vertex_count > MAX_VERTICES {
            return Err(ReferenceCellError::IndexOutOfRange {
                dim: 0,
                index: vertex_count - 1,
                count: MAX_VERTICES,
            });
        }
        let mut listed = edges.iter().flatten().chain(faces.iter().copied().flatten());
        if let Some(&index) = listed.find(|&&v| v >= vertex_count) {
            return Err(ReferenceCellError::IndexOutOfRange {
                dim: 0,
                index,
                count: vertex_count,
            });
        }

        let all_vertices = (0..vertex_count).collect_vec();
        let masks: Vec<Vec<VertexMask>> = (0..=dim)
            .map(|d| match d {
                _ if d == dim => vec![vertex_mask(&all_vertices)],
                0 => all_vertices.iter().map(|&v| vertex_mask(&[v])).collect(),
                1 => edges.iter().map(|edge| vertex_mask(edge)).collect(),
                _ => faces.iter().map(|face| vertex_mask(face)).collect(),
            })
            .collect();

        let mut relations = Vec::with_capacity((dim + 1) * (dim + 1));
        for d1 in 0..=dim {
            for d2 in 0..=dim {
                let rows = masks[d1]
                    .iter()
                    .enumerate()
                    .map(|(i, &entity)| {
                        if d1 == d2 {
                            return vec![i];
                        }
                        masks[d2]
                            .iter()
                            .positions(|&other| {
                                if d1 < d2 {
                                    is_subset(entity, other)
                                } else {
                                    is_subset(other, entity)
                                }
                            })
                            .collect_vec()
                    })
                    .collect_vec();
                relations.push(rows);
            }
        }

        Ok(Self {
            dim,
            entity_counts: masks.iter().map(Vec::len).collect(),
            relations,
        })
    }

    /// Topological dimension of the cell this table describes.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of addressable entities of dimension `dim`, or `None` above
    /// the cell dimension. The cell itself counts as one entity of its own
    /// dimension.
    pub fn entity_count(&self, dim: usize) -> Option<usize> {
        self.entity_counts.get(dim).copied()
    }

    /// Entities of `connected_dim` incident to `(entity_dim, entity_index)`,
    /// in ascending order. `None` when any argument is out of range.
    pub fn incident(
        &self,
        entity_dim: usize,
        entity_index: usize,
        connected_dim: usize,
    ) -> Option<&[usize]> {
        if entity_dim > self.dim || connected_dim > self.dim {
            return None;
        }
        self.relations[entity_dim * (self.dim + 1) + connected_dim]
            .get(entity_index)
            .map(Vec::as_slice)
    }
}
