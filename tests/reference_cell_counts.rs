use reference_cells::cell_error::ReferenceCellError;
use reference_cells::topology::reference_cell::ReferenceCell;
use reference_cells::topology::shape_kind::ShapeKind;

fn all_cells() -> [ReferenceCell; 7] {
    [
        ReferenceCell::interval(),
        ReferenceCell::triangle(),
        ReferenceCell::quadrilateral(),
        ReferenceCell::tetrahedron(),
        ReferenceCell::hexahedron(),
        ReferenceCell::pyramid(),
        ReferenceCell::prism(),
    ]
}

#[test]
fn constructors_match_kinds() {
    let kinds: Vec<ShapeKind> = all_cells().iter().map(|c| c.cell_type()).collect();
    assert_eq!(kinds, ShapeKind::ALL.to_vec());
}

#[test]
fn dimensions_follow_kind() {
    let dims: Vec<usize> = all_cells().iter().map(|c| c.dim()).collect();
    assert_eq!(dims, vec![1, 2, 2, 3, 3, 3, 3]);
}

#[test]
fn counts_match_tables() -> Result<(), Box<dyn std::error::Error>> {
    for cell in all_cells() {
        assert_eq!(cell.entity_count(0)?, cell.vertices().len());
        assert_eq!(cell.entity_count(1)?, cell.edges().len());
        assert_eq!(cell.entity_count(2)?, cell.faces().len());
        assert_eq!(cell.entity_count(3)?, cell.volume_count());
        assert_eq!(cell.volume_count() == 1, cell.dim() == 3);
        assert_eq!(cell.faces_nvertices().len(), cell.face_count());
        for (face, n) in cell.faces().iter().zip(cell.faces_nvertices()) {
            assert_eq!(face.len(), n);
        }
        for v in cell.vertices() {
            assert_eq!(v.len(), cell.dim());
        }
    }
    Ok(())
}

#[test]
fn counts_per_shape() {
    let counts: Vec<[usize; 4]> = all_cells()
        .iter()
        .map(|c| [c.vertex_count(), c.edge_count(), c.face_count(), c.volume_count()])
        .collect();
    assert_eq!(
        counts,
        vec![
            [2, 1, 0, 0],
            [3, 3, 0, 0],
            [4, 4, 0, 0],
            [4, 6, 4, 1],
            [8, 12, 6, 1],
            [5, 8, 5, 1],
            [6, 9, 5, 1],
        ]
    );
}

#[test]
fn tetrahedron_faces_are_triangles() {
    let tet = ReferenceCell::tetrahedron();
    assert_eq!(tet.faces_nvertices(), vec![3, 3, 3, 3]);
}

#[test]
fn hexahedron_faces_are_quadrilaterals() {
    let hex = ReferenceCell::hexahedron();
    assert_eq!(hex.faces_nvertices(), vec![4; 6]);
}

#[test]
fn pyramid_mixes_face_arity() {
    let pyramid = ReferenceCell::pyramid();
    assert_eq!(pyramid.faces_nvertices(), vec![4, 3, 3, 3, 3]);
}

#[test]
fn dimension_four_is_rejected_everywhere() {
    for cell in all_cells() {
        assert_eq!(
            cell.entity_count(4),
            Err(ReferenceCellError::InvalidDimension { dim: 4, max: 3 })
        );
    }
}

#[test]
fn one_past_last_vertex_is_out_of_range() {
    for cell in all_cells() {
        let n = cell.vertex_count();
        assert_eq!(
            cell.connectivity(0, n, 0),
            Err(ReferenceCellError::IndexOutOfRange {
                dim: 0,
                index: n,
                count: n
            })
        );
    }
}

#[test]
fn instances_are_value_equal() {
    for (a, b) in all_cells().into_iter().zip(all_cells()) {
        assert_eq!(a, b);
        assert_eq!(a.vertices(), b.vertices());
        assert_eq!(a.edges(), b.edges());
        assert_eq!(a.faces(), b.faces());
        assert_eq!(a.faces_nvertices(), b.faces_nvertices());
    }
}

#[test]
fn copies_do_not_alias_the_catalog() {
    let tri = ReferenceCell::triangle();
    let mut vertices = tri.vertices();
    vertices[0][0] = 42.0;
    let mut edges = tri.edges();
    edges.clear();
    assert_eq!(tri.vertices()[0], vec![0.0, 0.0]);
    assert_eq!(tri.edge_count(), 3);
}
