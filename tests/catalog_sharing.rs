use reference_cells::cell_error::ReferenceCellError;
use reference_cells::debug_invariants::DebugInvariants;
use reference_cells::topology::catalog::{lookup, lookup_code};
use reference_cells::topology::reference_cell::ReferenceCell;
use reference_cells::topology::shape_kind::ShapeKind;

#[test]
fn concurrent_first_access_yields_one_record() {
    let addresses: Vec<Vec<usize>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    ShapeKind::ALL
                        .iter()
                        .map(|&kind| lookup(kind) as *const _ as usize)
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("reader thread"))
            .collect()
    });
    for other in &addresses[1..] {
        assert_eq!(other, &addresses[0]);
    }
}

#[test]
fn cells_are_shared_across_threads() {
    let tet = ReferenceCell::tetrahedron();
    let edges = std::thread::scope(|scope| {
        scope
            .spawn(move || tet.connectivity(0, 3, 1))
            .join()
            .expect("reader thread")
    });
    assert_eq!(edges, Ok(vec![0, 1, 3]));
    assert!(std::ptr::eq(tet.topology(), ReferenceCell::tetrahedron().topology()));
}

#[test]
fn catalog_passes_validation() {
    for kind in ShapeKind::ALL {
        lookup(kind).validate_invariants().expect("valid table");
    }
}

#[test]
fn raw_codes_resolve() {
    assert_eq!(lookup_code(5).map(|t| t.kind()), Ok(ShapeKind::Pyramid));
    assert!(matches!(
        lookup_code(200),
        Err(ReferenceCellError::InvalidShapeKind(200))
    ));
}

#[test]
fn shape_kind_serializes_by_name() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(serde_json::to_string(&ShapeKind::Quadrilateral)?, "\"quadrilateral\"");
    let kind: ShapeKind = serde_json::from_str("\"prism\"")?;
    assert_eq!(kind, ShapeKind::Prism);
    assert!(serde_json::from_str::<ShapeKind>("\"hexagon\"").is_err());
    Ok(())
}

#[test]
fn topology_serializes_its_tables() -> Result<(), Box<dyn std::error::Error>> {
    let value = serde_json::to_value(lookup(ShapeKind::Triangle))?;
    assert_eq!(value["kind"], "triangle");
    assert_eq!(value["dim"], 2);
    assert_eq!(value["edges"], serde_json::json!([[1, 2], [0, 2], [0, 1]]));
    assert_eq!(value["faces"], serde_json::json!([]));
    Ok(())
}
