//! Shape kinds of the supported reference cells.
//!
//! `ShapeKind` is the stable key downstream code switches on (basis
//! dispatch, quadrature selection, caches). Its `u8` discriminants are part
//! of the public contract and never change.

use std::fmt;
use std::str::FromStr;

use crate::cell_error::ReferenceCellError;

/// The seven supported reference-cell shapes.
#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ShapeKind {
    /// 1D segment `[0, 1]`.
    Interval = 0,
    /// 2D simplex.
    Triangle = 1,
    /// 2D tensor-product cell.
    Quadrilateral = 2,
    /// 3D simplex.
    Tetrahedron = 3,
    /// 3D tensor-product cell.
    Hexahedron = 4,
    /// 3D pyramid over a square base.
    Pyramid = 5,
    /// 3D wedge: triangle extruded along z.
    Prism = 6,
}

impl ShapeKind {
    /// Every kind, in discriminant order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Interval,
        ShapeKind::Triangle,
        ShapeKind::Quadrilateral,
        ShapeKind::Tetrahedron,
        ShapeKind::Hexahedron,
        ShapeKind::Pyramid,
        ShapeKind::Prism,
    ];

    /// Returns the topological dimension of the cell.
    pub const fn dimension(self) -> usize {
        match self {
            ShapeKind::Interval => 1,
            ShapeKind::Triangle | ShapeKind::Quadrilateral => 2,
            ShapeKind::Tetrahedron
            | ShapeKind::Hexahedron
            | ShapeKind::Pyramid
            | ShapeKind::Prism => 3,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            ShapeKind::Interval => "interval",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Quadrilateral => "quadrilateral",
            ShapeKind::Tetrahedron => "tetrahedron",
            ShapeKind::Hexahedron => "hexahedron",
            ShapeKind::Pyramid => "pyramid",
            ShapeKind::Prism => "prism",
        }
    }

    /// The stable raw code of this kind.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for ShapeKind {
    type Error = ReferenceCellError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        ShapeKind::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(ReferenceCellError::InvalidShapeKind(code))
    }
}

impl FromStr for ShapeKind {
    type Err = ReferenceCellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ReferenceCellError::UnknownShapeName(s.to_owned()))
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
