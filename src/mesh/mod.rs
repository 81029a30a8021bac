//! Point and face output, and the slice-by-slice stitcher that builds it.

pub mod builder;
pub mod slice;

pub use builder::MeshBuilder;
pub use slice::AngularSlice;

use crate::math::Point3;

/// Which side of a slice a point bounds.
///
/// Stitching only joins runs of points that lie on the same surface as the
/// boundary being replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// The wall face, including rings and backing.
    Face,
    /// The groove floor.
    Recess,
}

/// A point index tagged with its surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointRef {
    pub index: usize,
    pub surface: Surface,
}

impl PointRef {
    #[must_use]
    pub fn face(index: usize) -> Self {
        Self {
            index,
            surface: Surface::Face,
        }
    }

    #[must_use]
    pub fn recess(index: usize) -> Self {
        Self {
            index,
            surface: Surface::Recess,
        }
    }
}

/// A closed solid as a point list and faces of point indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyhedron {
    pub points: Vec<Point3>,
    /// Each face lists point indices in winding order.
    pub faces: Vec<Vec<usize>>,
}

impl Polyhedron {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Appends `other`, renumbering its faces after the existing points.
    pub fn merge(&mut self, other: Polyhedron) {
        let offset = self.points.len();
        self.points.extend(other.points);
        self.faces.extend(
            other
                .faces
                .into_iter()
                .map(|face| face.into_iter().map(|i| i + offset).collect()),
        );
    }
}
