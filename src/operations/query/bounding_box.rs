use crate::error::{ParameterError, Result};
use crate::math::Point3;
use crate::mesh::Polyhedron;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Largest distance of the box from the z axis, measured in the xy plane.
    #[must_use]
    pub fn max_radius(&self) -> f64 {
        let x = self.min.x.abs().max(self.max.x.abs());
        let y = self.min.y.abs().max(self.max.y.abs());
        x.hypot(y)
    }
}

/// Computes the axis-aligned bounding box of a polyhedron.
pub struct BoundingBox<'a> {
    mesh: &'a Polyhedron,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(mesh: &'a Polyhedron) -> Self {
        Self { mesh }
    }

    /// Executes the query, returning the AABB.
    ///
    /// # Errors
    ///
    /// Returns an error if the polyhedron has no points.
    pub fn execute(&self) -> Result<Aabb> {
        let mut points = self.mesh.points.iter();
        let first = points
            .next()
            .ok_or_else(|| ParameterError::Invalid("bounding box of an empty mesh".into()))?;
        Ok(points.fold(
            Aabb {
                min: *first,
                max: *first,
            },
            |acc, p| Aabb {
                min: acc.min.inf(p),
                max: acc.max.sup(p),
            },
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn box_spans_all_points() {
        let mesh = Polyhedron {
            points: vec![
                Point3::new(1.0, -2.0, 3.0),
                Point3::new(-1.0, 4.0, 0.5),
                Point3::new(0.0, 0.0, 7.0),
            ],
            faces: vec![vec![0, 1, 2]],
        };
        let aabb = BoundingBox::new(&mesh).execute().unwrap();
        assert_relative_eq!(aabb.min, Point3::new(-1.0, -2.0, 0.5));
        assert_relative_eq!(aabb.max, Point3::new(1.0, 4.0, 7.0));
    }

    #[test]
    fn empty_mesh_has_no_box() {
        assert!(BoundingBox::new(&Polyhedron::new()).execute().is_err());
    }
}
