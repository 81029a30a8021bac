use tracing::debug;

use crate::error::{ParameterError, Result};
use crate::geometry::{MazeLayout, RadialLayer, SLICES_PER_CELL};
use crate::math::{lerp, Point3, TOLERANCE};
use crate::mesh::Polyhedron;

/// Points in one ridge: a 4x4 grid, each with a backing and a front point.
const RIDGE_POINTS: usize = 32;

/// Builds the small ridge across the park cell that the nub has to click
/// over to reach the solved position, one per symmetric copy.
pub struct MakeParkRidge<'a> {
    layout: &'a MazeLayout,
    thickness: f64,
}

impl<'a> MakeParkRidge<'a> {
    /// Creates a new `MakeParkRidge` operation. `thickness` is how far the
    /// ridge rises from the groove floor.
    #[must_use]
    pub fn new(layout: &'a MazeLayout, thickness: f64) -> Self {
        Self { layout, thickness }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::OutOfRange`] unless the thickness is
    /// positive and no deeper than the groove.
    pub fn execute(&self) -> Result<Polyhedron> {
        let params = self.layout.params();
        if self.thickness < TOLERANCE || self.thickness > params.maze_thickness {
            return Err(ParameterError::OutOfRange {
                parameter: "park_thickness",
                value: self.thickness,
                min: TOLERANCE,
                max: params.maze_thickness,
            }
            .into());
        }

        let shape = self.layout.shape();
        let mut mesh = Polyhedron::new();
        for column in (0..shape.width).step_by(shape.copy_stride()) {
            mesh.merge(self.ridge(column));
        }
        debug!(
            ridges = shape.nubs,
            points = mesh.point_count(),
            "park ridge"
        );
        Ok(mesh)
    }

    #[allow(clippy::cast_precision_loss)]
    fn ridge(&self, column: usize) -> Polyhedron {
        let params = self.layout.params();
        let step = params.step;
        let dy = self.layout.column_rise();
        let vertical = params.park_vertical;
        let skew = if params.symmetric_cut { 0.0 } else { step / 8.0 };
        let count = self.layout.slice_count();
        let rise = self.thickness / params.maze_thickness;
        let first_slice = column * SLICES_PER_CELL + if vertical { 0 } else { 2 };
        let base_z = self.layout.origin_z() - dy * 1.5 / 4.0
            + (params.helix + 1) as f64 * step
            + if vertical {
                step / 8.0
            } else {
                dy / 2.0 - step * 3.0 / 8.0
            };

        let mut points = Vec::with_capacity(RIDGE_POINTS);
        for row in 0..4 {
            for col in 0..4 {
                let profile = self.layout.slices()[(first_slice + col) % count];
                let mut z = base_z + row as f64 * step / 4.0 + dy * col as f64 / 4.0;
                let raised = if vertical {
                    row == 1 || row == 2
                } else {
                    col == 1 || col == 2
                };
                let front = if raised {
                    lerp(&profile.at(RadialLayer::Recess), &profile.at(RadialLayer::Face), rise)
                } else {
                    if vertical {
                        z -= skew;
                    }
                    profile.at(RadialLayer::Recess)
                };
                let back = profile.at(RadialLayer::Back);
                points.push(Point3::new(back.x, back.y, z));
                points.push(Point3::new(front.x, front.y, z));
            }
        }
        Polyhedron {
            points,
            faces: ridge_faces(),
        }
    }
}

/// Triangles of one ridge block. Points are numbered
/// `(row * 4 + col) * 2 + side` with side 0 at the back.
fn ridge_faces() -> Vec<Vec<usize>> {
    let mut faces = Vec::with_capacity(60);
    let mut quad = |a: usize, b: usize, c: usize, d: usize| {
        faces.push(vec![a, b, c]);
        faces.push(vec![a, c, d]);
    };
    for x in (0..6).step_by(2) {
        quad(x, x + 1, x + 3, x + 2);
        for y in (0..24).step_by(8) {
            quad(x + y, x + 2 + y, x + 10 + y, x + 8 + y);
            quad(x + 1 + y, x + 9 + y, x + 11 + y, x + 3 + y);
        }
        quad(x + 25, x + 24, x + 26, x + 27);
    }
    for y in (0..24).step_by(8) {
        quad(y, y + 8, y + 9, y + 1);
        quad(y + 6, y + 7, y + 15, y + 14);
    }
    faces
}
