use std::f64::consts::TAU;

use nalgebra::Rotation3;
use rand::Rng;
use tracing::debug;

use crate::error::{ParameterError, Result};
use crate::geometry::column_count;
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::mesh::Polyhedron;

/// Where the nubs sit around the circumference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NubAngle {
    /// Lined up with a solved maze, in degrees.
    Solved(f64),
    /// Any whole degree, drawn from the random source.
    Random,
}

/// Dimensions of the nubs on one part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NubParams {
    /// Radius of the wall the nubs stand on.
    pub radius: f64,
    /// `true` if the nubs point in towards the axis.
    pub inside: bool,
    /// Depth of the groove the nubs run in.
    pub maze_thickness: f64,
    /// Gap between this part's wall and the maze wall it runs against.
    pub clearance: f64,
    /// Extra radial gap at the nub tip.
    pub radial_clearance: f64,
    /// Height taken off the nub so it slides freely.
    pub axial_clearance: f64,
    pub step: f64,
    pub helix: usize,
    pub nubs: usize,
    /// Height of the part; nubs sit just under its rim.
    pub height: f64,
    pub park_vertical: bool,
    pub symmetric_cut: bool,
}

impl NubParams {
    /// # Errors
    ///
    /// Returns [`ParameterError`] if a length is not positive or the axial
    /// clearance eats the whole nub.
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [
            ("radius", self.radius),
            ("maze_thickness", self.maze_thickness),
            ("step", self.step),
        ] {
            if value < TOLERANCE {
                return Err(ParameterError::OutOfRange {
                    parameter,
                    value,
                    min: TOLERANCE,
                    max: f64::INFINITY,
                }
                .into());
            }
        }
        if self.axial_clearance >= self.step / 4.0 {
            return Err(ParameterError::OutOfRange {
                parameter: "axial_clearance",
                value: self.axial_clearance,
                min: 0.0,
                max: self.step / 4.0,
            }
            .into());
        }
        if self.nubs == 0 {
            return Err(ParameterError::Invalid("nubs must be at least 1".into()).into());
        }
        Ok(())
    }
}

/// Nubs of one part and the angle they were placed at.
#[derive(Debug, Clone, PartialEq)]
pub struct NubSolid {
    pub mesh: Polyhedron,
    /// Rotation of the first nub in degrees.
    pub angle: f64,
}

/// Builds the nubs that ride in the maze of the neighbouring part.
///
/// Each nub is a small ramped block, sheared with the helix so it follows
/// the groove, repeated `nubs` times around the axis.
pub struct MakeNubs {
    params: NubParams,
    angle: NubAngle,
}

impl MakeNubs {
    /// Creates a new `MakeNubs` operation.
    #[must_use]
    pub fn new(params: NubParams, angle: NubAngle) -> Self {
        Self { params, angle }
    }

    /// Executes the operation. The random source is only drawn from for
    /// [`NubAngle::Random`].
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or the groove is too
    /// small to hold a nub.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute<R: Rng>(&self, rng: &mut R) -> Result<NubSolid> {
        self.params.validate()?;
        let angle = match self.angle {
            NubAngle::Solved(angle) => angle,
            NubAngle::Random => {
                let angle = f64::from(rng.gen_range(0..360_u32));
                debug!(angle, "random nub angle");
                angle
            }
        };

        let nub = self.nub()?;
        let mut mesh = Polyhedron::new();
        for k in 0..self.params.nubs {
            let degrees = angle + 360.0 * k as f64 / self.params.nubs as f64;
            let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), degrees.to_radians());
            mesh.merge(Polyhedron {
                points: nub.points.iter().map(|p| rotation * p).collect(),
                faces: nub.faces.clone(),
            });
        }
        Ok(NubSolid { mesh, angle })
    }

    /// A single nub at angle zero.
    #[allow(clippy::cast_precision_loss)]
    fn nub(&self) -> Result<Polyhedron> {
        let p = &self.params;
        let side = if p.inside { -1.0 } else { 1.0 };
        let tip = p.radius + side * p.maze_thickness;
        let columns = column_count(tip + side * p.clearance, p.step, p.nubs);
        if columns < 3 {
            return Err(ParameterError::Invalid(format!(
                "no room for nubs at radius {}",
                p.radius
            ))
            .into());
        }

        let mut da = TAU / (columns * 4) as f64;
        let dz = p.step / 4.0 - p.axial_clearance;
        let my = p.step * da * 4.0 * p.helix as f64 / (p.radius * TAU);
        if p.inside {
            da = -da;
        }
        let a0 = -da * 1.5;
        let z0 = p.height - p.step / 2.0
            - if p.park_vertical { 0.0 } else { p.step / 8.0 }
            - dz * 1.5
            - my * 1.5;
        let skew = if p.symmetric_cut { 0.0 } else { p.step / 8.0 };

        let base = p.radius - side * p.radial_clearance;
        let top = tip - side * p.radial_clearance;
        let wall = p.radius - side * p.clearance;
        let mut points = Vec::with_capacity(32);
        for outer in [true, false] {
            for z in 0..4 {
                for x in 0..4 {
                    let middle = (1..=2).contains(&x) && (1..=2).contains(&z);
                    let r = match (outer, middle) {
                        (true, true) => top,
                        (true, false) => base,
                        (false, _) => wall,
                    };
                    let a = a0 + da * x as f64;
                    let lift = if (1..=2).contains(&z) { skew } else { 0.0 };
                    points.push(Point3::new(
                        r * a.sin(),
                        r * a.cos(),
                        z0 + z as f64 * dz + x as f64 * my + lift,
                    ));
                }
            }
        }
        Ok(Polyhedron {
            points,
            faces: nub_faces(),
        })
    }
}

/// Triangles across the outer face of a nub.
const NUB_CAP: [[usize; 3]; 18] = [
    [0, 1, 5],
    [0, 5, 4],
    [4, 5, 9],
    [4, 9, 8],
    [8, 9, 12],
    [9, 13, 12],
    [1, 2, 6],
    [1, 6, 5],
    [5, 6, 10],
    [5, 10, 9],
    [9, 10, 14],
    [9, 14, 13],
    [2, 3, 6],
    [3, 7, 6],
    [6, 7, 11],
    [6, 11, 10],
    [10, 11, 15],
    [10, 15, 14],
];

/// Triangles of one nub. Points `0..16` are the outer 4x4 grid, `16..32` the
/// matching points on the wall, both numbered `z * 4 + x`.
fn nub_faces() -> Vec<Vec<usize>> {
    let mut faces = Vec::with_capacity(60);
    for z in 0..3 {
        for x in 0..3 {
            let b = z * 4 + x;
            faces.push(vec![b + 20, b + 21, b + 17]);
            faces.push(vec![b + 20, b + 17, b + 16]);
        }
    }
    for z in 0..3 {
        let b = z * 4;
        faces.push(vec![b + 4, b + 20, b + 16]);
        faces.push(vec![b + 4, b + 16, b]);
        faces.push(vec![b + 23, b + 7, b + 3]);
        faces.push(vec![b + 23, b + 3, b + 19]);
    }
    for x in 0..3 {
        faces.push(vec![x + 28, x + 12, x + 13]);
        faces.push(vec![x + 28, x + 13, x + 29]);
        faces.push(vec![x, x + 16, x + 17]);
        faces.push(vec![x, x + 17, x + 1]);
    }
    faces.extend(NUB_CAP.iter().map(|t| t.to_vec()));
    faces
}
