use std::f64::consts::TAU;

use crate::error::{ParameterError, Result};
use crate::math::{polar, Point2, TOLERANCE};

/// Physical description of one maze layer: the cylindrical wall of a part
/// that carries the groove.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerParams {
    /// Radius of the wall face the maze is cut into.
    pub radius: f64,
    /// `true` if the maze is cut into the inside of the wall.
    pub maze_inside: bool,
    /// Depth of the groove.
    pub maze_thickness: f64,
    /// Solid material behind the groove floor.
    pub back_thickness: f64,
    /// Pitch of one maze cell, both around and along the wall.
    pub step: f64,
    /// Rows climbed per turn.
    pub helix: usize,
    pub nubs: usize,
    /// Height at which the usable band starts.
    pub base: f64,
    /// Overall height of the wall.
    pub height: f64,
    /// Material left above the band at the rim.
    pub top_margin: f64,
    /// Bring the face ring all the way up to `height` instead of stopping
    /// `top_margin` below it.
    pub flush_rim: bool,
    /// Height of the bottom rings.
    pub floor_z: f64,
    pub park_vertical: bool,
    /// Drop the shear that makes the groove printable without support.
    pub symmetric_cut: bool,
}

impl LayerParams {
    /// Checks the physical dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if a length is not positive, the band has
    /// no height or `nubs` is zero.
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [
            ("radius", self.radius),
            ("maze_thickness", self.maze_thickness),
            ("back_thickness", self.back_thickness),
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
        if self.height <= self.base {
            return Err(ParameterError::Invalid(format!(
                "layer height {} is not above its base {}",
                self.height, self.base
            ))
            .into());
        }
        if self.nubs == 0 {
            return Err(ParameterError::Invalid("nubs must be at least 1".into()).into());
        }
        Ok(())
    }

    /// Radius of the groove floor.
    #[must_use]
    pub fn recess_radius(&self) -> f64 {
        self.radius + self.inward_sign() * self.maze_thickness
    }

    /// Radius of the solid backing behind the groove.
    #[must_use]
    pub fn back_radius(&self) -> f64 {
        self.recess_radius() + self.inward_sign() * self.back_thickness
    }

    /// `+1` when the groove is cut outward from an inside face.
    fn inward_sign(&self) -> f64 {
        if self.maze_inside {
            1.0
        } else {
            -1.0
        }
    }
}

/// Number of `step`-wide columns that fit around `radius`, rounded down to a
/// multiple of `nubs`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn column_count(radius: f64, step: f64, nubs: usize) -> usize {
    if nubs == 0 || radius <= 0.0 || step <= 0.0 {
        return 0;
    }
    let columns = (radius * TAU / step).floor() as usize;
    columns / nubs * nubs
}

/// One of the three concentric surfaces of a maze wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadialLayer {
    /// Solid backing, the far side of the wall.
    Back,
    /// Groove floor.
    Recess,
    /// Wall face the groove is cut into.
    Face,
}

/// Planar positions of the three layers at one angular slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceProfile {
    pub angle: f64,
    pub back: Point2,
    pub recess: Point2,
    pub face: Point2,
}

impl SliceProfile {
    /// Profile of slice `index` out of `count`.
    ///
    /// Slices are offset by one and a half so cell centres fall between slice
    /// lines. An outside maze runs the other way round, which keeps the
    /// winding consistent once the layers swap radial order.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(params: &LayerParams, index: usize, count: usize) -> Self {
        let mut angle = TAU * (index as f64 - 1.5) / count as f64;
        if !params.maze_inside {
            angle = TAU - angle;
        }
        Self {
            angle,
            back: polar(params.back_radius(), angle),
            recess: polar(params.recess_radius(), angle),
            face: polar(params.radius, angle),
        }
    }

    #[must_use]
    pub fn at(&self, layer: RadialLayer) -> Point2 {
        match layer {
            RadialLayer::Back => self.back,
            RadialLayer::Recess => self.recess,
            RadialLayer::Face => self.face,
        }
    }
}

/// The four heights at which a cell emits points, bottom to top.
///
/// The outer two sit on the wall face and bound the groove; the inner two sit
/// on the groove floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellLevel {
    FaceLow,
    RecessLow,
    RecessHigh,
    FaceHigh,
}

impl CellLevel {
    pub const ALL: [CellLevel; 4] = [
        CellLevel::FaceLow,
        CellLevel::RecessLow,
        CellLevel::RecessHigh,
        CellLevel::FaceHigh,
    ];

    #[must_use]
    pub fn layer(self) -> RadialLayer {
        match self {
            CellLevel::FaceLow | CellLevel::FaceHigh => RadialLayer::Face,
            CellLevel::RecessLow | CellLevel::RecessHigh => RadialLayer::Recess,
        }
    }

    /// Height relative to the cell centre. Recess levels are sheared down so
    /// the groove roof slopes.
    #[must_use]
    pub fn offset(self, step: f64, symmetric_cut: bool) -> f64 {
        let m = step / 8.0;
        let skew = if symmetric_cut { 0.0 } else { m };
        match self {
            CellLevel::FaceLow => -3.0 * m,
            CellLevel::RecessLow => -m - skew,
            CellLevel::RecessHigh => m - skew,
            CellLevel::FaceHigh => 3.0 * m,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::sample_layer as outside_layer;
    use approx::assert_relative_eq;

    #[test]
    fn radii_step_inward_for_outside_maze() {
        let p = outside_layer();
        assert_relative_eq!(p.recess_radius(), 12.0);
        assert_relative_eq!(p.back_radius(), 10.8);
    }

    #[test]
    fn radii_step_outward_for_inside_maze() {
        let p = LayerParams {
            maze_inside: true,
            ..outside_layer()
        };
        assert_relative_eq!(p.recess_radius(), 16.0);
        assert_relative_eq!(p.back_radius(), 17.2);
    }

    #[test]
    fn column_count_rounds_to_nubs() {
        // 12 * 2pi / 3 = 25.13
        assert_eq!(column_count(12.0, 3.0, 3), 24);
        assert_eq!(column_count(12.0, 3.0, 2), 24);
        assert_eq!(column_count(12.0, 3.0, 1), 25);
        assert_eq!(column_count(12.0, 3.0, 0), 0);
        assert_eq!(column_count(-1.0, 3.0, 1), 0);
    }

    #[test]
    fn profile_points_share_angle() {
        let p = outside_layer();
        let s = SliceProfile::new(&p, 7, 96);
        for (layer, r) in [
            (RadialLayer::Back, 10.8),
            (RadialLayer::Recess, 12.0),
            (RadialLayer::Face, 14.0),
        ] {
            let q = s.at(layer);
            assert_relative_eq!(q.coords.norm(), r, epsilon = 1e-9);
            assert_relative_eq!(q.x.atan2(q.y).rem_euclid(TAU), s.angle.rem_euclid(TAU), epsilon = 1e-9);
        }
    }

    #[test]
    fn outside_profile_runs_clockwise() {
        let outside = outside_layer();
        let inside = LayerParams {
            maze_inside: true,
            ..outside
        };
        let a = SliceProfile::new(&outside, 5, 96).angle;
        let b = SliceProfile::new(&inside, 5, 96).angle;
        assert_relative_eq!(a + b, TAU, epsilon = 1e-12);
    }

    #[test]
    fn levels_are_ordered_and_skewed() {
        let offsets: Vec<f64> = CellLevel::ALL.iter().map(|l| l.offset(3.0, false)).collect();
        assert_relative_eq!(offsets[0], -1.125);
        assert_relative_eq!(offsets[1], -0.75);
        assert_relative_eq!(offsets[2], 0.0);
        assert_relative_eq!(offsets[3], 1.125);
        assert_relative_eq!(CellLevel::RecessLow.offset(3.0, true), -0.375);
        assert_eq!(CellLevel::RecessHigh.layer(), RadialLayer::Recess);
    }

    #[test]
    fn validate_rejects_flat_layer() {
        let p = LayerParams {
            height: 5.0,
            ..outside_layer()
        };
        assert!(p.validate().is_err());
        let p = LayerParams {
            step: 0.0,
            ..outside_layer()
        };
        assert!(p.validate().is_err());
        assert!(outside_layer().validate().is_ok());
    }
}
