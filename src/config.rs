//! Box-wide settings and the per-part parameters derived from them.

use crate::error::{ParameterError, PuzzleboxError, Result};
use crate::geometry::LayerParams;
use crate::maze::{MazeParams, MazePattern, ParkStyle};
use crate::math::TOLERANCE;
use crate::operations::creation::NubParams;

/// Settings shared by every part of a puzzle box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PuzzleboxConfig {
    /// Maze cell pitch.
    pub step: f64,
    /// Groove depth.
    pub maze_thickness: f64,
    pub wall_thickness: f64,
    /// Radial gap between neighbouring parts.
    pub clearance: f64,
    pub nub_radial_clearance: f64,
    pub nub_axial_clearance: f64,
    /// Height of the ridge across the park cell, `0` for none.
    pub park_thickness: f64,
    pub top_margin: f64,
    pub helix: usize,
    pub nubs: usize,
    pub complexity: i32,
    pub park_vertical: bool,
    pub symmetric_cut: bool,
    pub test_pattern: bool,
    /// Carve the mark beside the park point of outside mazes.
    pub mark: bool,
    /// Parts alternate between inside and outside mazes.
    pub flip: bool,
    /// The base of each part covers the rim of the part inside it.
    pub base_wide: bool,
}

impl Default for PuzzleboxConfig {
    fn default() -> Self {
        Self {
            step: 3.0,
            maze_thickness: 2.0,
            wall_thickness: 1.2,
            clearance: 0.4,
            nub_radial_clearance: 0.1,
            nub_axial_clearance: 0.2,
            park_thickness: 0.7,
            top_margin: 1.0,
            helix: 3,
            nubs: 3,
            complexity: 5,
            park_vertical: false,
            symmetric_cut: false,
            test_pattern: false,
            mark: true,
            flip: false,
            base_wide: false,
        }
    }
}

/// Dimensions of one part, supplied by whoever stacks the parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartDimensions {
    /// Radius of the wall face carrying the maze.
    pub radius: f64,
    pub maze_inside: bool,
    /// Height at which the maze band starts.
    pub base: f64,
    pub height: f64,
    /// Height of the floor the wall stands on.
    pub floor_z: f64,
    /// The outermost part, whose inside maze is backed only by clearance.
    pub outermost: bool,
    /// The part stands on the base of the part inside it.
    pub stacked: bool,
}

impl PuzzleboxConfig {
    /// Adjusts the nub count so the helix can be shared between nubs.
    ///
    /// With a helix, a nub count between one and the helix becomes half the
    /// helix where that is even and large enough, otherwise the helix
    /// itself. More nubs than the helix are cut back to the helix.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let helix = self.helix;
        if helix > 0 && self.nubs > 1 && self.nubs < helix {
            self.nubs = if helix % 2 == 0 && self.nubs <= helix / 2 {
                helix / 2
            } else {
                helix
            };
        }
        if helix > 0 && self.nubs > helix {
            self.nubs = helix;
        }
        if self.nubs == 0 {
            self.nubs = 1;
        }
        self
    }

    /// # Errors
    ///
    /// Returns [`ParameterError`] for non-positive lengths, negative
    /// clearances, a park ridge deeper than the groove, or a complexity
    /// outside `-10..=10`.
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [
            ("step", self.step),
            ("maze_thickness", self.maze_thickness),
            ("wall_thickness", self.wall_thickness),
        ] {
            if value < TOLERANCE {
                return Err(out_of_range(parameter, value, TOLERANCE, f64::INFINITY));
            }
        }
        for (parameter, value) in [
            ("clearance", self.clearance),
            ("top_margin", self.top_margin),
            ("nub_axial_clearance", self.nub_axial_clearance),
        ] {
            if value < 0.0 {
                return Err(out_of_range(parameter, value, 0.0, f64::INFINITY));
            }
        }
        if self.park_thickness < 0.0 || self.park_thickness > self.maze_thickness {
            return Err(out_of_range(
                "park_thickness",
                self.park_thickness,
                0.0,
                self.maze_thickness,
            ));
        }
        if self.nubs == 0 {
            return Err(ParameterError::Invalid("nubs must be at least 1".into()).into());
        }
        self.maze_params(false).validate()
    }

    /// Layer of the maze cut into the wall of `part`.
    #[must_use]
    pub fn layer_params(&self, part: &PartDimensions) -> LayerParams {
        let back_thickness = if part.maze_inside && part.outermost {
            self.clearance + 0.01
        } else {
            self.wall_thickness
        };
        LayerParams {
            radius: part.radius,
            maze_inside: part.maze_inside,
            maze_thickness: self.maze_thickness,
            back_thickness,
            step: self.step,
            helix: self.helix,
            nubs: self.nubs,
            base: part.base,
            height: part.height,
            top_margin: self.top_margin,
            flush_rim: self.base_wide && !part.maze_inside && part.stacked,
            floor_z: part.floor_z,
            park_vertical: self.park_vertical,
            symmetric_cut: self.symmetric_cut,
        }
    }

    /// Maze settings for an inside or outside maze.
    #[must_use]
    pub fn maze_params(&self, maze_inside: bool) -> MazeParams {
        MazeParams {
            complexity: self.complexity,
            park: if self.park_vertical {
                ParkStyle::Vertical
            } else {
                ParkStyle::Horizontal
            },
            mark: self.mark && !maze_inside,
            align_exit: self.flip && !maze_inside,
            pattern: if self.test_pattern {
                MazePattern::Test
            } else {
                MazePattern::Random
            },
        }
    }

    /// Nubs standing on a wall of `radius` and running in the neighbouring
    /// part's maze.
    #[must_use]
    pub fn nub_params(&self, radius: f64, inside: bool, height: f64) -> NubParams {
        NubParams {
            radius,
            inside,
            maze_thickness: self.maze_thickness,
            clearance: self.clearance,
            radial_clearance: self.nub_radial_clearance,
            axial_clearance: self.nub_axial_clearance,
            step: self.step,
            helix: self.helix,
            nubs: self.nubs,
            height,
            park_vertical: self.park_vertical,
            symmetric_cut: self.symmetric_cut,
        }
    }
}

fn out_of_range(parameter: &'static str, value: f64, min: f64, max: f64) -> PuzzleboxError {
    ParameterError::OutOfRange {
        parameter,
        value,
        min,
        max,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn with_nubs(helix: usize, nubs: usize) -> usize {
        PuzzleboxConfig {
            helix,
            nubs,
            ..PuzzleboxConfig::default()
        }
        .normalized()
        .nubs
    }

    #[test]
    fn defaults_validate() {
        let config = PuzzleboxConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.normalized(), config);
    }

    #[test]
    fn nubs_follow_helix() {
        assert_eq!(with_nubs(3, 2), 3);
        assert_eq!(with_nubs(4, 2), 2);
        assert_eq!(with_nubs(6, 2), 3);
        assert_eq!(with_nubs(6, 4), 6);
        assert_eq!(with_nubs(3, 5), 3);
        assert_eq!(with_nubs(5, 1), 1);
        assert_eq!(with_nubs(0, 4), 4);
        assert_eq!(with_nubs(0, 0), 1);
    }

    #[test]
    fn bad_values_are_rejected() {
        let bad = [
            PuzzleboxConfig {
                step: 0.0,
                ..PuzzleboxConfig::default()
            },
            PuzzleboxConfig {
                clearance: -0.1,
                ..PuzzleboxConfig::default()
            },
            PuzzleboxConfig {
                park_thickness: 3.0,
                ..PuzzleboxConfig::default()
            },
            PuzzleboxConfig {
                complexity: -11,
                ..PuzzleboxConfig::default()
            },
        ];
        for config in bad {
            assert!(config.validate().is_err(), "{config:?}");
        }
    }

    #[test]
    fn outermost_inside_maze_is_backed_by_clearance() {
        let config = PuzzleboxConfig::default();
        let part = PartDimensions {
            radius: 20.0,
            maze_inside: true,
            base: 10.0,
            height: 40.0,
            floor_z: 1.2,
            outermost: true,
            stacked: true,
        };
        assert_relative_eq!(config.layer_params(&part).back_thickness, 0.41);
        let inner = PartDimensions {
            outermost: false,
            ..part
        };
        assert_relative_eq!(config.layer_params(&inner).back_thickness, 1.2);
    }

    #[test]
    fn flush_rim_only_on_stacked_outside_mazes() {
        let config = PuzzleboxConfig {
            base_wide: true,
            ..PuzzleboxConfig::default()
        };
        let part = PartDimensions {
            radius: 14.0,
            maze_inside: false,
            base: 10.0,
            height: 36.5,
            floor_z: 1.2,
            outermost: false,
            stacked: true,
        };
        assert!(config.layer_params(&part).flush_rim);
        let first = PartDimensions {
            stacked: false,
            ..part
        };
        assert!(!config.layer_params(&first).flush_rim);
    }

    #[test]
    fn inside_mazes_skip_mark_and_alignment() {
        let config = PuzzleboxConfig {
            flip: true,
            park_vertical: true,
            ..PuzzleboxConfig::default()
        };
        let outside = config.maze_params(false);
        assert!(outside.mark && outside.align_exit);
        assert_eq!(outside.park, ParkStyle::Vertical);
        let inside = config.maze_params(true);
        assert!(!inside.mark && !inside.align_exit);
    }
}
