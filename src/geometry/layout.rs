use tracing::debug;

use crate::error::{MazeError, Result};
use crate::grid::{GridShape, MazeGrid};
use crate::math::{Point3, TOLERANCE};

use super::layer::{column_count, CellLevel, LayerParams, RadialLayer, SliceProfile};

/// Angular slices per maze column.
pub const SLICES_PER_CELL: usize = 4;

/// Maps maze cells of one layer to physical coordinates.
///
/// Works out the grid resolution that fits the wall, which cells fall inside
/// the usable height band, and where every point of a cell or a ring lands.
#[derive(Debug, Clone)]
pub struct MazeLayout {
    params: LayerParams,
    shape: GridShape,
    slices: Vec<SliceProfile>,
    /// Height of the centre of row 0 at column 0.
    y0: f64,
    /// Rise per column from the helix.
    dy: f64,
}

impl MazeLayout {
    /// Lays out a maze on the wall described by `params`.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::GridTooSmall`] if fewer than three columns or no
    /// full row fit, or any error from [`LayerParams::validate`] and
    /// [`GridShape::validate`].
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn new(params: &LayerParams) -> Result<Self> {
        params.validate()?;
        let step = params.step;
        let width = column_count(params.recess_radius(), step, params.nubs);
        let park_drop = if params.park_vertical { step / 4.0 } else { 0.0 };
        let usable = params.height - params.base - params.top_margin - park_drop - step / 8.0;
        let rows = (usable / step).floor().max(0.0) as usize;
        if width < 3 || rows < 1 {
            return Err(MazeError::GridTooSmall {
                width,
                height: rows,
            }
            .into());
        }

        let shape = GridShape {
            width,
            height: rows + 2 + params.helix,
            helix: params.helix,
            nubs: params.nubs,
        };
        shape.validate()?;
        debug!(
            inside = params.maze_inside,
            width,
            rows,
            "maze layout"
        );

        let count = width * SLICES_PER_CELL;
        let slices = (0..count)
            .map(|s| SliceProfile::new(params, s, count))
            .collect();
        Ok(Self {
            params: *params,
            shape,
            slices,
            y0: params.base + step / 2.0 - step * (params.helix + 1) as f64 + step / 8.0,
            dy: step * params.helix as f64 / width as f64,
        })
    }

    #[must_use]
    pub fn params(&self) -> &LayerParams {
        &self.params
    }

    #[must_use]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    #[must_use]
    pub fn slice_count(&self) -> usize {
        self.slices.len()
    }

    #[must_use]
    pub fn slices(&self) -> &[SliceProfile] {
        &self.slices
    }

    /// Height of the centre of row 0 at column 0.
    #[must_use]
    pub fn origin_z(&self) -> f64 {
        self.y0
    }

    /// Rise per column from the helix.
    #[must_use]
    pub fn column_rise(&self) -> f64 {
        self.dy
    }

    /// Whether the centre of cell `(x, y)` lies inside the usable band.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn cell_in_band(&self, x: usize, y: usize) -> bool {
        let step = self.params.step;
        let z = step * y as f64 + self.y0 + self.dy * x as f64;
        let low = self.params.base + step / 2.0 + step / 8.0;
        let high = self.params.height - step / 2.0 - self.params.top_margin - step / 8.0;
        z >= low - TOLERANCE && z <= high + TOLERANCE
    }

    /// Creates an empty grid with every cell outside the band invalidated.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid shape is rejected.
    pub fn build_grid(&self) -> Result<MazeGrid> {
        let mut grid = MazeGrid::new(self.shape)?;
        grid.restrict(|x, y| self.cell_in_band(x, y));
        Ok(grid)
    }

    /// Height of a cell point on row `y`, slice `slice` and `level`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn cell_z(&self, y: usize, slice: usize, level: CellLevel) -> f64 {
        let per_slice = self.dy / SLICES_PER_CELL as f64;
        self.y0 - 1.5 * per_slice
            + y as f64 * self.params.step
            + slice as f64 * per_slice
            + level.offset(self.params.step, self.params.symmetric_cut)
    }

    /// Point of a cell on row `y` at the given slice and level.
    ///
    /// # Panics
    ///
    /// Panics if `slice` is not below [`MazeLayout::slice_count`].
    #[must_use]
    pub fn cell_point(&self, y: usize, slice: usize, level: CellLevel) -> Point3 {
        self.ring_point(slice, level.layer(), self.cell_z(y, slice, level))
    }

    /// Point on `layer` at the given slice and height.
    ///
    /// # Panics
    ///
    /// Panics if `slice` is not below [`MazeLayout::slice_count`].
    #[must_use]
    pub fn ring_point(&self, slice: usize, layer: RadialLayer, z: f64) -> Point3 {
        let p = self.slices[slice].at(layer);
        Point3::new(p.x, p.y, z)
    }

    /// Height of the face ring at the top of the wall.
    #[must_use]
    pub fn rim_z(&self) -> f64 {
        if self.params.flush_rim {
            self.params.height
        } else {
            self.params.height - self.params.top_margin
        }
    }

    /// Most points a single slice can collect over a full build.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn slice_capacity(&self) -> usize {
        (self.params.height / (self.params.step / 4.0)).floor().max(0.0) as usize + 10
    }

    /// Angle in degrees of the centre of column `x`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn column_angle(&self, x: usize) -> f64 {
        360.0 * x as f64 / self.shape.width as f64
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PuzzleboxError;
    use crate::geometry::sample_layer;
    use approx::assert_relative_eq;

    #[test]
    fn sample_layer_resolution() {
        let layout = MazeLayout::new(&sample_layer()).unwrap();
        let shape = layout.shape();
        assert_eq!(shape.width, 24);
        assert_eq!(shape.height, 10);
        assert_eq!(layout.slice_count(), 96);
        assert_eq!(layout.slice_capacity(), 58);
    }

    #[test]
    fn band_keeps_inner_rows() {
        let layout = MazeLayout::new(&sample_layer()).unwrap();
        let grid = layout.build_grid().unwrap();
        for x in 0..24 {
            assert!(!grid.is_valid(x, 0));
            assert!(!grid.is_valid(x, 9));
            for y in 1..9 {
                assert!(grid.is_valid(x, y));
            }
        }
        assert_eq!(grid.valid_count(), 192);
    }

    #[test]
    fn helix_band_slopes() {
        let params = LayerParams {
            helix: 3,
            ..sample_layer()
        };
        let layout = MazeLayout::new(&params).unwrap();
        assert_eq!(layout.shape().height, 13);
        // Column 0 starts at row helix + 1 and the band climbs three rows per turn.
        assert!(!layout.cell_in_band(0, 3));
        assert!(layout.cell_in_band(0, 4));
        assert!(layout.cell_in_band(23, 3));
    }

    #[test]
    fn narrow_wall_is_too_small() {
        let params = LayerParams {
            radius: 2.4,
            maze_thickness: 2.0,
            back_thickness: 0.2,
            ..sample_layer()
        };
        let err = MazeLayout::new(&params).unwrap_err();
        assert!(matches!(
            err,
            PuzzleboxError::Maze(MazeError::GridTooSmall { width: 0, .. })
        ));
    }

    #[test]
    fn short_wall_is_too_small() {
        let params = LayerParams {
            height: 13.0,
            ..sample_layer()
        };
        let err = MazeLayout::new(&params).unwrap_err();
        assert!(matches!(
            err,
            PuzzleboxError::Maze(MazeError::GridTooSmall { height: 0, .. })
        ));
    }

    #[test]
    fn cell_points_stack_by_level() {
        let layout = MazeLayout::new(&sample_layer()).unwrap();
        let z: Vec<f64> = CellLevel::ALL
            .iter()
            .map(|&l| layout.cell_point(1, 4, l).z)
            .collect();
        assert!(z.windows(2).all(|w| w[0] < w[1]));
        // Row 1 centre: y0 + step with no helix.
        assert_relative_eq!(layout.cell_z(1, 4, CellLevel::FaceHigh), 13.0);
        let recess = layout.cell_point(1, 4, CellLevel::RecessLow);
        assert_relative_eq!(recess.coords.xy().norm(), 12.0, epsilon = 1e-9);
    }

    #[test]
    fn rim_height_follows_flush_flag() {
        let layout = MazeLayout::new(&sample_layer()).unwrap();
        assert_relative_eq!(layout.rim_z(), 35.5);
        let flush = MazeLayout::new(&LayerParams {
            flush_rim: true,
            ..sample_layer()
        })
        .unwrap();
        assert_relative_eq!(flush.rim_z(), 36.5);
    }
}
