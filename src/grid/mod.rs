pub mod addressing;
pub mod directions;

pub use addressing::CellGroup;
pub use directions::{Direction, Directions};

use crate::error::{MazeError, Result};

/// Dimensions and symmetry of a cylindrical maze grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    /// Angular resolution `W` (cells around the circumference).
    pub width: usize,
    /// Axial resolution `H` (rows, including padding below and above the band).
    pub height: usize,
    /// Rows the grid climbs per full turn.
    pub helix: usize,
    /// Rotational symmetry count.
    pub nubs: usize,
}

impl GridShape {
    /// Checks the shape can carry a symmetric maze.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::GridTooSmall`] for `W < 3` or `H < 1`,
    /// [`MazeError::AsymmetricWidth`] when `W` is not a multiple of `nubs`, and
    /// [`MazeError::HelixMismatch`] when the helix cannot be shared evenly
    /// between the symmetric copies.
    pub fn validate(&self) -> Result<()> {
        if self.width < 3 || self.height < 1 {
            return Err(MazeError::GridTooSmall {
                width: self.width,
                height: self.height,
            }
            .into());
        }
        if self.nubs == 0 || self.width % self.nubs != 0 {
            return Err(MazeError::AsymmetricWidth {
                width: self.width,
                nubs: self.nubs,
            }
            .into());
        }
        if self.nubs > 1 && self.helix % self.nubs != 0 {
            return Err(MazeError::HelixMismatch {
                helix: self.helix,
                nubs: self.nubs,
            }
            .into());
        }
        Ok(())
    }

    /// Columns between two symmetric copies of a cell.
    #[must_use]
    pub fn copy_stride(&self) -> usize {
        self.width / self.nubs
    }
}

/// Cell storage for one maze build.
///
/// Each physical cell carries its own open-edge set and a validity flag.
/// Queries that must respect rotational symmetry go through
/// [`MazeGrid::group`].
#[derive(Debug, Clone)]
pub struct MazeGrid {
    shape: GridShape,
    open: Vec<Directions>,
    valid: Vec<bool>,
}

impl MazeGrid {
    /// Creates a grid with every cell valid and closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape fails [`GridShape::validate`].
    pub fn new(shape: GridShape) -> Result<Self> {
        shape.validate()?;
        let cells = shape.width * shape.height;
        Ok(Self {
            shape,
            open: vec![Directions::NONE; cells],
            valid: vec![true; cells],
        })
    }

    /// Grid dimensions.
    #[must_use]
    pub fn shape(&self) -> &GridShape {
        &self.shape
    }

    /// Angular resolution `W`.
    #[must_use]
    pub fn width(&self) -> usize {
        self.shape.width
    }

    /// Axial resolution `H`.
    #[must_use]
    pub fn height(&self) -> usize {
        self.shape.height
    }

    /// Marks every cell for which `keep` returns `false` as invalid.
    pub fn restrict<F>(&mut self, keep: F)
    where
        F: Fn(usize, usize) -> bool,
    {
        for y in 0..self.shape.height {
            for x in 0..self.shape.width {
                if !keep(x, y) {
                    let i = self.slot(x, y);
                    self.valid[i] = false;
                }
            }
        }
    }

    /// Validity of a single physical cell; `false` outside the grid.
    #[must_use]
    pub fn is_valid(&self, x: isize, y: isize) -> bool {
        self.index(x, y).is_some_and(|i| self.valid[i])
    }

    /// Open edges stored on a single physical cell, ignoring symmetry.
    #[must_use]
    pub fn open(&self, x: isize, y: isize) -> Directions {
        self.index(x, y).map_or(Directions::NONE, |i| self.open[i])
    }

    /// Opens `dirs` on the physical cell at `(x, y)`; cells outside the grid
    /// are ignored.
    pub fn open_edges(&mut self, x: isize, y: isize, dirs: impl Into<Directions>) {
        if let Some(i) = self.index(x, y) {
            self.open[i] |= dirs.into();
        }
    }

    /// Opens the edge from `(x, y)` towards `dir` and the matching edge on the
    /// neighbour, returning the neighbour's wrapped coordinates.
    pub fn connect(&mut self, x: isize, y: isize, dir: Direction) -> (isize, isize) {
        let (dx, dy) = dir.offset();
        let (nx, ny) = self.wrap(x + dx, y + dy);
        self.open_edges(x, y, dir);
        self.open_edges(nx, ny, dir.opposite());
        (nx, ny)
    }

    /// Number of physical cells that are valid.
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.valid.iter().filter(|v| **v).count()
    }

    fn slot(&self, x: usize, y: usize) -> usize {
        y * self.shape.width + x
    }

    fn index(&self, x: isize, y: isize) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.shape.width && y < self.shape.height).then(|| self.slot(x, y))
    }
}

/// Grid dimensions are bounded by allocation size, so they always fit.
#[allow(clippy::cast_possible_wrap)]
pub(crate) fn signed(v: usize) -> isize {
    v as isize
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PuzzleboxError;

    fn shape(width: usize, height: usize, helix: usize, nubs: usize) -> GridShape {
        GridShape {
            width,
            height,
            helix,
            nubs,
        }
    }

    #[test]
    fn too_narrow_grid_fails() {
        let err = MazeGrid::new(shape(2, 10, 0, 1)).unwrap_err();
        assert!(matches!(
            err,
            PuzzleboxError::Maze(MazeError::GridTooSmall { width: 2, .. })
        ));
    }

    #[test]
    fn zero_height_grid_fails() {
        let err = MazeGrid::new(shape(24, 0, 0, 3)).unwrap_err();
        assert!(matches!(
            err,
            PuzzleboxError::Maze(MazeError::GridTooSmall { height: 0, .. })
        ));
    }

    #[test]
    fn width_must_share_nubs() {
        let err = MazeGrid::new(shape(25, 10, 0, 3)).unwrap_err();
        assert!(matches!(
            err,
            PuzzleboxError::Maze(MazeError::AsymmetricWidth { .. })
        ));
    }

    #[test]
    fn helix_must_share_nubs() {
        let err = MazeGrid::new(shape(24, 10, 4, 3)).unwrap_err();
        assert!(matches!(
            err,
            PuzzleboxError::Maze(MazeError::HelixMismatch { .. })
        ));
        assert!(MazeGrid::new(shape(24, 10, 4, 2)).is_ok());
        assert!(MazeGrid::new(shape(24, 10, 5, 1)).is_ok());
    }

    #[test]
    fn restrict_marks_cells_invalid() {
        let mut grid = MazeGrid::new(shape(6, 4, 0, 1)).unwrap();
        grid.restrict(|_, y| y > 0);
        assert!(!grid.is_valid(3, 0));
        assert!(grid.is_valid(3, 1));
        assert!(!grid.is_valid(-1, 1));
        assert_eq!(grid.valid_count(), 18);
    }

    #[test]
    fn connect_opens_both_sides_across_seam() {
        let mut grid = MazeGrid::new(shape(6, 8, 2, 1)).unwrap();
        let (nx, ny) = grid.connect(5, 1, Direction::Right);
        assert_eq!((nx, ny), (0, 3));
        assert!(grid.open(5, 1).contains(Direction::Right));
        assert!(grid.open(0, 3).contains(Direction::Left));
    }
}
