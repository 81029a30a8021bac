//! Coordinate math shared by maze generation and mesh construction.
//!
//! The grid is a cylinder: stepping off the right edge re-enters on the left
//! `helix` rows higher. A logical cell is the union of its `nubs` rotational
//! copies, and every "can I move here" decision looks at that union.

use super::{signed, Direction, Directions, MazeGrid};

/// Combined state of all symmetric copies of one logical cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellGroup {
    /// Union of the open edges stored on every copy.
    pub open: Directions,
    /// `true` if any copy is invalid or falls outside the grid.
    pub invalid: bool,
}

impl CellGroup {
    /// No copy has been touched and all of them are usable.
    #[must_use]
    pub fn is_untouched(&self) -> bool {
        self.open.is_empty() && !self.invalid
    }

    /// The cell is part of the maze and produces geometry.
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        !self.open.is_empty() && !self.invalid
    }

    /// Returns `true` if the edge in `dir` is open on any copy.
    #[must_use]
    pub fn has(&self, dir: Direction) -> bool {
        self.open.contains(dir)
    }
}

impl MazeGrid {
    /// Normalizes `x` into `[0, W)`, shifting `y` by the helix for every
    /// seam crossing.
    #[must_use]
    pub fn wrap(&self, mut x: isize, mut y: isize) -> (isize, isize) {
        let w = signed(self.shape.width);
        let helix = signed(self.shape.helix);
        while x < 0 {
            x += w;
            y -= helix;
        }
        while x >= w {
            x -= w;
            y += helix;
        }
        (x, y)
    }

    /// Wrapped coordinates of the neighbour of `(x, y)` in `dir`.
    #[must_use]
    pub fn neighbor(&self, x: isize, y: isize, dir: Direction) -> (isize, isize) {
        let (dx, dy) = dir.offset();
        self.wrap(x + dx, y + dy)
    }

    /// Aggregates the state of every symmetric copy of the logical cell at
    /// `(x, y)`.
    ///
    /// Copies are `W / nubs` columns apart. Each step sinks `helix / nubs`
    /// rows so that all copies sit at the same physical height on a helical
    /// grid. Copies outside the grid count as invalid.
    #[must_use]
    pub fn group(&self, x: isize, y: isize) -> CellGroup {
        let (mut x, mut y) = self.wrap(x, y);
        let w = signed(self.shape.width);
        let helix = signed(self.shape.helix);
        let stride = signed(self.shape.copy_stride());
        let sink = helix / signed(self.shape.nubs);
        let mut group = CellGroup::default();
        for copy in 0..self.shape.nubs {
            if copy > 0 {
                x += stride;
                while x >= w {
                    x -= w;
                    y += helix;
                }
                y -= sink;
            }
            match self.index(x, y) {
                Some(i) => {
                    group.open |= self.open[i];
                    group.invalid |= !self.valid[i];
                }
                None => group.invalid = true,
            }
        }
        group
    }
}
