use crate::error::{MazeError, Result};
use crate::grid::{signed, Direction, Directions, GridShape, MazeGrid};

use super::frontier::FrontierNode;

/// How the solved position is approached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParkStyle {
    /// The final move into the park point is sideways.
    #[default]
    Horizontal,
    /// The final move drops straight down into the park point.
    Vertical,
}

/// Loops added by the decorative mark next to the park point.
pub const MARK_LOOPS: usize = 1;

/// Opens the fixed passages around the park point and returns the cell the
/// random walk starts from.
///
/// With `mark` set and enough room, a 2x2 block of mutually open cells is
/// carved beside the park point. It is the only loop in the maze.
///
/// # Errors
///
/// Returns [`MazeError::GridTooSmall`] if the start cell or a cell given a
/// sideways passage lies outside the height band. Nothing is opened in that
/// case.
pub fn seed_park(grid: &mut MazeGrid, style: ParkStyle, mark: bool) -> Result<FrontierNode> {
    let (openings, start) = park_layout(grid.shape(), style, mark);
    let sideways = Directions::from(Direction::Left) | Direction::Right;
    let outside = |x: isize, y: isize| grid.group(x, y).invalid;
    let misplaced = outside(start.x, start.y)
        || openings
            .iter()
            .any(|&(x, y, dirs)| dirs.intersects(sideways) && outside(x, y));
    if misplaced {
        return Err(MazeError::GridTooSmall {
            width: grid.width(),
            height: grid.height(),
        }
        .into());
    }
    for (x, y, dirs) in openings {
        grid.open_edges(x, y, dirs);
    }
    Ok(start)
}

/// Cells opened by the park and the cell the walk starts from.
fn park_layout(
    shape: &GridShape,
    style: ParkStyle,
    mark: bool,
) -> (Vec<(isize, isize, Directions)>, FrontierNode) {
    let per_copy = shape.copy_stride();
    let base = signed(shape.helix) + 1;
    let mut openings = Vec::new();
    let mut open = |x: isize, y: isize, dirs: Directions| openings.push((x, y, dirs));
    let (x, y) = match style {
        ParkStyle::Horizontal => {
            open(0, base, Direction::Right.into());
            open(1, base, Direction::Left.into());
            if mark && per_copy > 3 && shape.height > shape.helix + 3 {
                let (x, y) = (1, base);
                open(x, y, Direction::Left | Direction::Right | Direction::Up);
                open(x + 1, y, Direction::Left | Direction::Up);
                open(x + 1, y + 1, Direction::Left | Direction::Down);
                open(x, y + 1, Direction::Left | Direction::Right | Direction::Down);
                open(x - 1, y + 1, Direction::Right.into());
                (x - 1, y + 1)
            } else {
                (1, base)
            }
        }
        ParkStyle::Vertical => {
            for n in 0..=base {
                open(0, n, Direction::Up | Direction::Down);
                open(0, n + 1, Direction::Down.into());
            }
            let y = base + 1;
            if mark && per_copy > 2 && shape.height > shape.helix + 4 {
                open(0, y, Direction::Down | Direction::Up | Direction::Right);
                open(0, y + 1, Direction::Down | Direction::Right);
                open(1, y, Direction::Down | Direction::Up | Direction::Left);
                open(1, y + 1, Direction::Down | Direction::Left);
                open(1, y - 1, Direction::Up.into());
                (1, y - 1)
            } else {
                (0, y)
            }
        }
    };
    (openings, FrontierNode { x, y, depth: 0 })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PuzzleboxError;

    fn grid(helix: usize) -> MazeGrid {
        MazeGrid::new(GridShape {
            width: 24,
            height: 12,
            helix,
            nubs: 3,
        })
        .unwrap()
    }

    #[test]
    fn horizontal_without_mark_is_single_edge() {
        let mut g = grid(0);
        let start = seed_park(&mut g, ParkStyle::Horizontal, false).unwrap();
        assert_eq!((start.x, start.y), (1, 1));
        assert_eq!(g.open(0, 1), Directions::from(Direction::Right));
        assert_eq!(g.open(1, 1), Directions::from(Direction::Left));
    }

    #[test]
    fn horizontal_mark_forms_block() {
        let mut g = grid(3);
        let start = seed_park(&mut g, ParkStyle::Horizontal, true).unwrap();
        assert_eq!((start.x, start.y), (0, 5));
        assert_eq!(
            g.open(1, 4),
            Direction::Left | Direction::Right | Direction::Up
        );
        assert_eq!(g.open(2, 4), Direction::Left | Direction::Up);
        assert_eq!(g.open(2, 5), Direction::Left | Direction::Down);
        assert_eq!(
            g.open(1, 5),
            Direction::Left | Direction::Right | Direction::Down
        );
        assert_eq!(g.open(0, 5), Directions::from(Direction::Right));
    }

    #[test]
    fn vertical_drops_into_park() {
        let mut g = grid(0);
        let start = seed_park(&mut g, ParkStyle::Vertical, false).unwrap();
        assert_eq!((start.x, start.y), (0, 2));
        assert_eq!(g.open(0, 0), Direction::Up | Direction::Down);
        assert_eq!(g.open(0, 1), Direction::Up | Direction::Down);
        assert_eq!(g.open(0, 2), Directions::from(Direction::Down));
    }

    #[test]
    fn vertical_mark_starts_beside_block() {
        let mut g = grid(0);
        let start = seed_park(&mut g, ParkStyle::Vertical, true).unwrap();
        assert_eq!((start.x, start.y), (1, 1));
        assert_eq!(
            g.open(0, 2),
            Direction::Up | Direction::Down | Direction::Right
        );
        assert_eq!(g.open(1, 3), Direction::Down | Direction::Left);
        assert_eq!(g.open(1, 1), Directions::from(Direction::Up));
    }

    #[test]
    fn park_above_band_is_rejected_untouched() {
        // One usable row: the vertical park would start above it.
        let mut g = MazeGrid::new(GridShape {
            width: 8,
            height: 5,
            helix: 2,
            nubs: 1,
        })
        .unwrap();
        g.restrict(|x, y| x == 0 && y == 3);
        let err = seed_park(&mut g, ParkStyle::Vertical, false).unwrap_err();
        assert!(matches!(
            err,
            PuzzleboxError::Maze(MazeError::GridTooSmall { width: 8, height: 5 })
        ));
        assert!(g.open(0, 0).is_empty());
    }

    #[test]
    fn mark_outside_band_is_rejected() {
        let mut g = grid(0);
        g.restrict(|_, y| y == 1);
        assert!(seed_park(&mut g, ParkStyle::Horizontal, true).is_err());
        assert!(seed_park(&mut g, ParkStyle::Horizontal, false).is_ok());
    }
}
