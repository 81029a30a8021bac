use crate::grid::{signed, Direction, MazeGrid};

/// Opens every rightward edge between two valid cells. The result is a set of
/// horizontal rings, useful for checking the cut on a printer.
pub fn fill_test_pattern(grid: &mut MazeGrid) {
    let width = signed(grid.width());
    let height = signed(grid.height());
    for y in 0..height {
        for x in 0..width {
            if !grid.group(x, y).invalid && !grid.group(x + 1, y).invalid {
                grid.connect(x, y, Direction::Right);
            }
        }
    }
}

/// Furthest column reachable by walking right along the second row from the
/// top while cells stay valid.
#[must_use]
pub fn test_pattern_exit(grid: &MazeGrid) -> isize {
    let width = signed(grid.width());
    let row = signed(grid.height()) - 2;
    let mut exit = 0;
    while exit + 1 < width && !grid.group(exit + 1, row).invalid {
        exit += 1;
    }
    exit
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::grid::GridShape;

    #[test]
    fn pattern_opens_only_horizontal_edges() {
        let mut g = MazeGrid::new(GridShape {
            width: 12,
            height: 6,
            helix: 0,
            nubs: 3,
        })
        .unwrap();
        g.restrict(|_, y| (1..=4).contains(&y));
        fill_test_pattern(&mut g);
        for x in 0..12 {
            for y in 0..6 {
                let open = g.open(x, y);
                assert!(!open.contains(Direction::Up));
                assert!(!open.contains(Direction::Down));
                if (1..=4).contains(&y) {
                    assert!(open.contains(Direction::Left));
                    assert!(open.contains(Direction::Right));
                } else {
                    assert!(open.is_empty());
                }
            }
        }
        assert_eq!(test_pattern_exit(&g), 11);
    }

    #[test]
    fn pattern_exit_stops_at_invalid_cell() {
        let mut g = MazeGrid::new(GridShape {
            width: 12,
            height: 6,
            helix: 0,
            nubs: 1,
        })
        .unwrap();
        g.restrict(|x, _| x != 5);
        assert_eq!(test_pattern_exit(&g), 4);
    }
}
