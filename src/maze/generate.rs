use rand::Rng;
use tracing::debug;

use crate::error::{MazeError, Result};
use crate::grid::{signed, Direction, MazeGrid};

use super::entry::carve_entry_channel;
use super::frontier::{Frontier, FrontierNode, FrontierStats, InsertionPolicy};
use super::park::seed_park;
use super::pattern::{fill_test_pattern, test_pattern_exit};
use super::{MazeOutcome, MazeParams, MazePattern};

/// Relative weight of each direction in the random walk, in draw order.
const DIRECTION_BIAS: [(Direction, u32); 4] = [
    (Direction::Right, 1),
    (Direction::Left, 2),
    (Direction::Down, 4),
    (Direction::Up, 1),
];

/// Generates the maze passages on a prepared grid.
///
/// The grid must already carry its height band (invalid cells). The
/// operation seeds the park point, grows a spanning tree from it with a
/// randomized frontier walk (or lays the test pattern), picks the exit and
/// cuts the entry channel down to it.
pub struct GenerateMaze {
    params: MazeParams,
}

impl GenerateMaze {
    /// Creates a new `GenerateMaze` operation.
    #[must_use]
    pub fn new(params: MazeParams) -> Self {
        Self { params }
    }

    /// Executes the generation, drawing from `rng` in a fixed call order.
    ///
    /// # Errors
    ///
    /// Returns an error if the complexity is out of range, the park does not
    /// fit inside the height band, or the walk picks a direction that is not
    /// available.
    pub fn execute<R: Rng>(&self, grid: &mut MazeGrid, rng: &mut R) -> Result<MazeOutcome> {
        self.params.validate()?;
        let start = seed_park(grid, self.params.park, self.params.mark)?;

        let (exit, path_length, stats) = match self.params.pattern {
            MazePattern::Test => {
                fill_test_pattern(grid);
                let exit = if self.params.align_exit {
                    0
                } else {
                    test_pattern_exit(grid)
                };
                (exit, 0, FrontierStats::default())
            }
            MazePattern::Random => self.walk(grid, start, rng)?,
        };

        carve_entry_channel(grid, exit);

        let exit_column = exit.unsigned_abs();
        #[allow(clippy::cast_precision_loss)]
        let entry_angle = 360.0 * exit_column as f64 / grid.width() as f64;
        debug!(
            exit_column,
            path_length,
            entry_angle,
            front = stats.front,
            back = stats.back,
            "maze generated"
        );
        Ok(MazeOutcome {
            exit_column,
            path_length,
            entry_angle,
            stats,
        })
    }

    /// Grows the spanning tree. Returns the exit column, its depth and the
    /// queue statistics.
    fn walk<R: Rng>(
        &self,
        grid: &mut MazeGrid,
        start: FrontierNode,
        rng: &mut R,
    ) -> Result<(isize, usize, FrontierStats)> {
        let policy = InsertionPolicy::new(self.params.complexity);
        let stride = signed(grid.shape().copy_stride());
        let mut frontier = Frontier::new(start);
        let mut exit = 0;
        let mut longest = 0;

        while let Some(node) = frontier.pop() {
            let choices: Vec<(Direction, u32)> = DIRECTION_BIAS
                .iter()
                .copied()
                .filter(|&(dir, _)| {
                    let (nx, ny) = grid.neighbor(node.x, node.y, dir);
                    grid.group(nx, ny).is_untouched()
                })
                .collect();
            let total: u32 = choices.iter().map(|&(_, weight)| weight).sum();
            if total == 0 {
                // Dead end: everything around is already part of the maze.
                continue;
            }

            let mut draw = rng.gen_range(0..total);
            let dir = choices
                .iter()
                .find_map(|&(dir, weight)| {
                    if draw < weight {
                        Some(dir)
                    } else {
                        draw -= weight;
                        None
                    }
                })
                .ok_or(MazeError::UnreachableExpansion {
                    x: node.x,
                    y: node.y,
                })?;

            let (nx, ny) = grid.connect(node.x, node.y, dir);
            if node.depth > longest
                && grid.group(nx, ny + 1).invalid
                && (!self.params.align_exit || nx % stride == 0)
            {
                longest = node.depth;
                exit = nx;
            }

            let next = FrontierNode {
                x: nx,
                y: ny,
                depth: node.depth + 1,
            };
            let draw = rng.gen_range(0..InsertionPolicy::DRAW_RANGE);
            frontier.push(next, policy.next_placement(draw));
            frontier.push(node, policy.current_placement(draw));
        }

        Ok((exit, longest, frontier.stats()))
    }
}
