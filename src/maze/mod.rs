//! Maze generation on a cylindrical grid.
//!
//! The maze is a spanning tree grown from the park cell (the solved position)
//! by a randomized frontier walk. The cell that is furthest from the park and
//! touches the top of the usable band becomes the exit, and an entry channel
//! is cut from the rim of the part down to it.

pub mod entry;
pub mod frontier;
pub mod generate;
pub mod park;
pub mod pattern;

pub use frontier::FrontierStats;
pub use generate::GenerateMaze;
pub use park::ParkStyle;

use crate::error::{ParameterError, Result};

/// Selects how passages are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MazePattern {
    /// Randomized spanning tree.
    #[default]
    Random,
    /// Horizontal rings only, for checking a print.
    Test,
}

/// Parameters of one maze build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MazeParams {
    /// Front-insertion bias in `-10..=10`. Larger magnitudes grow longer
    /// corridors; non-positive values also pull the expanded cell forward.
    pub complexity: i32,
    pub park: ParkStyle,
    /// Carve the 2x2 mark beside the park point.
    pub mark: bool,
    /// Only accept exits on a column shared by every symmetric copy boundary.
    pub align_exit: bool,
    pub pattern: MazePattern,
}

impl MazeParams {
    pub const MIN_COMPLEXITY: i32 = -10;
    pub const MAX_COMPLEXITY: i32 = 10;

    /// # Errors
    ///
    /// Returns [`ParameterError::OutOfRange`] if the complexity lies outside
    /// `-10..=10`.
    pub fn validate(&self) -> Result<()> {
        if !(Self::MIN_COMPLEXITY..=Self::MAX_COMPLEXITY).contains(&self.complexity) {
            return Err(ParameterError::OutOfRange {
                parameter: "complexity",
                value: f64::from(self.complexity),
                min: f64::from(Self::MIN_COMPLEXITY),
                max: f64::from(Self::MAX_COMPLEXITY),
            }
            .into());
        }
        Ok(())
    }
}

impl Default for MazeParams {
    fn default() -> Self {
        Self {
            complexity: 5,
            park: ParkStyle::Horizontal,
            mark: true,
            align_exit: false,
            pattern: MazePattern::Random,
        }
    }
}

/// Result of a maze build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MazeOutcome {
    /// Column of the exit cell in `[0, W)`.
    pub exit_column: usize,
    /// Depth of the exit cell from the park cell.
    pub path_length: usize,
    /// Angular position of the exit in degrees.
    pub entry_angle: f64,
    pub stats: FrontierStats,
}
