//! Wires one maze layer together: layout, maze, wall solid and park ridge.

use rand::Rng;
use tracing::info;

use crate::config::{PartDimensions, PuzzleboxConfig};
use crate::error::Result;
use crate::geometry::{LayerParams, MazeLayout};
use crate::maze::{GenerateMaze, MazeOutcome, MazeParams};
use crate::mesh::Polyhedron;
use crate::operations::creation::{MakeMazeSolid, MakeParkRidge};

/// Solids of one maze layer.
#[derive(Debug, Clone, PartialEq)]
pub struct MazeLayerSolids {
    /// The grooved wall.
    pub maze: Polyhedron,
    /// Ridges across the park cells, if the layer has them.
    pub park: Option<Polyhedron>,
    pub outcome: MazeOutcome,
}

/// Builds every solid of one maze layer.
///
/// Nothing is returned unless the whole layer succeeds.
pub struct BuildMazeLayer {
    layer: LayerParams,
    maze: MazeParams,
    park_thickness: f64,
}

impl BuildMazeLayer {
    /// Creates a new `BuildMazeLayer` operation. A `park_thickness` of zero
    /// leaves out the park ridge.
    #[must_use]
    pub fn new(layer: LayerParams, maze: MazeParams, park_thickness: f64) -> Self {
        Self {
            layer,
            maze,
            park_thickness,
        }
    }

    /// Derives the layer from box settings and the dimensions of one part.
    #[must_use]
    pub fn from_config(config: &PuzzleboxConfig, part: &PartDimensions) -> Self {
        Self::new(
            config.layer_params(part),
            config.maze_params(part.maze_inside),
            config.park_thickness,
        )
    }

    /// Executes the build, drawing the maze from `rng`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the layout, the maze generator or
    /// either solid.
    pub fn execute<R: Rng>(&self, rng: &mut R) -> Result<MazeLayerSolids> {
        let layout = MazeLayout::new(&self.layer)?;
        let mut grid = layout.build_grid()?;
        let outcome = GenerateMaze::new(self.maze).execute(&mut grid, rng)?;
        let maze = MakeMazeSolid::new(&layout, &grid).execute()?;
        let park = if self.park_thickness > 0.0 {
            Some(MakeParkRidge::new(&layout, self.park_thickness).execute()?)
        } else {
            None
        };
        info!(
            inside = self.layer.maze_inside,
            width = layout.shape().width,
            height = layout.shape().height,
            path_length = outcome.path_length,
            entry_angle = outcome.entry_angle,
            "maze layer built"
        );
        Ok(MazeLayerSolids {
            maze,
            park,
            outcome,
        })
    }
}
