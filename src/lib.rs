pub mod assembly;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod math;
pub mod maze;
pub mod mesh;
pub mod operations;

pub use assembly::{BuildMazeLayer, MazeLayerSolids};
pub use config::{PartDimensions, PuzzleboxConfig};
pub use error::{PuzzleboxError, Result};
