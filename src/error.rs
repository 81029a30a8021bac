use thiserror::Error;

/// Top-level error type for puzzle box generation.
///
/// Every variant describes an invariant violation or an unusable parameter
/// combination. None of them are recoverable for the part being built: the
/// caller should abandon the part rather than use partial geometry.
#[derive(Debug, Error)]
pub enum PuzzleboxError {
    #[error(transparent)]
    Maze(#[from] MazeError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

/// Errors raised while addressing or generating the maze grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze grid too small: {width}x{height}")]
    GridTooSmall { width: usize, height: usize },

    #[error("maze width {width} is not a positive multiple of {nubs} nubs")]
    AsymmetricWidth { width: usize, nubs: usize },

    #[error("helix {helix} is not a multiple of {nubs} nubs")]
    HelixMismatch { helix: usize, nubs: usize },

    #[error("unexpected maze path at ({x}, {y})")]
    UnreachableExpansion { x: isize, y: isize },
}

/// Errors raised while stitching faces together.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    #[error("bad render on slice {slice}: point {to} not found after {from}")]
    TopologyLookupFailure {
        slice: usize,
        from: usize,
        to: usize,
    },

    #[error("slice {slice} exceeded its capacity of {capacity} points")]
    PointBudgetExceeded { slice: usize, capacity: usize },

    #[error("slice {slice} out of range (slice count {count})")]
    SliceOutOfRange { slice: usize, count: usize },

    #[error("passage from cell ({x}, {y}) opens onto a cell with no geometry")]
    DanglingPassage { x: usize, y: usize },
}

/// Errors related to physical input parameters.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("invalid parameter: {0}")]
    Invalid(String),
}

/// Convenience type alias for results using [`PuzzleboxError`].
pub type Result<T> = std::result::Result<T, PuzzleboxError>;
