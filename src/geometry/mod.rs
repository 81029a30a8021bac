//! Physical placement of the maze on a cylindrical wall.

pub mod layer;
pub mod layout;

pub use layer::{column_count, CellLevel, LayerParams, RadialLayer, SliceProfile};
pub use layout::{MazeLayout, SLICES_PER_CELL};

/// Outside maze on a 14mm wall that yields a 24x10 grid with three nubs.
#[cfg(test)]
pub(crate) fn sample_layer() -> LayerParams {
    LayerParams {
        radius: 14.0,
        maze_inside: false,
        maze_thickness: 2.0,
        back_thickness: 1.2,
        step: 3.0,
        helix: 0,
        nubs: 3,
        base: 10.0,
        height: 36.5,
        top_margin: 1.0,
        flush_rim: false,
        floor_z: 1.2,
        park_vertical: false,
        symmetric_cut: false,
    }
}
