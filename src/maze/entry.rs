use crate::grid::{signed, Direction, MazeGrid};

/// Cuts the entry channel from the top of the grid down to the exit cell, in
/// every symmetric copy of the exit column.
///
/// Invalid cells above the maze are opened vertically until the first valid
/// cell, which is opened upwards.
pub fn carve_entry_channel(grid: &mut MazeGrid, exit_column: isize) {
    let stride = signed(grid.shape().copy_stride());
    let width = signed(grid.width());
    let top = signed(grid.height()) - 1;
    let mut x = exit_column.rem_euclid(stride);
    while x < width {
        let mut y = top;
        while y > 0 && !grid.is_valid(x, y) {
            grid.open_edges(x, y, Direction::Up | Direction::Down);
            y -= 1;
        }
        grid.open_edges(x, y, Direction::Up);
        x += stride;
    }
}
