use tracing::debug;

use crate::error::{MeshError, ParameterError, Result};
use crate::geometry::{CellLevel, MazeLayout, RadialLayer, SLICES_PER_CELL};
use crate::grid::{signed, Direction, Directions, MazeGrid};
use crate::mesh::{MeshBuilder, PointRef, Polyhedron, Surface};

/// Points emitted per rendered cell: four levels of four slices.
const CELL_POINTS: usize = 16;

/// Builds the grooved wall of one maze layer as a single closed polyhedron.
///
/// Every rendered cell contributes sixteen points. Slices are then stitched
/// bottom to top, cell by cell, and finally closed across the rim and the
/// floor.
pub struct MakeMazeSolid<'a> {
    layout: &'a MazeLayout,
    grid: &'a MazeGrid,
}

impl<'a> MakeMazeSolid<'a> {
    /// Creates a new `MakeMazeSolid` operation.
    #[must_use]
    pub fn new(layout: &'a MazeLayout, grid: &'a MazeGrid) -> Self {
        Self { layout, grid }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid was not built for this layout, if a
    /// sideways passage leads to a cell that is not rendered, or if
    /// stitching runs out of slice capacity or loses track of a boundary.
    pub fn execute(&self) -> Result<Polyhedron> {
        if *self.grid.shape() != self.layout.shape() {
            return Err(ParameterError::Invalid("maze grid does not match its layout".into()).into());
        }
        self.check_passages()?;
        let count = self.layout.slice_count();
        let mut builder = MeshBuilder::new(count, self.layout.slice_capacity());

        let bottom = builder.next_index();
        let floor_z = self.layout.params().floor_z;
        for (layer, surface) in [
            (RadialLayer::Back, Surface::Face),
            (RadialLayer::Recess, Surface::Recess),
            (RadialLayer::Face, Surface::Face),
        ] {
            for s in 0..count {
                builder.add_point(s, self.layout.ring_point(s, layer, floor_z), surface)?;
            }
        }

        let starts = self.emit_cells(&mut builder)?;

        let top = builder.next_index();
        let height = self.layout.params().height;
        for (layer, z) in [
            (RadialLayer::Face, self.layout.rim_z()),
            (RadialLayer::Recess, height),
            (RadialLayer::Back, height),
        ] {
            for s in 0..count {
                builder.add_point(s, self.layout.ring_point(s, layer, z), Surface::Face)?;
            }
        }
        for s in 0..count {
            builder.record(s, PointRef::face(bottom + s))?;
        }

        self.stitch_cells(&mut builder, &starts)?;
        close_rim_and_floor(&mut builder, top, bottom)?;

        let mesh = builder.finish();
        debug!(
            points = mesh.point_count(),
            faces = mesh.face_count(),
            "maze solid"
        );
        Ok(mesh)
    }

    /// Every sideways passage of a rendered cell must end in another rendered
    /// cell, otherwise its groove is left open.
    fn check_passages(&self) -> Result<()> {
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                let group = self.grid.group(signed(x), signed(y));
                if !group.is_rendered() {
                    continue;
                }
                for dir in [Direction::Left, Direction::Right] {
                    let (nx, ny) = self.grid.neighbor(signed(x), signed(y), dir);
                    if group.has(dir) && !self.grid.group(nx, ny).is_rendered() {
                        return Err(MeshError::DanglingPassage { x, y }.into());
                    }
                }
            }
        }
        Ok(())
    }

    /// Emits the points of every rendered cell and returns the index of each
    /// cell's first point, row by row.
    fn emit_cells(&self, builder: &mut MeshBuilder) -> Result<Vec<Option<usize>>> {
        let width = self.grid.width();
        let height = self.grid.height();
        let mut starts = vec![None; width * height];
        for y in 0..height {
            for x in 0..width {
                if !self.grid.group(signed(x), signed(y)).is_rendered() {
                    continue;
                }
                let first = builder.next_index();
                starts[y * width + x] = Some(first);
                for level in CellLevel::ALL {
                    let surface = match level.layer() {
                        RadialLayer::Recess => Surface::Recess,
                        RadialLayer::Back | RadialLayer::Face => Surface::Face,
                    };
                    for s in x * SLICES_PER_CELL..(x + 1) * SLICES_PER_CELL {
                        builder.add_point(s, self.layout.cell_point(y, s, level), surface)?;
                    }
                }
                debug_assert_eq!(builder.next_index() - first, CELL_POINTS);
            }
        }
        Ok(starts)
    }

    fn stitch_cells(&self, builder: &mut MeshBuilder, starts: &[Option<usize>]) -> Result<()> {
        let width = self.grid.width();
        let height = self.grid.height();
        let helix = self.grid.shape().helix;
        for y in 0..height {
            for x in 0..width {
                let Some(p) = starts[y * width + x] else {
                    continue;
                };
                let open = self.grid.group(signed(x), signed(y)).open;
                let (rx, ry) = if x + 1 < width {
                    (x + 1, y)
                } else {
                    (0, y + helix)
                };
                let right = if ry < height {
                    starts[ry * width + rx]
                } else {
                    None
                };
                stitch_cell(builder, x * SLICES_PER_CELL, p, open, right)?;
            }
        }
        Ok(())
    }
}

/// Advances the four slices of one cell across its walls, groove and the
/// join to the cell on its right.
///
/// `p` is the cell's first point; point `p + 4 * level + k` sits on level
/// `level` of slice `s + k`.
fn stitch_cell(
    builder: &mut MeshBuilder,
    s: usize,
    p: usize,
    open: Directions,
    right: Option<usize>,
) -> Result<()> {
    let f = PointRef::face;
    let r = PointRef::recess;
    let down = open.contains(Direction::Down);
    let up = open.contains(Direction::Up);

    // Left strip
    if !down {
        builder.advance(s, f(p), f(p + 1))?;
    }
    builder.advance(s, f(p), r(p + 5))?;
    if open.contains(Direction::Left) {
        builder.advance(s, r(p + 4), r(p + 5))?;
        builder.advance(s, r(p + 8), r(p + 9))?;
    }
    builder.advance(s, f(p + 12), r(p + 9))?;
    if !up {
        builder.advance(s, f(p + 12), f(p + 13))?;
    }

    // Groove centre
    if !down {
        builder.advance(s + 1, f(p + 1), f(p + 2))?;
    }
    builder.advance(s + 1, r(p + 5), r(p + 6))?;
    builder.advance(s + 1, r(p + 9), r(p + 10))?;
    if !up {
        builder.advance(s + 1, f(p + 13), f(p + 14))?;
    }

    // Right strip
    if !down {
        builder.advance(s + 2, f(p + 2), f(p + 3))?;
    }
    builder.advance(s + 2, r(p + 6), f(p + 3))?;
    if open.contains(Direction::Right) {
        builder.advance(s + 2, r(p + 6), r(p + 7))?;
        builder.advance(s + 2, r(p + 10), r(p + 11))?;
    }
    builder.advance(s + 2, r(p + 10), f(p + 15))?;
    if !up {
        builder.advance(s + 2, f(p + 14), f(p + 15))?;
    }

    // Join to the next cell
    if let Some(q) = right {
        builder.advance(s + 3, f(p + 3), f(q))?;
        if open.contains(Direction::Right) {
            builder.advance(s + 3, r(p + 7), r(q + 4))?;
            builder.advance(s + 3, r(p + 11), r(q + 8))?;
        }
        builder.advance(s + 3, f(p + 15), f(q + 12))?;
    }
    Ok(())
}

/// Closes every slice up the rim rings, across the top and back down to the
/// floor.
///
/// `top` is the first rim point: `count` face ring points, then the groove
/// floor ring and the backing ring at full height.
fn close_rim_and_floor(builder: &mut MeshBuilder, top: usize, bottom: usize) -> Result<()> {
    let count = builder.slice_count();
    for s in 0..count {
        let next = (s + 1) % count;
        let boundary = builder.boundary(s)?;
        let on_recess = |side: Option<PointRef>| {
            side.is_some_and(|point| point.surface == Surface::Recess)
        };
        let lift = |recess: bool| if recess { count } else { 0 };
        let left = lift(on_recess(boundary.map(|(l, _)| l)));
        let right = lift(on_recess(boundary.map(|(_, r)| r)));
        builder.advance(
            s,
            PointRef::face(top + s + left),
            PointRef::face(top + next + right),
        )?;
        builder.advance(
            s,
            PointRef::face(top + count + s),
            PointRef::face(top + count + next),
        )?;
        builder.advance(
            s,
            PointRef::face(top + 2 * count + s),
            PointRef::face(top + 2 * count + next),
        )?;
        builder.advance(s, PointRef::face(bottom + s), PointRef::face(bottom + next))?;
    }
    Ok(())
}
