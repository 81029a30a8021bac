use crate::error::{MeshError, Result};
use crate::math::Point3;

use super::{AngularSlice, PointRef, Polyhedron, Surface};

/// Incremental builder for a closed polyhedron swept around a cylinder.
///
/// Points are appended per slice. The solid is then closed by walking each
/// slice's boundary upward with [`MeshBuilder::advance`]; every advance emits
/// the faces between the old and the new boundary on this slice and on the
/// next one.
///
/// The first `3 * slice_count` points must be the bottom rings, in order
/// backing, groove floor, wall face. The first advance of a slice closes its
/// floor against them.
#[derive(Debug)]
pub struct MeshBuilder {
    points: Vec<Point3>,
    faces: Vec<Vec<usize>>,
    slices: Vec<AngularSlice>,
    capacity: usize,
}

impl MeshBuilder {
    /// Creates a builder for `slice_count` slices holding at most `capacity`
    /// points each.
    #[must_use]
    pub fn new(slice_count: usize, capacity: usize) -> Self {
        Self {
            points: Vec::new(),
            faces: Vec::new(),
            slices: vec![AngularSlice::new(); slice_count],
            capacity,
        }
    }

    #[must_use]
    pub fn slice_count(&self) -> usize {
        self.slices.len()
    }

    /// Index the next added point will get.
    #[must_use]
    pub fn next_index(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Current boundary of `slice`.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::SliceOutOfRange`] for an unknown slice.
    pub fn boundary(&self, slice: usize) -> Result<Option<(PointRef, PointRef)>> {
        Ok(self.slice(slice)?.boundary())
    }

    /// Emits a point on `slice`.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::SliceOutOfRange`] for an unknown slice, or
    /// [`MeshError::PointBudgetExceeded`] once the slice is full.
    pub fn add_point(&mut self, slice: usize, point: Point3, surface: Surface) -> Result<PointRef> {
        let reference = PointRef {
            index: self.points.len(),
            surface,
        };
        self.record(slice, reference)?;
        self.points.push(point);
        Ok(reference)
    }

    /// Appends an existing point to the history of `slice` without emitting
    /// a new one. Used to close each slice back onto its bottom ring.
    ///
    /// # Errors
    ///
    /// Same as [`MeshBuilder::add_point`].
    pub fn record(&mut self, slice: usize, point: PointRef) -> Result<()> {
        let capacity = self.capacity;
        let state = self.slice_mut(slice)?;
        if state.len() >= capacity {
            return Err(MeshError::PointBudgetExceeded { slice, capacity }.into());
        }
        state.push(point);
        Ok(())
    }

    /// Moves the boundary of `slice` up to `(left, right)`.
    ///
    /// `left` must lie on `slice` and `right` on the next slice, both above
    /// the current boundary. Points skipped over on the surface of the old
    /// boundary are folded into the emitted faces, so neighbouring slices
    /// with different point counts still share every edge.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::SliceOutOfRange`] for an unknown slice, or
    /// [`MeshError::TopologyLookupFailure`] if either boundary is not found
    /// in order in the slice histories.
    pub fn advance(&mut self, slice: usize, left: PointRef, right: PointRef) -> Result<()> {
        let count = self.slices.len();
        let next = (slice + 1) % count.max(1);
        let current = self.slice(slice)?.boundary();
        let (old_left, old_right) = match current {
            Some(boundary) => boundary,
            None => {
                let old_left = PointRef {
                    index: self.floor_ring(slice, left.surface),
                    surface: left.surface,
                };
                let old_right = PointRef {
                    index: self.floor_ring(next, right.surface),
                    surface: right.surface,
                };
                self.faces.push(vec![
                    old_left.index,
                    old_right.index,
                    next,
                    slice,
                ]);
                (old_left, old_right)
            }
        };
        if (left, right) != (old_left, old_right) {
            self.stitch(slice, next, (old_left, old_right), (left, right))?;
        }
        self.slices[slice].set_boundary(left, right);
        Ok(())
    }

    /// Consumes the builder and returns the solid.
    #[must_use]
    pub fn finish(self) -> Polyhedron {
        Polyhedron {
            points: self.points,
            faces: self.faces,
        }
    }

    fn stitch(
        &mut self,
        slice: usize,
        next: usize,
        (old_left, old_right): (PointRef, PointRef),
        (left, right): (PointRef, PointRef),
    ) -> Result<()> {
        let (n1, n2) = self.span(slice, old_left.index, left.index)?;
        let mut lower: Vec<usize> = self.slices[slice]
            .run(n1, n2, old_left.surface)
            .collect();
        let skipped = lower.len();
        lower.push(left.index);
        if skipped > 0 {
            lower.push(right.index);
            self.faces.push(std::mem::take(&mut lower));
        }

        let (m1, m2) = self.span(next, old_right.index, right.index)?;
        if skipped == 0 || m1 < m2 {
            lower.push(right.index);
            lower.extend(self.slices[next].run(m1, m2, old_right.surface).rev());
            if skipped > 0 {
                lower.push(old_left.index);
            }
            self.faces.push(lower);
        }
        Ok(())
    }

    /// History positions of `from` and of `to` at or after it.
    fn span(&self, slice: usize, from: usize, to: usize) -> Result<(usize, usize)> {
        let state = self.slice(slice)?;
        let lookup = |index: usize, start: usize| {
            state
                .locate(index, start)
                .ok_or(MeshError::TopologyLookupFailure {
                    slice,
                    from,
                    to: index,
                })
        };
        let start = lookup(from, 0)?;
        let end = lookup(to, start)?;
        Ok((start, end))
    }

    /// Bottom ring point of `slice` on the ring matching `surface`.
    fn floor_ring(&self, slice: usize, surface: Surface) -> usize {
        let count = self.slices.len();
        match surface {
            Surface::Recess => count + slice,
            Surface::Face => 2 * count + slice,
        }
    }

    fn slice(&self, slice: usize) -> Result<&AngularSlice> {
        let count = self.slices.len();
        self.slices
            .get(slice)
            .ok_or_else(|| MeshError::SliceOutOfRange { slice, count }.into())
    }

    fn slice_mut(&mut self, slice: usize) -> Result<&mut AngularSlice> {
        let count = self.slices.len();
        self.slices
            .get_mut(slice)
            .ok_or_else(|| MeshError::SliceOutOfRange { slice, count }.into())
    }
}
