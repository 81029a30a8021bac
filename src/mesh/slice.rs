use super::{PointRef, Surface};

/// Stitching state of one angular slice.
///
/// `history` lists every point emitted on the slice, bottom to top. The
/// boundary is the pair of points that currently close the slice on its left
/// edge and on the left edge of the next slice.
#[derive(Debug, Clone, Default)]
pub struct AngularSlice {
    history: Vec<PointRef>,
    boundary: Option<(PointRef, PointRef)>,
}

impl AngularSlice {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn history(&self) -> &[PointRef] {
        &self.history
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub(crate) fn push(&mut self, point: PointRef) {
        self.history.push(point);
    }

    /// Current `(left, right)` boundary, `None` until the first advance.
    #[must_use]
    pub fn boundary(&self) -> Option<(PointRef, PointRef)> {
        self.boundary
    }

    pub(crate) fn set_boundary(&mut self, left: PointRef, right: PointRef) {
        self.boundary = Some((left, right));
    }

    /// Position of point `index` in the history, searching from `from`.
    #[must_use]
    pub fn locate(&self, index: usize, from: usize) -> Option<usize> {
        self.history
            .get(from..)?
            .iter()
            .position(|p| p.index == index)
            .map(|k| k + from)
    }

    /// Indices of the points in `from..to` that lie on `surface`.
    pub fn run(
        &self,
        from: usize,
        to: usize,
        surface: Surface,
    ) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.history[from..to]
            .iter()
            .filter(move |p| p.surface == surface)
            .map(|p| p.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice() -> AngularSlice {
        let mut s = AngularSlice::new();
        for (i, recess) in [(0, false), (4, true), (7, false), (9, true), (12, false)] {
            s.push(if recess {
                PointRef::recess(i)
            } else {
                PointRef::face(i)
            });
        }
        s
    }

    #[test]
    fn locate_searches_forward() {
        let s = slice();
        assert_eq!(s.locate(7, 0), Some(2));
        assert_eq!(s.locate(7, 2), Some(2));
        assert_eq!(s.locate(7, 3), None);
        assert_eq!(s.locate(5, 0), None);
        assert_eq!(s.locate(0, 9), None);
    }

    #[test]
    fn run_filters_by_surface() {
        let s = slice();
        let face: Vec<usize> = s.run(0, 4, Surface::Face).collect();
        assert_eq!(face, vec![0, 7]);
        let recess: Vec<usize> = s.run(1, 5, Surface::Recess).rev().collect();
        assert_eq!(recess, vec![9, 4]);
        assert_eq!(s.len(), 5);
        assert!(s.boundary().is_none());
    }
}
