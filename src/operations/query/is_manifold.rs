use std::collections::{HashMap, HashSet, VecDeque};

use crate::mesh::Polyhedron;

/// Edge bookkeeping of a polyhedron.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManifoldReport {
    /// Faces with fewer than three points or a repeated point.
    pub degenerate_faces: usize,
    /// Face references to points that do not exist.
    pub dangling_indices: usize,
    /// Directed edges with no matching reverse edge.
    pub unmatched_edges: usize,
    /// Directed edges used by more than one face.
    pub repeated_edges: usize,
    /// Connected groups of faces.
    pub shells: usize,
}

impl ManifoldReport {
    /// Every edge borders exactly two faces with opposite winding.
    #[must_use]
    pub fn is_manifold(&self) -> bool {
        self.degenerate_faces == 0
            && self.dangling_indices == 0
            && self.unmatched_edges == 0
            && self.repeated_edges == 0
    }
}

/// Checks that a polyhedron is a closed, consistently wound surface.
pub struct IsManifold<'a> {
    mesh: &'a Polyhedron,
}

impl<'a> IsManifold<'a> {
    /// Creates a new `IsManifold` query.
    #[must_use]
    pub fn new(mesh: &'a Polyhedron) -> Self {
        Self { mesh }
    }

    /// Executes the check.
    #[must_use]
    pub fn execute(&self) -> ManifoldReport {
        let mut report = ManifoldReport::default();
        let point_count = self.mesh.points.len();
        let mut edge_count: HashMap<(usize, usize), usize> = HashMap::new();
        let mut edge_owner: HashMap<(usize, usize), usize> = HashMap::new();

        for (face_idx, face) in self.mesh.faces.iter().enumerate() {
            let distinct: HashSet<usize> = face.iter().copied().collect();
            if face.len() < 3 || distinct.len() != face.len() {
                report.degenerate_faces += 1;
            }
            report.dangling_indices += face.iter().filter(|&&i| i >= point_count).count();
            for (k, &start) in face.iter().enumerate() {
                let end = face[(k + 1) % face.len()];
                *edge_count.entry((start, end)).or_insert(0) += 1;
                edge_owner.entry((start, end)).or_insert(face_idx);
            }
        }

        // Faces are adjacent when one owns (a, b) and the other (b, a).
        let mut adjacent: Vec<Vec<usize>> = vec![Vec::new(); self.mesh.faces.len()];
        for (&(start, end), &count) in &edge_count {
            if count > 1 {
                report.repeated_edges += 1;
            }
            match edge_owner.get(&(end, start)) {
                Some(&other) => {
                    if let Some(&owner) = edge_owner.get(&(start, end)) {
                        adjacent[owner].push(other);
                    }
                }
                None => report.unmatched_edges += 1,
            }
        }

        report.shells = count_components(&adjacent);
        report
    }
}

/// Breadth-first count of connected components.
fn count_components(adjacent: &[Vec<usize>]) -> usize {
    let mut visited = vec![false; adjacent.len()];
    let mut components = 0;
    for start in 0..adjacent.len() {
        if visited[start] {
            continue;
        }
        components += 1;
        visited[start] = true;
        let mut queue = VecDeque::from([start]);
        while let Some(curr) = queue.pop_front() {
            for &next in &adjacent[curr] {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
    }
    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point3;

    fn tetrahedron() -> Polyhedron {
        Polyhedron {
            points: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
            ],
            faces: vec![vec![0, 2, 1], vec![0, 1, 3], vec![1, 2, 3], vec![2, 0, 3]],
        }
    }

    #[test]
    fn tetrahedron_is_manifold() {
        let report = IsManifold::new(&tetrahedron()).execute();
        assert!(report.is_manifold());
        assert_eq!(report.shells, 1);
    }

    #[test]
    fn missing_face_leaves_unmatched_edges() {
        let mut mesh = tetrahedron();
        mesh.faces.pop();
        let report = IsManifold::new(&mesh).execute();
        assert!(!report.is_manifold());
        assert_eq!(report.unmatched_edges, 3);
    }

    #[test]
    fn flipped_face_repeats_edges() {
        let mut mesh = tetrahedron();
        mesh.faces[0].reverse();
        let report = IsManifold::new(&mesh).execute();
        assert!(!report.is_manifold());
        assert!(report.repeated_edges > 0);
    }

    #[test]
    fn degenerate_and_dangling_faces_are_counted() {
        let mut mesh = tetrahedron();
        mesh.faces.push(vec![0, 1]);
        mesh.faces.push(vec![0, 1, 9]);
        let report = IsManifold::new(&mesh).execute();
        assert_eq!(report.degenerate_faces, 1);
        assert_eq!(report.dangling_indices, 1);
    }

    #[test]
    fn separate_solids_are_separate_shells() {
        let mut mesh = tetrahedron();
        mesh.merge(tetrahedron());
        let report = IsManifold::new(&mesh).execute();
        assert!(report.is_manifold());
        assert_eq!(report.shells, 2);
    }
}
