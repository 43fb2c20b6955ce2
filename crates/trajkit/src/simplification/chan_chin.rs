//! Chan-Chin shortcut edges via running wedge intersections.

use std::collections::BTreeSet;

use crate::geom::{Tolerances, Vec2, Wedge};

/// Builds the set of feasible epsilon-shortcut edges of a polyline.
///
/// An edge `(i, j)` is feasible when every intermediate vertex lies in
/// the running intersection of the wedges from `p_i` tangent to the
/// epsilon-disks of `p_{i+1}, ..., p_j`. Two sweeps (forward and over
/// the reversed polyline) are intersected to enforce the condition from
/// both sides.
#[derive(Clone, Copy, Debug)]
pub struct ChanChin {
    pub epsilon: f64,
    pub tolerances: Tolerances,
}

impl ChanChin {
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon,
            tolerances: Tolerances::default(),
        }
    }

    /// Shortcut edges sorted by `(from, to)`; consecutive edges
    /// `(i, i+1)` are always present.
    pub fn shortcut_edges(&self, points: &[Vec2]) -> Vec<(usize, usize)> {
        let n = points.len();
        if n < 2 {
            return Vec::new();
        }
        let forward = self.sweep(points);
        let reversed_points: Vec<Vec2> = points.iter().rev().copied().collect();
        let backward: BTreeSet<(usize, usize)> = self
            .sweep(&reversed_points)
            .into_iter()
            .map(|(a, b)| (n - 1 - b, n - 1 - a))
            .collect();
        let forward: BTreeSet<(usize, usize)> = forward.into_iter().collect();
        forward.intersection(&backward).copied().collect()
    }

    fn sweep(&self, points: &[Vec2]) -> Vec<(usize, usize)> {
        let n = points.len();
        let mut edges = Vec::new();
        for i in 0..n - 1 {
            let mut running = Wedge::new(points[i], points[i + 1], self.epsilon, self.tolerances);
            edges.push((i, i + 1));
            if i == n - 2 {
                break;
            }
            if running.is_empty() {
                // The next vertex sits within epsilon of the apex; no
                // wedge constraint survives, so no longer shortcut does.
                continue;
            }
            for j in i + 2..n {
                let wedge = Wedge::new(points[i], points[j], self.epsilon, self.tolerances);
                running = if wedge.is_empty() {
                    Wedge::default()
                } else {
                    running.intersect(&wedge)
                };
                if running.is_empty() {
                    break;
                }
                if running.contains(points[j]) {
                    edges.push((i, j));
                }
            }
        }
        edges
    }
}
