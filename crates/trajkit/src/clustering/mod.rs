//! Subtrajectory clustering over the self-freespace diagram.
//!
//! The polyline is matched against itself with a given radius; free cell
//! corners induce a directed grid graph pointing down and left. A sweep
//! line counts, for each column range, how many distinct monotone paths
//! connect the range's right column back to its left column; the longest
//! range whose count stays above the threshold is the reported cluster.

use petgraph::graphmap::DiGraphMap;

use crate::error::{Error, Result};
use crate::freespace::{Corner, FreeSpaceDiagram};
use crate::geom::{Tolerances, Vec2};

/// Subtrajectory clustering configuration.
#[derive(Clone, Copy, Debug)]
pub struct SubTrajectoryClustering {
    /// Minimum number of monotone paths for a column range to count as a
    /// cluster.
    pub min_cluster_size: usize,
    pub radius: f64,
    pub tolerances: Tolerances,
}

/// The longest cluster found by the sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClusterResult {
    /// Length of the clustered column range.
    pub length: usize,
    /// First vertex index of the clustered subtrajectory.
    pub start: usize,
    /// One-past-the-last vertex index of the clustered subtrajectory.
    pub end: usize,
    /// Number of monotone paths supporting the cluster.
    pub size: usize,
}

impl SubTrajectoryClustering {
    pub fn new(min_cluster_size: usize, radius: f64) -> Self {
        Self {
            min_cluster_size,
            radius,
            tolerances: Tolerances::default(),
        }
    }

    /// Cluster `polyline` against itself.
    pub fn cluster(&self, polyline: &[Vec2]) -> Result<ClusterResult> {
        if polyline.len() < 2 {
            return Err(Error::InvalidInput("clustering needs at least two vertices"));
        }
        if self.radius <= 0.0 {
            return Err(Error::InvalidInput("clustering radius must be positive"));
        }
        let diagram = FreeSpaceDiagram::new(polyline, polyline, self.radius, self.tolerances);
        let num_cols = polyline.len();
        let graph = build_corner_graph(&diagram, num_cols);
        let sweep = Sweep {
            graph: &graph,
            num_cols,
            num_rows: num_cols,
        };

        let mut best = ClusterResult {
            length: 0,
            start: 0,
            end: 0,
            size: 0,
        };
        let mut range_start = 0usize;
        while range_start < num_cols - 1 {
            let mut range_end = range_start + 1;
            let mut paths = sweep.count_paths(range_start, range_end);
            let mut cluster_size = paths;
            if paths >= self.min_cluster_size && range_end < num_cols {
                range_end += 1;
                paths = sweep.count_paths(range_start, range_end);
                cluster_size = paths;
                while paths >= self.min_cluster_size {
                    range_end += 1;
                    if range_end >= num_cols {
                        break;
                    }
                    cluster_size = paths;
                    paths = sweep.count_paths(range_start, range_end);
                }
            }
            if range_end - range_start > best.length {
                best = ClusterResult {
                    length: range_end - range_start,
                    start: range_start,
                    end: range_end,
                    size: cluster_size,
                };
            }
            range_start = range_end;
        }
        Ok(best)
    }
}

/// Directed edges between free corners of each cell: rightward and
/// upward corners point down/left, plus the downward diagonal.
fn build_corner_graph(diagram: &FreeSpaceDiagram, num_cols: usize) -> DiGraphMap<usize, ()> {
    let mut graph = DiGraphMap::new();
    for (row, col, cell) in diagram.iter() {
        let corners = cell.free_corners();
        let bottom_left = num_cols * row + col;
        let bottom_right = bottom_left + 1;
        let top_left = num_cols * (row + 1) + col;
        let top_right = top_left + 1;
        let free = |c: Corner| corners.contains(c);
        if free(Corner::TopLeft) && free(Corner::BottomLeft) {
            graph.add_edge(top_left, bottom_left, ());
        }
        if free(Corner::TopRight) && free(Corner::TopLeft) {
            graph.add_edge(top_right, top_left, ());
        }
        if free(Corner::TopRight) && free(Corner::BottomRight) {
            graph.add_edge(top_right, bottom_right, ());
        }
        if free(Corner::BottomRight) && free(Corner::BottomLeft) {
            graph.add_edge(bottom_right, bottom_left, ());
        }
        if free(Corner::TopRight) && free(Corner::BottomLeft) {
            graph.add_edge(top_right, bottom_left, ());
        }
    }
    graph
}

struct Sweep<'a> {
    graph: &'a DiGraphMap<usize, ()>,
    num_cols: usize,
    num_rows: usize,
}

impl Sweep<'_> {
    /// Follow left and diagonal edges from `vertex` until the target
    /// column is reached or no edge continues.
    fn traverse_left(&self, column: usize, mut vertex: usize) -> usize {
        loop {
            if vertex >= 1 && self.graph.contains_edge(vertex, vertex - 1) {
                vertex -= 1;
            } else if vertex >= 1 + self.num_cols
                && self.graph.contains_edge(vertex, vertex - 1 - self.num_cols)
            {
                vertex -= 1 + self.num_cols;
            } else {
                return vertex;
            }
            if vertex % self.num_cols == column {
                return vertex;
            }
        }
    }

    /// Count monotone paths from the top of column `end` back to column
    /// `start`, sweeping downward.
    fn count_paths(&self, start: usize, end: usize) -> usize {
        let mut count = 0usize;
        let mut cursor = (self.num_rows - 1) * self.num_cols + end;
        while cursor != end {
            let left = self.traverse_left(start, cursor);
            let reached = left % self.num_cols == start;
            let stayed = cursor == left + (end - start);
            if reached && !stayed {
                cursor = left + (end - start);
                count += 1;
            } else {
                if cursor < self.num_cols {
                    break;
                }
                cursor -= self.num_cols;
                if reached && stayed {
                    count += 1;
                }
            }
        }
        if cursor == end {
            let left = self.traverse_left(start, cursor);
            if left % self.num_cols == start {
                count += 1;
            }
        }
        count
    }
}

#[cfg(test)]
mod tests;
