//! Imai-Iri min-link simplification over the shortcut DAG.

use std::collections::VecDeque;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::error::Result;
use crate::geom::{Tolerances, Vec2};

use super::chan_chin::ChanChin;

/// Min-link simplification: build the Chan-Chin shortcut DAG, then take
/// a breadth-first shortest path from the first to the last vertex.
#[derive(Clone, Copy, Debug)]
pub struct ImaiIri {
    pub epsilon: f64,
    pub tolerances: Tolerances,
}

impl ImaiIri {
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon,
            tolerances: Tolerances::default(),
        }
    }

    /// Kept vertex indices in along-trajectory order.
    pub fn simplify(&self, points: &[Vec2]) -> Result<Vec<usize>> {
        let n = points.len();
        if n == 0 {
            return Ok(Vec::new());
        }
        if n == 1 {
            return Ok(vec![0]);
        }
        let edge_creator = ChanChin {
            epsilon: self.epsilon,
            tolerances: self.tolerances,
        };
        let edges = edge_creator.shortcut_edges(points);

        let mut graph: DiGraph<(), ()> = DiGraph::with_capacity(n, edges.len());
        for _ in 0..n {
            graph.add_node(());
        }
        for (from, to) in edges {
            graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), ());
        }

        // Breadth-first search records one shortest predecessor tree;
        // consecutive edges guarantee the last vertex is reachable.
        let mut predecessors = vec![usize::MAX; n];
        predecessors[0] = 0;
        let mut queue = VecDeque::from([NodeIndex::new(0)]);
        while let Some(node) = queue.pop_front() {
            for next in graph.neighbors(node) {
                if predecessors[next.index()] == usize::MAX {
                    predecessors[next.index()] = node.index();
                    queue.push_back(next);
                }
            }
        }

        let mut path = vec![n - 1];
        while *path.last().unwrap_or(&0) != 0 {
            path.push(predecessors[path[path.len() - 1]]);
        }
        path.reverse();
        Ok(path)
    }
}
