//! Weak Fréchet distance via a min-max path on the freespace grid graph.

use petgraph::graph::{NodeIndex, UnGraph};

use crate::error::{Error, Result};
use crate::geom::{sq_distance, sq_distance_segment, PointD};

/// One step of a weak Fréchet matching: the segment-index pair on the
/// two polylines and the distance needed to leave this cell. The first
/// entry is the sentinel `(-1, -1)` carrying the start-point distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchingStep {
    pub segment_a: isize,
    pub segment_b: isize,
    pub distance: f64,
}

/// Weak Fréchet distance between two polylines.
pub fn weak_frechet<const D: usize>(a: &[PointD<D>], b: &[PointD<D>]) -> Result<f64> {
    solve(a, b, None)
}

/// Weak Fréchet distance plus a matching witnessing it, in forward order.
pub fn weak_frechet_with_matching<const D: usize>(
    a: &[PointD<D>],
    b: &[PointD<D>],
) -> Result<(f64, Vec<MatchingStep>)> {
    let mut matching = Vec::new();
    let value = solve(a, b, Some(&mut matching))?;
    Ok((value, matching))
}

fn solve<const D: usize>(
    a: &[PointD<D>],
    b: &[PointD<D>],
    mut matching: Option<&mut Vec<MatchingStep>>,
) -> Result<f64> {
    if a.is_empty() || b.is_empty() {
        return Err(Error::InvalidInput("weak Frechet needs non-empty polylines"));
    }
    // A single point matches against the farthest vertex of the other line.
    if a.len() == 1 || b.len() == 1 {
        let (point, poly) = if a.len() == 1 { (&a[0], b) } else { (&b[0], a) };
        let max_sq = poly
            .iter()
            .map(|p| sq_distance(point, p))
            .fold(0.0f64, f64::max);
        return Ok(max_sq.sqrt());
    }

    let start_match_sq = sq_distance(&a[0], &b[0]);
    let end_match_sq = sq_distance(&a[a.len() - 1], &b[b.len() - 1]);
    if a.len() <= 2 && b.len() <= 2 {
        let value = start_match_sq.max(end_match_sq).sqrt();
        if let Some(out) = matching.as_mut() {
            out.push(MatchingStep {
                segment_a: 0,
                segment_b: 0,
                distance: value,
            });
        }
        return Ok(value);
    }

    let seg_count_a = a.len() - 1;
    let seg_count_b = b.len() - 1;
    let vertex = |i: usize, j: usize| NodeIndex::new(i + j * seg_count_a);

    // Edge weights are the squared distances a cell boundary needs to open.
    let mut graph: UnGraph<(), f64> = UnGraph::with_capacity(
        seg_count_a * seg_count_b,
        2 * seg_count_a * seg_count_b,
    );
    for _ in 0..seg_count_a * seg_count_b {
        graph.add_node(());
    }
    // Crossing to the next A-segment is gated by vertex-to-segment
    // distance on B, and symmetrically for the next B-segment.
    for j in 0..seg_count_b {
        for i in 0..seg_count_a - 1 {
            let w = sq_distance_segment(&b[j], &a[i], &a[i + 1]);
            graph.add_edge(vertex(i, j), vertex(i + 1, j), w);
        }
    }
    for i in 0..seg_count_a {
        for j in 0..seg_count_b - 1 {
            let w = sq_distance_segment(&a[i], &b[j], &b[j + 1]);
            graph.add_edge(vertex(i, j), vertex(i, j + 1), w);
        }
    }

    let source = NodeIndex::new(0);
    let target = NodeIndex::new(graph.node_count() - 1);
    let (grid_match_sq, predecessors) = minimax_dijkstra(&graph, source);
    let value = start_match_sq
        .max(end_match_sq)
        .max(grid_match_sq[target.index()])
        .sqrt();

    if let Some(out) = matching.as_mut() {
        let to_indices = |node: NodeIndex| {
            let j = node.index() / seg_count_a;
            let i = node.index() - j * seg_count_a;
            (i as isize, j as isize)
        };
        let mut steps = Vec::new();
        let (sa, sb) = to_indices(target);
        steps.push(MatchingStep {
            segment_a: sa,
            segment_b: sb,
            distance: end_match_sq.sqrt(),
        });
        let mut current = target;
        while current != source {
            let prev = predecessors[current.index()];
            let weight = graph
                .find_edge(prev, current)
                .and_then(|e| graph.edge_weight(e))
                .copied()
                .unwrap_or(0.0);
            let (sa, sb) = to_indices(prev);
            steps.push(MatchingStep {
                segment_a: sa,
                segment_b: sb,
                distance: weight.sqrt(),
            });
            current = prev;
        }
        steps.push(MatchingStep {
            segment_a: -1,
            segment_b: -1,
            distance: start_match_sq.sqrt(),
        });
        steps.reverse();
        out.extend(steps);
    }

    Ok(value)
}

/// Dijkstra with `combine = max`: the cost of a path is its heaviest
/// edge, and the search settles nodes by lightest such bottleneck.
fn minimax_dijkstra(graph: &UnGraph<(), f64>, source: NodeIndex) -> (Vec<f64>, Vec<NodeIndex>) {
    use petgraph::visit::EdgeRef;
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    #[derive(PartialEq)]
    struct Entry(f64, usize);
    impl Eq for Entry {}
    impl PartialOrd for Entry {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Entry {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.total_cmp(&other.0).then(self.1.cmp(&other.1))
        }
    }

    let n = graph.node_count();
    let mut dist = vec![f64::MAX; n];
    let mut predecessors = vec![source; n];
    let mut heap = BinaryHeap::new();
    dist[source.index()] = 0.0;
    heap.push(Reverse(Entry(0.0, source.index())));
    while let Some(Reverse(Entry(d, u))) = heap.pop() {
        if d > dist[u] {
            continue;
        }
        let node = NodeIndex::new(u);
        for edge in graph.edges(node) {
            let other = if edge.source() == node {
                edge.target()
            } else {
                edge.source()
            };
            let v = other.index();
            let next = d.max(*edge.weight());
            if next < dist[v] {
                dist[v] = next;
                predecessors[v] = node;
                heap.push(Reverse(Entry(next, v)));
            }
        }
    }
    (dist, predecessors)
}
