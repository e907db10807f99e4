//! Breadth-first augmenting-path search.

use std::collections::VecDeque;

use ef_core::{EdgeId, Flow, NodeId, UNBOUNDED_FLOW};
use ef_graph::Graph;

use crate::residual::ResidualNetwork;

/// Arcs from start to end, in travel order. Every arc appears once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentingPath {
    edges: Vec<EdgeId>,
}

impl AugmentingPath {
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Smallest strictly positive remaining capacity along the path.
    ///
    /// `None` when no arc constrains the path; the sentinel is never returned.
    pub fn bottleneck(&self, graph: &Graph) -> Option<Flow> {
        let bottleneck = self
            .edges
            .iter()
            .filter_map(|&id| graph.edge_by_id(id))
            .map(|e| e.remaining())
            .filter(|&r| r > 0)
            .fold(UNBOUNDED_FLOW, Flow::min);
        (bottleneck < UNBOUNDED_FLOW).then_some(bottleneck)
    }
}

/// Shortest (fewest arcs) path from `start` to `end` in the residual network.
///
/// Each room keeps the arc it was first discovered through; the search stops
/// as soon as `end` is discovered.
pub fn shortest_augmenting_path(
    graph: &Graph,
    residual: &ResidualNetwork,
    start: NodeId,
    end: NodeId,
) -> Option<AugmentingPath> {
    let node_count = graph.node_count();
    if start == end || start.slot() >= node_count || end.slot() >= node_count {
        return None;
    }

    let mut discovered_by: Vec<Option<EdgeId>> = vec![None; node_count];
    let mut visited = vec![false; node_count];
    let mut queue = VecDeque::new();
    visited[start.slot()] = true;
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        for &arc in residual.arcs_from(node) {
            let Some(edge) = graph.edge_by_id(arc) else {
                continue;
            };
            if !edge.has_remaining() || visited[edge.target.slot()] {
                continue;
            }
            visited[edge.target.slot()] = true;
            discovered_by[edge.target.slot()] = Some(arc);
            if edge.target == end {
                return reconstruct(graph, &discovered_by, start, end);
            }
            queue.push_back(edge.target);
        }
    }

    None
}

/// Walk discovery arcs back from `end`, then reverse into travel order.
fn reconstruct(
    graph: &Graph,
    discovered_by: &[Option<EdgeId>],
    start: NodeId,
    end: NodeId,
) -> Option<AugmentingPath> {
    let mut edges = Vec::new();
    let mut node = end;
    while node != start {
        let arc = discovered_by[node.slot()]?;
        edges.push(arc);
        node = graph.edge_by_id(arc)?.source;
    }
    edges.reverse();
    Some(AugmentingPath { edges })
}
