//! Residual network derived from a graph's current flow state.

use ef_core::{EdgeId, NodeId};
use ef_graph::Graph;

/// Arcs with positive remaining capacity, grouped by source room.
///
/// Built fresh before every search. Shares the graph's room set; arcs are
/// arena ids of forward or residual edges.
#[derive(Debug, Clone)]
pub struct ResidualNetwork {
    /// Room i's arcs are in arcs[offsets[i]..offsets[i+1]].
    offsets: Vec<usize>,
    arcs: Vec<EdgeId>,
}

impl ResidualNetwork {
    /// Derive the residual network, creating residual counterparts on demand.
    ///
    /// A forward edge with remaining capacity is included and gets its
    /// counterpart if it has none yet. A counterpart is included whenever it
    /// has remaining capacity, i.e. routed flow that can be undone.
    pub fn build(graph: &mut Graph) -> Self {
        let forward: Vec<EdgeId> = graph.edges().iter().map(|e| e.id).collect();
        let mut included: Vec<EdgeId> = Vec::with_capacity(forward.len() * 2);

        for id in forward {
            let Some(edge) = graph.edge_by_id(id) else {
                continue;
            };
            if edge.has_remaining() {
                graph.ensure_residual(id);
                included.push(id);
            }
            let counterpart = graph.edge_by_id(id).and_then(|e| e.residual);
            if let Some(residual) = counterpart {
                if graph.edge_by_id(residual).is_some_and(|r| r.has_remaining()) {
                    included.push(residual);
                }
            }
        }

        Self::group_by_source(graph, included)
    }

    fn group_by_source(graph: &Graph, included: Vec<EdgeId>) -> Self {
        let arena = graph.arena();
        let mut offsets = vec![0usize; graph.node_count() + 1];
        for id in &included {
            offsets[arena[id.slot()].source.slot() + 1] += 1;
        }
        for i in 1..offsets.len() {
            offsets[i] += offsets[i - 1];
        }

        let mut cursor = offsets.clone();
        let mut arcs = vec![EdgeId::from_index(0); included.len()];
        for id in included {
            let slot = &mut cursor[arena[id.slot()].source.slot()];
            arcs[*slot] = id;
            *slot += 1;
        }

        Self { offsets, arcs }
    }

    /// Arcs leaving a room.
    pub fn arcs_from(&self, node: NodeId) -> &[EdgeId] {
        let idx = node.slot();
        if idx + 1 >= self.offsets.len() {
            return &[];
        }
        &self.arcs[self.offsets[idx]..self.offsets[idx + 1]]
    }

    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    pub fn contains(&self, id: EdgeId) -> bool {
        self.arcs.contains(&id)
    }
}
