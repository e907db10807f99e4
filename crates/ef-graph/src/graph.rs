//! Core graph data structures.

use std::collections::HashMap;

use ef_core::{EdgeId, Flow, NodeId, RoomId};

use crate::section::Section;

/// Whether an arena edge belongs to the network or to the residual overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// A corridor of the network.
    Forward,
    /// Reverse counterpart of a forward edge; capacity 0, holds undoable flow.
    Residual,
}

/// A directed edge with capacity and current flow.
///
/// `residual` points at the mutual counterpart in the same arena, if one was
/// created: `edges[e.residual].residual == Some(e.id)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub capacity: Flow,
    pub flow: Flow,
    pub residual: Option<EdgeId>,
    pub kind: EdgeKind,
}

impl Edge {
    /// Capacity still available along this edge.
    pub fn remaining(&self) -> Flow {
        self.capacity - self.flow
    }

    pub fn has_remaining(&self) -> bool {
        self.remaining() > 0
    }
}

/// Outcome of [`Graph::add_edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeInsert {
    /// A new edge was appended.
    Inserted(EdgeId),
    /// An edge with the same endpoints existed; its capacity was replaced.
    Overwritten(EdgeId),
}

impl EdgeInsert {
    pub fn edge_id(self) -> EdgeId {
        match self {
            EdgeInsert::Inserted(id) | EdgeInsert::Overwritten(id) => id,
        }
    }
}

/// One named escape network: rooms, corridors and the derived adjacency.
///
/// The graph stores:
/// - Rooms in a vector indexed by `NodeId`, plus a label lookup.
/// - Edges in an arena indexed by `EdgeId`. Forward edges occupy the prefix
///   `0..forward_count` and never move; residual edges follow them.
/// - Compact adjacency: for each room, its successor rooms over forward edges.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    name: String,
    rooms: Vec<RoomId>,
    room_ids: HashMap<RoomId, NodeId>,
    edges: Vec<Edge>,
    forward_count: usize,

    /// Room i's successors are in successors[successor_offsets[i]..successor_offsets[i+1]].
    successor_offsets: Vec<usize>,
    successors: Vec<NodeId>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            successor_offsets: vec![0],
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn node_count(&self) -> usize {
        self.rooms.len()
    }

    /// All rooms, indexed by `NodeId`.
    pub fn rooms(&self) -> &[RoomId] {
        &self.rooms
    }

    pub fn room(&self, id: NodeId) -> Option<&RoomId> {
        self.rooms.get(id.slot())
    }

    pub fn node_id(&self, room: &RoomId) -> Option<NodeId> {
        self.room_ids.get(room).copied()
    }

    pub fn contains_room(&self, room: &RoomId) -> bool {
        self.room_ids.contains_key(room)
    }

    /// Forward edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges[..self.forward_count]
    }

    /// Residual edges created by the last flow computation.
    pub fn residual_edges(&self) -> &[Edge] {
        &self.edges[self.forward_count..]
    }

    /// Whole arena: forward edges then residual edges.
    pub fn arena(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_by_id(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.slot())
    }

    /// Forward edge with exactly these endpoints.
    pub fn edge(&self, source: &RoomId, target: &RoomId) -> Option<&Edge> {
        let source = self.node_id(source)?;
        let target = self.node_id(target)?;
        self.edges()
            .iter()
            .find(|e| e.source == source && e.target == target)
    }

    /// Insert a corridor or overwrite the capacity of an existing one.
    ///
    /// Overwriting leaves the flow untouched. Inserting drops any residual
    /// edges so that forward ids stay a stable prefix of the arena.
    pub fn add_edge(&mut self, source: RoomId, target: RoomId, capacity: Flow) -> EdgeInsert {
        if let Some(id) = self.edge(&source, &target).map(|e| e.id) {
            self.edges[id.slot()].capacity = capacity;
            return EdgeInsert::Overwritten(id);
        }

        self.discard_residuals();
        let source = self.intern(source);
        let target = self.intern(target);
        let id = EdgeId::from_index(self.edges.len() as u32);
        self.edges.push(Edge {
            id,
            source,
            target,
            capacity,
            flow: 0,
            residual: None,
            kind: EdgeKind::Forward,
        });
        self.forward_count = self.edges.len();
        self.rebuild_adjacency();
        EdgeInsert::Inserted(id)
    }

    /// Convenience wrapper over [`Graph::add_edge`].
    pub fn add_section(&mut self, section: &Section) -> EdgeInsert {
        self.add_edge(
            section.source.clone(),
            section.target.clone(),
            section.capacity,
        )
    }

    /// Successor rooms of a room over forward edges (order is not meaningful).
    pub fn successors(&self, id: NodeId) -> &[NodeId] {
        let idx = id.slot();
        if idx >= self.rooms.len() {
            return &[];
        }
        let start = self.successor_offsets[idx];
        let end = self.successor_offsets[idx + 1];
        &self.successors[start..end]
    }

    pub fn out_degree(&self, id: NodeId) -> usize {
        self.successors(id).len()
    }

    pub fn in_degree(&self, id: NodeId) -> usize {
        self.edges().iter().filter(|e| e.target == id).count()
    }

    /// A room with no incoming corridor.
    pub fn is_source(&self, room: &RoomId) -> bool {
        self.node_id(room).is_some_and(|id| self.in_degree(id) == 0)
    }

    /// A room with no outgoing corridor.
    pub fn is_sink(&self, room: &RoomId) -> bool {
        self.node_id(room).is_some_and(|id| self.out_degree(id) == 0)
    }

    pub fn has_source(&self) -> bool {
        self.node_ids().any(|id| self.in_degree(id) == 0)
    }

    pub fn has_sink(&self) -> bool {
        self.node_ids().any(|id| self.out_degree(id) == 0)
    }

    /// Sum of forward flow entering a room.
    pub fn inflow(&self, id: NodeId) -> Flow {
        self.edges()
            .iter()
            .filter(|e| e.target == id)
            .map(|e| e.flow)
            .sum()
    }

    /// Sum of forward flow leaving a room.
    pub fn outflow(&self, id: NodeId) -> Flow {
        self.edges()
            .iter()
            .filter(|e| e.source == id)
            .map(|e| e.flow)
            .sum()
    }

    /// Section view of a forward edge.
    pub fn section(&self, edge: &Edge) -> Section {
        Section::new(
            self.rooms[edge.source.slot()].clone(),
            self.rooms[edge.target.slot()].clone(),
            edge.capacity,
        )
    }

    /// Forward edges sorted by source label, then target label.
    pub fn sorted_edges(&self) -> Vec<&Edge> {
        let mut edges: Vec<&Edge> = self.edges().iter().collect();
        let rooms = &self.rooms;
        edges.sort_by(|a, b| {
            (&rooms[a.source.slot()], &rooms[a.target.slot()])
                .cmp(&(&rooms[b.source.slot()], &rooms[b.target.slot()]))
        });
        edges
    }

    /// [`Graph::sorted_edges`] as sections.
    pub fn sorted_sections(&self) -> Vec<Section> {
        self.sorted_edges()
            .into_iter()
            .map(|e| self.section(e))
            .collect()
    }

    /// Deep copy for evaluating hypothetical changes.
    ///
    /// Forward edges keep capacity and flow; residual edges and links are not
    /// carried over.
    pub fn snapshot(&self) -> Graph {
        let mut copy = self.clone();
        copy.discard_residuals();
        copy
    }

    /// Zero every forward flow and drop all residual edges.
    pub fn reset_flows(&mut self) {
        self.discard_residuals();
        for edge in &mut self.edges {
            edge.flow = 0;
        }
    }

    /// Residual counterpart of a forward edge, created on first use.
    ///
    /// A fresh counterpart mirrors the forward flow so that routed flow can be
    /// undone through it.
    pub fn ensure_residual(&mut self, id: EdgeId) -> EdgeId {
        let forward = &self.edges[id.slot()];
        if let Some(residual) = forward.residual {
            return residual;
        }
        let residual = EdgeId::from_index(self.edges.len() as u32);
        let edge = Edge {
            id: residual,
            source: forward.target,
            target: forward.source,
            capacity: 0,
            flow: -forward.flow,
            residual: Some(id),
            kind: EdgeKind::Residual,
        };
        self.edges.push(edge);
        self.edges[id.slot()].residual = Some(residual);
        residual
    }

    /// Push `amount` along an edge and take it back from its counterpart.
    pub fn augment(&mut self, id: EdgeId, amount: Flow) {
        let edge = &mut self.edges[id.slot()];
        edge.flow += amount;
        let counterpart = edge.residual;
        if let Some(residual) = counterpart {
            self.edges[residual.slot()].flow -= amount;
        }
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.rooms.len() as u32).map(NodeId::from_index)
    }

    fn intern(&mut self, room: RoomId) -> NodeId {
        if let Some(&id) = self.room_ids.get(&room) {
            return id;
        }
        let id = NodeId::from_index(self.rooms.len() as u32);
        self.rooms.push(room.clone());
        self.room_ids.insert(room, id);
        id
    }

    fn discard_residuals(&mut self) {
        self.edges.truncate(self.forward_count);
        for edge in &mut self.edges {
            edge.residual = None;
        }
    }

    /// Rebuild compact adjacency from the forward edge set.
    fn rebuild_adjacency(&mut self) {
        let mut by_room: Vec<Vec<NodeId>> = vec![Vec::new(); self.rooms.len()];
        for edge in &self.edges[..self.forward_count] {
            by_room[edge.source.slot()].push(edge.target);
        }

        self.successor_offsets.clear();
        self.successors.clear();
        self.successor_offsets.push(0);
        for list in by_room {
            self.successors.extend(list);
            self.successor_offsets.push(self.successors.len());
        }
    }
}
