//! One escape network: identifier, graph and flow engine.

use ef_core::{Flow, NetworkId, RoomId};
use ef_flow::{FlowEngine, FlowRecord};
use ef_graph::{EdgeInsert, Graph, GraphBuilder, GraphResult, Section, validate_extension};

use crate::error::{AppError, AppResult};

/// A named network owning its graph and the engine that caches its flows.
#[derive(Debug, Clone)]
pub struct Network {
    id: NetworkId,
    graph: Graph,
    engine: FlowEngine,
}

impl Network {
    /// Wrap an already validated graph.
    pub fn new(id: NetworkId, graph: Graph) -> Self {
        Self {
            id,
            graph,
            engine: FlowEngine::new(),
        }
    }

    /// Validate the initial sections and build the network.
    pub fn create(id: NetworkId, sections: impl IntoIterator<Item = Section>) -> GraphResult<Self> {
        let mut builder = GraphBuilder::new(id.as_str());
        for section in sections {
            builder.add_section(section);
        }
        Ok(Self::new(id, builder.build()?))
    }

    pub fn id(&self) -> &NetworkId {
        &self.id
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn engine(&self) -> &FlowEngine {
        &self.engine
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Add or overwrite one section, keeping the network valid.
    ///
    /// Every accepted change clears the flow cache.
    pub fn add_section(&mut self, section: &Section) -> GraphResult<EdgeInsert> {
        validate_extension(&self.graph, section)?;
        let outcome = self.graph.add_section(section);
        self.engine.clear_cache();
        tracing::info!(network = %self.id, %section, ?outcome, "section added");
        Ok(outcome)
    }

    /// Maximum flow between a start room (no incoming sections) and a
    /// target room (no outgoing sections).
    pub fn max_flow(&mut self, start: &RoomId, end: &RoomId) -> AppResult<Flow> {
        let reject = |reason| AppError::InvalidEndpoints {
            start: start.clone(),
            end: end.clone(),
            reason,
        };
        if start == end {
            return Err(reject("start and target room are the same"));
        }
        if !self.graph.contains_room(start) || !self.graph.contains_room(end) {
            return Err(reject("room is not part of the network"));
        }
        if !self.graph.is_source(start) {
            return Err(reject("start room has incoming sections"));
        }
        if !self.graph.is_sink(end) {
            return Err(reject("target room has outgoing sections"));
        }
        Ok(self.engine.compute_max_flow(&mut self.graph, start, end))
    }

    /// Sections sorted by source room, then target room.
    pub fn sections(&self) -> Vec<Section> {
        self.graph.sorted_sections()
    }

    /// Cached flows sorted by flow, start room, target room.
    pub fn cached_flows(&self) -> Vec<FlowRecord> {
        self.engine.cached_flows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(s: &str) -> RoomId {
        RoomId::parse(s).unwrap()
    }

    fn section(s: &str, c: i64, t: &str) -> Section {
        Section::parse_parts(s, c, t).unwrap()
    }

    fn network() -> Network {
        Network::create(
            NetworkId::parse("HQ").unwrap(),
            [section("a", 3, "b"), section("b", 2, "c")],
        )
        .unwrap()
    }

    #[test]
    fn create_and_query() {
        let mut net = network();
        assert_eq!(net.node_count(), 3);
        assert_eq!(net.graph().name(), "HQ");
        assert_eq!(net.max_flow(&room("a"), &room("c")).unwrap(), 2);
        assert_eq!(net.cached_flows().len(), 1);
    }

    #[test]
    fn add_section_clears_cache() {
        let mut net = network();
        net.max_flow(&room("a"), &room("c")).unwrap();
        let outcome = net.add_section(&section("b", 7, "c")).unwrap();
        assert!(matches!(outcome, EdgeInsert::Overwritten(_)));
        assert!(net.cached_flows().is_empty());
        assert_eq!(net.max_flow(&room("a"), &room("c")).unwrap(), 3);
    }

    #[test]
    fn rejected_section_keeps_cache() {
        let mut net = network();
        net.max_flow(&room("a"), &room("c")).unwrap();
        assert!(net.add_section(&section("c", 1, "a")).is_err());
        assert_eq!(net.cached_flows().len(), 1);
        assert_eq!(net.graph().edges().len(), 2);
    }

    #[test]
    fn query_endpoints_are_validated() {
        let mut net = network();
        for (s, t) in [("a", "a"), ("a", "q"), ("b", "c"), ("a", "b")] {
            assert!(matches!(
                net.max_flow(&room(s), &room(t)),
                Err(AppError::InvalidEndpoints { .. })
            ));
        }
        assert!(net.cached_flows().is_empty());
    }
}
