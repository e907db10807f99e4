//! Memoizing max-flow engine.

use std::collections::HashMap;
use std::time::Instant;

use ef_core::{Flow, NodeId, RoomId};
use ef_graph::Graph;

use crate::pair::{FlowRecord, RoutePair};
use crate::residual::ResidualNetwork;
use crate::search::shortest_augmenting_path;

/// What the most recent [`FlowEngine::compute_max_flow`] call did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlowStats {
    /// Answer came from the cache; the graph was not touched.
    pub cache_hit: bool,
    /// Augmenting paths applied.
    pub augmentations: usize,
}

/// Run Edmonds–Karp from a cold start and return (max flow, augmentations).
///
/// All flows are zeroed and residual edges discarded first, so flows left by
/// an earlier computation for another pair are not reused. On return the
/// graph's forward edges carry a maximum flow from `start` to `end`.
pub fn edmonds_karp(graph: &mut Graph, start: NodeId, end: NodeId) -> (Flow, usize) {
    graph.reset_flows();

    let mut augmentations = 0;
    loop {
        let residual = ResidualNetwork::build(graph);
        let Some(path) = shortest_augmenting_path(graph, &residual, start, end) else {
            break;
        };
        let Some(bottleneck) = path.bottleneck(graph) else {
            break;
        };

        for &id in path.edges() {
            graph.augment(id, bottleneck);
        }
        augmentations += 1;
        tracing::trace!(
            network = graph.name(),
            arcs = path.len(),
            bottleneck,
            "augmented"
        );
    }

    (graph.inflow(end), augmentations)
}

/// Max-flow calculator for one network, with per-pair memoization.
///
/// The cache is only valid for the graph state it was filled from; callers
/// must [`FlowEngine::clear_cache`] after every edge mutation.
#[derive(Debug, Clone, Default)]
pub struct FlowEngine {
    cache: HashMap<RoutePair, Flow>,
    last_stats: Option<FlowStats>,
}

impl FlowEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum flow from `start` to `end`.
    ///
    /// Cached pairs are answered without touching `graph`. Otherwise the flow
    /// is computed from scratch, cached and returned. Equal or unknown rooms
    /// yield 0 and are not cached.
    pub fn compute_max_flow(&mut self, graph: &mut Graph, start: &RoomId, end: &RoomId) -> Flow {
        let pair = RoutePair::new(start.clone(), end.clone());
        if let Some(&flow) = self.cache.get(&pair) {
            tracing::debug!(network = graph.name(), %start, %end, flow, "flow cache hit");
            self.last_stats = Some(FlowStats {
                cache_hit: true,
                augmentations: 0,
            });
            return flow;
        }

        let (Some(start_id), Some(end_id)) = (graph.node_id(start), graph.node_id(end)) else {
            tracing::warn!(network = graph.name(), %start, %end, "flow query for unknown room");
            self.last_stats = Some(FlowStats::default());
            return 0;
        };
        if start_id == end_id {
            tracing::warn!(network = graph.name(), room = %start, "flow query with start == end");
            self.last_stats = Some(FlowStats::default());
            return 0;
        }

        let started = Instant::now();
        let (flow, augmentations) = edmonds_karp(graph, start_id, end_id);
        tracing::debug!(
            network = graph.name(),
            %start,
            %end,
            flow,
            augmentations,
            elapsed_us = started.elapsed().as_micros() as u64,
            "computed max flow"
        );

        self.cache.insert(pair, flow);
        self.last_stats = Some(FlowStats {
            cache_hit: false,
            augmentations,
        });
        flow
    }

    /// Cached result for a pair, if any.
    pub fn cached(&self, start: &RoomId, end: &RoomId) -> Option<Flow> {
        self.cache
            .get(&RoutePair::new(start.clone(), end.clone()))
            .copied()
    }

    /// Forget every cached result.
    ///
    /// Any edge change can alter the max flow of any pair, so the cache is
    /// never invalidated partially.
    pub fn clear_cache(&mut self) {
        if !self.cache.is_empty() {
            tracing::debug!(entries = self.cache.len(), "flow cache cleared");
        }
        self.cache.clear();
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Cached results sorted by flow, then start room, then end room.
    pub fn cached_flows(&self) -> Vec<FlowRecord> {
        let mut records: Vec<FlowRecord> = self
            .cache
            .iter()
            .map(|(pair, &flow)| FlowRecord {
                flow,
                start: pair.start.clone(),
                end: pair.end.clone(),
            })
            .collect();
        records.sort();
        records
    }

    pub fn last_stats(&self) -> Option<FlowStats> {
        self.last_stats
    }
}
