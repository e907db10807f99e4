//! Integration tests for the flow engine on built networks.

use ef_core::RoomId;
use ef_flow::{FlowEngine, ResidualNetwork, shortest_augmenting_path};
use ef_graph::{Graph, GraphBuilder, Section};

fn room(s: &str) -> RoomId {
    RoomId::parse(s).unwrap()
}

fn build(sections: &[(&str, i64, &str)]) -> Graph {
    let mut builder = GraphBuilder::new("NET");
    for &(s, c, t) in sections {
        builder.add_section(Section::parse_parts(s, c, t).unwrap());
    }
    builder.build().unwrap()
}

fn assert_conserved(graph: &Graph, start: &str, end: &str) {
    for (i, label) in graph.rooms().iter().enumerate() {
        if label.as_str() == start || label.as_str() == end {
            continue;
        }
        let id = graph.node_id(label).unwrap();
        assert_eq!(
            graph.inflow(id),
            graph.outflow(id),
            "flow not conserved at room {} ({})",
            label,
            i
        );
    }
}

#[test]
fn building_evacuation_scenario() {
    // Two floors draining through a stairwell and a fire escape.
    let mut graph = build(&[
        ("off", 6, "hall"),
        ("lab", 4, "hall"),
        ("lab", 3, "fire"),
        ("hall", 5, "stair"),
        ("hall", 4, "fire"),
        ("stair", 8, "exit"),
        ("fire", 5, "exit"),
    ]);
    let mut engine = FlowEngine::new();

    let from_office = engine.compute_max_flow(&mut graph, &room("off"), &room("exit"));
    assert_eq!(from_office, 6);
    assert_conserved(&graph, "off", "exit");

    let from_lab = engine.compute_max_flow(&mut graph, &room("lab"), &room("exit"));
    assert_eq!(from_lab, 7);
    assert_conserved(&graph, "lab", "exit");

    assert_eq!(engine.cache_len(), 2);
    assert_eq!(engine.cached(&room("off"), &room("exit")), Some(6));
}

#[test]
fn cold_start_per_uncached_pair() {
    let mut graph = build(&[("a", 4, "c"), ("b", 3, "c"), ("c", 5, "d")]);
    let mut engine = FlowEngine::new();

    assert_eq!(engine.compute_max_flow(&mut graph, &room("a"), &room("d")), 4);
    // The second pair sees none of the first pair's flow on c->d.
    assert_eq!(engine.compute_max_flow(&mut graph, &room("b"), &room("d")), 3);
    assert_eq!(graph.edge(&room("a"), &room("c")).unwrap().flow, 0);
    assert_eq!(graph.edge(&room("c"), &room("d")).unwrap().flow, 3);
}

#[test]
fn growth_never_lowers_flow() {
    let mut graph = build(&[("a", 2, "b"), ("b", 2, "c"), ("a", 1, "c")]);
    let mut engine = FlowEngine::new();
    let before = engine.compute_max_flow(&mut graph, &room("a"), &room("c"));
    assert_eq!(before, 3);

    graph.add_edge(room("b"), room("c"), 9);
    engine.clear_cache();
    assert_eq!(engine.cached(&room("a"), &room("c")), None);
    let after = engine.compute_max_flow(&mut graph, &room("a"), &room("c"));
    assert!(after >= before);
    assert_eq!(after, 3);

    graph.add_edge(room("a"), room("b"), 9);
    engine.clear_cache();
    assert_eq!(engine.compute_max_flow(&mut graph, &room("a"), &room("c")), 10);
}

#[test]
fn final_residual_has_no_augmenting_path() {
    let mut graph = build(&[
        ("a", 5, "b"),
        ("a", 5, "c"),
        ("b", 3, "d"),
        ("c", 4, "d"),
        ("b", 2, "c"),
    ]);
    let mut engine = FlowEngine::new();
    let flow = engine.compute_max_flow(&mut graph, &room("a"), &room("d"));
    assert_eq!(flow, 7);

    let a = graph.node_id(&room("a")).unwrap();
    let d = graph.node_id(&room("d")).unwrap();
    let residual = ResidualNetwork::build(&mut graph);
    assert!(shortest_augmenting_path(&graph, &residual, a, d).is_none());
    assert_eq!(graph.inflow(d), flow);
    assert!(
        graph
            .edges()
            .iter()
            .all(|e| 0 <= e.flow && e.flow <= e.capacity)
    );
}
