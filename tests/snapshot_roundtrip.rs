mod common;

use graphwalk::{
    DirectedGraph, DirectedSnapshot, SNAPSHOT_VERSION, UndirectedGraph, UndirectedSnapshot,
};

#[test]
fn directed_snapshot_round_trips_through_json() {
    common::init_tracing();
    let graph = DirectedGraph::from_edges(&[(0, 1, 10), (4, 0, 12), (1, 4, 15), (4, 3, 3)]);
    let json = DirectedSnapshot::capture(&graph).to_json().unwrap();
    let restored = DirectedSnapshot::from_json(&json).unwrap().restore().unwrap();
    assert_eq!(restored, graph);
    assert_eq!(
        restored.edges().collect::<Vec<_>>(),
        graph.edges().collect::<Vec<_>>()
    );
}

#[test]
fn directed_snapshot_preserves_edgeless_vertices() {
    let mut graph = DirectedGraph::new();
    for _ in 0..3 {
        graph.add_vertex();
    }
    let restored = DirectedSnapshot::capture(&graph).restore().unwrap();
    assert_eq!(restored.vertex_count(), 3);
    assert_eq!(restored.edges().count(), 0);
}

#[test]
fn undirected_snapshot_round_trips_through_json() {
    common::init_tracing();
    let mut graph = UndirectedGraph::from_edges([
        ("A".to_string(), "E".to_string()),
        ("A".to_string(), "C".to_string()),
        ("B".to_string(), "E".to_string()),
    ]);
    graph.add_vertex("Z".to_string());
    let json = UndirectedSnapshot::capture(&graph).to_json().unwrap();
    let restored = UndirectedSnapshot::from_json(&json)
        .unwrap()
        .restore()
        .unwrap();
    assert_eq!(restored, graph);
    // Isolated vertices survive the trip.
    assert_eq!(restored.degree(&"Z".to_string()), Some(0));
}

#[test]
fn snapshots_carry_the_current_version() {
    let snapshot = DirectedSnapshot::capture(&DirectedGraph::new());
    assert_eq!(snapshot.version, SNAPSHOT_VERSION);
    let snapshot = UndirectedSnapshot::capture(&UndirectedGraph::<char>::new());
    assert_eq!(snapshot.version, SNAPSHOT_VERSION);
}

#[test]
fn tampered_payload_is_rejected_not_applied() {
    let graph = UndirectedGraph::from_edges([('A', 'B')]);
    let mut snapshot = UndirectedSnapshot::capture(&graph);
    snapshot.edges.push(('A', 'A'));
    assert!(snapshot.restore().is_err());
}
