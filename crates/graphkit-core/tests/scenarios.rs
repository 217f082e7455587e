//! End-to-end scenarios through the public API.

use std::io::Write;

use graphkit_core::graph::{create_complete_graph, total_weight};
use graphkit_core::{are_isomorphic, EndpointPolicy, Error, Graph, GraphConfig};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_build_pipeline_from_config_file() {
    init_tracing();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "directed = true\nendpoint_policy = \"reject\"").unwrap();

    let config = GraphConfig::load(file.path()).unwrap();
    let mut graph: Graph<&str> = Graph::with_config(config);
    for stage in ["fetch", "build", "test", "deploy"] {
        graph.add_vertex(stage);
    }
    graph.try_add_edge("fetch", "build", 1).unwrap();
    graph.try_add_edge("build", "test", 1).unwrap();
    graph.try_add_edge("test", "deploy", 1).unwrap();
    assert!(matches!(
        graph.try_add_edge("deploy", "notify", 1),
        Err(Error::VertexNotFound(_))
    ));

    assert_eq!(graph.topological_sort(), vec!["fetch", "build", "test", "deploy"]);
    assert!(!graph.is_connected());
    assert!(graph.is_weakly_connected());

    graph.add_unit_edge("deploy", "fetch");
    assert!(graph.has_cycle());
    assert!(graph.topological_sort().is_empty());
    assert!(graph.is_strongly_connected());
}

#[test]
fn test_road_network_routing() {
    init_tracing();
    let mut roads: Graph<&str, f64> = Graph::new(false, true);
    roads.add_edge("depot", "north", 4.0);
    roads.add_edge("depot", "east", 2.0);
    roads.add_edge("north", "east", 1.0);
    roads.add_edge("north", "harbor", 5.0);
    roads.add_edge("east", "harbor", 3.0);

    let (cost, route) = roads.dijkstra_path(&"depot", &"harbor");
    assert!((cost - 5.0).abs() < 1e-9);
    assert_eq!(route, vec!["depot", "east", "harbor"]);

    let all_pairs = roads.floyd_warshall();
    assert!((all_pairs.distance(&"north", &"depot") - 3.0).abs() < 1e-9);

    let kruskal = total_weight(&roads.kruskal_mst());
    let prim = total_weight(&roads.prim_mst(&"harbor"));
    assert!((kruskal - 6.0).abs() < 1e-9);
    assert!((prim - kruskal).abs() < 1e-9);
}

#[test]
fn test_snapshot_survives_json() {
    let config = GraphConfig::default()
        .weighted()
        .with_multi_edges(false)
        .with_endpoint_policy(EndpointPolicy::AutoCreate);
    let mut graph: Graph<String, i64> = Graph::with_config(config);
    graph.add_edge("a".to_owned(), "b".to_owned(), 10);
    graph.add_edge("b".to_owned(), "c".to_owned(), -3);

    let json = graph.to_json().unwrap();
    let restored: Graph<String, i64> = Graph::from_json(&json).unwrap();
    assert_eq!(restored.config(), graph.config());
    assert_eq!(restored.edge_weight(&"c".to_owned(), &"b".to_owned()), -3);
    assert!(!restored.clone().add_edge("a".to_owned(), "b".to_owned(), 1));
    assert!(are_isomorphic(&graph, &restored));
}

#[test]
fn test_complete_graph_analysis() {
    let graph: Graph<u32> = create_complete_graph(&[1, 2, 3, 4, 5], false, false);
    assert_eq!(graph.edge_count(), 10);
    assert!(graph.is_connected());
    assert!(graph.has_cycle());
    assert!(!graph.is_bipartite());
    assert_eq!(graph.find_connected_components().len(), 1);
    assert_eq!(graph.kruskal_mst().len(), 4);
    assert_eq!(graph.shortest_distance_bfs(&1, &5), Some(1));
}
