//! Tests for the graph shape factories.

use super::generators::{
    create_complete_graph, create_cycle_graph, create_path_graph, create_star_graph,
};
use super::store::Graph;

#[test]
fn test_complete_graph() {
    let graph: Graph<u32> = create_complete_graph(&[0, 1, 2, 3], false, false);
    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 6);
    for v in 0..4 {
        assert_eq!(graph.degree(&v), 3);
    }
    assert!(!graph.has_edge(&2, &2));
}

#[test]
fn test_complete_directed_graph_has_both_orientations() {
    let graph: Graph<u32> = create_complete_graph(&[0, 1, 2], true, false);
    assert_eq!(graph.edge_count(), 6);
    assert!(graph.has_edge(&0, &2));
    assert!(graph.has_edge(&2, &0));
    assert!(graph.is_strongly_connected());
}

#[test]
fn test_cycle_graph() {
    let graph: Graph<u32> = create_cycle_graph(&[0, 1, 2, 3], false, false);
    assert_eq!(graph.edge_count(), 4);
    assert!(graph.has_edge(&3, &0));
    assert!(graph.has_cycle());
    assert!(graph.is_bipartite());
    assert!((0..4).all(|v| graph.degree(&v) == 2));
}

#[test]
fn test_directed_cycle_graph() {
    let graph: Graph<u32> = create_cycle_graph(&[0, 1, 2], true, false);
    assert!(graph.has_edge(&2, &0));
    assert!(!graph.has_edge(&0, &2));
    assert!(graph.is_strongly_connected());
    assert!(graph.topological_sort().is_empty());
}

#[test]
fn test_short_cycle_degrades_to_path() {
    let pair: Graph<u32> = create_cycle_graph(&[0, 1], false, false);
    assert_eq!(pair.edge_count(), 1);
    assert!(!pair.has_cycle());

    let none: Graph<u32> = create_cycle_graph(&[], false, false);
    assert!(none.is_empty());
}

#[test]
fn test_path_graph() {
    let graph: Graph<&str> = create_path_graph(&["a", "b", "c", "d"], false, false);
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.is_connected());
    assert!(!graph.has_cycle());
    assert_eq!(graph.shortest_distance_bfs(&"a", &"d"), Some(3));
}

#[test]
fn test_star_graph() {
    let graph: Graph<u32> = create_star_graph(&0, &[1, 2, 3, 4], false, false);
    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.degree(&0), 4);
    assert_eq!(graph.degree(&3), 1);
    assert!(!graph.has_edge(&1, &2));
    assert_eq!(graph.vertices()[0], 0);
}

#[test]
fn test_directed_star_points_outwards() {
    let graph: Graph<u32> = create_star_graph(&0, &[1, 2], true, false);
    assert_eq!(graph.out_degree(&0), 2);
    assert_eq!(graph.in_degree(&0), 0);
    assert_eq!(graph.topological_sort()[0], 0);
}

#[test]
fn test_generated_weighted_edges_have_unit_weight() {
    let graph: Graph<u32, f64> = create_complete_graph(&[0, 1, 2], false, true);
    assert!(graph.is_weighted());
    for edge in graph.edge_list() {
        assert!((edge.weight - 1.0).abs() < f64::EPSILON);
    }
}
