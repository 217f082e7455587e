//! Factories for common graph shapes.
//!
//! Every generated edge has weight `W::one()`.

use std::fmt::Debug;
use std::hash::Hash;

use super::store::Graph;
use super::types::Weight;

/// Graph with an edge between every pair of distinct vertices.
///
/// Directed graphs get both orientations of every pair.
#[must_use]
pub fn create_complete_graph<V, W>(vertices: &[V], directed: bool, weighted: bool) -> Graph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Weight,
{
    let mut graph = Graph::from_vertices(vertices.iter().cloned(), directed, weighted);
    for (i, from) in vertices.iter().enumerate() {
        for (j, to) in vertices.iter().enumerate() {
            if i == j || (!directed && j < i) {
                continue;
            }
            graph.add_unit_edge(from.clone(), to.clone());
        }
    }
    graph
}

/// Graph whose vertices form a single cycle in the given order.
///
/// Fewer than three vertices degrade to a path.
#[must_use]
pub fn create_cycle_graph<V, W>(vertices: &[V], directed: bool, weighted: bool) -> Graph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Weight,
{
    let mut graph = create_path_graph(vertices, directed, weighted);
    if let [first, .., last] = vertices {
        if vertices.len() >= 3 {
            graph.add_unit_edge(last.clone(), first.clone());
        }
    }
    graph
}

/// Graph whose vertices form a simple path in the given order.
#[must_use]
pub fn create_path_graph<V, W>(vertices: &[V], directed: bool, weighted: bool) -> Graph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Weight,
{
    let mut graph = Graph::from_vertices(vertices.iter().cloned(), directed, weighted);
    for pair in vertices.windows(2) {
        graph.add_unit_edge(pair[0].clone(), pair[1].clone());
    }
    graph
}

/// Graph with `center` joined to every leaf and no other edges.
///
/// Directed stars point from the center outwards.
#[must_use]
pub fn create_star_graph<V, W>(
    center: &V,
    leaves: &[V],
    directed: bool,
    weighted: bool,
) -> Graph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Weight,
{
    let mut graph = Graph::new(directed, weighted);
    graph.add_vertex(center.clone());
    for leaf in leaves {
        graph.add_unit_edge(center.clone(), leaf.clone());
    }
    graph
}
