//! Generic in-memory graphs.
//!
//! [`Graph`] stores an adjacency list keyed by any hashable vertex type and
//! carries traversal, structural analysis, shortest-path and spanning-tree
//! algorithms as methods. Internally the algorithms run over a dense index
//! view of the graph, so none of them recurse except the explicitly named
//! [`Graph::dfs_recursive`].
//!
//! # Example
//!
//! ```rust
//! use graphkit_core::graph::{Edge, Graph};
//!
//! let graph: Graph<u32, i32> = Graph::from_edges(
//!     vec![
//!         Edge::new(0, 1, 4),
//!         Edge::new(0, 2, 2),
//!         Edge::new(1, 2, 1),
//!         Edge::new(1, 3, 5),
//!         Edge::new(2, 3, 3),
//!     ],
//!     false,
//!     true,
//! );
//!
//! let (cost, path) = graph.dijkstra_path(&0, &3);
//! assert_eq!(cost, 5);
//! assert_eq!(path, vec![0, 2, 3]);
//! ```

mod analysis;
mod generators;
mod indexed;
mod isomorphism;
mod mst;
mod shortest_path;
mod store;
mod traversal;
mod types;

#[cfg(test)]
mod generators_tests;

pub use generators::{
    create_complete_graph, create_cycle_graph, create_path_graph, create_star_graph,
};
pub use isomorphism::are_isomorphic;
pub use mst::total_weight;
pub use shortest_path::DistanceMatrix;
pub use store::{AdjacencyList, Graph, GraphSnapshot};
pub use types::{Color, Edge, VertexMap, Weight};
