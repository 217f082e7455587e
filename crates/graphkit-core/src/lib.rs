//! # graphkit Core
//!
//! Generic adjacency-list graphs for Rust.
//!
//! ## Features
//!
//! - **Any vertex type**: vertices are any `Eq + Hash + Clone` value
//! - **Directed or undirected, weighted or not**, fixed per graph via [`GraphConfig`]
//! - **Traversal**: iterative DFS/BFS, visitor callbacks, DFS and BFS path finding
//! - **Analysis**: connectivity (weak/strong), components, SCCs, cycle detection,
//!   topological sort, bipartite coloring
//! - **Weighted algorithms**: Dijkstra, Bellman-Ford, Floyd-Warshall, Kruskal, Prim
//! - **Snapshots**: JSON round-trip of any graph with serde-compatible vertices
//!
//! ## Quick Start
//!
//! ```rust
//! use graphkit_core::Graph;
//!
//! let mut graph: Graph<&str> = Graph::new(true, false);
//! graph.add_unit_edge("fetch", "build");
//! graph.add_unit_edge("build", "test");
//! graph.add_unit_edge("fetch", "lint");
//!
//! assert!(!graph.has_cycle());
//! assert_eq!(graph.topological_sort()[0], "fetch");
//! assert_eq!(graph.find_shortest_path_bfs(&"fetch", &"test").len(), 3);
//! ```

#![warn(missing_docs)]
#![cfg_attr(
    test,
    allow(
        clippy::doc_markdown,
        clippy::uninlined_format_args,
        clippy::float_cmp,
        clippy::cast_possible_truncation
    )
)]

pub mod config;
#[cfg(test)]
mod config_tests;
pub mod error;
#[cfg(test)]
mod error_tests;
pub mod graph;

pub use config::{ConfigError, EndpointPolicy, GraphConfig};
pub use error::{Error, Result};
pub use graph::{
    are_isomorphic, Color, DistanceMatrix, Edge, Graph, GraphSnapshot, VertexMap, Weight,
};
