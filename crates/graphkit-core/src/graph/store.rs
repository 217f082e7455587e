//! Adjacency-list graph storage.
//!
//! [`Graph`] owns an insertion-ordered map from each vertex to its outgoing
//! `(neighbor, weight)` entries. Undirected edges are stored as two mirrored
//! entries, except self-loops which are stored once.

use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};

use crate::config::{EndpointPolicy, GraphConfig};
use crate::error::{Error, Result};

use super::types::{Edge, Weight};

/// Adjacency map: vertex -> outgoing `(neighbor, weight)` entries.
pub type AdjacencyList<V, W> = IndexMap<V, Vec<(V, W)>, FxBuildHasher>;

/// Generic directed or undirected graph with optional edge weights.
///
/// Absent vertices never cause a panic: queries return `false`, `0`, empty
/// collections or `W::infinity()`.
///
/// # Example
///
/// ```rust
/// use graphkit_core::graph::Graph;
///
/// let mut graph: Graph<u32, i32> = Graph::new(false, true);
/// graph.add_edge(0, 1, 4);
/// graph.add_edge(1, 2, 1);
///
/// assert!(graph.has_edge(&1, &0));
/// assert_eq!(graph.edge_weight(&0, &1), 4);
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<V, W = i32> {
    adjacency: AdjacencyList<V, W>,
    config: GraphConfig,
}

impl<V, W> Default for Graph<V, W> {
    fn default() -> Self {
        Self {
            adjacency: AdjacencyList::default(),
            config: GraphConfig::default(),
        }
    }
}

impl<V, W> Graph<V, W>
where
    V: Eq + Hash + Clone + fmt::Debug,
    W: Weight,
{
    /// Creates an empty graph.
    #[must_use]
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self::with_config(GraphConfig::new(directed, weighted))
    }

    /// Creates an empty graph with a full configuration.
    #[must_use]
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            adjacency: AdjacencyList::default(),
            config,
        }
    }

    /// Creates a graph over `vertices` with no edges.
    #[must_use]
    pub fn from_vertices<I>(vertices: I, directed: bool, weighted: bool) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut graph = Self::new(directed, weighted);
        for vertex in vertices {
            graph.add_vertex(vertex);
        }
        graph
    }

    /// Creates a graph from an edge list.
    ///
    /// Vertices are inserted in order of first appearance, edges in listed
    /// order.
    #[must_use]
    pub fn from_edges<I>(edges: I, directed: bool, weighted: bool) -> Self
    where
        I: IntoIterator<Item = Edge<V, W>>,
    {
        let mut graph = Self::new(directed, weighted);
        for edge in edges {
            graph.add_vertex(edge.from.clone());
            graph.add_vertex(edge.to.clone());
            graph.add_edge(edge.from, edge.to, edge.weight);
        }
        graph
    }

    // ── Vertex CRUD ────────────────────────────────────────────────────

    /// Adds a vertex. Returns false if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, Vec::new());
        true
    }

    /// Removes a vertex and every edge touching it.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        if self.adjacency.shift_remove(vertex).is_none() {
            return false;
        }
        for entries in self.adjacency.values_mut() {
            entries.retain(|(neighbor, _)| neighbor != vertex);
        }
        tracing::trace!(
            vertices = self.adjacency.len(),
            "Removed vertex and incident edges"
        );
        true
    }

    /// Returns true if the vertex exists.
    #[must_use]
    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    // ── Edge CRUD ──────────────────────────────────────────────────────

    /// Adds an edge.
    ///
    /// Returns false, leaving the graph untouched, when an endpoint is
    /// missing under [`EndpointPolicy::Reject`] or when the edge already
    /// exists and parallel edges are disabled. Unweighted graphs store
    /// `W::one()` regardless of `weight`.
    pub fn add_edge(&mut self, from: V, to: V, weight: W) -> bool {
        self.try_add_edge(from, to, weight).is_ok()
    }

    /// Adds an edge of weight `W::one()`.
    pub fn add_unit_edge(&mut self, from: V, to: V) -> bool {
        self.add_edge(from, to, W::one())
    }

    /// Adds an edge, reporting why it was refused.
    ///
    /// # Errors
    ///
    /// - `Error::VertexNotFound` if an endpoint is missing under
    ///   [`EndpointPolicy::Reject`].
    /// - `Error::DuplicateEdge` if the edge exists and parallel edges are
    ///   disabled.
    pub fn try_add_edge(&mut self, from: V, to: V, weight: W) -> Result<()> {
        if self.config.endpoint_policy == EndpointPolicy::Reject {
            for endpoint in [&from, &to] {
                if !self.has_vertex(endpoint) {
                    tracing::warn!(vertex = ?endpoint, "Rejected edge with unknown endpoint");
                    return Err(Error::VertexNotFound(format!("{endpoint:?}")));
                }
            }
        }
        if !self.config.allow_multi_edges && self.has_edge(&from, &to) {
            return Err(Error::DuplicateEdge(format!("{from:?} -> {to:?}")));
        }

        let weight = if self.config.weighted {
            weight
        } else {
            W::one()
        };

        self.add_vertex(from.clone());
        self.add_vertex(to.clone());

        if !self.config.directed && from != to {
            if let Some(entries) = self.adjacency.get_mut(&to) {
                entries.push((from.clone(), weight));
            }
        }
        if let Some(entries) = self.adjacency.get_mut(&from) {
            entries.push((to, weight));
        }
        Ok(())
    }

    /// Removes the first `from -> to` entry (and its mirror when undirected).
    pub fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        let Some(entries) = self.adjacency.get_mut(from) else {
            return false;
        };
        let Some(pos) = entries.iter().position(|(neighbor, _)| neighbor == to) else {
            return false;
        };
        let (_, weight) = entries.remove(pos);

        if !self.config.directed && from != to {
            if let Some(mirror) = self.adjacency.get_mut(to) {
                let matching = mirror
                    .iter()
                    .position(|(neighbor, w)| neighbor == from && *w == weight)
                    .or_else(|| mirror.iter().position(|(neighbor, _)| neighbor == from));
                if let Some(pos) = matching {
                    mirror.remove(pos);
                }
            }
        }
        true
    }

    /// Returns true if at least one `from -> to` entry exists.
    #[must_use]
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|entries| entries.iter().any(|(neighbor, _)| neighbor == to))
    }

    /// Returns the weight of the first `from -> to` entry, or `W::infinity()`.
    #[must_use]
    pub fn edge_weight(&self, from: &V, to: &V) -> W {
        self.adjacency
            .get(from)
            .and_then(|entries| entries.iter().find(|(neighbor, _)| neighbor == to))
            .map_or_else(W::infinity, |(_, weight)| *weight)
    }

    /// Removes all vertices and edges.
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }

    // ── Queries ────────────────────────────────────────────────────────

    /// Returns all vertices in insertion order.
    #[must_use]
    pub fn vertices(&self) -> Vec<V> {
        self.adjacency.keys().cloned().collect()
    }

    /// Returns the out-neighbors of a vertex, one per stored entry.
    #[must_use]
    pub fn neighbors(&self, vertex: &V) -> Vec<V> {
        self.adjacency
            .get(vertex)
            .map(|entries| entries.iter().map(|(n, _)| n.clone()).collect())
            .unwrap_or_default()
    }

    /// Returns the raw adjacency map.
    #[must_use]
    pub fn adjacency_list(&self) -> &AdjacencyList<V, W> {
        &self.adjacency
    }

    /// Returns the degree of a vertex.
    ///
    /// Undirected: incident entries, with a self-loop counted twice.
    /// Directed: in-degree plus out-degree.
    #[must_use]
    pub fn degree(&self, vertex: &V) -> usize {
        if self.config.directed {
            return self.in_degree(vertex) + self.out_degree(vertex);
        }
        self.adjacency.get(vertex).map_or(0, |entries| {
            let loops = entries.iter().filter(|(n, _)| n == vertex).count();
            entries.len() + loops
        })
    }

    /// Returns the number of entries pointing at `vertex`.
    #[must_use]
    pub fn in_degree(&self, vertex: &V) -> usize {
        if !self.has_vertex(vertex) {
            return 0;
        }
        self.adjacency
            .values()
            .flatten()
            .filter(|(neighbor, _)| neighbor == vertex)
            .count()
    }

    /// Returns the number of entries leaving `vertex`.
    #[must_use]
    pub fn out_degree(&self, vertex: &V) -> usize {
        self.adjacency.get(vertex).map_or(0, Vec::len)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges; an undirected edge counts once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.adjacency.values().map(Vec::len).sum();
        if self.config.directed {
            return entries;
        }
        let loops = self
            .adjacency
            .iter()
            .map(|(v, list)| list.iter().filter(|(n, _)| n == v).count())
            .sum::<usize>();
        (entries - loops) / 2 + loops
    }

    /// Returns true if edges are one-way.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    /// Returns true if edge weights are kept.
    #[must_use]
    pub fn is_weighted(&self) -> bool {
        self.config.weighted
    }

    /// Returns true if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the construction config.
    #[must_use]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    // ── Representations ────────────────────────────────────────────────

    /// Returns a `V x V` matrix in vertex order.
    ///
    /// A cell holds the first edge's weight, or `W::zero()` when the pair is
    /// not adjacent.
    #[must_use]
    pub fn adjacency_matrix(&self) -> Vec<Vec<W>> {
        let n = self.adjacency.len();
        let mut matrix = vec![vec![W::zero(); n]; n];
        for (i, entries) in self.adjacency.values().enumerate() {
            for (neighbor, weight) in entries.iter().rev() {
                if let Some(j) = self.adjacency.get_index_of(neighbor) {
                    matrix[i][j] = *weight;
                }
            }
        }
        matrix
    }

    /// Returns every edge, reporting each undirected edge once.
    #[must_use]
    pub fn edge_list(&self) -> Vec<Edge<V, W>> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for (i, (vertex, entries)) in self.adjacency.iter().enumerate() {
            for (neighbor, weight) in entries {
                if !self.config.directed {
                    let j = self.adjacency.get_index_of(neighbor).unwrap_or(i);
                    if j < i {
                        continue;
                    }
                }
                edges.push(Edge::new(vertex.clone(), neighbor.clone(), *weight));
            }
        }
        edges
    }

    // ── Snapshots ──────────────────────────────────────────────────────

    /// Captures the graph as a serializable snapshot.
    ///
    /// Every stored entry is recorded in per-vertex order, so the restored
    /// graph traverses exactly like this one.
    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot<V, W> {
        let edges = self
            .adjacency
            .iter()
            .flat_map(|(vertex, entries)| {
                entries.iter().map(move |(neighbor, weight)| {
                    Edge::new(vertex.clone(), neighbor.clone(), *weight)
                })
            })
            .collect();
        GraphSnapshot {
            config: self.config,
            vertices: self.vertices(),
            edges,
        }
    }

    /// Rebuilds a graph from a snapshot.
    ///
    /// Entries are restored verbatim, bypassing the endpoint and parallel
    /// edge policies of the snapshot's config.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSnapshot` if an edge names a vertex that is not
    /// listed in `vertices`, or if an undirected entry lacks its mirror.
    pub fn from_snapshot(snapshot: GraphSnapshot<V, W>) -> Result<Self> {
        let GraphSnapshot {
            config,
            vertices,
            edges,
        } = snapshot;
        let mut graph = Self::with_config(config);
        for vertex in vertices {
            graph.add_vertex(vertex);
        }
        for edge in edges {
            if !graph.has_vertex(&edge.to) {
                return Err(unknown_vertex(&edge.to));
            }
            let weight = if config.weighted {
                edge.weight
            } else {
                W::one()
            };
            let Some(entries) = graph.adjacency.get_mut(&edge.from) else {
                return Err(unknown_vertex(&edge.from));
            };
            entries.push((edge.to, weight));
        }
        if !config.directed {
            graph.check_mirrored()?;
        }
        Ok(graph)
    }

    /// Every non-loop undirected entry must be matched, weight and
    /// multiplicity included, by an entry in the opposite direction.
    fn check_mirrored(&self) -> Result<()> {
        for (vertex, entries) in &self.adjacency {
            for (neighbor, weight) in entries {
                if neighbor == vertex {
                    continue;
                }
                let count = |list: &[(V, W)], target: &V| {
                    list.iter()
                        .filter(|(n, w)| n == target && w == weight)
                        .count()
                };
                let mirrored = self
                    .adjacency
                    .get(neighbor)
                    .map_or(0, |list| count(list, vertex));
                if count(entries, neighbor) != mirrored {
                    return Err(Error::InvalidSnapshot(format!(
                        "undirected edge {vertex:?} -> {neighbor:?} has no mirror entry"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Serializes the graph as a JSON snapshot.
    pub fn to_json(&self) -> Result<String>
    where
        V: Serialize,
        W: Serialize,
    {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    /// Deserializes a graph from a JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self>
    where
        V: for<'de> Deserialize<'de>,
        W: for<'de> Deserialize<'de>,
    {
        let snapshot: GraphSnapshot<V, W> = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot)
    }

    pub(crate) fn index_of(&self, vertex: &V) -> Option<usize> {
        self.adjacency.get_index_of(vertex)
    }

    pub(crate) fn vertex_at(&self, index: usize) -> Option<&V> {
        self.adjacency.get_index(index).map(|(vertex, _)| vertex)
    }
}

fn unknown_vertex<V: fmt::Debug>(vertex: &V) -> Error {
    Error::InvalidSnapshot(format!("edge references unknown vertex {vertex:?}"))
}

/// Serializable form of a [`Graph`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot<V, W> {
    /// Construction config.
    #[serde(flatten)]
    pub config: GraphConfig,
    /// Vertices in insertion order.
    pub vertices: Vec<V>,
    /// Stored entries in per-vertex order. Undirected edges appear once per
    /// orientation, self-loops once.
    pub edges: Vec<Edge<V, W>>,
}

impl<V, W> fmt::Display for Graph<V, W>
where
    V: fmt::Display,
    W: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.config.directed {
            "directed"
        } else {
            "undirected"
        };
        writeln!(f, "Graph ({kind}, {} vertices)", self.adjacency.len())?;
        for (vertex, entries) in &self.adjacency {
            write!(f, "{vertex} ->")?;
            for (neighbor, weight) in entries {
                if self.config.weighted {
                    write!(f, " {neighbor}({weight})")?;
                } else {
                    write!(f, " {neighbor}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
