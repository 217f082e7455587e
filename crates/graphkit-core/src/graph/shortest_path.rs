//! Weighted shortest paths: Dijkstra, Bellman-Ford and Floyd-Warshall.
//!
//! Unreachable vertices carry `W::infinity()`. Distances are never computed
//! by adding to an infinite value, so integer sentinels cannot wrap.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::hash::Hash;

use super::indexed::trace_path;
use super::store::Graph;
use super::types::{VertexMap, Weight};

/// Min-heap entry keyed by tentative distance.
#[derive(Debug, Clone, Copy)]
struct HeapEntry<W> {
    dist: W,
    vertex: usize,
}

impl<W: Weight> PartialEq for HeapEntry<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for HeapEntry<W> {}

impl<W: Weight> PartialOrd for HeapEntry<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> Ord for HeapEntry<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so that BinaryHeap pops the smallest distance first.
        other
            .dist
            .partial_cmp(&self.dist)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// All-pairs distances from [`Graph::floyd_warshall`].
///
/// Rows and columns follow vertex insertion order.
#[derive(Debug, Clone)]
pub struct DistanceMatrix<V, W> {
    index: VertexMap<V, usize>,
    matrix: Vec<Vec<W>>,
}

impl<V: Eq + Hash, W: PartialEq> PartialEq for DistanceMatrix<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.matrix == other.matrix
    }
}

impl<V: Eq + Hash, W: Weight> DistanceMatrix<V, W> {
    /// Returns the distance from `from` to `to`, or `W::infinity()` if either
    /// vertex is unknown or `to` is unreachable.
    #[must_use]
    pub fn distance(&self, from: &V, to: &V) -> W {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&i), Some(&j)) => self.matrix[i][j],
            _ => W::infinity(),
        }
    }

    /// Returns the vertices labelling rows and columns.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.index.keys()
    }

    /// Returns the raw matrix.
    #[must_use]
    pub fn matrix(&self) -> &[Vec<W>] {
        &self.matrix
    }

    /// Consumes the result, returning the raw matrix.
    #[must_use]
    pub fn into_matrix(self) -> Vec<Vec<W>> {
        self.matrix
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    /// Returns true for the matrix of an empty graph.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }
}

impl<V, W> Graph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Weight,
{
    /// Single-source shortest distances for non-negative weights.
    ///
    /// Returns an empty map if `start` is absent. Negative weights are
    /// logged and give unspecified results; use [`Graph::bellman_ford`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphkit_core::graph::Graph;
    ///
    /// let mut graph: Graph<u32, i32> = Graph::new(false, true);
    /// graph.add_edge(0, 1, 4);
    /// graph.add_edge(0, 2, 2);
    /// graph.add_edge(1, 2, 1);
    ///
    /// let dist = graph.dijkstra(&0);
    /// assert_eq!(dist[&1], 3);
    /// ```
    #[must_use]
    pub fn dijkstra(&self, start: &V) -> VertexMap<V, W> {
        let Some(start) = self.index_of(start) else {
            return VertexMap::default();
        };
        let (dist, _) = self.dijkstra_indexed(start);
        self.label_distances(dist)
    }

    /// Shortest `start -> end` distance and path.
    ///
    /// Returns `(W::infinity(), [])` when `end` is unreachable or either
    /// vertex is absent.
    #[must_use]
    pub fn dijkstra_path(&self, start: &V, end: &V) -> (W, Vec<V>) {
        let (Some(start), Some(end)) = (self.index_of(start), self.index_of(end)) else {
            return (W::infinity(), Vec::new());
        };
        let (dist, parent) = self.dijkstra_indexed(start);
        if dist[end].is_infinite() {
            return (W::infinity(), Vec::new());
        }
        (dist[end], self.to_vertices(&trace_path(&parent, start, end)))
    }

    fn dijkstra_indexed(&self, start: usize) -> (Vec<W>, Vec<Option<usize>>) {
        let view = self.indexed();
        let n = view.len();
        tracing::debug!(vertices = n, start, "Running Dijkstra");

        if view.out.iter().flatten().any(|&(_, w)| w.is_negative()) {
            tracing::warn!("Dijkstra called on a graph with negative edge weights");
        }

        let mut dist = vec![W::infinity(); n];
        let mut parent = vec![None; n];
        let mut heap = BinaryHeap::new();
        dist[start] = W::zero();
        heap.push(HeapEntry {
            dist: W::zero(),
            vertex: start,
        });

        while let Some(HeapEntry { dist: d, vertex }) = heap.pop() {
            if d > dist[vertex] {
                continue;
            }
            for &(next, weight) in &view.out[vertex] {
                let candidate = d.sum(weight);
                if candidate < dist[next] {
                    dist[next] = candidate;
                    parent[next] = Some(vertex);
                    heap.push(HeapEntry {
                        dist: candidate,
                        vertex: next,
                    });
                }
            }
        }
        (dist, parent)
    }

    /// Single-source shortest distances allowing negative weights.
    ///
    /// Returns the distances and whether a negative cycle is reachable from
    /// `start`. When it is, the distances of vertices on or behind the cycle
    /// are not meaningful. An undirected negative edge is itself a negative
    /// cycle, since it can be walked back and forth.
    #[must_use]
    pub fn bellman_ford(&self, start: &V) -> (VertexMap<V, W>, bool) {
        let Some(start) = self.index_of(start) else {
            return (VertexMap::default(), false);
        };
        let view = self.indexed();
        let n = view.len();
        tracing::debug!(vertices = n, start, "Running Bellman-Ford");

        let edges: Vec<(usize, usize, W)> = view
            .out
            .iter()
            .enumerate()
            .flat_map(|(from, entries)| entries.iter().map(move |&(to, w)| (from, to, w)))
            .collect();

        let mut dist = vec![W::infinity(); n];
        dist[start] = W::zero();
        for _ in 1..n {
            let mut changed = false;
            for &(from, to, weight) in &edges {
                if dist[from].is_infinite() {
                    continue;
                }
                let candidate = dist[from].sum(weight);
                if candidate < dist[to] {
                    dist[to] = candidate;
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        let has_negative_cycle = edges.iter().any(|&(from, to, weight)| {
            !dist[from].is_infinite() && dist[from].sum(weight) < dist[to]
        });
        if has_negative_cycle {
            tracing::warn!(start, "Bellman-Ford found a reachable negative cycle");
        }
        (self.label_distances(dist), has_negative_cycle)
    }

    /// All-pairs shortest distances.
    ///
    /// The diagonal starts at zero, parallel edges contribute their lightest
    /// weight. Negative cycles are not detected.
    #[must_use]
    pub fn floyd_warshall(&self) -> DistanceMatrix<V, W> {
        let view = self.indexed();
        let n = view.len();
        tracing::debug!(vertices = n, "Running Floyd-Warshall");

        let mut matrix = vec![vec![W::infinity(); n]; n];
        for (i, row) in matrix.iter_mut().enumerate() {
            row[i] = W::zero();
            for &(j, weight) in &view.out[i] {
                if weight < row[j] {
                    row[j] = weight;
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                let through = matrix[i][k];
                if through.is_infinite() {
                    continue;
                }
                for j in 0..n {
                    let tail = matrix[k][j];
                    if tail.is_infinite() {
                        continue;
                    }
                    let candidate = through.sum(tail);
                    if candidate < matrix[i][j] {
                        matrix[i][j] = candidate;
                    }
                }
            }
        }

        let index = self
            .adjacency_list()
            .keys()
            .cloned()
            .enumerate()
            .map(|(i, vertex)| (vertex, i))
            .collect();
        DistanceMatrix { index, matrix }
    }

    fn label_distances(&self, dist: Vec<W>) -> VertexMap<V, W> {
        self.adjacency_list().keys().cloned().zip(dist).collect()
    }
}
