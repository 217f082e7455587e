//! Minimum spanning trees (Kruskal, Prim).
//!
//! Both algorithms treat directed graphs as undirected. On disconnected input
//! Kruskal returns a spanning forest and Prim spans only the start vertex's
//! component.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::hash::Hash;

use super::store::Graph;
use super::types::{Edge, Weight};

/// Disjoint sets over `0..n` with path compression and union by rank.
#[derive(Debug)]
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merges the sets of `a` and `b`; false if they were already joined.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            Ordering::Less => self.parent[ra] = rb,
            Ordering::Greater => self.parent[rb] = ra,
            Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] = self.rank[ra].saturating_add(1);
            }
        }
        true
    }
}

/// Crossing edge waiting in Prim's heap.
#[derive(Debug, Clone, Copy)]
struct Crossing<W> {
    weight: W,
    from: usize,
    to: usize,
}

impl<W: Weight> PartialEq for Crossing<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for Crossing<W> {}

impl<W: Weight> PartialOrd for Crossing<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> Ord for Crossing<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.from.cmp(&self.from))
            .then_with(|| other.to.cmp(&self.to))
    }
}

impl<V, W> Graph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Weight,
{
    /// Minimum spanning tree (forest) by Kruskal's algorithm.
    ///
    /// Edges are taken in ascending weight order, ties in edge-list order,
    /// and the scan stops once `|V| - 1` edges are accepted.
    #[must_use]
    pub fn kruskal_mst(&self) -> Vec<Edge<V, W>> {
        let n = self.vertex_count();
        let mut candidates: Vec<(usize, usize, W)> = self
            .edge_list()
            .into_iter()
            .filter_map(|edge| {
                let from = self.index_of(&edge.from)?;
                let to = self.index_of(&edge.to)?;
                Some((from, to, edge.weight))
            })
            .collect();
        candidates.sort_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(Ordering::Equal));
        tracing::debug!(vertices = n, edges = candidates.len(), "Running Kruskal");

        let mut sets = UnionFind::new(n);
        let mut tree = Vec::with_capacity(n.saturating_sub(1));
        for (from, to, weight) in candidates {
            if tree.len() + 1 >= n {
                break;
            }
            if sets.union(from, to) {
                tree.extend(self.indexed_edge(from, to, weight));
            }
        }
        tree
    }

    /// Minimum spanning tree of `start`'s component by Prim's algorithm.
    ///
    /// Returns an empty vector if `start` is absent.
    #[must_use]
    pub fn prim_mst(&self, start: &V) -> Vec<Edge<V, W>> {
        let Some(start) = self.index_of(start) else {
            return Vec::new();
        };
        let view = self.undirected_view();
        tracing::debug!(vertices = view.len(), start, "Running Prim");

        let mut in_tree = vec![false; view.len()];
        let mut heap = BinaryHeap::new();
        let mut tree = Vec::new();

        in_tree[start] = true;
        for &(to, weight) in &view.out[start] {
            heap.push(Crossing { weight, from: start, to });
        }
        while let Some(Crossing { weight, from, to }) = heap.pop() {
            if in_tree[to] {
                continue;
            }
            in_tree[to] = true;
            tree.extend(self.indexed_edge(from, to, weight));
            for &(next, w) in &view.out[to] {
                if !in_tree[next] {
                    heap.push(Crossing {
                        weight: w,
                        from: to,
                        to: next,
                    });
                }
            }
        }
        tree
    }

    fn indexed_edge(&self, from: usize, to: usize, weight: W) -> Option<Edge<V, W>> {
        let from = self.vertex_at(from)?.clone();
        let to = self.vertex_at(to)?.clone();
        Some(Edge::new(from, to, weight))
    }
}

/// Total weight of an edge set, e.g. a spanning tree.
#[must_use]
pub fn total_weight<V, W: Weight>(edges: &[Edge<V, W>]) -> W {
    edges
        .iter()
        .fold(W::zero(), |acc, edge| acc.sum(edge.weight))
}
