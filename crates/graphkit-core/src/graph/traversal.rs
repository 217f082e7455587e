//! Traversal and path finding (DFS/BFS).
//!
//! All traversals start from one vertex, visit each reachable vertex exactly
//! once, and follow neighbors in stored order. An absent start vertex yields
//! an empty result.

use std::fmt::Debug;
use std::hash::Hash;

use super::indexed::{trace_path, IndexedGraph};
use super::store::Graph;
use super::types::Weight;

impl<V, W> Graph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Weight,
{
    /// Depth-first preorder from `start`.
    ///
    /// Uses an explicit stack, so deep graphs cannot overflow the call stack.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphkit_core::graph::Graph;
    ///
    /// let mut graph: Graph<u32> = Graph::default();
    /// graph.add_unit_edge(0, 1);
    /// graph.add_unit_edge(1, 2);
    /// graph.add_unit_edge(0, 3);
    ///
    /// assert_eq!(graph.dfs(&0), vec![0, 1, 2, 3]);
    /// ```
    #[must_use]
    pub fn dfs(&self, start: &V) -> Vec<V> {
        let mut order = Vec::new();
        self.dfs_with(start, |vertex| order.push(vertex.clone()));
        order
    }

    /// Calls `visit` for each vertex in depth-first preorder from `start`.
    pub fn dfs_with<F: FnMut(&V)>(&self, start: &V, mut visit: F) {
        let Some(start) = self.index_of(start) else {
            return;
        };
        let view = self.indexed();
        let mut visited = vec![false; view.len()];
        view.dfs_visit(start, &mut visited, |idx| {
            if let Some(vertex) = self.vertex_at(idx) {
                visit(vertex);
            }
        });
    }

    /// Recursive depth-first preorder; same order as [`Graph::dfs`].
    ///
    /// Recursion depth equals the longest DFS path, so prefer [`Graph::dfs`]
    /// for large graphs.
    #[must_use]
    pub fn dfs_recursive(&self, start: &V) -> Vec<V> {
        let Some(start) = self.index_of(start) else {
            return Vec::new();
        };
        let view = self.indexed();
        let mut visited = vec![false; view.len()];
        let mut order = Vec::new();
        dfs_recurse(&view, start, &mut visited, &mut order);
        self.to_vertices(&order)
    }

    /// Breadth-first order from `start`.
    #[must_use]
    pub fn bfs(&self, start: &V) -> Vec<V> {
        let mut order = Vec::new();
        self.bfs_with(start, |vertex| order.push(vertex.clone()));
        order
    }

    /// Calls `visit` for each vertex in breadth-first order from `start`.
    pub fn bfs_with<F: FnMut(&V)>(&self, start: &V, mut visit: F) {
        let Some(start) = self.index_of(start) else {
            return;
        };
        let view = self.indexed();
        let mut visited = vec![false; view.len()];
        view.bfs_visit(start, &mut visited, |idx| {
            if let Some(vertex) = self.vertex_at(idx) {
                visit(vertex);
            }
        });
    }

    /// Returns some path from `start` to `end` found by DFS.
    ///
    /// The path is not necessarily the shortest. Returns `[start]` when
    /// `start == end` and an empty vector when `end` is unreachable.
    #[must_use]
    pub fn find_path_dfs(&self, start: &V, end: &V) -> Vec<V> {
        let (Some(start), Some(end)) = (self.index_of(start), self.index_of(end)) else {
            return Vec::new();
        };
        if start == end {
            return self.to_vertices(&[start]);
        }

        let view = self.indexed();
        let mut visited = vec![false; view.len()];
        visited[start] = true;
        // The stack always holds the current root-to-top path.
        let mut stack = vec![(start, 0usize)];
        while let Some(top) = stack.last_mut() {
            let (vertex, cursor) = *top;
            if let Some(&(next, _)) = view.out[vertex].get(cursor) {
                top.1 += 1;
                if next == end {
                    let mut path: Vec<usize> = stack.iter().map(|&(v, _)| v).collect();
                    path.push(end);
                    return self.to_vertices(&path);
                }
                if !visited[next] {
                    visited[next] = true;
                    stack.push((next, 0));
                }
            } else {
                stack.pop();
            }
        }
        Vec::new()
    }

    /// Returns a path from `start` to `end` with the fewest edges.
    ///
    /// Weights are ignored. Returns `[start]` when `start == end` and an empty
    /// vector when `end` is unreachable.
    #[must_use]
    pub fn find_shortest_path_bfs(&self, start: &V, end: &V) -> Vec<V> {
        let (Some(start), Some(end)) = (self.index_of(start), self.index_of(end)) else {
            return Vec::new();
        };
        let parent = self.indexed().bfs_parents(start);
        self.to_vertices(&trace_path(&parent, start, end))
    }

    /// Returns the number of edges on a shortest `start -> end` path.
    #[must_use]
    pub fn shortest_distance_bfs(&self, start: &V, end: &V) -> Option<usize> {
        let (Some(start), Some(end)) = (self.index_of(start), self.index_of(end)) else {
            return None;
        };
        let view = self.indexed();
        let mut visited = vec![false; view.len()];
        visited[start] = true;
        let mut frontier = vec![start];
        let mut depth = 0usize;
        while !frontier.is_empty() {
            if frontier.contains(&end) {
                return Some(depth);
            }
            depth += 1;
            let mut next_frontier = Vec::new();
            for vertex in frontier {
                for &(next, _) in &view.out[vertex] {
                    if !visited[next] {
                        visited[next] = true;
                        next_frontier.push(next);
                    }
                }
            }
            frontier = next_frontier;
        }
        None
    }
}

fn dfs_recurse<W: Weight>(
    view: &IndexedGraph<W>,
    vertex: usize,
    visited: &mut [bool],
    order: &mut Vec<usize>,
) {
    visited[vertex] = true;
    order.push(vertex);
    for &(next, _) in &view.out[vertex] {
        if !visited[next] {
            dfs_recurse(view, next, visited, order);
        }
    }
}
