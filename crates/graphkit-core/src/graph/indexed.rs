//! Dense index view of a [`Graph`] used by the algorithms.
//!
//! Vertices are replaced by their position in the adjacency map so that
//! visited sets, colors and distances become plain vectors.

use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

use super::store::Graph;
use super::types::Weight;

/// Adjacency lists over vertex indices.
#[derive(Debug, Clone)]
pub(crate) struct IndexedGraph<W> {
    pub(crate) out: Vec<Vec<(usize, W)>>,
}

impl<W: Weight> IndexedGraph<W> {
    pub(crate) fn len(&self) -> usize {
        self.out.len()
    }

    /// Preorder DFS from `start`, following stored neighbor order.
    pub(crate) fn dfs_visit<F: FnMut(usize)>(
        &self,
        start: usize,
        visited: &mut [bool],
        mut visit: F,
    ) {
        if visited[start] {
            return;
        }
        visited[start] = true;
        visit(start);
        let mut stack = vec![(start, 0usize)];
        while let Some(top) = stack.last_mut() {
            let (vertex, cursor) = *top;
            if let Some(&(next, _)) = self.out[vertex].get(cursor) {
                top.1 += 1;
                if !visited[next] {
                    visited[next] = true;
                    visit(next);
                    stack.push((next, 0));
                }
            } else {
                stack.pop();
            }
        }
    }

    /// Level-order BFS from `start`.
    pub(crate) fn bfs_visit<F: FnMut(usize)>(
        &self,
        start: usize,
        visited: &mut [bool],
        mut visit: F,
    ) {
        if visited[start] {
            return;
        }
        visited[start] = true;
        let mut queue = VecDeque::from([start]);
        while let Some(vertex) = queue.pop_front() {
            visit(vertex);
            for &(next, _) in &self.out[vertex] {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
    }

    /// BFS parent pointers from `start`; `None` for unreached vertices.
    pub(crate) fn bfs_parents(&self, start: usize) -> Vec<Option<usize>> {
        let mut parent = vec![None; self.len()];
        let mut visited = vec![false; self.len()];
        visited[start] = true;
        let mut queue = VecDeque::from([start]);
        while let Some(vertex) = queue.pop_front() {
            for &(next, _) in &self.out[vertex] {
                if !visited[next] {
                    visited[next] = true;
                    parent[next] = Some(vertex);
                    queue.push_back(next);
                }
            }
        }
        parent
    }

    /// Number of vertices reachable from `start`, including itself.
    pub(crate) fn reach_count(&self, start: usize) -> usize {
        let mut visited = vec![false; self.len()];
        let mut count = 0;
        self.bfs_visit(start, &mut visited, |_| count += 1);
        count
    }

    /// Same vertices with every edge reversed.
    pub(crate) fn reversed(&self) -> Self {
        let mut out = vec![Vec::new(); self.len()];
        for (from, entries) in self.out.iter().enumerate() {
            for &(to, weight) in entries {
                out[to].push((from, weight));
            }
        }
        Self { out }
    }
}

/// Walks parent pointers back from `end` and returns the `start..=end` path.
pub(crate) fn trace_path(parent: &[Option<usize>], start: usize, end: usize) -> Vec<usize> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        match parent[current] {
            Some(prev) => {
                path.push(prev);
                current = prev;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}

impl<V, W> Graph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Weight,
{
    /// Index view following stored edge orientation.
    pub(crate) fn indexed(&self) -> IndexedGraph<W> {
        let out = self
            .adjacency_list()
            .values()
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|(neighbor, weight)| {
                        self.index_of(neighbor).map(|idx| (idx, *weight))
                    })
                    .collect()
            })
            .collect();
        IndexedGraph { out }
    }

    /// Index view ignoring direction.
    ///
    /// Undirected graphs already store both orientations; directed graphs get
    /// a reversed copy of every non-loop edge appended.
    pub(crate) fn undirected_view(&self) -> IndexedGraph<W> {
        let mut view = self.indexed();
        if self.is_directed() {
            let reversed = view.reversed();
            for (vertex, entries) in reversed.out.into_iter().enumerate() {
                view.out[vertex].extend(entries.into_iter().filter(|&(n, _)| n != vertex));
            }
        }
        view
    }

    pub(crate) fn to_vertices(&self, indices: &[usize]) -> Vec<V> {
        indices
            .iter()
            .filter_map(|&idx| self.vertex_at(idx).cloned())
            .collect()
    }
}
