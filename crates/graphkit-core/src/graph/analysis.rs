//! Structural analysis: connectivity, components, cycles, topological order
//! and bipartiteness.
//!
//! Every routine here is iterative and works on the dense index view, so
//! deep or long graphs cannot exhaust the call stack.

use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

use super::indexed::IndexedGraph;
use super::store::Graph;
use super::types::{Color, VertexMap, Weight};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

impl<V, W> Graph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Weight,
{
    // ── Connectivity ───────────────────────────────────────────────────

    /// Returns true if every vertex is reachable from every other one.
    ///
    /// Directed graphs are checked for strong connectivity; use
    /// [`Graph::is_connected_with`] to ask for weak connectivity instead.
    /// Graphs with zero or one vertex are connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.is_connected_with(true)
    }

    /// Connectivity check with an explicit notion for directed graphs.
    ///
    /// `strong == true` requires mutual reachability; `strong == false` only
    /// requires the graph to be connected once directions are ignored.
    /// Undirected graphs give the same answer either way.
    #[must_use]
    pub fn is_connected_with(&self, strong: bool) -> bool {
        if !self.is_directed() {
            let n = self.vertex_count();
            return n <= 1 || self.indexed().reach_count(0) == n;
        }
        if strong {
            self.is_strongly_connected()
        } else {
            self.is_weakly_connected()
        }
    }

    /// Returns true if every vertex reaches every other along edge directions.
    #[must_use]
    pub fn is_strongly_connected(&self) -> bool {
        let n = self.vertex_count();
        if n <= 1 {
            return true;
        }
        let view = self.indexed();
        view.reach_count(0) == n && view.reversed().reach_count(0) == n
    }

    /// Returns true if the graph is connected when directions are ignored.
    #[must_use]
    pub fn is_weakly_connected(&self) -> bool {
        let n = self.vertex_count();
        n <= 1 || self.undirected_view().reach_count(0) == n
    }

    /// Partitions the vertices into connected components.
    ///
    /// Directed graphs yield their weakly connected components. Components
    /// are listed in order of their first vertex; each lists its vertices in
    /// DFS discovery order.
    #[must_use]
    pub fn find_connected_components(&self) -> Vec<Vec<V>> {
        let view = self.undirected_view();
        let mut visited = vec![false; view.len()];
        let mut components = Vec::new();
        for start in 0..view.len() {
            if visited[start] {
                continue;
            }
            let mut component = Vec::new();
            view.dfs_visit(start, &mut visited, |idx| component.push(idx));
            components.push(self.to_vertices(&component));
        }
        tracing::debug!(
            vertices = view.len(),
            components = components.len(),
            "Computed connected components"
        );
        components
    }

    /// Strongly connected components (Kosaraju).
    ///
    /// For undirected graphs these coincide with the connected components.
    #[must_use]
    pub fn strongly_connected_components(&self) -> Vec<Vec<V>> {
        let view = self.indexed();
        let finish = finish_order(&view);
        let reversed = view.reversed();
        let mut visited = vec![false; view.len()];
        let mut components = Vec::new();
        for &start in finish.iter().rev() {
            if visited[start] {
                continue;
            }
            let mut component = Vec::new();
            reversed.dfs_visit(start, &mut visited, |idx| component.push(idx));
            components.push(self.to_vertices(&component));
        }
        components
    }

    // ── Cycles ─────────────────────────────────────────────────────────

    /// Returns true if the graph contains a cycle.
    ///
    /// Self-loops are cycles. In undirected graphs two parallel edges between
    /// the same pair also form a cycle.
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        let view = self.indexed();
        if self.is_directed() {
            has_cycle_directed(&view)
        } else {
            has_cycle_undirected(&view)
        }
    }

    // ── Topological order ──────────────────────────────────────────────

    /// Topological order by Kahn's algorithm.
    ///
    /// Sources are taken in vertex insertion order. Returns an empty vector
    /// for cyclic graphs and for undirected graphs, which have no topological
    /// order.
    #[must_use]
    pub fn topological_sort(&self) -> Vec<V> {
        if !self.is_directed() {
            return Vec::new();
        }
        let view = self.indexed();
        let mut in_degree = vec![0usize; view.len()];
        for entries in &view.out {
            for &(to, _) in entries {
                in_degree[to] += 1;
            }
        }

        let mut queue: VecDeque<usize> = (0..view.len()).filter(|&v| in_degree[v] == 0).collect();
        let mut order = Vec::with_capacity(view.len());
        while let Some(vertex) = queue.pop_front() {
            order.push(vertex);
            for &(to, _) in &view.out[vertex] {
                in_degree[to] -= 1;
                if in_degree[to] == 0 {
                    queue.push_back(to);
                }
            }
        }

        if order.len() < view.len() {
            tracing::debug!(
                sorted = order.len(),
                vertices = view.len(),
                "Graph has a cycle, no topological order"
            );
            return Vec::new();
        }
        self.to_vertices(&order)
    }

    /// Topological order by reversed DFS finish time.
    ///
    /// Same contract as [`Graph::topological_sort`]; the order may differ.
    #[must_use]
    pub fn topological_sort_dfs(&self) -> Vec<V> {
        if !self.is_directed() {
            return Vec::new();
        }
        let view = self.indexed();
        if has_cycle_directed(&view) {
            return Vec::new();
        }
        let mut order = finish_order(&view);
        order.reverse();
        self.to_vertices(&order)
    }

    // ── Bipartiteness ──────────────────────────────────────────────────

    /// Returns true if the vertices can be two-colored with no edge joining
    /// equal colors. Directions are ignored.
    #[must_use]
    pub fn is_bipartite(&self) -> bool {
        self.two_coloring().is_some()
    }

    /// Returns a valid two-coloring, or an empty map if none exists.
    ///
    /// The first vertex of every component is colored [`Color::Red`].
    #[must_use]
    pub fn bipartite_coloring(&self) -> VertexMap<V, Color> {
        self.two_coloring()
            .map(|colors| {
                self.adjacency_list()
                    .keys()
                    .cloned()
                    .zip(colors)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn two_coloring(&self) -> Option<Vec<Color>> {
        let view = self.undirected_view();
        let mut colors: Vec<Option<Color>> = vec![None; view.len()];
        for start in 0..view.len() {
            if colors[start].is_some() {
                continue;
            }
            colors[start] = Some(Color::Red);
            let mut queue = VecDeque::from([start]);
            while let Some(vertex) = queue.pop_front() {
                let color = colors[vertex]?;
                for &(next, _) in &view.out[vertex] {
                    match colors[next] {
                        None => {
                            colors[next] = Some(color.flip());
                            queue.push_back(next);
                        }
                        Some(other) if other == color => return None,
                        Some(_) => {}
                    }
                }
            }
        }
        colors.into_iter().collect()
    }
}

/// Vertices in DFS finish order over all roots taken in index order.
fn finish_order<W: Weight>(view: &IndexedGraph<W>) -> Vec<usize> {
    let mut visited = vec![false; view.len()];
    let mut finish = Vec::with_capacity(view.len());
    for root in 0..view.len() {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        let mut stack = vec![(root, 0usize)];
        while let Some(top) = stack.last_mut() {
            let (vertex, cursor) = *top;
            if let Some(&(next, _)) = view.out[vertex].get(cursor) {
                top.1 += 1;
                if !visited[next] {
                    visited[next] = true;
                    stack.push((next, 0));
                }
            } else {
                finish.push(vertex);
                stack.pop();
            }
        }
    }
    finish
}

/// Three-color DFS: an edge into an in-progress vertex is a back edge.
fn has_cycle_directed<W: Weight>(view: &IndexedGraph<W>) -> bool {
    let mut marks = vec![Mark::Unvisited; view.len()];
    for root in 0..view.len() {
        if marks[root] != Mark::Unvisited {
            continue;
        }
        marks[root] = Mark::InProgress;
        let mut stack = vec![(root, 0usize)];
        while let Some(top) = stack.last_mut() {
            let (vertex, cursor) = *top;
            if let Some(&(next, _)) = view.out[vertex].get(cursor) {
                top.1 += 1;
                match marks[next] {
                    Mark::InProgress => return true,
                    Mark::Unvisited => {
                        marks[next] = Mark::InProgress;
                        stack.push((next, 0));
                    }
                    Mark::Done => {}
                }
            } else {
                marks[vertex] = Mark::Done;
                stack.pop();
            }
        }
    }
    false
}

/// Parent-tracking DFS: reaching a visited vertex other than through the
/// tree edge to the parent closes a cycle.
fn has_cycle_undirected<W: Weight>(view: &IndexedGraph<W>) -> bool {
    struct Frame {
        vertex: usize,
        parent: Option<usize>,
        cursor: usize,
        parent_edge_seen: bool,
    }

    let mut visited = vec![false; view.len()];
    for root in 0..view.len() {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        let mut stack = vec![Frame {
            vertex: root,
            parent: None,
            cursor: 0,
            parent_edge_seen: false,
        }];
        while let Some(frame) = stack.last_mut() {
            let Some(&(next, _)) = view.out[frame.vertex].get(frame.cursor) else {
                stack.pop();
                continue;
            };
            frame.cursor += 1;
            if next == frame.vertex {
                return true;
            }
            if Some(next) == frame.parent && !frame.parent_edge_seen {
                frame.parent_edge_seen = true;
                continue;
            }
            if visited[next] {
                return true;
            }
            visited[next] = true;
            let parent = Some(frame.vertex);
            stack.push(Frame {
                vertex: next,
                parent,
                cursor: 0,
                parent_edge_seen: false,
            });
        }
    }
    false
}
