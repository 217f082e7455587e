//! Structural graph isomorphism.
//!
//! Weights are ignored; parallel edges and self-loops must match in
//! multiplicity. Intended for small graphs: the search is a backtracking
//! matcher pruned by degrees, exponential in the worst case.

use std::fmt::Debug;
use std::hash::Hash;

use super::indexed::IndexedGraph;
use super::store::Graph;
use super::types::Weight;

/// Edge multiplicities between every ordered pair of vertex indices.
struct Multiplicities {
    counts: Vec<Vec<u32>>,
    out_degree: Vec<u32>,
    in_degree: Vec<u32>,
}

impl Multiplicities {
    fn new<W: Weight>(view: &IndexedGraph<W>) -> Self {
        let n = view.len();
        let mut counts = vec![vec![0u32; n]; n];
        for (from, entries) in view.out.iter().enumerate() {
            for &(to, _) in entries {
                counts[from][to] += 1;
            }
        }
        let out_degree = counts.iter().map(|row| row.iter().sum::<u32>()).collect();
        let in_degree = (0..n)
            .map(|j| counts.iter().map(|row| row[j]).sum::<u32>())
            .collect();
        Self {
            counts,
            out_degree,
            in_degree,
        }
    }

    fn signature(&self, v: usize) -> (u32, u32, u32) {
        (self.out_degree[v], self.in_degree[v], self.counts[v][v])
    }

    fn sorted_signatures(&self) -> Vec<(u32, u32, u32)> {
        let mut signatures: Vec<_> = (0..self.counts.len()).map(|v| self.signature(v)).collect();
        signatures.sort_unstable();
        signatures
    }
}

struct Matcher<'a> {
    left: &'a Multiplicities,
    right: &'a Multiplicities,
    order: Vec<usize>,
    mapping: Vec<Option<usize>>,
    used: Vec<bool>,
}

impl Matcher<'_> {
    fn extend(&mut self, depth: usize) -> bool {
        let Some(&v) = self.order.get(depth) else {
            return true;
        };
        for candidate in 0..self.used.len() {
            if self.used[candidate] || !self.consistent(v, candidate, depth) {
                continue;
            }
            self.mapping[v] = Some(candidate);
            self.used[candidate] = true;
            if self.extend(depth + 1) {
                return true;
            }
            self.mapping[v] = None;
            self.used[candidate] = false;
        }
        false
    }

    fn consistent(&self, v: usize, candidate: usize, depth: usize) -> bool {
        if self.left.signature(v) != self.right.signature(candidate) {
            return false;
        }
        self.order[..depth].iter().all(|&u| {
            let Some(mapped) = self.mapping[u] else {
                return false;
            };
            self.left.counts[v][u] == self.right.counts[candidate][mapped]
                && self.left.counts[u][v] == self.right.counts[mapped][candidate]
        })
    }
}

/// Returns true if some bijection between the vertex sets preserves every
/// edge multiplicity.
#[must_use]
pub fn are_isomorphic<V1, V2, W1, W2>(g1: &Graph<V1, W1>, g2: &Graph<V2, W2>) -> bool
where
    V1: Eq + Hash + Clone + Debug,
    V2: Eq + Hash + Clone + Debug,
    W1: Weight,
    W2: Weight,
{
    if g1.is_directed() != g2.is_directed()
        || g1.vertex_count() != g2.vertex_count()
        || g1.edge_count() != g2.edge_count()
    {
        return false;
    }

    let left = Multiplicities::new(&g1.indexed());
    let right = Multiplicities::new(&g2.indexed());
    if left.sorted_signatures() != right.sorted_signatures() {
        return false;
    }

    // Most constrained vertices first.
    let mut order: Vec<usize> = (0..g1.vertex_count()).collect();
    order.sort_by_key(|&v| std::cmp::Reverse(left.out_degree[v] + left.in_degree[v]));

    let n = g1.vertex_count();
    let mut matcher = Matcher {
        left: &left,
        right: &right,
        order,
        mapping: vec![None; n],
        used: vec![false; n],
    };
    let found = matcher.extend(0);
    tracing::debug!(vertices = n, found, "Isomorphism search finished");
    found
}
