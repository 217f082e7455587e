//! Value types shared by the graph algorithms.

use std::fmt::Debug;
use std::ops::Add;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};

/// Per-vertex result map, ordered by vertex insertion order.
pub type VertexMap<V, T> = IndexMap<V, T, FxBuildHasher>;

/// Numeric edge weight.
///
/// `infinity()` is the "no edge / unreachable" sentinel: `MAX` for integers,
/// `INFINITY` for floats. [`Weight::sum`] of two finite weights is always
/// finite, saturating at `MAX - 1` (integers) or the largest finite value
/// (floats), so an overflowing path cost is never mistaken for an
/// unreachable vertex. An edge stored with the sentinel weight itself is
/// treated as impassable.
pub trait Weight: Copy + PartialOrd + Add<Output = Self> + Debug {
    /// Additive identity.
    fn zero() -> Self;
    /// Weight of an edge in an unweighted graph.
    fn one() -> Self;
    /// The unreachable sentinel.
    fn infinity() -> Self;

    /// Returns true for the unreachable sentinel.
    fn is_infinite(self) -> bool;

    /// Adds two weights, yielding `infinity()` if either operand is infinite.
    #[must_use]
    fn sum(self, other: Self) -> Self {
        if self.is_infinite() || other.is_infinite() {
            Self::infinity()
        } else {
            self + other
        }
    }

    /// Returns true if the weight is below zero.
    fn is_negative(self) -> bool {
        self < Self::zero()
    }
}

macro_rules! impl_int_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    0
                }
                fn one() -> Self {
                    1
                }
                fn infinity() -> Self {
                    <$t>::MAX
                }
                fn is_infinite(self) -> bool {
                    self == <$t>::MAX
                }
                fn sum(self, other: Self) -> Self {
                    if self.is_infinite() || other.is_infinite() {
                        return <$t>::MAX;
                    }
                    let total = self.saturating_add(other);
                    if total == <$t>::MAX {
                        <$t>::MAX - 1
                    } else {
                        total
                    }
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    0.0
                }
                fn one() -> Self {
                    1.0
                }
                fn infinity() -> Self {
                    <$t>::INFINITY
                }
                fn is_infinite(self) -> bool {
                    self == <$t>::INFINITY
                }
                fn sum(self, other: Self) -> Self {
                    if self.is_infinite() || other.is_infinite() {
                        return <$t>::INFINITY;
                    }
                    let total = self + other;
                    if total == <$t>::INFINITY {
                        <$t>::MAX
                    } else {
                        total
                    }
                }
            }
        )*
    };
}

impl_int_weight!(i32, i64, u32, u64);
impl_float_weight!(f32, f64);

/// A weighted edge between two vertices.
///
/// For undirected graphs `from`/`to` only record the orientation in which the
/// edge was reported.
///
/// # Example
///
/// ```rust
/// use graphkit_core::graph::Edge;
///
/// let edge = Edge::new("a", "b", 3);
/// assert_eq!(edge.from, "a");
/// assert_eq!(edge.weight, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<V, W> {
    /// Source vertex.
    pub from: V,
    /// Destination vertex.
    pub to: V,
    /// Edge weight.
    pub weight: W,
}

impl<V, W> Edge<V, W> {
    /// Creates a new edge.
    #[must_use]
    pub fn new(from: V, to: V, weight: W) -> Self {
        Self { from, to, weight }
    }

    /// Returns true if both endpoints are the same vertex.
    #[must_use]
    pub fn is_self_loop(&self) -> bool
    where
        V: PartialEq,
    {
        self.from == self.to
    }
}

impl<V, W: Weight> Edge<V, W> {
    /// Creates an edge with unit weight.
    #[must_use]
    pub fn unit(from: V, to: V) -> Self {
        Self::new(from, to, W::one())
    }
}

impl<V, W> From<(V, V, W)> for Edge<V, W> {
    fn from((from, to, weight): (V, V, W)) -> Self {
        Self::new(from, to, weight)
    }
}

/// One side of a bipartite two-coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// First side (index 0).
    Red,
    /// Second side (index 1).
    Blue,
}

impl Color {
    /// Returns the other color.
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Self::Red => Self::Blue,
            Self::Blue => Self::Red,
        }
    }

    /// Returns 0 for `Red` and 1 for `Blue`.
    #[must_use]
    pub fn as_index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Blue => 1,
        }
    }
}
