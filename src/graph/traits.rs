use num_traits::{CheckedAdd, Float, Zero};
use ordered_float::OrderedFloat;
use std::fmt::Debug;
use std::hash::Hash;

/// Edge weight usable by the shortest path algorithms.
///
/// Distances are accumulated with [`Weight::checked_sum`], so bounded integer
/// types report overflow instead of wrapping. Float weights go through
/// `ordered_float::OrderedFloat` to get a total order.
pub trait Weight: Copy + Ord + Zero + Debug {
    /// `self + other`, or `None` when the sum can't be represented
    fn checked_sum(self, other: Self) -> Option<Self>;

    fn is_negative(self) -> bool {
        self < Self::zero()
    }

    /// False for values that can't label an edge at all (NaN, infinity)
    fn is_finite(self) -> bool {
        true
    }
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl<F> Weight for OrderedFloat<F>
where
    F: Float + Debug,
{
    fn checked_sum(self, other: Self) -> Option<Self> {
        let sum = self + other;
        sum.0.is_finite().then_some(sum)
    }

    fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

/// Rejects weights that can't label an edge: negative, NaN or infinite.
pub(crate) fn check_edge_weight<E, W>(from: &E, to: &E, weight: W) -> crate::Result<()>
where
    E: Debug + ?Sized,
    W: Weight,
{
    if weight.is_negative() {
        return Err(crate::Error::NegativeWeight {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            weight: format!("{:?}", weight),
        });
    }
    if !weight.is_finite() {
        return Err(crate::Error::NonFiniteWeight {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            weight: format!("{:?}", weight),
        });
    }
    Ok(())
}

/// Opaque node identifier, e.g. a short string or a grid coordinate
pub trait Node: Clone + Eq + Hash + Debug {}

impl<T> Node for T where T: Clone + Eq + Hash + Debug {}

/// Trait representing a weighted directed graph over dense vertex indices
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex, in insertion order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;
}

/// Trait for mutable graph operations addressed by node label
pub trait MutableGraph<N, W>: Graph<W>
where
    N: Node,
    W: Weight,
{
    /// Adds a vertex for `label` and returns its index.
    /// Adding a label that already exists returns the existing index.
    fn add_vertex(&mut self, label: N) -> usize;

    /// Adds a directed edge, creating missing endpoints.
    /// An existing edge has its weight replaced. Negative, NaN and infinite
    /// weights are rejected.
    fn add_edge(&mut self, from: N, to: N, weight: W) -> crate::Result<()>;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: &N, to: &N) -> bool;
}
